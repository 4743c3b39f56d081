//! Listing analysis core: domain model, snapshot merging, claim roll-ups,
//! the fit scoring engine, report shaping, and the service facade that ties
//! them to a repository.

pub mod domain;
pub mod merge;
pub mod report;
pub mod repository;
pub mod scoring;
pub mod service;
pub mod trust;

#[cfg(test)]
mod tests;

pub use domain::{
    AccessibilityNeed, AccessibilityProfile, ActionItem, AnalysisId, BudgetProfile, BuyerProfile,
    BuyerSituation, Claim, ClaimCategory, ClaimSeverity, ClaimSource, ClaimVerdict,
    CommuteMode, CommutePlan, ComparableProperty, Evidence, EvidenceKind, Feature,
    HouseholdMember, HouseholdProfile, InventoryLevel, LifestyleProfile, MarketContext,
    OutdoorPriority, PetType, Priority, PropertySnapshot, TrustLabel,
};
pub use merge::{merge_snapshots, resolve_effective_price};
pub use report::{AnalysisReport, FitReportView};
pub use repository::{
    AnalysisRecord, AnalysisRepository, AnalysisStatus, AnalysisStatusView, RepositoryError,
};
pub use scoring::{
    AccessibilityFlag, AnalysisContext, CategoryName, FeatureImportance, FeatureMatch, FitCategory,
    FitLabel, FitScoreResult, FitScoringEngine, FlagSeverity, MatchStatus, ScoringConfig,
    Suggestion, SuggestionCategory,
};
pub use service::{AnalysisRequest, AnalysisService, AnalysisServiceError};
pub use trust::{summarize_claims, CategorySummary};
