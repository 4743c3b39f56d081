//! Fit scoring engine: weighted category scores, feature matching,
//! accessibility flags, and prioritized suggestions for one buyer and one
//! property. Deterministic and total; missing data degrades to documented
//! fallback scores instead of failing.

pub mod accessibility;
mod config;
mod features;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::FitLabel;

use serde::{Deserialize, Serialize};

use super::domain::{
    AccessibilityNeed, ActionItem, BuyerProfile, Claim, Feature, MarketContext, Priority,
    PropertySnapshot, TrustLabel,
};

/// Everything the engine consumes besides the buyer profile. Produced by
/// the analysis pipeline: merged snapshot, market backdrop, upstream trust
/// verdicts, and the claim list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisContext {
    pub snapshot: Option<PropertySnapshot>,
    pub market: Option<MarketContext>,
    pub trust_score: u8,
    pub trust_label: TrustLabel,
    pub list_price: Option<f64>,
    pub claims: Vec<Claim>,
    pub action_items: Vec<ActionItem>,
}

/// Stateless engine applying the scoring configuration to a profile and
/// analysis context.
pub struct FitScoringEngine {
    config: ScoringConfig,
}

impl Default for FitScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl FitScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Compute the full fit result. A `None` profile signals "no
    /// personalization" and scores every category at its neutral value.
    pub fn score(&self, profile: Option<&BuyerProfile>, ctx: &AnalysisContext) -> FitScoreResult {
        let (raw, signals, artifacts) = rules::score_fit(profile, ctx);

        let has_stated_needs = profile
            .map(|profile| profile.accessibility.has_stated_needs())
            .unwrap_or(false);
        let weights = policy::category_weights(has_stated_needs, &self.config);

        let weighted = policy::composite_score(&raw, &weights);
        let overall_score = policy::apply_caps(weighted, &signals, &self.config);
        let label = policy::derive_label(overall_score, &signals, &self.config);

        let breakdown = raw
            .into_iter()
            .zip(weights)
            .map(|(category, weight)| FitCategory {
                name: category.name,
                score: category.score.round().clamp(0.0, 100.0) as u8,
                weight,
                details: category.details,
            })
            .collect();

        FitScoreResult {
            overall_score,
            label,
            summary: label.summary().to_string(),
            breakdown,
            matched_features: artifacts.matched_features,
            missed_features: artifacts.missed_features,
            accessibility_flags: artifacts.accessibility_flags,
            suggestions: artifacts.suggestions,
        }
    }
}

/// Engine output: composite score, verdict, and the full audit trail of
/// category scores, feature matches, flags, and suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitScoreResult {
    pub overall_score: u8,
    pub label: FitLabel,
    pub summary: String,
    pub breakdown: Vec<FitCategory>,
    pub matched_features: Vec<FeatureMatch>,
    pub missed_features: Vec<FeatureMatch>,
    pub accessibility_flags: Vec<AccessibilityFlag>,
    pub suggestions: Vec<Suggestion>,
}

/// One scored category with the effective weight used in the average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitCategory {
    pub name: CategoryName,
    pub score: u8,
    pub weight: f32,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryName {
    BudgetFit,
    SizeLayout,
    Accessibility,
    FeatureMatch,
    TrustRisk,
    LifestyleFit,
}

impl CategoryName {
    pub const fn label(self) -> &'static str {
        match self {
            CategoryName::BudgetFit => "Budget Fit",
            CategoryName::SizeLayout => "Size & Layout",
            CategoryName::Accessibility => "Accessibility",
            CategoryName::FeatureMatch => "Feature Match",
            CategoryName::TrustRisk => "Trust & Risk",
            CategoryName::LifestyleFit => "Lifestyle Fit",
        }
    }
}

/// One feature the engine checked, with how sure it could be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatch {
    pub feature: Feature,
    pub label: String,
    pub importance: FeatureImportance,
    pub status: MatchStatus,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureImportance {
    MustHave,
    NiceToHave,
    Dealbreaker,
}

impl FeatureImportance {
    pub const fn label(self) -> &'static str {
        match self {
            FeatureImportance::MustHave => "must-have",
            FeatureImportance::NiceToHave => "nice-to-have",
            FeatureImportance::Dealbreaker => "dealbreaker",
        }
    }
}

/// `Unknown` is deliberately distinct from `Missing`: downstream display
/// can say "we couldn't verify this" instead of implying a false negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Matched,
    Missing,
    Unknown,
    Violated,
}

impl MatchStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MatchStatus::Matched => "matched",
            MatchStatus::Missing => "missing",
            MatchStatus::Unknown => "unknown",
            MatchStatus::Violated => "violated",
        }
    }
}

/// One accessibility finding for a stated need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityFlag {
    pub need: AccessibilityNeed,
    pub label: String,
    pub severity: FlagSeverity,
    pub issue: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Blocker,
    Concern,
    Manageable,
    Clear,
}

impl FlagSeverity {
    /// Sort rank; most severe first.
    pub const fn rank(self) -> u8 {
        match self {
            FlagSeverity::Blocker => 0,
            FlagSeverity::Concern => 1,
            FlagSeverity::Manageable => 2,
            FlagSeverity::Clear => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FlagSeverity::Blocker => "blocker",
            FlagSeverity::Concern => "concern",
            FlagSeverity::Manageable => "manageable",
            FlagSeverity::Clear => "clear",
        }
    }
}

/// A concrete follow-up for the buyer, grouped by what kind of action it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    LookFor,
    WatchOut,
    AskAbout,
    Modify,
}

impl SuggestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SuggestionCategory::LookFor => "look for",
            SuggestionCategory::WatchOut => "watch out",
            SuggestionCategory::AskAbout => "ask about",
            SuggestionCategory::Modify => "modify",
        }
    }
}
