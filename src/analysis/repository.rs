use serde::{Deserialize, Serialize};

use super::domain::{ActionItem, AnalysisId, Claim, MarketContext, PropertySnapshot, TrustLabel};
use super::scoring::FitScoreResult;

/// Stored analysis: the merged snapshot, claims, and follow-ups for one
/// address, created once per request and mutated only by status
/// transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: AnalysisId,
    pub address: String,
    pub snapshot: Option<PropertySnapshot>,
    pub market: Option<MarketContext>,
    pub claims: Vec<Claim>,
    pub action_items: Vec<ActionItem>,
    pub trust_score: u8,
    pub trust_label: TrustLabel,
    pub list_price: Option<f64>,
    pub status: AnalysisStatus,
    pub fit: Option<FitScoreResult>,
}

impl AnalysisRecord {
    pub fn status_view(&self) -> AnalysisStatusView {
        AnalysisStatusView {
            id: self.id.clone(),
            address: self.address.clone(),
            status: self.status.label(),
            overall_score: self.fit.as_ref().map(|fit| fit.overall_score),
        }
    }
}

/// Lifecycle of an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Pending,
    Analyzing,
    Complete,
    Error,
}

impl AnalysisStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AnalysisStatus::Pending => "pending",
            AnalysisStatus::Analyzing => "analyzing",
            AnalysisStatus::Complete => "complete",
            AnalysisStatus::Error => "error",
        }
    }
}

/// Sanitized projection of a record's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisStatusView {
    pub id: AnalysisId,
    pub address: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<u8>,
}

/// Storage abstraction so the service can be exercised in isolation. The
/// backing store is an opaque key-value concern outside this crate.
pub trait AnalysisRepository: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;
    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
