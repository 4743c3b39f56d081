use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::usage::{AnalysisBudget, BudgetError};

use super::domain::{
    ActionItem, AnalysisId, BuyerProfile, Claim, MarketContext, PropertySnapshot, TrustLabel,
};
use super::merge::{merge_snapshots, resolve_effective_price};
use super::report::AnalysisReport;
use super::repository::{AnalysisRecord, AnalysisRepository, AnalysisStatus, RepositoryError};
use super::scoring::{AnalysisContext, FitScoreResult, FitScoringEngine, ScoringConfig};
use super::trust::summarize_claims;

/// Inbound analysis request: the two snapshot sources before merging plus
/// everything the upstream extraction pipeline already resolved.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub address: String,
    pub record_snapshot: Option<PropertySnapshot>,
    pub inferred_snapshot: Option<PropertySnapshot>,
    pub market: Option<MarketContext>,
    pub claims: Vec<Claim>,
    pub action_items: Vec<ActionItem>,
    pub trust_score: u8,
    pub trust_label: TrustLabel,
    pub list_price: Option<f64>,
}

/// Facade composing the repository, the scoring engine, and the analysis
/// budget gauge.
pub struct AnalysisService<R> {
    repository: Arc<R>,
    budget: Arc<dyn AnalysisBudget>,
    engine: FitScoringEngine,
}

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("lst-{id:06}"))
}

impl<R> AnalysisService<R>
where
    R: AnalysisRepository + 'static,
{
    pub fn new(repository: Arc<R>, budget: Arc<dyn AnalysisBudget>, config: ScoringConfig) -> Self {
        Self {
            repository,
            budget,
            engine: FitScoringEngine::new(config),
        }
    }

    /// Store a new analysis request as a pending record. The two snapshot
    /// sources are merged here, once, so every consumer sees the same
    /// resolved property facts.
    pub fn submit(&self, request: AnalysisRequest) -> Result<AnalysisRecord, AnalysisServiceError> {
        let snapshot = merge_snapshots(
            request.record_snapshot.as_ref(),
            request.inferred_snapshot.as_ref(),
        );

        let record = AnalysisRecord {
            id: next_analysis_id(),
            address: request.address,
            snapshot,
            market: request.market,
            claims: request.claims,
            action_items: request.action_items,
            trust_score: request.trust_score,
            trust_label: request.trust_label,
            list_price: request.list_price,
            status: AnalysisStatus::Pending,
            fit: None,
        };

        let stored = self.repository.insert(record)?;
        info!(id = %stored.id.0, address = %stored.address, "analysis submitted");
        Ok(stored)
    }

    /// Score a pending analysis against a buyer profile (or none, for an
    /// unpersonalized read) and persist the outcome, driving the record
    /// through analyzing to complete. A denied budget reservation parks the
    /// record in the error state instead of dropping it.
    pub fn run(
        &self,
        id: &AnalysisId,
        profile: Option<&BuyerProfile>,
    ) -> Result<FitScoreResult, AnalysisServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        if let Err(denied) = self.budget.check_and_reserve(1) {
            record.status = AnalysisStatus::Error;
            self.repository.update(record)?;
            return Err(denied.into());
        }

        record.status = AnalysisStatus::Analyzing;
        self.repository.update(record.clone())?;

        let ctx = AnalysisContext {
            snapshot: record.snapshot.clone(),
            market: record.market.clone(),
            trust_score: record.trust_score,
            trust_label: record.trust_label,
            list_price: record.list_price,
            claims: record.claims.clone(),
            action_items: record.action_items.clone(),
        };

        let fit = self.engine.score(profile, &ctx);
        self.budget.record(1);

        record.fit = Some(fit.clone());
        record.status = AnalysisStatus::Complete;
        self.repository.update(record)?;

        info!(
            id = %id.0,
            score = fit.overall_score,
            label = fit.label.label(),
            "analysis complete"
        );
        Ok(fit)
    }

    /// Fetch a stored record for API responses.
    pub fn get(&self, id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Assemble the presentation-ready report for a completed analysis.
    pub fn report(&self, id: &AnalysisId) -> Result<AnalysisReport, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let fit = record.fit.ok_or(AnalysisServiceError::NotScored)?;

        Ok(AnalysisReport {
            address: record.address,
            fit,
            trust_score: record.trust_score,
            trust_label: record.trust_label,
            claim_summaries: summarize_claims(&record.claims),
            effective_price: resolve_effective_price(
                record.list_price,
                record.snapshot.as_ref(),
            ),
            claims: record.claims,
            market: record.market,
            action_items: record.action_items,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Budget(#[from] BudgetError),
    #[error("analysis has not been scored yet")]
    NotScored,
}
