//! Per-category claim roll-ups. The scalar trust score is produced upstream
//! and only passes through this crate; this module derives the verdict
//! counts used for display and as the fit engine's trust signal.

use serde::{Deserialize, Serialize};

use super::domain::{Claim, ClaimCategory, ClaimVerdict};

/// Verdict counts for one claim category. `total` includes marketing-only
/// claims, which carry no dedicated count of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: ClaimCategory,
    pub total: usize,
    pub verified: usize,
    pub unverified: usize,
    pub contradictions: usize,
}

/// Summarize claims into exactly one entry per fixed category, in the
/// canonical order. Iterating the enumeration rather than the claim list
/// guarantees a stable, complete breakdown even when upstream produced no
/// claims for a category. Confidence and severity are not consulted here.
pub fn summarize_claims(claims: &[Claim]) -> Vec<CategorySummary> {
    ClaimCategory::ALL
        .into_iter()
        .map(|category| {
            let in_category = claims.iter().filter(|claim| claim.category == category);

            let mut summary = CategorySummary {
                category,
                total: 0,
                verified: 0,
                unverified: 0,
                contradictions: 0,
            };

            for claim in in_category {
                summary.total += 1;
                match claim.verdict {
                    ClaimVerdict::Verified => summary.verified += 1,
                    ClaimVerdict::Unverified => summary.unverified += 1,
                    ClaimVerdict::Contradiction => summary.contradictions += 1,
                    ClaimVerdict::Marketing => {}
                }
            }

            summary
        })
        .collect()
}
