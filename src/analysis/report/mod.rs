//! Report shaping: turns engine output and claim summaries into the nested
//! view a presentation layer consumes. Pure data transformation; flags sort
//! by severity, suggestions by priority, and percentage deltas are derived
//! for display only.

mod views;

pub use views::{
    ActionItemView, CategoryView, ClaimSummaryView, ClaimView, FeatureView, FitReportView,
    FlagView, MarketSectionView, SuggestionView, TrustSectionView,
};

use std::cmp::Reverse;

use super::domain::{ActionItem, Claim, MarketContext, TrustLabel};
use super::scoring::{FeatureMatch, FitScoreResult};
use super::trust::CategorySummary;

/// Everything a rendered report needs, gathered by the analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub address: String,
    pub fit: FitScoreResult,
    pub trust_score: u8,
    pub trust_label: TrustLabel,
    pub claim_summaries: Vec<CategorySummary>,
    pub claims: Vec<Claim>,
    pub market: Option<MarketContext>,
    pub effective_price: Option<f64>,
    pub action_items: Vec<ActionItem>,
}

impl AnalysisReport {
    /// Shape the report for presentation.
    pub fn view(&self) -> FitReportView {
        let categories = self
            .fit
            .breakdown
            .iter()
            .map(|category| CategoryView {
                name: category.name.label(),
                score: category.score,
                weight_pct: (category.weight * 100.0).round() as u8,
                details: category.details.clone(),
            })
            .collect();

        let mut flags: Vec<_> = self.fit.accessibility_flags.clone();
        flags.sort_by_key(|flag| flag.severity.rank());
        let accessibility_flags = flags
            .into_iter()
            .map(|flag| FlagView {
                need: flag.need.label(),
                severity: flag.severity.label(),
                issue: flag.issue,
                recommendation: flag.recommendation,
            })
            .collect();

        let mut suggestions: Vec<_> = self.fit.suggestions.clone();
        suggestions.sort_by_key(|suggestion| suggestion.priority.rank());
        let suggestions = suggestions
            .into_iter()
            .map(|suggestion| SuggestionView {
                category: suggestion.category.label(),
                title: suggestion.title,
                description: suggestion.description,
                priority: suggestion.priority.label(),
            })
            .collect();

        let claim_categories = self
            .claim_summaries
            .iter()
            .map(|summary| ClaimSummaryView {
                category: summary.category.label(),
                total: summary.total,
                verified: summary.verified,
                unverified: summary.unverified,
                contradictions: summary.contradictions,
                verified_pct: (summary.total > 0).then(|| {
                    ((summary.verified as f64 / summary.total as f64) * 100.0).round() as u8
                }),
            })
            .collect();

        let mut claims: Vec<_> = self.claims.clone();
        claims.sort_by_key(|claim| Reverse(claim.severity));
        let claim_views = claims
            .into_iter()
            .map(|claim| ClaimView {
                category: claim.category.label(),
                statement: claim.statement,
                verdict: claim.verdict.label(),
                severity: claim.severity.label(),
                confidence: claim.confidence,
                explanation: claim.explanation,
                evidence_count: claim.evidence.len(),
            })
            .collect();

        let mut action_items: Vec<_> = self.action_items.clone();
        action_items.sort_by_key(|item| item.priority.rank());
        let action_items = action_items
            .into_iter()
            .map(|item| ActionItemView {
                title: item.title,
                detail: item.detail,
                priority: item.priority.label(),
            })
            .collect();

        FitReportView {
            address: self.address.clone(),
            overall_score: self.fit.overall_score,
            label: self.fit.label.label(),
            summary: self.fit.summary.clone(),
            categories,
            matched_features: self.fit.matched_features.iter().map(feature_view).collect(),
            missed_features: self.fit.missed_features.iter().map(feature_view).collect(),
            accessibility_flags,
            suggestions,
            trust: TrustSectionView {
                score: self.trust_score,
                label: self.trust_label.label(),
                categories: claim_categories,
                claims: claim_views,
            },
            market: self.market.as_ref().map(|market| market_view(market, self.effective_price)),
            action_items,
        }
    }
}

fn feature_view(entry: &FeatureMatch) -> FeatureView {
    FeatureView {
        feature: entry.feature,
        label: entry.label.clone(),
        importance: entry.importance.label(),
        status: entry.status.label(),
        explanation: entry.explanation.clone(),
    }
}

fn market_view(market: &MarketContext, effective_price: Option<f64>) -> MarketSectionView {
    MarketSectionView {
        effective_price,
        median_area_price: market.median_area_price,
        price_vs_median_pct: pct_diff(effective_price, market.median_area_price),
        price_per_sqft: market.price_per_sqft,
        area_median_ppsf: market.area_median_ppsf,
        ppsf_vs_area_pct: pct_diff(market.price_per_sqft, market.area_median_ppsf),
        avg_days_on_market: market.avg_days_on_market,
        inventory_level: market.inventory_level.map(|level| level.label()),
        comparable_count: market.comparables.len(),
    }
}

/// Signed percentage difference of `value` against `baseline`, when both
/// are present and the baseline is positive.
fn pct_diff(value: Option<f64>, baseline: Option<f64>) -> Option<f32> {
    match (value, baseline) {
        (Some(value), Some(baseline)) if baseline > 0.0 => {
            Some((((value - baseline) / baseline) * 100.0) as f32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::{
        AccessibilityNeed, ClaimCategory, ClaimSeverity, ClaimSource, ClaimVerdict, Priority,
    };
    use crate::analysis::scoring::{
        AccessibilityFlag, FitLabel, FlagSeverity, Suggestion, SuggestionCategory,
    };
    use crate::analysis::trust::summarize_claims;

    fn report() -> AnalysisReport {
        let fit = FitScoreResult {
            overall_score: 72,
            label: FitLabel::GoodMatch,
            summary: FitLabel::GoodMatch.summary().to_string(),
            breakdown: Vec::new(),
            matched_features: Vec::new(),
            missed_features: Vec::new(),
            accessibility_flags: vec![
                AccessibilityFlag {
                    need: AccessibilityNeed::Respiratory,
                    label: AccessibilityNeed::Respiratory.label().to_string(),
                    severity: FlagSeverity::Clear,
                    issue: "recent construction".to_string(),
                    recommendation: "standard inspection".to_string(),
                },
                AccessibilityFlag {
                    need: AccessibilityNeed::MobilityLimited,
                    label: AccessibilityNeed::MobilityLimited.label().to_string(),
                    severity: FlagSeverity::Concern,
                    issue: "two stories".to_string(),
                    recommendation: "check main floor".to_string(),
                },
            ],
            suggestions: vec![
                Suggestion {
                    category: SuggestionCategory::LookFor,
                    title: "low".to_string(),
                    description: String::new(),
                    priority: Priority::Low,
                },
                Suggestion {
                    category: SuggestionCategory::WatchOut,
                    title: "high".to_string(),
                    description: String::new(),
                    priority: Priority::High,
                },
            ],
        };

        let claims = vec![
            claim("minor staging exaggeration", ClaimSeverity::Info),
            claim("permit history incomplete", ClaimSeverity::Critical),
        ];

        AnalysisReport {
            address: "412 Alder Ct".to_string(),
            fit,
            trust_score: 64,
            trust_label: TrustLabel::MostlyConsistent,
            claim_summaries: summarize_claims(&claims),
            claims,
            market: Some(MarketContext {
                median_area_price: Some(400_000.0),
                ..MarketContext::default()
            }),
            effective_price: Some(440_000.0),
            action_items: Vec::new(),
        }
    }

    fn claim(statement: &str, severity: ClaimSeverity) -> Claim {
        Claim {
            category: ClaimCategory::DisclosureAmbiguity,
            statement: statement.to_string(),
            source: ClaimSource::Listing,
            verdict: ClaimVerdict::Unverified,
            confidence: 0.5,
            explanation: "flagged during extraction".to_string(),
            severity,
            evidence: Vec::new(),
        }
    }

    #[test]
    fn flags_sort_most_severe_first() {
        let view = report().view();
        assert_eq!(view.accessibility_flags[0].severity, "concern");
        assert_eq!(view.accessibility_flags[1].severity, "clear");
    }

    #[test]
    fn suggestions_sort_by_priority() {
        let view = report().view();
        assert_eq!(view.suggestions[0].title, "high");
        assert_eq!(view.suggestions[1].title, "low");
    }

    #[test]
    fn market_view_derives_percentage_difference() {
        let view = report().view();
        let market = view.market.expect("market context supplied");
        let delta = market.price_vs_median_pct.expect("both prices known");
        assert!((delta - 10.0).abs() < 0.01);
    }

    #[test]
    fn trust_section_always_carries_six_categories() {
        let view = report().view();
        assert_eq!(view.trust.categories.len(), 6);
        let ambiguity = view
            .trust
            .categories
            .iter()
            .find(|summary| summary.category == "disclosure ambiguity")
            .expect("fixed category present");
        assert_eq!(ambiguity.total, 2);
        assert_eq!(ambiguity.verified_pct, Some(0));
    }

    #[test]
    fn claims_render_most_severe_first() {
        let view = report().view();
        assert_eq!(view.trust.claims[0].severity, "critical");
        assert_eq!(view.trust.claims[1].severity, "info");
    }
}
