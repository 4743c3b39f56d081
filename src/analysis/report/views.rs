use serde::Serialize;

use crate::analysis::domain::Feature;

/// Fully shaped report for a presentation layer. Display only; anything
/// that affects a score belongs in the scoring engine, not here.
#[derive(Debug, Clone, Serialize)]
pub struct FitReportView {
    pub address: String,
    pub overall_score: u8,
    pub label: &'static str,
    pub summary: String,
    pub categories: Vec<CategoryView>,
    pub matched_features: Vec<FeatureView>,
    pub missed_features: Vec<FeatureView>,
    pub accessibility_flags: Vec<FlagView>,
    pub suggestions: Vec<SuggestionView>,
    pub trust: TrustSectionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketSectionView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_items: Vec<ActionItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub name: &'static str,
    pub score: u8,
    /// Effective weight as a whole percentage, for display.
    pub weight_pct: u8,
    pub details: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureView {
    pub feature: Feature,
    pub label: String,
    pub importance: &'static str,
    pub status: &'static str,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlagView {
    pub need: &'static str,
    pub severity: &'static str,
    pub issue: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionView {
    pub category: &'static str,
    pub title: String,
    pub description: String,
    pub priority: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrustSectionView {
    pub score: u8,
    pub label: &'static str,
    pub categories: Vec<ClaimSummaryView>,
    /// Individual claims, most severe first.
    pub claims: Vec<ClaimView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaimView {
    pub category: &'static str,
    pub statement: String,
    pub verdict: &'static str,
    pub severity: &'static str,
    pub confidence: f32,
    pub explanation: String,
    pub evidence_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaimSummaryView {
    pub category: &'static str,
    pub total: usize,
    pub verified: usize,
    pub unverified: usize,
    pub contradictions: usize,
    /// Share of claims verified, rounded; absent when the category is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_pct: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSectionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_area_price: Option<f64>,
    /// Effective price relative to the area median, as a signed percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_vs_median_pct: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_sqft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_median_ppsf: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppsf_vs_area_pct: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_days_on_market: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<&'static str>,
    pub comparable_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionItemView {
    pub title: String,
    pub detail: String,
    pub priority: &'static str,
}
