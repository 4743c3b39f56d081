use serde::{Deserialize, Serialize};

/// Every weight, threshold, and cap the fit engine applies. The numeric
/// values are product-tuning decisions; keeping them in one struct means
/// retuning never requires hunting through the rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub budget_weight: f32,
    pub size_weight: f32,
    /// Accessibility weight when the buyer declared at least one need
    /// beyond the sentinel.
    pub accessibility_weight_active: f32,
    /// Accessibility weight for buyers with no stated needs.
    pub accessibility_weight_inactive: f32,
    pub feature_weight: f32,
    pub trust_weight: f32,
    /// Lifestyle absorbs the remainder of the weight budget, floored here.
    pub lifestyle_weight_floor: f32,

    /// Overall score ceiling once a dealbreaker is violated or an
    /// accessibility blocker is raised.
    pub dealbreaker_cap: u8,
    /// Ceiling when the effective price exceeds the stretch budget by more
    /// than `over_stretch_severe_pct`.
    pub over_stretch_severe_cap: u8,
    pub over_stretch_severe_pct: f32,
    /// Ceiling for the milder `over_stretch_moderate_pct` overshoot.
    pub over_stretch_moderate_cap: u8,
    pub over_stretch_moderate_pct: f32,

    pub great_match_threshold: u8,
    pub good_match_threshold: u8,
    pub fair_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            budget_weight: 0.25,
            size_weight: 0.20,
            accessibility_weight_active: 0.30,
            accessibility_weight_inactive: 0.05,
            feature_weight: 0.15,
            trust_weight: 0.10,
            lifestyle_weight_floor: 0.05,

            dealbreaker_cap: 25,
            over_stretch_severe_cap: 30,
            over_stretch_severe_pct: 20.0,
            over_stretch_moderate_cap: 40,
            over_stretch_moderate_pct: 10.0,

            great_match_threshold: 75,
            good_match_threshold: 60,
            fair_threshold: 40,
        }
    }
}

// Per-rule penalty magnitudes and fallback scores. Grouped here so the
// whole tuning surface lives in one module.

/// Budget category score when no price source is available.
pub(crate) const BUDGET_MISSING_PRICE_SCORE: f32 = 40.0;
/// Budget category score when the buyer stated no ceiling.
pub(crate) const BUDGET_NO_CEILING_SCORE: f32 = 70.0;
/// Score at the comfortable ceiling as price enters the stretch band.
pub(crate) const BUDGET_STRETCH_ENTRY_SCORE: f32 = 60.0;
/// Points lost across the full stretch band.
pub(crate) const BUDGET_STRETCH_DROP: f32 = 40.0;
/// Base score once the price clears the stretch ceiling.
pub(crate) const BUDGET_OVER_STRETCH_BASE: f32 = 15.0;

/// Size category score when no snapshot exists at all.
pub(crate) const SIZE_MISSING_SNAPSHOT_SCORE: f32 = 35.0;
pub(crate) const BED_SHORTFALL_PENALTY: f32 = 25.0;
pub(crate) const BATH_SHORTFALL_PENALTY: f32 = 20.0;
pub(crate) const SQFT_SHORTFALL_PENALTY_MAX: f32 = 35.0;
pub(crate) const BEDS_UNKNOWN_PENALTY: f32 = 10.0;
pub(crate) const BATHS_UNKNOWN_PENALTY: f32 = 5.0;
pub(crate) const SQFT_UNKNOWN_PENALTY: f32 = 10.0;

pub(crate) const WHEELCHAIR_MULTI_STORY_PENALTY: f32 = 50.0;
pub(crate) const MOBILITY_MULTI_STORY_PENALTY: f32 = 25.0;
pub(crate) const STORIES_UNKNOWN_PENALTY: f32 = 15.0;
pub(crate) const SENSORY_NOISE_PENALTY: f32 = 25.0;
pub(crate) const RESPIRATORY_AGE_PENALTY: f32 = 15.0;
/// Construction before this year correlates with ventilation and mold risk.
pub(crate) const RESPIRATORY_YEAR_CUTOFF: i32 = 1990;
pub(crate) const AGING_MULTI_STORY_PENALTY: f32 = 20.0;

pub(crate) const MUST_HAVE_MISSING_PENALTY: f32 = 18.0;
pub(crate) const MUST_HAVE_UNKNOWN_PENALTY: f32 = 8.0;
pub(crate) const NICE_TO_HAVE_MISSING_PENALTY: f32 = 5.0;
pub(crate) const DEALBREAKER_PENALTY: f32 = 50.0;

pub(crate) const LIFESTYLE_BASE_SCORE: f32 = 65.0;
pub(crate) const MULTIGEN_BEDS_BONUS: f32 = 15.0;
/// Bedrooms needed before the multigenerational bonus applies.
pub(crate) const MULTIGEN_BEDS_MIN: u32 = 4;
pub(crate) const RETIRING_SINGLE_STORY_BONUS: f32 = 15.0;
pub(crate) const ELDERLY_MULTI_STORY_PENALTY: f32 = 20.0;
pub(crate) const ELDERLY_SINGLE_STORY_BONUS: f32 = 10.0;

/// Neutral scores for requests scored without a buyer profile.
pub(crate) const NO_PROFILE_BUDGET_SCORE: f32 = 70.0;
pub(crate) const NO_PROFILE_LIFESTYLE_SCORE: f32 = 65.0;

/// Year-built cutoff for the `new_construction` feature predicate.
pub(crate) const NEW_CONSTRUCTION_CUTOFF_YEAR: i32 = 2020;
/// Smallest lot treated as having a usable yard.
pub(crate) const YARD_MIN_LOT_SQFT: u32 = 3000;
