//! Composite weighting, hard caps, and label derivation.

use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::rules::{RawCategory, ScoreSignals};

/// Overall verdict, a pure function of score and hard-cap flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitLabel {
    GreatMatch,
    GoodMatch,
    Fair,
    PoorMatch,
    Dealbreaker,
}

impl FitLabel {
    pub const fn label(self) -> &'static str {
        match self {
            FitLabel::GreatMatch => "great match",
            FitLabel::GoodMatch => "good match",
            FitLabel::Fair => "fair",
            FitLabel::PoorMatch => "poor match",
            FitLabel::Dealbreaker => "dealbreaker",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            FitLabel::GreatMatch => {
                "This property lines up strongly with your stated needs."
            }
            FitLabel::GoodMatch => {
                "This property matches most of your needs, with a few gaps worth checking."
            }
            FitLabel::Fair => "This property is a partial match; weigh the gaps carefully.",
            FitLabel::PoorMatch => "This property misses several of your stated needs.",
            FitLabel::Dealbreaker => {
                "A dealbreaker or accessibility blocker makes this property a poor candidate as-is."
            }
        }
    }
}

/// Effective category weights in breakdown order. Lifestyle absorbs the
/// remainder of the weight budget, floored; the result is normalized so the
/// weights used in the average always sum to one, even when the floor
/// engages.
pub(crate) fn category_weights(has_stated_needs: bool, config: &ScoringConfig) -> [f32; 6] {
    let accessibility = if has_stated_needs {
        config.accessibility_weight_active
    } else {
        config.accessibility_weight_inactive
    };

    let fixed_sum = config.budget_weight
        + config.size_weight
        + accessibility
        + config.feature_weight
        + config.trust_weight;
    let lifestyle = (1.0 - fixed_sum).max(config.lifestyle_weight_floor);

    let raw = [
        config.budget_weight,
        config.size_weight,
        accessibility,
        config.feature_weight,
        config.trust_weight,
        lifestyle,
    ];

    let total: f32 = raw.iter().sum();
    raw.map(|weight| weight / total)
}

/// Weighted average of the category scores, rounded to the nearest integer.
pub(crate) fn composite_score(breakdown: &[RawCategory], weights: &[f32; 6]) -> u8 {
    let weighted: f32 = breakdown
        .iter()
        .zip(weights)
        .map(|(category, weight)| category.score * weight)
        .sum();

    weighted.round().clamp(0.0, 100.0) as u8
}

/// Apply the hard caps after the weighted average. Caps only ever lower the
/// score.
pub(crate) fn apply_caps(score: u8, signals: &ScoreSignals, config: &ScoringConfig) -> u8 {
    let mut capped = score;

    if signals.dealbreaker_violated || signals.accessibility_blocker {
        capped = capped.min(config.dealbreaker_cap);
    }

    if let Some(pct_over) = signals.pct_over_stretch {
        if pct_over > config.over_stretch_severe_pct {
            capped = capped.min(config.over_stretch_severe_cap);
        } else if pct_over > config.over_stretch_moderate_pct {
            capped = capped.min(config.over_stretch_moderate_cap);
        }
    }

    capped.min(100)
}

/// Any hard-cap trigger forces the dealbreaker label regardless of the
/// numeric score; otherwise the label follows the fixed thresholds.
pub(crate) fn derive_label(score: u8, signals: &ScoreSignals, config: &ScoringConfig) -> FitLabel {
    if signals.dealbreaker_violated || signals.accessibility_blocker {
        return FitLabel::Dealbreaker;
    }

    if score >= config.great_match_threshold {
        FitLabel::GreatMatch
    } else if score >= config.good_match_threshold {
        FitLabel::GoodMatch
    } else if score >= config.fair_threshold {
        FitLabel::Fair
    } else {
        FitLabel::PoorMatch
    }
}
