//! Tri-state feature predicates over the merged snapshot.
//!
//! Structured records can only decide a handful of features; everything
//! else stays `Unknown` and is left to the claims/evidence pipeline rather
//! than guessed at here.

use crate::analysis::domain::{BuyerProfile, Feature, PropertySnapshot};

use super::config;
use super::{FeatureImportance, FeatureMatch, MatchStatus};

/// What the snapshot can say about one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeatureStatus {
    Present,
    Absent,
    Unknown,
}

/// Decide a feature from snapshot fields alone. Only single-story, garage,
/// HOA presence, construction year, and lot size are decidable; listing-level
/// amenities (pool, solar, schools) cannot be verified from records.
pub(crate) fn feature_status(
    feature: Feature,
    snapshot: Option<&PropertySnapshot>,
) -> FeatureStatus {
    let Some(snapshot) = snapshot else {
        return FeatureStatus::Unknown;
    };

    match feature {
        Feature::SingleStory => match snapshot.stories {
            Some(stories) if stories <= 1 => FeatureStatus::Present,
            Some(_) => FeatureStatus::Absent,
            None => FeatureStatus::Unknown,
        },
        Feature::Garage => match snapshot.garage.as_deref() {
            Some(descriptor) if !descriptor.trim().is_empty() => FeatureStatus::Present,
            _ => FeatureStatus::Unknown,
        },
        Feature::NoHoa => match snapshot.hoa {
            Some(fee) if fee > 0.0 => FeatureStatus::Absent,
            Some(_) => FeatureStatus::Present,
            None => FeatureStatus::Unknown,
        },
        Feature::NewConstruction => match snapshot.year_built {
            Some(year) if year >= config::NEW_CONSTRUCTION_CUTOFF_YEAR => FeatureStatus::Present,
            Some(_) => FeatureStatus::Absent,
            None => FeatureStatus::Unknown,
        },
        Feature::Yard => match snapshot.lot_sqft {
            Some(lot) if lot >= config::YARD_MIN_LOT_SQFT => FeatureStatus::Present,
            Some(_) => FeatureStatus::Absent,
            None => FeatureStatus::Unknown,
        },
        _ => FeatureStatus::Unknown,
    }
}

pub(crate) struct FeatureOutcome {
    pub score: f32,
    pub details: String,
    pub matched: Vec<FeatureMatch>,
    pub missed: Vec<FeatureMatch>,
    pub dealbreaker_violated: bool,
}

/// Score the feature-match category: penalties for confirmed and
/// unverifiable must-have misses, light penalties for nice-to-have misses,
/// and a severe penalty for any violated dealbreaker.
pub(crate) fn evaluate(
    profile: &BuyerProfile,
    snapshot: Option<&PropertySnapshot>,
) -> FeatureOutcome {
    let mut score = 100.0_f32;
    let mut matched = Vec::new();
    let mut missed = Vec::new();
    let mut dealbreaker_violated = false;
    let mut unverifiable = 0usize;

    for feature in &profile.must_haves {
        match feature_status(*feature, snapshot) {
            FeatureStatus::Present => matched.push(FeatureMatch {
                feature: *feature,
                label: feature.label().to_string(),
                importance: FeatureImportance::MustHave,
                status: MatchStatus::Matched,
                explanation: format!("{} confirmed from property records", feature.label()),
            }),
            FeatureStatus::Absent => {
                score -= config::MUST_HAVE_MISSING_PENALTY;
                missed.push(FeatureMatch {
                    feature: *feature,
                    label: feature.label().to_string(),
                    importance: FeatureImportance::MustHave,
                    status: MatchStatus::Missing,
                    explanation: format!("records show no {}", feature.label()),
                });
            }
            FeatureStatus::Unknown => {
                score -= config::MUST_HAVE_UNKNOWN_PENALTY;
                unverifiable += 1;
                missed.push(FeatureMatch {
                    feature: *feature,
                    label: feature.label().to_string(),
                    importance: FeatureImportance::MustHave,
                    status: MatchStatus::Unknown,
                    explanation: format!(
                        "{} could not be verified from available records",
                        feature.label()
                    ),
                });
            }
        }
    }

    for feature in &profile.nice_to_haves {
        match feature_status(*feature, snapshot) {
            FeatureStatus::Present => matched.push(FeatureMatch {
                feature: *feature,
                label: feature.label().to_string(),
                importance: FeatureImportance::NiceToHave,
                status: MatchStatus::Matched,
                explanation: format!("{} confirmed from property records", feature.label()),
            }),
            FeatureStatus::Absent => {
                score -= config::NICE_TO_HAVE_MISSING_PENALTY;
                missed.push(FeatureMatch {
                    feature: *feature,
                    label: feature.label().to_string(),
                    importance: FeatureImportance::NiceToHave,
                    status: MatchStatus::Missing,
                    explanation: format!("records show no {}", feature.label()),
                });
            }
            FeatureStatus::Unknown => {}
        }
    }

    for feature in &profile.dealbreakers {
        match feature_status(*feature, snapshot) {
            // Confirmed failure of the flagged condition is a violation;
            // e.g. `no_hoa` flagged and the records show a monthly fee.
            FeatureStatus::Absent => {
                score -= config::DEALBREAKER_PENALTY;
                dealbreaker_violated = true;
                missed.push(FeatureMatch {
                    feature: *feature,
                    label: feature.label().to_string(),
                    importance: FeatureImportance::Dealbreaker,
                    status: MatchStatus::Violated,
                    explanation: format!(
                        "dealbreaker: records contradict {}",
                        feature.label()
                    ),
                });
            }
            FeatureStatus::Present => matched.push(FeatureMatch {
                feature: *feature,
                label: feature.label().to_string(),
                importance: FeatureImportance::Dealbreaker,
                status: MatchStatus::Matched,
                explanation: format!("dealbreaker clear: {} confirmed", feature.label()),
            }),
            FeatureStatus::Unknown => {}
        }
    }

    let total_required = profile.must_haves.len();
    let details = if total_required == 0 && profile.nice_to_haves.is_empty() {
        "No feature preferences stated.".to_string()
    } else {
        let confirmed = matched
            .iter()
            .filter(|entry| entry.importance == FeatureImportance::MustHave)
            .count();
        format!(
            "{confirmed} of {total_required} must-haves confirmed, {unverifiable} unverifiable from records."
        )
    };

    FeatureOutcome {
        score: score.clamp(0.0, 100.0),
        details,
        matched,
        missed,
        dealbreaker_violated,
    }
}
