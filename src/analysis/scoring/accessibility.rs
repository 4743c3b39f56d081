//! Accessibility requirement table and per-need rules.
//!
//! Each declared need is checked against the snapshot's `stories` and
//! `year_built` fields and against neighborhood-fit claims; every need
//! yields at least one flag so the report never silently drops a stated
//! requirement.

use crate::analysis::domain::{
    AccessibilityNeed, BuyerProfile, Claim, ClaimCategory, Priority, PropertySnapshot,
};

use super::config;
use super::{AccessibilityFlag, FlagSeverity, Suggestion, SuggestionCategory};

/// Static requirement entry: what a need demands of a property and the
/// sentence the wizard and report show for it.
#[derive(Debug, Clone, Copy)]
pub struct AccessibilityRequirement {
    pub need: AccessibilityNeed,
    pub required_attributes: &'static [&'static str],
    pub summary: &'static str,
}

/// The full requirement table, one row per non-sentinel need.
pub const REQUIREMENTS: [AccessibilityRequirement; 6] = [
    AccessibilityRequirement {
        need: AccessibilityNeed::WheelchairFull,
        required_attributes: &["single-story layout", "step-free entry", "36-inch doorways"],
        summary: "Full-time wheelchair use requires single-level living with step-free entry and widened doorways.",
    },
    AccessibilityRequirement {
        need: AccessibilityNeed::MobilityLimited,
        required_attributes: &["minimal stairs", "step-free entry"],
        summary: "Limited mobility calls for minimal stairs and a manageable entry.",
    },
    AccessibilityRequirement {
        need: AccessibilityNeed::ChronicFatigue,
        required_attributes: &["single-level living preferred"],
        summary: "Chronic fatigue favors single-level layouts that avoid repeated stair use.",
    },
    AccessibilityRequirement {
        need: AccessibilityNeed::AgingInPlace,
        required_attributes: &["main-floor bedroom and bath", "low-maintenance layout"],
        summary: "Aging in place needs a main-floor bedroom and bathroom, or space to add them.",
    },
    AccessibilityRequirement {
        need: AccessibilityNeed::SensorySensitivity,
        required_attributes: &["quiet surroundings"],
        summary: "Sensory sensitivity requires quiet surroundings away from heavy traffic corridors.",
    },
    AccessibilityRequirement {
        need: AccessibilityNeed::Respiratory,
        required_attributes: &["modern ventilation", "no mold history"],
        summary: "Respiratory conditions call for sound ventilation and no moisture history.",
    },
];

/// Look up the table row for a need. The sentinel has no row.
pub fn requirement_for(need: AccessibilityNeed) -> Option<&'static AccessibilityRequirement> {
    REQUIREMENTS.iter().find(|entry| entry.need == need)
}

/// Keywords that mark a neighborhood-fit claim as a noise concern.
const NOISE_KEYWORDS: [&str; 4] = ["noise", "traffic", "highway", "airport"];

pub(crate) struct AccessibilityOutcome {
    pub score: f32,
    pub details: String,
    pub flags: Vec<AccessibilityFlag>,
    pub suggestions: Vec<Suggestion>,
    pub blocker: bool,
}

fn flag(
    need: AccessibilityNeed,
    severity: FlagSeverity,
    issue: impl Into<String>,
    recommendation: impl Into<String>,
) -> AccessibilityFlag {
    AccessibilityFlag {
        need,
        label: need.label().to_string(),
        severity,
        issue: issue.into(),
        recommendation: recommendation.into(),
    }
}

/// Score the accessibility category for a profile with stated needs.
pub(crate) fn evaluate(
    profile: &BuyerProfile,
    snapshot: Option<&PropertySnapshot>,
    claims: &[Claim],
) -> AccessibilityOutcome {
    let mut score = 100.0_f32;
    let mut flags = Vec::new();
    let mut suggestions = Vec::new();
    let mut blocker = false;

    let stories = snapshot.and_then(|snap| snap.stories);
    let year_built = snapshot.and_then(|snap| snap.year_built);

    for need in profile.accessibility.stated_needs() {
        match need {
            AccessibilityNeed::WheelchairFull => match stories {
                Some(count) if count >= 2 => {
                    score -= config::WHEELCHAIR_MULTI_STORY_PENALTY;
                    blocker = true;
                    let requirement = requirement_for(need)
                        .map(|entry| entry.summary)
                        .unwrap_or_default();
                    flags.push(flag(
                        need,
                        FlagSeverity::Blocker,
                        format!("Property has {count} stories. {requirement}"),
                        "A residential elevator or platform lift typically runs $30,000-$60,000 installed; budget accordingly or keep looking.",
                    ));
                }
                Some(_) => flags.push(flag(
                    need,
                    FlagSeverity::Manageable,
                    "Single-story layout confirmed.",
                    "Verify doorway widths (36 inches) and a step-free entry during the showing.",
                )),
                None => {
                    score -= config::STORIES_UNKNOWN_PENALTY;
                    flags.push(flag(
                        need,
                        FlagSeverity::Concern,
                        "Story count is missing from available records.",
                        "Confirm the property is single-level before scheduling a visit.",
                    ));
                }
            },
            AccessibilityNeed::MobilityLimited | AccessibilityNeed::ChronicFatigue => {
                match stories {
                    Some(count) if count >= 2 => {
                        score -= config::MOBILITY_MULTI_STORY_PENALTY;
                        flags.push(flag(
                            need,
                            FlagSeverity::Concern,
                            format!("Property has {count} stories, which means daily stair use."),
                            "Check whether a bedroom and full bath exist on the main floor.",
                        ));
                    }
                    Some(_) => flags.push(flag(
                        need,
                        FlagSeverity::Manageable,
                        "Single-story layout confirmed.",
                        "Verify entry steps and interior thresholds during the showing.",
                    )),
                    None => {
                        score -= config::STORIES_UNKNOWN_PENALTY;
                        flags.push(flag(
                            need,
                            FlagSeverity::Concern,
                            "Story count is missing from available records.",
                            "Ask the listing agent for a floor plan before visiting.",
                        ));
                    }
                }
            }
            AccessibilityNeed::AgingInPlace => match stories {
                Some(count) if count >= 2 => {
                    score -= config::AGING_MULTI_STORY_PENALTY;
                    flags.push(flag(
                        need,
                        FlagSeverity::Concern,
                        format!("Multi-story layout ({count} stories) complicates aging in place."),
                        "Look for a main-floor room that could become a primary suite.",
                    ));
                    suggestions.push(Suggestion {
                        category: SuggestionCategory::Modify,
                        title: "Estimate a main-floor conversion".to_string(),
                        description: "Converting a main-floor den to a bedroom with an adjacent bath typically runs $15,000-$40,000 depending on plumbing.".to_string(),
                        priority: Priority::Medium,
                    });
                }
                Some(_) => flags.push(flag(
                    need,
                    FlagSeverity::Manageable,
                    "Single-story layout suits aging in place.",
                    "Plan for grab bars and lever hardware; both are inexpensive retrofits.",
                )),
                None => {
                    score -= config::STORIES_UNKNOWN_PENALTY;
                    flags.push(flag(
                        need,
                        FlagSeverity::Concern,
                        "Story count is missing from available records.",
                        "Confirm the layout supports main-floor living.",
                    ));
                }
            },
            AccessibilityNeed::SensorySensitivity => {
                let noise_claim = claims.iter().find(|claim| {
                    claim.category == ClaimCategory::NeighborhoodFit
                        && contains_noise_keyword(claim)
                });

                match noise_claim {
                    Some(claim) => {
                        score -= config::SENSORY_NOISE_PENALTY;
                        flags.push(flag(
                            need,
                            FlagSeverity::Concern,
                            format!("Neighborhood analysis raised a noise concern: {}", claim.statement),
                            "Visit at rush hour and in the evening to judge the actual noise level.",
                        ));
                    }
                    None => flags.push(flag(
                        need,
                        FlagSeverity::Clear,
                        "No noise or traffic concerns surfaced in the neighborhood analysis.",
                        "Still worth a visit at different times of day.",
                    )),
                }
            }
            AccessibilityNeed::Respiratory => match year_built {
                Some(year) if year < config::RESPIRATORY_YEAR_CUTOFF => {
                    score -= config::RESPIRATORY_AGE_PENALTY;
                    flags.push(flag(
                        need,
                        FlagSeverity::Concern,
                        format!("Built in {year}; construction before {} correlates with ventilation and mold risk.", config::RESPIRATORY_YEAR_CUTOFF),
                        "Add an HVAC and mold check to the standard inspection.",
                    ));
                }
                Some(_) => flags.push(flag(
                    need,
                    FlagSeverity::Clear,
                    "Construction is recent enough that ventilation standards apply.",
                    "A standard inspection should cover air handling.",
                )),
                None => flags.push(flag(
                    need,
                    FlagSeverity::Manageable,
                    "Construction year is missing from available records.",
                    "Request an air-quality check alongside the inspection.",
                )),
            },
            AccessibilityNeed::None => {}
        }
    }

    let details = if blocker {
        "A stated accessibility need is likely blocked by this property.".to_string()
    } else if flags
        .iter()
        .any(|entry| entry.severity == FlagSeverity::Concern)
    {
        "Some accessibility needs require verification or carry concerns.".to_string()
    } else {
        "Stated accessibility needs look compatible with this property.".to_string()
    };

    AccessibilityOutcome {
        score: score.clamp(0.0, 100.0),
        details,
        flags,
        suggestions,
        blocker,
    }
}

fn contains_noise_keyword(claim: &Claim) -> bool {
    let statement = claim.statement.to_lowercase();
    let explanation = claim.explanation.to_lowercase();
    NOISE_KEYWORDS
        .iter()
        .any(|keyword| statement.contains(keyword) || explanation.contains(keyword))
}
