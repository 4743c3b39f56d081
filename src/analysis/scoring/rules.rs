//! The six category scorers. Each returns a 0-100 score plus a details
//! string; hard-cap triggers are collected into `ScoreSignals` for the
//! policy layer to apply after the weighted average.

use crate::analysis::domain::{BuyerProfile, BuyerSituation, HouseholdMember, Priority, PropertySnapshot};
use crate::analysis::merge::resolve_effective_price;

use super::config;
use super::{
    accessibility, features, AnalysisContext, CategoryName, Suggestion, SuggestionCategory,
};

/// Hard-cap triggers carried from the rules to the policy layer.
#[derive(Debug, Default)]
pub(crate) struct ScoreSignals {
    pub dealbreaker_violated: bool,
    pub accessibility_blocker: bool,
    pub pct_over_stretch: Option<f32>,
}

/// Everything the rules produce besides the raw category scores.
#[derive(Default)]
pub(crate) struct RuleArtifacts {
    pub matched_features: Vec<super::FeatureMatch>,
    pub missed_features: Vec<super::FeatureMatch>,
    pub accessibility_flags: Vec<super::AccessibilityFlag>,
    pub suggestions: Vec<Suggestion>,
}

pub(crate) struct RawCategory {
    pub name: CategoryName,
    pub score: f32,
    pub details: String,
}

pub(crate) fn score_fit(
    profile: Option<&BuyerProfile>,
    ctx: &AnalysisContext,
) -> (Vec<RawCategory>, ScoreSignals, RuleArtifacts) {
    let mut signals = ScoreSignals::default();
    let mut artifacts = RuleArtifacts::default();
    let snapshot = ctx.snapshot.as_ref();

    let (budget_score, budget_details) = score_budget(
        profile,
        resolve_effective_price(ctx.list_price, snapshot),
        &mut signals,
        &mut artifacts.suggestions,
    );

    let (size_score, size_details) = score_size(profile, snapshot);

    let (accessibility_score, accessibility_details) = match profile {
        Some(profile) if profile.accessibility.has_stated_needs() => {
            let outcome = accessibility::evaluate(profile, snapshot, &ctx.claims);
            signals.accessibility_blocker = outcome.blocker;
            artifacts.accessibility_flags = outcome.flags;
            artifacts.suggestions.extend(outcome.suggestions);
            (outcome.score, outcome.details)
        }
        _ => (100.0, "No accessibility needs declared.".to_string()),
    };

    let (feature_score, feature_details) = match profile {
        Some(profile) => {
            let outcome = features::evaluate(profile, snapshot);
            signals.dealbreaker_violated = outcome.dealbreaker_violated;
            artifacts.matched_features = outcome.matched;
            artifacts.missed_features = outcome.missed;
            (outcome.score, outcome.details)
        }
        None => (100.0, "No feature preferences stated.".to_string()),
    };

    let trust_details = format!(
        "Trust score {} ({}) carried from listing verification.",
        ctx.trust_score,
        ctx.trust_label.label()
    );

    let (lifestyle_score, lifestyle_details) =
        score_lifestyle(profile, snapshot, &mut artifacts.suggestions);

    pet_hoa_suggestion(profile, snapshot, &mut artifacts.suggestions);

    let breakdown = vec![
        RawCategory {
            name: CategoryName::BudgetFit,
            score: budget_score,
            details: budget_details,
        },
        RawCategory {
            name: CategoryName::SizeLayout,
            score: size_score,
            details: size_details,
        },
        RawCategory {
            name: CategoryName::Accessibility,
            score: accessibility_score,
            details: accessibility_details,
        },
        RawCategory {
            name: CategoryName::FeatureMatch,
            score: feature_score,
            details: feature_details,
        },
        RawCategory {
            name: CategoryName::TrustRisk,
            score: f32::from(ctx.trust_score).clamp(0.0, 100.0),
            details: trust_details,
        },
        RawCategory {
            name: CategoryName::LifestyleFit,
            score: lifestyle_score,
            details: lifestyle_details,
        },
    ];

    (breakdown, signals, artifacts)
}

fn score_budget(
    profile: Option<&BuyerProfile>,
    effective_price: Option<f64>,
    signals: &mut ScoreSignals,
    suggestions: &mut Vec<Suggestion>,
) -> (f32, String) {
    let Some(profile) = profile else {
        return (
            config::NO_PROFILE_BUDGET_SCORE,
            "No buyer profile; affordability not assessed.".to_string(),
        );
    };

    let Some(price) = effective_price else {
        // Neither rewarded nor fully penalized; missing data must not
        // fabricate a perfect or terrible budget score.
        return (
            config::BUDGET_MISSING_PRICE_SCORE,
            "No price data available.".to_string(),
        );
    };

    let Some(comfortable_max) = profile.budget.budget_max else {
        return (
            config::BUDGET_NO_CEILING_SCORE,
            format!("Effective price ${price:.0}; no budget ceiling provided."),
        );
    };

    if price <= comfortable_max {
        return (
            100.0,
            format!("Effective price ${price:.0} is within the ${comfortable_max:.0} budget."),
        );
    }

    let stretch_max = profile
        .budget
        .budget_stretch
        .filter(|stretch| *stretch > comfortable_max);

    if let Some(stretch) = stretch_max {
        if price <= stretch {
            let over_by = price - comfortable_max;
            let stretch_range = stretch - comfortable_max;
            let score = config::BUDGET_STRETCH_ENTRY_SCORE
                - ((over_by / stretch_range) as f32) * config::BUDGET_STRETCH_DROP;

            suggestions.push(Suggestion {
                category: SuggestionCategory::WatchOut,
                title: "Price is above your comfortable budget".to_string(),
                description: format!(
                    "${price:.0} sits ${over_by:.0} above your comfortable ceiling; it fits only by dipping into your stretch budget."
                ),
                priority: Priority::Medium,
            });

            return (
                score,
                format!(
                    "Effective price ${price:.0} is ${over_by:.0} above the comfortable budget, inside the stretch band."
                ),
            );
        }
    }

    let ceiling = stretch_max.unwrap_or(comfortable_max);
    let pct_over = (((price - ceiling) / ceiling) * 100.0) as f32;
    signals.pct_over_stretch = Some(pct_over);

    let score = (config::BUDGET_OVER_STRETCH_BASE - pct_over / 2.0).max(0.0);

    suggestions.push(Suggestion {
        category: SuggestionCategory::WatchOut,
        title: "Price exceeds your absolute budget".to_string(),
        description: format!(
            "${price:.0} is {pct_over:.0}% over your stretch ceiling of ${ceiling:.0}. A meaningful price cut or different property is needed."
        ),
        priority: Priority::High,
    });

    (
        score,
        format!("Effective price ${price:.0} exceeds the stretch budget by {pct_over:.0}%."),
    )
}

fn score_size(profile: Option<&BuyerProfile>, snapshot: Option<&PropertySnapshot>) -> (f32, String) {
    let Some(snapshot) = snapshot else {
        return (
            config::SIZE_MISSING_SNAPSHOT_SCORE,
            "No property details available to compare against size requirements.".to_string(),
        );
    };

    let Some(profile) = profile else {
        return (100.0, "No size requirements stated.".to_string());
    };

    let mut score = 100.0_f32;
    let mut notes: Vec<String> = Vec::new();

    if let Some(min_beds) = profile.lifestyle.min_beds {
        match snapshot.beds {
            Some(beds) if beds < min_beds => {
                let deficit = min_beds - beds;
                score -= config::BED_SHORTFALL_PENALTY * deficit as f32;
                notes.push(format!("{beds} bedrooms vs {min_beds} required"));
            }
            Some(_) => {}
            None => {
                // Uncertainty is cheaper than a confirmed miss.
                score -= config::BEDS_UNKNOWN_PENALTY;
                notes.push("bedroom count unknown".to_string());
            }
        }
    }

    if let Some(min_baths) = profile.lifestyle.min_baths {
        match snapshot.baths {
            Some(baths) if baths < min_baths => {
                score -= config::BATH_SHORTFALL_PENALTY;
                notes.push(format!("{baths} baths vs {min_baths} required"));
            }
            Some(_) => {}
            None => {
                score -= config::BATHS_UNKNOWN_PENALTY;
                notes.push("bath count unknown".to_string());
            }
        }
    }

    if let Some(min_sqft) = profile.lifestyle.min_sqft {
        match snapshot.sqft {
            Some(sqft) if sqft < min_sqft => {
                let shortfall = (min_sqft - sqft) as f32 / min_sqft as f32;
                score -= config::SQFT_SHORTFALL_PENALTY_MAX * shortfall.min(1.0);
                notes.push(format!("{sqft} sqft vs {min_sqft} required"));
            }
            Some(_) => {}
            None => {
                score -= config::SQFT_UNKNOWN_PENALTY;
                notes.push("square footage unknown".to_string());
            }
        }
    }

    let details = if notes.is_empty() {
        "Meets the stated size and layout requirements.".to_string()
    } else {
        format!("Size gaps: {}.", notes.join(", "))
    };

    (score.clamp(0.0, 100.0), details)
}

fn score_lifestyle(
    profile: Option<&BuyerProfile>,
    snapshot: Option<&PropertySnapshot>,
    suggestions: &mut Vec<Suggestion>,
) -> (f32, String) {
    let Some(profile) = profile else {
        return (
            config::NO_PROFILE_LIFESTYLE_SCORE,
            "No lifestyle information provided.".to_string(),
        );
    };

    let mut score = config::LIFESTYLE_BASE_SCORE;
    let mut notes: Vec<String> = Vec::new();

    let beds = snapshot.and_then(|snap| snap.beds);
    let stories = snapshot.and_then(|snap| snap.stories);

    if profile.situation == BuyerSituation::Multigenerational
        && beds.is_some_and(|count| count >= config::MULTIGEN_BEDS_MIN)
    {
        score += config::MULTIGEN_BEDS_BONUS;
        notes.push("bedroom count supports multigenerational living".to_string());
    }

    if profile.situation == BuyerSituation::Retiring && stories.is_some_and(|count| count <= 1) {
        score += config::RETIRING_SINGLE_STORY_BONUS;
        notes.push("single-story layout suits retirement plans".to_string());
    }

    if profile
        .household
        .members
        .contains(&HouseholdMember::ElderlyParent)
    {
        match stories {
            Some(count) if count >= 2 => {
                score -= config::ELDERLY_MULTI_STORY_PENALTY;
                notes.push("stairs are a daily obstacle for an elderly parent".to_string());
                suggestions.push(Suggestion {
                    category: SuggestionCategory::AskAbout,
                    title: "Main-floor arrangements for an elderly parent".to_string(),
                    description: "Ask whether a bedroom and full bath exist on the main floor, or what a stair lift would involve.".to_string(),
                    priority: Priority::Medium,
                });
            }
            Some(_) => {
                score += config::ELDERLY_SINGLE_STORY_BONUS;
                notes.push("single-story layout works well for an elderly parent".to_string());
            }
            None => {}
        }
    }

    if profile
        .household
        .members
        .contains(&HouseholdMember::YoungChildren)
    {
        suggestions.push(Suggestion {
            category: SuggestionCategory::LookFor,
            title: "Child-safety checklist".to_string(),
            description: "Walk the property for pool fencing, stair gates, window heights, and street traffic before an offer.".to_string(),
            priority: Priority::Medium,
        });
    }

    let details = if notes.is_empty() {
        format!(
            "Baseline lifestyle fit for a {} buyer.",
            profile.situation.label()
        )
    } else {
        format!("Lifestyle signals: {}.", notes.join("; "))
    };

    (score.clamp(0.0, 100.0), details)
}

/// Informational, never scored: pet owners facing an HOA should always ask
/// about pet policy and fees.
fn pet_hoa_suggestion(
    profile: Option<&BuyerProfile>,
    snapshot: Option<&PropertySnapshot>,
    suggestions: &mut Vec<Suggestion>,
) {
    let Some(profile) = profile else { return };
    let has_hoa = snapshot
        .and_then(|snap| snap.hoa)
        .is_some_and(|fee| fee > 0.0);

    if profile.lifestyle.has_pets() && has_hoa {
        suggestions.push(Suggestion {
            category: SuggestionCategory::AskAbout,
            title: "HOA pet policy".to_string(),
            description: "This property carries an HOA; request its pet rules, breed or weight limits, and pet fees before an offer.".to_string(),
            priority: Priority::Medium,
        });
    }
}
