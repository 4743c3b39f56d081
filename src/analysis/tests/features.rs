use super::common::*;
use crate::analysis::domain::Feature;
use crate::analysis::scoring::{CategoryName, FitLabel, MatchStatus};

#[test]
fn hoa_dealbreaker_is_violated_by_a_monthly_fee() {
    let mut with_hoa = snapshot();
    with_hoa.hoa = Some(250.0);

    let result = engine().score(Some(&profile()), &context(Some(with_hoa)));

    let violated = result
        .missed_features
        .iter()
        .find(|entry| entry.feature == Feature::NoHoa)
        .expect("violated dealbreaker recorded");
    assert_eq!(violated.status, MatchStatus::Violated);

    // 100 minus the 50-point dealbreaker penalty.
    assert_eq!(category(&result, CategoryName::FeatureMatch).score, 50);
    assert!(result.overall_score <= 25);
    assert_eq!(result.label, FitLabel::Dealbreaker);
}

#[test]
fn confirmed_missing_must_have_costs_more_than_unverifiable() {
    let mut buyer = profile();
    buyer.must_haves = [Feature::SingleStory].into_iter().collect();

    let mut two_story = snapshot();
    two_story.stories = Some(2);

    let result = engine().score(Some(&buyer), &context(Some(two_story)));
    assert_eq!(category(&result, CategoryName::FeatureMatch).score, 82);
    let missing = result
        .missed_features
        .iter()
        .find(|entry| entry.feature == Feature::SingleStory)
        .expect("missing must-have recorded");
    assert_eq!(missing.status, MatchStatus::Missing);

    let mut buyer = profile();
    buyer.must_haves = [Feature::Pool].into_iter().collect();

    let result = engine().score(Some(&buyer), &context(Some(snapshot())));
    assert_eq!(category(&result, CategoryName::FeatureMatch).score, 92);
    let unknown = result
        .missed_features
        .iter()
        .find(|entry| entry.feature == Feature::Pool)
        .expect("unverifiable must-have recorded");
    assert_eq!(unknown.status, MatchStatus::Unknown);
    assert!(unknown.explanation.contains("could not be verified"));
}

#[test]
fn matched_must_haves_are_recorded_without_penalty() {
    let result = engine().score(Some(&profile()), &context(Some(snapshot())));

    assert_eq!(category(&result, CategoryName::FeatureMatch).score, 100);
    for feature in [Feature::Garage, Feature::Yard] {
        assert!(result
            .matched_features
            .iter()
            .any(|entry| entry.feature == feature && entry.status == MatchStatus::Matched));
    }
}

#[test]
fn nice_to_have_misses_cost_five_points() {
    let mut buyer = profile();
    buyer.nice_to_haves = [Feature::NewConstruction].into_iter().collect();

    // Built in 2005, well before the new-construction cutoff.
    let result = engine().score(Some(&buyer), &context(Some(snapshot())));
    assert_eq!(category(&result, CategoryName::FeatureMatch).score, 95);
}

#[test]
fn unverifiable_dealbreakers_are_not_treated_as_violations() {
    let mut buyer = profile();
    buyer.dealbreakers = [Feature::NoHoa].into_iter().collect();

    let mut unknown_hoa = snapshot();
    unknown_hoa.hoa = None;

    let result = engine().score(Some(&buyer), &context(Some(unknown_hoa)));

    assert_eq!(category(&result, CategoryName::FeatureMatch).score, 100);
    assert_ne!(result.label, FitLabel::Dealbreaker);
}
