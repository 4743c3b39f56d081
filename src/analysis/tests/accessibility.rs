use super::common::*;
use crate::analysis::domain::AccessibilityNeed;
use crate::analysis::scoring::{CategoryName, FitLabel, FlagSeverity, SuggestionCategory};

#[test]
fn wheelchair_on_multi_story_raises_a_blocker_and_caps_overall() {
    let buyer = profile_with_needs(&[AccessibilityNeed::WheelchairFull]);

    let mut two_story = snapshot();
    two_story.stories = Some(2);

    let result = engine().score(Some(&buyer), &context(Some(two_story)));

    let blocker = result
        .accessibility_flags
        .iter()
        .find(|flag| flag.severity == FlagSeverity::Blocker)
        .expect("blocker flag for a wheelchair user on two stories");
    assert_eq!(blocker.need, AccessibilityNeed::WheelchairFull);

    assert!(result.overall_score <= 25);
    assert_eq!(result.label, FitLabel::Dealbreaker);
}

#[test]
fn wheelchair_on_single_story_is_manageable_without_penalty() {
    let buyer = profile_with_needs(&[AccessibilityNeed::WheelchairFull]);

    let result = engine().score(Some(&buyer), &context(Some(snapshot())));

    assert_eq!(category(&result, CategoryName::Accessibility).score, 100);
    let flag = result
        .accessibility_flags
        .iter()
        .find(|flag| flag.need == AccessibilityNeed::WheelchairFull)
        .expect("every stated need yields a flag");
    assert_eq!(flag.severity, FlagSeverity::Manageable);
    assert!(flag.recommendation.to_lowercase().contains("doorway"));
}

#[test]
fn unknown_story_count_is_a_real_but_partial_risk() {
    let buyer = profile_with_needs(&[AccessibilityNeed::MobilityLimited]);

    let mut unknown_stories = snapshot();
    unknown_stories.stories = None;

    let result = engine().score(Some(&buyer), &context(Some(unknown_stories)));

    assert_eq!(category(&result, CategoryName::Accessibility).score, 85);
    let flag = result
        .accessibility_flags
        .iter()
        .find(|flag| flag.need == AccessibilityNeed::MobilityLimited)
        .expect("flag present");
    assert_eq!(flag.severity, FlagSeverity::Concern);
}

#[test]
fn sensory_sensitivity_reacts_to_noise_claims() {
    let buyer = profile_with_needs(&[AccessibilityNeed::SensorySensitivity]);

    let mut ctx = context(Some(snapshot()));
    ctx.claims = vec![neighborhood_claim(
        "Property backs onto a highway sound wall",
    )];

    let result = engine().score(Some(&buyer), &ctx);

    assert_eq!(category(&result, CategoryName::Accessibility).score, 75);
    let flag = result
        .accessibility_flags
        .iter()
        .find(|flag| flag.need == AccessibilityNeed::SensorySensitivity)
        .expect("flag present");
    assert_eq!(flag.severity, FlagSeverity::Concern);

    // Without noise claims the same need reads clear.
    let quiet = engine().score(Some(&buyer), &context(Some(snapshot())));
    let flag = quiet
        .accessibility_flags
        .iter()
        .find(|flag| flag.need == AccessibilityNeed::SensorySensitivity)
        .expect("flag present");
    assert_eq!(flag.severity, FlagSeverity::Clear);
}

#[test]
fn respiratory_need_penalizes_pre_1990_construction() {
    let buyer = profile_with_needs(&[AccessibilityNeed::Respiratory]);

    let mut older = snapshot();
    older.year_built = Some(1974);

    let result = engine().score(Some(&buyer), &context(Some(older)));
    assert_eq!(category(&result, CategoryName::Accessibility).score, 85);

    let modern = engine().score(Some(&buyer), &context(Some(snapshot())));
    assert_eq!(category(&modern, CategoryName::Accessibility).score, 100);
}

#[test]
fn aging_in_place_on_multi_story_suggests_a_conversion() {
    let buyer = profile_with_needs(&[AccessibilityNeed::AgingInPlace]);

    let mut two_story = snapshot();
    two_story.stories = Some(2);

    let result = engine().score(Some(&buyer), &context(Some(two_story)));

    assert_eq!(category(&result, CategoryName::Accessibility).score, 80);
    assert!(result
        .suggestions
        .iter()
        .any(|suggestion| suggestion.category == SuggestionCategory::Modify));
}
