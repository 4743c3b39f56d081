use super::common::*;
use crate::analysis::domain::AccessibilityNeed;
use crate::analysis::scoring::{CategoryName, FitLabel};

#[test]
fn scoring_is_deterministic_for_identical_inputs() {
    let buyer = profile_with_needs(&[AccessibilityNeed::MobilityLimited]);
    let mut ctx = context(Some(snapshot()));
    ctx.claims = vec![neighborhood_claim("heavy traffic on the cross street")];

    let first = engine().score(Some(&buyer), &ctx);
    let second = engine().score(Some(&buyer), &ctx);

    assert_eq!(first, second);
}

#[test]
fn weights_sum_to_one_with_and_without_accessibility_needs() {
    let without = engine().score(Some(&profile()), &context(Some(snapshot())));
    let total: f32 = without.breakdown.iter().map(|entry| entry.weight).sum();
    assert!((total - 1.0).abs() < 1e-5);

    let with_needs = engine().score(
        Some(&profile_with_needs(&[AccessibilityNeed::WheelchairFull])),
        &context(Some(snapshot())),
    );
    let total: f32 = with_needs.breakdown.iter().map(|entry| entry.weight).sum();
    assert!((total - 1.0).abs() < 1e-5);

    // The accessibility weight switches with stated needs and dominates
    // when present.
    let inactive = category(&without, CategoryName::Accessibility).weight;
    let active = category(&with_needs, CategoryName::Accessibility).weight;
    assert!(inactive < 0.06);
    assert!(active > 0.25);
}

#[test]
fn all_scores_stay_in_bounds_even_for_a_hostile_input() {
    let mut buyer = profile_with_needs(&[
        AccessibilityNeed::WheelchairFull,
        AccessibilityNeed::SensorySensitivity,
        AccessibilityNeed::Respiratory,
    ]);
    buyer.budget.budget_max = Some(100_000.0);
    buyer.budget.budget_stretch = Some(110_000.0);
    buyer.lifestyle.min_beds = Some(6);
    buyer.lifestyle.min_sqft = Some(5_000);

    let mut hostile = snapshot();
    hostile.stories = Some(3);
    hostile.year_built = Some(1950);
    hostile.hoa = Some(400.0);

    let mut ctx = context(Some(hostile));
    ctx.claims = vec![neighborhood_claim("airport flight path noise")];
    ctx.trust_score = 5;

    let result = engine().score(Some(&buyer), &ctx);

    assert!(result.overall_score <= 100);
    for entry in &result.breakdown {
        assert!(entry.score <= 100, "{:?} out of bounds", entry.name);
    }
    assert_eq!(result.label, FitLabel::Dealbreaker);
}

#[test]
fn trust_category_passes_the_external_score_through() {
    let mut ctx = context(Some(snapshot()));
    ctx.trust_score = 37;

    let result = engine().score(Some(&profile()), &ctx);
    let trust = category(&result, CategoryName::TrustRisk);
    assert_eq!(trust.score, 37);
    assert!(trust.details.contains("37"));
}

#[test]
fn missing_profile_still_produces_a_complete_result() {
    let result = engine().score(None, &context(Some(snapshot())));

    assert_eq!(result.breakdown.len(), 6);
    assert!(result.overall_score <= 100);
    assert!(result.matched_features.is_empty());
    assert!(result.accessibility_flags.is_empty());
    assert_eq!(result.summary, result.label.summary());
}

#[test]
fn every_label_band_maps_from_its_score_range() {
    // Great match from the fully compatible fixture.
    let great = engine().score(Some(&profile()), &context(Some(snapshot())));
    assert_eq!(great.label, FitLabel::GreatMatch);

    // Dragging trust and budget down lands in the middle bands.
    let mut buyer = profile();
    buyer.budget.budget_max = Some(500_000.0);
    buyer.budget.budget_stretch = Some(1_000_000.0);

    let mut ctx = context(Some(snapshot()));
    ctx.trust_score = 20;
    let middling = engine().score(Some(&buyer), &ctx);
    assert!(matches!(
        middling.label,
        FitLabel::GoodMatch | FitLabel::Fair
    ));
}
