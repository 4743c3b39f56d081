use std::collections::BTreeSet;

use crate::analysis::domain::{
    AccessibilityNeed, AccessibilityProfile, BudgetProfile, BuyerProfile, BuyerSituation, Claim,
    ClaimCategory, ClaimSeverity, ClaimSource, ClaimVerdict, Feature, HouseholdProfile,
    LifestyleProfile, PropertySnapshot, TrustLabel,
};
use crate::analysis::scoring::{
    AnalysisContext, CategoryName, FitCategory, FitScoreResult, FitScoringEngine,
};

/// Single-story snapshot that satisfies the baseline profile completely.
pub(super) fn snapshot() -> PropertySnapshot {
    PropertySnapshot {
        beds: Some(3),
        baths: Some(2.0),
        sqft: Some(1_800),
        lot_sqft: Some(6_500),
        year_built: Some(2005),
        stories: Some(1),
        garage: Some("2-car attached".to_string()),
        hoa: Some(0.0),
        zoning: Some("R-1".to_string()),
        tax_assessed_value: Some(860_000.0),
        last_sale_date: None,
        last_sale_price: Some(810_000.0),
    }
}

/// Buyer whose stated needs the baseline snapshot fully meets.
pub(super) fn profile() -> BuyerProfile {
    BuyerProfile {
        situation: BuyerSituation::GrowingFamily,
        household: HouseholdProfile::default(),
        accessibility: AccessibilityProfile {
            needs: BTreeSet::from([AccessibilityNeed::None]),
            notes: None,
        },
        budget: BudgetProfile {
            budget_min: None,
            budget_max: Some(1_000_000.0),
            budget_stretch: Some(1_100_000.0),
            monthly_payment_max: None,
        },
        must_haves: BTreeSet::from([Feature::Garage, Feature::Yard]),
        nice_to_haves: BTreeSet::from([Feature::HomeOffice]),
        dealbreakers: BTreeSet::from([Feature::NoHoa]),
        lifestyle: LifestyleProfile {
            commute: None,
            min_beds: Some(3),
            min_baths: Some(2.0),
            min_sqft: Some(1_600),
            outdoor_priority: None,
            pets: Vec::new(),
        },
    }
}

pub(super) fn profile_with_needs(needs: &[AccessibilityNeed]) -> BuyerProfile {
    let mut profile = profile();
    profile.accessibility.needs = needs.iter().copied().collect();
    profile
}

pub(super) fn context(snapshot: Option<PropertySnapshot>) -> AnalysisContext {
    AnalysisContext {
        snapshot,
        market: None,
        trust_score: 80,
        trust_label: TrustLabel::from_score(80),
        list_price: Some(900_000.0),
        claims: Vec::new(),
        action_items: Vec::new(),
    }
}

pub(super) fn neighborhood_claim(statement: &str) -> Claim {
    Claim {
        category: ClaimCategory::NeighborhoodFit,
        statement: statement.to_string(),
        source: ClaimSource::Inference,
        verdict: ClaimVerdict::Verified,
        confidence: 0.7,
        explanation: "derived from area data".to_string(),
        severity: ClaimSeverity::Caution,
        evidence: Vec::new(),
    }
}

pub(super) fn engine() -> FitScoringEngine {
    FitScoringEngine::default()
}

pub(super) fn category(result: &FitScoreResult, name: CategoryName) -> &FitCategory {
    result
        .breakdown
        .iter()
        .find(|entry| entry.name == name)
        .unwrap_or_else(|| panic!("breakdown missing {name:?}"))
}
