use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored listing analyses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

/// Physical facts about one property. Every field is independently optional;
/// absence of data is a first-class state and is never coerced to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    pub beds: Option<u32>,
    pub baths: Option<f32>,
    pub sqft: Option<u32>,
    pub lot_sqft: Option<u32>,
    pub year_built: Option<i32>,
    pub stories: Option<u8>,
    pub garage: Option<String>,
    pub hoa: Option<f64>,
    pub zoning: Option<String>,
    pub tax_assessed_value: Option<f64>,
    pub last_sale_date: Option<NaiveDate>,
    pub last_sale_price: Option<f64>,
}

/// Market backdrop for the analyzed address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    pub median_area_price: Option<f64>,
    pub price_per_sqft: Option<f64>,
    pub area_median_ppsf: Option<f64>,
    pub avg_days_on_market: Option<u32>,
    pub inventory_level: Option<InventoryLevel>,
    pub comparables: Vec<ComparableProperty>,
}

/// One recently sold comparable used for market framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableProperty {
    pub address: String,
    pub price: f64,
    pub sqft: Option<u32>,
    pub beds: Option<u32>,
    pub baths: Option<f32>,
    pub sold_date: Option<NaiveDate>,
    pub price_per_sqft: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryLevel {
    Low,
    Balanced,
    High,
}

impl InventoryLevel {
    pub const fn label(self) -> &'static str {
        match self {
            InventoryLevel::Low => "low",
            InventoryLevel::Balanced => "balanced",
            InventoryLevel::High => "high",
        }
    }
}

/// The buyer's stated requirements, captured once by a guided wizard and
/// never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerProfile {
    pub situation: BuyerSituation,
    pub household: HouseholdProfile,
    pub accessibility: AccessibilityProfile,
    pub budget: BudgetProfile,
    pub must_haves: BTreeSet<Feature>,
    pub nice_to_haves: BTreeSet<Feature>,
    pub dealbreakers: BTreeSet<Feature>,
    pub lifestyle: LifestyleProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyerSituation {
    FirstHome,
    GrowingFamily,
    Downsizing,
    Relocation,
    Multigenerational,
    Retiring,
    Investment,
}

impl BuyerSituation {
    pub const fn label(self) -> &'static str {
        match self {
            BuyerSituation::FirstHome => "first home",
            BuyerSituation::GrowingFamily => "growing family",
            BuyerSituation::Downsizing => "downsizing",
            BuyerSituation::Relocation => "relocation",
            BuyerSituation::Multigenerational => "multigenerational",
            BuyerSituation::Retiring => "retiring",
            BuyerSituation::Investment => "investment",
        }
    }
}

/// Household composition as tags plus headcount; no protected-class data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub members: BTreeSet<HouseholdMember>,
    pub headcount: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdMember {
    YoungChildren,
    Teenagers,
    AdultChildren,
    ElderlyParent,
    ExtendedFamily,
    LiveInCaregiver,
}

impl HouseholdMember {
    pub const fn label(self) -> &'static str {
        match self {
            HouseholdMember::YoungChildren => "young children",
            HouseholdMember::Teenagers => "teenagers",
            HouseholdMember::AdultChildren => "adult children",
            HouseholdMember::ElderlyParent => "elderly parent",
            HouseholdMember::ExtendedFamily => "extended family",
            HouseholdMember::LiveInCaregiver => "live-in caregiver",
        }
    }
}

/// Declared accessibility needs plus free-text notes from the wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityProfile {
    pub needs: BTreeSet<AccessibilityNeed>,
    pub notes: Option<String>,
}

impl AccessibilityProfile {
    /// True when any need beyond the `None` sentinel is declared.
    pub fn has_stated_needs(&self) -> bool {
        self.needs
            .iter()
            .any(|need| *need != AccessibilityNeed::None)
    }

    /// Declared needs with the sentinel filtered out, in stable order.
    pub fn stated_needs(&self) -> impl Iterator<Item = AccessibilityNeed> + '_ {
        self.needs
            .iter()
            .copied()
            .filter(|need| *need != AccessibilityNeed::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityNeed {
    None,
    WheelchairFull,
    MobilityLimited,
    ChronicFatigue,
    AgingInPlace,
    SensorySensitivity,
    Respiratory,
}

impl AccessibilityNeed {
    pub const fn label(self) -> &'static str {
        match self {
            AccessibilityNeed::None => "no stated needs",
            AccessibilityNeed::WheelchairFull => "full-time wheelchair use",
            AccessibilityNeed::MobilityLimited => "limited mobility",
            AccessibilityNeed::ChronicFatigue => "chronic fatigue",
            AccessibilityNeed::AgingInPlace => "aging in place",
            AccessibilityNeed::SensorySensitivity => "sensory sensitivity",
            AccessibilityNeed::Respiratory => "respiratory condition",
        }
    }
}

/// Price ceilings stated by the buyer. `budget_max` is the comfortable
/// ceiling, `budget_stretch` the absolute one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetProfile {
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub budget_stretch: Option<f64>,
    pub monthly_payment_max: Option<f64>,
}

/// Commute, size minimums, outdoor priority, and pets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifestyleProfile {
    pub commute: Option<CommutePlan>,
    pub min_beds: Option<u32>,
    pub min_baths: Option<f32>,
    pub min_sqft: Option<u32>,
    pub outdoor_priority: Option<OutdoorPriority>,
    pub pets: Vec<PetType>,
}

impl LifestyleProfile {
    pub fn has_pets(&self) -> bool {
        !self.pets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommutePlan {
    pub destination: String,
    pub mode: CommuteMode,
    pub max_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommuteMode {
    Drive,
    Transit,
    Bike,
    Walk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutdoorPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Dog,
    Cat,
    Other,
}

/// Bounded feature vocabulary the wizard offers. The three profile sets
/// (must-haves, nice-to-haves, dealbreakers) draw from this enumeration and
/// are kept disjoint by the wizard, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    SingleStory,
    Garage,
    NoHoa,
    Yard,
    NewConstruction,
    Pool,
    Solar,
    EvCharging,
    CentralAir,
    FinishedBasement,
    HomeOffice,
    GoodSchools,
    WalkableArea,
    QuietStreet,
    Fireplace,
    AccessoryUnit,
}

impl Feature {
    pub const fn label(self) -> &'static str {
        match self {
            Feature::SingleStory => "single-story layout",
            Feature::Garage => "garage",
            Feature::NoHoa => "no HOA",
            Feature::Yard => "usable yard",
            Feature::NewConstruction => "new construction",
            Feature::Pool => "pool",
            Feature::Solar => "solar panels",
            Feature::EvCharging => "EV charging",
            Feature::CentralAir => "central air",
            Feature::FinishedBasement => "finished basement",
            Feature::HomeOffice => "home office",
            Feature::GoodSchools => "well-rated schools",
            Feature::WalkableArea => "walkable area",
            Feature::QuietStreet => "quiet street",
            Feature::Fireplace => "fireplace",
            Feature::AccessoryUnit => "accessory unit",
        }
    }
}

/// One verifiable assertion extracted upstream from the listing text.
/// Read-only input to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub category: ClaimCategory,
    pub statement: String,
    pub source: ClaimSource,
    pub verdict: ClaimVerdict,
    pub confidence: f32,
    pub explanation: String,
    pub severity: ClaimSeverity,
    pub evidence: Vec<Evidence>,
}

/// The six fixed claim scoring categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimCategory {
    RecordMismatch,
    PricingAnomaly,
    OwnershipTitle,
    DisclosureAmbiguity,
    NeighborhoodFit,
    RenovationPermit,
}

impl ClaimCategory {
    /// Stable iteration order for per-category breakdowns.
    pub const ALL: [ClaimCategory; 6] = [
        ClaimCategory::RecordMismatch,
        ClaimCategory::PricingAnomaly,
        ClaimCategory::OwnershipTitle,
        ClaimCategory::DisclosureAmbiguity,
        ClaimCategory::NeighborhoodFit,
        ClaimCategory::RenovationPermit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ClaimCategory::RecordMismatch => "record mismatch",
            ClaimCategory::PricingAnomaly => "pricing anomaly",
            ClaimCategory::OwnershipTitle => "ownership & title",
            ClaimCategory::DisclosureAmbiguity => "disclosure ambiguity",
            ClaimCategory::NeighborhoodFit => "neighborhood fit",
            ClaimCategory::RenovationPermit => "renovation & permits",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimSource {
    Listing,
    PublicRecord,
    Inference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimVerdict {
    Verified,
    Unverified,
    Contradiction,
    Marketing,
}

impl ClaimVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            ClaimVerdict::Verified => "verified",
            ClaimVerdict::Unverified => "unverified",
            ClaimVerdict::Contradiction => "contradiction",
            ClaimVerdict::Marketing => "marketing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimSeverity {
    Info,
    Caution,
    Warning,
    Critical,
}

impl ClaimSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            ClaimSeverity::Info => "info",
            ClaimSeverity::Caution => "caution",
            ClaimSeverity::Warning => "warning",
            ClaimSeverity::Critical => "critical",
        }
    }
}

/// Supporting or contradicting material attached to a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub kind: EvidenceKind,
    pub source: String,
    pub description: String,
    pub data_point: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Supports,
    Contradicts,
    Neutral,
}

/// One entry of the prioritized follow-up list produced upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    pub detail: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank; lower sorts first.
    pub const fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Banded reading of the externally supplied trust score. The scalar score
/// is an input to this crate; only the banding lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLabel {
    Trusted,
    MostlyConsistent,
    Mixed,
    Questionable,
}

impl Default for TrustLabel {
    fn default() -> Self {
        TrustLabel::Mixed
    }
}

impl TrustLabel {
    pub const fn label(self) -> &'static str {
        match self {
            TrustLabel::Trusted => "consistent with records",
            TrustLabel::MostlyConsistent => "mostly consistent",
            TrustLabel::Mixed => "mixed signals",
            TrustLabel::Questionable => "questionable",
        }
    }

    /// Convenience banding for callers that only carry the scalar score.
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            TrustLabel::Trusted
        } else if score >= 60 {
            TrustLabel::MostlyConsistent
        } else if score >= 40 {
            TrustLabel::Mixed
        } else {
            TrustLabel::Questionable
        }
    }
}
