use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::info;

use homefit::analysis::{
    AccessibilityNeed, AccessibilityProfile, AnalysisId, AnalysisRecord, AnalysisRepository,
    AnalysisRequest, AnalysisService, AnalysisStatus, BudgetProfile, BuyerProfile, BuyerSituation,
    Claim, ClaimCategory, ClaimSeverity, ClaimSource, ClaimVerdict, Feature, HouseholdMember,
    HouseholdProfile, LifestyleProfile, PetType, PropertySnapshot, RepositoryError, ScoringConfig,
    TrustLabel,
};
use homefit::config::AppConfig;
use homefit::error::AppError;
use homefit::import::ComparablesImporter;
use homefit::telemetry;
use homefit::usage::{AnalysisBudget, CountingBudget, UnmeteredBudget};

#[derive(Parser, Debug)]
#[command(
    name = "homefit",
    about = "Score a real-estate listing for trust and buyer fit from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a listing from JSON input files
    Score(ScoreArgs),
    /// Run the built-in demo scenario (default command)
    Demo,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Street address of the analyzed listing
    #[arg(long)]
    address: String,
    /// Buyer profile JSON; omit for an unpersonalized score
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Authoritative property-record snapshot JSON
    #[arg(long)]
    records: Option<PathBuf>,
    /// Inferred/estimated snapshot JSON used to fill record gaps
    #[arg(long)]
    inferred: Option<PathBuf>,
    /// Claim list JSON produced by the upstream extraction pipeline
    #[arg(long)]
    claims: Option<PathBuf>,
    /// Comparable-sales CSV export for market framing
    #[arg(long)]
    comps: Option<PathBuf>,
    /// Listing price, when known
    #[arg(long)]
    list_price: Option<f64>,
    /// Externally computed trust score (0-100)
    #[arg(long, default_value_t = 50)]
    trust_score: u8,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("homefit: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let budget: Arc<dyn AnalysisBudget> = match config.budget_limit {
        Some(limit) => Arc::new(CountingBudget::new(limit)),
        None => Arc::new(UnmeteredBudget),
    };

    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let service = AnalysisService::new(repository, budget, ScoringConfig::default());

    match cli.command.unwrap_or(Command::Demo) {
        Command::Score(args) => score(&service, args),
        Command::Demo => demo(&service),
    }
}

fn score(
    service: &AnalysisService<InMemoryAnalysisRepository>,
    args: ScoreArgs,
) -> Result<(), AppError> {
    let profile: Option<BuyerProfile> = args.profile.as_deref().map(read_json).transpose()?;
    let record_snapshot: Option<PropertySnapshot> =
        args.records.as_deref().map(read_json).transpose()?;
    let inferred_snapshot: Option<PropertySnapshot> =
        args.inferred.as_deref().map(read_json).transpose()?;
    let claims: Vec<Claim> = args
        .claims
        .as_deref()
        .map(read_json)
        .transpose()?
        .unwrap_or_default();
    let market = args
        .comps
        .as_deref()
        .map(ComparablesImporter::from_path)
        .transpose()?;

    let request = AnalysisRequest {
        address: args.address,
        record_snapshot,
        inferred_snapshot,
        market,
        claims,
        action_items: Vec::new(),
        trust_score: args.trust_score,
        trust_label: TrustLabel::from_score(args.trust_score),
        list_price: args.list_price,
    };

    print_scored(service, request, profile.as_ref())
}

fn demo(service: &AnalysisService<InMemoryAnalysisRepository>) -> Result<(), AppError> {
    info!("scoring the built-in demo listing");
    print_scored(service, demo_request(), Some(&demo_profile()))
}

fn print_scored(
    service: &AnalysisService<InMemoryAnalysisRepository>,
    request: AnalysisRequest,
    profile: Option<&BuyerProfile>,
) -> Result<(), AppError> {
    let record = service.submit(request)?;
    service.run(&record.id, profile)?;
    let report = service.report(&record.id)?;

    println!("{}", serde_json::to_string_pretty(&report.view())?);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

fn demo_profile() -> BuyerProfile {
    BuyerProfile {
        situation: BuyerSituation::GrowingFamily,
        household: HouseholdProfile {
            members: BTreeSet::from([HouseholdMember::YoungChildren]),
            headcount: 4,
        },
        accessibility: AccessibilityProfile {
            needs: BTreeSet::from([AccessibilityNeed::None]),
            notes: None,
        },
        budget: BudgetProfile {
            budget_min: Some(350_000.0),
            budget_max: Some(520_000.0),
            budget_stretch: Some(560_000.0),
            monthly_payment_max: Some(3_400.0),
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
            pets: vec![PetType::Dog],
        },
    }
}

fn demo_request() -> AnalysisRequest {
    let records = PropertySnapshot {
        beds: Some(3),
        baths: Some(2.5),
        sqft: Some(1_840),
        lot_sqft: Some(6_500),
        year_built: Some(2004),
        stories: Some(2),
        garage: Some("2-car attached".to_string()),
        hoa: None,
        zoning: Some("R-1".to_string()),
        tax_assessed_value: Some(472_000.0),
        last_sale_date: None,
        last_sale_price: Some(405_000.0),
    };

    let inferred = PropertySnapshot {
        hoa: Some(0.0),
        ..PropertySnapshot::default()
    };

    let claims = vec![Claim {
        category: ClaimCategory::RecordMismatch,
        statement: "Listing advertises 4 bedrooms".to_string(),
        source: ClaimSource::Listing,
        verdict: ClaimVerdict::Contradiction,
        confidence: 0.9,
        explanation: "County records show 3 bedrooms; the fourth is an unpermitted den conversion."
            .to_string(),
        severity: ClaimSeverity::Warning,
        evidence: Vec::new(),
    }];

    AnalysisRequest {
        address: "1418 Juniper Loop".to_string(),
        record_snapshot: Some(records),
        inferred_snapshot: Some(inferred),
        market: None,
        claims,
        action_items: Vec::new(),
        trust_score: 68,
        trust_label: TrustLabel::from_score(68),
        list_price: Some(498_000.0),
    }
}

/// Process-local record store backing the CLI.
#[derive(Default)]
struct InMemoryAnalysisRepository {
    records: Mutex<HashMap<AnalysisId, AnalysisRecord>>,
}

impl AnalysisRepository for InMemoryAnalysisRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == AnalysisStatus::Pending)
            .take(limit)
            .cloned()
            .collect())
    }
}
