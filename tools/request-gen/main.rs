use clap::Parser;
use inboxflow::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

const INDUSTRIES: &[&str] = &["hot-tub-spa", "hvac", "plumbing", "landscaping", "electrical"];
const RESPONSE_TIMES: &[&str] = &["1_hour", "4_hours", "same_day"];
const PROVIDERS: &[&str] = &["RingCentral", "Aircall", "Dialpad"];
const FIRST_NAMES: &[&str] = &[
    "Hailey", "Jillian", "Stacie", "Aaron", "Marcus", "Priya", "Tomas", "Ines", "Kofi", "Mei",
];
const SUPPLIER_WORDS: &[&str] = &[
    "Aqua", "Paradise", "Strong", "Summit", "Coastal", "Prairie", "Northern", "Metro",
];
const SUPPLIER_SUFFIXES: &[&str] = &["Supply", "Spas", "Parts Ltd", "Wholesale", "Distributors"];
const SERVICES: &[&str] = &[
    "installation", "repair", "maintenance", "water_care", "heating_repair", "cooling_repair",
];

/// A CLI tool to generate random onboarding requests for load testing the synthesizer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_requests.json")]
    output: String,

    /// Number of requests to generate
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// The maximum roster size to generate for managers and suppliers
    #[arg(long, default_value_t = 15)]
    max_roster: usize,

    /// Probability of leaving each optional profile field empty
    #[arg(long, default_value_t = 0.3)]
    sparsity: f64,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if !(0.0..=1.0).contains(&cli.sparsity) {
        eprintln!("Error: --sparsity ({}) must be between 0 and 1", cli.sparsity);
        std::process::exit(1);
    }

    let mut rng = rand::rng();
    let requests: Vec<OnboardingRequest> = (0..cli.count)
        .map(|i| generate_request(&mut rng, i, cli.max_roster, cli.sparsity))
        .collect();

    let json_output = serde_json::to_string_pretty(&requests)?;
    fs::write(&cli.output, json_output)?;

    info!(count = requests.len(), path = %cli.output, "generated onboarding requests");
    Ok(())
}

fn generate_request<R: Rng>(
    rng: &mut R,
    index: usize,
    max_roster: usize,
    sparsity: f64,
) -> OnboardingRequest {
    let company = format!("Test Company {}", index + 1);
    let slug = format!("testcompany{}", index + 1);

    let mut maybe = |value: String| (!rng.random_bool(sparsity)).then_some(value);
    let business_email = maybe(format!("office@{}.com", slug));
    let business_phone = maybe(format!("555-{:04}", index));
    let business_hours = maybe("Mon-Fri 8am-5pm".to_string());

    let service_count = rng.random_range(0..=3);
    let primary_services: Vec<String> = SERVICES
        .choose_multiple(rng, service_count)
        .map(|s| s.to_string())
        .collect();

    let profile = BusinessProfile {
        business_email,
        business_phone,
        business_hours,
        industry: pick(rng, INDUSTRIES, sparsity),
        response_time_goal: pick(rng, RESPONSE_TIMES, sparsity),
        primary_services: Some(primary_services),
        service_area_radius: Some(rng.random_range(5..=100) as f64),
        ..BusinessProfile::new(format!("user_{}", index + 1), company)
    };

    let managers: Vec<String> = (0..rng.random_range(0..=max_roster))
        .filter_map(|_| FIRST_NAMES.choose(rng).map(|s| s.to_string()))
        .collect();
    let suppliers: Vec<String> = (0..rng.random_range(0..=max_roster))
        .filter_map(|_| {
            let word = SUPPLIER_WORDS.choose(rng)?;
            let suffix = SUPPLIER_SUFFIXES.choose(rng)?;
            Some(format!("{} {}", word, suffix))
        })
        .collect();

    let mut request = OnboardingRequest::new(profile)
        .with_managers(managers)
        .with_suppliers(suppliers);
    request.channel_provider = pick(rng, PROVIDERS, sparsity);
    request
}

fn pick<R: Rng>(rng: &mut R, options: &[&str], sparsity: f64) -> Option<String> {
    if rng.random_bool(sparsity) {
        return None;
    }
    options.choose(rng).map(|s| s.to_string())
}
