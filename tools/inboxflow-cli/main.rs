use clap::{Parser, ValueEnum};
use inboxflow::artifact::visualizer::visualize_artifact;
use inboxflow::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization Structs (Dashboard Form Format) ---
// These structs match the onboarding form posted by the dashboard and are only
// used here for conversion.

#[derive(Deserialize)]
struct RawOnboardingForm {
    business: RawBusiness,
    #[serde(default)]
    team: RawTeam,
    #[serde(default)]
    integrations: RawIntegrations,
}

#[derive(Deserialize)]
struct RawBusiness {
    #[serde(alias = "userId")]
    user_id: String,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    #[serde(alias = "emergencyPhone")]
    emergency_phone: Option<String>,
    address: Option<String>,
    #[serde(alias = "type")]
    business_type: Option<String>,
    #[serde(default)]
    services: Vec<String>,
    #[serde(alias = "responseTime")]
    response_time: Option<String>,
    hours: Option<String>,
    #[serde(alias = "serviceRadius")]
    service_radius: Option<f64>,
}

#[derive(Deserialize, Default)]
struct RawTeam {
    #[serde(default)]
    managers: Vec<RawContact>,
    #[serde(default)]
    suppliers: Vec<RawContact>,
}

#[derive(Deserialize)]
struct RawContact {
    name: String,
}

#[derive(Deserialize, Default)]
struct RawIntegrations {
    email: Option<String>,
    phone: Option<String>,
}

/// CLI-specific channel enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelCli {
    Gmail,
    Outlook,
}

// --- Converter Implementation ---

impl IntoProfile for RawOnboardingForm {
    fn into_request(self) -> std::result::Result<OnboardingRequest, ProfileConversionError> {
        let channel = match self.integrations.email.as_deref() {
            None | Some("gmail") => Channel::Gmail,
            Some("outlook") => Channel::Outlook,
            Some(other) => {
                return Err(ProfileConversionError::ValidationError(format!(
                    "unsupported email integration '{}'",
                    other
                )));
            }
        };
        let business = self.business;
        let profile = BusinessProfile {
            user_id: business.user_id,
            company_name: business.name,
            business_email: business.email,
            business_phone: business.phone,
            emergency_phone: business.emergency_phone,
            business_address: business.address,
            industry: business.business_type,
            primary_services: (!business.services.is_empty()).then_some(business.services),
            response_time_goal: business.response_time,
            business_hours: business.hours,
            service_area_radius: business.service_radius,
        };

        let mut request = OnboardingRequest::new(profile)
            .with_managers(self.team.managers.into_iter().map(|c| c.name))
            .with_suppliers(self.team.suppliers.into_iter().map(|c| c.name))
            .with_options(SynthesisOptions {
                channel,
                ..SynthesisOptions::default()
            });
        request.channel_provider = self.integrations.phone;
        Ok(request)
    }
}

/// Synthesizes a personalized email-automation workflow from an onboarding request
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the onboarding request JSON file
    request_path: String,

    /// Treat the input as a dashboard onboarding form instead of a request
    #[arg(long)]
    form: bool,

    /// Path to a TOML synthesizer config
    #[arg(short, long)]
    config: Option<String>,

    /// Override the mailbox channel of the request
    #[arg(long, value_enum)]
    channel: Option<ChannelCli>,

    /// Add a draft-reply action node
    #[arg(long)]
    drafts: bool,

    /// Where to write the artifact JSON; printed to stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Print a human-readable outline of the workflow
    #[arg(short, long)]
    summary: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Configuration ---
    let synthesizer = match &cli.config {
        Some(path) => SynthesizerConfig::from_file(path)
            .and_then(|config| Synthesizer::from_config(&config))
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid config '{}': {}", path, e))),
        None => Synthesizer::new(),
    };

    // --- 2. Parsing and Conversion ---
    let request_json = fs::read_to_string(&cli.request_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read request file '{}': {}",
            &cli.request_path, e
        ))
    });
    let mut request = if cli.form {
        let form: RawOnboardingForm = serde_json::from_str(&request_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse form JSON: {}", e)));
        form.into_request()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert form: {}", e)))
    } else {
        serde_json::from_str::<OnboardingRequest>(&request_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse request JSON: {}", e)))
    };
    if let Some(channel) = cli.channel {
        request.options.channel = match channel {
            ChannelCli::Gmail => Channel::Gmail,
            ChannelCli::Outlook => Channel::Outlook,
        };
    }
    if cli.drafts {
        request.options.auto_reply_drafts = true;
    }

    // --- 3. Synthesis ---
    let synth_start = Instant::now();
    let artifact = synthesizer
        .synthesize_request(&request)
        .unwrap_or_else(|e| exit_with_error(&format!("Synthesis failed: {}", e)));
    let synth_duration = synth_start.elapsed();
    artifact
        .validate()
        .unwrap_or_else(|e| exit_with_error(&format!("Synthesized workflow is invalid: {}", e)));

    // --- 4. Output ---
    match &cli.output {
        Some(path) => {
            artifact
                .save(path)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to save workflow: {}", e)));
            info!(path = %path, "workflow written");
        }
        None => {
            let json = artifact
                .to_json_pretty()
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{}", json);
        }
    }

    if cli.summary {
        let requested = (request.custom_managers.len(), request.custom_suppliers.len());
        eprintln!("{}", visualize_artifact(&artifact, Some(requested)));
    }

    info!(
        fingerprint = %fingerprint(&request).map(|f| f.to_string()).unwrap_or_default(),
        synthesis = ?synth_duration,
        total = ?total_start.elapsed(),
        "done"
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
