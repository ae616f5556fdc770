//! Common test utilities for building business profiles and rosters.
use inboxflow::prelude::*;

/// The hot tub retailer used throughout the onboarding regression suite.
#[allow(dead_code)]
pub fn hot_tub_profile() -> BusinessProfile {
    BusinessProfile {
        industry: Some("hot-tub-spa".to_string()),
        business_email: Some("service@thehotubman.com".to_string()),
        ..BusinessProfile::new("user_123", "The Hot Tub Man Ltd")
    }
}

#[allow(dead_code)]
pub fn hot_tub_managers() -> Vec<String> {
    to_strings(&["Hailey", "Jillian", "Stacie", "Aaron"])
}

#[allow(dead_code)]
pub fn hot_tub_suppliers() -> Vec<String> {
    to_strings(&[
        "Aqua Spa Pool Supply",
        "Paradise Patio Furniture Ltd",
        "Strong Spas",
    ])
}

/// A fully populated HVAC profile.
#[allow(dead_code)]
pub fn hvac_profile() -> BusinessProfile {
    BusinessProfile {
        business_email: Some("dispatch@coolair.example".to_string()),
        business_phone: Some("555-0100".to_string()),
        emergency_phone: Some("555-0199".to_string()),
        business_address: Some("12 Furnace Rd, Springfield".to_string()),
        industry: Some("hvac".to_string()),
        primary_services: Some(to_strings(&["heating_repair", "cooling_repair"])),
        response_time_goal: Some("1_hour".to_string()),
        business_hours: Some("Mon-Fri 7am-6pm".to_string()),
        service_area_radius: Some(40.0),
        ..BusinessProfile::new("user_hvac", "Cool Air Co")
    }
}

/// Generates `count` distinct names such as `"Manager 1"`, `"Manager 2"`, ...
#[allow(dead_code)]
pub fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{} {}", prefix, i)).collect()
}

#[allow(dead_code)]
pub fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Synthesizes with the default synthesizer and options.
#[allow(dead_code)]
pub fn synthesize_default(
    profile: &BusinessProfile,
    managers: &[String],
    suppliers: &[String],
    provider: Option<&str>,
) -> WorkflowArtifact {
    Synthesizer::new()
        .synthesize(
            profile,
            &SynthesisOptions::default(),
            managers,
            suppliers,
            provider,
        )
        .expect("Failed to synthesize workflow")
}

#[allow(dead_code)]
pub const HOT_TUB_REQUEST_JSON: &str = r#"{
  "businessProfile": {
    "user_id": "user_123",
    "company_name": "The Hot Tub Man Ltd",
    "industry": "hot-tub-spa",
    "business_email": "service@thehotubman.com",
    "response_time_goal": "4_hours",
    "primary_services": ["installation", "water_care"]
  },
  "options": { "channel": "gmail", "autoReplyDrafts": true },
  "customManagers": ["Hailey", "Jillian", "Stacie", "Aaron"],
  "customSuppliers": ["Aqua Spa Pool Supply", "Paradise Patio Furniture Ltd", "Strong Spas"],
  "channelProvider": "RingCentral"
}"#;
