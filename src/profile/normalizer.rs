use super::definition::BusinessProfile;
use super::lookup::{GENERIC_RESPONSE_TIME, LookupTables};
use tracing::{debug, warn};

/// Company label used in prompt text when the profile carries no company name.
pub const PROMPT_COMPANY_FALLBACK: &str = "your business";
/// Company label used for the workflow name when the profile carries no company name.
pub const ARTIFACT_COMPANY_FALLBACK: &str = "Your Business";

/// A business profile with every optional field resolved.
///
/// Text fields are trimmed and blank values are treated as absent, so downstream
/// stages only ever see `Some` for content worth rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProfile {
    pub user_id: String,
    /// The company name as supplied, or [`ARTIFACT_COMPANY_FALLBACK`].
    pub company_name: String,
    /// The company name as supplied, or [`PROMPT_COMPANY_FALLBACK`].
    pub prompt_company_name: String,
    pub business_email: Option<String>,
    /// Lowercased domain of `business_email`, when it parses.
    pub email_domain: Option<String>,
    pub business_phone: Option<String>,
    pub emergency_phone: Option<String>,
    pub business_address: Option<String>,
    pub business_hours: Option<String>,
    pub service_area_radius: Option<f64>,
    pub industry_description: String,
    /// Service entries as supplied, minus blank ones.
    pub primary_services: Vec<String>,
    pub response_time: String,
}

/// Fills absent profile fields and derives the secondary attributes.
pub struct ProfileNormalizer<'a> {
    tables: &'a LookupTables,
}

impl<'a> ProfileNormalizer<'a> {
    pub fn new(tables: &'a LookupTables) -> Self {
        Self { tables }
    }

    /// Normalizes a profile. Never fails: missing or malformed optional fields
    /// fall back to defaults and are reported through `tracing` only.
    pub fn normalize(&self, profile: &BusinessProfile) -> NormalizedProfile {
        let has_company = !profile.company_name.trim().is_empty();
        let (company_name, prompt_company_name) = if has_company {
            (profile.company_name.clone(), profile.company_name.clone())
        } else {
            warn!(user_id = %profile.user_id, "profile has no company name, using placeholder");
            (
                ARTIFACT_COMPANY_FALLBACK.to_string(),
                PROMPT_COMPANY_FALLBACK.to_string(),
            )
        };

        let business_email = present(&profile.business_email);
        let email_domain = business_email.as_deref().and_then(email_domain);
        if business_email.is_some() && email_domain.is_none() {
            warn!(user_id = %profile.user_id, "business email has no usable domain, skipping self-mail filter");
        }

        let response_time = match self
            .tables
            .response_time_phrase(profile.response_time_goal.as_deref())
        {
            Some(phrase) => phrase.to_string(),
            None => {
                if let Some(code) = &profile.response_time_goal {
                    debug!(code = %code, "unmapped response time goal");
                }
                GENERIC_RESPONSE_TIME.to_string()
            }
        };

        let service_area_radius = match profile.service_area_radius {
            Some(r) if r.is_finite() && r > 0.0 => Some(r),
            Some(r) => {
                warn!(radius = r, "ignoring invalid service area radius");
                None
            }
            None => None,
        };

        let primary_services = profile
            .primary_services
            .iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .collect();

        NormalizedProfile {
            user_id: profile.user_id.clone(),
            company_name,
            prompt_company_name,
            business_email,
            email_domain,
            business_phone: present(&profile.business_phone),
            emergency_phone: present(&profile.emergency_phone),
            business_address: present(&profile.business_address),
            business_hours: present(&profile.business_hours),
            service_area_radius,
            industry_description: self
                .tables
                .industry_description(profile.industry.as_deref()),
            primary_services,
            response_time,
        }
    }
}

fn present(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Extracts the lowercased domain of an email address.
///
/// Returns `None` for anything that does not look like `local@host.tld`.
pub fn email_domain(email: &str) -> Option<String> {
    let (local, domain) = email.trim().rsplit_once('@')?;
    let domain = domain.trim_end_matches('.');
    let valid = !local.is_empty()
        && !local.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.contains("..")
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    valid.then(|| domain.to_ascii_lowercase())
}
