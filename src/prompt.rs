//! System prompt generation for the AI classification node.

use crate::profile::NormalizedProfile;
use itertools::Itertools;

/// Provider label used when the tenant did not name a phone system.
pub const DEFAULT_CHANNEL_PROVIDER: &str = "the business phone system";

/// Categories the AI node sorts every incoming email into.
pub const EMAIL_CATEGORIES: &[&str] = &[
    "URGENT", "SALES", "SUPPORT", "MANAGER", "SUPPLIER", "BILLING", "MISC",
];

const ROUTING_RULES: &str = r#"Routing rules:
- If the email is addressed to or clearly concerns one of the managers listed above, set "routeTo" to that manager's name exactly as listed.
- If the email comes from or concerns one of the suppliers listed above, set "routeTo" to that supplier's name exactly as listed.
- Otherwise leave "routeTo" as an empty string.
- Mark "urgent" true for emergencies, safety issues or anything that cannot wait for the response time commitment.

Respond with a single JSON object and nothing else:
{"category": "<one of the categories>", "routeTo": "<name or empty>", "urgent": <true or false>, "summary": "<one sentence>"}"#;

/// Builds the system prompt embedding the tenant's identity and rosters.
pub struct PromptComposer;

impl PromptComposer {
    /// Composes the prompt. Absent optional fields are left out of the text.
    pub fn compose(
        profile: &NormalizedProfile,
        managers: &[String],
        suppliers: &[String],
        channel_provider: Option<&str>,
    ) -> String {
        let company = &profile.prompt_company_name;
        let mut sections: Vec<String> = Vec::new();

        sections.push(format!(
            "You are the email assistant for {}. Business type: {}. You read every incoming customer email, classify it and decide who on the team should see it.",
            company, profile.industry_description
        ));

        let mut facts: Vec<String> = Vec::new();
        if !profile.primary_services.is_empty() {
            facts.push(format!(
                "Services offered: {}.",
                profile.primary_services.iter().join(", ")
            ));
        }
        facts.push(format!(
            "Response time commitment: {}.",
            profile.response_time
        ));
        if let Some(hours) = &profile.business_hours {
            facts.push(format!("Business hours: {}.", hours));
        }
        if let Some(phone) = &profile.business_phone {
            facts.push(format!("Main phone: {}.", phone));
        }
        if let Some(phone) = &profile.emergency_phone {
            facts.push(format!("Emergency line: {}.", phone));
        }
        if let Some(address) = &profile.business_address {
            facts.push(format!("Address: {}.", address));
        }
        if let Some(radius) = profile.service_area_radius {
            facts.push(format!(
                "Service area radius: {} from the business address.",
                radius
            ));
        }
        if let Some(email) = &profile.business_email {
            facts.push(format!(
                "The business sends mail from {}; never treat those messages as customer inquiries.",
                email
            ));
        }
        sections.push(facts.join("\n"));

        sections.push(format!(
            "Call and voicemail notifications from {} may also arrive by email. Treat them as customer inquiries.",
            channel_provider
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .unwrap_or(DEFAULT_CHANNEL_PROVIDER)
        ));

        if !managers.is_empty() {
            sections.push(format!("Managers:\n{}", bullet_list(managers)));
        }
        if !suppliers.is_empty() {
            sections.push(format!("Suppliers:\n{}", bullet_list(suppliers)));
        }

        sections.push(format!(
            "Categories: {}.",
            EMAIL_CATEGORIES.iter().join(", ")
        ));
        sections.push(ROUTING_RULES.to_string());

        sections.join("\n\n")
    }
}

fn bullet_list(names: &[String]) -> String {
    names.iter().map(|n| format!("- {}", n)).join("\n")
}
