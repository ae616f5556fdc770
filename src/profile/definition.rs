use crate::channel::Channel;
use serde::{Deserialize, Serialize};

/// The business profile collected during onboarding.
///
/// Only `user_id` and `company_name` are required. Every other field may be absent,
/// and the synthesizer substitutes a safe default for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(alias = "companyName")]
    pub company_name: String,
    #[serde(alias = "businessEmail")]
    pub business_email: Option<String>,
    #[serde(alias = "businessPhone")]
    pub business_phone: Option<String>,
    #[serde(alias = "emergencyPhone")]
    pub emergency_phone: Option<String>,
    #[serde(alias = "businessAddress")]
    pub business_address: Option<String>,
    pub industry: Option<String>,
    #[serde(alias = "primaryServices")]
    pub primary_services: Option<Vec<String>>,
    #[serde(alias = "responseTimeGoal")]
    pub response_time_goal: Option<String>,
    #[serde(alias = "businessHours")]
    pub business_hours: Option<String>,
    #[serde(alias = "serviceAreaRadius")]
    pub service_area_radius: Option<f64>,
}

impl BusinessProfile {
    /// Creates a profile carrying only the two required identifiers.
    pub fn new(user_id: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            company_name: company_name.into(),
            ..Self::default()
        }
    }
}

/// Per-request switches that shape the generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesisOptions {
    /// The mailbox integration the trigger and notifier nodes talk to.
    pub channel: Channel,
    /// Adds a draft-reply action node fed by the AI node.
    pub auto_reply_drafts: bool,
    /// How often the trigger polls the mailbox, in minutes.
    pub poll_minutes: u32,
    /// Model identifier placed on the AI node.
    pub ai_model: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            channel: Channel::Gmail,
            auto_reply_drafts: false,
            poll_minutes: 1,
            ai_model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Everything the onboarding flow hands over in one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingRequest {
    #[serde(alias = "business_profile", alias = "businessData")]
    pub business_profile: BusinessProfile,
    pub options: SynthesisOptions,
    pub custom_managers: Vec<String>,
    pub custom_suppliers: Vec<String>,
    pub channel_provider: Option<String>,
}

impl OnboardingRequest {
    pub fn new(business_profile: BusinessProfile) -> Self {
        Self {
            business_profile,
            ..Self::default()
        }
    }

    pub fn with_managers<I, S>(mut self, managers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_managers = managers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_suppliers<I, S>(mut self, suppliers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_suppliers = suppliers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_channel_provider(mut self, provider: impl Into<String>) -> Self {
        self.channel_provider = Some(provider.into());
        self
    }

    pub fn with_options(mut self, options: SynthesisOptions) -> Self {
        self.options = options;
        self
    }
}
