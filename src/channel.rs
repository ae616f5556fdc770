use serde::{Deserialize, Serialize};
use std::fmt;

/// The mailbox integrations a workflow can be wired to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Gmail,
    Outlook,
}

impl Channel {
    /// Short key used inside credential ids, e.g. `user_{id}_gmail`.
    pub fn key(&self) -> &'static str {
        match self {
            Channel::Gmail => "gmail",
            Channel::Outlook => "outlook",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Gmail => "Gmail",
            Channel::Outlook => "Outlook",
        }
    }

    /// The credential type the execution runtime resolves the binding against.
    pub fn credential_type(&self) -> &'static str {
        match self {
            Channel::Gmail => "gmailOAuth2",
            Channel::Outlook => "microsoftOutlookOAuth2Api",
        }
    }

    pub fn trigger_integration(&self) -> &'static str {
        match self {
            Channel::Gmail => "n8n-nodes-base.gmailTrigger",
            Channel::Outlook => "n8n-nodes-base.microsoftOutlookTrigger",
        }
    }

    pub fn mailer_integration(&self) -> &'static str {
        match self {
            Channel::Gmail => "n8n-nodes-base.gmail",
            Channel::Outlook => "n8n-nodes-base.microsoftOutlook",
        }
    }

    /// Name of the trigger parameter that carries the inbox filter.
    pub fn filter_parameter(&self) -> &'static str {
        match self {
            Channel::Gmail => "q",
            Channel::Outlook => "custom",
        }
    }

    /// Builds the inbox filter expression in the channel's own query syntax.
    ///
    /// With a domain, mail sent from that domain is excluded so the workflow never
    /// processes its own outgoing notifications.
    pub fn inbox_filter(&self, excluded_domain: Option<&str>) -> String {
        match (self, excluded_domain) {
            (Channel::Gmail, Some(domain)) => format!("in:inbox -from:@{}", domain),
            (Channel::Gmail, None) => "in:inbox".to_string(),
            (Channel::Outlook, Some(domain)) => format!(
                "isRead eq false and not(endswith(from/emailAddress/address, '@{}'))",
                domain
            ),
            (Channel::Outlook, None) => "isRead eq false".to_string(),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
