use crate::channel::Channel;
use serde::{Deserialize, Serialize};

/// A reference to an OAuth credential, resolved by the execution runtime later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialRef {
    pub id: String,
    pub name: String,
}

/// A credential reference together with the credential type it belongs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialBinding {
    pub channel: Channel,
    pub reference: CredentialRef,
}

impl CredentialBinding {
    pub fn credential_type(&self) -> &'static str {
        self.channel.credential_type()
    }
}

/// Derives tenant-scoped credential handles for channel nodes.
pub struct CredentialBinder;

impl CredentialBinder {
    /// Binds the credential for `channel`.
    ///
    /// The id is `user_{user_id}_{channel_key}`, so synthesizing again for the same
    /// tenant reuses the same handle. Nothing is looked up or validated here.
    pub fn bind(user_id: &str, company_name: &str, channel: Channel) -> CredentialBinding {
        CredentialBinding {
            channel,
            reference: CredentialRef {
                id: format!("user_{}_{}", user_id, channel.key()),
                name: format!("{} {}", company_name, channel.display_name()),
            },
        }
    }
}
