//! # inboxflow - Personalized Email-Automation Workflow Synthesizer
//!
//! **inboxflow** turns a business profile and its staff and supplier rosters into a
//! complete, declarative automation graph: a mailbox trigger, an AI classification
//! node carrying a tenant-specific system prompt, and one notifier node per manager
//! and supplier. The artifact is plain JSON, ready to be deployed to a workflow
//! runtime by whoever calls the synthesizer.
//!
//! ## Pipeline
//!
//! 1.  **Normalize**: fill absent profile fields with defaults and derive the email
//!     domain, the response-time phrase and the industry description.
//! 2.  **Limit**: keep at most 5 managers and 10 suppliers, in the order given.
//! 3.  **Bind credentials**: derive the tenant-scoped credential handle for the mailbox.
//! 4.  **Compose the prompt**: embed identity, services, commitments and rosters.
//! 5.  **Assemble the graph**: role-keyed node ids, trigger → AI → notifiers.
//! 6.  **Serialize**: `{ name, nodes, connections, meta }`.
//!
//! Synthesis performs no I/O and holds no state between calls. The same inputs always
//! produce the same artifact.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inboxflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let profile = BusinessProfile {
//!         industry: Some("hot-tub-spa".to_string()),
//!         business_email: Some("service@thehotubman.com".to_string()),
//!         ..BusinessProfile::new("user_123", "The Hot Tub Man Ltd")
//!     };
//!     let managers = vec!["Hailey".to_string(), "Jillian".to_string()];
//!     let suppliers = vec!["Strong Spas".to_string()];
//!
//!     let synthesizer = Synthesizer::builder()
//!         .with_response_time("same_day", "Same business day")
//!         .build()?;
//!
//!     let artifact = synthesizer.synthesize(
//!         &profile,
//!         &SynthesisOptions::default(),
//!         &managers,
//!         &suppliers,
//!         Some("RingCentral"),
//!     )?;
//!
//!     assert_eq!(artifact.name, "The Hot Tub Man Ltd - Email Automation Workflow");
//!     println!("{}", artifact.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod channel;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fingerprint;
pub mod prelude;
pub mod profile;
pub mod prompt;
pub mod roster;
pub mod synthesizer;
