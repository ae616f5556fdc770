//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the inboxflow
//! crate, so callers can synthesize workflows without importing each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use inboxflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let request_json = std::fs::read_to_string("path/to/onboarding.json")?;
//! let request: OnboardingRequest = serde_json::from_str(&request_json)?;
//!
//! let synthesizer = Synthesizer::new();
//! let artifact = synthesizer.synthesize_request(&request)?;
//! artifact.save("path/to/workflow.json")?;
//! # Ok(())
//! # }
//! ```

// Core synthesis
pub use crate::synthesizer::{NodeFactory, NodeId, Synthesizer, SynthesizerBuilder};

// Input model
pub use crate::channel::Channel;
pub use crate::profile::{BusinessProfile, IntoProfile, OnboardingRequest, SynthesisOptions};

// Output model
pub use crate::artifact::{ArtifactMeta, Connections, Node, NodeKind, WorkflowArtifact};
pub use crate::credentials::CredentialRef;

// Configuration and caching
pub use crate::config::SynthesizerConfig;
pub use crate::fingerprint::{Fingerprint, SynthesisCache, fingerprint};

// Error types
pub use crate::error::{ArtifactError, ConfigError, ProfileConversionError, SynthesisError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
