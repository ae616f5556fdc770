use thiserror::Error;

/// Errors returned by [`Synthesizer::synthesize`](crate::synthesizer::Synthesizer::synthesize).
///
/// Only the two tenant identifiers are true preconditions. Every other field of a
/// business profile degrades to a default instead of producing an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Business profile is missing the required 'user_id'")]
    MissingUserId,

    #[error("Business profile for tenant '{user_id}' is missing the required 'company_name'")]
    MissingCompanyName { user_id: String },

    #[error("Failed to fingerprint onboarding request: {0}")]
    Fingerprint(String),
}

/// Errors that can occur while building a synthesizer from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse synthesizer config: {0}")]
    Parse(String),

    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("The {roster} cap must be between 1 and {max}, but {cap} was given")]
    InvalidCap {
        roster: String,
        cap: usize,
        max: usize,
    },
}

/// Structural problems found in a workflow artifact, or failures while moving one
/// to and from disk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("Node id '{0}' is used by more than one node")]
    DuplicateNodeId(String),

    #[error(
        "Node '{missing_node_id}' not found, which is required by a connection from node '{source_node_id}'"
    )]
    DanglingConnection {
        missing_node_id: String,
        source_node_id: String,
    },

    #[error("Node '{0}' has no incoming or outgoing connection")]
    UnconnectedNode(String),

    #[error("meta lists {meta_len} {role} names, but the workflow has {node_count} {role} nodes")]
    MetaMismatch {
        role: String,
        meta_len: usize,
        node_count: usize,
    },

    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("{0}")]
    Io(String),
}

/// Errors that can occur when converting a custom onboarding format into an
/// [`OnboardingRequest`](crate::profile::OnboardingRequest).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileConversionError {
    #[error("Invalid onboarding data: {0}")]
    ValidationError(String),
}
