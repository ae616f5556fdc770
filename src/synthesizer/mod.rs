use crate::artifact::{ArtifactSerializer, WorkflowArtifact, workflow_name};
use crate::config::SynthesizerConfig;
use crate::credentials::CredentialBinder;
use crate::error::{ConfigError, SynthesisError};
use crate::profile::{
    BusinessProfile, LookupTables, OnboardingRequest, ProfileNormalizer, SynthesisOptions,
};
use crate::prompt::PromptComposer;
use crate::roster::{MANAGER_CAP, RosterLimiter, SUPPLIER_CAP};
use tracing::{debug, info, info_span};

mod assembler;
mod ids;
pub mod nodes;

use assembler::GraphAssembler;
use nodes::NodeFactoryRegistry;

pub use ids::{NodeId, NodeIdAllocator, NodeRole};
pub use nodes::{NodeContext, NodeFactory, NodeSlot};

/// Turns business profiles and rosters into workflow artifacts.
///
/// A `Synthesizer` only holds immutable configuration. It is `Send + Sync` and can
/// be shared by any number of concurrent callers; each call builds its output from
/// scratch.
pub struct Synthesizer {
    tables: LookupTables,
    limiter: RosterLimiter,
    factories: NodeFactoryRegistry,
}

pub struct SynthesizerBuilder {
    tables: LookupTables,
    manager_cap: usize,
    supplier_cap: usize,
    factories: NodeFactoryRegistry,
}

impl Default for SynthesizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthesizerBuilder {
    pub fn new() -> Self {
        Self {
            tables: LookupTables::default(),
            manager_cap: MANAGER_CAP,
            supplier_cap: SUPPLIER_CAP,
            factories: NodeFactoryRegistry::default(),
        }
    }

    pub fn with_industry(mut self, key: &str, description: &str) -> Self {
        self.tables.insert_industry(key, description);
        self
    }

    pub fn with_response_time(mut self, code: &str, phrase: &str) -> Self {
        self.tables.insert_response_time(code, phrase);
        self
    }

    pub fn with_manager_cap(mut self, cap: usize) -> Self {
        self.manager_cap = cap;
        self
    }

    pub fn with_supplier_cap(mut self, cap: usize) -> Self {
        self.supplier_cap = cap;
        self
    }

    /// Applies every setting present in a config file.
    pub fn with_config(mut self, config: &SynthesizerConfig) -> Self {
        for (key, description) in &config.industries {
            self.tables.insert_industry(key, description);
        }
        for (code, phrase) in &config.response_times {
            self.tables.insert_response_time(code, phrase);
        }
        if let Some(cap) = config.manager_cap {
            self.manager_cap = cap;
        }
        if let Some(cap) = config.supplier_cap {
            self.supplier_cap = cap;
        }
        self
    }

    /// Replaces the payload factory for the factory's node kind.
    pub fn with_node_factory(mut self, factory: Box<dyn NodeFactory>) -> Self {
        self.factories.insert(factory);
        self
    }

    pub fn build(self) -> Result<Synthesizer, ConfigError> {
        check_cap("manager", self.manager_cap, MANAGER_CAP)?;
        check_cap("supplier", self.supplier_cap, SUPPLIER_CAP)?;
        Ok(Synthesizer {
            tables: self.tables,
            limiter: RosterLimiter::new(self.manager_cap, self.supplier_cap),
            factories: self.factories,
        })
    }
}

fn check_cap(roster: &str, cap: usize, max: usize) -> Result<(), ConfigError> {
    if cap == 0 || cap > max {
        return Err(ConfigError::InvalidCap {
            roster: roster.to_string(),
            cap,
            max,
        });
    }
    Ok(())
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self {
            tables: LookupTables::default(),
            limiter: RosterLimiter::default(),
            factories: NodeFactoryRegistry::default(),
        }
    }
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SynthesizerBuilder {
        SynthesizerBuilder::new()
    }

    pub fn from_config(config: &SynthesizerConfig) -> Result<Self, ConfigError> {
        SynthesizerBuilder::new().with_config(config).build()
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    pub fn roster_limiter(&self) -> &RosterLimiter {
        &self.limiter
    }

    /// Synthesizes the workflow for one tenant.
    ///
    /// # Arguments
    ///
    /// * `profile`: The tenant's business profile. `user_id` and `company_name` must
    ///   be non-blank; every other field may be missing.
    /// * `options`: Channel and graph-shape switches.
    /// * `managers`, `suppliers`: Display names, in priority order. Entries past the
    ///   caps are dropped silently.
    /// * `channel_provider`: Optional phone-system label mentioned in the prompt.
    ///
    /// # Returns
    ///
    /// * `Ok(WorkflowArtifact)`: A well-formed artifact, for any combination of
    ///   optional fields.
    /// * `Err(SynthesisError)`: Only when a required identifier is missing.
    pub fn synthesize(
        &self,
        profile: &BusinessProfile,
        options: &SynthesisOptions,
        managers: &[String],
        suppliers: &[String],
        channel_provider: Option<&str>,
    ) -> Result<WorkflowArtifact, SynthesisError> {
        check_preconditions(profile)?;
        let _span = info_span!("synthesize", user_id = %profile.user_id).entered();

        // 1. Defaults and derived attributes
        let normalized = ProfileNormalizer::new(&self.tables).normalize(profile);
        debug!(
            industry = %normalized.industry_description,
            domain = ?normalized.email_domain,
            "profile normalized"
        );

        // 2. Roster caps
        let roster = self.limiter.apply(managers, suppliers);

        // 3. Tenant-scoped credential
        let credentials =
            CredentialBinder::bind(&normalized.user_id, &normalized.company_name, options.channel);

        // 4. Prompt
        let prompt = PromptComposer::compose(
            &normalized,
            &roster.managers,
            &roster.suppliers,
            channel_provider,
        );

        // 5. Graph
        let graph = GraphAssembler::new(&self.factories, options).assemble(
            &normalized,
            &credentials,
            &prompt,
            &roster.managers,
            &roster.suppliers,
        );

        // 6. Artifact
        let artifact = ArtifactSerializer::serialize(
            workflow_name(&normalized.company_name),
            graph,
            &roster.managers,
            &roster.suppliers,
        );

        info!(
            channel = %options.channel,
            nodes = artifact.nodes.len(),
            managers = artifact.meta.custom_managers.len(),
            suppliers = artifact.meta.custom_suppliers.len(),
            "workflow synthesized"
        );
        Ok(artifact)
    }

    pub fn synthesize_request(
        &self,
        request: &OnboardingRequest,
    ) -> Result<WorkflowArtifact, SynthesisError> {
        self.synthesize(
            &request.business_profile,
            &request.options,
            &request.custom_managers,
            &request.custom_suppliers,
            request.channel_provider.as_deref(),
        )
    }

    /// Async calling convention for integration with async handlers.
    ///
    /// Synthesis never blocks, so this completes on first poll.
    pub async fn synthesize_async(
        &self,
        request: &OnboardingRequest,
    ) -> Result<WorkflowArtifact, SynthesisError> {
        self.synthesize_request(request)
    }
}

fn check_preconditions(profile: &BusinessProfile) -> Result<(), SynthesisError> {
    if profile.user_id.trim().is_empty() {
        return Err(SynthesisError::MissingUserId);
    }
    if profile.company_name.trim().is_empty() {
        return Err(SynthesisError::MissingCompanyName {
            user_id: profile.user_id.clone(),
        });
    }
    Ok(())
}
