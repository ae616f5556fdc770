//! Input fingerprints and an optional caller-owned result cache.

use crate::artifact::WorkflowArtifact;
use crate::error::SynthesisError;
use crate::profile::OnboardingRequest;
use crate::synthesizer::Synthesizer;
use ahash::{AHashMap, RandomState};
use bincode::config::standard;
use bincode::serde::encode_to_vec;
use std::fmt;

// Fixed seeds keep fingerprints stable across processes.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// A stable hash of everything that influences a synthesized artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Fingerprints an onboarding request from its bincode encoding.
pub fn fingerprint(request: &OnboardingRequest) -> Result<Fingerprint, SynthesisError> {
    let bytes = encode_request(request)?;
    let state = RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]);
    Ok(Fingerprint(state.hash_one(&bytes)))
}

fn encode_request(request: &OnboardingRequest) -> Result<Vec<u8>, SynthesisError> {
    encode_to_vec(request, standard())
        .map_err(|e| SynthesisError::Fingerprint(format!("Serialization failed: {}", e)))
}

/// Memoizes artifacts of one synthesizer by request.
///
/// Entries are keyed by the full bincode encoding of the request, so two distinct
/// requests never share an entry. The cache is owned by the caller and is
/// unbounded; call [`SynthesisCache::clear`] to release it.
pub struct SynthesisCache<'a> {
    synthesizer: &'a Synthesizer,
    entries: AHashMap<Vec<u8>, WorkflowArtifact>,
    hits: u64,
    misses: u64,
}

impl<'a> SynthesisCache<'a> {
    pub fn new(synthesizer: &'a Synthesizer) -> Self {
        Self {
            synthesizer,
            entries: AHashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached artifact for `request`, synthesizing it on a miss.
    pub fn get_or_synthesize(
        &mut self,
        request: &OnboardingRequest,
    ) -> Result<WorkflowArtifact, SynthesisError> {
        let key = encode_request(request)?;
        if let Some(artifact) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(artifact.clone());
        }
        let artifact = self.synthesizer.synthesize_request(request)?;
        self.misses += 1;
        self.entries.insert(key, artifact.clone());
        Ok(artifact)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
