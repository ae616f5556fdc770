use super::{NodeKind, WorkflowArtifact};
use crate::error::ArtifactError;
use ahash::AHashSet;

impl WorkflowArtifact {
    /// Checks the structural invariants of the graph.
    ///
    /// Synthesized artifacts always pass. This is meant for artifacts that were
    /// loaded from disk or edited after synthesis.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let mut ids: AHashSet<&str> = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(ArtifactError::DuplicateNodeId(node.id.to_string()));
            }
        }

        let mut connected: AHashSet<&str> = AHashSet::new();
        for (source, target) in self.connections.edges() {
            for end in [source, target] {
                if !ids.contains(end) {
                    return Err(ArtifactError::DanglingConnection {
                        missing_node_id: end.to_string(),
                        source_node_id: source.to_string(),
                    });
                }
            }
            connected.insert(source);
            connected.insert(target);
        }

        if self.nodes.len() > 1 {
            if let Some(node) = self
                .nodes
                .iter()
                .find(|n| !connected.contains(n.id.as_str()))
            {
                return Err(ArtifactError::UnconnectedNode(node.id.to_string()));
            }
        }

        for (role, kind, meta_len) in [
            ("manager", NodeKind::ManagerNotifier, self.meta.custom_managers.len()),
            ("supplier", NodeKind::SupplierNotifier, self.meta.custom_suppliers.len()),
        ] {
            let node_count = self.nodes_of_kind(kind).count();
            if node_count != meta_len {
                return Err(ArtifactError::MetaMismatch {
                    role: role.to_string(),
                    meta_len,
                    node_count,
                });
            }
        }

        Ok(())
    }
}
