//! The declarative workflow artifact handed to the deployment collaborator.

use crate::credentials::CredentialRef;
use crate::error::ArtifactError;
use crate::synthesizer::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

mod validate;
pub mod visualizer;

/// Suffix appended to the company name to form the workflow name.
pub const WORKFLOW_NAME_SUFFIX: &str = " - Email Automation Workflow";

/// Returns `"{company_name} - Email Automation Workflow"`.
pub fn workflow_name(company_name: &str) -> String {
    format!("{}{}", company_name, WORKFLOW_NAME_SUFFIX)
}

/// The closed set of roles a node can play in a synthesized workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Trigger,
    Action,
    Ai,
    ManagerNotifier,
    SupplierNotifier,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Trigger => "trigger",
            NodeKind::Action => "action",
            NodeKind::Ai => "ai",
            NodeKind::ManagerNotifier => "manager-notifier",
            NodeKind::SupplierNotifier => "supplier-notifier",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node of the workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// The runtime node implementation, e.g. `n8n-nodes-base.gmailTrigger`.
    pub integration: String,
    pub type_version: u32,
    pub position: [i32; 2],
    pub parameters: serde_json::Value,
    /// Credential references keyed by credential type.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub credentials: BTreeMap<String, CredentialRef>,
}

impl Node {
    pub fn credential(&self, credential_type: &str) -> Option<&CredentialRef> {
        self.credentials.get(credential_type)
    }

    /// Reads a string parameter, if present.
    pub fn parameter_str(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(|v| v.as_str())
    }
}

/// One destination of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    /// Id of the destination node.
    pub node: String,
    #[serde(rename = "type")]
    pub port: String,
    pub index: u32,
}

/// The output ports of one source node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOutputs {
    pub main: Vec<Vec<ConnectionTarget>>,
}

/// Adjacency map from a source node id to the node inputs it feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Connections(BTreeMap<String, NodeOutputs>);

impl Connections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects the first output of `source` to the first input of `target`.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) {
        let edge = ConnectionTarget {
            node: target.to_string(),
            port: "main".to_string(),
            index: 0,
        };
        let outputs = self.0.entry(source.to_string()).or_default();
        match outputs.main.first_mut() {
            Some(port) => port.push(edge),
            None => outputs.main.push(vec![edge]),
        }
    }

    /// All `(source, target)` pairs, ordered by source id.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(source, outputs)| {
            outputs
                .main
                .iter()
                .flatten()
                .map(move |t| (source.as_str(), t.node.as_str()))
        })
    }

    pub fn targets_of(&self, source: &str) -> Vec<&str> {
        self.edges()
            .filter(|(s, _)| *s == source)
            .map(|(_, t)| t)
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Nodes and edges produced by the graph assembler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowGraph {
    pub nodes: Vec<Node>,
    pub connections: Connections,
}

/// The rosters that were actually applied, after truncation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMeta {
    #[serde(rename = "customManagers")]
    pub custom_managers: Vec<String>,
    #[serde(rename = "customSuppliers")]
    pub custom_suppliers: Vec<String>,
}

/// The complete, self-contained workflow for one tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowArtifact {
    pub name: String,
    pub nodes: Vec<Node>,
    pub connections: Connections,
    pub meta: ArtifactMeta,
}

/// Assembles the final artifact from its already-built parts.
pub struct ArtifactSerializer;

impl ArtifactSerializer {
    /// Pure assembly: `meta` echoes exactly the rosters the graph was built from.
    pub fn serialize(
        name: String,
        graph: WorkflowGraph,
        managers: &[String],
        suppliers: &[String],
    ) -> WorkflowArtifact {
        WorkflowArtifact {
            name,
            nodes: graph.nodes,
            connections: graph.connections,
            meta: ArtifactMeta {
                custom_managers: managers.to_vec(),
                custom_suppliers: suppliers.to_vec(),
            },
        }
    }
}

impl WorkflowArtifact {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    pub fn trigger(&self) -> Option<&Node> {
        self.nodes_of_kind(NodeKind::Trigger).next()
    }

    pub fn ai_node(&self) -> Option<&Node> {
        self.nodes_of_kind(NodeKind::Ai).next()
    }

    /// The system prompt carried by the AI node.
    pub fn prompt(&self) -> Option<&str> {
        self.ai_node()?.parameter_str("systemMessage")
    }

    /// The tenant credential bound to the trigger node.
    pub fn channel_credential(&self) -> Option<&CredentialRef> {
        self.trigger()?.credentials.values().next()
    }

    /// The inbox filter expression on the trigger node.
    pub fn trigger_filter(&self) -> Option<&str> {
        self.trigger()?
            .parameters
            .get("filters")?
            .as_object()?
            .values()
            .next()?
            .as_str()
    }

    pub fn to_json_pretty(&self) -> Result<String, ArtifactError> {
        serde_json::to_string_pretty(self).map_err(|e| ArtifactError::JsonParseError(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        serde_json::from_str(json).map_err(|e| ArtifactError::JsonParseError(e.to_string()))
    }

    /// Writes the artifact to a file as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| {
            ArtifactError::Io(format!("Could not write to file '{}': {}", path.display(), e))
        })
    }

    /// Loads an artifact previously written with [`WorkflowArtifact::save`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ArtifactError::Io(format!("Could not open file '{}': {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }
}
