use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node identifier, unique within one workflow artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The role a node plays, which fully determines its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Trigger,
    Ai,
    DraftReply,
    /// Zero-based position in the capped manager roster.
    Manager(usize),
    /// Zero-based position in the capped supplier roster.
    Supplier(usize),
}

impl NodeRole {
    fn slug(&self) -> String {
        match self {
            NodeRole::Trigger => "trigger".to_string(),
            NodeRole::Ai => "ai".to_string(),
            NodeRole::DraftReply => "draft-reply".to_string(),
            NodeRole::Manager(index) => format!("manager-{}", index),
            NodeRole::Supplier(index) => format!("supplier-{}", index),
        }
    }
}

/// Hands out node ids keyed by role.
///
/// The role-to-slug mapping is injective, so ids are unique by construction, and
/// allocating the same role twice returns the same id.
#[derive(Debug, Default)]
pub struct NodeIdAllocator {
    issued: AHashMap<NodeRole, NodeId>,
    order: Vec<NodeId>,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, role: NodeRole) -> NodeId {
        if let Some(id) = self.issued.get(&role) {
            return id.clone();
        }
        let id = NodeId(role.slug());
        self.issued.insert(role, id.clone());
        self.order.push(id.clone());
        id
    }

    /// Ids in the order they were first allocated.
    pub fn issued(&self) -> &[NodeId] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_roles() {
        let mut ids = NodeIdAllocator::new();
        assert_eq!(ids.allocate(NodeRole::Trigger).as_str(), "trigger");
        assert_eq!(ids.allocate(NodeRole::Ai).as_str(), "ai");
        assert_eq!(ids.allocate(NodeRole::Manager(0)).as_str(), "manager-0");
        assert_eq!(ids.allocate(NodeRole::Supplier(3)).as_str(), "supplier-3");
    }

    #[test]
    fn allocation_is_idempotent() {
        let mut ids = NodeIdAllocator::new();
        let first = ids.allocate(NodeRole::Manager(2));
        let second = ids.allocate(NodeRole::Manager(2));
        assert_eq!(first, second);
        assert_eq!(ids.issued().len(), 1);
    }

    #[test]
    fn managers_and_suppliers_never_collide() {
        let mut ids = NodeIdAllocator::new();
        for i in 0..10 {
            ids.allocate(NodeRole::Manager(i));
            ids.allocate(NodeRole::Supplier(i));
        }
        let mut unique: Vec<_> = ids.issued().to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 20);
    }
}
