use super::ids::{NodeId, NodeIdAllocator, NodeRole};
use super::nodes::{NodeContext, NodeFactoryRegistry, NodeSlot};
use crate::artifact::{Connections, Node, NodeKind, WorkflowGraph};
use crate::credentials::CredentialBinding;
use crate::profile::{NormalizedProfile, SynthesisOptions};
use tracing::debug;

const TRIGGER_POSITION: [i32; 2] = [240, 300];
const AI_POSITION: [i32; 2] = [480, 300];
const FAN_OUT_X: i32 = 760;
const FAN_OUT_TOP: i32 = 100;
const ROW_HEIGHT: i32 = 120;

/// Responsible for laying out the node array and the edge map.
///
/// Topology is fixed: trigger → AI, then the AI node broadcasts to the optional
/// draft-reply action and to every roster notifier.
pub(super) struct GraphAssembler<'a> {
    factories: &'a NodeFactoryRegistry,
    options: &'a SynthesisOptions,
}

impl<'a> GraphAssembler<'a> {
    pub(super) fn new(factories: &'a NodeFactoryRegistry, options: &'a SynthesisOptions) -> Self {
        Self { factories, options }
    }

    pub(super) fn assemble(
        &self,
        profile: &NormalizedProfile,
        credentials: &CredentialBinding,
        prompt: &str,
        managers: &[String],
        suppliers: &[String],
    ) -> WorkflowGraph {
        let ctx = NodeContext {
            profile,
            credentials,
            options: self.options,
            prompt,
        };
        let mut ids = NodeIdAllocator::new();
        let mut nodes = Vec::with_capacity(3 + managers.len() + suppliers.len());
        let mut connections = Connections::new();

        let trigger_id = ids.allocate(NodeRole::Trigger);
        nodes.push(self.build_node(
            NodeKind::Trigger,
            slot(
                trigger_id.clone(),
                format!("{} Trigger", self.options.channel.display_name()),
                TRIGGER_POSITION,
            ),
            &ctx,
        ));

        let ai_id = ids.allocate(NodeRole::Ai);
        nodes.push(self.build_node(
            NodeKind::Ai,
            slot(ai_id.clone(), "AI Email Classifier".to_string(), AI_POSITION),
            &ctx,
        ));
        connections.connect(&trigger_id, &ai_id);

        let mut fan_out: Vec<(NodeRole, NodeKind, String)> = Vec::new();
        if self.options.auto_reply_drafts {
            fan_out.push((NodeRole::DraftReply, NodeKind::Action, "Draft Reply".to_string()));
        }
        fan_out.extend(
            managers
                .iter()
                .enumerate()
                .map(|(i, name)| (NodeRole::Manager(i), NodeKind::ManagerNotifier, name.clone())),
        );
        fan_out.extend(
            suppliers
                .iter()
                .enumerate()
                .map(|(i, name)| (NodeRole::Supplier(i), NodeKind::SupplierNotifier, name.clone())),
        );

        for (row, (role, kind, name)) in fan_out.into_iter().enumerate() {
            let id = ids.allocate(role);
            let position = [FAN_OUT_X, FAN_OUT_TOP + row as i32 * ROW_HEIGHT];
            nodes.push(self.build_node(kind, slot(id.clone(), name, position), &ctx));
            connections.connect(&ai_id, &id);
        }

        debug!(
            nodes = nodes.len(),
            edges = connections.edge_count(),
            "workflow graph assembled"
        );
        WorkflowGraph { nodes, connections }
    }

    fn build_node(&self, kind: NodeKind, slot: NodeSlot, ctx: &NodeContext<'_>) -> Node {
        let mut node = self.factories.get(kind).build(&slot, ctx);
        node.id = slot.id;
        node.kind = kind;
        node.name = slot.name;
        node.position = slot.position;
        node
    }
}

fn slot(id: NodeId, name: String, position: [i32; 2]) -> NodeSlot {
    NodeSlot { id, name, position }
}
