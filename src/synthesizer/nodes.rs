use super::ids::NodeId;
use crate::artifact::{Node, NodeKind};
use crate::credentials::CredentialBinding;
use crate::profile::{NormalizedProfile, SynthesisOptions};
use ahash::AHashMap;
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Everything a factory may read while building a node payload.
pub struct NodeContext<'a> {
    pub profile: &'a NormalizedProfile,
    pub credentials: &'a CredentialBinding,
    pub options: &'a SynthesisOptions,
    pub prompt: &'a str,
}

/// The identity and placement the assembler has already decided for a node.
///
/// The assembler re-applies these fields after the factory returns, so a factory
/// cannot break id uniqueness or the roster naming rule.
#[derive(Debug, Clone)]
pub struct NodeSlot {
    pub id: NodeId,
    pub name: String,
    pub position: [i32; 2],
}

/// Defines the contract for building the payload of one [`NodeKind`].
pub trait NodeFactory: Send + Sync {
    fn kind(&self) -> NodeKind;
    fn build(&self, slot: &NodeSlot, ctx: &NodeContext<'_>) -> Node;
}

/// Default factories, overridable per kind.
#[derive(Default)]
pub(crate) struct NodeFactoryRegistry {
    overrides: AHashMap<NodeKind, Box<dyn NodeFactory>>,
}

impl NodeFactoryRegistry {
    pub(crate) fn insert(&mut self, factory: Box<dyn NodeFactory>) {
        self.overrides.insert(factory.kind(), factory);
    }

    pub(crate) fn get(&self, kind: NodeKind) -> &dyn NodeFactory {
        match self.overrides.get(&kind) {
            Some(factory) => factory.as_ref(),
            None => default_factory(kind),
        }
    }
}

struct ChannelTriggerFactory;
struct AiClassifierFactory;
struct DraftReplyFactory;
struct ManagerNotifierFactory;
struct SupplierNotifierFactory;

static CHANNEL_TRIGGER: ChannelTriggerFactory = ChannelTriggerFactory;
static AI_CLASSIFIER: AiClassifierFactory = AiClassifierFactory;
static DRAFT_REPLY: DraftReplyFactory = DraftReplyFactory;
static MANAGER_NOTIFIER: ManagerNotifierFactory = ManagerNotifierFactory;
static SUPPLIER_NOTIFIER: SupplierNotifierFactory = SupplierNotifierFactory;

fn default_factory(kind: NodeKind) -> &'static dyn NodeFactory {
    match kind {
        NodeKind::Trigger => &CHANNEL_TRIGGER,
        NodeKind::Ai => &AI_CLASSIFIER,
        NodeKind::Action => &DRAFT_REPLY,
        NodeKind::ManagerNotifier => &MANAGER_NOTIFIER,
        NodeKind::SupplierNotifier => &SUPPLIER_NOTIFIER,
    }
}

/// Helper to create a node skeleton from its slot.
fn node_from_slot(
    slot: &NodeSlot,
    kind: NodeKind,
    integration: &str,
    parameters: Value,
) -> Node {
    Node {
        id: slot.id.clone(),
        name: slot.name.clone(),
        kind,
        integration: integration.to_string(),
        type_version: 1,
        position: slot.position,
        parameters,
        credentials: BTreeMap::new(),
    }
}

fn with_channel_credential(mut node: Node, ctx: &NodeContext<'_>) -> Node {
    node.credentials.insert(
        ctx.credentials.credential_type().to_string(),
        ctx.credentials.reference.clone(),
    );
    node
}

impl NodeFactory for ChannelTriggerFactory {
    fn kind(&self) -> NodeKind {
        NodeKind::Trigger
    }

    fn build(&self, slot: &NodeSlot, ctx: &NodeContext<'_>) -> Node {
        let channel = ctx.options.channel;
        let mut filters = serde_json::Map::new();
        filters.insert(
            channel.filter_parameter().to_string(),
            Value::String(channel.inbox_filter(ctx.profile.email_domain.as_deref())),
        );
        let parameters = json!({
            "pollTimes": {
                "item": [{ "mode": "everyX", "value": ctx.options.poll_minutes.max(1), "unit": "minutes" }]
            },
            "simple": false,
            "filters": filters,
            "options": {},
        });
        with_channel_credential(
            node_from_slot(slot, NodeKind::Trigger, channel.trigger_integration(), parameters),
            ctx,
        )
    }
}

impl NodeFactory for AiClassifierFactory {
    fn kind(&self) -> NodeKind {
        NodeKind::Ai
    }

    fn build(&self, slot: &NodeSlot, ctx: &NodeContext<'_>) -> Node {
        let parameters = json!({
            "model": ctx.options.ai_model,
            "systemMessage": ctx.prompt,
            "text": "={{ \"Subject: \" + $json.subject + \"\\nFrom: \" + $json.from + \"\\n\\n\" + $json.text }}",
            "jsonOutput": true,
        });
        node_from_slot(
            slot,
            NodeKind::Ai,
            "@n8n/n8n-nodes-langchain.openAi",
            parameters,
        )
    }
}

impl NodeFactory for DraftReplyFactory {
    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }

    fn build(&self, slot: &NodeSlot, ctx: &NodeContext<'_>) -> Node {
        let parameters = json!({
            "resource": "draft",
            "operation": "create",
            "subject": "={{ \"Re: \" + $json.subject }}",
            "message": "={{ $json.summary }}",
            "signature": ctx.profile.company_name,
        });
        with_channel_credential(
            node_from_slot(
                slot,
                NodeKind::Action,
                ctx.options.channel.mailer_integration(),
                parameters,
            ),
            ctx,
        )
    }
}

impl NodeFactory for ManagerNotifierFactory {
    fn kind(&self) -> NodeKind {
        NodeKind::ManagerNotifier
    }

    fn build(&self, slot: &NodeSlot, ctx: &NodeContext<'_>) -> Node {
        notifier_node(slot, ctx, NodeKind::ManagerNotifier, "manager")
    }
}

impl NodeFactory for SupplierNotifierFactory {
    fn kind(&self) -> NodeKind {
        NodeKind::SupplierNotifier
    }

    fn build(&self, slot: &NodeSlot, ctx: &NodeContext<'_>) -> Node {
        notifier_node(slot, ctx, NodeKind::SupplierNotifier, "supplier")
    }
}

/// Builds a notifier that fires only when the AI node routed the email to `slot.name`.
///
/// Roster and company names are free-form, so they only ever reach the runtime as
/// string literals inside a single `{{ }}` expression.
fn notifier_node(slot: &NodeSlot, ctx: &NodeContext<'_>, kind: NodeKind, role: &str) -> Node {
    let company = &ctx.profile.company_name;
    let subject_prefix = format!("[{} {}] ", company, role);
    let message_prefix = format!(
        "New email routed to {} by the email automation for {}.\n\n",
        slot.name, company
    );
    let parameters = json!({
        "resource": "message",
        "operation": "send",
        "role": role,
        "recipientName": slot.name,
        "routeCondition": format!("={{{{ $json.routeTo === {} }}}}", expression_literal(&slot.name)),
        "subject": format!(
            "={{{{ {} + $json.category + \": \" + $json.subject }}}}",
            expression_literal(&subject_prefix)
        ),
        "message": format!(
            "={{{{ {} + $json.summary }}}}",
            expression_literal(&message_prefix)
        ),
    });
    with_channel_credential(
        node_from_slot(slot, kind, ctx.options.channel.mailer_integration(), parameters),
        ctx,
    )
}

/// Quotes `text` as a JavaScript string literal that is inert inside `{{ }}`.
///
/// Braces are written as unicode escapes so no `{{` or `}}` survives in the output.
pub fn expression_literal(text: &str) -> String {
    Value::String(text.to_string())
        .to_string()
        .replace('{', "\\u007b")
        .replace('}', "\\u007d")
}
