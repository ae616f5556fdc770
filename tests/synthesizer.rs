//! Tests for workflow synthesis: naming, rosters, credentials, prompt and graph shape.
mod common;
use common::*;
use inboxflow::prelude::*;
use inboxflow::synthesizer::{NodeContext, NodeSlot};
use std::collections::HashSet;

#[test]
fn test_hot_tub_workflow() {
    let artifact = synthesize_default(
        &hot_tub_profile(),
        &hot_tub_managers(),
        &hot_tub_suppliers(),
        Some("RingCentral"),
    );

    assert_eq!(
        artifact.name,
        "The Hot Tub Man Ltd - Email Automation Workflow"
    );
    assert_eq!(artifact.nodes_of_kind(NodeKind::ManagerNotifier).count(), 4);
    assert_eq!(artifact.nodes_of_kind(NodeKind::SupplierNotifier).count(), 3);

    let credential = artifact
        .channel_credential()
        .expect("Trigger should carry a credential");
    assert_eq!(credential.id, "user_user_123_gmail");
    assert_eq!(credential.name, "The Hot Tub Man Ltd Gmail");

    let prompt = artifact.prompt().expect("AI node should carry a prompt");
    assert!(prompt.contains("hot tub and spa service business"));
    assert!(prompt.contains("Hailey"));
    assert!(prompt.contains("Aqua Spa"));
    assert!(prompt.contains("RingCentral"));
}

#[test]
fn test_rosters_are_truncated_to_caps() {
    let managers = numbered("Manager", 8);
    let suppliers = numbered("Supplier", 12);
    let artifact = synthesize_default(&hot_tub_profile(), &managers, &suppliers, None);

    assert_eq!(artifact.nodes_of_kind(NodeKind::ManagerNotifier).count(), 5);
    assert_eq!(artifact.nodes_of_kind(NodeKind::SupplierNotifier).count(), 10);
    assert_eq!(artifact.meta.custom_managers.len(), 5);
    assert_eq!(artifact.meta.custom_suppliers.len(), 10);
    assert_eq!(artifact.meta.custom_managers, managers[..5].to_vec());
    assert_eq!(artifact.meta.custom_suppliers, suppliers[..10].to_vec());

    // Every kept name is in the prompt; names past the caps appear nowhere.
    let prompt = artifact.prompt().unwrap();
    for name in artifact
        .meta
        .custom_managers
        .iter()
        .chain(&artifact.meta.custom_suppliers)
    {
        assert!(prompt.contains(name.as_str()), "prompt is missing '{}'", name);
    }
    assert!(!prompt.contains("Manager 6"));
    assert!(!prompt.contains("Supplier 11"));
}

#[test]
fn test_minimal_business() {
    let profile = BusinessProfile::new("user_minimal", "Minimal Business");
    let artifact = synthesize_default(&profile, &[], &[], None);

    assert!(!artifact.nodes.is_empty());
    assert_eq!(artifact.name, "Minimal Business - Email Automation Workflow");
    let prompt = artifact.prompt().unwrap();
    assert!(prompt.contains("Minimal Business"));
    assert!(prompt.contains("service business"));
    assert!(artifact.meta.custom_managers.is_empty());
    assert!(artifact.meta.custom_suppliers.is_empty());
    assert!(artifact.validate().is_ok());
}

#[test]
fn test_hvac_prompt() {
    let artifact = synthesize_default(&hvac_profile(), &[], &[], None);
    let prompt = artifact.prompt().unwrap();

    assert!(prompt.contains("HVAC service business"));
    assert!(prompt.contains("Within 1 hour"));
    assert!(prompt.contains("heating_repair, cooling_repair"));
    assert!(prompt.contains("555-0199"));
    assert!(prompt.contains("Mon-Fri 7am-6pm"));
    assert!(prompt.contains("Service area radius: 40 "));
}

#[test]
fn test_plumbing_and_unknown_industries() {
    let plumbing = BusinessProfile {
        industry: Some("plumbing".to_string()),
        ..BusinessProfile::new("u1", "Pipe Pros")
    };
    let prompt = synthesize_default(&plumbing, &[], &[], None)
        .prompt()
        .unwrap()
        .to_string();
    assert!(prompt.contains("plumbing service business"));

    let unknown = BusinessProfile {
        industry: Some("pool-cleaning".to_string()),
        ..BusinessProfile::new("u2", "Blue Water")
    };
    let prompt = synthesize_default(&unknown, &[], &[], None)
        .prompt()
        .unwrap()
        .to_string();
    assert!(prompt.contains("service business specializing in pool cleaning"));
}

#[test]
fn test_unknown_response_time_uses_generic_phrase() {
    let profile = BusinessProfile {
        response_time_goal: Some("next_week".to_string()),
        ..BusinessProfile::new("u1", "Acme")
    };
    let prompt = synthesize_default(&profile, &[], &[], None)
        .prompt()
        .unwrap()
        .to_string();
    assert!(prompt.contains("as soon as possible"));
    assert!(!prompt.contains("next_week"));
}

#[test]
fn test_synthesis_is_deterministic() {
    let first = synthesize_default(
        &hvac_profile(),
        &hot_tub_managers(),
        &hot_tub_suppliers(),
        Some("RingCentral"),
    );
    let second = synthesize_default(
        &hvac_profile(),
        &hot_tub_managers(),
        &hot_tub_suppliers(),
        Some("RingCentral"),
    );
    assert_eq!(first, second);
    assert_eq!(
        first.to_json_pretty().unwrap(),
        second.to_json_pretty().unwrap()
    );
}

#[test]
fn test_node_ids_are_unique_and_role_based() {
    let artifact = synthesize_default(
        &hot_tub_profile(),
        &hot_tub_managers(),
        &hot_tub_suppliers(),
        None,
    );

    let ids: HashSet<&str> = artifact.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), artifact.nodes.len());

    assert_eq!(artifact.trigger().unwrap().id.as_str(), "trigger");
    assert_eq!(artifact.ai_node().unwrap().id.as_str(), "ai");
    for (i, node) in artifact.nodes_of_kind(NodeKind::ManagerNotifier).enumerate() {
        assert_eq!(node.id.as_str(), format!("manager-{}", i));
        assert_eq!(node.name, hot_tub_managers()[i]);
    }
    for (i, node) in artifact.nodes_of_kind(NodeKind::SupplierNotifier).enumerate() {
        assert_eq!(node.id.as_str(), format!("supplier-{}", i));
        assert_eq!(node.name, hot_tub_suppliers()[i]);
    }
}

#[test]
fn test_duplicate_names_get_distinct_nodes() {
    let managers = to_strings(&["Sam", "Sam"]);
    let suppliers = to_strings(&["Sam"]);
    let artifact = synthesize_default(&hot_tub_profile(), &managers, &suppliers, None);

    assert_eq!(artifact.nodes_of_kind(NodeKind::ManagerNotifier).count(), 2);
    assert_eq!(artifact.nodes_of_kind(NodeKind::SupplierNotifier).count(), 1);
    assert!(artifact.validate().is_ok());
}

#[test]
fn test_broadcast_topology() {
    let artifact = synthesize_default(
        &hot_tub_profile(),
        &hot_tub_managers(),
        &hot_tub_suppliers(),
        None,
    );

    assert_eq!(artifact.connections.targets_of("trigger"), vec!["ai"]);
    let fan_out = artifact.connections.targets_of("ai");
    assert_eq!(fan_out.len(), 7);
    for node in artifact
        .nodes
        .iter()
        .filter(|n| matches!(n.kind, NodeKind::ManagerNotifier | NodeKind::SupplierNotifier))
    {
        assert!(fan_out.contains(&node.id.as_str()));
    }
    assert_eq!(artifact.connections.edge_count(), 8);
    assert!(artifact.validate().is_ok());
}

#[test]
fn test_trigger_filter_excludes_own_domain() {
    let artifact = synthesize_default(&hot_tub_profile(), &[], &[], None);
    assert_eq!(
        artifact.trigger_filter(),
        Some("in:inbox -from:@thehotubman.com")
    );

    let no_email = BusinessProfile::new("u1", "No Email Inc");
    let artifact = synthesize_default(&no_email, &[], &[], None);
    assert_eq!(artifact.trigger_filter(), Some("in:inbox"));

    let bad_email = BusinessProfile {
        business_email: Some("not an email".to_string()),
        ..BusinessProfile::new("u2", "Typo Ltd")
    };
    let artifact = synthesize_default(&bad_email, &[], &[], None);
    assert_eq!(artifact.trigger_filter(), Some("in:inbox"));
}

#[test]
fn test_channel_nodes_share_tenant_credential() {
    let artifact = synthesize_default(
        &hot_tub_profile(),
        &hot_tub_managers(),
        &hot_tub_suppliers(),
        None,
    );
    for node in artifact.nodes.iter().filter(|n| n.kind != NodeKind::Ai) {
        let credential = node
            .credential("gmailOAuth2")
            .unwrap_or_else(|| panic!("Node '{}' should carry the Gmail credential", node.id));
        assert_eq!(credential.id, "user_user_123_gmail");
    }
    assert!(artifact.ai_node().unwrap().credentials.is_empty());
}

#[test]
fn test_outlook_channel() {
    let options = SynthesisOptions {
        channel: Channel::Outlook,
        ..SynthesisOptions::default()
    };
    let artifact = Synthesizer::new()
        .synthesize(&hot_tub_profile(), &options, &hot_tub_managers(), &[], None)
        .unwrap();

    let credential = artifact.channel_credential().unwrap();
    assert_eq!(credential.id, "user_user_123_outlook");
    assert_eq!(credential.name, "The Hot Tub Man Ltd Outlook");
    let trigger = artifact.trigger().unwrap();
    assert_eq!(trigger.integration, "n8n-nodes-base.microsoftOutlookTrigger");
    assert!(artifact.trigger_filter().unwrap().contains("@thehotubman.com"));
}

#[test]
fn test_draft_reply_action_is_optional() {
    let without = synthesize_default(&hot_tub_profile(), &hot_tub_managers(), &[], None);
    assert_eq!(without.nodes_of_kind(NodeKind::Action).count(), 0);

    let options = SynthesisOptions {
        auto_reply_drafts: true,
        ..SynthesisOptions::default()
    };
    let with = Synthesizer::new()
        .synthesize(&hot_tub_profile(), &options, &hot_tub_managers(), &[], None)
        .unwrap();
    let action = with.nodes_of_kind(NodeKind::Action).next().unwrap();
    assert_eq!(action.id.as_str(), "draft-reply");
    assert!(with.connections.targets_of("ai").contains(&"draft-reply"));
    assert!(with.validate().is_ok());
}

#[test]
fn test_notifier_route_condition_escapes_names() {
    let managers = to_strings(&["Jo \"JJ\" Smith"]);
    let artifact = synthesize_default(&hot_tub_profile(), &managers, &[], None);
    let node = artifact.node("manager-0").unwrap();

    assert_eq!(node.name, "Jo \"JJ\" Smith");
    assert_eq!(
        node.parameter_str("routeCondition"),
        Some("={{ $json.routeTo === \"Jo \\\"JJ\\\" Smith\" }}")
    );
}

#[test]
fn test_missing_user_id_is_rejected() {
    let profile = BusinessProfile::new("", "Nameless Tenant");
    let result = Synthesizer::new().synthesize(&profile, &SynthesisOptions::default(), &[], &[], None);
    assert_eq!(result.unwrap_err(), SynthesisError::MissingUserId);
}

#[test]
fn test_missing_company_name_is_rejected() {
    let profile = BusinessProfile::new("user_9", "   ");
    let result = Synthesizer::new().synthesize(&profile, &SynthesisOptions::default(), &[], &[], None);
    match result {
        Err(SynthesisError::MissingCompanyName { user_id }) => assert_eq!(user_id, "user_9"),
        other => panic!("Expected MissingCompanyName, got {:?}", other),
    }
}

#[test]
fn test_company_name_is_used_verbatim() {
    let profile = BusinessProfile::new("u1", "  Spaced & Co.  ");
    let artifact = synthesize_default(&profile, &[], &[], None);
    assert_eq!(artifact.name, "  Spaced & Co.   - Email Automation Workflow");
    assert_eq!(artifact.channel_credential().unwrap().name, "  Spaced & Co.   Gmail");
}

// --- Builder and configuration ---

#[test]
fn test_builder_rejects_out_of_range_caps() {
    let err = Synthesizer::builder().with_manager_cap(6).build().err().unwrap();
    assert_eq!(
        err,
        ConfigError::InvalidCap {
            roster: "manager".to_string(),
            cap: 6,
            max: 5
        }
    );

    let err = Synthesizer::builder().with_supplier_cap(0).build().err().unwrap();
    assert!(matches!(err, ConfigError::InvalidCap { cap: 0, max: 10, .. }));
}

#[test]
fn test_builder_lowers_caps() {
    let synthesizer = Synthesizer::builder()
        .with_manager_cap(2)
        .with_supplier_cap(1)
        .build()
        .unwrap();
    let artifact = synthesizer
        .synthesize(
            &hot_tub_profile(),
            &SynthesisOptions::default(),
            &hot_tub_managers(),
            &hot_tub_suppliers(),
            None,
        )
        .unwrap();

    assert_eq!(artifact.meta.custom_managers, to_strings(&["Hailey", "Jillian"]));
    assert_eq!(artifact.meta.custom_suppliers, to_strings(&["Aqua Spa Pool Supply"]));
    assert!(artifact.validate().is_ok());
}

#[test]
fn test_builder_extends_lookup_tables() {
    let synthesizer = Synthesizer::builder()
        .with_industry("landscaping", "landscaping and lawn care business")
        .with_response_time("same_day", "Same business day")
        .build()
        .unwrap();
    let profile = BusinessProfile {
        industry: Some("landscaping".to_string()),
        response_time_goal: Some("same_day".to_string()),
        ..BusinessProfile::new("u1", "Green Thumb")
    };
    let artifact = synthesizer
        .synthesize(&profile, &SynthesisOptions::default(), &[], &[], None)
        .unwrap();
    let prompt = artifact.prompt().unwrap();

    assert!(prompt.contains("landscaping and lawn care business"));
    assert!(prompt.contains("Same business day"));
}

#[test]
fn test_synthesizer_from_config() {
    let config = SynthesizerConfig::load_from_str(
        r#"
        supplier_cap = 2

        [industries]
        electrical = "licensed electrical contractor"
        "#,
    )
    .unwrap();
    let synthesizer = Synthesizer::from_config(&config).unwrap();
    assert_eq!(synthesizer.roster_limiter().supplier_cap(), 2);
    assert_eq!(synthesizer.roster_limiter().manager_cap(), 5);

    let profile = BusinessProfile {
        industry: Some("electrical".to_string()),
        ..BusinessProfile::new("u1", "Sparks")
    };
    let artifact = synthesizer
        .synthesize(&profile, &SynthesisOptions::default(), &[], &numbered("Supplier", 4), None)
        .unwrap();
    assert_eq!(artifact.meta.custom_suppliers.len(), 2);
    assert!(artifact.prompt().unwrap().contains("licensed electrical contractor"));
}

#[test]
fn test_config_with_invalid_cap_is_rejected() {
    let config = SynthesizerConfig::load_from_str("manager_cap = 9").unwrap();
    assert!(matches!(
        Synthesizer::from_config(&config),
        Err(ConfigError::InvalidCap { cap: 9, .. })
    ));
}

struct PlainTextTrigger;

impl NodeFactory for PlainTextTrigger {
    fn kind(&self) -> NodeKind {
        NodeKind::Trigger
    }

    fn build(&self, slot: &NodeSlot, ctx: &NodeContext<'_>) -> Node {
        Node {
            // Identity fields are overwritten by the assembler.
            id: NodeId::from("ignored"),
            name: "ignored".to_string(),
            kind: NodeKind::Action,
            integration: "custom.webhookTrigger".to_string(),
            type_version: 2,
            position: [0, 0],
            parameters: serde_json::json!({ "path": ctx.profile.user_id, "slot": slot.name }),
            credentials: Default::default(),
        }
    }
}

#[test]
fn test_custom_node_factory_override() {
    let synthesizer = Synthesizer::builder()
        .with_node_factory(Box::new(PlainTextTrigger))
        .build()
        .unwrap();
    let artifact = synthesizer
        .synthesize(&hot_tub_profile(), &SynthesisOptions::default(), &hot_tub_managers(), &[], None)
        .unwrap();

    let trigger = artifact.trigger().unwrap();
    assert_eq!(trigger.id.as_str(), "trigger");
    assert_eq!(trigger.kind, NodeKind::Trigger);
    assert_eq!(trigger.name, "Gmail Trigger");
    assert_eq!(trigger.position, [240, 300]);
    assert_eq!(trigger.integration, "custom.webhookTrigger");
    assert_eq!(trigger.parameter_str("path"), Some("user_123"));

    // Other kinds keep their default factories.
    assert_eq!(
        artifact.node("manager-0").unwrap().credential("gmailOAuth2").unwrap().id,
        "user_user_123_gmail"
    );
    assert!(artifact.validate().is_ok());
}

#[test]
fn test_hot_tub_prompt_lists_every_roster_name() {
    let artifact = synthesize_default(
        &hot_tub_profile(),
        &hot_tub_managers(),
        &hot_tub_suppliers(),
        None,
    );
    let prompt = artifact.prompt().unwrap();
    for name in hot_tub_managers().iter().chain(&hot_tub_suppliers()) {
        assert!(prompt.contains(&format!("- {}", name)));
    }
}

#[test]
fn test_services_are_listed_verbatim() {
    let profile = BusinessProfile {
        primary_services: Some(to_strings(&[" spa repair ", "", "Water Care"])),
        ..BusinessProfile::new("u1", "Acme")
    };
    let prompt = synthesize_default(&profile, &[], &[], None)
        .prompt()
        .unwrap()
        .to_string();
    assert!(prompt.contains("Services offered:  spa repair , Water Care."));
}

/// Every `=`-prefixed parameter must be exactly one `{{ ... }}` expression.
fn assert_single_expression(node: &Node) {
    for (key, value) in node.parameters.as_object().unwrap() {
        let Some(text) = value.as_str() else { continue };
        if !text.starts_with('=') {
            continue;
        }
        assert!(
            text.starts_with("={{") && text.ends_with("}}"),
            "{}.{} is not a single expression: {}",
            node.id,
            key,
            text
        );
        assert_eq!(text.matches("{{").count(), 1, "{}.{}: {}", node.id, key, text);
        assert_eq!(text.matches("}}").count(), 1, "{}.{}: {}", node.id, key, text);
    }
}

#[test]
fn test_names_cannot_inject_expressions() {
    let profile = BusinessProfile {
        business_email: Some("ops@evil.example".to_string()),
        ..BusinessProfile::new("user_evil", "Evil {{ $env.SECRET }} Co")
    };
    let managers = to_strings(&["Bob {{ $env.OPENAI_API_KEY }}", "Al }} x"]);
    let suppliers = to_strings(&["{{ $json }}"]);
    let options = SynthesisOptions {
        auto_reply_drafts: true,
        ..SynthesisOptions::default()
    };
    let artifact = Synthesizer::new()
        .synthesize(&profile, &options, &managers, &suppliers, None)
        .unwrap();

    for node in &artifact.nodes {
        assert_single_expression(node);
    }

    let al = artifact.node("manager-1").unwrap();
    assert_eq!(al.name, "Al }} x");
    assert_eq!(al.parameter_str("recipientName"), Some("Al }} x"));
    assert_eq!(
        al.parameter_str("routeCondition"),
        Some("={{ $json.routeTo === \"Al \\u007d\\u007d x\" }}")
    );

    let bob = artifact.node("manager-0").unwrap();
    assert!(bob.parameter_str("message").unwrap().contains("Bob \\u007b\\u007b $env"));
    assert!(bob.parameter_str("subject").unwrap().contains("Evil \\u007b\\u007b $env.SECRET"));
}

#[test]
fn test_notifier_message_wording() {
    let artifact = synthesize_default(&hot_tub_profile(), &hot_tub_managers(), &[], None);
    let node = artifact.node("manager-0").unwrap();
    assert_eq!(
        node.parameter_str("message"),
        Some("={{ \"New email routed to Hailey by the email automation for The Hot Tub Man Ltd.\\n\\n\" + $json.summary }}")
    );
    assert_eq!(
        node.parameter_str("subject"),
        Some("={{ \"[The Hot Tub Man Ltd manager] \" + $json.category + \": \" + $json.subject }}")
    );
}
