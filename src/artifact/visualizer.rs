use super::WorkflowArtifact;
use std::fmt::Write;

/// Formats a `WorkflowArtifact` into a human-readable outline.
///
/// `requested` carries the roster sizes that were submitted before the caps were
/// applied, so the outline can report "N of M included".
pub fn visualize_artifact(artifact: &WorkflowArtifact, requested: Option<(usize, usize)>) -> String {
    let mut output = String::new();
    let _ = writeln!(&mut output, "======== WORKFLOW: {} ========", artifact.name);

    // 1. Nodes, in artifact order.
    let _ = writeln!(&mut output, "\n--- NODES ---");
    for (i, node) in artifact.nodes.iter().enumerate() {
        let _ = writeln!(
            &mut output,
            "{:04}: {:<14} {:<18} {}",
            i,
            node.id.as_str(),
            format!("[{}]", node.kind),
            node.name
        );
    }

    // 2. Edges, grouped by source.
    let _ = writeln!(&mut output, "\n--- CONNECTIONS ---");
    for (source, target) in artifact.connections.edges() {
        let _ = writeln!(&mut output, "{:<14} -> {}", source, target);
    }

    // 3. Trigger filter and credential.
    if let Some(filter) = artifact.trigger_filter() {
        let _ = writeln!(&mut output, "\nTrigger filter: {}", filter);
    }
    if let Some(credential) = artifact.channel_credential() {
        let _ = writeln!(
            &mut output,
            "Credential:     {} ({})",
            credential.name, credential.id
        );
    }

    // 4. Roster summary.
    let _ = writeln!(&mut output, "\n--- ROSTER ---");
    let managers = artifact.meta.custom_managers.len();
    let suppliers = artifact.meta.custom_suppliers.len();
    match requested {
        Some((requested_managers, requested_suppliers)) => {
            let _ = writeln!(
                &mut output,
                "Managers:  {} of {} included",
                managers, requested_managers
            );
            let _ = writeln!(
                &mut output,
                "Suppliers: {} of {} included",
                suppliers, requested_suppliers
            );
        }
        None => {
            let _ = writeln!(&mut output, "Managers:  {} included", managers);
            let _ = writeln!(&mut output, "Suppliers: {} included", suppliers);
        }
    }

    let _ = writeln!(&mut output, "\n================ END OF WORKFLOW ================");
    output
}
