//! Dependency linearization
//!
//! Post-order depth-first walk over the expanded target tree, producing an
//! execution order where every dependency appears strictly before its
//! dependent.

use std::collections::HashSet;

use crate::core::target::TargetNode;

/// Linearize the requested top-level targets and their expanded
/// dependency trees into execution order.
///
/// Project targets are deduplicated by name: once a project has been
/// emitted, any later occurrence of the same name is skipped along with its
/// subtree (its dependencies were already emitted by the first occurrence).
/// Install targets are per-instance and never carry dependencies.
pub fn linearize(roots: &[TargetNode]) -> Vec<&TargetNode> {
    let mut resolved = Vec::new();
    let mut seen_projects = HashSet::new();
    for root in roots {
        visit(root, &mut seen_projects, &mut resolved);
    }
    resolved
}

fn visit<'a>(
    node: &'a TargetNode,
    seen_projects: &mut HashSet<String>,
    resolved: &mut Vec<&'a TargetNode>,
) {
    if let TargetNode::Project(target) = node {
        if !seen_projects.insert(target.name().to_string()) {
            return;
        }
    }
    for dependency in node.dependencies() {
        visit(dependency, seen_projects, resolved);
    }
    resolved.push(node);
}
