//! Interaction Resolver
//!
//! Maps an event target to the dialog action it carries and tests targets
//! against selectors.

use fos_dom::{DomTree, ElementQuery, EventTarget, NodeId};

use crate::constants::ACTION_ATTRIBUTE;

/// Action of the nearest inclusive ancestor of `target` carrying the
/// action attribute, searching no higher than `root`.
pub fn action_from_target(tree: &DomTree, root: NodeId, target: NodeId) -> Option<String> {
    if !tree.contains(root, target) {
        return None;
    }
    for id in tree.ancestors(target) {
        if let Some(action) = tree.get_attribute(id, ACTION_ATTRIBUTE) {
            return Some(action);
        }
        if id == root {
            break;
        }
    }
    None
}

/// Whether an event target is an element matching `selector`
pub fn target_matches(tree: &DomTree, target: EventTarget, selector: &str) -> bool {
    match target {
        EventTarget::Node(id) => tree.matches(id, selector),
        EventTarget::Document | EventTarget::Window => false,
    }
}
