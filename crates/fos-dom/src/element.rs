//! Element Query and Methods
//!
//! querySelector, querySelectorAll, closest, matches.

use crate::{DomTree, NodeId, SelectorList};

/// Element query trait
///
/// Unparsable selectors match nothing.
pub trait ElementQuery {
    /// First descendant of `root` matching selector
    fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId>;

    /// All descendants of `root` matching selector, in document order
    fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId>;

    /// Find closest inclusive ancestor matching selector
    fn closest(&self, element: NodeId, selector: &str) -> Option<NodeId>;

    /// Check if element matches selector
    fn matches(&self, element: NodeId, selector: &str) -> bool;
}

fn parse_or_warn(selector: &str) -> Option<SelectorList> {
    match SelectorList::parse(selector) {
        Ok(list) => Some(list),
        Err(err) => {
            tracing::warn!("{}", err);
            None
        }
    }
}

impl ElementQuery for DomTree {
    fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let list = parse_or_warn(selector)?;
        self.descendants(root)
            .into_iter()
            .find(|&id| list.matches(self, id))
    }

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(list) = parse_or_warn(selector) else {
            return Vec::new();
        };
        self.descendants(root)
            .into_iter()
            .filter(|&id| list.matches(self, id))
            .collect()
    }

    fn closest(&self, element: NodeId, selector: &str) -> Option<NodeId> {
        let list = parse_or_warn(selector)?;
        self.ancestors(element).find(|&id| list.matches(self, id))
    }

    fn matches(&self, element: NodeId, selector: &str) -> bool {
        parse_or_warn(selector).is_some_and(|list| list.matches(self, element))
    }
}
