//! Button Registry
//!
//! Action buttons in document order, the optional default button and one
//! ripple per button, index-aligned.

use fos_dom::{DomResult, DomTree, ElementQuery, NodeId};

use crate::constants::{BUTTON_SELECTOR, DEFAULT_BUTTON_SELECTOR};
use crate::ripple::Ripple;

/// Offsets this far apart or more put buttons on different rows.
///
/// Layout reports whole-pixel offsets, so on real layouts this equals a
/// plain inequality test.
pub const MISALIGNMENT_TOLERANCE_PX: f64 = 1.0;

/// True if any top offset differs from the first one
pub fn are_tops_misaligned(tops: impl IntoIterator<Item = f64>) -> bool {
    let mut tops = tops.into_iter();
    let Some(baseline) = tops.next() else {
        return false;
    };
    tops.any(|top| (top - baseline).abs() >= MISALIGNMENT_TOLERANCE_PX)
}

#[derive(Debug, Default)]
pub struct ButtonRegistry {
    buttons: Vec<NodeId>,
    ripples: Vec<Ripple>,
    default_button: Option<NodeId>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find buttons and the default button below `root`. Ripples are not attached yet.
    pub fn discover(tree: &DomTree, root: NodeId) -> Self {
        Self {
            buttons: tree.query_selector_all(root, BUTTON_SELECTOR),
            ripples: Vec::new(),
            default_button: tree.query_selector(root, DEFAULT_BUTTON_SELECTOR),
        }
    }

    /// One ripple per button, in button order
    pub fn attach_ripples(&mut self, tree: &mut DomTree) {
        self.ripples = self
            .buttons
            .iter()
            .map(|&button| Ripple::attach_to(tree, button))
            .collect();
    }

    pub fn destroy_ripples(&mut self, tree: &mut DomTree) {
        for ripple in &mut self.ripples {
            ripple.destroy(tree);
        }
    }

    pub fn buttons(&self) -> &[NodeId] {
        &self.buttons
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn default_button(&self) -> Option<NodeId> {
        self.default_button
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Whether the buttons wrapped onto more than one row
    pub fn are_stacked(&self, tree: &DomTree) -> bool {
        are_tops_misaligned(self.buttons.iter().map(|&button| {
            tree.element(button)
                .map_or(0.0, |el| el.geometry.offset_top)
        }))
    }

    /// Reverse button order, then re-append each button to its parent so
    /// the DOM follows the new order.
    pub fn reverse(&mut self, tree: &mut DomTree) -> DomResult<()> {
        self.buttons.reverse();
        self.ripples.reverse();
        for &button in &self.buttons {
            if let Some(parent) = tree.parent(button) {
                tree.append_child(parent, button)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer_with_buttons(tree: &mut DomTree, classes: &[&str]) -> (NodeId, NodeId, Vec<NodeId>) {
        let root = tree.create_element("div");
        let footer = tree.create_element("footer");
        tree.append_child(tree.root(), root).unwrap();
        tree.append_child(root, footer).unwrap();
        let buttons = classes
            .iter()
            .map(|class| {
                let button = tree.create_element("button");
                tree.set_attribute(button, "class", class).unwrap();
                tree.append_child(footer, button).unwrap();
                button
            })
            .collect();
        (root, footer, buttons)
    }

    fn set_tops(tree: &mut DomTree, buttons: &[NodeId], tops: &[f64]) {
        for (&button, &top) in buttons.iter().zip(tops) {
            tree.element_mut(button).unwrap().geometry.offset_top = top;
        }
    }

    #[test]
    fn test_misalignment() {
        assert!(!are_tops_misaligned(Vec::<f64>::new()));
        assert!(!are_tops_misaligned([12.0]));
        assert!(!are_tops_misaligned([12.0, 12.0, 12.0]));
        assert!(are_tops_misaligned([12.0, 12.0, 48.0]));
        assert!(are_tops_misaligned([48.0, 12.0]));
        assert!(are_tops_misaligned([0.0, 1.0]));
        assert!(!are_tops_misaligned([0.0, 0.5]));
    }

    #[test]
    fn test_discover_in_document_order() {
        let mut tree = DomTree::new();
        let (root, _, buttons) = footer_with_buttons(
            &mut tree,
            &["mdc-dialog__button", "other", "mdc-dialog__button mdc-dialog__button--default"],
        );

        let registry = ButtonRegistry::discover(&tree, root);
        assert_eq!(registry.buttons(), &[buttons[0], buttons[2]]);
        assert_eq!(registry.default_button(), Some(buttons[2]));
        assert!(registry.ripples().is_empty());
    }

    #[test]
    fn test_empty_registry_is_not_stacked() {
        let mut tree = DomTree::new();
        let (root, _, _) = footer_with_buttons(&mut tree, &[]);
        let registry = ButtonRegistry::discover(&tree, root);
        assert!(registry.is_empty());
        assert_eq!(registry.default_button(), None);
        assert!(!registry.are_stacked(&tree));
    }

    #[test]
    fn test_stacked_from_offsets() {
        let mut tree = DomTree::new();
        let (root, _, buttons) =
            footer_with_buttons(&mut tree, &["mdc-dialog__button", "mdc-dialog__button"]);
        let registry = ButtonRegistry::discover(&tree, root);

        set_tops(&mut tree, &buttons, &[10.0, 10.0]);
        assert!(!registry.are_stacked(&tree));

        set_tops(&mut tree, &buttons, &[10.0, 46.0]);
        assert!(registry.are_stacked(&tree));
    }

    #[test]
    fn test_reverse_twice_restores_order() {
        let mut tree = DomTree::new();
        let (root, footer, buttons) = footer_with_buttons(
            &mut tree,
            &["mdc-dialog__button", "mdc-dialog__button", "mdc-dialog__button"],
        );
        let mut registry = ButtonRegistry::discover(&tree, root);
        registry.attach_ripples(&mut tree);

        registry.reverse(&mut tree).unwrap();
        let reversed: Vec<_> = buttons.iter().rev().copied().collect();
        assert_eq!(registry.buttons(), reversed.as_slice());
        assert_eq!(tree.children(footer), reversed.as_slice());
        let ripple_order: Vec<_> = registry.ripples().iter().map(Ripple::surface).collect();
        assert_eq!(ripple_order, reversed);

        registry.reverse(&mut tree).unwrap();
        assert_eq!(registry.buttons(), buttons.as_slice());
        assert_eq!(tree.children(footer), buttons.as_slice());
    }

    #[test]
    fn test_ripples_follow_buttons() {
        let mut tree = DomTree::new();
        let (root, _, buttons) =
            footer_with_buttons(&mut tree, &["mdc-dialog__button", "mdc-dialog__button"]);
        let mut registry = ButtonRegistry::discover(&tree, root);
        registry.attach_ripples(&mut tree);

        assert_eq!(registry.ripples().len(), registry.len());
        assert!(buttons.iter().all(|&b| tree.has_class(b, crate::ripple::RIPPLE_UPGRADED)));

        registry.destroy_ripples(&mut tree);
        assert!(registry.ripples().iter().all(|r| !r.is_attached()));
        assert!(!tree.has_class(buttons[0], crate::ripple::RIPPLE_UPGRADED));
    }
}
