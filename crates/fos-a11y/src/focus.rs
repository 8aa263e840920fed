//! Focus Management
//!
//! Tabbable detection and focus traps scoped to a container element.

use fos_dom::{DocumentHandle, DomTree, NodeId};

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,    // tabindex="-1" or unparsable
    Sequential(i32), // tabindex="0" or positive
}

impl TabIndex {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

const NATURALLY_TABBABLE: &[&str] = &["button", "input", "select", "textarea"];

/// Whether keyboard navigation can reach `id`
pub fn is_tabbable(tree: &DomTree, id: NodeId) -> bool {
    let Some(el) = tree.element(id) else {
        return false;
    };
    if el.has_attribute("disabled") || el.has_attribute("hidden") {
        return false;
    }
    if let Some(tabindex) = el.get_attribute("tabindex") {
        return TabIndex::parse(&tabindex).is_focusable();
    }
    NATURALLY_TABBABLE.contains(&el.tag_name.as_str())
        || (el.tag_name == "a" && el.has_attribute("href"))
}

/// Tabbable descendants of `container` in tab order: positive tabindex
/// ascending, then the rest in document order.
pub fn tabbable_descendants(tree: &DomTree, container: NodeId) -> Vec<NodeId> {
    let mut tabbables: Vec<NodeId> = tree
        .descendants(container)
        .into_iter()
        .filter(|&id| is_tabbable(tree, id))
        .collect();
    tabbables.sort_by_key(|&id| {
        match tree
            .get_attribute(id, "tabindex")
            .map(|v| TabIndex::parse(&v))
        {
            Some(TabIndex::Sequential(n)) if n > 0 => n,
            _ => i32::MAX,
        }
    });
    tabbables
}

/// Options handed to a focus trap when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrapOptions {
    /// Element focused on activation instead of the first tabbable
    pub initial_focus: Option<NodeId>,
    /// Whether Escape releases the trap on its own
    pub escape_deactivates: bool,
    /// Whether a click outside the container releases the trap
    pub click_outside_deactivates: bool,
}

impl Default for FocusTrapOptions {
    fn default() -> Self {
        Self {
            initial_focus: None,
            escape_deactivates: true,
            click_outside_deactivates: false,
        }
    }
}

/// A focus trap confines keyboard focus to a container while active.
///
/// Both operations are idempotent.
pub trait FocusTrap {
    fn activate(&mut self);
    fn deactivate(&mut self);
    fn is_active(&self) -> bool;
}

/// Default focus trap over a fOS document
pub struct DomFocusTrap {
    document: DocumentHandle,
    container: NodeId,
    options: FocusTrapOptions,
    active: bool,
    return_focus: Option<NodeId>,
}

impl DomFocusTrap {
    pub fn new(document: DocumentHandle, container: NodeId, options: FocusTrapOptions) -> Self {
        Self {
            document,
            container,
            options,
            active: false,
            return_focus: None,
        }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn options(&self) -> &FocusTrapOptions {
        &self.options
    }

    /// Move focus to the next tabbable in the container, wrapping around
    pub fn focus_next(&mut self) -> Option<NodeId> {
        self.step(|pos, len| match pos {
            Some(p) if p + 1 < len => p + 1,
            _ => 0,
        })
    }

    /// Move focus to the previous tabbable in the container, wrapping around
    pub fn focus_prev(&mut self) -> Option<NodeId> {
        self.step(|pos, len| match pos {
            Some(p) if p > 0 => p - 1,
            _ => len - 1,
        })
    }

    fn step(&mut self, pick: impl Fn(Option<usize>, usize) -> usize) -> Option<NodeId> {
        let mut doc = self.document.borrow_mut();
        let current = doc.active_element();
        if !self.active {
            return current;
        }
        let order = tabbable_descendants(doc.tree(), self.container);
        if order.is_empty() {
            return current;
        }
        let pos = current.and_then(|c| order.iter().position(|&id| id == c));
        let next = order[pick(pos, order.len())];
        doc.focus(next);
        Some(next)
    }
}

impl FocusTrap for DomFocusTrap {
    fn activate(&mut self) {
        if self.active {
            return;
        }
        let mut doc = self.document.borrow_mut();
        self.return_focus = doc.active_element();

        let container = self.container;
        let target = self
            .options
            .initial_focus
            .filter(|&id| doc.tree().contains(container, id))
            .or_else(|| tabbable_descendants(doc.tree(), container).first().copied())
            .unwrap_or(container);
        doc.focus(target);
        self.active = true;
        tracing::debug!("focus trap activated on {:?}, focus at {:?}", container, target);
    }

    fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut doc = self.document.borrow_mut();
        let focus_inside = doc
            .active_element()
            .is_some_and(|id| doc.tree().contains(self.container, id));
        let restored = self
            .return_focus
            .take()
            .is_some_and(|previous| doc.focus(previous));
        if !restored && focus_inside {
            doc.blur();
        }
        tracing::debug!("focus trap released on {:?}", self.container);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
