//! Dialog Adapter
//!
//! Every primitive the foundation may ask of the DOM. The foundation only
//! ever talks to a `DialogAdapter`, so its open/close policy can be driven
//! by a fake with no document at all.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fos_a11y::FocusTrap;
use fos_dom::{
    dispatch_event, DocumentHandle, DomEvent, DomResult, DomTree, EventDetail, EventTarget, NodeId,
};

use crate::buttons::ButtonRegistry;
use crate::constants::{ACTION_DETAIL_KEY, CLOSED_EVENT, CLOSING_EVENT, OPENED_EVENT, OPENING_EVENT};
use crate::interaction::{action_from_target, target_matches};

/// Operations the foundation needs from its host
pub trait DialogAdapter {
    // Class mutation
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn add_body_class(&self, class: &str);
    fn remove_body_class(&self, class: &str);

    // Structural queries
    fn are_buttons_stacked(&self) -> bool;
    fn is_content_scrollable(&self) -> bool;

    // Interaction resolution
    fn event_target_matches(&self, target: EventTarget, selector: &str) -> bool;
    fn get_action_from_event(&self, event: &DomEvent) -> Option<String>;

    // Focus
    fn trap_focus(&self);
    fn release_focus(&self);

    // Buttons
    fn click_default_button(&self);
    fn reverse_buttons(&self);

    // Notifications
    fn notify_opening(&self);
    fn notify_opened(&self);
    fn notify_closing(&self, action: Option<&str>);
    fn notify_closed(&self, action: Option<&str>);
}

/// Elements discovered during initialization, shared by the component and
/// its adapter.
#[derive(Default)]
pub struct DialogElements {
    pub container: Cell<Option<NodeId>>,
    pub content: Cell<Option<NodeId>>,
    pub buttons: RefCell<ButtonRegistry>,
    pub focus_trap: RefCell<Option<Box<dyn FocusTrap>>>,
}

/// Detail for closing/closed: `{action}` when there is one, `{}` otherwise
pub fn action_detail(action: Option<&str>) -> EventDetail {
    let mut detail = EventDetail::new();
    if let Some(action) = action.filter(|a| !a.is_empty()) {
        detail.insert(ACTION_DETAIL_KEY.to_string(), action.to_string());
    }
    detail
}

/// Adapter over a fOS document
pub struct DomDialogAdapter {
    document: DocumentHandle,
    root: NodeId,
    elements: Rc<DialogElements>,
}

impl DomDialogAdapter {
    pub fn new(document: DocumentHandle, root: NodeId, elements: Rc<DialogElements>) -> Self {
        Self {
            document,
            root,
            elements,
        }
    }

    fn with_tree_mut(&self, op: &str, f: impl FnOnce(&mut DomTree, NodeId) -> DomResult<bool>) {
        let mut doc = self.document.borrow_mut();
        let body = doc.body();
        if let Err(err) = f(doc.tree_mut(), body) {
            tracing::warn!("{} failed: {}", op, err);
        }
    }

    fn emit(&self, name: &str, detail: EventDetail) {
        dispatch_event(&self.document, DomEvent::custom(self.root, name, detail));
    }
}

impl DialogAdapter for DomDialogAdapter {
    fn add_class(&self, class: &str) {
        let root = self.root;
        self.with_tree_mut("add_class", |tree, _| tree.add_class(root, class));
    }

    fn remove_class(&self, class: &str) {
        let root = self.root;
        self.with_tree_mut("remove_class", |tree, _| tree.remove_class(root, class));
    }

    fn has_class(&self, class: &str) -> bool {
        self.document.borrow().tree().has_class(self.root, class)
    }

    fn add_body_class(&self, class: &str) {
        self.with_tree_mut("add_body_class", |tree, body| tree.add_class(body, class));
    }

    fn remove_body_class(&self, class: &str) {
        self.with_tree_mut("remove_body_class", |tree, body| tree.remove_class(body, class));
    }

    fn are_buttons_stacked(&self) -> bool {
        let doc = self.document.borrow();
        self.elements.buttons.borrow().are_stacked(doc.tree())
    }

    fn is_content_scrollable(&self) -> bool {
        let Some(content) = self.elements.content.get() else {
            return false;
        };
        self.document
            .borrow()
            .tree()
            .element(content)
            .is_some_and(|el| el.geometry.overflows_vertically())
    }

    fn event_target_matches(&self, target: EventTarget, selector: &str) -> bool {
        target_matches(self.document.borrow().tree(), target, selector)
    }

    fn get_action_from_event(&self, event: &DomEvent) -> Option<String> {
        let target = event.target_node()?;
        action_from_target(self.document.borrow().tree(), self.root, target)
    }

    fn trap_focus(&self) {
        if let Some(trap) = self.elements.focus_trap.borrow_mut().as_mut() {
            trap.activate();
        }
    }

    fn release_focus(&self) {
        if let Some(trap) = self.elements.focus_trap.borrow_mut().as_mut() {
            trap.deactivate();
        }
    }

    fn click_default_button(&self) {
        let default_button = self.elements.buttons.borrow().default_button();
        if let Some(button) = default_button {
            dispatch_event(&self.document, DomEvent::click(button));
        }
    }

    fn reverse_buttons(&self) {
        let mut doc = self.document.borrow_mut();
        if let Err(err) = self.elements.buttons.borrow_mut().reverse(doc.tree_mut()) {
            tracing::warn!("reverse_buttons failed: {}", err);
        }
    }

    fn notify_opening(&self) {
        self.emit(OPENING_EVENT, EventDetail::new());
    }

    fn notify_opened(&self) {
        self.emit(OPENED_EVENT, EventDetail::new());
    }

    fn notify_closing(&self, action: Option<&str>) {
        self.emit(CLOSING_EVENT, action_detail(action));
    }

    fn notify_closed(&self, action: Option<&str>) {
        self.emit(CLOSED_EVENT, action_detail(action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{css_classes, ACTION_ATTRIBUTE, BUTTON_SELECTOR};
    use fos_dom::{Document, ElementQuery, EventCallback};

    struct Fixture {
        document: DocumentHandle,
        root: NodeId,
        content: NodeId,
        buttons: Vec<NodeId>,
        elements: Rc<DialogElements>,
        adapter: DomDialogAdapter,
    }

    fn fixture() -> Fixture {
        let document = Document::default().into_handle();
        let (root, content, buttons) = {
            let mut doc = document.borrow_mut();
            let body = doc.body();
            let tree = doc.tree_mut();
            let root = tree.create_element("div");
            let content = tree.create_element("div");
            let footer = tree.create_element("footer");
            tree.append_child(body, root).unwrap();
            tree.append_child(root, content).unwrap();
            tree.append_child(root, footer).unwrap();
            let mut buttons = Vec::new();
            for (class, action) in [
                ("mdc-dialog__button", "cancel"),
                ("mdc-dialog__button mdc-dialog__button--default", "accept"),
            ] {
                let button = tree.create_element("button");
                tree.set_attribute(button, "class", class).unwrap();
                tree.set_attribute(button, ACTION_ATTRIBUTE, action).unwrap();
                tree.append_child(footer, button).unwrap();
                buttons.push(button);
            }
            (root, content, buttons)
        };
        let elements = Rc::new(DialogElements::default());
        elements.content.set(Some(content));
        *elements.buttons.borrow_mut() = ButtonRegistry::discover(document.borrow().tree(), root);
        let adapter = DomDialogAdapter::new(Rc::clone(&document), root, Rc::clone(&elements));
        Fixture {
            document,
            root,
            content,
            buttons,
            elements,
            adapter,
        }
    }

    fn record(document: &DocumentHandle, target: NodeId, name: &str) -> Rc<RefCell<Vec<EventDetail>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let cb: EventCallback = {
            let log = Rc::clone(&log);
            Rc::new(move |event: &mut DomEvent| log.borrow_mut().push(event.detail.clone()))
        };
        document
            .borrow_mut()
            .listeners_mut()
            .add(EventTarget::Node(target), name.into(), &cb);
        log
    }

    #[test]
    fn test_root_and_body_classes() {
        let f = fixture();
        f.adapter.add_class(css_classes::OPEN);
        assert!(f.adapter.has_class(css_classes::OPEN));
        f.adapter.remove_class(css_classes::OPEN);
        assert!(!f.adapter.has_class(css_classes::OPEN));

        let body = f.document.borrow().body();
        f.adapter.add_body_class(css_classes::SCROLL_LOCK);
        f.adapter.add_body_class(css_classes::SCROLL_LOCK);
        assert!(f.document.borrow().tree().has_class(body, css_classes::SCROLL_LOCK));
        f.adapter.remove_body_class(css_classes::SCROLL_LOCK);
        assert!(!f.document.borrow().tree().has_class(body, css_classes::SCROLL_LOCK));
    }

    #[test]
    fn test_content_scrollable() {
        let f = fixture();
        assert!(!f.adapter.is_content_scrollable());
        {
            let mut doc = f.document.borrow_mut();
            let geometry = &mut doc.tree_mut().element_mut(f.content).unwrap().geometry;
            geometry.client_height = 100.0;
            geometry.scroll_height = 300.0;
        }
        assert!(f.adapter.is_content_scrollable());

        f.elements.content.set(None);
        assert!(!f.adapter.is_content_scrollable());
    }

    #[test]
    fn test_action_from_event() {
        let f = fixture();
        assert_eq!(
            f.adapter.get_action_from_event(&DomEvent::click(f.buttons[0])).as_deref(),
            Some("cancel")
        );
        assert_eq!(f.adapter.get_action_from_event(&DomEvent::click(f.content)), None);
        assert_eq!(
            f.adapter
                .get_action_from_event(&DomEvent::keydown(EventTarget::Document, "Enter")),
            None
        );
    }

    #[test]
    fn test_reverse_buttons_reorders_dom() {
        let f = fixture();
        f.adapter.reverse_buttons();
        let doc = f.document.borrow();
        let order = doc.tree().query_selector_all(f.root, BUTTON_SELECTOR);
        assert_eq!(order, vec![f.buttons[1], f.buttons[0]]);
        assert_eq!(f.elements.buttons.borrow().buttons(), order.as_slice());
    }

    #[test]
    fn test_click_default_button_dispatches_click() {
        let f = fixture();
        let clicks = record(&f.document, f.buttons[1], "click");
        f.adapter.click_default_button();
        assert_eq!(clicks.borrow().len(), 1);

        *f.elements.buttons.borrow_mut() = ButtonRegistry::new();
        f.adapter.click_default_button();
        assert_eq!(clicks.borrow().len(), 1);
    }

    #[test]
    fn test_close_detail_shape() {
        let f = fixture();
        let closing = record(&f.document, f.root, CLOSING_EVENT);
        let closed = record(&f.document, f.root, CLOSED_EVENT);

        f.adapter.notify_closing(Some("cancel"));
        f.adapter.notify_closed(Some("cancel"));
        f.adapter.notify_closing(None);
        f.adapter.notify_closed(Some(""));

        let closing = closing.borrow();
        let closed = closed.borrow();
        assert_eq!(closing[0].get(ACTION_DETAIL_KEY).map(String::as_str), Some("cancel"));
        assert_eq!(closed[0].get(ACTION_DETAIL_KEY).map(String::as_str), Some("cancel"));
        assert!(closing[1].is_empty());
        assert!(closed[1].is_empty());
    }

    #[test]
    fn test_focus_calls_without_trap_are_noops() {
        let f = fixture();
        f.adapter.trap_focus();
        f.adapter.release_focus();
        assert_eq!(f.document.borrow().active_element(), None);
    }
}
