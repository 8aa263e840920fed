//! Dialog Foundation
//!
//! Open/close state machine, Escape and scrim policy, and button layout
//! decisions. Talks to the outside world only through `DialogAdapter`.
//!
//! State lives in cells so listeners reacting to the foundation's own
//! notifications may call back into it.

use std::cell::{Cell, RefCell};

use fos_dom::{DomEvent, EventType};

use crate::adapter::DialogAdapter;
use crate::constants::{
    css_classes, CLOSE_ACTION, DESTROY_ACTION, SCRIM_SELECTOR, SUPPRESS_DEFAULT_PRESS_SELECTOR,
};

pub struct DialogFoundation<A: DialogAdapter> {
    adapter: A,
    is_open: Cell<bool>,
    are_buttons_stacked: Cell<bool>,
    auto_stack_buttons: Cell<bool>,
    escape_key_action: RefCell<String>,
    scrim_click_action: RefCell<String>,
}

fn is_enter(key: Option<&str>) -> bool {
    key == Some("Enter")
}

fn is_space(key: Option<&str>) -> bool {
    matches!(key, Some(" " | "Spacebar"))
}

fn is_escape(key: Option<&str>) -> bool {
    matches!(key, Some("Escape" | "Esc"))
}

impl<A: DialogAdapter> DialogFoundation<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            is_open: Cell::new(false),
            are_buttons_stacked: Cell::new(false),
            auto_stack_buttons: Cell::new(true),
            escape_key_action: RefCell::new(CLOSE_ACTION.to_string()),
            scrim_click_action: RefCell::new(CLOSE_ACTION.to_string()),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Markup that starts stacked opts out of automatic stacking
    pub fn init(&self) {
        if self.adapter.has_class(css_classes::STACKED) {
            self.auto_stack_buttons.set(false);
        }
    }

    /// Close with the destroy action if still open
    pub fn destroy(&self) {
        if self.is_open.get() {
            self.close(Some(DESTROY_ACTION));
        }
    }

    pub fn open(&self) {
        if self.is_open.get() {
            return;
        }
        tracing::debug!("dialog opening");
        self.is_open.set(true);
        self.adapter.notify_opening();
        if !self.is_open.get() {
            // closed by an opening listener
            return;
        }
        self.adapter.add_class(css_classes::OPENING);
        self.adapter.add_class(css_classes::OPEN);
        self.adapter.add_body_class(css_classes::SCROLL_LOCK);
        self.layout();
        self.handle_animation_end();
        self.adapter.trap_focus();
        self.adapter.notify_opened();
    }

    /// Close, reporting `action` to closing/closed listeners. No-op when closed.
    pub fn close(&self, action: Option<&str>) {
        if !self.is_open.get() {
            return;
        }
        let action = action.filter(|a| !a.is_empty());
        tracing::debug!("dialog closing, action {:?}", action);
        self.is_open.set(false);
        self.adapter.notify_closing(action);
        self.adapter.add_class(css_classes::CLOSING);
        self.adapter.remove_class(css_classes::OPEN);
        self.adapter.remove_body_class(css_classes::SCROLL_LOCK);
        self.adapter.release_focus();
        self.handle_animation_end();
        self.adapter.notify_closed(action);
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn escape_key_action(&self) -> String {
        self.escape_key_action.borrow().clone()
    }

    pub fn set_escape_key_action(&self, action: impl Into<String>) {
        *self.escape_key_action.borrow_mut() = action.into();
    }

    pub fn scrim_click_action(&self) -> String {
        self.scrim_click_action.borrow().clone()
    }

    pub fn set_scrim_click_action(&self, action: impl Into<String>) {
        *self.scrim_click_action.borrow_mut() = action.into();
    }

    pub fn auto_stack_buttons(&self) -> bool {
        self.auto_stack_buttons.get()
    }

    pub fn set_auto_stack_buttons(&self, auto_stack: bool) {
        self.auto_stack_buttons.set(auto_stack);
    }

    /// Recompute stacking and scrollability
    pub fn layout(&self) {
        if self.auto_stack_buttons.get() {
            self.detect_stacked_buttons();
        }
        self.detect_scrollable_content();
    }

    /// Click, Enter or Space inside the dialog
    pub fn handle_interaction(&self, event: &DomEvent) {
        let is_click = event.event_type == EventType::Click;
        let key = match event.event_type {
            EventType::KeyDown => event.key.as_deref(),
            _ => None,
        };
        let is_enter = is_enter(key);
        let is_space = is_space(key);
        let is_scrim = self.adapter.event_target_matches(event.target, SCRIM_SELECTOR);
        let is_default_allowed = !self
            .adapter
            .event_target_matches(event.target, SUPPRESS_DEFAULT_PRESS_SELECTOR);

        let scrim_action = self.scrim_click_action();
        if is_click && is_scrim && !scrim_action.is_empty() {
            self.close(Some(scrim_action.as_str()));
        } else if is_click || is_space || is_enter {
            match self.adapter.get_action_from_event(event) {
                Some(action) if !action.is_empty() => self.close(Some(action.as_str())),
                _ if is_enter && is_default_allowed => self.adapter.click_default_button(),
                _ => {}
            }
        }
    }

    /// Keydown anywhere in the document while open
    pub fn handle_document_keydown(&self, event: &DomEvent) {
        if event.event_type != EventType::KeyDown || !is_escape(event.key.as_deref()) {
            return;
        }
        let action = self.escape_key_action();
        if !action.is_empty() {
            self.close(Some(action.as_str()));
        }
    }

    fn handle_animation_end(&self) {
        self.adapter.remove_class(css_classes::OPENING);
        self.adapter.remove_class(css_classes::CLOSING);
    }

    fn detect_stacked_buttons(&self) {
        // Measure with the stacked class removed
        self.adapter.remove_class(css_classes::STACKED);
        let stacked = self.adapter.are_buttons_stacked();
        if stacked {
            self.adapter.add_class(css_classes::STACKED);
        }
        if stacked != self.are_buttons_stacked.get() {
            self.adapter.reverse_buttons();
            self.are_buttons_stacked.set(stacked);
        }
    }

    fn detect_scrollable_content(&self) {
        self.adapter.remove_class(css_classes::SCROLLABLE);
        if self.adapter.is_content_scrollable() {
            self.adapter.add_class(css_classes::SCROLLABLE);
        }
    }
}
