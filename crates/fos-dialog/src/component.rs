//! Dialog Component
//!
//! Binds a `DialogFoundation` to markup in a fOS document: discovers the
//! dialog's elements, owns its ripples and focus trap, and routes DOM events
//! into the foundation.

use std::rc::{Rc, Weak};

use fos_dom::{
    DocumentHandle, DomEvent, ElementQuery, EventCallback, EventDetail, EventTarget, EventType,
    NodeId,
};

use crate::adapter::{DialogElements, DomDialogAdapter};
use crate::buttons::ButtonRegistry;
use crate::config::{DialogConfig, DialogOptions};
use crate::constants::{CLOSING_EVENT, CONTAINER_SELECTOR, CONTENT_SELECTOR, OPENING_EVENT};
use crate::error::{DialogError, DialogResult};
use crate::focus_scope::{create_focus_trap, FocusTrapFactory};
use crate::foundation::DialogFoundation;

/// Where a dialog is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Constructed,
    Initialized,
    DomSynced,
    Destroyed,
}

/// Callbacks registered by `initial_sync_with_dom`
struct Handlers {
    interaction: EventCallback,
    opening: EventCallback,
    closing: EventCallback,
}

/// Modal dialog bound to a root element
pub struct Dialog {
    document: DocumentHandle,
    root: NodeId,
    elements: Rc<DialogElements>,
    foundation: Rc<DialogFoundation<DomDialogAdapter>>,
    focus_trap_factory: Option<FocusTrapFactory>,
    initial_focus: Option<NodeId>,
    handlers: Option<Handlers>,
    state: LifecycleState,
}

impl Dialog {
    /// Construct without touching the document
    pub fn new(document: DocumentHandle, root: NodeId) -> Self {
        let elements = Rc::new(DialogElements::default());
        let adapter = DomDialogAdapter::new(Rc::clone(&document), root, Rc::clone(&elements));
        Self {
            document,
            root,
            elements,
            foundation: Rc::new(DialogFoundation::new(adapter)),
            focus_trap_factory: None,
            initial_focus: None,
            handlers: None,
            state: LifecycleState::Constructed,
        }
    }

    /// Attach a dialog to `root` with default options
    pub fn attach_to(document: &DocumentHandle, root: NodeId) -> DialogResult<Self> {
        Self::attach_to_with(document, root, DialogOptions::default())
    }

    pub fn attach_to_with(
        document: &DocumentHandle,
        root: NodeId,
        options: DialogOptions,
    ) -> DialogResult<Self> {
        let mut dialog = Self::new(Rc::clone(document), root);
        dialog.initialize(options.focus_trap_factory, options.initial_focus)?;
        dialog.foundation.init();
        if let Some(config) = &options.config {
            dialog.apply_config(config);
        }
        dialog.initial_sync_with_dom()?;
        Ok(dialog)
    }

    /// Discover the dialog's elements and attach button ripples
    pub fn initialize(
        &mut self,
        focus_trap_factory: Option<FocusTrapFactory>,
        initial_focus: Option<NodeId>,
    ) -> DialogResult<()> {
        self.expect_state("initialize", LifecycleState::Constructed)?;

        let (container, content, mut buttons) = {
            let doc = self.document.borrow();
            let tree = doc.tree();
            let container = tree
                .query_selector(self.root, CONTAINER_SELECTOR)
                .ok_or(DialogError::MissingContainer {
                    selector: CONTAINER_SELECTOR,
                })?;
            (
                container,
                tree.query_selector(self.root, CONTENT_SELECTOR),
                ButtonRegistry::discover(tree, self.root),
            )
        };
        buttons.attach_ripples(self.document.borrow_mut().tree_mut());
        tracing::debug!(
            "dialog {:?}: container {:?}, {} buttons, default {:?}",
            self.root,
            container,
            buttons.len(),
            buttons.default_button()
        );

        self.elements.container.set(Some(container));
        self.elements.content.set(content);
        *self.elements.buttons.borrow_mut() = buttons;
        self.focus_trap_factory = focus_trap_factory;
        self.initial_focus = initial_focus;
        self.state = LifecycleState::Initialized;
        Ok(())
    }

    /// Create the focus trap and register root listeners
    pub fn initial_sync_with_dom(&mut self) -> DialogResult<()> {
        self.expect_state("sync", LifecycleState::Initialized)?;
        let Some(container) = self.elements.container.get() else {
            return Err(DialogError::MissingContainer {
                selector: CONTAINER_SELECTOR,
            });
        };

        let trap = create_focus_trap(
            &self.document,
            container,
            self.focus_trap_factory.as_ref(),
            self.initial_focus,
        );
        *self.elements.focus_trap.borrow_mut() = Some(trap);

        let handlers = self.build_handlers();
        {
            let mut doc = self.document.borrow_mut();
            let listeners = doc.listeners_mut();
            let root = EventTarget::Node(self.root);
            listeners.add(root, EventType::Click, &handlers.interaction);
            listeners.add(root, EventType::KeyDown, &handlers.interaction);
            listeners.add(root, OPENING_EVENT.into(), &handlers.opening);
            listeners.add(root, CLOSING_EVENT.into(), &handlers.closing);
        }
        self.handlers = Some(handlers);
        self.state = LifecycleState::DomSynced;
        tracing::debug!("dialog {:?} synced with document", self.root);
        Ok(())
    }

    /// Release listeners, ripples and focus. Closes with the destroy action
    /// if open.
    pub fn destroy(&mut self) {
        if self.state == LifecycleState::Destroyed {
            tracing::warn!("dialog {:?} already destroyed", self.root);
            return;
        }

        if let Some(handlers) = self.handlers.take() {
            {
                let mut doc = self.document.borrow_mut();
                let listeners = doc.listeners_mut();
                let root = EventTarget::Node(self.root);
                listeners.remove(root, &EventType::Click, &handlers.interaction);
                listeners.remove(root, &EventType::KeyDown, &handlers.interaction);
                listeners.remove(root, &OPENING_EVENT.into(), &handlers.opening);
                listeners.remove(root, &CLOSING_EVENT.into(), &handlers.closing);
            }
            let mut event = DomEvent::custom(self.root, CLOSING_EVENT, EventDetail::new());
            (handlers.closing)(&mut event);
        }

        {
            let mut doc = self.document.borrow_mut();
            self.elements
                .buttons
                .borrow_mut()
                .destroy_ripples(doc.tree_mut());
        }

        self.foundation.destroy();
        self.state = LifecycleState::Destroyed;
        tracing::debug!("dialog {:?} destroyed", self.root);
    }

    pub fn open(&self) {
        if self.state == LifecycleState::Destroyed {
            tracing::warn!("open called on destroyed dialog {:?}", self.root);
            return;
        }
        self.foundation.open();
    }

    pub fn close(&self, action: Option<&str>) {
        self.foundation.close(action);
    }

    pub fn layout(&self) {
        self.foundation.layout();
    }

    pub fn is_open(&self) -> bool {
        self.foundation.is_open()
    }

    pub fn escape_key_action(&self) -> String {
        self.foundation.escape_key_action()
    }

    pub fn set_escape_key_action(&self, action: impl Into<String>) {
        self.foundation.set_escape_key_action(action);
    }

    pub fn scrim_click_action(&self) -> String {
        self.foundation.scrim_click_action()
    }

    pub fn set_scrim_click_action(&self, action: impl Into<String>) {
        self.foundation.set_scrim_click_action(action);
    }

    pub fn auto_stack_buttons(&self) -> bool {
        self.foundation.auto_stack_buttons()
    }

    pub fn set_auto_stack_buttons(&self, auto_stack: bool) {
        self.foundation.set_auto_stack_buttons(auto_stack);
    }

    /// Current settings as a config
    pub fn config(&self) -> DialogConfig {
        DialogConfig {
            escape_key_action: self.escape_key_action(),
            scrim_click_action: self.scrim_click_action(),
            auto_stack_buttons: self.auto_stack_buttons(),
        }
    }

    pub fn apply_config(&self, config: &DialogConfig) {
        self.set_escape_key_action(config.escape_key_action.as_str());
        self.set_scrim_click_action(config.scrim_click_action.as_str());
        self.set_auto_stack_buttons(config.auto_stack_buttons);
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn container(&self) -> Option<NodeId> {
        self.elements.container.get()
    }

    pub fn content(&self) -> Option<NodeId> {
        self.elements.content.get()
    }

    /// Buttons in their current order
    pub fn buttons(&self) -> Vec<NodeId> {
        self.elements.buttons.borrow().buttons().to_vec()
    }

    pub fn default_button(&self) -> Option<NodeId> {
        self.elements.buttons.borrow().default_button()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn document(&self) -> &DocumentHandle {
        &self.document
    }

    pub fn foundation(&self) -> &DialogFoundation<DomDialogAdapter> {
        &self.foundation
    }

    fn expect_state(&self, operation: &'static str, expected: LifecycleState) -> DialogResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(DialogError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn build_handlers(&self) -> Handlers {
        let foundation = Rc::downgrade(&self.foundation);
        let interaction = foundation_callback(&foundation, |f, event| f.handle_interaction(event));
        let document_keydown =
            foundation_callback(&foundation, |f, event| f.handle_document_keydown(event));
        let layout = foundation_callback(&foundation, |f, _| f.layout());

        let document = Rc::downgrade(&self.document);
        let opening: EventCallback = {
            let document = Weak::clone(&document);
            let layout = Rc::clone(&layout);
            let document_keydown = Rc::clone(&document_keydown);
            Rc::new(move |_: &mut DomEvent| {
                let Some(document) = document.upgrade() else {
                    return;
                };
                let mut doc = document.borrow_mut();
                let listeners = doc.listeners_mut();
                listeners.add(EventTarget::Window, EventType::Resize, &layout);
                listeners.add(EventTarget::Window, EventType::OrientationChange, &layout);
                listeners.add(EventTarget::Document, EventType::KeyDown, &document_keydown);
            })
        };
        let closing: EventCallback = Rc::new(move |_: &mut DomEvent| {
            let Some(document) = document.upgrade() else {
                return;
            };
            let mut doc = document.borrow_mut();
            let listeners = doc.listeners_mut();
            listeners.remove(EventTarget::Window, &EventType::Resize, &layout);
            listeners.remove(EventTarget::Window, &EventType::OrientationChange, &layout);
            listeners.remove(EventTarget::Document, &EventType::KeyDown, &document_keydown);
        });

        Handlers {
            interaction,
            opening,
            closing,
        }
    }
}

/// Callback forwarding to the foundation while it is alive
fn foundation_callback(
    foundation: &Weak<DialogFoundation<DomDialogAdapter>>,
    f: impl Fn(&DialogFoundation<DomDialogAdapter>, &DomEvent) + 'static,
) -> EventCallback {
    let foundation = Weak::clone(foundation);
    Rc::new(move |event: &mut DomEvent| {
        if let Some(foundation) = foundation.upgrade() {
            f(&foundation, event);
        }
    })
}
