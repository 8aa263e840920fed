//! DOM Events
//!
//! Listener registry and bubbling dispatch over element, document and
//! window targets.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::{DocumentHandle, NodeId};

/// Where a listener is registered or an event is dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Node(NodeId),
    Document,
    Window,
}

/// DOM event types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
    Resize,
    OrientationChange,
    /// Component-defined event name
    Custom(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Click => "click",
            Self::KeyDown => "keydown",
            Self::Resize => "resize",
            Self::OrientationChange => "orientationchange",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for EventType {
    fn from(name: &str) -> Self {
        match name {
            "click" => Self::Click,
            "keydown" => Self::KeyDown,
            "resize" => Self::Resize,
            "orientationchange" => Self::OrientationChange,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Custom event payload. An empty map is an empty detail object.
pub type EventDetail = BTreeMap<String, String>;

/// DOM event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: EventType,
    pub target: EventTarget,
    pub current_target: Option<EventTarget>,
    /// `KeyboardEvent.key` for key events
    pub key: Option<String>,
    pub detail: EventDetail,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    pub fn new(event_type: EventType, target: EventTarget, bubbles: bool) -> Self {
        Self {
            event_type,
            target,
            current_target: None,
            key: None,
            detail: EventDetail::new(),
            bubbles,
            cancelable: true,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create click event
    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, EventTarget::Node(target), true)
    }

    /// Create keydown event
    pub fn keydown(target: EventTarget, key: &str) -> Self {
        let mut event = Self::new(EventType::KeyDown, target, true);
        event.key = Some(key.to_string());
        event
    }

    /// Create a non-bubbling window event (resize, orientationchange)
    pub fn window(event_type: EventType) -> Self {
        Self::new(event_type, EventTarget::Window, false)
    }

    /// Create a non-bubbling custom event carrying `detail`
    pub fn custom(target: NodeId, name: &str, detail: EventDetail) -> Self {
        let mut event = Self::new(EventType::Custom(name.to_string()), EventTarget::Node(target), false);
        event.cancelable = false;
        event.detail = detail;
        event
    }

    /// Target node, if the event was dispatched on an element
    pub fn target_node(&self) -> Option<NodeId> {
        match self.target {
            EventTarget::Node(id) => Some(id),
            _ => None,
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Listener callback. Identity (`Rc::ptr_eq`) distinguishes listeners.
pub type EventCallback = Rc<dyn Fn(&mut DomEvent)>;

struct Registration {
    target: EventTarget,
    event_type: EventType,
    callback: EventCallback,
}

impl Registration {
    fn is(&self, target: EventTarget, event_type: &EventType, callback: &EventCallback) -> bool {
        self.target == target && &self.event_type == event_type && Rc::ptr_eq(&self.callback, callback)
    }
}

/// Listener registry for one document and its window
#[derive(Default)]
pub struct EventListeners {
    entries: Vec<Registration>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add event listener. Adding the same (target, type, callback) twice is a no-op.
    pub fn add(&mut self, target: EventTarget, event_type: EventType, callback: &EventCallback) -> bool {
        if self.contains(target, &event_type, callback) {
            return false;
        }
        tracing::trace!("add {} listener on {:?}", event_type, target);
        self.entries.push(Registration {
            target,
            event_type,
            callback: Rc::clone(callback),
        });
        true
    }

    /// Remove event listener. Returns true if one was registered.
    pub fn remove(&mut self, target: EventTarget, event_type: &EventType, callback: &EventCallback) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| !r.is(target, event_type, callback));
        let removed = before != self.entries.len();
        if removed {
            tracing::trace!("remove {} listener on {:?}", event_type, target);
        }
        removed
    }

    pub fn contains(&self, target: EventTarget, event_type: &EventType, callback: &EventCallback) -> bool {
        self.entries.iter().any(|r| r.is(target, event_type, callback))
    }

    /// Number of listeners on `target`
    pub fn count_for(&self, target: EventTarget) -> usize {
        self.entries.iter().filter(|r| r.target == target).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn matching(&self, target: EventTarget, event_type: &EventType) -> Vec<EventCallback> {
        self.entries
            .iter()
            .filter(|r| r.target == target && &r.event_type == event_type)
            .map(|r| Rc::clone(&r.callback))
            .collect()
    }
}

impl fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|r| (r.target, r.event_type.as_str())))
            .finish()
    }
}

fn propagation_path(document: &DocumentHandle, event: &DomEvent) -> Vec<EventTarget> {
    let node = match event.target {
        EventTarget::Node(id) => id,
        EventTarget::Document if event.bubbles => {
            return vec![EventTarget::Document, EventTarget::Window];
        }
        other => return vec![other],
    };
    if !event.bubbles {
        return vec![EventTarget::Node(node)];
    }

    let doc = document.borrow();
    let mut path: Vec<EventTarget> = doc
        .tree()
        .ancestors(node)
        .map(|id| {
            if id == NodeId::ROOT {
                EventTarget::Document
            } else {
                EventTarget::Node(id)
            }
        })
        .collect();
    if path.last() == Some(&EventTarget::Document) {
        path.push(EventTarget::Window);
    }
    path
}

/// Dispatch `event` to its target and, when it bubbles, every ancestor,
/// then the document and window.
///
/// Listeners are snapshotted per target before invocation, so callbacks
/// may borrow the document and add or remove listeners.
pub fn dispatch_event(document: &DocumentHandle, mut event: DomEvent) -> DomEvent {
    for target in propagation_path(document, &event) {
        let callbacks = document.borrow().listeners().matching(target, &event.event_type);
        event.current_target = Some(target);
        for callback in callbacks {
            callback(&mut event);
        }
        if event.propagation_stopped {
            break;
        }
    }
    event.current_target = None;
    event
}
