//! fOS DOM - Document Object Model
//!
//! Arena DOM tree with selector queries, class lists, layout geometry,
//! focus tracking and bubbling event dispatch.

mod attributes;
mod classlist;
mod document;
pub mod dom_events;
mod element;
mod geometry;
mod node;
mod operations;
mod selector;
mod tree;

use std::cell::RefCell;
use std::rc::Rc;

pub use attributes::{Attr, NamedNodeMap};
pub use classlist::DOMTokenList;
pub use document::Document;
pub use dom_events::{
    dispatch_event, DomEvent, EventCallback, EventDetail, EventListeners, EventTarget, EventType,
};
pub use element::ElementQuery;
pub use geometry::ElementGeometry;
pub use node::{ElementData, Node, NodeData};
pub use operations::{DomError, DomResult};
pub use selector::{AttributeSelector, SelectorList, SimpleSelector};
pub use tree::{Ancestors, DomTree};

/// Shared handle to a document.
///
/// The DOM is single-threaded; components that outlive a single call
/// (listeners, focus traps, dialogs) hold one of these.
pub type DocumentHandle = Rc<RefCell<Document>>;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
