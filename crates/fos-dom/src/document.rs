//! Document - High-level document API

use std::cell::RefCell;
use std::rc::Rc;

use crate::{DocumentHandle, DomTree, EventListeners, NodeId};

/// HTML Document
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Element holding keyboard focus
    active_element: Option<NodeId>,
    /// Listeners for nodes, the document and its window
    listeners: EventListeners,
}

impl Document {
    /// Create a document with `<html><head></head><body></body></html>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh nodes cannot violate the hierarchy
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            active_element: None,
            listeners: EventListeners::new(),
        }
    }

    /// Wrap in a shared handle
    pub fn into_handle(self) -> DocumentHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn listeners(&self) -> &EventListeners {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut EventListeners {
        &mut self.listeners
    }

    /// Focused element, if it is still connected
    pub fn active_element(&self) -> Option<NodeId> {
        self.active_element
            .filter(|&id| self.tree.contains(self.tree.root(), id))
    }

    /// Move focus to a connected element. Returns false otherwise.
    pub fn focus(&mut self, id: NodeId) -> bool {
        let connected = self.tree.element(id).is_some() && self.tree.contains(self.tree.root(), id);
        if connected {
            self.active_element = Some(id);
        }
        connected
    }

    /// Drop focus
    pub fn blur(&mut self) {
        self.active_element = None;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let doc = Document::new("https://example.com");
        assert_eq!(doc.url(), "https://example.com");
        assert_eq!(doc.tree().parent(doc.body()), Some(doc.document_element()));
        assert_eq!(doc.tree().children(doc.document_element()), &[doc.head(), doc.body()]);
    }

    #[test]
    fn test_focus_requires_connected_element() {
        let mut doc = Document::default();
        let detached = doc.tree_mut().create_element("button");
        assert!(!doc.focus(detached));
        assert_eq!(doc.active_element(), None);

        let body = doc.body();
        doc.tree_mut().append_child(body, detached).unwrap();
        assert!(doc.focus(detached));
        assert_eq!(doc.active_element(), Some(detached));

        doc.tree_mut().remove_child(body, detached).unwrap();
        assert_eq!(doc.active_element(), None);

        doc.blur();
        assert_eq!(doc.active_element(), None);
    }
}
