//! DOM Tree (arena-based allocation)

use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree. Slot 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    fn element_or_err(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        match self.get_mut(id) {
            Some(node) => node.as_element_mut().ok_or(DomError::NotAnElement(id)),
            None => Err(DomError::NotFound(id)),
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.push(Node::element(tag_name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound(parent))?;
        if matches!(parent_node.data, NodeData::Text(_)) {
            return Err(DomError::HierarchyRequest);
        }
        let child_node = self.get(child).ok_or(DomError::NotFound(child))?;
        if matches!(child_node.data, NodeData::Document) || self.contains(child, parent) {
            return Err(DomError::HierarchyRequest);
        }

        self.detach(child);
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
        Ok(child)
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild(child));
        }
        self.detach(child);
        Ok(child)
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.nodes[child.index()].parent.take() {
            self.nodes[old_parent.index()].children.retain(|&c| c != child);
        }
    }

    /// Inclusive ancestors, starting at `id`
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).map(|_| id),
        }
    }

    /// Inclusive containment, like `Node.contains`
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|id| id == ancestor)
    }

    /// Descendants of `id` in document order, excluding `id`
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.element(id)?.get_attribute(name).map(|v| v.into_owned())
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_or_err(id)?.set_attribute(name, value);
        Ok(())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|el| el.class_list.contains(class))
    }

    /// Add a class. Returns true if the class list changed.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> DomResult<bool> {
        Ok(self.element_or_err(id)?.class_list.add(class))
    }

    /// Remove a class. Returns true if the class list changed.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> DomResult<bool> {
        Ok(self.element_or_err(id)?.class_list.remove(class))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over inclusive ancestors
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DomTree, NodeId, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("span");
        let b = tree.create_element("span");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, a).unwrap();
        tree.append_child(div, b).unwrap();
        (tree, div, a, b)
    }

    #[test]
    fn test_append_moves_node() {
        let (mut tree, div, a, b) = sample();
        assert_eq!(tree.children(div), &[a, b]);

        tree.append_child(div, a).unwrap();
        assert_eq!(tree.children(div), &[b, a]);
        assert_eq!(tree.parent(a), Some(div));
    }

    #[test]
    fn test_hierarchy_errors() {
        let (mut tree, div, a, _) = sample();
        assert_eq!(tree.append_child(a, div), Err(DomError::HierarchyRequest));
        assert_eq!(tree.append_child(div, div), Err(DomError::HierarchyRequest));

        let text = tree.create_text("hi");
        assert_eq!(tree.append_child(text, a), Err(DomError::HierarchyRequest));
        assert_eq!(tree.remove_child(a, div), Err(DomError::NotAChild(div)));
    }

    #[test]
    fn test_ancestors_and_contains() {
        let (tree, div, a, b) = sample();
        let chain: Vec<_> = tree.ancestors(a).collect();
        assert_eq!(chain, vec![a, div, NodeId::ROOT]);
        assert!(tree.contains(div, b));
        assert!(tree.contains(a, a));
        assert!(!tree.contains(a, b));
    }

    #[test]
    fn test_descendants_document_order() {
        let (mut tree, div, a, b) = sample();
        let inner = tree.create_element("em");
        tree.append_child(a, inner).unwrap();
        assert_eq!(tree.descendants(div), vec![a, inner, b]);
    }

    #[test]
    fn test_class_helpers_reject_text() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        assert_eq!(tree.add_class(text, "a"), Err(DomError::NotAnElement(text)));
        assert!(!tree.has_class(text, "a"));
    }
}
