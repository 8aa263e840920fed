//! DOM Node
//!
//! Nodes live in the `DomTree` arena and link to each other by `NodeId`.

use std::borrow::Cow;

use crate::{DOMTokenList, ElementGeometry, NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (None for the document node and detached nodes)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag_name)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(content.to_string()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    fn with_data(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug, Default)]
pub struct ElementData {
    /// Lowercased tag name
    pub tag_name: String,
    /// Attributes other than `class`
    pub attrs: NamedNodeMap,
    /// Class list, the single source of truth for the `class` attribute
    pub class_list: DOMTokenList,
    /// Layout metrics
    pub geometry: ElementGeometry,
}

impl ElementData {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        if name == "class" {
            return (!self.class_list.is_empty()).then(|| Cow::Owned(self.class_list.value()));
        }
        self.attrs.get_attribute(name).map(Cow::Borrowed)
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.class_list = DOMTokenList::from_string(value);
        } else {
            self.attrs.set_attribute(name, value);
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        if name == "class" {
            let had = !self.class_list.is_empty();
            self.class_list = DOMTokenList::new();
            return had;
        }
        self.attrs.remove_attribute(name).is_some()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        if name == "class" {
            return !self.class_list.is_empty();
        }
        self.attrs.has_attribute(name)
    }

    /// `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attrs.get_attribute("id")
    }
}
