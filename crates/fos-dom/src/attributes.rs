//! Element Attributes
//!
//! Attribute storage: get, set, remove, has.

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// Named node map (attribute collection), insertion ordered
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set attribute, returning the previous value
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.name == name) {
            return Some(std::mem::replace(&mut attr.value, value.to_string()));
        }
        self.attributes.push(Attr {
            name: name.to_string(),
            value: value.to_string(),
        });
        None
    }

    /// Remove attribute by name
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attr> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = NamedNodeMap::new();
        assert_eq!(attrs.set_attribute("data-action", "close"), None);
        assert_eq!(attrs.set_attribute("data-action", "accept"), Some("close".into()));

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get_attribute("data-action"), Some("accept"));
    }

    #[test]
    fn test_remove_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("foo", "bar");

        assert!(attrs.has_attribute("foo"));
        assert!(attrs.remove_attribute("foo").is_some());
        assert!(!attrs.has_attribute("foo"));
        assert!(attrs.remove_attribute("foo").is_none());
    }
}
