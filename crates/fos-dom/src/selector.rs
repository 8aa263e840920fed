//! Selector Matching
//!
//! Selector lists of compound selectors joined by the descendant
//! combinator: `textarea, .menu .item`, `[data-action]`, `button.primary`.

use crate::{DomError, DomResult, DomTree, ElementData, NodeId};

/// Attribute selector: `[name]` or `[name=value]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    pub name: String,
    pub value: Option<String>,
}

/// A component of a compound selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// Universal selector *
    Universal,
    /// Type selector (tag name)
    Type(String),
    /// ID selector #id
    Id(String),
    /// Class selector .class
    Class(String),
    /// Attribute selector
    Attribute(AttributeSelector),
}

impl SimpleSelector {
    fn matches(&self, el: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Type(tag) => el.tag_name.eq_ignore_ascii_case(tag),
            Self::Id(id) => el.id() == Some(id.as_str()),
            Self::Class(class) => el.class_list.contains(class),
            Self::Attribute(attr) => match &attr.value {
                None => el.has_attribute(&attr.name),
                Some(expected) => el.get_attribute(&attr.name).as_deref() == Some(expected.as_str()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CompoundSelector(Vec<SimpleSelector>);

impl CompoundSelector {
    fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        tree.element(node)
            .is_some_and(|el| self.0.iter().all(|s| s.matches(el)))
    }
}

/// Compounds left to right, each a descendant of the previous one
#[derive(Debug, Clone, PartialEq, Eq)]
struct ComplexSelector(Vec<CompoundSelector>);

impl ComplexSelector {
    fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        let Some((subject, rest)) = self.0.split_last() else {
            return false;
        };
        if !subject.matches(tree, node) {
            return false;
        }
        // Nearest matching ancestor first leaves the most room for the rest
        let mut cursor = tree.parent(node);
        for compound in rest.iter().rev() {
            loop {
                let Some(id) = cursor else {
                    return false;
                };
                cursor = tree.parent(id);
                if compound.matches(tree, id) {
                    break;
                }
            }
        }
        true
    }
}

/// Parsed, comma-separated selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(Vec<ComplexSelector>);

impl SelectorList {
    pub fn parse(input: &str) -> DomResult<Self> {
        let invalid = || DomError::InvalidSelector(input.to_string());
        let mut list = Vec::new();
        for part in split_outside_brackets(input, |c| c == ',') {
            let compounds = split_outside_brackets(part, char::is_whitespace)
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(|s| parse_compound(s).ok_or_else(invalid))
                .collect::<DomResult<Vec<_>>>()?;
            if compounds.is_empty() {
                return Err(invalid());
            }
            list.push(ComplexSelector(compounds));
        }
        Ok(Self(list))
    }

    /// Whether `node` matches any selector in the list
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.0.iter().any(|c| c.matches(tree, node))
    }
}

fn split_outside_brackets(input: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if depth == 0 && is_sep(c) => {
                parts.push(input[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(input[start..].trim());
    parts
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    (!ident.is_empty()).then_some(ident)
}

fn parse_compound(input: &str) -> Option<CompoundSelector> {
    let mut parts = Vec::new();
    let mut chars = input.chars().peekable();

    if chars.peek() == Some(&'*') {
        chars.next();
        parts.push(SimpleSelector::Universal);
    } else if chars.peek().copied().is_some_and(is_ident_char) {
        parts.push(SimpleSelector::Type(take_ident(&mut chars)?.to_ascii_lowercase()));
    }

    while let Some(c) = chars.next() {
        match c {
            '.' => parts.push(SimpleSelector::Class(take_ident(&mut chars)?)),
            '#' => parts.push(SimpleSelector::Id(take_ident(&mut chars)?)),
            '[' => {
                let body: String = chars.by_ref().take_while(|&c| c != ']').collect();
                parts.push(SimpleSelector::Attribute(parse_attribute(&body)?));
            }
            _ => return None,
        }
    }

    (!parts.is_empty()).then_some(CompoundSelector(parts))
}

fn parse_attribute(body: &str) -> Option<AttributeSelector> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => {
            let value = value.trim();
            let unquoted = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            (name.trim(), Some(unquoted.to_string()))
        }
        None => (body.trim(), None),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    Some(AttributeSelector {
        name: name.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound_parts() {
        let list = SelectorList::parse("button.mdc-button#ok[data-action=close]").unwrap();
        let ComplexSelector(compounds) = &list.0[0];
        assert_eq!(
            compounds[0].0,
            vec![
                SimpleSelector::Type("button".into()),
                SimpleSelector::Class("mdc-button".into()),
                SimpleSelector::Id("ok".into()),
                SimpleSelector::Attribute(AttributeSelector {
                    name: "data-action".into(),
                    value: Some("close".into()),
                }),
            ]
        );
    }

    #[test]
    fn test_parse_list_and_descendants() {
        let list = SelectorList::parse("textarea, .mdc-menu .mdc-list-item").unwrap();
        assert_eq!(list.0.len(), 2);
        assert_eq!(list.0[1].0.len(), 2);
    }

    #[test]
    fn test_quoted_attribute_value() {
        let list = SelectorList::parse("[data-action='a, b']").unwrap();
        let SimpleSelector::Attribute(attr) = &list.0[0].0[0].0[0] else {
            panic!("expected attribute selector");
        };
        assert_eq!(attr.value.as_deref(), Some("a, b"));
    }

    #[test]
    fn test_rejects_unsupported_syntax() {
        assert!(SelectorList::parse("div > span").is_err());
        assert!(SelectorList::parse("a:hover").is_err());
        assert!(SelectorList::parse("").is_err());
        assert!(SelectorList::parse("a,,b").is_err());
        assert!(SelectorList::parse(".").is_err());
    }

    #[test]
    fn test_descendant_matching() {
        let mut tree = DomTree::new();
        let menu = tree.create_element("div");
        let list = tree.create_element("ul");
        let item = tree.create_element("li");
        tree.append_child(tree.root(), menu).unwrap();
        tree.append_child(menu, list).unwrap();
        tree.append_child(list, item).unwrap();
        tree.set_attribute(menu, "class", "mdc-menu").unwrap();
        tree.set_attribute(item, "class", "mdc-list-item").unwrap();

        let selector = SelectorList::parse(".mdc-menu .mdc-list-item").unwrap();
        assert!(selector.matches(&tree, item));
        assert!(!selector.matches(&tree, list));

        let deep = SelectorList::parse("div ul li").unwrap();
        assert!(deep.matches(&tree, item));
        let wrong_order = SelectorList::parse("ul div li").unwrap();
        assert!(!wrong_order.matches(&tree, item));
    }
}
