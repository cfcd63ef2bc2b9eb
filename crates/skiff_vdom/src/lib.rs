//! Virtual DOM node type for server-side component rendering
//!
//! This crate provides the markup tree that components produce: a `VNode`
//! with an insertion-ordered attribute map, plus HTML and JSON serialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod html;

pub use errors::{Result, SkiffError};
pub use html::render_html;

/// A virtual DOM node
///
/// Attributes use an insertion-ordered map so serialized output is
/// deterministic: attributes appear in the order they were set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VNode {
    pub tag: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<VNode>,
    pub text: Option<String>,
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Text nodes use the sentinel tag `#text`
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: "#text".to_string(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            text: Some(content.into()),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<VNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == "#text"
    }

    /// Serialize this node to HTML
    pub fn to_html(&self) -> String {
        html::render_html(self)
    }

    /// Serialize this node to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a node from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let node = VNode::element("div")
            .with_attr("class", "card")
            .with_child(VNode::text("hello"));

        assert_eq!(node.tag, "div");
        assert_eq!(node.attrs.get("class"), Some(&"card".to_string()));
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].is_text());
    }

    #[test]
    fn test_attr_order_is_insertion_order() {
        let node = VNode::element("a")
            .with_attr("class", "btn")
            .with_attr("href", "/home")
            .with_attr("id", "go");

        let keys: Vec<&str> = node.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["class", "href", "id"]);
    }

    #[test]
    fn test_json_round_trip() {
        let node = VNode::element("span")
            .with_attr("class", "badge")
            .with_child(VNode::text("7"));

        let json = node.to_json().unwrap();
        let back = VNode::from_json(&json).unwrap();
        assert_eq!(node, back);
    }
}
