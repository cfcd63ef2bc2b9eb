//! HTML serialization for virtual DOM trees
//!
//! Renders a `VNode` to an HTML string with escaped text and attribute
//! values. Attribute order follows the node's insertion-ordered map, so
//! output is deterministic.

use crate::VNode;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::trace;

/// Attributes that HTML treats as boolean: presence alone enables them.
/// An empty value renders as the bare attribute name (`<button disabled>`).
static BOOLEAN_ATTRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "disabled",
        "checked",
        "selected",
        "required",
        "readonly",
        "autofocus",
        "multiple",
        "hidden",
    ]
    .into_iter()
    .collect()
});

/// Elements with no closing tag
static VOID_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["br", "hr", "img", "input", "meta", "link"]
        .into_iter()
        .collect()
});

/// Render a virtual DOM tree to an HTML string
pub fn render_html(node: &VNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    trace!(tag = %node.tag, bytes = out.len(), "rendered vdom tree to html");
    out
}

fn write_node(node: &VNode, out: &mut String) {
    if node.is_text() {
        if let Some(text) = &node.text {
            out.push_str(&escape(text));
        }
        return;
    }

    out.push('<');
    out.push_str(&node.tag);

    for (name, value) in &node.attrs {
        out.push(' ');
        out.push_str(name);
        if value.is_empty() && BOOLEAN_ATTRS.contains(name.as_str()) {
            continue;
        }
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(node.tag.as_str()) {
        return;
    }

    for child in &node.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

/// HTML escape function for safety
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
