//! Button component.
//!
//! Renders Bootstrap-style buttons: a native `<button>` by default, or an
//! `<a>` when the link variant is given a target. Class names are derived
//! deterministically from the configuration; unrecognized attributes pass
//! through to the rendered element unchanged.

use crate::Component;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use skiff_vdom::VNode;
use smallvec::SmallVec;
use tracing::trace;

/// Relative visual scale. Absence means no size modifier class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonSize {
    #[serde(rename = "lg")]
    Large,
    #[serde(rename = "sm")]
    Small,
}

impl ButtonSize {
    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonSize::Large => "lg",
            ButtonSize::Small => "sm",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lg" | "large" => Some(ButtonSize::Large),
            "sm" | "small" => Some(ButtonSize::Small),
            _ => None,
        }
    }
}

/// Visual variant, selecting the `btn-<variant>` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Default,
    Danger,
    Link,
}

impl ButtonVariant {
    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Default => "default",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Link => "link",
        }
    }

    /// Unrecognized names resolve to `Default` rather than producing an
    /// unstyled class token.
    pub fn from_name(name: &str) -> Self {
        match name {
            "primary" => ButtonVariant::Primary,
            "danger" => ButtonVariant::Danger,
            "link" => ButtonVariant::Link,
            _ => ButtonVariant::Default,
        }
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        ButtonVariant::Default
    }
}

/// Button configuration record.
///
/// ```
/// use skiff_components::{Button, ButtonVariant, Component};
/// use skiff_vdom::VNode;
///
/// let html = Button::new(vec![VNode::text("Delete")])
///     .with_variant(ButtonVariant::Danger)
///     .render_html();
/// assert_eq!(html, r#"<button class="btn btn-danger">Delete</button>"#);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    variant: ButtonVariant,
    size: Option<ButtonSize>,
    disabled: bool,
    class_name: Option<String>,
    href: Option<String>,
    children: Vec<VNode>,
    attrs: IndexMap<String, String>,
}

impl Default for Button {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Button {
    pub fn new(children: Vec<VNode>) -> Self {
        Self {
            variant: ButtonVariant::default(),
            size: None,
            disabled: false,
            class_name: None,
            href: None,
            children,
            attrs: IndexMap::new(),
        }
    }

    /// Button with a single text child
    pub fn label(text: impl Into<String>) -> Self {
        Self::new(vec![VNode::text(text)])
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Extra class appended to the computed class list, never replacing it
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Pass-through attribute, forwarded verbatim to the rendered element
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    pub fn size(&self) -> Option<ButtonSize> {
        self.size
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> skiff_vdom::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a configuration from JSON
    pub fn from_json(json: &str) -> skiff_vdom::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // btn, btn-lg, btn-primary
    fn classes(&self) -> String {
        let mut classes: SmallVec<[String; 5]> = SmallVec::new();
        classes.push("btn".to_string());
        if let Some(class_name) = &self.class_name {
            classes.push(class_name.clone());
        }
        classes.push(format!("btn-{}", self.variant.as_class()));
        if let Some(size) = self.size {
            classes.push(format!("btn-{}", size.as_class()));
        }
        // The link variant has no native disabled attribute to fall back
        // on, so disablement becomes a class there and only there.
        if self.variant == ButtonVariant::Link && self.disabled {
            classes.push("disabled".to_string());
        }
        classes.join(" ")
    }
}

impl Component for Button {
    fn render(&self) -> VNode {
        // An empty href gates anchor selection the same as an absent one.
        let target = self.href.as_deref().filter(|href| !href.is_empty());

        let mut node = match target {
            Some(href) if self.variant == ButtonVariant::Link => VNode::element("a")
                .with_attr("class", self.classes())
                .with_attr("href", href),
            _ => {
                let node = VNode::element("button").with_attr("class", self.classes());
                if self.disabled {
                    node.with_attr("disabled", "")
                } else {
                    node
                }
            }
        };
        trace!(variant = ?self.variant, tag = %node.tag, "render button");

        for (key, value) in &self.attrs {
            node = node.with_attr(key, value);
        }
        node.with_children(self.children.clone())
    }
}
