//! Presentational UI components rendered as virtual DOM trees.
//!
//! Components are plain configuration records: build one with the
//! chainable setters, then `render()` it into a `VNode` (or straight to
//! an HTML string). Rendering is pure and stateless, so components can be
//! rendered concurrently without coordination.

use skiff_vdom::VNode;

pub mod button;

#[cfg(feature = "python")]
pub mod python;

pub use button::{Button, ButtonSize, ButtonVariant};

#[cfg(feature = "python")]
pub use python::register_components;

/// A renderable UI component
pub trait Component {
    /// Produce the component's markup tree
    fn render(&self) -> VNode;

    /// Render straight to an HTML string
    fn render_html(&self) -> String {
        skiff_vdom::render_html(&self.render())
    }
}
