//! Python bindings for the component library.
//!
//! Enabled with the `python` feature. Components cross the boundary as
//! plain configuration and come back as rendered HTML strings.

use crate::{Button, ButtonSize, ButtonVariant, Component};
use pyo3::prelude::*;

#[pyclass(name = "Button")]
#[derive(Clone)]
pub struct PyButton {
    inner: Button,
}

#[pymethods]
impl PyButton {
    #[new]
    #[pyo3(signature = (text, variant="default", size=None, disabled=false, class_name=None, href=None))]
    fn new(
        text: String,
        variant: &str,
        size: Option<&str>,
        disabled: bool,
        class_name: Option<&str>,
        href: Option<&str>,
    ) -> Self {
        let mut button = Button::label(text)
            .with_variant(ButtonVariant::from_name(variant))
            .with_disabled(disabled);
        if let Some(size) = size.and_then(ButtonSize::from_name) {
            button = button.with_size(size);
        }
        if let Some(class_name) = class_name {
            button = button.with_class(class_name);
        }
        if let Some(href) = href {
            button = button.with_href(href);
        }
        Self { inner: button }
    }

    /// Forward an extra attribute to the rendered element
    fn set_attr(&mut self, key: String, value: String) {
        self.inner = self.inner.clone().with_attr(key, value);
    }

    /// Render button to HTML string
    fn render(&self) -> String {
        self.inner.render_html()
    }

    fn __str__(&self) -> String {
        self.render()
    }

    fn __repr__(&self) -> String {
        format!(
            "Button(variant={:?}, size={:?}, disabled={}, href={:?})",
            self.inner.variant(),
            self.inner.size(),
            self.inner.is_disabled(),
            self.inner.href()
        )
    }
}

/// Re-export components for PyO3 module
pub fn register_components(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyButton>()?;
    Ok(())
}
