//! Email body templating
//!
//! The plea body is rendered from a Handlebars template named `email`. The
//! built-in template ships inside the binary; a replacement can be loaded
//! from disk.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{FosterPleaError, Result};
use crate::plea::PleaEntry;

/// Name the plea body template is registered under
pub const EMAIL_TEMPLATE_NAME: &str = "email";

/// Built-in plea body template
const EMAIL_TEMPLATE: &str = include_str!("../../templates/email.hbs");

/// Values bound into the email template
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmailBindings<'a> {
    /// Section heading shown above the entries
    pub heading: &'a str,
    /// Entries listed under the heading, in order
    pub plea_entries: &'a [PleaEntry],
}

/// A templating facility that renders named templates
pub trait TemplateRenderer {
    /// Render `template` with the given bindings
    fn render(&self, template: &str, bindings: &EmailBindings<'_>) -> Result<String>;
}

/// Handlebars-backed renderer
///
/// Strict mode is on: a template referring to a binding that does not
/// exist fails instead of rendering blank.
#[derive(Debug)]
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Create a renderer with the built-in email template
    pub fn new() -> Result<Self> {
        Self::with_template(EMAIL_TEMPLATE)
    }

    /// Create a renderer using the template stored at `path`
    ///
    /// # Errors
    ///
    /// Returns [`FosterPleaError::Template`] if the file cannot be read or
    /// does not parse
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FosterPleaError::Template(format!(
                "failed to read template {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %path.display(), "Loaded email template from file");
        Self::with_template(&content)
    }

    /// Create a renderer from template source
    pub fn with_template(source: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(EMAIL_TEMPLATE_NAME, source)
            .map_err(|e| FosterPleaError::Template(e.to_string()))?;

        Ok(Self { handlebars })
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template: &str, bindings: &EmailBindings<'_>) -> Result<String> {
        let rendered = self
            .handlebars
            .render(template, bindings)
            .map_err(|e| FosterPleaError::Template(e.to_string()))?;
        Ok(rendered)
    }
}

/// Build the HTML body of a plea email
///
/// Renders the `email` template with `heading` and `plea_entries` bound.
/// The renderer output is returned as-is.
///
/// # Arguments
///
/// * `renderer` - Templating facility holding the `email` template
/// * `heading` - Section heading shown above the entries
/// * `entries` - Entries to list, in order; may be empty
///
/// # Errors
///
/// Returns the renderer's template error unchanged
///
/// # Examples
///
/// ```
/// use foster_plea::email::{compose_body, HandlebarsRenderer};
///
/// let renderer = HandlebarsRenderer::with_template("<h2>{{heading}}</h2>").unwrap();
/// let body = compose_body(&renderer, "Syringe Gruelies", &[]).unwrap();
/// assert_eq!(body, "<h2>Syringe Gruelies</h2>");
/// ```
pub fn compose_body(
    renderer: &dyn TemplateRenderer,
    heading: &str,
    entries: &[PleaEntry],
) -> Result<String> {
    let bindings = EmailBindings {
        heading,
        plea_entries: entries,
    };
    let body = renderer.render(EMAIL_TEMPLATE_NAME, &bindings)?;

    tracing::debug!(
        entries = entries.len(),
        bytes = body.len(),
        "Composed plea email body"
    );

    Ok(body)
}
