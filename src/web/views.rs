//! Template views rendered from plain serialisable data.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Task list page.
pub const INDEX_TEMPLATE: &str = "index.html";

/// Blank creation form.
pub const CREATE_TEMPLATE: &str = "createTask.html";

/// Pre-filled edit form.
pub const EDIT_TEMPLATE: &str = "editTask.html";

/// Error raised while loading or rendering a template.
#[derive(Debug, Error)]
#[error("template '{template}' failed: {source}")]
pub struct ViewError {
    template: String,
    #[source]
    source: minijinja::Error,
}

impl ViewError {
    fn new(template: &str, source: minijinja::Error) -> Self {
        Self {
            template: template.to_owned(),
            source,
        }
    }
}

/// Compiled set of HTML templates embedded in the binary.
///
/// Rendering is a pure function of the template name and the data passed
/// in; the views know nothing about the task service.
#[derive(Debug)]
pub struct Views {
    environment: Environment<'static>,
}

impl Views {
    /// Loads and compiles all templates.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when a template fails to parse.
    pub fn new() -> Result<Self, ViewError> {
        let mut environment = Environment::new();
        for (name, source) in [
            (INDEX_TEMPLATE, include_str!("../../templates/index.html")),
            (CREATE_TEMPLATE, include_str!("../../templates/createTask.html")),
            (EDIT_TEMPLATE, include_str!("../../templates/editTask.html")),
        ] {
            environment
                .add_template(name, source)
                .map_err(|err| ViewError::new(name, err))?;
        }
        Ok(Self { environment })
    }

    /// Renders `name` with `context` into HTML bytes.
    ///
    /// HTML templates escape interpolated values.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when the template is unknown or rendering fails.
    pub fn render<S: Serialize>(&self, name: &str, context: &S) -> Result<Vec<u8>, ViewError> {
        let template = self
            .environment
            .get_template(name)
            .map_err(|err| ViewError::new(name, err))?;
        let html = template
            .render(context)
            .map_err(|err| ViewError::new(name, err))?;
        Ok(html.into_bytes())
    }
}
