//! HTTP surface: a thin dispatch table over the task service and the
//! template views it renders.

mod error;
mod routes;
mod views;

pub use error::WebError;
pub use routes::{AppState, router};
pub use views::{CREATE_TEMPLATE, EDIT_TEMPLATE, INDEX_TEMPLATE, ViewError, Views};
