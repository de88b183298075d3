//! Taskboard: a minimal task-tracking web application.
//!
//! Tasks carry a description, an assignee, a calendar-date deadline and a
//! completion flag. They are listed, created, edited, marked done and deleted
//! through a small HTML interface backed by a `PostgreSQL` table.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, validation, formatting and persistence
//! - [`web`]: HTTP dispatch table and template views
//! - [`config`]: Layered server configuration
//! - [`app`]: Process bootstrap and shutdown

pub mod app;
pub mod config;
pub mod task;
pub mod web;
