//! Task lifecycle management.
//!
//! Tasks are created with a description, an assignee and a deadline, can be
//! edited, marked done and deleted. Creation rejects deadlines that already
//! passed. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
