//! Records exchanged with the backend and the integration functions.
//!
//! Entities carry no invariants beyond their shape; relationships are
//! expressed only through the typed IDs in [`crate::types::id`].

pub mod agents;
pub mod ai;
pub mod analytics;
pub mod backlog;
pub mod jira;
pub mod project;
pub mod sprint;
pub mod standup;
pub mod team;

pub use agents::*;
pub use ai::*;
pub use analytics::*;
pub use backlog::*;
pub use jira::*;
pub use project::*;
pub use sprint::*;
pub use standup::*;
pub use team::*;
