//! AI Scrum Master Core - Shared data model.
//!
//! This crate provides the types exchanged across the workspace:
//! - `client` - Typed resource clients for the `/api/v1` backend
//! - `functions` - Slack, Jira and `OpenAI` integration functions
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. Entities are created and mutated on the external backend; this
//! crate only describes their wire shape.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and status enums
//! - [`models`] - Entity, AI and analytics records
//! - [`standup_parser`] - Free-text standup message parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod standup_parser;
pub mod types;

pub use models::*;
pub use standup_parser::{ParsedStandup, parse_standup_message};
pub use types::*;
