//! Core types for the Scrum Master data model.
//!
//! This module provides type-safe wrappers for identifiers and the
//! enumerated status fields used by every entity.

pub mod id;
pub mod status;

pub use id::*;
pub use status::*;
