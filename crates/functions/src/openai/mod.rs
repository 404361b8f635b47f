//! `OpenAI` Chat Completions integration.
//!
//! Single-turn, non-streaming, fixed low temperature.

mod client;
mod error;
mod types;

pub use client::{OpenAiClient, TEMPERATURE};
pub use error::OpenAiError;
pub use types::{ChatCompletion, ChatMessage, Usage};
