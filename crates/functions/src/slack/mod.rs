//! Slack Web API integration.
//!
//! This module provides:
//! - [`SlackClient`] for the handful of Web API methods the functions use
//! - [`post_to_channel`], which resolves a channel name, posts, and joins
//!   and retries once when the bot is not a member

mod client;
mod error;
mod post;
mod types;

pub use client::SlackClient;
pub use error::SlackError;
pub use post::{NOT_IN_CHANNEL, PostOutcome, is_channel_id, post_to_channel, resolve_channel};
pub use types::{AuthTestResponse, Channel, PostMessageRequest, PostMessageResponse};
