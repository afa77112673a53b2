//! Chat command layer for Nook.
//!
//! Parses prefixed chat messages, checks the author's role, runs the command
//! against a [`nook_core::Critterpedia`], and produces platform-neutral text
//! or embed replies. Any chat client can drive it through [`Bot::respond`].

pub mod auth;
pub mod bot;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod reply;
pub mod settings;

pub use auth::{AccessPolicy, Authorizer, Role};
pub use bot::Bot;
pub use command::Command;
pub use config::BotConfig;
pub use context::{MessageContext, ServerContext, ServerId, UserId};
pub use error::{BotError, BotResult};
pub use reply::{Embed, EmbedField, Reply};
pub use settings::{JsonSettings, MemorySettings, ServerEntry, SettingsStore};
