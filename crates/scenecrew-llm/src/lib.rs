//! OpenAI chat-completion client and scene breakdown generation.
//!
//! This crate owns everything between a topic string and a structured
//! [`SceneBreakdown`](scenecrew_models::SceneBreakdown):
//! - the HTTP client for the chat-completion API
//! - prompt construction
//! - the line-oriented parser for the model's freeform output
//!
//! The client is passed explicitly into [`generate_scene_breakdown`] so
//! front ends and tests can substitute their own instance.

pub mod client;
pub mod error;
pub mod generate;
pub mod parse;
pub mod prompt;

pub use client::{ChatCompletionRequest, ChatMessage, OpenAiClient};
pub use error::{LlmError, LlmResult};
pub use generate::generate_scene_breakdown;
pub use parse::parse_scenes;
