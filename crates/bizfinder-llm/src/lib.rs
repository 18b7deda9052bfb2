//! Completion side of the business finder: the prompt sent to the model,
//! the chat-completion client, and the parser that turns the model's
//! free-text reply into [`BusinessRecord`](bizfinder_core::BusinessRecord)s.

pub mod client;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod types;

pub use client::{CompletionClient, CompletionSettings};
pub use error::LlmError;
pub use extract::{extract, RecordExtractor};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
