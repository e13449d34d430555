//! Two-mode chat front end over the Gemini generate-content API.
//!
//! A [`ResponseGenerator`] turns a prompt, a [`GenerationMode`] and prior turns
//! into a provider request and always answers with a [`GenerationResult`]:
//! provider failures become a friendly fallback reply whose failure kind is
//! still visible on the result. [`ConversationClient`] owns the transcript and
//! the single in-flight generation on top of it.
//!
//! ```no_run
//! use dualchat::{ConversationClient, GenerationMode, GeneratorBuilder};
//!
//! # async fn run() -> Result<(), dualchat::LLMError> {
//! let generator = GeneratorBuilder::new()
//!     .api_key(std::env::var("GEMINI_API_KEY").unwrap_or_default())
//!     .resilient(true)
//!     .build()?;
//! let client = ConversationClient::new(generator).with_mode(GenerationMode::Thinker);
//! client.set_input("What changed in Rust 2024?");
//! if let Some(reply) = client.submit().await {
//!     println!("{}", reply.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod builder;
pub mod chat;
pub mod conversation;
pub mod error;
pub mod generator;
pub mod live;
pub mod mode;
pub mod request;
pub mod resilient;
pub mod secret_store;

#[cfg(test)]
mod test_support;

pub use builder::GeneratorBuilder;
pub use conversation::{ConversationClient, Message, MessageRole};
pub use error::{ErrorKind, LLMError};
pub use generator::{GenerationResult, GenerationStatus, ResponseGenerator};
pub use mode::GenerationMode;
