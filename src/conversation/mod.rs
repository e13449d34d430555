mod client;
mod id;
mod message;

pub use client::ConversationClient;
pub use id::MessageId;
pub use message::{Message, MessageRole};
