mod grounding;
mod message;
mod tool;
mod traits;
mod usage;

pub use grounding::GroundingChunk;
pub use message::{
    Attachment, ChatRole, ConversationTurn, Coordinates, HistoryEntry, HistoryRole, Part,
};
pub use tool::{FunctionCall, FunctionTool, ParameterProperty, ParametersSchema, Tool};
pub use traits::{ChatProvider, ChatResponse};
pub use usage::Usage;
