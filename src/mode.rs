#[path = "mode/kind.rs"]
mod kind;

#[path = "mode/table.rs"]
mod table;

pub use kind::{GenerationMode, ModelTier, ParseModeError};
pub use table::{ModeProfile, ModeTable};
