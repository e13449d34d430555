//! Live voice session: PCM framing, playback scheduling and the session
//! state machine.
//!
//! The session is independent of [`crate::conversation`]; it only reads the
//! persona and mode it was opened with. Transport is left to the host, which
//! feeds channel events into [`LiveSession::handle`].

#[path = "live/pcm.rs"]
mod pcm;

#[path = "live/playback.rs"]
mod playback;

#[path = "live/session.rs"]
mod session;

pub use pcm::{
    decode_pcm16, encode_pcm16, AudioBuffer, Blob, CAPTURE_MIME_TYPE, CAPTURE_SAMPLE_RATE,
    PLAYBACK_SAMPLE_RATE,
};
pub use playback::{PlaybackQueue, ScheduledBuffer};
pub use session::{LiveConfig, LiveEvent, LiveSession, LiveState};
