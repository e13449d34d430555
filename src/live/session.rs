use std::fmt;
use std::sync::Arc;

use crate::mode::GenerationMode;

use super::pcm::{decode_pcm16, encode_pcm16, Blob};
use super::playback::{PlaybackQueue, ScheduledBuffer};

/// Persona and mode a session was opened with. Never mutated by the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveConfig {
    pub mode: GenerationMode,
    pub system_instruction: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveState {
    #[default]
    Idle,
    Connecting,
    Listening,
    Speaking,
}

impl fmt::Display for LiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiveState::Idle => "idle",
            LiveState::Connecting => "connecting",
            LiveState::Listening => "listening",
            LiveState::Speaking => "speaking",
        };
        f.write_str(name)
    }
}

/// Channel and playback events that drive a [`LiveSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiveEvent {
    Connect,
    ChannelOpen,
    /// Base64 PCM chunk from the model
    AudioChunk(String),
    /// The host finished playing a scheduled buffer
    PlaybackFinished(u64),
    /// The provider signalled that the user talked over the model
    Interrupted,
    Close,
    Error(String),
}

impl LiveEvent {
    fn name(&self) -> &'static str {
        match self {
            LiveEvent::Connect => "connect",
            LiveEvent::ChannelOpen => "channel_open",
            LiveEvent::AudioChunk(_) => "audio_chunk",
            LiveEvent::PlaybackFinished(_) => "playback_finished",
            LiveEvent::Interrupted => "interrupted",
            LiveEvent::Close => "close",
            LiveEvent::Error(_) => "error",
        }
    }
}

/// State machine for one bidirectional voice session.
#[derive(Debug)]
pub struct LiveSession {
    config: Arc<LiveConfig>,
    state: LiveState,
    playback: PlaybackQueue,
}

impl LiveSession {
    pub fn new(config: Arc<LiveConfig>) -> Self {
        Self {
            config,
            state: LiveState::Idle,
            playback: PlaybackQueue::new(),
        }
    }

    pub fn state(&self) -> LiveState {
        self.state
    }

    pub fn config(&self) -> &LiveConfig {
        &self.config
    }

    pub fn playback(&self) -> &PlaybackQueue {
        &self.playback
    }

    /// Applies `event` at playback clock time `now` and returns the new state.
    ///
    /// Events that make no sense in the current state are logged and ignored.
    pub fn handle(&mut self, event: LiveEvent, now: f64) -> LiveState {
        let next = match (self.state, event) {
            (LiveState::Idle, LiveEvent::Connect) => LiveState::Connecting,
            (LiveState::Connecting, LiveEvent::ChannelOpen) => LiveState::Listening,
            (LiveState::Listening | LiveState::Speaking, LiveEvent::AudioChunk(data)) => {
                match self.schedule_chunk(&data, now) {
                    Some(_) => LiveState::Speaking,
                    None => self.state,
                }
            }
            (LiveState::Speaking, LiveEvent::PlaybackFinished(id)) => {
                if !self.playback.finish(id) {
                    log::debug!("live: playback finished for unknown buffer {id}");
                }
                if self.playback.is_idle() {
                    LiveState::Listening
                } else {
                    LiveState::Speaking
                }
            }
            (LiveState::Listening | LiveState::Speaking, LiveEvent::Interrupted) => {
                let dropped = self.playback.interrupt();
                log::debug!("live: interrupted, dropped {dropped} queued buffers");
                LiveState::Listening
            }
            (_, LiveEvent::Close) => {
                self.playback.interrupt();
                LiveState::Idle
            }
            (_, LiveEvent::Error(message)) => {
                log::error!("live: session error in state {}: {message}", self.state);
                self.playback.interrupt();
                LiveState::Idle
            }
            (state, event) => {
                log::warn!("live: ignoring {} while {state}", event.name());
                state
            }
        };

        if next != self.state {
            log::debug!("live: {} -> {next}", self.state);
            self.state = next;
        }
        self.state
    }

    /// Encodes microphone samples for sending. `None` unless the channel is open.
    pub fn capture(&self, samples: &[f32]) -> Option<Blob> {
        match self.state {
            LiveState::Listening | LiveState::Speaking => Some(encode_pcm16(samples)),
            LiveState::Idle | LiveState::Connecting => None,
        }
    }

    fn schedule_chunk(&mut self, data: &str, now: f64) -> Option<ScheduledBuffer> {
        match decode_pcm16(data) {
            Ok(buffer) => Some(self.playback.enqueue(&buffer, now)),
            Err(err) => {
                log::warn!("live: dropping undecodable audio chunk: {err}");
                None
            }
        }
    }
}
