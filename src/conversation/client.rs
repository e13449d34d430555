use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::chat::{Attachment, Coordinates, HistoryEntry};
use crate::generator::ResponseGenerator;
use crate::mode::GenerationMode;

use super::message::Message;

#[derive(Debug, Default)]
struct ClientState {
    messages: Vec<Message>,
    input: String,
    mode: GenerationMode,
    location: Option<Coordinates>,
    attachments: Vec<Attachment>,
}

struct PendingTurn {
    prompt: String,
    history: Vec<HistoryEntry>,
    mode: GenerationMode,
    location: Option<Coordinates>,
    attachments: Vec<Attachment>,
}

/// Clears the in-flight flag when a submission ends, however it ends.
struct GeneratingGuard<'a>(&'a AtomicBool);

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Transcript, input buffer and in-flight guard for one chat.
///
/// All methods take `&self`; the state lock is never held across the
/// provider call, so the input can be edited while a reply is pending.
/// At most one generation is in flight per client.
#[derive(Debug)]
pub struct ConversationClient {
    generator: ResponseGenerator,
    state: Mutex<ClientState>,
    generating: AtomicBool,
}

impl ConversationClient {
    pub fn new(generator: ResponseGenerator) -> Self {
        Self {
            generator,
            state: Mutex::new(ClientState::default()),
            generating: AtomicBool::new(false),
        }
    }

    pub fn with_mode(self, mode: GenerationMode) -> Self {
        self.state.lock().mode = mode;
        self
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().messages.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn input(&self) -> String {
        self.state.lock().input.clone()
    }

    pub fn set_input(&self, input: impl Into<String>) {
        self.state.lock().input = input.into();
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    pub fn mode(&self) -> GenerationMode {
        self.state.lock().mode
    }

    /// Affects only the next request; history is untouched.
    pub fn set_mode(&self, mode: GenerationMode) {
        self.state.lock().mode = mode;
    }

    pub fn set_location(&self, location: Option<Coordinates>) {
        self.state.lock().location = location;
    }

    /// Queues a file to go out with the next submission.
    pub fn attach(&self, attachment: Attachment) {
        self.state.lock().attachments.push(attachment);
    }

    pub fn pending_attachments(&self) -> usize {
        self.state.lock().attachments.len()
    }

    /// Starts a new conversation. An in-flight generation is not cancelled;
    /// its reply lands in the fresh transcript.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.messages.clear();
        state.attachments.clear();
        log::debug!("conversation reset (generating={})", self.is_generating());
    }

    /// Sends the input buffer and appends the reply.
    ///
    /// Returns `None` without side effects when the trimmed input is empty or
    /// a generation is already in flight.
    pub async fn submit(&self) -> Option<Message> {
        let (pending, _guard) = self.begin_turn()?;

        let result = self
            .generator
            .generate(
                &pending.prompt,
                pending.mode,
                &pending.history,
                pending.location,
                &pending.attachments,
            )
            .await;
        if let Some(kind) = result.error_kind() {
            log::warn!("assistant turn replaced by fallback ({kind})");
        }

        let reply = Message::assistant(result, pending.mode);
        self.state.lock().messages.push(reply.clone());
        Some(reply)
    }

    fn begin_turn(&self) -> Option<(PendingTurn, GeneratingGuard<'_>)> {
        let mut state = self.state.lock();
        let prompt = state.input.trim().to_string();
        if prompt.is_empty() {
            return None;
        }
        if self
            .generating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("submit ignored: generation in flight");
            return None;
        }
        let guard = GeneratingGuard(&self.generating);

        let history = state.messages.iter().map(Message::to_history).collect();
        let attachments = std::mem::take(&mut state.attachments);
        let mime_types = attachments.iter().map(|a| a.mime_type.clone()).collect();
        state.messages.push(Message::user(prompt.clone(), mime_types));
        state.input.clear();

        Some((
            PendingTurn {
                prompt,
                history,
                mode: state.mode,
                location: state.location,
                attachments,
            },
            guard,
        ))
    }
}
