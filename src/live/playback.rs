use std::collections::BTreeMap;

use super::pcm::AudioBuffer;

/// Position of one buffer on the playback clock, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledBuffer {
    pub id: u64,
    pub start: f64,
    pub end: f64,
}

/// Gapless back-to-back scheduling of decoded audio.
///
/// The host owns the actual output device and reports the current clock
/// time; the queue only decides when each buffer starts.
#[derive(Debug, Default)]
pub struct PlaybackQueue {
    next_start: f64,
    next_id: u64,
    scheduled: BTreeMap<u64, ScheduledBuffer>,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `buffer` right after the previous one, or at `now` if the
    /// queue has drained.
    pub fn enqueue(&mut self, buffer: &AudioBuffer, now: f64) -> ScheduledBuffer {
        let start = self.next_start.max(now);
        let end = start + buffer.duration();
        self.next_start = end;

        let id = self.next_id;
        self.next_id += 1;
        let slot = ScheduledBuffer { id, start, end };
        self.scheduled.insert(id, slot);
        slot
    }

    /// Marks a buffer as played. Returns false for unknown ids.
    pub fn finish(&mut self, id: u64) -> bool {
        self.scheduled.remove(&id).is_some()
    }

    /// Drops every queued buffer and rewinds the cursor. Returns how many
    /// buffers were dropped.
    pub fn interrupt(&mut self) -> usize {
        let dropped = self.scheduled.len();
        self.scheduled.clear();
        self.next_start = 0.0;
        dropped
    }

    pub fn is_idle(&self) -> bool {
        self.scheduled.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }

    pub fn next_start(&self) -> f64 {
        self.next_start
    }

    pub fn scheduled(&self) -> impl Iterator<Item = &ScheduledBuffer> {
        self.scheduled.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::PLAYBACK_SAMPLE_RATE;

    fn half_second() -> AudioBuffer {
        AudioBuffer {
            samples: vec![0.0; 12_000],
            sample_rate: PLAYBACK_SAMPLE_RATE,
        }
    }

    #[test]
    fn buffers_play_back_to_back() {
        let mut queue = PlaybackQueue::new();
        let a = queue.enqueue(&half_second(), 1.0);
        let b = queue.enqueue(&half_second(), 1.1);

        assert_eq!((a.start, a.end), (1.0, 1.5));
        assert_eq!((b.start, b.end), (1.5, 2.0));
        assert_eq!(queue.next_start(), 2.0);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn drained_queue_starts_at_now() {
        let mut queue = PlaybackQueue::new();
        let a = queue.enqueue(&half_second(), 0.0);
        assert!(queue.finish(a.id));
        let b = queue.enqueue(&half_second(), 3.0);
        assert_eq!(b.start, 3.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn interrupt_clears_and_rewinds() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue(&half_second(), 2.0);
        queue.enqueue(&half_second(), 2.0);

        assert_eq!(queue.interrupt(), 2);
        assert!(queue.is_idle());
        assert_eq!(queue.next_start(), 0.0);
        assert_eq!(queue.scheduled().count(), 0);
    }

    #[test]
    fn finish_unknown_id_is_false() {
        let mut queue = PlaybackQueue::new();
        assert!(!queue.finish(42));
    }
}
