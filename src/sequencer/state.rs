//! Internal state for the audio sequencer.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::unit::{AudioUnit, PlaybackState};

/// Whole sequencer state, guarded by a single mutex in the manager so every
/// transition is atomic with respect to the others.
pub(super) struct SequencerState {
    /// Id of the currently active turn. Starts at the `-1` sentinel meaning
    /// "no turn yet"; monotonically non-decreasing afterwards.
    pub current_turn_id: i64,
    /// Whether a unit is currently sounding.
    pub playback_state: PlaybackState,
    /// Units waiting to be played, FIFO. Never holds a unit whose turn is
    /// older than `current_turn_id`.
    pub queue: VecDeque<Arc<AudioUnit>>,
    /// The unit currently sounding, if any.
    pub now_playing: Option<Arc<AudioUnit>>,
}

impl SequencerState {
    pub fn new() -> Self {
        Self {
            current_turn_id: -1,
            playback_state: PlaybackState::Idle,
            queue: VecDeque::new(),
            now_playing: None,
        }
    }

    /// Drop queued units not belonging to the current turn. Returns how many
    /// were evicted.
    pub fn evict_stale(&mut self) -> usize {
        let before = self.queue.len();
        let turn = self.current_turn_id;
        self.queue.retain(|unit| unit.turn_id == turn);
        before - self.queue.len()
    }
}

/// Lock-free counters for sequencer activity, readable without taking the
/// state mutex.
#[derive(Default)]
pub(super) struct SequencerCounters {
    pub units_played: AtomicU64,
    pub units_queued: AtomicU64,
    pub stale_dropped: AtomicU64,
    pub boundaries: AtomicU64,
    pub drains: AtomicU64,
}

impl SequencerCounters {
    pub fn snapshot(&self) -> SequencerStats {
        SequencerStats {
            units_played: self.units_played.load(Ordering::Relaxed),
            units_queued: self.units_queued.load(Ordering::Relaxed),
            stale_dropped: self.stale_dropped.load(Ordering::Relaxed),
            boundaries: self.boundaries.load(Ordering::Relaxed),
            drains: self.drains.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of sequencer activity counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SequencerStats {
    /// Units handed to the sink for playback.
    pub units_played: u64,
    /// Units appended to the queue behind an in-flight unit.
    pub units_queued: u64,
    /// Stale units dropped on arrival.
    pub stale_dropped: u64,
    /// Explicit turn boundaries observed.
    pub boundaries: u64,
    /// Times the queue drained to empty after the last unit finished.
    pub drains: u64,
}
