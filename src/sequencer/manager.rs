//! The audio playback sequencer.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::config::SequencerConfig;
use super::sink::{DrainCallback, PlaybackError, PlaybackSink};
use super::state::{SequencerCounters, SequencerState, SequencerStats};
use super::unit::{AudioUnit, PlaybackState};

/// Command computed under the state lock, issued to the sink after release.
enum SinkCommand {
    Start(Arc<AudioUnit>),
    Stop,
    None,
}

/// Ordered playback sequencer for streamed synthesized-speech buffers.
///
/// All state lives behind a single coarse mutex so each of the three event
/// operations is one atomic transition; the sink is only awaited after the
/// lock is released. The operations never fail: stale or out-of-order input
/// is an expected steady-state condition in a streaming pipeline and is
/// dropped by policy, not reported as an error.
///
/// Event sources are expected to be serialized by the host (a single event
/// loop or actor); the mutex makes the sequencer safe regardless.
pub struct AudioSequencer {
    state: Mutex<SequencerState>,
    counters: SequencerCounters,
    config: SequencerConfig,
    sink: Arc<dyn PlaybackSink>,
    drain_callback: Mutex<Option<DrainCallback>>,
}

impl AudioSequencer {
    /// Create a sequencer that issues playback commands to `sink`.
    pub fn new(config: SequencerConfig, sink: Arc<dyn PlaybackSink>) -> Self {
        Self {
            state: Mutex::new(SequencerState::new()),
            counters: SequencerCounters::default(),
            config,
            sink,
            drain_callback: Mutex::new(None),
        }
    }

    /// Register a callback fired when the queue drains to empty after the
    /// last queued unit finishes naturally.
    ///
    /// # Example
    /// ```rust,ignore
    /// sequencer.on_drain(|| {
    ///     Box::pin(async move {
    ///         println!("turn fully played out");
    ///     })
    /// });
    /// ```
    pub fn on_drain<F>(&self, callback: F)
    where
        F: Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync + 'static,
    {
        *self.drain_callback.lock() = Some(Arc::new(callback));
    }

    /// A new logical turn is starting: the user re-engaged the microphone or
    /// the server signaled a fresh exchange.
    ///
    /// Increments the current turn id, drops every queued unit left over from
    /// the prior turn, and stops in-flight playback. A unit abandoned
    /// mid-playback is discarded, never resumed. Safe to call with nothing
    /// playing: only the turn id advances and no stop is issued.
    pub async fn on_turn_boundary(&self) {
        let command = {
            let mut state = self.state.lock();
            state.current_turn_id += 1;
            let evicted = state.evict_stale();
            if evicted > 0 {
                debug!(
                    evicted,
                    turn_id = state.current_turn_id,
                    "dropped queued audio from prior turn"
                );
            }
            info!(turn_id = state.current_turn_id, "turn boundary");

            if state.playback_state == PlaybackState::Playing {
                state.playback_state = PlaybackState::Idle;
                state.now_playing = None;
                SinkCommand::Stop
            } else {
                SinkCommand::None
            }
        };
        self.counters.boundaries.fetch_add(1, Ordering::Relaxed);
        self.dispatch(command).await;
    }

    /// A decoded buffer arrived from the synthesis pipeline.
    ///
    /// Callers guarantee `unit.turn_id >= 0`. A unit from a turn older than
    /// the current one is dropped on the spot: a late buffer from an
    /// abandoned turn arriving after the boundary is normal network
    /// reordering, not a fault. Otherwise the unit plays immediately when
    /// idle, or queues behind the unit currently sounding.
    pub async fn on_unit_arrived(&self, unit: AudioUnit) {
        debug_assert!(unit.turn_id >= 0, "caller guarantees a non-negative turn id");

        let unit = Arc::new(unit);
        let command = {
            let mut state = self.state.lock();
            if unit.turn_id < state.current_turn_id {
                self.counters.stale_dropped.fetch_add(1, Ordering::Relaxed);
                debug!(
                    unit_turn = unit.turn_id,
                    current_turn = state.current_turn_id,
                    "dropped stale unit from abandoned turn"
                );
                return;
            }

            if let Some(expected) = self.config.expected_sample_rate {
                if unit.sample_rate != expected {
                    debug!(
                        expected,
                        actual = unit.sample_rate,
                        "unit sample rate differs from configured pipeline rate"
                    );
                }
            }

            match state.playback_state {
                PlaybackState::Idle => {
                    state.playback_state = PlaybackState::Playing;
                    state.now_playing = Some(unit.clone());
                    SinkCommand::Start(unit)
                }
                PlaybackState::Playing => {
                    self.counters.units_queued.fetch_add(1, Ordering::Relaxed);
                    debug!(
                        unit_turn = unit.turn_id,
                        queue_len = state.queue.len() + 1,
                        "queued unit behind in-flight playback"
                    );
                    state.queue.push_back(unit);
                    SinkCommand::None
                }
            }
        };
        self.dispatch(command).await;
    }

    /// The unit that was sounding finished naturally.
    ///
    /// Raised by the sink exactly once per started unit, never for units
    /// aborted via [`on_turn_boundary`](Self::on_turn_boundary). Pops and
    /// plays the next queued unit, or, when the queue is empty, goes idle and
    /// advances the turn id by one: the turn is fully drained and no more
    /// audio is expected for it.
    pub async fn on_playback_finished(&self) {
        let (command, drained) = {
            let mut state = self.state.lock();
            match state.queue.pop_front() {
                Some(next) => {
                    state.now_playing = Some(next.clone());
                    (SinkCommand::Start(next), false)
                }
                None => {
                    state.playback_state = PlaybackState::Idle;
                    state.now_playing = None;
                    state.current_turn_id += 1;
                    info!(turn_id = state.current_turn_id, "playback queue drained");
                    (SinkCommand::None, true)
                }
            }
        };
        self.dispatch(command).await;

        if drained {
            self.counters.drains.fetch_add(1, Ordering::Relaxed);
            let callback = self.drain_callback.lock().clone();
            if let Some(callback) = callback {
                callback().await;
            }
        }
    }

    /// The host failed to render the unit that was sounding.
    ///
    /// Treated exactly like a natural finish: log and advance. No replay.
    pub async fn on_playback_error(&self, error: PlaybackError) {
        warn!(%error, "host playback failed, advancing as a natural finish");
        self.on_playback_finished().await;
    }

    /// Id of the currently active turn (`-1` before any turn has started).
    pub fn current_turn_id(&self) -> i64 {
        self.state.lock().current_turn_id
    }

    /// Current playback state.
    pub fn playback_state(&self) -> PlaybackState {
        self.state.lock().playback_state
    }

    /// Number of units waiting behind the one currently sounding.
    pub fn queue_len(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// The unit currently sounding, if any.
    pub fn now_playing(&self) -> Option<Arc<AudioUnit>> {
        self.state.lock().now_playing.clone()
    }

    /// Snapshot of activity counters.
    pub fn stats(&self) -> SequencerStats {
        self.counters.snapshot()
    }

    /// Configuration the sequencer was created with.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    async fn dispatch(&self, command: SinkCommand) {
        match command {
            SinkCommand::Start(unit) => {
                self.counters.units_played.fetch_add(1, Ordering::Relaxed);
                debug!(
                    unit_turn = unit.turn_id,
                    duration_ms = unit.duration_ms(),
                    "starting playback"
                );
                self.sink.start_playback(unit).await;
            }
            SinkCommand::Stop => {
                debug!("stopping in-flight playback");
                self.sink.stop_playback().await;
            }
            SinkCommand::None => {}
        }
    }
}
