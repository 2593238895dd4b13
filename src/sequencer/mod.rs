//! # Audio Sequencer
//!
//! Ordered playback of streamed synthesized-speech buffers across
//! conversational turns.
//!
//! This module provides [`AudioSequencer`], the state machine that decides
//! whether a newly arrived buffer plays now or queues, drops buffers from
//! abandoned turns, and advances playback as buffers finish. Sound rendering
//! itself is delegated to a host-provided [`PlaybackSink`].
//!
//! Event flow:
//! - [`AudioSequencer::on_unit_arrived`] when the network layer decodes a
//!   synthesized buffer;
//! - [`AudioSequencer::on_turn_boundary`] when the user interrupts or the
//!   server signals a new exchange;
//! - [`AudioSequencer::on_playback_finished`] when the sink reports a buffer
//!   naturally ended.

pub mod config;
pub mod manager;
pub mod sink;
pub mod state;
pub mod unit;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use config::SequencerConfig;
pub use manager::AudioSequencer;
pub use sink::{DrainCallback, PlaybackError, PlaybackSink};
pub use state::SequencerStats;
pub use unit::{AudioUnit, PlaybackState};
