//! # playback-sequencer
//!
//! Ordered playback sequencer for streamed synthesized-speech audio.
//!
//! In a real-time speech-to-text-to-LLM-to-speech pipeline, synthesized audio
//! arrives as discrete buffers tagged with a conversational turn id, possibly
//! after the user has already interrupted and started a new turn. The
//! [`AudioSequencer`] owns the queue of pending buffers: it decides whether a
//! newly arrived buffer plays immediately or queues behind the one currently
//! sounding, drops buffers from abandoned turns, stops in-flight playback on
//! a turn boundary, and advances gaplessly as buffers finish.
//!
//! Actual sound rendering is delegated to a host-provided [`PlaybackSink`];
//! the sequencer only issues start/stop commands and reacts to finish
//! notifications raised back by the host.

pub mod frame;
pub mod sequencer;

// Re-export commonly used items for convenience
pub use frame::{FrameConfig, FrameError, decode_frame};
pub use sequencer::{
    AudioSequencer, AudioUnit, PlaybackError, PlaybackSink, PlaybackState, SequencerConfig,
    SequencerStats,
};
