//! Sequencer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the [`AudioSequencer`](super::AudioSequencer).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SequencerConfig {
    /// Sample rate the synthesis pipeline is expected to deliver. Units
    /// arriving with a different rate are still played (resampling is the
    /// sink's concern) but logged, since a mismatch usually means the output
    /// voice changed without the session layer noticing.
    pub expected_sample_rate: Option<u32>,
}
