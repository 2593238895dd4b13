//! Data model for sequenced playback.

/// One decoded, ready-to-play synthesized-speech buffer tagged with the
/// conversational turn that produced it. Immutable once constructed; the
/// sequencer owns it from arrival until it is played or discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioUnit {
    /// Turn that produced this buffer. Non-negative for real units; the
    /// sequencer itself uses `-1` only as its "no turn yet" sentinel.
    pub turn_id: i64,
    /// Mono sample amplitudes.
    pub samples: Vec<f32>,
    /// Sample rate of `samples` in Hz.
    pub sample_rate: u32,
}

impl AudioUnit {
    pub fn new(turn_id: i64, samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            turn_id,
            samples,
            sample_rate,
        }
    }

    /// Duration of the buffer in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / u64::from(self.sample_rate)
    }
}

/// Playback side of the sequencer state machine.
///
/// `Idle` means no unit is sounding. `Playing` means exactly one unit is
/// sounding, referenced by the sequencer's `now_playing` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_ms() {
        let unit = AudioUnit::new(0, vec![0.0; 24_000], 24_000);
        assert_eq!(unit.duration_ms(), 1000);

        let half = AudioUnit::new(0, vec![0.0; 12_000], 24_000);
        assert_eq!(half.duration_ms(), 500);
    }

    #[test]
    fn test_duration_ms_zero_rate() {
        let unit = AudioUnit::new(0, vec![0.0; 100], 0);
        assert_eq!(unit.duration_ms(), 0);
    }
}
