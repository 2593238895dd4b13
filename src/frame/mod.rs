//! Binary synthesized-audio frame decoding.
//!
//! The synthesis server ships each audio chunk as one binary WebSocket
//! message: the whole payload is little-endian `f32` sample amplitudes, and
//! the owning turn id is carried as a single byte at a fixed offset inside
//! the first sample word. The upstream pipeline never split that header out
//! of band, so the decoder preserves the same offset semantics: the id byte
//! is read in place and the full payload is still decoded as audio.

use bytes::{Buf, Bytes};
use serde::{Deserialize, Serialize};

use crate::sequencer::AudioUnit;

/// Byte offset of the turn id within the frame payload.
const TURN_ID_OFFSET: usize = 3;

/// Bytes per sample word.
const SAMPLE_WIDTH: usize = 4;

/// Decoder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrameConfig {
    /// Sample rate of decoded audio in Hz. The upstream pipeline synthesizes
    /// English voices at 24 kHz and switches to 40 kHz for other output
    /// languages, so the session layer sets this per voice.
    pub sample_rate: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            sample_rate: 24_000,
        }
    }
}

/// Errors for malformed frame payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("frame too short: {0} bytes, need at least 4")]
    TooShort(usize),

    #[error("frame length {0} is not a multiple of 4")]
    RaggedLength(usize),
}

/// Decode one binary frame payload into an [`AudioUnit`].
pub fn decode_frame(payload: &Bytes, config: &FrameConfig) -> Result<AudioUnit, FrameError> {
    if payload.len() < SAMPLE_WIDTH {
        return Err(FrameError::TooShort(payload.len()));
    }
    if payload.len() % SAMPLE_WIDTH != 0 {
        return Err(FrameError::RaggedLength(payload.len()));
    }

    let turn_id = i64::from(payload[TURN_ID_OFFSET]);

    let mut samples = Vec::with_capacity(payload.len() / SAMPLE_WIDTH);
    let mut buf = payload.clone();
    while buf.remaining() >= SAMPLE_WIDTH {
        samples.push(buf.get_f32_le());
    }

    Ok(AudioUnit::new(turn_id, samples, config.sample_rate))
}
