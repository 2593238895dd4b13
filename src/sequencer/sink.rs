//! Collaborator interfaces toward the host audio subsystem.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::unit::AudioUnit;

/// Error reported by the host audio subsystem while rendering a buffer.
///
/// The sequencer treats a reported error like a natural finish and advances
/// to the next queued unit; no replay is attempted.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaybackError {
    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("buffer rendering failed: {0}")]
    RenderFailed(String),

    #[error("playback error: {0}")]
    Other(String),
}

/// Host audio-rendering collaborator.
///
/// `start_playback` must begin sounding the buffer and arrange for
/// [`AudioSequencer::on_playback_finished`] to be raised exactly once when the
/// sound naturally ends (or [`AudioSequencer::on_playback_error`] on host
/// failure). `stop_playback` must silence whatever is sounding immediately;
/// no finish notification follows a stop.
///
/// Both methods are expected to return as soon as the command is accepted;
/// rendering itself happens asynchronously in the host.
///
/// [`AudioSequencer::on_playback_finished`]: super::AudioSequencer::on_playback_finished
/// [`AudioSequencer::on_playback_error`]: super::AudioSequencer::on_playback_error
pub trait PlaybackSink: Send + Sync {
    /// Begin sounding a buffer.
    fn start_playback(
        &self,
        unit: Arc<AudioUnit>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;

    /// Silence whatever is sounding, immediately.
    fn stop_playback(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Callback fired when the playback queue drains to empty after the last
/// queued unit finishes. The session layer uses this to re-enable microphone
/// streaming for the next turn.
pub type DrainCallback = Arc<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;
