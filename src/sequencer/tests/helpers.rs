//! Shared test helpers for sequencer tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::sequencer::{
    AudioSequencer, AudioUnit, PlaybackSink, SequencerConfig,
};

/// One command the sequencer issued to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Start { turn_id: i64 },
    Stop,
}

/// Playback sink stub that records every command it receives.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    pub fn starts(&self) -> Vec<i64> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Start { turn_id } => Some(*turn_id),
                SinkEvent::Stop => None,
            })
            .collect()
    }

    pub fn stop_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, SinkEvent::Stop))
            .count()
    }
}

impl PlaybackSink for RecordingSink {
    fn start_playback(
        &self,
        unit: Arc<AudioUnit>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.events.lock().push(SinkEvent::Start {
            turn_id: unit.turn_id,
        });
        Box::pin(async {})
    }

    fn stop_playback(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.events.lock().push(SinkEvent::Stop);
        Box::pin(async {})
    }
}

/// Creates a sequencer wired to a recording sink.
pub fn recording_sequencer() -> (AudioSequencer, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let sequencer = AudioSequencer::new(SequencerConfig::default(), sink.clone());
    (sequencer, sink)
}

/// Creates a short unit belonging to `turn_id`.
pub fn unit(turn_id: i64) -> AudioUnit {
    AudioUnit::new(turn_id, vec![0.0; 480], 24_000)
}
