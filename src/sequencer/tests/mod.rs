//! Sequencer behavior tests.

mod helpers;
