// SPDX-License-Identifier: MPL-2.0
//! Events emitted by a running sequence.
//!
//! The stream is diagnostic: hosts may subscribe to drive progress UI or
//! logging, and tests use it to observe state transitions. Nothing in the
//! sequence depends on the events being consumed.

use tokio::sync::mpsc;

/// How a sequence invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOutcome {
    /// All steps ran to completion.
    Completed,

    /// Cancelled through the handle (close control or Escape).
    Cancelled,

    /// A video playback rejection terminated the sequence early.
    Aborted,
}

/// Messages emitted by the sequencer while it runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SequencerEvent {
    /// The sequence began: overlay opened, music ducked.
    SequenceStarted,

    /// A step's media was assigned and its choreography began.
    StepStarted { index: usize },

    /// A step finished its fade-out and paused its media.
    StepFinished { index: usize },

    /// Media readiness wait expired; the step proceeded best-effort.
    ReadinessTimedOut { index: usize },

    /// Audio playback was rejected; the step continues without sound.
    AudioDegraded { index: usize, message: String },

    /// Video playback was rejected; the sequence aborts.
    VideoFailed { index: usize, message: String },

    /// Teardown completed and the sequencer returned to idle.
    SequenceEnded(SequenceOutcome),
}

/// Sender half used by the sequencer.
pub(crate) type EventSender = mpsc::UnboundedSender<SequencerEvent>;

/// Receiver half handed to the subscribing host.
pub type EventReceiver = mpsc::UnboundedReceiver<SequencerEvent>;
