// SPDX-License-Identifier: MPL-2.0
//! Screensaver subsystem: the hidden full-screen media sequence.
//!
//! Triggered from an easter-egg control, the screensaver plays an ordered
//! playlist of video/audio pairings inside a modal overlay, each step with
//! its own fade choreography, then restores everything it touched. The
//! subsystem is organized as:
//!
//! - [`step`] — playlist data: [`SequenceStep`] and the shipped
//!   [`default_playlist`]
//! - [`surface`] — the traits a host implements over its media backend
//! - [`sequencer`] — the orchestration itself
//! - [`fade`], [`timing`] — the interpolation and hold math the sequencer
//!   is built from
//! - [`state`], [`events`] — the cancellation handle and the diagnostic
//!   event stream
//! - [`volume`], [`opacity`] — clamped level newtypes shared with the
//!   rest of the crate

pub mod events;
pub mod fade;
pub mod opacity;
pub mod sequencer;
pub mod state;
pub mod step;
pub mod surface;
pub mod timing;
pub mod volume;

pub use events::{EventReceiver, SequenceOutcome, SequencerEvent};
pub use opacity::Opacity;
pub use sequencer::Sequencer;
pub use state::SequencerHandle;
pub use step::{default_playlist, SequenceStep};
pub use surface::{AudioSurface, VideoSurface};
pub use volume::Volume;
