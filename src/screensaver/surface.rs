// SPDX-License-Identifier: MPL-2.0
//! Playback surface traits: the seam between the sequencer and the host's
//! media elements.
//!
//! The sequencer exclusively owns one video-capable surface and one
//! audio-only surface for a sequence's lifetime. It sets sources, triggers
//! loads, starts playback, and drives opacity/volume; the host implements
//! these operations against whatever media backend it has. Readiness
//! signals are futures that may never resolve — the sequencer always races
//! them against a bounded timeout.
//!
//! `play()` is fallible by design: hosts may refuse playback that is not
//! user-initiated. A video rejection aborts the sequence; an audio
//! rejection degrades the step to visual-only.

use std::future::Future;
use std::time::Duration;

use super::opacity::Opacity;
use super::volume::Volume;
use crate::error::PlaybackError;

/// Video-capable playback surface.
pub trait VideoSurface {
    /// Assigns a new media source. Does not begin loading.
    fn set_source(&mut self, source: &str);

    /// Removes the current source so no stale frame remains.
    fn clear_source(&mut self);

    /// (Re)loads the current source.
    fn load(&mut self);

    /// Starts playback. May be rejected by the host.
    fn play(&mut self) -> impl Future<Output = Result<(), PlaybackError>> + Send;

    fn pause(&mut self);

    fn set_opacity(&mut self, opacity: Opacity);

    /// Mutes or unmutes the surface's own audio track. The sequencer
    /// always plays video muted; the paired audio surface carries sound.
    fn set_muted(&mut self, muted: bool);

    /// Seeks to the given position. Only called when `duration` is known.
    fn seek(&mut self, position: Duration);

    /// Reported media duration, if metadata is loaded and the value is
    /// finite and positive.
    fn duration(&self) -> Option<Duration>;

    /// Resolves once media metadata is available. May never resolve.
    fn await_metadata(&mut self) -> impl Future<Output = ()> + Send;

    /// Resolves once the first frame has been presented. May never
    /// resolve.
    fn await_first_frame(&mut self) -> impl Future<Output = ()> + Send;
}

/// Audio-only playback surface.
pub trait AudioSurface {
    fn set_source(&mut self, source: &str);

    fn clear_source(&mut self);

    fn load(&mut self);

    /// Rewinds to the start of the track.
    fn rewind(&mut self);

    /// Starts playback. May be rejected by the host.
    fn play(&mut self) -> impl Future<Output = Result<(), PlaybackError>> + Send;

    fn pause(&mut self);

    fn set_volume(&mut self, volume: Volume);

    /// Current volume, as last applied.
    fn volume(&self) -> Volume;

    /// Resolves once enough audio is buffered to play. May never resolve.
    fn await_ready(&mut self) -> impl Future<Output = ()> + Send;
}
