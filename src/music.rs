// SPDX-License-Identifier: MPL-2.0
//! Ambient music channel: the single background track that plays under
//! the presentation.
//!
//! The channel is host-owned; this module defines the control seam plus
//! the two behaviors layered on top of it:
//!
//! - a play/pause toggle that tolerates autoplay-policy rejections and
//!   keeps the reported state consistent with what actually happened
//! - [`MusicSnapshot`], the save/restore pair the screensaver sequencer
//!   uses when it borrows the channel (duck on start, un-duck on teardown)

use std::future::Future;

use crate::error::PlaybackError;
use crate::screensaver::Volume;

/// Control surface of the background music channel.
///
/// `play()` may be rejected when playback is not user-initiated; callers
/// treat that as "still paused", never as a hard failure.
pub trait MusicChannel {
    fn is_playing(&self) -> bool;

    fn volume(&self) -> Volume;

    fn set_volume(&mut self, volume: Volume);

    fn pause(&mut self);

    fn play(&mut self) -> impl Future<Output = Result<(), PlaybackError>> + Send;
}

/// Toggles the channel between playing and paused.
///
/// Returns the resulting playing state. A rejected `play()` leaves the
/// channel paused and is reported to the developer log only.
pub async fn toggle<M: MusicChannel>(channel: &mut M) -> bool {
    if channel.is_playing() {
        channel.pause();
        return false;
    }

    match channel.play().await {
        Ok(()) => true,
        Err(err) => {
            eprintln!("Music toggle blocked by playback policy: {err}");
            false
        }
    }
}

/// Captured music state, restored after the channel is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusicSnapshot {
    was_playing: bool,
    volume: Volume,
}

impl MusicSnapshot {
    /// Captures the channel's current playing flag and volume.
    #[must_use]
    pub fn capture<M: MusicChannel>(channel: &M) -> Self {
        Self {
            was_playing: channel.is_playing(),
            volume: channel.volume(),
        }
    }

    #[must_use]
    pub fn was_playing(&self) -> bool {
        self.was_playing
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Restores the captured state: prior volume first, then playback if
    /// the channel had been playing. A rejected resume leaves the channel
    /// paused at the restored volume.
    pub async fn restore<M: MusicChannel>(self, channel: &mut M) {
        channel.set_volume(self.volume);
        if self.was_playing {
            if let Err(err) = channel.play().await {
                eprintln!("Music resume blocked by playback policy: {err}");
            }
        }
    }
}
