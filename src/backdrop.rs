// SPDX-License-Identifier: MPL-2.0
//! Backdrop slideshow: two stacked image slots crossfaded with a brief
//! white flash, like a slide projector changing frames.
//!
//! The backdrop plays its image list once. Each transition holds the
//! current image, stages the next one in the hidden slot, then fades the
//! slots across each other while the flash layer spikes and decays. The
//! final image stays up for good; [`Backdrop::run`] returns and the host
//! keeps rendering the last state.
//!
//! A stopped backdrop simply freezes mid-state. There is nothing to
//! restore, so stopping is just clearing the shared flag.

use crate::config::defaults::{
    BACKDROP_FADE, BACKDROP_FLASH, BACKDROP_FLASH_LEVEL, BACKDROP_HOLD,
};
use crate::screensaver::fade::fade;
use crate::screensaver::state::RunFlag;
use crate::screensaver::Opacity;
use tokio::time::sleep;

/// One of the two stacked image layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// The opposite slot.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Rendering seam for the backdrop layers.
pub trait BackdropSurface {
    fn set_image(&mut self, slot: Slot, source: &str);

    fn set_opacity(&mut self, slot: Slot, opacity: Opacity);

    /// Drives the white flash layer on top of both slots.
    fn set_flash(&mut self, opacity: Opacity);

    /// Requests decode of an upcoming image so the crossfade never
    /// reveals a half-loaded frame.
    fn preload(&mut self, source: &str);
}

/// Cloneable stop handle for a running backdrop.
#[derive(Debug, Clone)]
pub struct BackdropHandle {
    flag: RunFlag,
}

impl BackdropHandle {
    /// Freezes the slideshow at its current state. No-op when idle.
    pub fn stop(&self) {
        self.flag.clear();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.flag.is_running()
    }
}

/// The slideshow driver: image list, which slot is in front, and how far
/// through the list it has come.
#[derive(Debug, Clone)]
pub struct Backdrop {
    images: Vec<String>,
    index: usize,
    front: Slot,
    running: RunFlag,
}

impl Backdrop {
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            index: 0,
            front: Slot::A,
            running: RunFlag::new(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> BackdropHandle {
        BackdropHandle {
            flag: self.running.clone(),
        }
    }

    /// The slot currently in front.
    #[must_use]
    pub fn front(&self) -> Slot {
        self.front
    }

    /// Index of the image currently shown.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.images.len()
    }

    /// Puts the first image in both slots, front fully visible, flash
    /// dark. Called once before [`Backdrop::run`].
    pub fn prime<S: BackdropSurface>(&self, surface: &mut S) {
        let Some(first) = self.images.first() else {
            return;
        };
        surface.set_image(Slot::A, first);
        surface.set_image(Slot::B, first);
        surface.set_opacity(self.front, Opacity::VISIBLE);
        surface.set_opacity(self.front.other(), Opacity::HIDDEN);
        surface.set_flash(Opacity::HIDDEN);
        for image in self.images.iter().skip(1) {
            surface.preload(image);
        }
    }

    /// Plays through the remaining images, then returns with the last one
    /// held in front. Returns immediately when already running.
    pub async fn run<S: BackdropSurface>(&mut self, surface: &mut S) {
        if !self.running.try_begin() {
            return;
        }

        while self.has_next() && self.running.is_running() {
            sleep(BACKDROP_HOLD).await;
            if !self.running.is_running() {
                break;
            }
            self.crossfade_to_next(surface).await;
        }

        self.running.clear();
    }

    /// Stages the next image behind the front slot and fades across.
    async fn crossfade_to_next<S: BackdropSurface>(&mut self, surface: &mut S) {
        self.index += 1;
        let back = self.front.other();
        surface.set_image(back, &self.images[self.index]);
        surface.set_flash(Opacity::new(BACKDROP_FLASH_LEVEL));

        // One progress value drives all three layers: the incoming slot
        // tracks it, the outgoing slot mirrors it, and the flash decays on
        // its own shorter schedule.
        let flash_ratio = BACKDROP_FADE.as_secs_f32() / BACKDROP_FLASH.as_secs_f32();
        let front = self.front;
        fade(
            |t| {
                surface.set_opacity(back, Opacity::new(t));
                surface.set_opacity(front, Opacity::new(1.0 - t));
                let flash_left = 1.0 - (t * flash_ratio).min(1.0);
                surface.set_flash(Opacity::new(BACKDROP_FLASH_LEVEL * flash_left));
            },
            0.0,
            1.0,
            BACKDROP_FADE,
            &self.running,
        )
        .await;

        surface.set_flash(Opacity::HIDDEN);
        self.front = back;
    }
}
