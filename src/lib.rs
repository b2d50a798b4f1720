// SPDX-License-Identifier: MPL-2.0
//! Attract Loop: the interactive machinery behind a single-page portfolio.
//!
//! The centerpiece is the [`screensaver`] module, a timed media sequencer
//! that plays an ordered playlist of video/audio pairings with independent
//! fade choreography inside a modal overlay, cooperatively cancellable at
//! every await point. Around it sit the page's other moving parts:
//!
//! - [`backdrop`] — the two-slot crossfading image slideshow
//! - [`gallery`] — the wraparound photo carousel with pausable
//!   auto-advance
//! - [`music`] — the ambient music channel, its toggle, and the
//!   duck/restore snapshot the screensaver borrows
//! - [`overlay`] — modal visibility state
//! - [`presentation`] — scroll-driven card and parallax math
//! - [`config`] — persisted user preferences
//!
//! Hosts adapt their media backend to the traits in
//! [`screensaver::surface`], [`music`], [`overlay`], and [`backdrop`];
//! everything timing-related lives here and is tested on virtual time.

pub mod backdrop;
pub mod config;
pub mod error;
pub mod gallery;
pub mod music;
pub mod overlay;
pub mod presentation;
pub mod screensaver;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, PlaybackError, Result};
