// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all timing and level constants.
//!
//! This module is the single source of truth for the numeric choreography
//! of the crate. The source material disagreed on several of these numbers
//! between revisions, so none of them is a contract: every consumer reads
//! them from here (or from per-step configuration) rather than hard-coding.
//!
//! # Categories
//!
//! - **Levels**: audio volume targets and bounds
//! - **Sequencer**: bounded waits, fade caps, and safety margins
//! - **Backdrop**: background crossfade timings
//! - **Gallery / Hero**: carousel and rotating-word cadence
//! - **Parallax**: scroll-to-offset mapping

use std::time::Duration;

// ==========================================================================
// Level Defaults
// ==========================================================================

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Default ambient music volume.
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.25;

/// Default fade-in target for sequence audio. Deliberately below full
/// volume to leave headroom over the video's silent track.
pub const DEFAULT_AUDIO_TARGET: f32 = 0.85;

// ==========================================================================
// Sequencer Defaults
// ==========================================================================

/// Bounded wait for media readiness (metadata, first frame, canplay).
/// On expiry the sequencer proceeds with best-effort assumptions.
pub const MEDIA_READY_TIMEOUT: Duration = Duration::from_millis(2500);

/// Assumed media duration when the surface cannot report one.
pub const DEFAULT_FALLBACK_DURATION: Duration = Duration::from_millis(8000);

/// Buffer subtracted from the hold time so the fade-out finishes before
/// the media's natural end despite rounding and late timer fire.
pub const FADE_OUT_SAFETY_MARGIN: Duration = Duration::from_millis(250);

/// Upper bound on the audio lead-in fade, so a long configured fade-in
/// does not dominate the "hear it before you see it" effect.
pub const AUDIO_LEAD_FADE_CAP: Duration = Duration::from_millis(650);

/// Interval between fade samples (~60 per second).
pub const FADE_TICK: Duration = Duration::from_millis(16);

/// Fade applied to the music channel when the sequencer ducks it.
pub const MUSIC_DUCK_FADE: Duration = Duration::from_millis(350);

/// Default per-step fade duration (both in and out).
pub const DEFAULT_STEP_FADE: Duration = Duration::from_millis(450);

/// Margin kept below the reported duration when seeking past intro frames.
pub const SEEK_END_GUARD: Duration = Duration::from_millis(50);

// ==========================================================================
// Backdrop Defaults
// ==========================================================================

/// How long each backdrop image stays fully visible before switching.
pub const BACKDROP_HOLD: Duration = Duration::from_millis(1600);

/// Backdrop crossfade duration.
pub const BACKDROP_FADE: Duration = Duration::from_millis(900);

/// White flash shown between backdrop images.
pub const BACKDROP_FLASH: Duration = Duration::from_millis(180);

/// Peak opacity of the white flash layer.
pub const BACKDROP_FLASH_LEVEL: f32 = 0.90;

// ==========================================================================
// Gallery / Hero Defaults
// ==========================================================================

/// Auto-advance interval for the image gallery.
pub const GALLERY_AUTO_ADVANCE: Duration = Duration::from_millis(5000);

/// Interval between rotating hero word swaps.
pub const WORD_ROTATE_INTERVAL: Duration = Duration::from_millis(1800);

/// Delay between fading the old word out and the new word in.
pub const WORD_SWAP_DELAY: Duration = Duration::from_millis(350);

// ==========================================================================
// Parallax Defaults
// ==========================================================================

/// Background scroll speed relative to content scroll.
pub const PARALLAX_FACTOR: f32 = 0.5;

/// Maximum background offset magnitude in pixels.
pub const PARALLAX_LIMIT_PX: f32 = 360.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Level validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_MUSIC_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_MUSIC_VOLUME <= MAX_VOLUME);
    assert!(DEFAULT_AUDIO_TARGET >= MIN_VOLUME);
    assert!(DEFAULT_AUDIO_TARGET <= MAX_VOLUME);
    assert!(BACKDROP_FLASH_LEVEL <= 1.0);

    // Timing validation
    assert!(!MEDIA_READY_TIMEOUT.is_zero());
    assert!(!DEFAULT_FALLBACK_DURATION.is_zero());
    assert!(!FADE_TICK.is_zero());
    assert!(PARALLAX_FACTOR > 0.0);
    assert!(PARALLAX_LIMIT_PX > 0.0);
};
