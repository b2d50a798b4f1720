// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for audio playback.
//!
//! This module provides a type-safe wrapper for volume values, ensuring
//! they are always within the valid range (0.0–1.0).

use crate::config::defaults::{MAX_VOLUME, MIN_VOLUME};

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// This newtype enforces validity at the type level, making it impossible
/// to hand a surface an out-of-range gain.
///
/// # Example
///
/// ```
/// use attract_loop::screensaver::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// let too_loud = Volume::new(2.0);
/// assert_eq!(too_loud.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Fully silent volume.
    pub const SILENT: Self = Self(MIN_VOLUME);

    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if volume is effectively silent (below audible threshold).
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 < 0.001
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::SILENT
    }
}
