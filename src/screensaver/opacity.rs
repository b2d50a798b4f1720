// SPDX-License-Identifier: MPL-2.0
//! Opacity domain type for visual fades.

/// Opacity level, guaranteed to be within valid range (0.0–1.0).
///
/// The counterpart of [`super::Volume`] on the visual side: the fade engine
/// drives both through the same interpolation, each wrapped in its own
/// type so the two channels cannot be confused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent.
    pub const HIDDEN: Self = Self(0.0);

    /// Fully opaque.
    pub const VISIBLE: Self = Self(1.0);

    /// Creates a new opacity level, clamping to valid range.
    #[must_use]
    pub fn new(opacity: f32) -> Self {
        Self(opacity.clamp(0.0, 1.0))
    }

    /// Returns the opacity value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the surface is effectively invisible.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        self.0 < 0.001
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::HIDDEN
    }
}
