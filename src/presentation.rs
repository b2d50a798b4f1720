// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven presentation math: pure functions mapping scroll progress
//! to card transforms, plus the rotating tagline word.
//!
//! Everything here is deterministic arithmetic so the host's render loop
//! can call it every frame. Progress values are fractions of the active
//! scroll range; offsets are CSS pixels.

use crate::config::defaults::{PARALLAX_FACTOR, PARALLAX_LIMIT_PX};

/// Clamps a progress fraction to `0.0..=1.0`.
#[must_use]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Quadratic ease-in-out over `0.0..=1.0`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Visual weight of a project card at the given focus progress: `1.0`
/// means centered and fully emphasized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardEmphasis {
    pub scale: f32,
    pub opacity: f32,
}

/// Maps focus progress to the card's scale and opacity.
///
/// Cards rest slightly shrunken and dimmed, rising to full size and
/// opacity as they approach the viewport center.
#[must_use]
pub fn card_emphasis(progress: f32) -> CardEmphasis {
    let eased = ease_in_out(progress);
    CardEmphasis {
        scale: 0.94 + 0.06 * eased,
        opacity: 0.82 + 0.18 * eased,
    }
}

/// Vertical parallax offset for a decorative layer.
///
/// `relative_scroll` is the distance in pixels between the layer's anchor
/// and the viewport center. The offset moves at half scroll speed and is
/// clamped so extreme scroll positions cannot drag a layer off-design.
#[must_use]
pub fn parallax_offset(relative_scroll: f32) -> f32 {
    (relative_scroll * PARALLAX_FACTOR).clamp(-PARALLAX_LIMIT_PX, PARALLAX_LIMIT_PX)
}

/// Resting offsets (in pixels) for the scattered hero cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPosition {
    pub x: f32,
    pub y: f32,
}

impl CardPosition {
    pub const LEFT: Self = Self { x: -140.0, y: -40.0 };
    pub const RIGHT: Self = Self { x: 140.0, y: -20.0 };
    pub const CENTER: Self = Self { x: 0.0, y: -30.0 };
    pub const LEFT_FAR: Self = Self { x: -180.0, y: 40.0 };
    pub const RIGHT_FAR: Self = Self { x: 180.0, y: 60.0 };
}

/// Cycles through the tagline's rotating words.
///
/// The host swaps the visible word [`crate::config::defaults::WORD_SWAP_DELAY`]
/// after starting the exit animation, every
/// [`crate::config::defaults::WORD_ROTATE_INTERVAL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRotator {
    words: Vec<String>,
    index: usize,
}

impl WordRotator {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words, index: 0 }
    }

    /// The word currently displayed, or `None` when the list is empty.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    /// Advances to the next word, wrapping around.
    pub fn advance(&mut self) {
        if self.words.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.words.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn clamp01_bounds_out_of_range_input() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(1.7), 1.0);
    }

    #[test]
    fn ease_in_out_is_fixed_at_the_ends_and_symmetric() {
        assert_abs_diff_eq!(ease_in_out(0.0), 0.0);
        assert_abs_diff_eq!(ease_in_out(0.5), 0.5);
        assert_abs_diff_eq!(ease_in_out(1.0), 1.0);
        // Symmetry around the midpoint.
        assert_abs_diff_eq!(ease_in_out(0.25) + ease_in_out(0.75), 1.0);
    }

    #[test]
    fn ease_in_out_starts_slow_and_ends_slow() {
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
    }

    #[test]
    fn card_emphasis_spans_the_rest_and_focus_extremes() {
        let rest = card_emphasis(0.0);
        assert_abs_diff_eq!(rest.scale, 0.94);
        assert_abs_diff_eq!(rest.opacity, 0.82);

        let focus = card_emphasis(1.0);
        assert_abs_diff_eq!(focus.scale, 1.0);
        assert_abs_diff_eq!(focus.opacity, 1.0);
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_abs_diff_eq!(parallax_offset(200.0), 100.0);
        assert_abs_diff_eq!(parallax_offset(-200.0), -100.0);
    }

    #[test]
    fn parallax_is_clamped_at_the_design_limit() {
        assert_abs_diff_eq!(parallax_offset(10_000.0), PARALLAX_LIMIT_PX);
        assert_abs_diff_eq!(parallax_offset(-10_000.0), -PARALLAX_LIMIT_PX);
    }

    #[test]
    fn word_rotator_wraps_around() {
        let mut rotator = WordRotator::new(vec![
            "design".to_string(),
            "build".to_string(),
            "ship".to_string(),
        ]);
        assert_eq!(rotator.current(), Some("design"));
        rotator.advance();
        rotator.advance();
        assert_eq!(rotator.current(), Some("ship"));
        rotator.advance();
        assert_eq!(rotator.current(), Some("design"));
    }

    #[test]
    fn empty_rotator_stays_empty() {
        let mut rotator = WordRotator::new(Vec::new());
        assert_eq!(rotator.current(), None);
        rotator.advance();
        assert_eq!(rotator.current(), None);
    }
}
