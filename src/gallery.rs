// SPDX-License-Identifier: MPL-2.0
//! Gallery carousel: an ordered set of images with wraparound navigation
//! and a pausable auto-advance timer.
//!
//! The carousel itself is a pure index machine; the host calls [`Gallery::tick`]
//! from its timer (every [`crate::config::defaults::GALLERY_AUTO_ADVANCE`]
//! by default) and re-renders from [`Gallery::current`]. Hovering the
//! gallery pauses the timer without resetting the position.

/// Navigation state over a fixed list of image sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    index: usize,
    paused: bool,
}

impl Gallery {
    /// Creates a carousel positioned on the first image.
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            index: 0,
            paused: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The image currently shown, or `None` for an empty gallery.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Advances to the next image, wrapping at the end. Manual navigation
    /// pauses auto-advance until the host resumes it.
    pub fn next(&mut self) {
        self.paused = true;
        self.advance();
    }

    /// Steps back to the previous image, wrapping at the start. Pauses
    /// auto-advance like [`Gallery::next`].
    pub fn previous(&mut self) {
        self.paused = true;
        if self.images.is_empty() {
            return;
        }
        self.index = (self.index + self.images.len() - 1) % self.images.len();
    }

    /// Jumps directly to the given position, pausing auto-advance.
    /// Out-of-range targets are ignored.
    pub fn select(&mut self, index: usize) {
        self.paused = true;
        if index < self.images.len() {
            self.index = index;
        }
    }

    fn advance(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.images.len();
    }

    /// Suspends auto-advance (pointer over the gallery).
    pub fn pause_auto_advance(&mut self) {
        self.paused = true;
    }

    /// Resumes auto-advance (pointer left the gallery).
    pub fn resume_auto_advance(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub fn is_auto_advance_paused(&self) -> bool {
        self.paused
    }

    /// Timer callback: advances unless paused.
    pub fn tick(&mut self) {
        if !self.paused {
            self.advance();
        }
    }
}
