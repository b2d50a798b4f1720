// SPDX-License-Identifier: MPL-2.0
//! Modal overlay controller for the screensaver container.
//!
//! The sequencer only ever calls `open()` and `close()`; what "visible"
//! means is the host's business. [`ModalState`] is the reference
//! implementation: a visibility flag paired with an assistive-technology
//! flag, toggled together so screen readers always agree with the screen.

/// Visibility collaborator owned by the host.
///
/// Both operations are idempotent.
pub trait Overlay {
    fn open(&mut self);

    fn close(&mut self);

    fn is_open(&self) -> bool;
}

/// Plain modal visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    hidden_from_assistive_tech: bool,
}

impl ModalState {
    /// Creates a closed modal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            hidden_from_assistive_tech: true,
        }
    }

    /// Returns true if assistive technology should ignore the modal.
    #[must_use]
    pub fn hidden_from_assistive_tech(&self) -> bool {
        self.hidden_from_assistive_tech
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

impl Overlay for ModalState {
    fn open(&mut self) {
        self.open = true;
        self.hidden_from_assistive_tech = false;
    }

    fn close(&mut self) {
        self.open = false;
        self.hidden_from_assistive_tech = true;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
