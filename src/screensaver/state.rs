// SPDX-License-Identifier: MPL-2.0
//! Run state for the media sequencer.
//!
//! The sequencer's lifecycle is a single boolean: `running` goes true at
//! `start()` and false at teardown, whether the sequence completed, was
//! cancelled, or aborted on a playback failure. Every await point in the
//! step choreography re-checks the flag, which is what makes cancellation
//! cooperative rather than preemptive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared running flag for one sequencer.
///
/// Lock-free; the flag is the only state shared between the sequencer and
/// the UI layer that triggers cancellation.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    pub(crate) fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Attempts the idle → running transition.
    ///
    /// Returns false if the sequencer is already running, in which case the
    /// caller must treat `start()` as a no-op (at-most-one-active
    /// invariant).
    pub(crate) fn try_begin(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Clears the flag. Used both for cancellation and for the natural
    /// return to idle after teardown.
    pub(crate) fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub(crate) fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Cloneable cancellation handle for a running sequence.
///
/// The close control and the Escape-key binding of the host both funnel
/// into [`SequencerHandle::cancel`]. Cancellation is cooperative: in-flight
/// fades observe the cleared flag on their next tick and stop scheduling
/// further work; the sequencer then runs its teardown path (pause and reset
/// both media surfaces, restore the music channel, close the overlay)
/// before `start()` returns.
#[derive(Debug, Clone)]
pub struct SequencerHandle {
    flag: RunFlag,
}

impl SequencerHandle {
    pub(crate) fn new(flag: RunFlag) -> Self {
        Self { flag }
    }

    /// Requests cancellation of the running sequence. No-op when idle.
    pub fn cancel(&self) {
        self.flag.clear();
    }

    /// Returns true while a sequence is running (teardown included).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.flag.is_running()
    }
}
