// SPDX-License-Identifier: MPL-2.0
//! Bounded waits and hold-time arithmetic for the sequencer.
//!
//! Media surfaces signal readiness (metadata loaded, first frame
//! presented, audio buffered) through futures that may never resolve, so
//! every such wait is raced against a timeout and reported as a plain
//! boolean. A timed-out wait is never fatal: the sequencer proceeds with
//! best-effort assumptions.

use std::time::Duration;

use crate::config::defaults::FADE_OUT_SAFETY_MARGIN;

/// Awaits `ready` for at most `bound`.
///
/// Returns true if the future resolved in time, false if the bound
/// expired first. The future's output is discarded either way.
pub async fn await_with_timeout<F>(ready: F, bound: Duration) -> bool
where
    F: std::future::Future,
{
    tokio::time::timeout(bound, ready).await.is_ok()
}

/// Resolves the duration a step should assume for its media.
///
/// Surfaces report `None` when metadata never loaded or the host reported
/// an infinite/NaN duration; a zero report is treated the same way.
#[must_use]
pub fn effective_duration(reported: Option<Duration>, fallback: Duration) -> Duration {
    match reported {
        Some(duration) if !duration.is_zero() => duration,
        _ => fallback,
    }
}

/// Computes how long to hold before starting the fade-out.
///
/// The fade-out must finish before the media's natural end, so the hold is
/// the effective duration minus the fade-out minus a safety margin,
/// saturating at zero for short media.
#[must_use]
pub fn hold_before_fade_out(effective: Duration, fade_out: Duration) -> Duration {
    effective
        .saturating_sub(fade_out)
        .saturating_sub(FADE_OUT_SAFETY_MARGIN)
}
