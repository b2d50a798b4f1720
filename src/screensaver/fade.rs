// SPDX-License-Identifier: MPL-2.0
//! Generic cancellable fade: animate a level from A to B over a duration,
//! sampled on a fixed tick.
//!
//! Both channels of a step (video opacity and audio volume) run this same
//! loop, each applying samples to its own surface. Two fades scheduled over
//! the same window touch disjoint state, so they need no coordination
//! beyond the shared running flag.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use super::state::RunFlag;
use crate::config::defaults::FADE_TICK;

/// Linear interpolation between `from` and `to` at progress `t` (0.0–1.0).
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Drives `apply` from `from` to `to` over `duration`.
///
/// Samples are taken every [`FADE_TICK`] based on elapsed wall-clock time,
/// so a stalled host skips ahead rather than slowing the fade down. The
/// exact target level is applied on completion.
///
/// Cancellation is cooperative: if `run` is cleared the loop returns after
/// the current tick without applying further samples, leaving the level
/// wherever the fade had reached.
pub(crate) async fn fade<F>(mut apply: F, from: f32, to: f32, duration: Duration, run: &RunFlag)
where
    F: FnMut(f32),
{
    if duration.is_zero() {
        if run.is_running() {
            apply(to);
        }
        return;
    }

    let started = Instant::now();
    let mut ticker = tokio::time::interval(FADE_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick of an interval fires immediately.
    ticker.tick().await;

    loop {
        if !run.is_running() {
            return;
        }

        let t = started.elapsed().as_secs_f32() / duration.as_secs_f32();
        if t >= 1.0 {
            apply(to);
            return;
        }
        apply(lerp(from, to, t));

        ticker.tick().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::sync::{Arc, Mutex};

    #[test]
    fn lerp_interpolates_linearly() {
        assert_abs_diff_eq!(lerp(0.0, 1.0, 0.5), 0.5);
        assert_abs_diff_eq!(lerp(1.0, 0.0, 0.25), 0.75);
        assert_abs_diff_eq!(lerp(0.2, 0.8, 0.0), 0.2);
        assert_abs_diff_eq!(lerp(0.2, 0.8, 1.0), 0.8);
    }

    #[test]
    fn lerp_clamps_progress() {
        assert_abs_diff_eq!(lerp(0.0, 1.0, -1.0), 0.0);
        assert_abs_diff_eq!(lerp(0.0, 1.0, 2.0), 1.0);
    }

    fn running_flag() -> RunFlag {
        let flag = RunFlag::new();
        assert!(flag.try_begin());
        flag
    }

    #[tokio::test(start_paused = true)]
    async fn fade_reaches_exact_target() {
        let samples = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&samples);
        let run = running_flag();

        fade(
            move |v| sink.lock().unwrap().push(v),
            0.0,
            0.85,
            Duration::from_millis(450),
            &run,
        )
        .await;

        let samples = samples.lock().unwrap();
        assert!(samples.len() > 1, "expected multiple samples");
        assert_abs_diff_eq!(*samples.last().unwrap(), 0.85);
    }

    #[tokio::test(start_paused = true)]
    async fn fade_samples_are_monotonic_upward() {
        let samples = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&samples);
        let run = running_flag();

        fade(
            move |v| sink.lock().unwrap().push(v),
            0.0,
            1.0,
            Duration::from_millis(200),
            &run,
        )
        .await;

        let samples = samples.lock().unwrap();
        for pair in samples.windows(2) {
            assert!(pair[1] >= pair[0], "samples must not move backwards");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_fade_jumps_to_target() {
        let samples = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&samples);
        let run = running_flag();

        fade(
            move |v| sink.lock().unwrap().push(v),
            1.0,
            0.0,
            Duration::ZERO,
            &run,
        )
        .await;

        assert_eq!(*samples.lock().unwrap(), vec![0.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_fade_stops_mid_way() {
        let samples = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&samples);
        let run = running_flag();
        let canceller = run.clone();

        let fade_task = fade(
            move |v| {
                let mut samples = sink.lock().unwrap();
                samples.push(v);
                // Cancel after the first few samples land.
                if samples.len() == 3 {
                    canceller.clear();
                }
            },
            0.0,
            1.0,
            Duration::from_millis(10_000),
            &run,
        );
        fade_task.await;

        let samples = samples.lock().unwrap();
        assert_eq!(samples.len(), 3, "no samples after cancellation");
        assert!(*samples.last().unwrap() < 1.0, "target never applied");
    }

    #[tokio::test(start_paused = true)]
    async fn fade_on_idle_flag_applies_nothing() {
        let samples = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&samples);
        let run = RunFlag::new();

        fade(
            move |v| sink.lock().unwrap().push(v),
            0.0,
            1.0,
            Duration::from_millis(100),
            &run,
        )
        .await;

        assert!(samples.lock().unwrap().is_empty());
    }
}
