// SPDX-License-Identifier: MPL-2.0
//! One beat of the screensaver: a video/audio pairing with its fade
//! choreography.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    DEFAULT_AUDIO_TARGET, DEFAULT_FALLBACK_DURATION, DEFAULT_STEP_FADE,
};

/// Describes one step of the screensaver sequence.
///
/// Steps execute strictly in playlist order, never concurrently. All
/// timings are configuration: the source material revised them freely
/// between iterations, so nothing here is a contract beyond the field
/// meanings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStep {
    /// Location of the video asset.
    pub video_source: String,

    /// Location of the paired audio asset. The video itself plays muted;
    /// this channel carries the sound.
    pub audio_source: String,

    /// Video opacity fade-in duration.
    pub video_fade_in: Duration,

    /// Audio volume fade-in duration (capped during an audio lead).
    pub audio_fade_in: Duration,

    /// Shared fade-out duration for both channels.
    pub fade_out: Duration,

    /// When non-zero, audio reaches its target level and holds for this
    /// long before the video starts becoming visible.
    pub audio_lead: Duration,

    /// Additional delay after the audio lead before the video fade-in.
    pub video_reveal_delay: Duration,

    /// Extra hold after the fade-in completes, before the fade-out is
    /// scheduled.
    pub end_hold: Duration,

    /// Seek target applied once metadata is known, to skip black intro
    /// frames. Ignored when the duration is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seek_to: Option<Duration>,

    /// Target audio level for the fade-in.
    pub audio_target: f32,

    /// Assumed media duration when the surface cannot report one.
    pub fallback_duration: Duration,
}

impl SequenceStep {
    /// Creates a step with default choreography for the given sources.
    #[must_use]
    pub fn new(video_source: impl Into<String>, audio_source: impl Into<String>) -> Self {
        Self {
            video_source: video_source.into(),
            audio_source: audio_source.into(),
            video_fade_in: DEFAULT_STEP_FADE,
            audio_fade_in: DEFAULT_STEP_FADE,
            fade_out: DEFAULT_STEP_FADE,
            audio_lead: Duration::ZERO,
            video_reveal_delay: Duration::ZERO,
            end_hold: Duration::ZERO,
            seek_to: None,
            audio_target: DEFAULT_AUDIO_TARGET,
            fallback_duration: DEFAULT_FALLBACK_DURATION,
        }
    }

    /// Sets both fade-in durations.
    #[must_use]
    pub fn with_fade_in(mut self, fade_in: Duration) -> Self {
        self.video_fade_in = fade_in;
        self.audio_fade_in = fade_in;
        self
    }

    #[must_use]
    pub fn with_fade_out(mut self, fade_out: Duration) -> Self {
        self.fade_out = fade_out;
        self
    }

    #[must_use]
    pub fn with_audio_lead(mut self, lead: Duration) -> Self {
        self.audio_lead = lead;
        self
    }

    #[must_use]
    pub fn with_video_reveal_delay(mut self, delay: Duration) -> Self {
        self.video_reveal_delay = delay;
        self
    }

    #[must_use]
    pub fn with_end_hold(mut self, hold: Duration) -> Self {
        self.end_hold = hold;
        self
    }

    #[must_use]
    pub fn with_seek_to(mut self, position: Duration) -> Self {
        self.seek_to = Some(position);
        self
    }

    /// Returns true if the step uses the audio-first dramatic opening.
    #[must_use]
    pub fn has_audio_lead(&self) -> bool {
        !self.audio_lead.is_zero()
    }
}

/// The playlist observed in the shipped presentation: three steps with
/// asset paths under `video/` and `audio/`.
#[must_use]
pub fn default_playlist() -> Vec<SequenceStep> {
    vec![
        SequenceStep::new("video/Screensaver_1.mp4", "audio/Travel_through_space.mp3")
            .with_end_hold(Duration::from_millis(150)),
        SequenceStep::new("video/Screensaver_2.mp4", "audio/Blender_Hyperspace_Jump.mp3")
            .with_fade_in(Duration::from_millis(650))
            .with_fade_out(Duration::from_millis(650))
            .with_audio_lead(Duration::from_millis(120))
            .with_seek_to(Duration::from_millis(80))
            .with_end_hold(Duration::from_millis(120)),
        SequenceStep::new("video/Screensaver_3.mp4", "audio/Alien_Beach_Waves.mp3")
            .with_fade_in(Duration::from_millis(6000))
            .with_fade_out(Duration::from_millis(650))
            .with_audio_lead(Duration::from_millis(700))
            .with_end_hold(Duration::from_millis(350)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_step_uses_default_choreography() {
        let step = SequenceStep::new("video/a.mp4", "audio/a.mp3");
        assert_eq!(step.video_fade_in, DEFAULT_STEP_FADE);
        assert_eq!(step.fade_out, DEFAULT_STEP_FADE);
        assert!(!step.has_audio_lead());
        assert_eq!(step.seek_to, None);
        assert_eq!(step.fallback_duration, DEFAULT_FALLBACK_DURATION);
    }

    #[test]
    fn builder_methods_compose() {
        let step = SequenceStep::new("video/a.mp4", "audio/a.mp3")
            .with_fade_in(Duration::from_millis(650))
            .with_audio_lead(Duration::from_millis(120))
            .with_video_reveal_delay(Duration::from_millis(90))
            .with_seek_to(Duration::from_millis(80));

        assert_eq!(step.video_fade_in, Duration::from_millis(650));
        assert_eq!(step.audio_fade_in, Duration::from_millis(650));
        assert!(step.has_audio_lead());
        assert_eq!(step.video_reveal_delay, Duration::from_millis(90));
        assert_eq!(step.seek_to, Some(Duration::from_millis(80)));
    }

    #[test]
    fn default_playlist_is_three_ordered_steps() {
        let playlist = default_playlist();
        assert_eq!(playlist.len(), 3);
        assert!(playlist[0].video_source.starts_with("video/"));
        assert!(playlist[2].has_audio_lead());
        // Only the middle step skips intro frames.
        assert!(playlist[0].seek_to.is_none());
        assert!(playlist[1].seek_to.is_some());
    }

    #[test]
    fn steps_round_trip_through_toml() {
        let step = SequenceStep::new("video/a.mp4", "audio/a.mp3")
            .with_audio_lead(Duration::from_millis(700));
        let encoded = toml::to_string(&step).expect("step should serialize");
        let decoded: SequenceStep = toml::from_str(&encoded).expect("step should deserialize");
        assert_eq!(decoded, step);
    }
}
