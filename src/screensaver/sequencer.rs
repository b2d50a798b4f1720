// SPDX-License-Identifier: MPL-2.0
//! The media sequencer: plays an ordered playlist of [`SequenceStep`]s
//! back-to-back, each with independent audiovisual fade choreography, then
//! restores the ambient state it borrowed.
//!
//! One invocation of [`Sequencer::start`] covers the whole lifecycle:
//! open the overlay, duck the music channel, run every step in order,
//! tear down, return to idle. Cancellation (close control, Escape) arrives
//! through the shared running flag; every await in the choreography is a
//! checkpoint that observes it.
//!
//! Failure policy: a video `play()` rejection aborts the sequence, an
//! audio rejection degrades that step to visual-only, and an expired
//! readiness wait just means proceeding on fallback assumptions. All three
//! end in the same clean teardown; nothing is surfaced to the trigger
//! beyond the outcome.

use tokio::sync::mpsc;
use tokio::time::sleep;

use super::events::{EventReceiver, EventSender, SequenceOutcome, SequencerEvent};
use super::fade::fade;
use super::opacity::Opacity;
use super::state::{RunFlag, SequencerHandle};
use super::step::SequenceStep;
use super::surface::{AudioSurface, VideoSurface};
use super::timing::{await_with_timeout, effective_duration, hold_before_fade_out};
use super::volume::Volume;
use crate::config::defaults::{
    AUDIO_LEAD_FADE_CAP, MEDIA_READY_TIMEOUT, MUSIC_DUCK_FADE, SEEK_END_GUARD,
};
use crate::error::PlaybackError;
use crate::music::{MusicChannel, MusicSnapshot};
use crate::overlay::Overlay;

/// Orchestrates one screensaver playlist over host-provided surfaces.
///
/// The sequencer exclusively owns its video and audio surfaces; the music
/// channel is borrowed for the duration of a run and handed back restored.
pub struct Sequencer<V, A, M, O> {
    video: V,
    audio: A,
    music: M,
    overlay: O,
    playlist: Vec<SequenceStep>,
    running: RunFlag,
    saved_music: Option<MusicSnapshot>,
    events: Option<EventSender>,
}

impl<V, A, M, O> Sequencer<V, A, M, O>
where
    V: VideoSurface,
    A: AudioSurface,
    M: MusicChannel,
    O: Overlay,
{
    pub fn new(video: V, audio: A, music: M, overlay: O, playlist: Vec<SequenceStep>) -> Self {
        Self {
            video,
            audio,
            music,
            overlay,
            playlist,
            running: RunFlag::new(),
            saved_music: None,
            events: None,
        }
    }

    /// Returns a cancellation handle for the close control and Escape key.
    #[must_use]
    pub fn handle(&self) -> SequencerHandle {
        SequencerHandle::new(self.running.clone())
    }

    /// Subscribes to the diagnostic event stream, replacing any previous
    /// subscriber.
    pub fn subscribe(&mut self) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events = Some(tx);
        rx
    }

    #[must_use]
    pub fn playlist(&self) -> &[SequenceStep] {
        &self.playlist
    }

    /// Runs the whole playlist and returns how the sequence ended.
    ///
    /// Returns `None` without touching any collaborator when a sequence is
    /// already running (idempotent start). Otherwise returns only after
    /// every step completed, cancellation was observed, or a video
    /// playback failure aborted the run — in every case with both surfaces
    /// reset, the music channel restored, and the overlay closed.
    pub async fn start(&mut self) -> Option<SequenceOutcome> {
        if !self.running.try_begin() {
            return None;
        }

        self.overlay.open();
        self.duck_music().await;
        self.emit(SequencerEvent::SequenceStarted);

        let playlist = self.playlist.clone();
        let mut outcome = SequenceOutcome::Completed;
        for (index, step) in playlist.iter().enumerate() {
            if !self.running.is_running() {
                break;
            }
            if let Err(err) = self.run_step(index, step).await {
                eprintln!("Screensaver step {index} failed: {err}");
                self.emit(SequencerEvent::VideoFailed {
                    index,
                    message: err.to_string(),
                });
                outcome = SequenceOutcome::Aborted;
                break;
            }
        }

        if outcome == SequenceOutcome::Completed && !self.running.is_running() {
            outcome = SequenceOutcome::Cancelled;
        }

        self.teardown().await;
        self.emit(SequencerEvent::SequenceEnded(outcome));
        Some(outcome)
    }

    /// Executes one step. Returns early (Ok) as soon as cancellation is
    /// observed; only a video playback rejection is an error.
    async fn run_step(
        &mut self,
        index: usize,
        step: &SequenceStep,
    ) -> Result<(), PlaybackError> {
        if !self.running.is_running() {
            return Ok(());
        }
        self.emit(SequencerEvent::StepStarted { index });

        // Reset both surfaces and hand them the new sources.
        self.video.pause();
        self.audio.pause();
        self.video.set_opacity(Opacity::HIDDEN);
        self.audio.set_volume(Volume::SILENT);
        self.video.set_source(&step.video_source);
        self.video.load();
        self.audio.set_source(&step.audio_source);
        self.audio.load();
        // The audio channel carries the sound, not the video's own track.
        self.video.set_muted(true);

        // Bounded readiness waits; expiry is never fatal.
        let video_ready =
            await_with_timeout(self.video.await_metadata(), MEDIA_READY_TIMEOUT).await;
        let audio_ready = await_with_timeout(self.audio.await_ready(), MEDIA_READY_TIMEOUT).await;
        if !video_ready || !audio_ready {
            self.emit(SequencerEvent::ReadinessTimedOut { index });
        }
        if !self.running.is_running() {
            return Ok(());
        }

        // Skip black intro frames, staying clear of the media's end.
        if let (Some(position), Some(duration)) = (step.seek_to, self.video.duration()) {
            self.video
                .seek(position.min(duration.saturating_sub(SEEK_END_GUARD)));
        }

        // Start audio, best effort.
        self.audio.rewind();
        let mut audible = true;
        if let Err(err) = self.audio.play().await {
            audible = false;
            eprintln!("Screensaver audio failed to play: {err}");
            self.emit(SequencerEvent::AudioDegraded {
                index,
                message: err.to_string(),
            });
        }
        if !self.running.is_running() {
            return Ok(());
        }

        let target = Volume::new(step.audio_target).value();

        // Audio lead: reach the target level, then hold before any video.
        if step.has_audio_lead() {
            if audible {
                let lead_fade = step.audio_fade_in.min(AUDIO_LEAD_FADE_CAP);
                let audio = &mut self.audio;
                fade(
                    |v| audio.set_volume(Volume::new(v)),
                    0.0,
                    target,
                    lead_fade,
                    &self.running,
                )
                .await;
            }
            sleep(step.audio_lead).await;
        }
        if !self.running.is_running() {
            return Ok(());
        }

        // Start video. Rejection is fatal to the whole sequence.
        self.video.play().await?;
        let _ = await_with_timeout(self.video.await_first_frame(), MEDIA_READY_TIMEOUT).await;
        if !self.running.is_running() {
            return Ok(());
        }

        if !step.video_reveal_delay.is_zero() {
            sleep(step.video_reveal_delay).await;
            if !self.running.is_running() {
                return Ok(());
            }
        }

        // Fade in. Without a lead the audio rises with the video; after a
        // lead the audio is already at target, so only the video fades.
        if step.has_audio_lead() || !audible {
            let video = &mut self.video;
            fade(
                |v| video.set_opacity(Opacity::new(v)),
                0.0,
                1.0,
                step.video_fade_in,
                &self.running,
            )
            .await;
        } else {
            let video = &mut self.video;
            let audio = &mut self.audio;
            tokio::join!(
                fade(
                    |v| video.set_opacity(Opacity::new(v)),
                    0.0,
                    1.0,
                    step.video_fade_in,
                    &self.running,
                ),
                fade(
                    |v| audio.set_volume(Volume::new(v)),
                    0.0,
                    target,
                    step.audio_fade_in,
                    &self.running,
                ),
            );
        }
        if !self.running.is_running() {
            return Ok(());
        }

        if !step.end_hold.is_zero() {
            sleep(step.end_hold).await;
            if !self.running.is_running() {
                return Ok(());
            }
        }

        // Hold until the fade-out must start to finish before the media's
        // natural end.
        let effective = effective_duration(self.video.duration(), step.fallback_duration);
        sleep(hold_before_fade_out(effective, step.fade_out)).await;
        if !self.running.is_running() {
            return Ok(());
        }

        // Fade out both channels together.
        let audio_level = self.audio.volume().value();
        {
            let video = &mut self.video;
            let audio = &mut self.audio;
            tokio::join!(
                fade(
                    |v| video.set_opacity(Opacity::new(v)),
                    1.0,
                    0.0,
                    step.fade_out,
                    &self.running,
                ),
                fade(
                    |v| audio.set_volume(Volume::new(v)),
                    audio_level,
                    0.0,
                    step.fade_out,
                    &self.running,
                ),
            );
        }

        self.video.pause();
        self.audio.pause();
        self.emit(SequencerEvent::StepFinished { index });
        Ok(())
    }

    /// Fades the music out and pauses it, remembering what to restore.
    async fn duck_music(&mut self) {
        if !self.music.is_playing() {
            self.saved_music = None;
            return;
        }

        let snapshot = MusicSnapshot::capture(&self.music);
        let from = snapshot.volume().value();
        {
            let music = &mut self.music;
            fade(
                |v| music.set_volume(Volume::new(v)),
                from,
                0.0,
                MUSIC_DUCK_FADE,
                &self.running,
            )
            .await;
        }
        self.music.pause();
        self.saved_music = Some(snapshot);
    }

    /// Resets both surfaces, restores the music channel, closes the
    /// overlay, and returns the sequencer to idle.
    async fn teardown(&mut self) {
        self.video.pause();
        self.video.clear_source();
        self.video.load();
        self.video.set_opacity(Opacity::HIDDEN);

        self.audio.pause();
        self.audio.clear_source();
        self.audio.load();
        self.audio.set_volume(Volume::SILENT);

        if let Some(snapshot) = self.saved_music.take() {
            snapshot.restore(&mut self.music).await;
        }

        self.overlay.close();
        self.running.clear();
    }

    fn emit(&self, event: SequencerEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}
