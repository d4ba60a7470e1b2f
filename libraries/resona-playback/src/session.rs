//! Playback session - the state machine
//!
//! Owns the single media output handle and orchestrates queue traversal,
//! the progress tracker, and load/play/pause/error transitions. All state
//! changes are serialized through this object: the host calls intents
//! (play, pause, seek) and pumps [`MediaEvent`]s in; nothing here blocks.
//!
//! The stale-load guard: every `load` issued to the output carries a fresh
//! generation token. A newer `play_track` supersedes an in-flight load by
//! bumping the generation, so the superseded load's eventual answer is
//! recognized by identity and dropped, never by timing.

use crate::error::{PlayerError, Result};
use crate::events::PlayerEvent;
use crate::output::{LoadGeneration, MediaEvent, MediaOutput};
use crate::progress::ProgressTracker;
use crate::queue::QueueManager;
use crate::types::{AdvanceKind, Direction, PlaybackStatus, PlayerConfig, RepeatMode};
use crate::volume::Volume;
use resona_core::{QueueOrigin, TrackCatalogEntry, TrackId};
use std::time::Duration;
use tracing::{debug, warn};

/// Fire-and-forget play-count telemetry
///
/// Called once per track start, tagged with the queue origin. Failures are
/// the implementor's problem; the engine never waits on or retries this.
pub trait PlaycountReporter: Send {
    fn report(&mut self, track_id: &TrackId, origin: &QueueOrigin);
}

/// The playback state machine
pub struct PlaybackSession {
    status: PlaybackStatus,
    queue: QueueManager,
    progress: ProgressTracker,
    output: Box<dyn MediaOutput>,
    reporter: Box<dyn PlaycountReporter>,
    volume: Volume,
    config: PlayerConfig,

    /// Set while a new source is resolving; drives per-row spinners
    /// without touching whatever is still audibly playing
    loading_track_id: Option<TrackId>,

    /// Generation of the most recently issued load
    load_generation: LoadGeneration,

    /// Whether the in-flight load came from a user action or an automatic
    /// advance (bounded auto-skip applies only to the latter)
    load_kind: AdvanceKind,

    /// Consecutive automatic loads that failed
    auto_skip_streak: u32,

    /// Track id the UI currently shows as playing
    now_playing: Option<TrackId>,

    pending_events: Vec<PlayerEvent>,
}

impl PlaybackSession {
    /// Create an idle session owning the given output
    pub fn new(
        config: PlayerConfig,
        output: Box<dyn MediaOutput>,
        reporter: Box<dyn PlaycountReporter>,
    ) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            queue: QueueManager::new(config.shuffle, config.repeat),
            progress: ProgressTracker::new(),
            output,
            reporter,
            volume: Volume::new(config.volume),
            config,
            loading_track_id: None,
            load_generation: 0,
            load_kind: AdvanceKind::Manual,
            auto_skip_streak: 0,
            now_playing: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Intents =====

    /// Start playing `track` in the context of `list`
    ///
    /// Replaces the queue wholesale. Calling this with the track that is
    /// already current resumes/pauses instead of reloading the source.
    pub fn play_track(
        &mut self,
        track: &TrackCatalogEntry,
        list: Vec<TrackCatalogEntry>,
        origin: QueueOrigin,
    ) -> Result<()> {
        if self.is_current(&track.id) {
            match self.status {
                PlaybackStatus::Playing | PlaybackStatus::Paused => {
                    self.toggle_play_pause();
                    return Ok(());
                }
                // Already resolving this track; nothing to do
                PlaybackStatus::Loading => return Ok(()),
                _ => {}
            }
        }

        let start_index = list
            .iter()
            .position(|t| t.id == track.id)
            .ok_or_else(|| {
                PlayerError::InvalidQueue(format!("track {} not in list", track.id))
            })?;

        self.queue.replace(list, start_index, origin)?;
        self.emit_queue_changed();
        self.begin_load(AdvanceKind::Manual);
        Ok(())
    }

    /// Jump to a canonical index within the current queue
    pub fn play_at(&mut self, index: usize) -> Result<()> {
        self.queue.select(index)?;
        self.begin_load(AdvanceKind::Manual);
        Ok(())
    }

    /// Toggle between playing and paused; no-op elsewhere
    pub fn toggle_play_pause(&mut self) {
        match self.status {
            PlaybackStatus::Playing => {
                self.output.pause();
                self.set_status(PlaybackStatus::Paused);
            }
            PlaybackStatus::Paused => {
                self.output.play();
                self.set_status(PlaybackStatus::Playing);
            }
            _ => {}
        }
    }

    /// Manual skip to the next track in traversal order
    pub fn next_track(&mut self) {
        if self.queue.advance(Direction::Next, AdvanceKind::Manual).is_some() {
            self.begin_load(AdvanceKind::Manual);
        }
    }

    /// Manual step back
    ///
    /// Past the restart threshold this restarts the current track instead
    /// of moving, mirroring common player UX.
    pub fn prev_track(&mut self) {
        let mid_track = matches!(
            self.status,
            PlaybackStatus::Playing | PlaybackStatus::Paused
        ) && self.progress.position() > self.config.prev_restart_threshold;

        if mid_track {
            self.restart_current();
            return;
        }

        if self.queue.advance(Direction::Prev, AdvanceKind::Manual).is_some() {
            self.begin_load(AdvanceKind::Manual);
        } else {
            // Nowhere to go back to: restart from the top
            self.restart_current();
        }
    }

    /// Seek within the current track
    pub fn seek_to(&mut self, target: Duration) -> Result<()> {
        if self.status == PlaybackStatus::Idle || self.queue.is_empty() {
            return Err(PlayerError::NoTrackLoaded);
        }
        let clamped = self.progress.begin_seek(target);
        self.output.seek(clamped);
        Ok(())
    }

    /// Set volume, clamped to [0, 1]; survives track changes
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.output.set_gain(self.volume.gain());
    }

    /// Toggle mute, preserving the set level
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.output.set_gain(self.volume.gain());
    }

    /// Toggle shuffle traversal; the playing track never moves
    pub fn toggle_shuffle(&mut self) {
        self.queue.toggle_shuffle();
        self.emit_queue_changed();
    }

    /// Cycle repeat mode: off -> all -> one -> off
    pub fn cycle_repeat(&mut self) {
        self.queue.cycle_repeat();
    }

    /// Tear everything down to the initial empty state
    ///
    /// Idempotent and callable from any state. Bumping the load generation
    /// strands every in-flight answer.
    pub fn stop_and_clear(&mut self) {
        self.output.teardown();
        self.queue.clear();
        self.progress.reset();
        self.loading_track_id = None;
        self.load_generation += 1;
        self.auto_skip_streak = 0;
        self.now_playing = None;
        self.volume = Volume::new(self.config.volume);
        self.set_status(PlaybackStatus::Idle);
        self.emit_queue_changed();
    }

    // ===== Media event pump =====

    /// Fold one output event into the state machine
    pub fn handle_output_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::SourceReady { generation } => self.on_source_ready(generation),
            MediaEvent::Failed {
                generation,
                message,
            } => self.on_failed(generation, &message),
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::TimeUpdate { .. }
            | MediaEvent::DurationChanged { .. }
            | MediaEvent::BufferedUpdate { .. }
            | MediaEvent::SeekCompleted { .. } => {
                if self.status != PlaybackStatus::Idle {
                    self.progress.on_event(&event);
                }
            }
        }
    }

    fn on_source_ready(&mut self, generation: LoadGeneration) {
        if generation != self.load_generation || self.status != PlaybackStatus::Loading {
            self.discard_stale(generation);
            return;
        }

        let Some(track) = self.queue.current_track() else {
            return;
        };
        let track_id = track.id.clone();

        self.loading_track_id = None;
        self.auto_skip_streak = 0;
        self.output.set_gain(self.volume.gain());
        self.output.play();
        self.set_status(PlaybackStatus::Playing);

        let previous = self.now_playing.replace(track_id.clone());
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id: track_id.clone(),
            previous_track_id: previous,
        });

        self.reporter.report(&track_id, self.queue.origin());
    }

    fn on_failed(&mut self, generation: Option<LoadGeneration>, message: &str) {
        if let Some(generation) = generation {
            if generation != self.load_generation {
                self.discard_stale(generation);
                return;
            }
        }
        if self.status == PlaybackStatus::Idle {
            return;
        }

        let automatic =
            self.load_kind == AdvanceKind::Auto && self.status == PlaybackStatus::Loading;

        if automatic {
            if self.auto_skip_streak < self.config.auto_skip_limit {
                self.auto_skip_streak += 1;
                warn!(
                    streak = self.auto_skip_streak,
                    "source failed during automatic advance, skipping: {message}"
                );
                // Move past the broken track even under repeat-one
                if self
                    .queue
                    .advance(Direction::Next, AdvanceKind::Manual)
                    .is_some()
                {
                    self.begin_load(AdvanceKind::Auto);
                } else {
                    self.enter_idle();
                }
            } else {
                // The queue looks broken end to end; stop looping
                warn!("auto-skip limit reached, going idle: {message}");
                self.enter_idle();
            }
            return;
        }

        self.loading_track_id = None;
        self.set_status(PlaybackStatus::Error);
        self.pending_events.push(PlayerEvent::Notification {
            message: format!("Couldn't play this track: {message}"),
        });
    }

    fn on_ended(&mut self) {
        if !matches!(
            self.status,
            PlaybackStatus::Playing | PlaybackStatus::Paused
        ) {
            return;
        }

        self.progress.on_event(&MediaEvent::Ended);
        self.set_status(PlaybackStatus::Ended);

        if self
            .queue
            .advance(Direction::Next, AdvanceKind::Auto)
            .is_some()
        {
            self.begin_load(AdvanceKind::Auto);
        } else {
            // Queue exhausted: no stale "paused on last track" state
            self.enter_idle();
        }
    }

    // ===== Internal transitions =====

    /// Issue a load for the current queue track
    fn begin_load(&mut self, kind: AdvanceKind) {
        let Some(track) = self.queue.current_track() else {
            self.enter_idle();
            return;
        };
        let track_id = track.id.clone();
        let media_url = track.media_url.clone();

        self.load_generation += 1;
        self.load_kind = kind;
        self.loading_track_id = Some(track_id);
        self.progress.reset();
        self.set_status(PlaybackStatus::Loading);
        self.output.load(&media_url, self.load_generation);
    }

    fn restart_current(&mut self) {
        if matches!(
            self.status,
            PlaybackStatus::Playing | PlaybackStatus::Paused
        ) {
            let target = self.progress.begin_seek(Duration::ZERO);
            self.output.seek(target);
        }
    }

    fn enter_idle(&mut self) {
        self.loading_track_id = None;
        self.now_playing = None;
        self.progress.reset();
        self.set_status(PlaybackStatus::Idle);
    }

    fn discard_stale(&mut self, generation: LoadGeneration) {
        debug!(
            generation,
            current = self.load_generation,
            "discarding answer to superseded load"
        );
        self.pending_events
            .push(PlayerEvent::StaleLoadDiscarded { generation });
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.status != status {
            self.status = status;
            self.pending_events
                .push(PlayerEvent::StateChanged { status });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    fn is_current(&self, id: &TrackId) -> bool {
        self.queue.current_track().is_some_and(|t| &t.id == id)
    }

    // ===== State queries =====

    /// Current playback status
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Track shown as now playing; `None` while idle
    pub fn current_track(&self) -> Option<&TrackCatalogEntry> {
        if self.status == PlaybackStatus::Idle {
            None
        } else {
            self.queue.current_track()
        }
    }

    /// Canonical index of the current track; `None` while idle
    pub fn current_index(&self) -> Option<usize> {
        if self.status == PlaybackStatus::Idle {
            None
        } else {
            self.queue.current_index()
        }
    }

    /// Track resolving right now, if any (per-row spinner state)
    pub fn loading_track_id(&self) -> Option<&TrackId> {
        self.loading_track_id.as_ref()
    }

    /// Derived timeline state
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Volume level (0.0-1.0), regardless of mute
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Whether output is muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Whether shuffle traversal is on
    pub fn is_shuffled(&self) -> bool {
        self.queue.is_shuffled()
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.queue.repeat()
    }

    /// Number of queued tracks
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Tracks after the current one in traversal order
    pub fn upcoming(&self) -> Vec<&TrackCatalogEntry> {
        self.queue.upcoming()
    }

    // ===== Events =====

    /// Emit a periodic position report (host calls this on its tick)
    pub fn emit_position_update(&mut self) {
        if matches!(
            self.status,
            PlaybackStatus::Playing | PlaybackStatus::Paused
        ) {
            self.pending_events.push(PlayerEvent::PositionUpdate {
                position: self.progress.position(),
                duration: self.progress.duration(),
            });
        }
    }

    /// Drain all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
