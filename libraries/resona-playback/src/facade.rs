//! Single entry point for hosts
//!
//! [`Player`] bundles the playback session and the like overlay behind one
//! surface so host code never reaches into the internals. Reads go through
//! [`Player::snapshot`], a plain value the UI can render without holding
//! any borrow into the engine.

use crate::error::Result;
use crate::events::PlayerEvent;
use crate::like::{LibraryService, LikeSync};
use crate::output::{MediaEvent, MediaOutput};
use crate::session::{PlaybackSession, PlaycountReporter};
use crate::types::{LikeAction, PlaybackStatus, PlayerConfig, RepeatMode};
use resona_core::{QueueOrigin, TrackCatalogEntry, TrackId};
use serde::Serialize;
use std::time::Duration;

/// The playback engine's one public handle
pub struct Player {
    session: PlaybackSession,
    likes: LikeSync,
}

/// Point-in-time view of everything the UI renders
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub status: PlaybackStatus,
    /// Now-playing track; `None` while idle
    pub current_track: Option<TrackCatalogEntry>,
    pub current_index: Option<usize>,
    /// Track resolving right now (per-row spinner), if any
    pub loading_track_id: Option<TrackId>,
    pub position: Duration,
    pub duration: Option<Duration>,
    /// Fraction of the track buffered, 0.0 when duration is unknown
    pub buffered_fraction: f32,
    pub volume: f32,
    pub is_muted: bool,
    pub is_shuffled: bool,
    pub repeat: RepeatMode,
    pub queue_length: usize,
    /// Whether the now-playing track is in the saved library
    pub current_track_saved: bool,
    /// Like toast currently showing, if any
    pub like_toast: Option<LikeAction>,
}

impl Player {
    pub fn new(
        config: PlayerConfig,
        output: Box<dyn MediaOutput>,
        library: Box<dyn LibraryService>,
        reporter: Box<dyn PlaycountReporter>,
    ) -> Self {
        let toast_lifetime = config.like_toast_lifetime;
        Self {
            session: PlaybackSession::new(config, output, reporter),
            likes: LikeSync::new(library, toast_lifetime),
        }
    }

    // ===== Playback intents =====

    /// Play `track` within `list`, replacing the queue
    pub fn play_track(
        &mut self,
        track: &TrackCatalogEntry,
        list: Vec<TrackCatalogEntry>,
        origin: QueueOrigin,
    ) -> Result<()> {
        self.session.play_track(track, list, origin)
    }

    /// Jump to a canonical index within the current queue
    pub fn play_at(&mut self, index: usize) -> Result<()> {
        self.session.play_at(index)
    }

    pub fn toggle_play_pause(&mut self) {
        self.session.toggle_play_pause();
    }

    pub fn next_track(&mut self) {
        self.session.next_track();
    }

    pub fn prev_track(&mut self) {
        self.session.prev_track();
    }

    pub fn seek_to(&mut self, target: Duration) -> Result<()> {
        self.session.seek_to(target)
    }

    pub fn set_volume(&mut self, level: f32) {
        self.session.set_volume(level);
    }

    pub fn toggle_mute(&mut self) {
        self.session.toggle_mute();
    }

    pub fn toggle_shuffle(&mut self) {
        self.session.toggle_shuffle();
    }

    pub fn cycle_repeat(&mut self) {
        self.session.cycle_repeat();
    }

    pub fn stop_and_clear(&mut self) {
        self.session.stop_and_clear();
    }

    // ===== Likes =====

    /// Optimistically flip the like state of `track_id`
    pub fn toggle_like(&mut self, track_id: &TrackId) {
        self.likes.toggle(track_id);
    }

    /// Report the outcome of a previously fired like command
    pub fn resolve_like(&mut self, track_id: &TrackId, success: bool) {
        self.likes.resolve(track_id, success);
    }

    pub fn is_saved(&self, track_id: &TrackId) -> bool {
        self.likes.is_saved(track_id)
    }

    // ===== Host plumbing =====

    /// Feed one event from the media output into the engine
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        self.session.handle_output_event(event);
    }

    /// Advance engine clocks and emit periodic position updates
    pub fn tick(&mut self, elapsed: Duration) {
        self.likes.tick(elapsed);
        self.session.emit_position_update();
    }

    /// Drain all pending events, in emission order per component
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        let mut events = self.session.drain_events();
        events.extend(self.likes.drain_events());
        events
    }

    /// Tracks after the current one in traversal order
    pub fn upcoming(&self) -> Vec<&TrackCatalogEntry> {
        self.session.upcoming()
    }

    /// Capture everything the UI needs as one value
    pub fn snapshot(&self) -> PlayerSnapshot {
        let current_track = self.session.current_track().cloned();
        let current_track_saved = current_track
            .as_ref()
            .is_some_and(|t| self.likes.is_saved(&t.id));
        let progress = self.session.progress();

        PlayerSnapshot {
            status: self.session.status(),
            current_index: self.session.current_index(),
            loading_track_id: self.session.loading_track_id().cloned(),
            position: progress.position(),
            duration: progress.duration(),
            buffered_fraction: progress.buffered_fraction(),
            volume: self.session.volume(),
            is_muted: self.session.is_muted(),
            is_shuffled: self.session.is_shuffled(),
            repeat: self.session.repeat(),
            queue_length: self.session.queue_len(),
            current_track_saved,
            like_toast: self.likes.active_toast(),
            current_track,
        }
    }
}
