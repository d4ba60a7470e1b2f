//! Resona - Playback Engine
//!
//! Host-agnostic music playback engine for Resona clients.
//!
//! This crate provides:
//! - Queue management (replace-wholesale, shuffle, repeat modes)
//! - A playback state machine (load/play/pause/error, stale-load discard)
//! - Progress tracking (position, duration, buffered, seek suppression)
//! - Optimistic like/unlike with rollback and toast lifecycle
//! - Volume control (0.0-1.0, mute/unmute)
//! - A single facade with a read-only snapshot for UIs
//!
//! # Architecture
//!
//! `resona-playback` is completely host-agnostic and single-threaded:
//! - No dependency on any audio backend or HTTP client
//! - No timers or background threads of its own
//!
//! The host provides the media output and library backend via traits,
//! pumps [`MediaEvent`]s in, calls [`Player::tick`] on its own clock, and
//! drains [`PlayerEvent`]s out.
//!
//! # Example: Basic Playback
//!
//! ```rust,no_run
//! use resona_playback::{
//!     LibraryService, LoadGeneration, MediaEvent, MediaOutput, Player,
//!     PlayerConfig, PlaycountReporter,
//! };
//! use resona_core::{ArtistRef, QueueOrigin, TrackCatalogEntry, TrackId};
//! use std::time::Duration;
//!
//! struct MyOutput { /* platform media element */ }
//!
//! impl MediaOutput for MyOutput {
//!     fn load(&mut self, _media_url: &str, _generation: LoadGeneration) {}
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position: Duration) {}
//!     fn set_gain(&mut self, _gain: f32) {}
//!     fn teardown(&mut self) {}
//! }
//!
//! struct MyLibrary;
//!
//! impl LibraryService for MyLibrary {
//!     fn is_saved(&self, _track_id: &TrackId) -> bool { false }
//!     fn save(&mut self, _track_id: &TrackId) {}
//!     fn unsave(&mut self, _track_id: &TrackId) {}
//! }
//!
//! struct MyReporter;
//!
//! impl PlaycountReporter for MyReporter {
//!     fn report(&mut self, _track_id: &TrackId, _origin: &QueueOrigin) {}
//! }
//!
//! let mut player = Player::new(
//!     PlayerConfig::default(),
//!     Box::new(MyOutput {}),
//!     Box::new(MyLibrary),
//!     Box::new(MyReporter),
//! );
//!
//! let track = TrackCatalogEntry {
//!     id: TrackId::new("t1"),
//!     title: "My Song".to_string(),
//!     artists: vec![ArtistRef { id: "a1".to_string(), name: "Artist".to_string() }],
//!     artwork_url: None,
//!     media_url: "https://cdn.example.com/t1.mp3".to_string(),
//!     duration_hint: Some(Duration::from_secs(180)),
//! };
//!
//! player.play_track(&track, vec![track.clone()], QueueOrigin::Single).ok();
//!
//! // Host pumps output events back in
//! player.handle_media_event(MediaEvent::SourceReady { generation: 1 });
//!
//! // UI renders from the snapshot
//! let snapshot = player.snapshot();
//! assert!(snapshot.current_track.is_some());
//! ```

mod error;
mod events;
mod facade;
mod like;
mod output;
mod progress;
mod queue;
mod session;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use facade::{Player, PlayerSnapshot};
pub use like::{LibraryService, LikeSync};
pub use output::{LoadGeneration, MediaEvent, MediaOutput};
pub use progress::ProgressTracker;
pub use queue::QueueManager;
pub use session::{PlaybackSession, PlaycountReporter};
pub use types::{
    AdvanceKind, Direction, LikeAction, PlaybackStatus, PlayerConfig, RepeatMode,
};
