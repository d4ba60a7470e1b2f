//! Core types for the playback engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No session active
    Idle,

    /// Resolving a new media source
    Loading,

    /// Audio running
    Playing,

    /// Paused mid-track
    Paused,

    /// Current track reached its natural end
    Ended,

    /// Source failed to load or play
    Error,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when traversal reaches the end of the queue
    Off,

    /// Wrap around the queue ends
    All,

    /// Replay the current track on natural end
    One,
}

impl RepeatMode {
    /// Next mode in the off -> all -> one -> off cycle
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Direction of a queue traversal step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Whether a traversal step was user-requested or event-driven
///
/// Repeat-one pins the index only for automatic advances; a manual skip
/// always moves. The bounded auto-skip policy on load failure likewise
/// applies only to automatic advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceKind {
    /// Explicit user action (next/prev button, row click)
    Manual,

    /// Triggered by a natural `Ended` or a failed automatic load
    Auto,
}

/// Outcome of a like/unlike attempt, shown as a transient toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikeAction {
    /// Track was added to the library
    Liked,

    /// Track was removed from the library
    Unliked,
}

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// `prev` within this many seconds of the track start moves back a
    /// track; beyond it, `prev` restarts the current track (default: 3s)
    pub prev_restart_threshold: Duration,

    /// Consecutive failed automatic advances tolerated before the player
    /// gives up and goes idle (default: 2)
    pub auto_skip_limit: u32,

    /// How long the like/unlike toast stays up (default: 2s)
    pub like_toast_lifetime: Duration,

    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            prev_restart_threshold: Duration::from_secs(3),
            auto_skip_limit: 2,
            like_toast_lifetime: Duration::from_secs(2),
            volume: 1.0,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}
