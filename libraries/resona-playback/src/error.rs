//! Error types for the playback engine

use thiserror::Error;

/// Playback engine errors
///
/// Only synchronously-rejected inputs surface as `Err` across the facade.
/// Asynchronous failures (a source that will not load, a like call that
/// comes back failed) are represented as state plus a notification event.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Queue input rejected before reaching the state machine
    #[error("invalid queue: {0}")]
    InvalidQueue(String),

    /// Operation needs a loaded track
    #[error("no track loaded")]
    NoTrackLoaded,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
