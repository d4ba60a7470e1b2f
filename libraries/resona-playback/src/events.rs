//! Player events
//!
//! Event-based communication for UI synchronization. The session and like
//! sync accumulate events; the host drains them each tick and fans them
//! out to whatever surfaces are mounted (bottom bar, feed rows, queue
//! panel, toasts).

use crate::output::LoadGeneration;
use crate::types::{LikeAction, PlaybackStatus};
use resona_core::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback status changed
    StateChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A different track became current
    TrackChanged {
        /// ID of the new current track
        track_id: TrackId,
        /// ID of the previous track, if any
        previous_track_id: Option<TrackId>,
    },

    /// Queue contents or traversal order changed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Periodic position report for progress bars
    PositionUpdate {
        /// Current playback position
        position: Duration,
        /// Source duration, once known
        duration: Option<Duration>,
    },

    /// User-visible, non-blocking notification (load failure, like failure)
    Notification {
        /// Message for the toast/banner layer
        message: String,
    },

    /// Like/unlike outcome toast, independent of the notification channel
    LikeToast {
        /// Attempted direction
        action: LikeAction,
        /// Track the action applied to
        track_id: TrackId,
    },

    /// A superseded load's answer was discarded
    ///
    /// Never user-visible; emitted so tests and logs can observe the
    /// guard firing.
    StaleLoadDiscarded {
        /// Generation of the discarded load
        generation: LoadGeneration,
    },
}
