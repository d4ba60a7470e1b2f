//! Queue origin types

use serde::{Deserialize, Serialize};

/// Where a queue was assembled from
///
/// Opaque provenance: the engine only forwards it to play-count reporting,
/// it never affects playback order or traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueOrigin {
    /// Tracks from a playlist
    Playlist { id: String },

    /// Tracks attached to feed posts
    Feed { id: String },

    /// Tracks attached to a chat message
    Attachment { id: String },

    /// Individual track (no context)
    Single,
}

impl QueueOrigin {
    /// Tag used by play-count telemetry
    pub fn analytics_tag(&self) -> String {
        match self {
            QueueOrigin::Playlist { id } => format!("playlist:{id}"),
            QueueOrigin::Feed { id } => format!("feed:{id}"),
            QueueOrigin::Attachment { id } => format!("attachment:{id}"),
            QueueOrigin::Single => "single".to_string(),
        }
    }
}
