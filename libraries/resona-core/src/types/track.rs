//! Track catalog types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Stable external track identifier
///
/// Assigned by the resource service; the engine never derives meaning from
/// its contents, it only compares identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a track id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A referenced artist (id + display name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

/// Immutable track value handed to the playback engine
///
/// Produced by whichever collaborator loaded it (feed, playlist, chat
/// attachment). `media_url` is already resolved to a playable source;
/// `duration_hint` is display metadata only, the media output reports the
/// authoritative duration once the source is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackCatalogEntry {
    /// Stable external identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Ordered list of credited artists
    pub artists: Vec<ArtistRef>,

    /// Cover artwork URL (optional)
    pub artwork_url: Option<String>,

    /// Resolved playable source URL
    pub media_url: String,

    /// Advertised duration, if the catalog knows it
    pub duration_hint: Option<Duration>,
}

impl TrackCatalogEntry {
    /// Joined artist names for display ("A, B")
    pub fn artist_line(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> TrackCatalogEntry {
        TrackCatalogEntry {
            id: TrackId::new(id),
            title: "Test Song".to_string(),
            artists: vec![
                ArtistRef {
                    id: "a1".to_string(),
                    name: "First".to_string(),
                },
                ArtistRef {
                    id: "a2".to_string(),
                    name: "Second".to_string(),
                },
            ],
            artwork_url: None,
            media_url: format!("https://cdn.example.com/{id}.mp3"),
            duration_hint: Some(Duration::from_secs(180)),
        }
    }

    #[test]
    fn artist_line_joins_names() {
        assert_eq!(entry("t1").artist_line(), "First, Second");
    }

    #[test]
    fn track_id_is_transparent_in_serde() {
        let json = serde_json::to_string(&TrackId::new("t42")).unwrap();
        assert_eq!(json, "\"t42\"");

        let back: TrackId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "t42");
    }

    #[test]
    fn entry_round_trips_through_json() {
        let track = entry("t1");
        let json = serde_json::to_string(&track).unwrap();
        let back: TrackCatalogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, track);
    }
}
