//! Resona Core
//!
//! Shared catalog types for the Resona client.
//!
//! The playback engine and every UI surface (feed, playlists, chat
//! attachments, the bottom bar) exchange tracks using the types defined
//! here. They are plain, immutable value shapes: whichever collaborator
//! loaded a track owns it, the engine only references it.
//!
//! # Example
//!
//! ```rust
//! use resona_core::types::{ArtistRef, QueueOrigin, TrackCatalogEntry, TrackId};
//! use std::time::Duration;
//!
//! let track = TrackCatalogEntry {
//!     id: TrackId::new("t-1042"),
//!     title: "Golden Hour".to_string(),
//!     artists: vec![ArtistRef {
//!         id: "a-7".to_string(),
//!         name: "Mira Vale".to_string(),
//!     }],
//!     artwork_url: None,
//!     media_url: "https://cdn.resona.app/audio/t-1042.mp3".to_string(),
//!     duration_hint: Some(Duration::from_secs(214)),
//! };
//!
//! let origin = QueueOrigin::Playlist {
//!     id: "pl-3".to_string(),
//! };
//!
//! assert_eq!(track.artist_line(), "Mira Vale");
//! assert_eq!(origin.analytics_tag(), "playlist:pl-3");
//! ```

#![forbid(unsafe_code)]

pub mod types;

pub use types::{ArtistRef, QueueOrigin, TrackCatalogEntry, TrackId};
