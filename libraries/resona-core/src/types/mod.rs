mod origin;
mod track;

pub use origin::QueueOrigin;
pub use track::{ArtistRef, TrackCatalogEntry, TrackId};
