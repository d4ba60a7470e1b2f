//! Optimistic like/unlike with rollback
//!
//! Toggling a like flips the visible state immediately and fires the
//! library command in the background. The host reports the command's
//! outcome through [`LikeSync::resolve`]; a failure rolls the visible
//! state back and surfaces a notification. Each toggle also arms a short
//! toast whose remaining lifetime is counted down by [`LikeSync::tick`].

use crate::events::PlayerEvent;
use crate::types::LikeAction;
use resona_core::TrackId;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

/// Saved-tracks library the engine toggles likes against
///
/// `save`/`unsave` are fire-and-forget commands; the host later calls
/// [`LikeSync::resolve`] with the outcome. `is_saved` reflects the last
/// state the backend confirmed.
pub trait LibraryService: Send {
    fn is_saved(&self, track_id: &TrackId) -> bool;
    fn save(&mut self, track_id: &TrackId);
    fn unsave(&mut self, track_id: &TrackId);
}

/// Optimistic overlay over a [`LibraryService`]
pub struct LikeSync {
    library: Box<dyn LibraryService>,
    /// Locally asserted saved-state, shadowing the library until resolved
    overlay: HashMap<TrackId, bool>,
    /// Desired state of each unresolved command
    in_flight: HashMap<TrackId, bool>,
    last_action: Option<LikeAction>,
    toast_remaining: Option<Duration>,
    toast_lifetime: Duration,
    pending_events: Vec<PlayerEvent>,
}

impl LikeSync {
    pub fn new(library: Box<dyn LibraryService>, toast_lifetime: Duration) -> Self {
        Self {
            library,
            overlay: HashMap::new(),
            in_flight: HashMap::new(),
            last_action: None,
            toast_remaining: None,
            toast_lifetime,
            pending_events: Vec::new(),
        }
    }

    /// Saved-state as the UI should render it right now
    pub fn is_saved(&self, track_id: &TrackId) -> bool {
        self.overlay
            .get(track_id)
            .copied()
            .unwrap_or_else(|| self.library.is_saved(track_id))
    }

    /// Action behind the toast currently showing, if any
    pub fn active_toast(&self) -> Option<LikeAction> {
        self.toast_remaining.and(self.last_action)
    }

    /// Flip the like state of `track_id` optimistically
    pub fn toggle(&mut self, track_id: &TrackId) {
        let desired = !self.is_saved(track_id);

        self.overlay.insert(track_id.clone(), desired);
        self.in_flight.insert(track_id.clone(), desired);

        if desired {
            self.library.save(track_id);
        } else {
            self.library.unsave(track_id);
        }

        let action = if desired {
            LikeAction::Liked
        } else {
            LikeAction::Unliked
        };
        // A rapid re-toggle replaces the previous toast outright
        self.last_action = Some(action);
        self.toast_remaining = Some(self.toast_lifetime);
        self.pending_events.push(PlayerEvent::LikeToast {
            action,
            track_id: track_id.clone(),
        });
    }

    /// Report the outcome of the unresolved command for `track_id`
    ///
    /// A rapid re-toggle replaces the tracked command, so only the latest
    /// desired state is ever confirmed or rolled back.
    ///
    /// Success confirms the optimistic state; failure rolls it back and
    /// emits a notification. Unknown ids are ignored.
    pub fn resolve(&mut self, track_id: &TrackId, success: bool) {
        let Some(desired) = self.in_flight.remove(track_id) else {
            return;
        };

        if success {
            // The backend caught up; the overlay entry is now redundant
            // but harmless, drop it so library state is authoritative again
            self.overlay.remove(track_id);
            return;
        }

        warn!(track = %track_id, "like command failed, rolling back");
        self.overlay.insert(track_id.clone(), !desired);
        self.pending_events.push(PlayerEvent::Notification {
            message: if desired {
                "Couldn't save this track".to_string()
            } else {
                "Couldn't remove this track".to_string()
            },
        });
    }

    /// Advance the toast clock
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(remaining) = self.toast_remaining {
            if elapsed >= remaining {
                self.toast_remaining = None;
                self.last_action = None;
            } else {
                self.toast_remaining = Some(remaining - elapsed);
            }
        }
    }

    /// Drain all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
