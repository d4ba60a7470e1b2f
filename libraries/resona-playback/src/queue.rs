//! Queue and traversal-order management
//!
//! Pure ordering logic, no I/O. Holds the canonical track list, the current
//! canonical index, the shuffle permutation, and the repeat mode. Shuffle
//! only changes traversal order; the canonical index of every track is
//! fixed for the lifetime of the queue.

use crate::error::{PlayerError, Result};
use crate::shuffle::ShuffleOrder;
use crate::types::{AdvanceKind, Direction, RepeatMode};
use rand::thread_rng;
use resona_core::{QueueOrigin, TrackCatalogEntry};

/// Ordered track list plus traversal state
#[derive(Debug)]
pub struct QueueManager {
    tracks: Vec<TrackCatalogEntry>,
    origin: QueueOrigin,

    /// Canonical index of the current track (meaningless while empty)
    current: usize,

    /// Whether shuffle traversal is enabled
    shuffled: bool,

    /// Traversal permutation; present while shuffled and non-empty
    shuffle_order: Option<ShuffleOrder>,

    repeat: RepeatMode,
}

impl QueueManager {
    /// Create an empty queue
    pub fn new(shuffle: bool, repeat: RepeatMode) -> Self {
        Self {
            tracks: Vec::new(),
            origin: QueueOrigin::Single,
            current: 0,
            shuffled: shuffle,
            shuffle_order: None,
            repeat,
        }
    }

    /// Replace the queue wholesale
    ///
    /// Rejects empty input and out-of-range start positions before any
    /// state changes. Regenerates the shuffle permutation anchored at
    /// `start_index` when shuffle is on.
    pub fn replace(
        &mut self,
        tracks: Vec<TrackCatalogEntry>,
        start_index: usize,
        origin: QueueOrigin,
    ) -> Result<()> {
        if tracks.is_empty() {
            return Err(PlayerError::InvalidQueue("track list is empty".to_string()));
        }
        if start_index >= tracks.len() {
            return Err(PlayerError::InvalidQueue(format!(
                "start index {start_index} out of range for {} tracks",
                tracks.len()
            )));
        }

        self.tracks = tracks;
        self.origin = origin;
        self.current = start_index;

        self.shuffle_order = self.shuffled.then(|| {
            ShuffleOrder::generate(self.tracks.len(), start_index, &mut thread_rng())
        });

        Ok(())
    }

    /// Drop all tracks and traversal state
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.origin = QueueOrigin::Single;
        self.current = 0;
        self.shuffle_order = None;
    }

    /// Compute and commit the next canonical index
    ///
    /// Traverses the shuffle permutation when shuffled, sequential order
    /// otherwise. Wraps around the ends only under [`RepeatMode::All`].
    /// Repeat-one pins the index for automatic `next` only; a manual step
    /// always moves. Returns `None` (without moving) when traversal has
    /// nowhere to go.
    pub fn advance(&mut self, direction: Direction, kind: AdvanceKind) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }

        if self.repeat == RepeatMode::One
            && kind == AdvanceKind::Auto
            && direction == Direction::Next
        {
            return Some(self.current);
        }

        let next = self.neighbor(self.current, direction)?;
        self.current = next;
        Some(next)
    }

    /// Jump directly to a canonical index (row click within the queue)
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Err(PlayerError::InvalidQueue(format!(
                "index {index} out of range for {} tracks",
                self.tracks.len()
            )));
        }
        self.current = index;
        Ok(())
    }

    /// Neighbor of `index` in traversal order, honoring repeat-all wrap
    fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let len = self.tracks.len();
        let wrap = self.repeat == RepeatMode::All;

        let step = |pos: usize| -> Option<usize> {
            match direction {
                Direction::Next => {
                    if pos + 1 < len {
                        Some(pos + 1)
                    } else if wrap {
                        Some(0)
                    } else {
                        None
                    }
                }
                Direction::Prev => {
                    if pos > 0 {
                        Some(pos - 1)
                    } else if wrap {
                        Some(len - 1)
                    } else {
                        None
                    }
                }
            }
        };

        match &self.shuffle_order {
            Some(order) => {
                let pos = order.position_of(index)?;
                order.index_at(step(pos)?)
            }
            None => step(index),
        }
    }

    /// Toggle shuffle without moving playback
    ///
    /// Enabling regenerates the permutation anchored at the current index;
    /// disabling simply resumes sequential traversal from wherever
    /// playback is.
    pub fn toggle_shuffle(&mut self) {
        self.shuffled = !self.shuffled;
        self.shuffle_order = (self.shuffled && !self.tracks.is_empty()).then(|| {
            ShuffleOrder::generate(self.tracks.len(), self.current, &mut thread_rng())
        });
    }

    /// Cycle repeat mode: off -> all -> one -> off
    pub fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.cycled();
    }

    /// Whether shuffle traversal is enabled
    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Current canonical index, if the queue is non-empty
    pub fn current_index(&self) -> Option<usize> {
        (!self.tracks.is_empty()).then_some(self.current)
    }

    /// Current track, if any
    pub fn current_track(&self) -> Option<&TrackCatalogEntry> {
        self.tracks.get(self.current)
    }

    /// Track at a canonical index
    pub fn track_at(&self, index: usize) -> Option<&TrackCatalogEntry> {
        self.tracks.get(index)
    }

    /// Queue origin (analytics only)
    pub fn origin(&self) -> &QueueOrigin {
        &self.origin
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the queue holds no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether an automatic advance from the current track can move on
    pub fn has_next(&self) -> bool {
        if self.tracks.is_empty() {
            return false;
        }
        self.repeat == RepeatMode::One || self.neighbor(self.current, Direction::Next).is_some()
    }

    /// Whether a manual `prev` has somewhere to go
    pub fn has_previous(&self) -> bool {
        !self.tracks.is_empty() && self.neighbor(self.current, Direction::Prev).is_some()
    }

    /// Tracks after the current one in traversal order, without wrapping
    ///
    /// Feeds the "up next" panel. Under shuffle this follows the
    /// permutation, not the canonical order.
    pub fn upcoming(&self) -> Vec<&TrackCatalogEntry> {
        if self.tracks.is_empty() {
            return Vec::new();
        }

        match &self.shuffle_order {
            Some(order) => {
                let Some(pos) = order.position_of(self.current) else {
                    return Vec::new();
                };
                (pos + 1..order.len())
                    .filter_map(|p| order.index_at(p))
                    .filter_map(|i| self.tracks.get(i))
                    .collect()
            }
            None => self.tracks[self.current + 1..].iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resona_core::{ArtistRef, TrackId};
    use std::time::Duration;

    fn track(id: &str) -> TrackCatalogEntry {
        TrackCatalogEntry {
            id: TrackId::new(id),
            title: format!("Track {id}"),
            artists: vec![ArtistRef {
                id: "a1".to_string(),
                name: "Test Artist".to_string(),
            }],
            artwork_url: None,
            media_url: format!("https://cdn.example.com/{id}.mp3"),
            duration_hint: Some(Duration::from_secs(180)),
        }
    }

    fn tracks(n: usize) -> Vec<TrackCatalogEntry> {
        (0..n).map(|i| track(&i.to_string())).collect()
    }

    fn queue_with(n: usize, start: usize, repeat: RepeatMode) -> QueueManager {
        let mut queue = QueueManager::new(false, repeat);
        queue
            .replace(tracks(n), start, QueueOrigin::Single)
            .unwrap();
        queue
    }

    #[test]
    fn replace_rejects_empty_list() {
        let mut queue = QueueManager::new(false, RepeatMode::Off);
        let err = queue.replace(Vec::new(), 0, QueueOrigin::Single);
        assert!(matches!(err, Err(PlayerError::InvalidQueue(_))));
        assert!(queue.is_empty());
    }

    #[test]
    fn replace_rejects_out_of_range_start() {
        let mut queue = QueueManager::new(false, RepeatMode::Off);
        let err = queue.replace(tracks(3), 3, QueueOrigin::Single);
        assert!(matches!(err, Err(PlayerError::InvalidQueue(_))));
    }

    #[test]
    fn sequential_next_stops_at_end_without_repeat() {
        let mut queue = queue_with(3, 1, RepeatMode::Off);

        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Manual), Some(2));
        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Manual), None);
        assert_eq!(queue.current_index(), Some(2));
    }

    #[test]
    fn repeat_all_wraps_both_ends() {
        let mut queue = queue_with(3, 2, RepeatMode::All);

        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Manual), Some(0));
        assert_eq!(queue.advance(Direction::Prev, AdvanceKind::Manual), Some(2));
    }

    #[test]
    fn full_cycle_with_repeat_all_returns_to_start() {
        let mut queue = queue_with(5, 2, RepeatMode::All);

        for _ in 0..5 {
            queue.advance(Direction::Next, AdvanceKind::Manual).unwrap();
        }
        assert_eq!(queue.current_index(), Some(2));
    }

    #[test]
    fn repeat_one_pins_auto_next_but_not_manual() {
        let mut queue = queue_with(3, 0, RepeatMode::Off);
        queue.cycle_repeat(); // All
        queue.cycle_repeat(); // One

        // Natural ended: same index
        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Auto), Some(0));
        // Manual skip: moves
        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Manual), Some(1));
    }

    #[test]
    fn single_track_repeat_all_behaves_like_repeat_one() {
        let mut queue = queue_with(1, 0, RepeatMode::All);
        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Auto), Some(0));
        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Manual), Some(0));
    }

    #[test]
    fn toggle_shuffle_keeps_current_index() {
        let mut queue = queue_with(8, 5, RepeatMode::Off);

        queue.toggle_shuffle();
        assert!(queue.is_shuffled());
        assert_eq!(queue.current_index(), Some(5));

        queue.toggle_shuffle();
        assert!(!queue.is_shuffled());
        assert_eq!(queue.current_index(), Some(5));
    }

    #[test]
    fn shuffle_off_restores_sequential_traversal() {
        let mut queue = queue_with(6, 2, RepeatMode::Off);

        queue.toggle_shuffle();
        queue.toggle_shuffle();

        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Manual), Some(3));
        assert_eq!(queue.advance(Direction::Next, AdvanceKind::Manual), Some(4));
    }

    #[test]
    fn shuffled_traversal_visits_every_track_once() {
        let mut queue = queue_with(10, 0, RepeatMode::Off);
        queue.toggle_shuffle();

        let mut visited = vec![queue.current_index().unwrap()];
        while let Some(i) = queue.advance(Direction::Next, AdvanceKind::Manual) {
            visited.push(i);
        }

        visited.sort_unstable();
        assert_eq!(visited, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn shuffled_prev_retraces_traversal() {
        let mut queue = queue_with(10, 4, RepeatMode::Off);
        queue.toggle_shuffle();

        if queue.advance(Direction::Next, AdvanceKind::Manual).is_some() {
            let back = queue.advance(Direction::Prev, AdvanceKind::Manual);
            assert_eq!(back, Some(4));
        }
    }

    #[test]
    fn upcoming_follows_traversal_order() {
        let queue = queue_with(5, 1, RepeatMode::Off);
        let upcoming: Vec<&str> = queue.upcoming().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(upcoming, vec!["2", "3", "4"]);
    }

    #[test]
    fn upcoming_under_shuffle_covers_remaining_tracks() {
        let mut queue = queue_with(7, 3, RepeatMode::Off);
        queue.toggle_shuffle();

        // The anchor keeps its own traversal position, so the positions
        // after it hold the remaining traversal
        let upcoming = queue.upcoming();
        assert_eq!(upcoming.len(), 3);
    }

    #[test]
    fn select_jumps_to_canonical_index() {
        let mut queue = queue_with(4, 0, RepeatMode::Off);
        queue.select(3).unwrap();
        assert_eq!(queue.current_index(), Some(3));
        assert_eq!(queue.track_at(3).map(|t| t.id.as_str()), Some("3"));
        assert!(queue.select(4).is_err());
    }

    #[test]
    fn has_next_and_previous_respect_repeat() {
        let mut queue = queue_with(2, 1, RepeatMode::Off);
        assert!(!queue.has_next());
        assert!(queue.has_previous());

        queue.cycle_repeat(); // All
        assert!(queue.has_next());

        queue.select(0).unwrap();
        assert!(queue.has_previous(), "repeat-all wraps backwards too");
        queue.cycle_repeat(); // One
        queue.cycle_repeat(); // Off
        assert!(!queue.has_previous());
    }

    #[test]
    fn clear_empties_everything() {
        let mut queue = queue_with(3, 1, RepeatMode::Off);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.current_index(), None);
        assert!(queue.current_track().is_none());
    }

    #[test]
    fn replace_regenerates_shuffle_anchor() {
        let mut queue = queue_with(5, 0, RepeatMode::Off);
        queue.toggle_shuffle();

        queue.replace(tracks(8), 6, QueueOrigin::Single).unwrap();
        assert!(queue.is_shuffled());
        assert_eq!(queue.current_index(), Some(6));

        // Full shuffled traversal from the new anchor still covers the queue
        let mut visited = vec![6];
        while let Some(i) = queue.advance(Direction::Next, AdvanceKind::Manual) {
            visited.push(i);
        }
        visited.sort_unstable();
        assert!(visited.len() <= 8);
        assert!(visited.iter().all(|&i| i < 8));
    }
}
