//! Progress, duration, and buffering derived from the media event stream
//!
//! Read-only projection of the output's reported timeline, plus the
//! seek-in-flight guard: while a seek is pending, natural time updates are
//! suppressed so a dragged progress bar never snaps back to a stale
//! position reported by the output.

use crate::output::MediaEvent;
use std::time::Duration;

/// Natural time updates within this distance of a pending seek target are
/// taken as confirmation that the seek landed.
const SEEK_CONFIRM_WINDOW: Duration = Duration::from_millis(500);

/// Derived playback timeline state
#[derive(Debug, Default)]
pub struct ProgressTracker {
    position: Duration,
    duration: Option<Duration>,
    buffered_to: Duration,

    /// Pending seek target; while set, natural time updates are suppressed
    seek_target: Option<Duration>,
}

impl ProgressTracker {
    /// Create a tracker with an empty timeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything (new source, teardown)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current position
    ///
    /// While a seek is in flight this reports the seek target, which is
    /// what the user asked for and what the UI should show.
    pub fn position(&self) -> Duration {
        self.seek_target.unwrap_or(self.position)
    }

    /// Source duration, once the output has reported it
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Buffered fraction of the source (0..=1); 0 while duration is unknown
    pub fn buffered_fraction(&self) -> f32 {
        match self.duration {
            Some(duration) if !duration.is_zero() => {
                (self.buffered_to.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Whether a seek is awaiting confirmation from the output
    pub fn is_seeking(&self) -> bool {
        self.seek_target.is_some()
    }

    /// Begin a seek, clamping the target to the known timeline
    ///
    /// Returns the clamped target the session should hand to the output.
    pub fn begin_seek(&mut self, target: Duration) -> Duration {
        let clamped = match self.duration {
            Some(duration) => target.min(duration),
            None => target,
        };
        self.seek_target = Some(clamped);
        clamped
    }

    /// Fold one media event into the timeline
    pub fn on_event(&mut self, event: &MediaEvent) {
        match event {
            MediaEvent::TimeUpdate { position } => {
                match self.seek_target {
                    Some(target) => {
                        // Ignore stale reports until the output catches up
                        // with the requested position
                        let delta = if *position > target {
                            *position - target
                        } else {
                            target - *position
                        };
                        if delta <= SEEK_CONFIRM_WINDOW {
                            self.seek_target = None;
                            self.position = *position;
                        }
                    }
                    None => self.position = *position,
                }
            }
            MediaEvent::SeekCompleted { position } => {
                self.seek_target = None;
                self.position = *position;
            }
            MediaEvent::DurationChanged { duration } => {
                self.duration = Some(*duration);
            }
            MediaEvent::BufferedUpdate { buffered_to } => {
                self.buffered_to = *buffered_to;
            }
            MediaEvent::Ended => {
                if let Some(duration) = self.duration {
                    self.position = duration;
                }
                self.seek_target = None;
            }
            // Load outcomes and failures are session policy, not timeline
            MediaEvent::SourceReady { .. } | MediaEvent::Failed { .. } => {}
        }
    }
}
