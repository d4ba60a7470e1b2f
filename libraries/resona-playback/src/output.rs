//! Platform-agnostic media output trait
//!
//! Abstracts the single underlying audio element the application owns.
//! The host wires a real output (an HTML media element, a native player)
//! behind this trait and feeds its event stream back into the session as
//! [`MediaEvent`]s, so the state machine never depends on a particular
//! runtime's callback ordering.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monotonically increasing token identifying one load request
///
/// Every `load` call carries a fresh generation; events answering a load
/// echo it back so the session can discard answers to superseded loads by
/// identity rather than by timing.
pub type LoadGeneration = u64;

/// Platform-agnostic media output
///
/// Exclusively owned by the playback session; no other component may drive
/// it. All calls are commands: outcomes come back asynchronously through
/// the [`MediaEvent`] stream the host pumps into the session.
pub trait MediaOutput: Send {
    /// Begin loading a new source, superseding any load in flight
    fn load(&mut self, media_url: &str, generation: LoadGeneration);

    /// Start or resume audio
    fn play(&mut self);

    /// Pause audio, keeping position
    fn pause(&mut self);

    /// Seek within the current source
    fn seek(&mut self, position: Duration);

    /// Set output gain (0.0-1.0)
    fn set_gain(&mut self, gain: f32);

    /// Release the source and stop all event delivery
    fn teardown(&mut self);
}

/// Events reported by the media output
///
/// Produced by the host from the output's native callbacks (time update,
/// buffering progress, ended, error) and consumed synchronously by the
/// session on each pump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// The source for the given load generation is ready to play
    SourceReady { generation: LoadGeneration },

    /// Natural playback position report
    TimeUpdate { position: Duration },

    /// The output learned (or revised) the source duration
    DurationChanged { duration: Duration },

    /// Contiguous buffered range from the start of the source
    BufferedUpdate { buffered_to: Duration },

    /// A previously requested seek landed
    SeekCompleted { position: Duration },

    /// The current source played to its end
    Ended,

    /// Loading or decoding failed
    ///
    /// `generation` is present when the failure answers a specific load;
    /// `None` means the already-playing source broke mid-stream.
    Failed {
        generation: Option<LoadGeneration>,
        message: String,
    },
}
