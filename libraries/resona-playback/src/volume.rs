//! Volume state
//!
//! The media output accepts a 0.0-1.0 gain directly, so this module only
//! owns clamping and the mute/unmute toggle (mute preserves the level the
//! user had set).

/// Volume level with mute state
#[derive(Debug, Clone)]
pub struct Volume {
    /// Level in 0.0-1.0
    level: f32,

    /// Mute state (preserves level)
    muted: bool,
}

impl Volume {
    /// Create a volume controller, clamping the initial level
    pub fn new(level: f32) -> Self {
        Self {
            level: level.clamp(0.0, 1.0),
            muted: false,
        }
    }

    /// Set level, clamped to [0, 1]
    pub fn set_level(&mut self, level: f32) {
        self.level = level.clamp(0.0, 1.0);
    }

    /// Current level (0.0-1.0), regardless of mute
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Toggle mute, preserving the level
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effective gain for the output: 0.0 when muted, else the level
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}
