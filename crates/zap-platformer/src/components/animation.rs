//! Frame-index animation driven by a repeating `Timer`.
//!
//! The core only advances elapsed time and exposes a frame index; picking
//! the matching texture region is the renderer's job.

use serde::{Deserialize, Serialize};

use crate::core::time::Timer;
use crate::error::ConfigError;

/// Serializable description of an animation clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Number of frames in the strip.
    pub frames: u32,
    /// Seconds for one full pass through all frames.
    pub length: f32,
}

impl AnimationSpec {
    pub const fn new(frames: u32, length: f32) -> Self {
        Self { frames, length }
    }

    /// Build a fresh animation from this spec.
    pub fn build(&self) -> Result<Animation, ConfigError> {
        Animation::new(self.frames, self.length)
    }
}

/// A looping frame sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    timer: Timer,
    frame_count: u32,
}

impl Animation {
    pub fn new(frame_count: u32, length: f32) -> Result<Self, ConfigError> {
        if frame_count == 0 {
            return Err(ConfigError::EmptyAnimation);
        }
        Ok(Self {
            timer: Timer::new(length)?,
            frame_count,
        })
    }

    /// Advance by `dt` seconds. Returns true when a full pass completed.
    pub fn step(&mut self, dt: f32) -> bool {
        self.timer.step(dt)
    }

    /// Current frame index, always in `[0, frame_count)`.
    pub fn current_frame(&self) -> u32 {
        let frame = (self.timer.time() / self.timer.length() * self.frame_count as f32) as u32;
        frame.min(self.frame_count - 1)
    }

    /// True once at least one full pass has played since the last reset.
    pub fn is_done(&self) -> bool {
        self.timer.is_timeout()
    }

    /// Restart from frame 0 and clear the done flag.
    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn length(&self) -> f32 {
        self.timer.length()
    }
}
