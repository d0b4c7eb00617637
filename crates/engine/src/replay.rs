//! Deterministic playback cursor over a recorded location history.
//!
//! Single-threaded cooperative: the caller owns the timer and drives
//! [`ReplayCursor::tick`] at [`ReplayCursor::tick_interval`]. Manual
//! transitions (`seek`, `pause`, `play`) therefore apply atomically with
//! respect to ticks; there is no way for a tick to be in flight when one
//! lands.

use std::num::NonZeroU32;
use std::time::Duration;

/// Seekable, variable-speed cursor over a fixed-length entry sequence.
///
/// The sequence itself stays with the caller (it is already fetched and
/// immutable during playback); the cursor only tracks position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayCursor {
    len: usize,
    index: usize,
    playing: bool,
    speed: NonZeroU32,
}

impl ReplayCursor {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            playing: false,
            speed: NonZeroU32::MIN,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> NonZeroU32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: NonZeroU32) {
        self.speed = speed;
    }

    /// Period between autoplay ticks at the current speed
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed.get() as f64)
    }

    /// Start playback; restarting from the final frame rewinds first.
    pub fn play(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.index == self.len - 1 {
            self.index = 0;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.index = 0;
    }

    /// Jump to a frame, clamped to the sequence.
    ///
    /// Seeking always pauses so random access never races the autoplay timer.
    pub fn seek(&mut self, index: usize) {
        self.playing = false;
        if self.len > 0 {
            self.index = index.min(self.len - 1);
        }
    }

    /// One autoplay step. Returns true if the cursor advanced.
    ///
    /// Stops exactly at the final frame and never past it; reaching it ends
    /// playback (no looping).
    pub fn tick(&mut self) -> bool {
        if !self.playing || self.len == 0 {
            return false;
        }
        if self.index + 1 >= self.len {
            self.playing = false;
            return false;
        }
        self.index += 1;
        if self.index == self.len - 1 {
            self.playing = false;
        }
        true
    }

    /// Playback position in [0, 1]; 0 for sequences of one frame or fewer
    pub fn progress(&self) -> f64 {
        if self.len <= 1 {
            0.0
        } else {
            self.index as f64 / (self.len - 1) as f64
        }
    }
}
