//! Animation state machines
//!
//! Building blocks for sprite animation: a frame-rate-decoupling counter,
//! the invincibility flicker, and the explosion frame sequence. Game code
//! composes these with its own image tables; nothing here touches images
//! directly.

/// Which image a flickering sprite should show this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickerFrame {
    /// Show the sprite's master image
    Visible,
    /// Show the empty image
    Hidden,
}

/// Per-frame counter that gates animation advance, decoupling animation rate
/// from the tick rate.
///
/// Two gate styles exist and both are used: `ready()` is a threshold test
/// that the caller resets, and `step()` is a strict-equality gate that
/// auto-resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicker {
    /// Ticks counted since the last reset
    pub pause: u32,
    /// Gate threshold in ticks
    pub delay: u32,
}

impl FrameTicker {
    /// Create a ticker gating every `delay` ticks
    pub fn new(delay: u32) -> Self {
        Self { pause: 0, delay }
    }

    /// Count one tick
    pub fn advance(&mut self) {
        self.pause += 1;
    }

    /// Threshold gate: true once `delay` ticks have accumulated; the counter
    /// keeps running until the caller resets it
    pub fn ready(&self) -> bool {
        self.pause >= self.delay
    }

    /// Reset the counter
    pub fn reset(&mut self) {
        self.pause = 0;
    }

    /// Equality gate: count one tick and fire exactly when the counter hits
    /// `delay`, auto-resetting
    pub fn step(&mut self) -> bool {
        self.advance();
        if self.pause == self.delay {
            self.reset();
            true
        } else {
            false
        }
    }
}

/// Number of hidden frames in one invincibility window
pub const FLICKER_CYCLES: u32 = 12;

/// Invincibility flicker: alternates the sprite between visible and hidden
/// for a fixed count of cycles, then clears itself.
///
/// The cycle counter is deliberately left at 1 after the terminating cycle,
/// so the window after the first is one cycle shorter. Collision checks must
/// be suppressed by the owner while `active` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flicker {
    ticker: FrameTicker,
    cycles: u32,
    /// Whether the invincibility window is currently running
    pub active: bool,
}

impl Flicker {
    /// Create an inactive flicker gating every `delay` ticks
    pub fn new(delay: u32) -> Self {
        Self {
            ticker: FrameTicker::new(delay),
            cycles: 0,
            active: false,
        }
    }

    /// Begin an invincibility window; counters carry over from the previous
    /// window rather than resetting
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Advance one tick while active and report which image to show
    pub fn tick(&mut self) -> FlickerFrame {
        self.ticker.advance();
        if self.ticker.pause == self.ticker.delay {
            if self.cycles == FLICKER_CYCLES {
                self.active = false;
                self.cycles = 0;
                self.ticker.reset();
            }
            self.ticker.reset();
            self.cycles += 1;
            FlickerFrame::Hidden
        } else {
            FlickerFrame::Visible
        }
    }
}

/// Explosion frame sequence: steps through an ordered set of frames, one
/// frame per `delay` ticks, and reports completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explosion {
    ticker: FrameTicker,
    /// Index of the next frame to show
    pub frame: usize,
    frame_count: usize,
}

impl Explosion {
    /// Create a stepper over `frame_count` frames, advancing every `delay`
    /// ticks
    pub fn new(delay: u32, frame_count: usize) -> Self {
        Self {
            ticker: FrameTicker::new(delay),
            frame: 0,
            frame_count,
        }
    }

    /// Rewind to the first frame
    pub fn restart(&mut self) {
        self.frame = 0;
        self.ticker.reset();
    }

    /// Count one tick; when the gate fires, returns the index of the frame
    /// to display and moves past it
    pub fn step(&mut self) -> Option<usize> {
        if self.ticker.step() && self.frame < self.frame_count {
            let current = self.frame;
            self.frame += 1;
            Some(current)
        } else {
            None
        }
    }

    /// Whether every frame has been displayed
    pub fn finished(&self) -> bool {
        self.frame >= self.frame_count
    }
}
