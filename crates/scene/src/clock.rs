/// Per-frame wall-clock bookkeeping.
///
/// Time is injected as seconds since startup so the clock is testable
/// without sleeping; the application feeds it from `std::time::Instant`.
#[derive(Debug, Default)]
pub struct FrameClock {
    current: f64,
    last: f64,
    delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now` (seconds since startup) and derive the frame delta.
    pub fn advance(&mut self, now: f64) {
        self.current = now;
        self.delta = (self.current - self.last) as f32;
        self.last = self.current;
    }

    /// Seconds since startup as of the last `advance`.
    pub fn elapsed(&self) -> f32 {
        self.current as f32
    }

    /// Duration of the last frame in seconds.
    pub fn delta(&self) -> f32 {
        self.delta
    }
}

/// Rolling frames-per-second counter over one-second windows.
#[derive(Debug, Default)]
pub struct FpsCounter {
    window_start: f64,
    frames: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame at time `now`. Returns the completed window's frame
    /// count once at least a second has elapsed, then starts a new window.
    pub fn frame(&mut self, now: f64) -> Option<u32> {
        self.frames += 1;
        if now - self.window_start >= 1.0 {
            let fps = self.frames;
            self.frames = 0;
            self.window_start = now;
            Some(fps)
        } else {
            None
        }
    }
}
