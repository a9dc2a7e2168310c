/// Integrates raw mouse-motion deltas into an unbounded virtual cursor
/// position and reports per-event look deltas.
///
/// Raw deltas rather than window cursor positions: a grabbed cursor clamps
/// at the window border (or freezes entirely under a locked grab), which
/// would cap total look travel at the window size. The virtual position has
/// no such bound, so rotation continues as long as the mouse moves.
///
/// The very first motion event only seeds the reference position; every
/// later event yields the delta since the previous one, with Y inverted so
/// positive means "look up" (screen Y grows downward).
#[derive(Debug, Default)]
pub struct CursorTracker {
    position: (f32, f32),
    last: Option<(f32, f32)>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one raw motion delta and return the look delta since the
    /// previous event, or `None` for the seeding sample.
    pub fn motion(&mut self, dx: f32, dy: f32) -> Option<(f32, f32)> {
        self.position.0 += dx;
        self.position.1 += dy;
        let delta = self
            .last
            .map(|(lx, ly)| (self.position.0 - lx, ly - self.position.1));
        self.last = Some(self.position);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_motion_seeds_the_reference() {
        let mut tracker = CursorTracker::new();
        assert_eq!(tracker.motion(400.0, 300.0), None);
        assert_eq!(tracker.motion(10.0, 0.0), Some((10.0, 0.0)));
    }

    #[test]
    fn y_delta_is_inverted() {
        let mut tracker = CursorTracker::new();
        tracker.motion(0.0, 0.0);
        // Mouse moved "down" => negative (look-down) delta.
        assert_eq!(tracker.motion(0.0, 25.0), Some((0.0, -25.0)));
    }

    #[test]
    fn look_travel_is_unbounded() {
        // The virtual position keeps growing past any window size, so the
        // deltas never saturate the way a border-clamped cursor would.
        let mut tracker = CursorTracker::new();
        tracker.motion(0.0, 0.0);
        let mut travelled = 0.0;
        for _ in 0..2_000 {
            let (dx, _) = tracker.motion(5.0, 0.0).unwrap();
            travelled += dx;
        }
        assert_eq!(travelled, 10_000.0);
    }
}
