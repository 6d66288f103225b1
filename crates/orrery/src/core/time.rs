/// Monotonic frame clock.
/// Turns the host's variable frame deltas into a sanitized delta and a
/// running elapsed time. All motion and camera timing is keyed off these
/// values, never off frame counts.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Seconds accumulated since creation.
    elapsed: f64,
    /// Delta applied by the most recent `advance`.
    delta: f64,
    /// Upper bound for a single delta.
    max_delta: f64,
}

impl Clock {
    pub fn new(max_delta: f64) -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            max_delta: max_delta.max(0.0),
        }
    }

    /// Add one frame's time. Returns the delta actually applied.
    /// Negative and non-finite deltas count as zero.
    pub fn advance(&mut self, frame_dt: f64) -> f64 {
        let dt = if frame_dt.is_finite() { frame_dt.max(0.0) } else { 0.0 };
        // Cap so a suspended tab does not fling bodies across their orbits
        self.delta = dt.min(self.max_delta);
        self.elapsed += self.delta;
        self.delta
    }

    /// Seconds elapsed since creation.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The most recent delta.
    pub fn delta(&self) -> f64 {
        self.delta
    }
}
