/// Frame delta clock for the animation loop.
///
/// Holds the single piece of mutable loop state: the previous frame
/// timestamp. The clock is seeded with the timestamp observed when the
/// loop was registered, so the very first delta measures the gap between
/// registration and the first delivered frame.
pub struct FrameClock {
    prev: f64,
}

impl FrameClock {
    pub fn new(registered_at: f64) -> Self {
        Self { prev: registered_at }
    }

    /// Advance the clock to `now` and return the elapsed time since the
    /// previous tick, in the same unit the timestamps use (milliseconds
    /// for the browser's frame scheduler).
    pub fn tick(&mut self, now: f64) -> f64 {
        let delta = now - self.prev;
        self.prev = now;
        delta
    }

    /// Timestamp of the most recent tick (or of registration, before the
    /// first tick).
    pub fn last(&self) -> f64 {
        self.prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delta_is_measured_against_registration() {
        let mut clock = FrameClock::new(100.0);
        assert_eq!(clock.tick(116.5), 16.5);
        assert_eq!(clock.last(), 116.5);
    }

    #[test]
    fn deltas_are_exact_successive_differences() {
        let timestamps = [0.0, 16.0, 33.5, 50.0, 1050.0];
        let mut clock = FrameClock::new(timestamps[0]);
        for pair in timestamps.windows(2) {
            assert_eq!(clock.tick(pair[1]), pair[1] - pair[0]);
        }
    }

    #[test]
    fn stalled_scheduler_yields_zero_delta() {
        let mut clock = FrameClock::new(40.0);
        clock.tick(56.0);
        assert_eq!(clock.tick(56.0), 0.0);
    }
}
