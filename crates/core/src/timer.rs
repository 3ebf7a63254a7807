//! Fall timer - accumulates frame time until the next gravity step

/// Millisecond accumulator compared against the current fall interval
///
/// The remainder is discarded when the timer fires, so a long frame causes
/// at most one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallTimer {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl FallTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
        }
    }

    /// Add `elapsed_ms` and report whether the interval was reached
    ///
    /// Resets to zero when it fires.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Change the interval and restart accumulation
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
        self.elapsed_ms = 0;
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_at_interval() {
        let mut timer = FallTimer::new(500);
        assert!(!timer.advance(16));
        assert!(!timer.advance(483));
        assert_eq!(timer.elapsed_ms(), 499);
        assert!(timer.advance(1));
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn test_long_frame_fires_once() {
        let mut timer = FallTimer::new(100);
        assert!(timer.advance(1000));
        assert!(!timer.advance(0));
    }

    #[test]
    fn test_set_interval_restarts() {
        let mut timer = FallTimer::new(500);
        timer.advance(300);
        timer.set_interval(400);
        assert_eq!(timer.interval_ms(), 400);
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn test_reset() {
        let mut timer = FallTimer::new(500);
        timer.advance(250);
        timer.reset();
        assert_eq!(timer.elapsed_ms(), 0);
        assert_eq!(timer.interval_ms(), 500);
    }
}
