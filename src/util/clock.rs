use web_time::Instant;

/// Measures elapsed seconds since a start point, for feeding
/// [`Transition::frame_at`](crate::Transition::frame_at) from real
/// time.
///
/// Uses a cross-platform `Instant` (`performance.now()` on WASM), so
/// the same drive loop works in native and web hosts. Restart it
/// whenever a new transition begins.
#[derive(Debug, Clone, Copy)]
pub struct TransitionClock {
    started: Instant,
}

impl TransitionClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Reset the start point to now.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Seconds elapsed since the start point.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for TransitionClock {
    fn default() -> Self {
        Self::start()
    }
}
