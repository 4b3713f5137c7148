#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Millisecond stopwatch for per-step metrics. Wasm builds read
/// `Date.now()`; native builds use a monotonic `Instant`, so the same
/// pipeline code times both.
pub(crate) struct StepTimer {
    #[cfg(target_arch = "wasm32")]
    origin_ms: f64,
    #[cfg(target_arch = "wasm32")]
    lap_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    origin: Instant,
    #[cfg(not(target_arch = "wasm32"))]
    lap: Instant,
}

impl StepTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let now = js_sys::Date::now();
            StepTimer { origin_ms: now, lap_ms: now }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let now = Instant::now();
            StepTimer { origin: now, lap: now }
        }
    }

    /// Milliseconds since the previous lap (or since `start`), restarting
    /// the lap clock. Attributes contiguous pipeline sections with a
    /// single timer instead of one timer per section.
    pub(crate) fn lap(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            let now = js_sys::Date::now();
            let elapsed = now - self.lap_ms;
            self.lap_ms = now;
            elapsed
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let now = Instant::now();
            let elapsed = now.duration_since(self.lap).as_secs_f64() * 1000.0;
            self.lap = now;
            elapsed
        }
    }

    /// Milliseconds since `start`, independent of laps.
    pub(crate) fn total_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.origin_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}
