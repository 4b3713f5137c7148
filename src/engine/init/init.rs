use crate::physics::GRAVITY;

use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn create_engine_core(width: f32, height: f32) -> EngineCore {
    EngineCore {
        bodies: Vec::new(),
        width: sanitize(width),
        height: sanitize(height),
        gravity: GRAVITY,
        clock_ms: 0.0,
        frame: 0,
        rng_state: 0xDEAD_BEEF,
        drag: None,
        snapshot: Vec::new(),
        ids: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Garbage dimensions become zero, which makes `step` a no-op instead of
/// a NaN factory.
pub(super) fn sanitize(dim: f32) -> f32 {
    if dim.is_finite() && dim > 0.0 {
        dim
    } else {
        0.0
    }
}
