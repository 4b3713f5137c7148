use super::init::sanitize;
use super::perf_stats::PerfStats;
use super::EngineCore;

pub(super) fn set_container(core: &mut EngineCore, width: f32, height: f32) {
    core.width = sanitize(width);
    core.height = sanitize(height);
}

pub(super) fn set_gravity(core: &mut EngineCore, gravity: f32) {
    if gravity.is_finite() && gravity > 0.0 {
        core.gravity = gravity;
    }
}

pub(super) fn enable_perf_metrics(core: &mut EngineCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &EngineCore) -> PerfStats {
    core.perf_stats.clone()
}
