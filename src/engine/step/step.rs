use crate::physics::{bounds, collision, integrator, MAX_ROTATION};

use super::{EngineCore, StepTimer};

/// Fixed sub-steps per rendered frame, for numerical stability.
const SUB_STEPS: u32 = 6;

/// A frame longer than this (tab was backgrounded, debugger paused) is
/// clamped so bodies cannot tunnel through each other or the floor.
const MAX_FRAME_MS: f64 = 64.0;

/// Advance the simulation by one frame.
///
/// Per sub-step: integrate -> resolve (position pass) -> bounds ->
/// resolve (impulse pass) -> bounds -> settle. After all sub-steps,
/// rotation drift is applied to every body that is not resting, and the
/// snapshot buffers are republished.
pub(super) fn step(core: &mut EngineCore, dt_ms: f64) {
    // Garbage dimensions or a garbage delta: skip the step entirely
    // rather than divide by zero or produce NaN positions.
    if core.width <= 0.0 || core.height <= 0.0 {
        return;
    }
    if !dt_ms.is_finite() || dt_ms <= 0.0 {
        return;
    }

    let dt_ms = dt_ms.min(MAX_FRAME_MS);
    core.clock_ms += dt_ms;
    let clock = core.clock_ms;

    let sub_delta = (dt_ms / 1000.0) as f32 / SUB_STEPS as f32;
    let dt_s = (dt_ms / 1000.0) as f32;
    let floor = bounds::floor_line(core.height);
    let (width, height, gravity) = (core.width, core.height, core.gravity);

    if core.perf_enabled {
        core.perf_stats.reset();
        core.perf_stats.body_count = core.bodies.len() as u32;
        core.perf_stats.sub_steps = SUB_STEPS;

        let mut timer = StepTimer::start();
        for _ in 0..SUB_STEPS {
            for body in core.bodies.iter_mut() {
                integrator::integrate(body, sub_delta, floor, gravity, clock);
            }
            core.perf_stats.integrate_ms += timer.lap();

            core.perf_stats.overlaps_resolved += collision::resolve(&mut core.bodies, false, clock);
            core.perf_stats.collide_ms += timer.lap();

            for body in core.bodies.iter_mut() {
                bounds::apply(body, width, height, clock);
            }
            core.perf_stats.bounds_ms += timer.lap();

            core.perf_stats.overlaps_resolved += collision::resolve(&mut core.bodies, true, clock);
            core.perf_stats.collide_ms += timer.lap();

            for body in core.bodies.iter_mut() {
                bounds::apply(body, width, height, clock);
            }
            bounds::settle_stacked(&mut core.bodies, clock);
            core.perf_stats.bounds_ms += timer.lap();
        }
        drift_rotation(core, dt_s, clock);

        core.perf_stats.resting_count = core.resting_count() as u32;
        core.perf_stats.step_ms = timer.total_ms();
    } else {
        for _ in 0..SUB_STEPS {
            for body in core.bodies.iter_mut() {
                integrator::integrate(body, sub_delta, floor, gravity, clock);
            }
            collision::resolve(&mut core.bodies, false, clock);
            for body in core.bodies.iter_mut() {
                bounds::apply(body, width, height, clock);
            }
            collision::resolve(&mut core.bodies, true, clock);
            for body in core.bodies.iter_mut() {
                bounds::apply(body, width, height, clock);
            }
            bounds::settle_stacked(&mut core.bodies, clock);
        }
        drift_rotation(core, dt_s, clock);
    }

    core.frame += 1;
    super::snapshot::publish(core);
}

/// Cosmetic rotation drift. Bodies that rested this frame (or earlier)
/// keep the angle they froze with.
fn drift_rotation(core: &mut EngineCore, dt_s: f32, clock_ms: f64) {
    for body in core.bodies.iter_mut() {
        if body.is_resting() || body.is_paused_at(clock_ms) {
            continue;
        }
        body.rotation = (body.rotation + body.spin * dt_s).clamp(-MAX_ROTATION, MAX_ROTATION);
    }
}
