//! Engine - owns the body registry and drives the per-frame pipeline
//!
//! The core orchestrates only; the actual physics lives in `physics/`.
//! One `step(dt_ms)` call per animation frame runs the fixed sub-step
//! pipeline (integrate -> resolve -> bounds -> resolve -> bounds) and
//! republishes the snapshot buffer the renderer and hit-testing read.

use crate::physics::Body;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "registry/reconcile.rs"]
mod reconcile;
#[path = "step/step.rs"]
mod step;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
mod facade;

pub use facade::Engine;
pub use perf_stats::PerfStats;
pub use snapshot::SNAPSHOT_STRIDE;

use perf_timer::StepTimer;

struct DragState {
    id: u32,
    started_ms: f64,
}

/// The simulation core. Owned exclusively by the facade; exposed to the
/// render/hit-test layer only as the read-only snapshot between steps.
pub struct EngineCore {
    bodies: Vec<Body>,
    width: f32,
    height: f32,
    gravity: f32,

    // State
    clock_ms: f64,
    frame: u64,
    rng_state: u32,
    drag: Option<DragState>,

    // Published transforms (stride SNAPSHOT_STRIDE per body) and the
    // row-aligned id buffer
    snapshot: Vec<f32>,
    ids: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Create an engine for a container of the given size (px).
    pub fn new(width: f32, height: f32) -> Self {
        init::create_engine_core(width, height)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn clock_ms(&self) -> f64 { self.clock_ms }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn resting_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_resting()).count()
    }

    /// The UI reports container resizes here. Tracked bodies keep their
    /// state; the next bounds pass re-clamps them into the new box.
    pub fn set_container(&mut self, width: f32, height: f32) {
        settings::set_container(self, width, height);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Reconcile the registry against the UI's descriptor list (JSON).
    pub fn reconcile_json(&mut self, json: &str) -> Result<(), String> {
        reconcile::reconcile_json(self, json)
    }

    /// Reconcile against an already-parsed descriptor list.
    pub fn reconcile(&mut self, descriptors: &[crate::domain::BubbleDescriptor]) {
        reconcile::reconcile(self, descriptors);
    }

    /// Drop every tracked body.
    pub fn clear(&mut self) {
        reconcile::clear(self);
    }

    /// Advance the simulation by one frame worth of time.
    pub fn step(&mut self, dt_ms: f64) {
        step::step(self, dt_ms);
    }

    /// Published transforms: `SNAPSHOT_STRIDE` floats per body, in render
    /// order. Valid until the next `step`/`reconcile`.
    pub fn snapshot(&self) -> &[f32] {
        &self.snapshot
    }

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.snapshot.as_ptr()
    }

    pub fn snapshot_len(&self) -> usize {
        self.snapshot.len()
    }

    /// Body ids, one per snapshot row, in render order. Kept as `u32` end
    /// to end; ids above 2^24 would not survive an f32 lane.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn ids_ptr(&self) -> *const u32 {
        self.ids.as_ptr()
    }

    pub fn ids_len(&self) -> usize {
        self.ids.len()
    }

    /// Topmost body under a pointer coordinate, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<u32> {
        snapshot::hit_test(self, x, y)
    }

    /// Begin a drag on whatever body is under the pointer.
    pub fn begin_drag(&mut self, x: f32, y: f32) -> Option<u32> {
        snapshot::begin_drag(self, x, y)
    }

    /// End the active drag; returns `(id, duration_ms)` if one was active.
    pub fn end_drag(&mut self) -> Option<(u32, f64)> {
        snapshot::end_drag(self)
    }

    #[cfg(test)]
    pub(crate) fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[cfg(test)]
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
