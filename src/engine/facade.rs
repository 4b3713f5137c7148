use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::snapshot::SNAPSHOT_STRIDE;
use super::EngineCore;

/// The boundary the JS layer talks to. One instance per mounted bubble
/// view; dropping it (wasm-bindgen `free()`) tears the simulation down,
/// so no callback can ever fire against a destroyed registry.
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine for a container of the given size (px).
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: EngineCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    /// How many bodies have settled (the UI waits on this after a submit).
    #[wasm_bindgen(getter)]
    pub fn resting_count(&self) -> usize { self.core.resting_count() }

    pub fn set_container(&mut self, width: f32, height: f32) {
        self.core.set_container(width, height);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Reconcile the registry against the UI's entry list, passed as a
    /// JSON array of `{ id, label, icon, just_added }` descriptors.
    pub fn reconcile(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .reconcile_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Drop every tracked body.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance the simulation by one animation frame worth of time.
    pub fn step(&mut self, dt_ms: f64) {
        self.core.step(dt_ms);
    }

    /// Pointer to the snapshot buffer (for JS rendering): `stride()`
    /// floats per body - `x, y, rotation, width, height, resting` - in
    /// render order. Valid until the next `step` or `reconcile`.
    pub fn bodies_ptr(&self) -> *const f32 {
        self.core.snapshot_ptr()
    }

    pub fn bodies_len(&self) -> usize {
        self.core.snapshot_len()
    }

    /// Pointer to the id buffer, one `u32` per snapshot row. Ids stay
    /// integral end to end; the f32 snapshot lanes could not carry ids
    /// above 2^24 exactly.
    pub fn ids_ptr(&self) -> *const u32 {
        self.core.ids_ptr()
    }

    pub fn ids_len(&self) -> usize {
        self.core.ids_len()
    }

    pub fn stride() -> usize {
        SNAPSHOT_STRIDE
    }

    /// Topmost body id under a pointer coordinate, -1 for none. Returned
    /// as f64 so the full u32 id range round-trips (i32 would wrap high
    /// ids negative, colliding with the sentinel).
    pub fn hit_test(&self, x: f32, y: f32) -> f64 {
        match self.core.hit_test(x, y) {
            Some(id) => id as f64,
            None => -1.0,
        }
    }

    /// Start a drag on the body under the pointer; returns its id or -1.
    pub fn begin_drag(&mut self, x: f32, y: f32) -> f64 {
        match self.core.begin_drag(x, y) {
            Some(id) => id as f64,
            None => -1.0,
        }
    }

    /// Finish the active drag; returns its duration in ms (-1.0 when no
    /// drag was active). The UI decides whether it was a click or a drag.
    pub fn end_drag(&mut self) -> f64 {
        match self.core.end_drag() {
            Some((_, duration_ms)) => duration_ms,
            None => -1.0,
        }
    }
}
