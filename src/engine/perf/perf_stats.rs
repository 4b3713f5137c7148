use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) bounds_ms: f64,
    pub(super) sub_steps: u32,
    pub(super) body_count: u32,
    pub(super) resting_count: u32,
    pub(super) overlaps_resolved: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn bounds_ms(&self) -> f64 { self.bounds_ms }
    #[wasm_bindgen(getter)]
    pub fn sub_steps(&self) -> u32 { self.sub_steps }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn resting_count(&self) -> u32 { self.resting_count }
    #[wasm_bindgen(getter)]
    pub fn overlaps_resolved(&self) -> u32 { self.overlaps_resolved }
}
