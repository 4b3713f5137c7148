use super::{DragState, EngineCore};

/// Floats per body in the published transform buffer:
/// `x, y, rotation, width, height, resting`.
///
/// Ids travel in a separate `u32` buffer (`ids_ptr`/`ids_len`), row-aligned
/// with this one. An f32 lane would corrupt ids above 2^24.
pub const SNAPSHOT_STRIDE: usize = 6;

/// Rebuild the transfer buffers the renderer reads. Render order equals
/// body order, which `reconcile` keeps aligned with the descriptor order.
pub(super) fn publish(core: &mut EngineCore) {
    core.snapshot.clear();
    core.snapshot.reserve(core.bodies.len() * SNAPSHOT_STRIDE);
    core.ids.clear();
    core.ids.reserve(core.bodies.len());
    for body in core.bodies.iter() {
        core.ids.push(body.id);
        core.snapshot.push(body.pos.x);
        core.snapshot.push(body.pos.y);
        core.snapshot.push(body.rotation);
        core.snapshot.push(body.width());
        core.snapshot.push(body.height());
        core.snapshot.push(if body.is_resting() { 1.0 } else { 0.0 });
    }
}

/// Topmost body under the pointer. Later bodies render above earlier
/// ones, so scan back to front.
pub(super) fn hit_test(core: &EngineCore, x: f32, y: f32) -> Option<u32> {
    core.bodies
        .iter()
        .rev()
        .find(|b| b.contains(x, y))
        .map(|b| b.id)
}

pub(super) fn begin_drag(core: &mut EngineCore, x: f32, y: f32) -> Option<u32> {
    let id = hit_test(core, x, y)?;
    core.drag = Some(DragState {
        id,
        started_ms: core.clock_ms,
    });
    Some(id)
}

pub(super) fn end_drag(core: &mut EngineCore) -> Option<(u32, f64)> {
    let drag = core.drag.take()?;
    Some((drag.id, core.clock_ms - drag.started_ms))
}
