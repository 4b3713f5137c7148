use super::body::Body;
use super::{HORIZONTAL_CARRY, REST_DISTANCE};

/// Advance one non-resting body by one sub-step of position-based
/// integration: `new = 2*pos - prev + a*dt^2`, with the horizontal term
/// suppressed so gravity dominates and bubbles fall in a straight column.
///
/// Resting and paused bodies are skipped entirely (pauses expire against
/// the engine clock). A body already within `REST_DISTANCE` of the floor
/// line gets its velocity zeroed instead of more acceleration - it is
/// about to rest and must not pick up speed it would pop back out with.
pub fn integrate(body: &mut Body, sub_delta: f32, floor_line: f32, gravity: f32, clock_ms: f64) {
    if body.is_resting() || body.tick_pause(clock_ms) {
        return;
    }

    if body.bottom() >= floor_line - REST_DISTANCE {
        body.prev_pos = body.pos;
        return;
    }

    let vel = body.velocity();
    let next_x = body.pos.x + vel.x * HORIZONTAL_CARRY;
    let next_y = body.pos.y + vel.y + gravity * sub_delta * sub_delta;

    body.prev_pos = body.pos;
    body.pos.x = next_x;
    body.pos.y = next_y;
}
