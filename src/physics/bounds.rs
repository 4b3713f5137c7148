use super::body::Body;
use super::vec2::Vec2;
use super::{DAMPING, FLOOR_OFFSET, MIN_SPACING, MIN_SUPPORT, REST_DISTANCE};

/// The y coordinate bodies come to rest on.
pub fn floor_line(container_height: f32) -> f32 {
    (container_height - FLOOR_OFFSET).max(0.0)
}

/// Clamp one body against the container walls and the floor line.
///
/// Resting bodies are pinned back to their frozen transform every pass so
/// floating-point drift can never perturb them. Floor contact is the one
/// and only transition into the resting state.
pub fn apply(body: &mut Body, container_width: f32, container_height: f32, clock_ms: f64) {
    if let Some((rest_pos, rest_rotation)) = body.rest_transform() {
        body.pos = rest_pos;
        body.prev_pos = rest_pos;
        body.rotation = rest_rotation;
        return;
    }

    if body.is_paused_at(clock_ms) {
        return;
    }

    // A NaN or infinite position would poison every later comparison;
    // recover by re-centering with zero velocity.
    if !body.pos.is_finite() || !body.prev_pos.is_finite() {
        body.pos = Vec2::new(container_width * 0.5, body.half_height);
        body.prev_pos = body.pos;
    }

    // Side walls: clamp and kill horizontal velocity, no bounce.
    let min_x = body.half_width;
    let max_x = (container_width - body.half_width).max(min_x);
    if body.pos.x < min_x {
        body.pos.x = min_x;
        body.prev_pos.x = min_x;
    } else if body.pos.x > max_x {
        body.pos.x = max_x;
        body.prev_pos.x = max_x;
    }

    // Top: reflect upward velocity with damping. Only relevant while a
    // body spawned above the container is still falling in.
    if body.top() < 0.0 {
        let vy = body.pos.y - body.prev_pos.y;
        if vy < 0.0 {
            body.prev_pos.y = body.pos.y + vy * DAMPING;
        }
    }

    // Floor: snap the bottom edge onto the line and freeze for good.
    let floor = floor_line(container_height);
    if body.bottom() >= floor - REST_DISTANCE {
        body.pos.y = floor - body.half_height;
        body.rest();
    }
}

/// Settle falling bodies onto resting ones they have landed on.
///
/// A body whose bottom edge is within `REST_DISTANCE` of the margin line
/// above a resting body's top, with at least `MIN_SUPPORT` of horizontal
/// box overlap, snaps onto that ledge and rests. Without this, a stacked
/// body would hang in push/gravity equilibrium forever, since only the
/// floor line itself latches the resting state. Of several supports the
/// highest ledge wins.
///
/// The band is two-sided: a body still far below a ledge (a fresh spawn
/// inside a tall stack) is left for the resolver to push out gradually
/// rather than teleported onto the stack's top.
pub fn settle_stacked(bodies: &mut [Body], clock_ms: f64) {
    for i in 0..bodies.len() {
        if bodies[i].is_resting() || bodies[i].is_paused_at(clock_ms) {
            continue;
        }

        let body = &bodies[i];
        let mut ledge: Option<f32> = None;
        for support in bodies.iter() {
            if support.id == body.id || !support.is_resting() {
                continue;
            }
            let overlap = body.half_width + support.half_width - (body.pos.x - support.pos.x).abs();
            if overlap < MIN_SUPPORT {
                continue;
            }
            let line = support.top() - MIN_SPACING;
            if (body.bottom() - line).abs() <= REST_DISTANCE {
                ledge = Some(match ledge {
                    Some(current) => current.min(line),
                    None => line,
                });
            }
        }

        if let Some(line) = ledge {
            let body = &mut bodies[i];
            body.pos.y = line - body.half_height;
            body.rest();
        }
    }
}
