use super::body::Body;
use super::{COLLISION_SLOP, HORIZONTAL_RELAX, MIN_SPACING, RELAX_ITERATIONS, VERTICAL_RELAX};

/// Push overlapping bodies apart by iterative relaxation.
///
/// Runs `RELAX_ITERATIONS` sweeps over all unordered pairs. Each visit
/// corrects a fraction of the remaining overlap rather than the whole of
/// it, so bodies drift apart instead of popping. Separation is biased
/// vertically (upper body up, lower body down); the horizontal component
/// is marginal, proportional to the smaller of the two overlaps.
///
/// With `apply_impulse` the pass also zeroes horizontal velocity on both
/// partners (`prev.x = pos.x`): collisions are inelastic sideways, so a
/// body can never acquire lateral drift from a hit.
///
/// Resting bodies are immovable obstacles - never mutated, but the movable
/// partner absorbs the whole correction against them. Paused bodies do not
/// participate at all. Returns the number of overlaps corrected.
pub fn resolve(bodies: &mut [Body], apply_impulse: bool, clock_ms: f64) -> u32 {
    let mut corrected = 0u32;
    for _ in 0..RELAX_ITERATIONS {
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (head, tail) = bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                if a.is_resting() && b.is_resting() {
                    continue;
                }
                if a.is_paused_at(clock_ms) || b.is_paused_at(clock_ms) {
                    continue;
                }
                if separate(a, b, apply_impulse) {
                    corrected += 1;
                }
            }
        }
    }
    corrected
}

fn separate(a: &mut Body, b: &mut Body, apply_impulse: bool) -> bool {
    let dx = b.pos.x - a.pos.x;
    let dy = b.pos.y - a.pos.y;

    // Overlap including the enforced spacing margin.
    let overlap_x = a.half_width + b.half_width + MIN_SPACING - dx.abs();
    let overlap_y = a.half_height + b.half_height + MIN_SPACING - dy.abs();
    if overlap_x <= COLLISION_SLOP || overlap_y <= COLLISION_SLOP {
        return false;
    }

    // A resting partner is immovable; the other body takes the full push.
    let (share_a, share_b) = if a.is_resting() {
        (0.0, 1.0)
    } else if b.is_resting() {
        (1.0, 0.0)
    } else {
        (0.5, 0.5)
    };

    let push_y = overlap_y * VERTICAL_RELAX;
    let push_x = overlap_x.min(overlap_y) * HORIZONTAL_RELAX;
    let side = if dx >= 0.0 { 1.0 } else { -1.0 };

    // Whichever body is higher moves further up, the lower one down.
    let up = if dy >= 0.0 { -1.0 } else { 1.0 };
    a.pos.y += up * push_y * share_a;
    b.pos.y -= up * push_y * share_b;

    a.pos.x -= side * push_x * share_a;
    b.pos.x += side * push_x * share_b;

    if apply_impulse {
        // Inelastic horizontal response; vertical velocity is preserved.
        if !a.is_resting() {
            a.prev_pos.x = a.pos.x;
        }
        if !b.is_resting() {
            b.prev_pos.x = b.pos.x;
        }
    }
    true
}
