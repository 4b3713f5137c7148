use std::collections::{HashMap, HashSet};

use crate::domain::{bubble_size, descriptors_from_json, BubbleDescriptor};
use crate::physics::{Body, Vec2, SPIN_RANGE};

use super::random::rand01;
use super::EngineCore;

/// Fresh bubbles start this far above the container top...
const SPAWN_BASE_OFFSET: f32 = 80.0;
/// ...plus this much per descriptor index, so they fall in staggered.
const SPAWN_STEP_OFFSET: f32 = 60.0;

/// A just-submitted entry is held at its presentation point this long.
const PAUSE_MS: f64 = 1500.0;

pub(super) fn reconcile_json(core: &mut EngineCore, json: &str) -> Result<(), String> {
    let descriptors = descriptors_from_json(json)?;
    reconcile(core, &descriptors);
    Ok(())
}

/// Diff the registry against the UI's descriptor list.
///
/// Tracked ids keep their full simulation state (only the size is
/// refreshed), absent ids drop their bodies, new ids spawn. The body list
/// is rebuilt in descriptor order, which is also the render order.
pub(super) fn reconcile(core: &mut EngineCore, descriptors: &[BubbleDescriptor]) {
    let incoming: HashSet<u32> = descriptors.iter().map(|d| d.id).collect();

    if core
        .drag
        .as_ref()
        .map(|d| !incoming.contains(&d.id))
        .unwrap_or(false)
    {
        core.drag = None;
    }

    let mut tracked: HashMap<u32, Body> = core
        .bodies
        .drain(..)
        .filter(|b| incoming.contains(&b.id))
        .map(|b| (b.id, b))
        .collect();

    let mut seen: HashSet<u32> = HashSet::with_capacity(descriptors.len());
    for (index, desc) in descriptors.iter().enumerate() {
        // A duplicate id later in the list is dropped, not re-spawned.
        if !seen.insert(desc.id) {
            continue;
        }
        let (width, height) = bubble_size(&desc.label, desc.icon);
        match tracked.remove(&desc.id) {
            Some(mut body) => {
                body.set_size(width, height);
                core.bodies.push(body);
            }
            None => {
                let body = spawn(core, desc, index, width, height);
                core.bodies.push(body);
            }
        }
    }

    super::snapshot::publish(core);
}

pub(super) fn clear(core: &mut EngineCore) {
    core.bodies.clear();
    core.drag = None;
    super::snapshot::publish(core);
}

fn spawn(core: &mut EngineCore, desc: &BubbleDescriptor, index: usize, width: f32, height: f32) -> Body {
    let half_w = width * 0.5;
    let half_h = height * 0.5;

    if desc.just_added {
        // Hold at the presentation point, then fall.
        let pos = Vec2::new(core.width * 0.5, core.height * 0.3);
        return Body::paused(desc.id, pos, half_w, half_h, core.clock_ms + PAUSE_MS);
    }

    let span = (core.width - width).max(0.0);
    let x = half_w + rand01(&mut core.rng_state) * span;
    let y = -(SPAWN_BASE_OFFSET + index as f32 * SPAWN_STEP_OFFSET);
    let spin = (rand01(&mut core.rng_state) * 2.0 - 1.0) * SPIN_RANGE;

    Body::new(desc.id, Vec2::new(x, y), half_w, half_h, spin)
}
