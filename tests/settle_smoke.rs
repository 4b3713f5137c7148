use wordfall_engine::{BubbleDescriptor, EngineCore, SNAPSHOT_STRIDE};

const FRAME_MS: f64 = 16.666;
const FLOOR_LINE: f32 = 420.0; // 600 - 180
const MIN_SPACING: f32 = 4.0;
const TOLERANCE: f32 = 0.7;

fn desc(id: u32, label: &str, just_added: bool) -> BubbleDescriptor {
    BubbleDescriptor {
        id,
        label: label.to_string(),
        icon: false,
        just_added,
    }
}

fn run_until_settled(core: &mut EngineCore, max_frames: u32) -> bool {
    for _ in 0..max_frames {
        core.step(FRAME_MS);
        if core.resting_count() == core.body_count() {
            return true;
        }
    }
    false
}

/// One `(id, [x, y, rotation, width, height, resting])` pair per body,
/// read from the published id and transform buffers.
fn snapshot_rows(core: &EngineCore) -> Vec<(u32, Vec<f32>)> {
    core.ids()
        .iter()
        .copied()
        .zip(core.snapshot().chunks(SNAPSHOT_STRIDE).map(|r| r.to_vec()))
        .collect()
}

/// 800x600 container, floor line at y=420, three bubbles dropped from
/// above: all three must settle frozen, contained, and non-overlapping,
/// each bottom edge on the floor line or margin-stacked on a neighbor.
#[test]
fn three_bubbles_settle_without_overlap() {
    let mut core = EngineCore::new(800.0, 600.0);
    core.reconcile(&[
        desc(1, "LAnding", false),
        desc(2, "PArissss", false),
        desc(3, "Picnicday", false),
    ]);

    assert!(run_until_settled(&mut core, 1200), "bodies did not settle");

    let rows = snapshot_rows(&core);
    assert_eq!(rows.len(), 3);

    for (id, row) in &rows {
        let (x, y, w, h, resting) = (row[0], row[1], row[3], row[4], row[5]);
        assert_eq!(resting, 1.0);

        // Containment.
        assert!(x - w / 2.0 >= -0.01);
        assert!(x + w / 2.0 <= 800.01);
        let bottom = y + h / 2.0;
        assert!(bottom <= FLOOR_LINE + 0.01);

        // Bottom edge on the floor line, or resting on another body's
        // top edge plus the spacing margin.
        let on_floor = (bottom - FLOOR_LINE).abs() < 0.01;
        let on_stack = rows.iter().any(|(other_id, other)| {
            let ledge = (other[1] - other[4] / 2.0) - MIN_SPACING;
            other_id != id && (bottom - ledge).abs() < 0.01
        });
        assert!(on_floor || on_stack, "body {id} floats at bottom={bottom}");
    }

    // Pairwise separation honors the spacing margin (within resolver slop).
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            let (a, b) = (&rows[i], &rows[j]);
            let gap_x = (b.1[0] - a.1[0]).abs() - (a.1[3] + b.1[3]) / 2.0;
            let gap_y = (b.1[1] - a.1[1]).abs() - (a.1[4] + b.1[4]) / 2.0;
            assert!(
                gap_x >= MIN_SPACING - TOLERANCE || gap_y >= MIN_SPACING - TOLERANCE,
                "bodies {} and {} overlap (gap_x={gap_x}, gap_y={gap_y})",
                a.0,
                b.0
            );
        }
    }

    // Idempotence once resting: more frames change nothing.
    let frozen = core.snapshot().to_vec();
    let frozen_ids = core.ids().to_vec();
    for _ in 0..120 {
        core.step(FRAME_MS);
    }
    assert_eq!(core.snapshot(), &frozen[..]);
    assert_eq!(core.ids(), &frozen_ids[..]);
}

/// A just-submitted bubble holds its presentation point for the full
/// 1.5 s pause, then falls and settles like any other body.
#[test]
fn just_added_bubble_pauses_then_falls() {
    let mut core = EngineCore::new(800.0, 600.0);
    core.reconcile(&[desc(9, "Sunset", true)]);

    let start = snapshot_rows(&core)[0].1.clone();
    let mut elapsed = 0.0;
    while elapsed + FRAME_MS < 1500.0 {
        core.step(FRAME_MS);
        elapsed += FRAME_MS;
        let row = &snapshot_rows(&core)[0].1;
        assert_eq!(row[0], start[0], "moved during pause");
        assert_eq!(row[1], start[1], "moved during pause");
    }

    assert!(run_until_settled(&mut core, 600));
    let row = &snapshot_rows(&core)[0].1;
    assert!(row[1] > start[1]);
    assert!((row[1] + row[4] / 2.0 - FLOOR_LINE).abs() < 0.01);
}

/// A crowded narrow container still converges: bodies pile up, every
/// body rests, and the pile stays inside the walls.
#[test]
fn crowded_container_piles_up_and_settles() {
    let mut core = EngineCore::new(500.0, 600.0);
    let list: Vec<BubbleDescriptor> = (1..=8)
        .map(|i| desc(i, "Daydream", false))
        .collect();
    core.reconcile(&list);

    assert!(run_until_settled(&mut core, 2400), "pile did not settle");

    for (_, row) in &snapshot_rows(&core) {
        assert_eq!(row[5], 1.0);
        assert!(row[0] - row[3] / 2.0 >= -0.01);
        assert!(row[0] + row[3] / 2.0 <= 500.01);
        assert!(row[1] + row[4] / 2.0 <= FLOOR_LINE + 0.01);
    }
}
