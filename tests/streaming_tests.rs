//! Tests for the chunk streaming manager: window correctness, bounds
//! clipping, reconcile idempotence, and the hide-don't-destroy policy.

use std::collections::HashSet;

use cgmath::Point3;

use blockgen::*;

/// A position comfortably inside the chunk at the given coordinate.
fn position_in_chunk(x: i32, z: i32) -> Point3<f32> {
    Point3::new(
        (x * CHUNK_WIDTH as i32) as f32 + 8.0,
        (CHUNK_HEIGHT + 10) as f32,
        (z * CHUNK_WIDTH as i32) as f32 + 8.0,
    )
}

/// The expected active set for an observer chunk: the open asymmetric
/// window `|c - coord| < view_distance` per axis, clipped to world bounds.
fn expected_window(coord: ChunkCoord) -> HashSet<ChunkCoord> {
    let mut set = HashSet::new();
    for x in (coord.x - VIEW_DISTANCE_IN_CHUNKS)..(coord.x + VIEW_DISTANCE_IN_CHUNKS) {
        for z in (coord.z - VIEW_DISTANCE_IN_CHUNKS)..(coord.z + VIEW_DISTANCE_IN_CHUNKS) {
            if x >= 0 && x < WORLD_SIZE_IN_CHUNKS && z >= 0 && z < WORLD_SIZE_IN_CHUNKS {
                set.insert(ChunkCoord::new(x, z));
            }
        }
    }
    set
}

fn new_world() -> World<HeadlessRenderer> {
    World::new(WorldConfig::default(), HeadlessRenderer::new()).unwrap()
}

#[test]
fn startup_prewarms_the_center_window() {
    let world = new_world();
    let center = ChunkCoord::new(WORLD_SIZE_IN_CHUNKS / 2, WORLD_SIZE_IN_CHUNKS / 2);

    assert_eq!(*world.active_chunks(), expected_window(center));
    assert_eq!(world.observer_chunk(), center);

    // Every active chunk was uploaded exactly once and is visible.
    let sink = world.sink();
    assert_eq!(sink.uploads().len(), world.active_chunks().len());
    assert_eq!(*sink.visible_chunks(), *world.active_chunks());
}

#[test]
fn spawn_position_sits_in_the_center_chunk() {
    let world = new_world();
    let spawn = world.spawn_position();
    assert_eq!(
        ChunkCoord::containing(spawn),
        ChunkCoord::new(WORLD_SIZE_IN_CHUNKS / 2, WORLD_SIZE_IN_CHUNKS / 2)
    );
    assert!(spawn.y >= CHUNK_HEIGHT as f32);
}

#[test]
fn sub_chunk_movement_is_a_no_op() {
    let mut world = new_world();
    let uploads = world.sink().uploads().len();
    let toggles = world.sink().visibility_toggles();

    let mut pos = world.spawn_position();
    for _ in 0..20 {
        pos.x += 0.5;
        world.on_observer_moved(pos).unwrap();
    }

    assert_eq!(world.sink().uploads().len(), uploads);
    assert_eq!(world.sink().visibility_toggles(), toggles);
}

#[test]
fn reconcile_is_idempotent_per_chunk_coordinate() {
    let mut world = new_world();
    let pos = position_in_chunk(2, 3);

    world.on_observer_moved(pos).unwrap();
    let uploads = world.sink().uploads().len();
    let toggles = world.sink().visibility_toggles();
    let active = world.active_chunks().clone();

    // Different position, same chunk: nothing may change.
    let mut nudged = pos;
    nudged.x += 3.0;
    nudged.z -= 2.0;
    world.on_observer_moved(nudged).unwrap();

    assert_eq!(world.sink().uploads().len(), uploads);
    assert_eq!(world.sink().visibility_toggles(), toggles);
    assert_eq!(*world.active_chunks(), active);
}

#[test]
fn crossing_one_chunk_row_shifts_the_window_by_one_row() {
    // Observer moves from chunk (5, 5) to (5, 6): the old south edge row
    // (z == 0) deactivates, and z == 10 is never activated because it lies
    // outside the world.
    let mut world = new_world();
    world.on_observer_moved(position_in_chunk(5, 6)).unwrap();

    let expected = expected_window(ChunkCoord::new(5, 6));
    assert_eq!(*world.active_chunks(), expected);

    for x in 0..WORLD_SIZE_IN_CHUNKS {
        // Old edge: still exists, no longer active.
        let south = world.chunk_at(ChunkCoord::new(x, 0)).unwrap();
        assert!(!south.is_active());
        // Beyond the world: never created.
        assert!(world.chunk_at(ChunkCoord::new(x, 10)).is_none());
    }
}

#[test]
fn window_is_clipped_at_the_world_corner() {
    let mut world = new_world();
    world.on_observer_moved(position_in_chunk(0, 0)).unwrap();

    let expected = expected_window(ChunkCoord::new(0, 0));
    assert_eq!(expected.len(), 25);
    assert_eq!(*world.active_chunks(), expected);
    assert_eq!(*world.sink().visible_chunks(), expected);
}

#[test]
fn chunks_are_hidden_but_never_destroyed() {
    let mut world = new_world();
    let uploads_after_start = world.sink().uploads().len();

    // Walk to the corner and back to the center.
    world.on_observer_moved(position_in_chunk(0, 0)).unwrap();
    world.on_observer_moved(position_in_chunk(5, 5)).unwrap();

    // The start window was fully covered by the two moves' windows, so no
    // new chunks were created and nothing was re-uploaded.
    assert_eq!(world.sink().uploads().len(), uploads_after_start);

    // A chunk far from the corner window survived deactivation with its
    // data intact.
    let far = world.chunk_at(ChunkCoord::new(9, 9)).unwrap();
    assert!(far.is_active());
    assert!(far.mesh().face_count() > 0);

    // No coordinate was ever uploaded twice.
    let unique: HashSet<_> = world.sink().uploads().iter().copied().collect();
    assert_eq!(unique.len(), world.sink().uploads().len());
}

#[test]
fn active_set_always_mirrors_the_renderer() {
    let mut world = new_world();
    let walk = [(5, 6), (6, 6), (6, 7), (0, 0), (9, 9), (5, 5)];
    for (x, z) in walk {
        world.on_observer_moved(position_in_chunk(x, z)).unwrap();
        assert_eq!(*world.active_chunks(), expected_window(ChunkCoord::new(x, z)));
        assert_eq!(*world.sink().visible_chunks(), *world.active_chunks());
        for coord in world.active_chunks() {
            let chunk = world.chunk_at(*coord).unwrap();
            assert!(chunk.is_active());
        }
    }
}

#[test]
fn extreme_observer_positions_never_overflow_the_window() {
    // Positions at the float extremes saturate the chunk coordinate near
    // the i32 limits; the window math must stay in range and simply find
    // nothing to activate.
    let mut world = new_world();
    world
        .on_observer_moved(Point3::new(f32::MIN, 10.0, f32::MIN))
        .unwrap();
    assert!(world.active_chunks().is_empty());

    world
        .on_observer_moved(Point3::new(f32::MAX, 10.0, f32::MAX))
        .unwrap();
    assert!(world.active_chunks().is_empty());

    // Coming back re-activates the retained chunks without re-uploading.
    let uploads = world.sink().uploads().len();
    world.on_observer_moved(position_in_chunk(5, 5)).unwrap();
    assert_eq!(
        *world.active_chunks(),
        expected_window(ChunkCoord::new(5, 5))
    );
    assert_eq!(world.sink().uploads().len(), uploads);
}

#[test]
fn observer_outside_the_world_activates_only_in_bounds_chunks() {
    let mut world = new_world();
    // Stand one chunk west of the world; only the overlapping part of the
    // window exists.
    world.on_observer_moved(position_in_chunk(-1, 5)).unwrap();

    let expected = expected_window(ChunkCoord::new(-1, 5));
    assert_eq!(*world.active_chunks(), expected);
    assert!(expected
        .iter()
        .all(|c| World::<HeadlessRenderer>::is_chunk_in_world(*c)));
}
