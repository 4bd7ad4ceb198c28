//! Cleanup system: despawns wavefronts that have deactivated.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use wavefield_core::components::Wavefront;

/// Remove inactive wavefront entities (and their attached detection
/// state, which lives and dies with them).
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, wave) in world.query_mut::<&Wavefront>() {
        if !wave.active {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
