//! Wavefront lifecycle system.
//!
//! Each tick: radius += speed; a wavefront whose radius passes its
//! maximum deactivates. Deactivation is terminal — the cleanup system
//! despawns the entity later the same tick.

use hecs::World;

use wavefield_core::components::Wavefront;

/// Advance all active wavefronts by one tick.
pub fn run(world: &mut World) {
    for (_entity, wave) in world.query_mut::<&mut Wavefront>() {
        if !wave.active {
            continue;
        }
        wave.radius += wave.speed;
        if wave.radius > wave.max_radius {
            wave.active = false;
            log::debug!("wavefront {} ({:?}) expired at radius {:.1}", wave.id, wave.kind, wave.radius);
        }
    }
}
