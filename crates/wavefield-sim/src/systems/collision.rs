//! Collision detection and material split system.
//!
//! Samples each active primary radio wavefront's ring against a
//! snapshot of the obstacle registry. The first sample inside a polygon
//! is that obstacle's collision point for the tick; the obstacle's
//! material then decides which secondary waves to spawn. Secondaries
//! are committed only after the wave query ends, and are themselves
//! never re-tested against obstacles (single-bounce model).

use glam::DVec2;
use hecs::World;

use wavefield_core::components::{Obstacle, SplitHistory, Wavefront};
use wavefield_core::constants::{SPLIT_EPSILON, TRANSMITTED_ORIGIN_OFFSET};
use wavefield_core::enums::WaveKind;
use wavefield_core::geometry;
use wavefield_core::materials::Material;
use wavefield_core::types::Point;

/// A secondary wavefront waiting to be spawned at the end of the pass.
#[derive(Debug, Clone)]
pub struct SecondarySpawn {
    pub kind: WaveKind,
    pub origin: Point,
    pub direction: DVec2,
    pub frequency: f64,
    pub speed: f64,
    pub intensity: f64,
}

/// Run collision sampling for all active primary radio waves.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, next_wave_id: &mut u32, spawn_buffer: &mut Vec<SecondarySpawn>) {
    spawn_buffer.clear();

    // Snapshot the registry so spawns cannot invalidate the iteration.
    let obstacles: Vec<(u32, Vec<Point>, &'static Material)> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(_, o)| (o.id, o.points.clone(), o.material))
        .collect();

    if obstacles.is_empty() {
        return;
    }

    for (_entity, (wave, history)) in world.query_mut::<(&Wavefront, &mut SplitHistory)>() {
        if !wave.active || wave.kind != WaveKind::Radio {
            continue;
        }

        for (obstacle_id, points, material) in &obstacles {
            // Each wave splits against each obstacle at most once.
            if history.obstacles.contains(obstacle_id) {
                continue;
            }
            let Some(hit) = geometry::first_ring_hit(wave.origin, wave.radius, points) else {
                continue;
            };
            history.obstacles.insert(*obstacle_id);

            log::debug!(
                "wave {} hit obstacle {} ({}) at ({:.1}, {:.1})",
                wave.id,
                obstacle_id,
                material.name,
                hit.x,
                hit.y
            );

            let incident = geometry::incident_unit(wave.origin, hit);

            if material.reflection > SPLIT_EPSILON {
                let normal = geometry::nearest_edge_normal(points, hit);
                spawn_buffer.push(SecondarySpawn {
                    kind: WaveKind::Reflected,
                    origin: hit,
                    direction: geometry::reflect(incident, normal),
                    frequency: wave.frequency,
                    speed: wave.speed,
                    intensity: material.reflection,
                });
            }

            if material.transmission > SPLIT_EPSILON {
                // Push the origin past the boundary so the transmitted
                // rings render clear of the obstacle edge.
                spawn_buffer.push(SecondarySpawn {
                    kind: WaveKind::Transmitted,
                    origin: hit.offset(incident, TRANSMITTED_ORIGIN_OFFSET),
                    direction: incident,
                    frequency: wave.frequency,
                    speed: wave.speed,
                    intensity: material.transmission,
                });
            }
            // Absorption is implicit: no entity is spawned for it.
        }
    }

    // Commit the spawns now that no query borrow is live.
    for spawn in spawn_buffer.drain(..) {
        let id = *next_wave_id;
        *next_wave_id += 1;
        world.spawn((Wavefront::secondary(
            id,
            spawn.kind,
            spawn.origin,
            spawn.direction,
            spawn.frequency,
            spawn.speed,
            spawn.intensity,
        ),));
    }
}
