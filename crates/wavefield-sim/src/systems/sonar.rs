//! Sonar echo system.
//!
//! A sonar pulse hears an obstacle vertex when its current radius is
//! within the echo tolerance of the vertex's range. Echoes are deduped
//! by an explicit quantized key and accumulate for the pulse's
//! lifetime; they are discarded with the pulse.

use hecs::World;

use wavefield_core::components::{Detection, EchoKey, Obstacle, SonarEchoes, Wavefront};
use wavefield_core::constants::SONAR_ECHO_TOLERANCE;
use wavefield_core::types::Point;

/// Run vertex radius-matching for all active sonar pulses.
pub fn run(world: &mut World) {
    let vertices: Vec<(u32, Point)> = world
        .query::<&Obstacle>()
        .iter()
        .flat_map(|(_, o)| o.points.iter().map(|p| (o.id, *p)).collect::<Vec<_>>())
        .collect();

    if vertices.is_empty() {
        return;
    }

    for (_entity, (wave, echoes)) in world.query_mut::<(&Wavefront, &mut SonarEchoes)>() {
        if !wave.active {
            continue;
        }

        for (obstacle_id, vertex) in &vertices {
            let distance = wave.origin.range_to(vertex);
            if (distance - wave.radius).abs() >= SONAR_ECHO_TOLERANCE {
                continue;
            }
            let angle = wave.origin.bearing_to(vertex);
            if echoes.seen.insert(EchoKey::new(*obstacle_id, distance, angle)) {
                log::debug!(
                    "sonar pulse {} echo from obstacle {} at range {:.1}",
                    wave.id,
                    obstacle_id,
                    distance
                );
                echoes.detections.push(Detection {
                    point: *vertex,
                    distance,
                    angle,
                    obstacle_id: *obstacle_id,
                });
            }
        }
    }
}
