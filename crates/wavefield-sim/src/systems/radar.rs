//! Radar sweep system.
//!
//! Each tick the beam advances by a fixed angular speed. Wrapping past
//! 2π starts a new revolution: the angle resets to 0 and the previous
//! revolution's detections are cleared. An obstacle is detected when
//! its centroid lies inside the range ring and within half a beam width
//! of the sweep angle (shortest arc), at most once per revolution.

use hecs::World;

use wavefield_core::components::{Detection, Obstacle, RadarSweep, Wavefront};
use wavefield_core::geometry;
use wavefield_core::types::Point;

/// Advance the sweep and run centroid-in-beam detection.
pub fn run(world: &mut World) {
    let centroids: Vec<(u32, Point)> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(_, o)| (o.id, geometry::centroid(&o.points)))
        .collect();

    for (_entity, (wave, sweep)) in world.query_mut::<(&Wavefront, &mut RadarSweep)>() {
        sweep.sweep_angle += sweep.sweep_speed_deg.to_radians();
        if sweep.sweep_angle >= std::f64::consts::TAU {
            sweep.sweep_angle = 0.0;
            sweep.detections.clear();
            sweep.seen.clear();
            log::debug!("radar sweep wrapped, starting new revolution");
        }

        for (obstacle_id, center) in &centroids {
            if sweep.seen.contains(obstacle_id) {
                continue;
            }
            let distance = wave.origin.range_to(center);
            // wave.radius carries the fixed range ring for the radar entity.
            if distance > wave.radius {
                continue;
            }
            let bearing = wave.origin.bearing_to(center);
            if geometry::angle_difference(bearing, sweep.sweep_angle) <= sweep.beam_width / 2.0 {
                sweep.seen.insert(*obstacle_id);
                sweep.detections.push(Detection {
                    point: *center,
                    distance,
                    angle: bearing,
                    obstacle_id: *obstacle_id,
                });
                log::debug!(
                    "radar detected obstacle {} at range {:.1}, bearing {:.2}",
                    obstacle_id,
                    distance,
                    bearing
                );
            }
        }
    }
}
