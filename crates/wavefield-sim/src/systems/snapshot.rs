//! Snapshot system: queries the world and builds a complete
//! FieldSnapshot for the rendering layer.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use wavefield_core::components::{Obstacle, RadarSweep, SonarEchoes, Wavefront};
use wavefield_core::enums::SystemKind;
use wavefield_core::state::*;
use wavefield_core::types::SimTime;

/// Build a complete FieldSnapshot from the current world state.
pub fn build(
    world: &World,
    time: &SimTime,
    sources: &SourcesView,
    selected_system: SystemKind,
    frequency: f64,
    wave_speed: f64,
    auto_emit: bool,
) -> FieldSnapshot {
    FieldSnapshot {
        time: *time,
        waves: build_waves(world),
        obstacles: build_obstacles(world),
        sonar: build_sonar(world),
        radar: build_radar(world),
        sources: sources.clone(),
        selected_system,
        frequency,
        wave_speed,
        auto_emit,
    }
}

/// All active wavefronts, every kind, sorted by id.
fn build_waves(world: &World) -> Vec<WaveView> {
    let mut waves: Vec<WaveView> = world
        .query::<&Wavefront>()
        .iter()
        .filter(|(_, w)| w.active)
        .map(|(_, w)| WaveView {
            id: w.id,
            kind: w.kind,
            origin: w.origin,
            radius: w.radius,
            speed: w.speed,
            frequency: w.frequency,
            intensity: w.intensity,
            max_radius: w.max_radius,
            ring_spacing: w.ring_spacing(),
            direction: w.direction,
        })
        .collect();

    waves.sort_by_key(|w| w.id);
    waves
}

/// The obstacle registry, sorted by id.
fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut obstacles: Vec<ObstacleView> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(_, o)| ObstacleView {
            id: o.id,
            points: o.points.clone(),
            material_name: o.material.name.to_string(),
            color: o.material.color,
            absorption: o.material.absorption,
            reflection: o.material.reflection,
            transmission: o.material.transmission,
        })
        .collect();

    obstacles.sort_by_key(|o| o.id);
    obstacles
}

/// Sonar pulses with their accumulated echoes, sorted by id.
fn build_sonar(world: &World) -> Vec<SonarPulseView> {
    let mut pulses: Vec<SonarPulseView> = world
        .query::<(&Wavefront, &SonarEchoes)>()
        .iter()
        .filter(|(_, (w, _))| w.active)
        .map(|(_, (w, echoes))| SonarPulseView {
            id: w.id,
            origin: w.origin,
            radius: w.radius,
            detections: echoes.detections.clone(),
        })
        .collect();

    pulses.sort_by_key(|p| p.id);
    pulses
}

/// The singleton radar sweep, if running.
fn build_radar(world: &World) -> Option<RadarSweepView> {
    world
        .query::<(&Wavefront, &RadarSweep)>()
        .iter()
        .next()
        .map(|(_, (wave, sweep))| RadarSweepView {
            origin: wave.origin,
            range_radius: wave.radius,
            sweep_angle: sweep.sweep_angle,
            beam_width: sweep.beam_width,
            detections: sweep.detections.clone(),
        })
}
