//! Field snapshot — the complete visible state handed to the rendering
//! layer after each tick. Strictly read-only; the renderer never
//! reaches back into the world.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::components::Detection;
use crate::enums::{SystemKind, WaveKind};
use crate::types::{Point, SimTime};

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub time: SimTime,
    /// All active wavefronts (every kind), sorted by id.
    pub waves: Vec<WaveView>,
    /// The obstacle registry, sorted by id.
    pub obstacles: Vec<ObstacleView>,
    /// Sonar pulses with their accumulated echoes.
    pub sonar: Vec<SonarPulseView>,
    /// The radar sweep, if one is running.
    pub radar: Option<RadarSweepView>,
    pub sources: SourcesView,
    pub selected_system: SystemKind,
    pub frequency: f64,
    pub wave_speed: f64,
    pub auto_emit: bool,
}

/// A wavefront as drawn: concentric rings out to `radius`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveView {
    pub id: u32,
    pub kind: WaveKind,
    pub origin: Point,
    pub radius: f64,
    pub speed: f64,
    pub frequency: f64,
    /// Drives ring alpha for secondaries.
    pub intensity: f64,
    pub max_radius: f64,
    /// Pre-divided spacing between rings.
    pub ring_spacing: f64,
    /// Travel direction, present on reflected/transmitted waves.
    pub direction: Option<DVec2>,
}

/// An obstacle polygon with its material's display attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub points: Vec<Point>,
    pub material_name: String,
    pub color: [u8; 3],
    pub absorption: f64,
    pub reflection: f64,
    pub transmission: f64,
}

/// A sonar pulse and the echoes it has heard so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonarPulseView {
    pub id: u32,
    pub origin: Point,
    pub radius: f64,
    pub detections: Vec<Detection>,
}

/// The radar sweep for PPI-style display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarSweepView {
    pub origin: Point,
    pub range_radius: f64,
    pub sweep_angle: f64,
    pub beam_width: f64,
    pub detections: Vec<Detection>,
}

/// Current per-system source positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesView {
    pub radio: Point,
    pub sonar: Point,
    pub radar: Point,
}
