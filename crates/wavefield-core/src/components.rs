//! Components attached to hecs entities.
//!
//! Components are plain data; all per-tick logic lives in the sim
//! crate's systems.

use std::collections::HashSet;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::WaveKind;
use crate::materials::Material;
use crate::types::Point;

/// A propagating circular (or, for radar, angular-sector) wavefront.
///
/// One type covers all five kinds; kind-specific behavior hangs off the
/// tag and the companion components (`SonarEchoes`, `RadarSweep`,
/// `SplitHistory`). Radius is monotonically non-decreasing while active;
/// deactivation is terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wavefront {
    /// Unique id assigned by the engine, for stable snapshot ordering.
    pub id: u32,
    pub kind: WaveKind,
    /// Fixed for the wavefront's lifetime.
    pub origin: Point,
    /// Current radius; starts at 0 (for radar: the fixed range ring).
    pub radius: f64,
    /// Radius added per tick.
    pub speed: f64,
    /// Controls visual ring spacing only, never collision logic.
    pub frequency: f64,
    /// 1.0 for primaries; the spawning material coefficient for secondaries.
    pub intensity: f64,
    /// Deactivation threshold.
    pub max_radius: f64,
    /// Travel direction for secondaries (reflection vector or incident
    /// continuation); primaries expand uniformly and carry none.
    pub direction: Option<DVec2>,
    pub active: bool,
}

impl Wavefront {
    /// A primary pulse at full intensity.
    pub fn primary(id: u32, kind: WaveKind, origin: Point, frequency: f64, speed: f64) -> Self {
        let max_radius = match kind {
            WaveKind::Radio => RADIO_MAX_RADIUS,
            WaveKind::Sonar => SONAR_MAX_RADIUS,
            WaveKind::Radar => f64::INFINITY,
            _ => SECONDARY_MAX_RADIUS,
        };
        let (radius, speed) = if kind == WaveKind::Radar {
            // The radar entity reuses this component for its fixed range ring.
            (RADAR_RANGE, 0.0)
        } else {
            (0.0, speed)
        };
        Self {
            id,
            kind,
            origin,
            radius,
            speed,
            frequency,
            intensity: 1.0,
            max_radius,
            direction: None,
            active: true,
        }
    }

    /// A secondary wave spawned by a collision split.
    pub fn secondary(
        id: u32,
        kind: WaveKind,
        origin: Point,
        direction: DVec2,
        frequency: f64,
        speed: f64,
        intensity: f64,
    ) -> Self {
        Self {
            id,
            kind,
            origin,
            radius: 0.0,
            speed,
            frequency,
            intensity,
            max_radius: SECONDARY_MAX_RADIUS,
            direction: Some(direction),
            active: true,
        }
    }

    /// Visual spacing between rings (display concern).
    pub fn ring_spacing(&self) -> f64 {
        self.kind.ring_spacing_base() / self.frequency
    }
}

/// An immutable polygon bound to one material.
///
/// Appended by the input layer, removed only by a full reset. The
/// material is shared from the static table, never owned.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Unique id assigned by the engine; detections refer to it.
    pub id: u32,
    /// At least 3 vertices; closed implicitly (last connects to first).
    pub points: Vec<Point>,
    pub material: &'static Material,
}

/// Obstacles a primary wave has already split against.
/// One reflected/transmitted split per wave/obstacle pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitHistory {
    pub obstacles: HashSet<u32>,
}

/// A sensed obstacle point, referenced by obstacle id (never ownership).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub point: Point,
    /// Distance from the sensing origin.
    pub distance: f64,
    /// Bearing from the sensing origin, in [0, 2π).
    pub angle: f64,
    pub obstacle_id: u32,
}

/// Explicit dedup key for sonar echoes: obstacle id plus quantized
/// distance/angle, so equality never depends on raw float comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EchoKey {
    pub obstacle_id: u32,
    pub distance_decidunits: i64,
    pub angle_millirads: i64,
}

impl EchoKey {
    pub fn new(obstacle_id: u32, distance: f64, angle: f64) -> Self {
        Self {
            obstacle_id,
            distance_decidunits: (distance * 10.0).round() as i64,
            angle_millirads: (angle * 1000.0).round() as i64,
        }
    }
}

/// Echo accumulator on a sonar pulse. Echoes live exactly as long as
/// the pulse and are discarded with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SonarEchoes {
    pub detections: Vec<Detection>,
    pub seen: HashSet<EchoKey>,
}

/// Rotating beam state on the radar entity (singleton, enforced by the
/// engine). Detections accumulate for one revolution and are cleared
/// when the sweep wraps past 2π.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarSweep {
    /// Current beam bearing in radians.
    pub sweep_angle: f64,
    /// Advance per tick, in degrees.
    pub sweep_speed_deg: f64,
    /// Full beam width in radians.
    pub beam_width: f64,
    pub detections: Vec<Detection>,
    /// Obstacle ids already detected this revolution.
    pub seen: HashSet<u32>,
}

impl RadarSweep {
    pub fn new(sweep_speed_deg: f64, beam_width: f64) -> Self {
        Self {
            sweep_angle: 0.0,
            sweep_speed_deg,
            beam_width,
            detections: Vec::new(),
            seen: HashSet::new(),
        }
    }
}
