//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in field space (abstract display units).
/// x = East, y = South (screen convention: y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    pub fn range_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing to another point in radians, wrapped into [0, 2π).
    pub fn bearing_to(&self, other: &Point) -> f64 {
        (other.y - self.y)
            .atan2(other.x - self.x)
            .rem_euclid(std::f64::consts::TAU)
    }

    /// Point reached by moving `distance` along a unit direction.
    pub fn offset(&self, direction: DVec2, distance: f64) -> Point {
        Point {
            x: self.x + direction.x * distance,
            y: self.y + direction.y * distance,
        }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> DVec2 {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
