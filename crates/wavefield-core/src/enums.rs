//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{SONAR_FREQUENCY_FACTOR, SONAR_SPEED_FACTOR};

/// Which emitter a command addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemKind {
    #[default]
    Radio,
    Sonar,
    Radar,
}

/// Kind tag on the single polymorphic wavefront entity.
///
/// Primary kinds map 1:1 onto [`SystemKind`]; `Reflected` and
/// `Transmitted` are secondaries spawned by collision splits and are
/// never re-tested against obstacles (single-bounce model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveKind {
    Radio,
    Sonar,
    Radar,
    Reflected,
    Transmitted,
}

impl WaveKind {
    /// Base ring spacing before division by frequency.
    /// Display-only: collision logic never reads this.
    pub fn ring_spacing_base(&self) -> f64 {
        match self {
            WaveKind::Sonar => 80.0,
            _ => 50.0,
        }
    }

    /// True for the kinds that expand as circular pulses.
    pub fn is_expanding(&self) -> bool {
        !matches!(self, WaveKind::Radar)
    }
}

impl SystemKind {
    /// Frequency scale applied when emitting a pulse of this system.
    pub fn frequency_factor(&self) -> f64 {
        match self {
            SystemKind::Sonar => SONAR_FREQUENCY_FACTOR,
            _ => 1.0,
        }
    }

    /// Speed scale applied when emitting a pulse of this system.
    pub fn speed_factor(&self) -> f64 {
        match self {
            SystemKind::Sonar => SONAR_SPEED_FACTOR,
            _ => 1.0,
        }
    }
}
