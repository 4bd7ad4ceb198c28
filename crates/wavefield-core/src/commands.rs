//! Commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Invalid commands (e.g. emitting a radar pulse while a sweep is
//! already running) are silently ignored, not errors.
//!
//! Obstacle creation is not a command: it can fail on an unknown
//! material key, so it is a direct `Result`-returning engine method.

use serde::{Deserialize, Serialize};

use crate::enums::SystemKind;
use crate::types::Point;

/// All input-layer actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Choose which system subsequent pulses and auto-emit target.
    SelectSystem { system: SystemKind },

    /// Move a system's source. Moving the radar source resets the
    /// sweep and restarts it from the new origin.
    SetSource { system: SystemKind, position: Point },

    /// Ring frequency for newly emitted pulses (clamped 0.1 - 5.0).
    /// Display-only: affects ring spacing, never collision logic.
    SetFrequency { frequency: f64 },

    /// Propagation speed for newly emitted pulses (clamped 1 - 10).
    SetWaveSpeed { speed: f64 },

    /// Emit a single pulse from the given system's source.
    EmitPulse { system: SystemKind },

    /// Toggle continuous emission at a fixed interval.
    ToggleAutoEmit,

    /// Cancel auto-emit and clear all wavefronts and detections.
    /// Obstacles survive.
    StopAndClear,

    /// Full reset: wavefronts, detections, and obstacles all cleared
    /// atomically.
    ResetAll,
}
