//! Simulation engine for WAVEFIELD.
//!
//! Owns the hecs ECS world, advances wavefronts at a fixed tick rate,
//! runs collision and detection systems, and produces a FieldSnapshot
//! per tick for the rendering layer.

pub mod engine;
pub mod systems;

pub use engine::FieldEngine;
pub use wavefield_core as core;
