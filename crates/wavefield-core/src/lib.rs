//! Core types and definitions for the WAVEFIELD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, materials, components, commands, state snapshots, and
//! constants. It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
