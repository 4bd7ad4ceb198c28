//! Simulation engine — the core of the field model.
//!
//! `FieldEngine` owns the hecs ECS world, processes input commands at
//! tick boundaries, runs all systems in a fixed order, and produces
//! `FieldSnapshot`s. Completely headless (no window or input
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;

use wavefield_core::commands::Command;
use wavefield_core::components::{Obstacle, RadarSweep, SonarEchoes, SplitHistory, Wavefront};
use wavefield_core::constants::*;
use wavefield_core::enums::{SystemKind, WaveKind};
use wavefield_core::errors::ConfigError;
use wavefield_core::materials;
use wavefield_core::state::{FieldSnapshot, SourcesView};
use wavefield_core::types::{Point, SimTime};

use crate::systems;
use crate::systems::collision::SecondarySpawn;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// Initial ring frequency for emitted pulses.
    pub frequency: f64,
    /// Initial propagation speed (units per tick).
    pub wave_speed: f64,
    /// Ticks between pulses while auto-emit is on.
    pub auto_emit_interval: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            wave_speed: DEFAULT_WAVE_SPEED,
            auto_emit_interval: AUTO_EMIT_INTERVAL_TICKS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct FieldEngine {
    world: World,
    time: SimTime,
    selected_system: SystemKind,
    sources: SourcesView,
    frequency: f64,
    wave_speed: f64,
    auto_emit: bool,
    auto_emit_interval: u64,
    auto_timer: u64,
    next_wave_id: u32,
    next_obstacle_id: u32,
    command_queue: VecDeque<Command>,
    despawn_buffer: Vec<hecs::Entity>,
    spawn_buffer: Vec<SecondarySpawn>,
}

impl FieldEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            selected_system: SystemKind::default(),
            sources: SourcesView {
                radio: Point::new(DEFAULT_RADIO_SOURCE.0, DEFAULT_RADIO_SOURCE.1),
                sonar: Point::new(DEFAULT_SONAR_SOURCE.0, DEFAULT_SONAR_SOURCE.1),
                radar: Point::new(DEFAULT_RADAR_SOURCE.0, DEFAULT_RADAR_SOURCE.1),
            },
            frequency: config.frequency,
            wave_speed: config.wave_speed,
            auto_emit: false,
            auto_emit_interval: config.auto_emit_interval,
            auto_timer: 0,
            next_wave_id: 0,
            next_obstacle_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            spawn_buffer: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Append a finished polygon to the obstacle registry.
    ///
    /// Fails on an unknown material key, so an obstacle can never exist
    /// with an invalid material. Fewer than 3 points is not an error:
    /// the shape is a no-op and is simply never stored.
    pub fn add_obstacle(&mut self, points: Vec<Point>, material_key: &str) -> Result<(), ConfigError> {
        let material = materials::lookup(material_key)?;
        if points.len() < 3 {
            log::debug!("ignoring degenerate obstacle with {} points", points.len());
            return Ok(());
        }
        let id = self.next_obstacle_id;
        self.next_obstacle_id += 1;
        self.world.spawn((Obstacle {
            id,
            points,
            material,
        },));
        log::debug!("obstacle {id} added ({})", material.name);
        Ok(())
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FieldSnapshot {
        self.process_commands();
        self.run_auto_emit();

        systems::propagation::run(&mut self.world);
        systems::collision::run(&mut self.world, &mut self.next_wave_id, &mut self.spawn_buffer);
        systems::sonar::run(&mut self.world);
        systems::radar::run(&mut self.world);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        self.time.advance();

        systems::snapshot::build(
            &self.world,
            &self.time,
            &self.sources,
            self.selected_system,
            self.frequency,
            self.wave_speed,
            self.auto_emit,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: Command) {
        match command {
            Command::SelectSystem { system } => {
                self.selected_system = system;
            }
            Command::SetSource { system, position } => match system {
                SystemKind::Radio => self.sources.radio = position,
                SystemKind::Sonar => self.sources.sonar = position,
                SystemKind::Radar => {
                    self.sources.radar = position;
                    // Moving the radar restarts the sweep from the new origin.
                    self.despawn_radar();
                    self.spawn_radar();
                }
            },
            Command::SetFrequency { frequency } => {
                self.frequency = frequency.clamp(FREQUENCY_MIN, FREQUENCY_MAX);
            }
            Command::SetWaveSpeed { speed } => {
                self.wave_speed = speed.clamp(WAVE_SPEED_MIN, WAVE_SPEED_MAX);
            }
            Command::EmitPulse { system } => {
                self.emit_pulse(system);
            }
            Command::ToggleAutoEmit => {
                self.auto_emit = !self.auto_emit;
                self.auto_timer = 0;
            }
            Command::StopAndClear => {
                self.auto_emit = false;
                self.auto_timer = 0;
                self.despawn_all_wavefronts();
                log::info!("stopped: all wavefronts cleared");
            }
            Command::ResetAll => {
                self.auto_emit = false;
                self.auto_timer = 0;
                // Obstacles, wavefronts, and detections go together.
                self.world.clear();
                log::info!("full reset: field cleared");
            }
        }
    }

    /// Emit one pulse while auto-emit is on, every interval ticks.
    fn run_auto_emit(&mut self) {
        if !self.auto_emit {
            return;
        }
        self.auto_timer += 1;
        if self.auto_timer >= self.auto_emit_interval {
            self.auto_timer = 0;
            self.emit_pulse(self.selected_system);
        }
    }

    /// Spawn a primary pulse for the given system.
    fn emit_pulse(&mut self, system: SystemKind) {
        let frequency = self.frequency * system.frequency_factor();
        let speed = self.wave_speed * system.speed_factor();

        match system {
            SystemKind::Radio => {
                let id = self.alloc_wave_id();
                self.world.spawn((
                    Wavefront::primary(id, WaveKind::Radio, self.sources.radio, frequency, speed),
                    SplitHistory::default(),
                ));
                log::debug!("radio wave {id} emitted");
            }
            SystemKind::Sonar => {
                let id = self.alloc_wave_id();
                self.world.spawn((
                    Wavefront::primary(id, WaveKind::Sonar, self.sources.sonar, frequency, speed),
                    SonarEchoes::default(),
                ));
                log::debug!("sonar pulse {id} emitted");
            }
            SystemKind::Radar => {
                // Only one sweep may exist; a second request is ignored.
                if self.radar_exists() {
                    log::debug!("radar pulse ignored: sweep already running");
                    return;
                }
                self.spawn_radar();
            }
        }
    }

    fn alloc_wave_id(&mut self) -> u32 {
        let id = self.next_wave_id;
        self.next_wave_id += 1;
        id
    }

    fn radar_exists(&self) -> bool {
        self.world.query::<&RadarSweep>().iter().next().is_some()
    }

    fn spawn_radar(&mut self) {
        let id = self.alloc_wave_id();
        self.world.spawn((
            Wavefront::primary(id, WaveKind::Radar, self.sources.radar, self.frequency, 0.0),
            RadarSweep::new(RADAR_SWEEP_SPEED_DEG, RADAR_BEAM_WIDTH),
        ));
        log::debug!("radar sweep {id} started");
    }

    fn despawn_radar(&mut self) {
        self.despawn_buffer.clear();
        for (entity, _sweep) in self.world.query_mut::<&RadarSweep>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    fn despawn_all_wavefronts(&mut self) {
        self.despawn_buffer.clear();
        for (entity, _wave) in self.world.query_mut::<&Wavefront>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }
}
