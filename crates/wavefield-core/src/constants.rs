//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz) — one tick per display frame.
pub const TICK_RATE: u32 = 60;

// --- World bounds ---

/// Field width in display units.
pub const WORLD_WIDTH: f64 = 1200.0;

/// Field height in display units.
pub const WORLD_HEIGHT: f64 = 800.0;

// --- Wave defaults ---

/// Default ring frequency (slider range 0.1 - 5.0).
pub const DEFAULT_FREQUENCY: f64 = 1.0;

/// Default propagation speed in units per tick (slider range 1 - 10).
pub const DEFAULT_WAVE_SPEED: f64 = 2.0;

/// Radius at which a primary radio wave deactivates.
pub const RADIO_MAX_RADIUS: f64 = 600.0;

/// Radius at which a sonar pulse deactivates.
pub const SONAR_MAX_RADIUS: f64 = 400.0;

/// Radius at which reflected/transmitted waves deactivate.
pub const SECONDARY_MAX_RADIUS: f64 = 400.0;

/// Sonar pulses ring at half the configured frequency.
pub const SONAR_FREQUENCY_FACTOR: f64 = 0.5;

/// Sonar pulses travel at 80% of the configured speed.
pub const SONAR_SPEED_FACTOR: f64 = 0.8;

// --- Collision sampling ---

/// Number of ring samples tested against each obstacle per tick.
/// Bounds both detection latency (thin obstacles can slip between
/// samples) and per-tick cost (obstacles × samples).
pub const COLLISION_SAMPLES: u32 = 36;

/// Minimum coefficient for a material to spawn a secondary wave.
pub const SPLIT_EPSILON: f64 = 0.01;

/// Distance a transmitted wave's origin is pushed past the collision
/// point along the incident direction, to clear the obstacle boundary.
pub const TRANSMITTED_ORIGIN_OFFSET: f64 = 20.0;

// --- Sonar ---

/// Echo tolerance: a vertex is detected when the pulse radius is
/// within this distance of the vertex range.
pub const SONAR_ECHO_TOLERANCE: f64 = 5.0;

// --- Radar ---

/// Radar detection range in display units.
pub const RADAR_RANGE: f64 = 250.0;

/// Sweep advance per tick, in degrees.
pub const RADAR_SWEEP_SPEED_DEG: f64 = 3.0;

/// Full beam width in radians (30 degrees).
pub const RADAR_BEAM_WIDTH: f64 = std::f64::consts::PI / 6.0;

// --- Auto emission ---

/// Ticks between pulses while auto-emit is on (~2 seconds at 60 Hz).
pub const AUTO_EMIT_INTERVAL_TICKS: u64 = 120;

// --- Default source positions ---

/// Default radio source (left-center of the field).
pub const DEFAULT_RADIO_SOURCE: (f64, f64) = (WORLD_WIDTH / 4.0, WORLD_HEIGHT / 2.0);

/// Default sonar source (upper-left quadrant).
pub const DEFAULT_SONAR_SOURCE: (f64, f64) = (WORLD_WIDTH / 4.0, WORLD_HEIGHT / 4.0);

/// Default radar source (lower-left quadrant).
pub const DEFAULT_RADAR_SOURCE: (f64, f64) = (WORLD_WIDTH / 4.0, 3.0 * WORLD_HEIGHT / 4.0);

// --- Parameter clamps ---

/// Frequency slider bounds.
pub const FREQUENCY_MIN: f64 = 0.1;
pub const FREQUENCY_MAX: f64 = 5.0;

/// Speed slider bounds (units per tick).
pub const WAVE_SPEED_MIN: f64 = 1.0;
pub const WAVE_SPEED_MAX: f64 = 10.0;
