//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! read-only snapshot builder). They do not own state; collection
//! mutation goes through explicit spawn/despawn buffers committed after
//! iteration completes.

pub mod cleanup;
pub mod collision;
pub mod propagation;
pub mod radar;
pub mod snapshot;
pub mod sonar;
