//! Cycle-phase inference and cross-cycle analytics.
//!
//! The engine is pure: callers hand over an already-fetched profile, cycle
//! history and daily logs together with an explicit reference date.

pub mod alerts;
pub mod calendar;
pub mod config;
pub mod frequency;
#[cfg(feature = "cli")]
pub mod logging;
pub mod models;
pub mod phase;
pub mod recommendation;
pub mod report;
pub mod snapshot;
pub mod stats;

pub use calendar::{generate_month, CalendarError, GRID_CELLS};
pub use config::{ConfigError, EngineConfig};
pub use models::*;
pub use phase::{calculate_phase, next_period};
pub use snapshot::SnapshotError;
