//! Domain layer - constants, models, and the log load calculator

pub mod constants;
pub mod model;
pub mod service;

pub use constants::{LOG_LENGTHS, TRUCK_WEIGHT_LIMIT, WEIGHT_PER_METER};
pub use model::{LoadEstimate, LogLength, TruckSpec};
