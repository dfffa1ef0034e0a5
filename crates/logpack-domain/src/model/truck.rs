//! Truck specification

use crate::constants::{TRUCK_WEIGHT_LIMIT, WEIGHT_PER_METER};

/// Payload capacity and log weight rate for a truck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruckSpec {
    /// Maximum payload capacity [kg]
    pub weight_limit_kg: u32,
    /// Log weight per meter of length [kg/m]
    pub weight_per_meter_kg: u32,
}

impl Default for TruckSpec {
    fn default() -> Self {
        Self {
            weight_limit_kg: TRUCK_WEIGHT_LIMIT,
            weight_per_meter_kg: WEIGHT_PER_METER,
        }
    }
}
