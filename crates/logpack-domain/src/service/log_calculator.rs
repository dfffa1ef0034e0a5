//! Log amount calculation
//!
//! log_amount = weight_limit / (weight_per_meter x length)

use crate::constants::LOG_LENGTHS;
use crate::model::{LoadEstimate, LogLength, TruckSpec};

pub fn calculate_log_amount(length: LogLength, truck: &TruckSpec) -> f64 {
    f64::from(truck.weight_limit_kg) / (f64::from(truck.weight_per_meter_kg) * length.meters())
}

pub fn estimate_load(length: LogLength, truck: &TruckSpec) -> LoadEstimate {
    LoadEstimate {
        log_length_m: length.meters(),
        log_amount: calculate_log_amount(length, truck),
    }
}

/// Estimates for every offered log length, in offered order
pub fn offered_loads(truck: &TruckSpec) -> Vec<LoadEstimate> {
    LOG_LENGTHS
        .iter()
        .filter_map(|&meters| LogLength::new(meters).ok())
        .map(|length| estimate_load(length, truck))
        .collect()
}
