//! Domain services

pub mod log_calculator;

pub use log_calculator::{calculate_log_amount, estimate_load, offered_loads};
