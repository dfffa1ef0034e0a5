//! Domain model types

pub mod load_estimate;
pub mod log_length;
pub mod truck;

pub use load_estimate::LoadEstimate;
pub use log_length::LogLength;
pub use truck::TruckSpec;
