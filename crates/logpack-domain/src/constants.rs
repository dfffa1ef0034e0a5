//! Company constants for log packing

/// Maximum payload capacity of the truck [kg]
pub const TRUCK_WEIGHT_LIMIT: u32 = 1100;

/// How much a log weighs per meter of length [kg/m]
pub const WEIGHT_PER_METER: u32 = 20;

/// Offered log lengths [m]
///
/// Shown to the user as guidance. Input is not restricted to these values
/// unless strict mode is enabled.
pub const LOG_LENGTHS: [f64; 3] = [0.25, 0.5, 1.0];

/// Check whether a length is exactly one of the offered lengths
pub fn is_offered_length(meters: f64) -> bool {
    LOG_LENGTHS.contains(&meters)
}

/// Render the offered lengths as `[0.25, 0.5, 1.0]`
pub fn format_log_lengths() -> String {
    let items: Vec<String> = LOG_LENGTHS.iter().map(|l| format!("{:?}", l)).collect();
    format!("[{}]", items.join(", "))
}
