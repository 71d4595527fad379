use chrono::Utc;

/// Seconds since the Unix epoch (UTC), with microsecond resolution.
pub fn gettime() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1.0e6
}
