pub mod auth;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod label;
pub mod profile;
pub mod tags;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

// human-readable sizes for the storage bar, in powers of 1024
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    match unit {
        0 => format!("{bytes} B"),
        _ => format!("{value:.1} {}", BYTE_UNITS[unit]),
    }
}
