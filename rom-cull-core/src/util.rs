const MIB: f64 = 1024.0 * 1024.0;

/// Byte count in mebibytes, as used throughout the cull report.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / MIB
}

/// Format a byte count as megabytes with two decimals (e.g., "2.00MB").
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2}MB", bytes_to_mb(bytes))
}

/// Format a byte count with fractional KB/MB/GB (e.g., "1.5 KB", "2.3 MB").
pub fn format_bytes_approx(bytes: u64) -> String {
    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.1} GB", bytes as f64 / (MIB * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / MIB)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
