//! Value formatting shared by the components.

/// Format a byte count with base-1024 prefixes.
///
/// `"512 B"`, `"50.0 Ki"`, `"1.5 Gi"`
pub fn format_bytes(bytes: u64) -> String {
    const PREFIXES: [&str; 6] = ["Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut scaled = bytes as f64 / 1024.0;
    let mut idx = 0;
    while scaled >= 1024.0 && idx + 1 < PREFIXES.len() {
        scaled /= 1024.0;
        idx += 1;
    }
    format!("{:.1} {}", scaled, PREFIXES[idx])
}

/// Format an uptime in seconds.
///
/// `"0h 50m"` below one day, `"1d 2h 3m"` from one day on.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

/// Integer percentage of `part` in `whole`, `None` when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> Option<u64> {
    if whole == 0 {
        return None;
    }
    Some((100 * u128::from(part) / u128::from(whole)) as u64)
}
