//! Human-readable rendering of timings, sizes, and timestamps

use chrono::{DateTime, Utc};

/// Render a microsecond timing with an appropriate unit
pub fn format_microseconds(us: f64) -> String {
    if us < 1_000.0 {
        format!("{:.2} us", us)
    } else if us < 1_000_000.0 {
        format!("{:.2} ms", us / 1_000.0)
    } else {
        format!("{:.2} s", us / 1_000_000.0)
    }
}

/// Render a byte count with an appropriate unit
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Render a kilobyte figure with an appropriate unit
pub fn format_kilobytes(kb: f64) -> String {
    if kb < 1024.0 {
        format!("{:.2} KB", kb)
    } else {
        format!("{:.2} MB", kb / 1024.0)
    }
}

/// Coarse relative-time rendering of a past timestamp
pub fn time_ago(when: DateTime<Utc>) -> String {
    let seconds = (Utc::now() - when).num_seconds().max(0);

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} hours ago", seconds / 3_600)
    } else if seconds < 604_800 {
        format!("{} days ago", seconds / 86_400)
    } else if seconds < 2_592_000 {
        format!("{} weeks ago", seconds / 604_800)
    } else {
        format!("{} months ago", seconds / 2_592_000)
    }
}

/// Truncate a string to `length` characters, appending an ellipsis
pub fn truncate(s: &str, length: usize) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }
    let mut out: String = s.chars().take(length).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_microseconds_units() {
        assert_eq!(format_microseconds(42.5), "42.50 us");
        assert_eq!(format_microseconds(8542.3), "8.54 ms");
        assert_eq!(format_microseconds(185_623.5), "185.62 ms");
        assert_eq!(format_microseconds(2_500_000.0), "2.50 s");
    }

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(666), "666 B");
        assert_eq!(format_bytes(1952), "1.91 KB");
        assert_eq!(format_bytes(524_160), "511.88 KB");
        assert_eq!(format_bytes(2 * 1024 * 1024), "2.00 MB");
    }

    #[test]
    fn test_format_kilobytes_units() {
        assert_eq!(format_kilobytes(128.0), "128.00 KB");
        assert_eq!(format_kilobytes(2048.0), "2.00 MB");
    }

    #[test]
    fn test_time_ago_buckets() {
        assert_eq!(time_ago(Utc::now()), "just now");
        assert_eq!(time_ago(Utc::now() - Duration::minutes(5)), "5 minutes ago");
        assert_eq!(time_ago(Utc::now() - Duration::hours(3)), "3 hours ago");
        assert_eq!(time_ago(Utc::now() - Duration::days(2)), "2 days ago");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("CRYSTALS-Dilithium", 8), "CRYSTALS...");
        assert_eq!(truncate("Kyber", 10), "Kyber");
    }
}
