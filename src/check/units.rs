//! Human-readable byte sizes in binary (1024-based) units.

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count in the largest binary unit not exceeding it, e.g.
/// `1536` -> `"1.5KB"`.
///
/// The value is rounded to two decimals, trailing zeros trimmed, with at
/// least one decimal digit kept. The unit index is fixed before rounding,
/// so a value that rounds up to the unit boundary stays in the smaller
/// unit (`2^30 - 1` -> `"1024.0MB"`).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }

    let mut index = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && index < UNITS.len() - 1 {
        scaled /= 1024;
        index += 1;
    }

    let value = bytes as f64 / 1024f64.powi(index as i32);
    format!("{}{}", round2(value), UNITS[index])
}

fn round2(value: f64) -> String {
    let mut s = format!("{value:.2}");
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_bytes(0), "0B");
    }

    #[test]
    fn sub_kilobyte_stays_in_bytes() {
        assert_eq!(format_bytes(1023), "1023.0B");
    }

    #[test]
    fn exact_unit_multiples() {
        assert_eq!(format_bytes(1024), "1.0KB");
        assert_eq!(format_bytes(1 << 30), "1.0GB");
        assert_eq!(format_bytes(1 << 40), "1.0TB");
    }

    #[test]
    fn fractional_values_round_to_two_decimals() {
        assert_eq!(format_bytes(1536), "1.5KB");
        assert_eq!(format_bytes(1_234_567), "1.18MB");
    }

    #[test]
    fn boundary_rounds_up_without_switching_unit() {
        assert_eq!(format_bytes((1 << 30) - 1), "1024.0MB");
    }

    #[test]
    fn largest_representable_values_fit_the_table() {
        assert_eq!(format_bytes(u64::MAX), "16.0EB");
    }
}
