/// Size formatting utilities — byte counts for reports and log lines.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

const KIB: f64 = 1024.0;

/// Format a byte count as kibibytes with exactly two decimals.
///
/// This is the unit used by the largest-files report regardless of
/// magnitude: `4096 -> "4.00 KB"`, `100 -> "0.10 KB"`.
pub fn format_kib(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / KIB)
}

/// Short human-readable size for log summaries, e.g. `"3.4 MB"`.
///
/// Steps up through binary units until the value drops below 1024.
/// Reports never use this; they always print [`format_kib`].
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / KIB;
    let mut unit = 0;
    while value >= KIB && unit + 1 < UNITS.len() {
        value /= KIB;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
