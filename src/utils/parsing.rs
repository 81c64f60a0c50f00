//! String parsing utilities

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Value of `KEY=value` or `KEY="value"` if `line` starts with `key=`
pub fn extract_assignment<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key)?
        .strip_prefix('=')
        .map(|value| value.trim().trim_matches('"'))
}

/// Parse a `/proc/meminfo` line value in kB
pub fn parse_kb(line: &str) -> Option<u64> {
    line.split_whitespace().nth(1)?.parse().ok()
}

/// Format uptime from seconds: `Xm`, `Xh, Ym` or `Xd, Yh, Zm`
pub fn format_uptime(seconds: u64) -> String {
    let minutes = seconds / 60 % 60;
    match seconds {
        0..=3599 => format!("{}m", minutes),
        3600..=86399 => format!("{}h, {}m", seconds / 3600, minutes),
        _ => format!("{}d, {}h, {}m", seconds / 86400, seconds / 3600 % 24, minutes),
    }
}
