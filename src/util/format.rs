//! Display formatting helpers for the dashboard and shared chrome.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group an integer with thousands separators: `1234567` → `"1,234,567"`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format cents as USD: `482095` → `"$4,820.95"`.
pub fn currency_usd(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    #[allow(clippy::cast_possible_wrap)]
    let dollars = thousands((abs / 100) as i64);
    format!("{sign}${dollars}.{:02}", abs % 100)
}

/// Format a ratio value as a percentage with one decimal: `4.2` → `"4.2%"`.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed percentage for deltas: `4.2` → `"+4.2%"`.
pub fn percent_delta(value: f64) -> String {
    format!("{value:+.1}%")
}

/// Truncate to at most `max_chars` characters, appending `…` when shortened.
///
/// Counts characters, not bytes, so multi-byte input never splits mid-char.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Binary file size: `1536` → `"1.5 KiB"`.
pub fn file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}

/// Coarse relative time for the activity feed.
pub fn relative_time(now_ms: i64, ts_ms: i64) -> String {
    let elapsed_s = (now_ms - ts_ms).max(0) / 1000;
    if elapsed_s < 60 {
        return "just now".to_owned();
    }
    let minutes = elapsed_s / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

/// Up-to-two uppercase initials for the avatar badge: `"Ada Lovelace"` → `"AL"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Reads `Date.now()` in the browser; outside it (SSR, host tests) returns 0,
/// which keeps relative-time output deterministic.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
