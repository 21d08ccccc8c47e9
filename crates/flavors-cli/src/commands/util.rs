//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use regex::Regex;

/// `N <unit>[s] ago`, e.g. `30 minutes ago`.
static RELATIVE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<amount>\d+)\s+(?P<unit>minute|hour|day|week)s?\s+ago$").unwrap()
});

/// Furthest a relative bound may reach back, roughly 1000 years.
const MAX_LOOKBACK_SECONDS: i64 = 1000 * 365 * 24 * 60 * 60;

/// Parses the `--since` bound for `summary`.
///
/// Accepts RFC 3339 (`2026-01-15T10:30:00Z`, `2026-01-15T12:30:00+02:00`) or a
/// relative time (`2 hours ago`, `1 week ago`).
pub fn parse_since(s: &str) -> anyhow::Result<DateTime<Utc>> {
    resolve_since(s, Utc::now()).with_context(|| format!("invalid --since value {s:?}"))
}

fn resolve_since(s: &str, now: DateTime<Utc>) -> anyhow::Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    Ok(now - lookback(s)?)
}

/// How far back a relative time such as `3 days ago` reaches.
fn lookback(s: &str) -> anyhow::Result<Duration> {
    let Some(caps) = RELATIVE_TIME_RE.captures(s) else {
        anyhow::bail!(
            "expected RFC 3339 (e.g., 2026-01-15T10:30:00Z) or relative time (e.g., '2 hours ago')"
        );
    };

    let unit_seconds: i64 = match &caps["unit"] {
        "minute" => 60,
        "hour" => 60 * 60,
        "day" => 24 * 60 * 60,
        "week" => 7 * 24 * 60 * 60,
        unit => anyhow::bail!("unknown time unit: {unit}"),
    };

    let seconds = caps["amount"]
        .parse::<i64>()
        .ok()
        .and_then(|amount| amount.checked_mul(unit_seconds))
        .filter(|seconds| *seconds <= MAX_LOOKBACK_SECONDS);
    let Some(seconds) = seconds else {
        anyhow::bail!("lookback too large: {s}");
    };

    Ok(Duration::seconds(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-29T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn parses_rfc3339_in_utc() {
        let parsed = resolve_since("2099-01-01T00:00:00Z", now()).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2099-01-01T00:00:00+00:00");
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let parsed = resolve_since("2025-01-29T14:00:00+02:00", now()).unwrap();
        assert_eq!(parsed, now());
    }

    #[test]
    fn parses_relative_times() {
        assert_eq!(
            resolve_since("2 hours ago", now()).unwrap(),
            now() - Duration::hours(2)
        );
        assert_eq!(
            resolve_since("1 day ago", now()).unwrap(),
            now() - Duration::days(1)
        );
        assert_eq!(
            resolve_since("30 minutes ago", now()).unwrap(),
            now() - Duration::minutes(30)
        );
        assert_eq!(
            resolve_since("1 week ago", now()).unwrap(),
            now() - Duration::weeks(1)
        );
    }

    #[test]
    fn rejects_oversized_relative_times() {
        let err = resolve_since("99999999 weeks ago", now()).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn rejects_amounts_beyond_i64() {
        let err = resolve_since("99999999999999999999 minutes ago", now()).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(
            resolve_since("  1 hour ago\n", now()).unwrap(),
            now() - Duration::hours(1)
        );
    }

    #[test]
    fn parse_since_error_names_the_flag() {
        let err = parse_since("not-a-time").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid --since"), "got: {message}");
        assert!(message.contains("not-a-time"), "got: {message}");
    }

    #[test]
    fn rejects_date_without_time() {
        assert!(parse_since("2025-01-01").is_err());
    }
}
