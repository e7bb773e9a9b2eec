//! Timestamp parsing and the relative date labels shared by list and thread
//! views.
//!
//! Wire timestamps are strings and not uniformly formatted, so every recency
//! sort goes through [`parse_when`] rather than trusting the raw value.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Current instant as an RFC 3339 string with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Lenient timestamp parse: RFC 3339 first, then a naive datetime, then a
/// plain `YYYY-MM-DD` date. Returns `None` for anything else; unparseable
/// values sort last.
pub fn parse_when(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|n| n.and_utc());
    }
    None
}

pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

pub fn is_yesterday(d: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    same_day(d, now - Duration::days(1))
}

/// Label for a message row: "Just now" within a minute, clock time today,
/// "Yesterday", else a full date.
pub fn message_label(d: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if now.signed_duration_since(d).num_seconds() < 60 {
        return "Just now".to_string();
    }
    if same_day(d, now) {
        return d.format("%-I:%M %p").to_string();
    }
    if is_yesterday(d, now) {
        return "Yesterday".to_string();
    }
    d.format("%b %-d, %Y").to_string()
}

/// Label for a day-group header inside a thread.
pub fn header_label(d: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if same_day(d, now) {
        return "Today".to_string();
    }
    if is_yesterday(d, now) {
        return "Yesterday".to_string();
    }
    d.format("%b %-d, %Y").to_string()
}

/// Label for a conversation-list row; drops the year for current-year dates.
pub fn list_label(d: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if same_day(d, now) {
        return "Today".to_string();
    }
    if is_yesterday(d, now) {
        return "Yesterday".to_string();
    }
    if d.year() == now.year() {
        d.format("%b %d").to_string()
    } else {
        d.format("%b %-d, %Y").to_string()
    }
}
