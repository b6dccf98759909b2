//! Formatting Helpers
//!
//! Escaping, truncation and date wording shared by every renderer.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const ELLIPSIS: &str = "...";

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Cut `text` to at most `budget` characters, appending "..." when anything was cut.
pub fn truncate(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// "1 task", "3 tasks"
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse the timestamp shapes the backend emits (RFC 3339, SQLite datetime, bare date).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    // Go's time.Time String() form, e.g. "2024-03-01 09:30:00.123 +0200 CEST"
    let without_abbr = raw
        .rsplit_once(' ')
        .filter(|(_, abbr)| !abbr.is_empty() && abbr.chars().all(|c| c.is_ascii_alphabetic()))
        .map_or(raw, |(head, _)| head);
    if let Ok(dt) = DateTime::parse_from_str(without_abbr, "%Y-%m-%d %H:%M:%S%.f %z") {
        return Some(dt.with_timezone(&Utc));
    }
    parse_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|n| n.and_utc())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Calendar-day wording relative to `today`: "today", "in 3 days", "2 days ago".
pub fn relative_date(raw: &str, today: NaiveDate) -> String {
    let Some(date) = parse_date(raw.trim()) else {
        return raw.to_string();
    };
    let days = (date - today).num_days();
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        2..=30 => format!("in {} days", days),
        -30..=-2 => format!("{} days ago", -days),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

/// Wording for a moment in the past: "just now", "5 minutes ago", then calendar days.
pub fn relative_time(raw: &str, now: DateTime<Utc>) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let elapsed = now.signed_duration_since(ts);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} ago", count_label(minutes as usize, "minute"))
    } else if elapsed.num_hours() < 24 {
        format!("{} ago", count_label(elapsed.num_hours() as usize, "hour"))
    } else {
        relative_date(&ts.format("%Y-%m-%d").to_string(), now.date_naive())
    }
}

/// Due date label for task rows and project cards.
pub fn due_label(due_date: Option<&str>, today: NaiveDate) -> String {
    match due_date {
        Some(raw) => match parse_date(raw.trim()) {
            Some(date) if date < today => format!("Overdue ({})", relative_date(raw, today)),
            Some(_) => format!("Due {}", relative_date(raw, today)),
            None => format!("Due: {}", raw),
        },
        None => "No due date".to_string(),
    }
}

pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_truncate_at_budget() {
        let content = "a".repeat(200);
        let shown = truncate(&content, 150);
        assert_eq!(shown.len(), 153);
        assert!(shown.ends_with("..."));
        assert_eq!(&shown[..150], &content[..150]);

        assert_eq!(truncate("short", 150), "short");
        assert_eq!(truncate(&"b".repeat(150), 150), "b".repeat(150));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(truncate(&text, 4), "éééé...");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "task"), "0 tasks");
        assert_eq!(count_label(1, "task"), "1 task");
        assert_eq!(count_label(12, "task"), "12 tasks");
    }

    #[test]
    fn test_relative_date() {
        let today = day("2024-03-10");
        assert_eq!(relative_date("2024-03-10", today), "today");
        assert_eq!(relative_date("2024-03-11", today), "tomorrow");
        assert_eq!(relative_date("2024-03-09", today), "yesterday");
        assert_eq!(relative_date("2024-03-15", today), "in 5 days");
        assert_eq!(relative_date("2024-03-01T08:00:00Z", today), "9 days ago");
        assert_eq!(relative_date("2023-12-25", today), "Dec 25, 2023");
        assert_eq!(relative_date("someday", today), "someday");
    }

    #[test]
    fn test_relative_time() {
        let now = parse_timestamp("2024-03-10T12:00:00Z").unwrap();
        assert_eq!(relative_time("2024-03-10 11:59:30", now), "just now");
        assert_eq!(relative_time("2024-03-10T11:15:00Z", now), "45 minutes ago");
        assert_eq!(relative_time("2024-03-10 09:00:00", now), "3 hours ago");
        assert_eq!(relative_time("2024-03-07 09:00:00.5+00:00", now), "3 days ago");
        assert_eq!(relative_time("2024-03-10 11:00:00 +0000 UTC", now), "1 hour ago");
        assert_eq!(relative_time("2024-03-10 11:00:00.123 +0000 UTC", now), "59 minutes ago");
    }

    #[test]
    fn test_parse_go_time_keeps_offset() {
        let expected = parse_timestamp("2024-03-01T07:30:00Z");
        assert_eq!(parse_timestamp("2024-03-01 09:30:00 +0200 CEST"), expected);
        assert_eq!(parse_timestamp("2024-03-01 02:30:00.000 -0500 EST"), expected);
        assert_eq!(parse_timestamp("2024-03-01 07:30:00 +0000 UTC"), expected);
        assert_eq!(parse_timestamp("2024-03-01 09:30:00 +0200"), expected);
    }

    #[test]
    fn test_due_label() {
        let today = day("2024-03-10");
        assert_eq!(due_label(None, today), "No due date");
        assert_eq!(due_label(Some("2024-03-12"), today), "Due in 2 days");
        assert_eq!(due_label(Some("2024-03-08"), today), "Overdue (2 days ago)");
    }

    #[test]
    fn test_capitalize_and_percent() {
        assert_eq!(capitalize("active"), "Active");
        assert_eq!(capitalize(""), "");
        assert_eq!(percent(66.666, 1), "66.7%");
        assert_eq!(percent(50.0, 0), "50%");
    }
}
