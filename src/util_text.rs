use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Glyph drawn where an avatar image would go.
/// Terminals can't show the image, so a present avatar gets a filled marker
/// and a missing one falls back to the handle's initial.
pub fn avatar_glyph(avatar: Option<&str>, handle: &str) -> String {
    match avatar {
        Some(url) if !url.trim().is_empty() => "◉".to_string(),
        _ => handle
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string()),
    }
}

/// Human-readable date for a block record, e.g. "Jan 1, 2024".
/// Accepts a bare ISO date or a full timestamp; anything else is shown as-is.
pub fn format_blocked_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });

    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Cut to `max_chars` characters, ending with an ellipsis when shortened
pub fn truncate_end(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Word-wrap `text` to `width` columns and keep at most `max_lines`.
/// The last kept line gets an ellipsis if anything was dropped.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        let mut word_len = word.chars().count();

        // Hard-split words longer than a whole line
        while word_len > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            word_len -= width;
            lines.push(head);
        }

        let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len > 0 {
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(&word);
            current_len += word_len;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let shortened = truncate_end(last, width.saturating_sub(1));
            *last = if shortened.ends_with('…') {
                shortened
            } else {
                format!("{shortened}…")
            };
        }
    }
    lines
}
