//! Pure renderers: data in, ratatui text out.
//!
//! Nothing here touches the frame or the app state, so the same output can be
//! laid out by `ui` or inspected directly in tests.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::constants::ui::{DESCRIPTION_MAX_LINES, EMPTY_BLOCKLIST_MESSAGE, UNKNOWN_DISPLAY_NAME};
use crate::theme::ColorScheme;
use crate::types::{BlocklistEntry, Profile};
use crate::util_text::{avatar_glyph, clamp_lines, format_blocked_date};

/// Columns taken by the avatar glyph and the gap after it
const GLYPH_INDENT: usize = 4;

fn glyph_span(avatar: Option<&str>, handle: &str, colors: &ColorScheme) -> Span<'static> {
    Span::styled(
        format!("[{}] ", avatar_glyph(avatar, handle)),
        Style::default().fg(colors.handle).add_modifier(Modifier::BOLD),
    )
}

fn handle_span(handle: &str, colors: &ColorScheme) -> Span<'static> {
    Span::styled(format!("@{handle}"), Style::default().fg(colors.handle))
}

/// One dropdown row: avatar, display name, handle, and up to two lines of bio.
/// `width` is the usable column count; the bio wraps inside it.
pub fn search_result_row(profile: &Profile, width: u16, colors: &ColorScheme) -> Text<'static> {
    let name = profile
        .display_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(UNKNOWN_DISPLAY_NAME)
        .to_string();

    let mut lines = vec![
        Line::from(vec![
            glyph_span(profile.avatar.as_deref(), &profile.handle, colors),
            Span::styled(
                name,
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(GLYPH_INDENT)),
            handle_span(&profile.handle, colors),
        ]),
    ];

    if let Some(desc) = profile.description.as_deref().filter(|d| !d.trim().is_empty()) {
        let wrap = (width as usize).saturating_sub(GLYPH_INDENT).max(1);
        for l in clamp_lines(desc, wrap, DESCRIPTION_MAX_LINES) {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(GLYPH_INDENT)),
                Span::styled(l, Style::default().fg(colors.text_dim)),
            ]));
        }
    }

    Text::from(lines)
}

/// Status marker: filled dot for an active block, hollow for a lifted one
pub fn status_label(active: bool) -> &'static str {
    if active {
        "● Active"
    } else {
        "○ Inactive"
    }
}

/// One blocker: avatar, handle, formatted date, status
pub fn blocklist_entry_row(entry: &BlocklistEntry, colors: &ColorScheme) -> Line<'static> {
    let status_color = if entry.status {
        colors.status_active
    } else {
        colors.status_inactive
    };

    Line::from(vec![
        glyph_span(entry.avatar.as_deref(), &entry.handle, colors),
        handle_span(&entry.handle, colors),
        Span::raw("  "),
        Span::styled(
            format_blocked_date(&entry.blocked_date),
            Style::default().fg(colors.text_dim),
        ),
        Span::raw("  "),
        Span::styled(status_label(entry.status), Style::default().fg(status_color)),
    ])
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// Nobody blocks the handle
    Empty(Line<'static>),
    /// One row per blocker, in the order received
    Rows(Vec<Line<'static>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlocklistPanel {
    pub header: Text<'static>,
    pub body: PanelBody,
}

/// Selected profile header followed by its blockers (or the empty message)
pub fn blocklist_panel(
    profile: &Profile,
    entries: &[BlocklistEntry],
    colors: &ColorScheme,
) -> BlocklistPanel {
    let mut title = vec![
        glyph_span(profile.avatar.as_deref(), &profile.handle, colors),
        Span::styled(
            format!("@{}", profile.handle),
            Style::default().fg(colors.handle).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(name) = profile.display_name.as_deref().filter(|n| !n.trim().is_empty()) {
        title.push(Span::raw("  "));
        title.push(Span::styled(name.to_string(), Style::default().fg(colors.text)));
    }
    let header = Text::from(Line::from(title));

    let body = if entries.is_empty() {
        PanelBody::Empty(Line::styled(
            EMPTY_BLOCKLIST_MESSAGE,
            Style::default().fg(colors.text_dim),
        ))
    } else {
        PanelBody::Rows(
            entries
                .iter()
                .map(|e| blocklist_entry_row(e, colors))
                .collect(),
        )
    };

    BlocklistPanel { header, body }
}
