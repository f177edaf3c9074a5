//! Renderer output: what text ends up in each row and panel

use ratatui::text::{Line, Text};
use skyblocks::render::{blocklist_entry_row, blocklist_panel, search_result_row, PanelBody};
use skyblocks::theme::ColorScheme;
use skyblocks::types::{BlocklistEntry, Profile};

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn text_lines(text: &Text) -> Vec<String> {
    text.lines.iter().map(line_text).collect()
}

fn entry(handle: &str, date: &str, status: bool) -> BlocklistEntry {
    BlocklistEntry {
        handle: handle.into(),
        avatar: None,
        blocked_date: date.into(),
        status,
    }
}

#[test]
fn search_row_shows_name_and_handle() {
    let p = Profile {
        handle: "alice".into(),
        display_name: Some("Alice".into()),
        ..Default::default()
    };
    let lines = text_lines(&search_result_row(&p, 40, &ColorScheme::default()));

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Alice"));
    assert!(lines[0].contains("[A]"), "fallback glyph: {}", lines[0]);
    assert!(lines[1].contains("@alice"));
}

#[test]
fn search_row_falls_back_to_unknown() {
    let p = Profile { handle: "ghost".into(), display_name: Some("  ".into()), ..Default::default() };
    let lines = text_lines(&search_result_row(&p, 40, &ColorScheme::default()));
    assert!(lines[0].contains("Unknown"));
}

#[test]
fn search_row_marks_present_avatar() {
    let p = Profile {
        handle: "alice".into(),
        avatar: Some("https://cdn.example/alice.jpg".into()),
        ..Default::default()
    };
    let lines = text_lines(&search_result_row(&p, 40, &ColorScheme::default()));
    assert!(lines[0].contains("[◉]"));
}

#[test]
fn search_row_clamps_description_to_two_lines() {
    let p = Profile {
        handle: "alice".into(),
        display_name: Some("Alice".into()),
        description: Some("word ".repeat(60)),
        ..Default::default()
    };
    let lines = text_lines(&search_result_row(&p, 30, &ColorScheme::default()));

    assert_eq!(lines.len(), 4);
    assert!(lines[3].ends_with('…'));
    assert!(lines[2..].iter().all(|l| l.chars().count() <= 30));
}

#[test]
fn entry_row_shows_active_status_and_date() {
    let row = line_text(&blocklist_entry_row(&entry("bob", "2024-01-01", true), &ColorScheme::default()));
    assert!(row.contains("@bob"));
    assert!(row.contains("Jan 1, 2024"));
    assert!(row.contains("● Active"));
}

#[test]
fn entry_row_shows_inactive_status() {
    let row = line_text(&blocklist_entry_row(&entry("carol", "2023-06-15T12:00:00Z", false), &ColorScheme::default()));
    assert!(row.contains("Jun 15, 2023"));
    assert!(row.contains("○ Inactive"));
    assert!(!row.contains("● Active"));
}

#[test]
fn panel_with_no_entries_shows_empty_message() {
    let p = Profile { handle: "alice".into(), ..Default::default() };
    let panel = blocklist_panel(&p, &[], &ColorScheme::default());

    assert!(line_text(&panel.header.lines[0]).contains("@alice"));
    match panel.body {
        PanelBody::Empty(line) => {
            assert_eq!(line_text(&line), "No users have blocked this handle.")
        }
        other => panic!("expected empty body, got {other:?}"),
    }
}

#[test]
fn panel_rows_keep_input_order() {
    let p = Profile {
        handle: "alice".into(),
        display_name: Some("Alice".into()),
        ..Default::default()
    };
    let entries = vec![
        entry("bob", "2024-01-01", true),
        entry("carol", "2023-01-01", false),
        entry("dave", "2022-01-01", true),
    ];
    let panel = blocklist_panel(&p, &entries, &ColorScheme::default());

    let header = line_text(&panel.header.lines[0]);
    assert!(header.contains("@alice"));
    assert!(header.contains("Alice"));

    match panel.body {
        PanelBody::Rows(rows) => {
            let handles: Vec<String> = rows.iter().map(line_text).collect();
            assert_eq!(handles.len(), 3);
            assert!(handles[0].contains("@bob"));
            assert!(handles[1].contains("@carol"));
            assert!(handles[2].contains("@dave"));
        }
        other => panic!("expected rows, got {other:?}"),
    }
}
