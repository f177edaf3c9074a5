use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::ui::DEBUG_PANEL_HEIGHT;
use crate::render::{blocklist_panel, search_result_row, PanelBody};

/// Search box height in rows, borders included
const SEARCH_BOX_HEIGHT: u16 = 3;

// ===============================
// Top-level draw
// ===============================
pub fn draw(f: &mut Frame, app: &mut App) {
    app.tick_spinner();

    let show_debug = app.debug_visible() && !app.debug_log().is_empty();

    let mut constraints: Vec<Constraint> = Vec::with_capacity(5);
    constraints.push(Constraint::Length(1)); // header
    constraints.push(Constraint::Length(SEARCH_BOX_HEIGHT)); // search box
    constraints.push(Constraint::Min(0)); // body
    if show_debug {
        constraints.push(Constraint::Length(DEBUG_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut idx = 0usize;
    header(f, chunks[idx], app);
    idx += 1;
    let search_area = chunks[idx];
    search_box(f, search_area, app);
    idx += 1;
    body(f, chunks[idx], app);
    idx += 1;
    if show_debug {
        debug_panel(f, chunks[idx], app);
        idx += 1;
    }
    footer(f, chunks[idx], app);

    // Dropdown renders last so it sits over the body
    let dropdown_area = if app.dropdown_visible() {
        draw_dropdown(f, search_area, app)
    } else {
        Rect::default()
    };
    let search_region = if dropdown_area.is_empty() {
        search_area
    } else {
        search_area.union(dropdown_area)
    };
    app.set_hit_areas(search_region, dropdown_area);
}

// ===============================
// Header / Search box
// ===============================
fn header(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();
    let line = Line::from(vec![
        Span::styled(
            " skyblocks ",
            Style::default().fg(colors.focus_border).add_modifier(Modifier::BOLD),
        ),
        Span::styled("who blocks this handle?", Style::default().fg(colors.text_dim)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn search_box(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();
    let query = app.query();

    let title = if app.busy() {
        format!(" Search handle {} ", app.spinner())
    } else {
        " Search handle ".to_string()
    };

    let text = if query.is_empty() {
        Line::styled(
            "Type a handle (3+ characters), e.g. alice",
            Style::default().fg(colors.text_dim),
        )
    } else {
        Line::styled(query.to_string(), Style::default().fg(colors.text))
    };

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.focus_border)),
    );
    f.render_widget(paragraph, area);

    if area.width > 2 {
        let typed = query.chars().count().min(area.width.saturating_sub(2) as usize) as u16;
        f.set_cursor_position((area.x + 1 + typed, area.y + 1));
    }
}

/// Draw the candidate under the search box; returns the area used
fn draw_dropdown(f: &mut Frame, search_area: Rect, app: &App) -> Rect {
    let Some(profile) = app.candidate() else {
        return Rect::default();
    };
    let colors = app.colors();

    let inner_width = search_area.width.saturating_sub(2);
    let row = search_result_row(profile, inner_width, colors);
    let wanted = row.lines.len() as u16 + 2;

    let screen = f.area();
    let below = search_area.y + search_area.height;
    let room = screen.height.saturating_sub(below);
    if room < 3 {
        return Rect::default();
    }
    let overlay = Rect {
        x: search_area.x,
        y: below,
        width: search_area.width,
        height: wanted.min(room),
    };

    f.render_widget(Clear, overlay);
    let list = List::new(vec![ListItem::new(row)])
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg),
        )
        .block(
            Block::default()
                .title(" Enter or click to select ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors.focus_border))
                .style(Style::default().bg(colors.background)),
        );
    let mut st = ListState::default().with_selected(Some(0));
    f.render_stateful_widget(list, overlay, &mut st);
    overlay
}

// ===============================
// Body
// ===============================
fn body(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();

    if app.panel_visible() {
        if let Some(profile) = app.selected() {
            render_panel(f, area, app, profile);
            return;
        }
    }

    let hint = match app.selected() {
        Some(p) if app.blocklist_pending() => {
            format!("Loading blocklist for @{} {}", p.handle, app.spinner())
        }
        _ => "Search for a handle, then select it to see who blocks it.".to_string(),
    };
    let paragraph = Paragraph::new(hint)
        .style(Style::default().fg(colors.text_dim))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors.unfocused_border)),
        );
    f.render_widget(paragraph, area);
}

fn render_panel(f: &mut Frame, area: Rect, app: &App, profile: &crate::types::Profile) {
    let colors = app.colors();
    let panel = blocklist_panel(profile, app.blocklist(), colors);

    let container = Block::default()
        .title(format!(" Blocked by ({}) ", app.blocklist().len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.unfocused_border));
    let inner = container.inner(area);
    f.render_widget(container, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let header = Paragraph::new(panel.header).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors.text_dim)),
    );
    f.render_widget(header, chunks[0]);

    match panel.body {
        PanelBody::Empty(line) => f.render_widget(Paragraph::new(line), chunks[1]),
        PanelBody::Rows(rows) => {
            let items: Vec<ListItem> = rows.into_iter().map(ListItem::new).collect();
            let mut st = ListState::default().with_offset(app.panel_offset());
            f.render_stateful_widget(List::new(items), chunks[1], &mut st);
        }
    }
}

// ===============================
// Debug / Footer
// ===============================
fn debug_panel(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();
    let visible = area.height.saturating_sub(2) as usize;
    let log = app.debug_log();
    let lines: Vec<Line> = log
        .iter()
        .skip(log.len().saturating_sub(visible))
        .map(|l| Line::raw(l.as_str()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.text_dim))
        .block(
            Block::default()
                .title(" Debug (Ctrl+D) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.debug_indicator)),
        );
    f.render_widget(paragraph, area);
}

fn footer(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();
    let mut spans = vec![Span::styled(
        " Enter select · Esc close · ↑/↓ scroll · Ctrl+D debug · Ctrl+C quit",
        Style::default().fg(colors.text_dim),
    )];
    if app.busy() || app.blocklist_pending() {
        spans.push(Span::styled(
            format!("  {} working", app.spinner()),
            Style::default().fg(colors.busy),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
