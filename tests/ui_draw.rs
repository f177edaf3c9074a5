//! Full-frame rendering into ratatui's TestBackend

use std::time::{Duration, Instant};

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use skyblocks::app::App;
use skyblocks::theme::Theme;
use skyblocks::types::{AppEvent, BlocklistEntry, LookupRequest, Profile};
use skyblocks::ui;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

const QUIET: Duration = Duration::from_millis(300);

fn screen_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    screen_text(terminal.backend().buffer())
}

fn resolved_app(profile: Profile) -> (App, UnboundedReceiver<LookupRequest>) {
    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(30, Theme::default(), QUIET, Some(tx));
    let now = Instant::now();
    app.set_query(&profile.handle, now);
    app.tick(now + QUIET);
    let generation = match rx.try_recv() {
        Ok(LookupRequest::Resolve { generation, .. }) => generation,
        other => panic!("unexpected {other:?}"),
    };
    app.on_event(AppEvent::Resolved { generation, profile: Some(profile) });
    (app, rx)
}

#[test]
fn idle_screen_shows_search_hint() {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let mut app = App::new(30, Theme::default(), QUIET, None);

    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Search handle"));
    assert!(screen.contains("Type a handle"));
    assert!(!screen.contains("Blocked by"));
}

#[test]
fn dropdown_lists_the_candidate_and_records_hit_areas() {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let (mut app, _rx) = resolved_app(Profile {
        handle: "alice".into(),
        display_name: Some("Alice".into()),
        ..Default::default()
    });

    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Alice"));
    assert!(screen.contains("@alice"));

    // Selected row uses the theme's selection colors
    let selection_bg = app.colors().selection_bg;
    assert_eq!(terminal.backend().buffer()[(10, 5)].bg, selection_bg);

    // The dropdown sits right under the 3-row search box (header is row 0)
    app.on_mouse_down(10, 5);
    assert!(app.selected().is_some(), "click on dropdown row should select");
}

#[test]
fn click_below_everything_dismisses_dropdown() {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let (mut app, _rx) = resolved_app(Profile { handle: "alice".into(), ..Default::default() });

    draw(&mut terminal, &mut app);
    app.on_mouse_down(10, 18);
    assert!(!app.dropdown_visible());
    assert!(app.selected().is_none());

    let screen = draw(&mut terminal, &mut app);
    assert!(!screen.contains("@alice"));
}

#[test]
fn panel_shows_blockers_after_selection() {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let (mut app, mut rx) = resolved_app(Profile {
        handle: "alice".into(),
        display_name: Some("Alice".into()),
        ..Default::default()
    });
    app.select_candidate();
    let generation = match rx.try_recv() {
        Ok(LookupRequest::Blocklist { generation, .. }) => generation,
        other => panic!("unexpected {other:?}"),
    };

    let loading = draw(&mut terminal, &mut app);
    assert!(loading.contains("Loading blocklist for @alice"));

    app.on_event(AppEvent::BlocklistLoaded {
        generation,
        entries: vec![BlocklistEntry {
            handle: "bob".into(),
            avatar: None,
            blocked_date: "2024-01-01".into(),
            status: true,
        }],
    });
    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Blocked by (1)"));
    assert!(screen.contains("@bob"));
    assert!(screen.contains("Jan 1, 2024"));
    assert!(screen.contains("Active"));
}

#[test]
fn debug_panel_toggles() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (mut app, _rx) = resolved_app(Profile { handle: "alice".into(), ..Default::default() });

    assert!(!draw(&mut terminal, &mut app).contains("Debug (Ctrl+D)"));
    app.toggle_debug_panel();
    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Debug (Ctrl+D)"));
    assert!(screen.contains("[RESOLVED]"));
}
