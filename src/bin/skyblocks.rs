// Native binary for skyblocks - Terminal UI mode

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    fs::File,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use skyblocks::{
    app::App,
    config::{load, Config},
    lookup::{HttpLookup, Lookup},
    lookup_worker::run_lookup_worker,
    terminal::{TerminalSession, Tui},
    types::{AppEvent, LookupRequest},
    ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    let _ = dotenvy::dotenv();

    let cfg = load().context("Failed to load configuration")?;
    init_logging(&cfg)?;
    log::info!("skyblocks {} starting: {}", env!("CARGO_PKG_VERSION"), cfg.summary());

    let lookup: Arc<dyn Lookup> =
        Arc::new(HttpLookup::new(cfg.endpoints.clone()).context("Failed to build lookup client")?);

    // app <-> worker channels
    let (request_tx, request_rx) = unbounded_channel::<LookupRequest>();
    let (event_tx, event_rx) = unbounded_channel::<AppEvent>();
    let worker = tokio::spawn(run_lookup_worker(lookup, request_rx, event_tx));

    let mut app = App::new(cfg.render_fps, cfg.theme, cfg.debounce, Some(request_tx));
    if !cfg.initial_query.is_empty() {
        app.set_query(&cfg.initial_query, Instant::now());
    }

    let result = {
        let mut session = TerminalSession::enter()?;
        run_loop(&mut app, session.terminal(), event_rx).await
    };

    // Dropping the app closes the request channel and ends the worker
    drop(app);
    worker.abort();

    if let Err(ref e) = result {
        log::error!("event loop failed: {e:#}");
    }
    log::info!("skyblocks exiting");
    result
}

fn init_logging(cfg: &Config) -> Result<()> {
    let file = File::create(&cfg.log_file)
        .with_context(|| format!("Failed to open log file {}", cfg.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

async fn run_loop(
    app: &mut App,
    terminal: &mut Tui,
    mut rx: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        // frame budget (coalesced renders), woken early for a pending lookup
        let frame_ms = 1000u32.saturating_div(app.fps()) as u64;
        let budget = Duration::from_millis(frame_ms.max(1));
        let mut wait = budget.saturating_sub(last_frame.elapsed());
        if let Some(deadline) = app.next_deadline(Instant::now()) {
            wait = wait.min(deadline);
        }

        if event::poll(wait)? {
            match event::read()? {
                Event::Key(k) => {
                    if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                        handle_key(app, k);
                    }
                }
                Event::Mouse(m) => handle_mouse(app, m),
                _ => {}
            }
        }

        app.tick(Instant::now());

        while let Ok(ev) = rx.try_recv() {
            app.on_event(ev);
        }

        if last_frame.elapsed() >= budget {
            terminal.draw(|f| ui::draw(f, app))?;
            last_frame = Instant::now();
        }
        if app.quit_flag() {
            break;
        }
    }
    Ok(())
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.log_debug(format!("MOUSE: down at ({}, {})", mouse.column, mouse.row));
            app.on_mouse_down(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollUp => app.scroll_panel(-3),
        MouseEventKind::ScrollDown => app.scroll_panel(3),
        _ => {}
    }
}

fn handle_key(app: &mut App, k: KeyEvent) {
    let now = Instant::now();
    match (k.code, k.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            app.on_event(AppEvent::Quit);
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => app.toggle_debug_panel(),
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
            app.search_add_char(c, now)
        }
        (KeyCode::Backspace, _) => app.search_backspace(now),
        (KeyCode::Enter, _) => app.select_candidate(),
        (KeyCode::Esc, _) => app.escape(),
        (KeyCode::Up, _) => app.scroll_panel(-1),
        (KeyCode::Down, _) => app.scroll_panel(1),
        (KeyCode::PageUp, _) => app.scroll_panel(-10),
        (KeyCode::PageDown, _) => app.scroll_panel(10),
        _ => {}
    }
}
