use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc::UnboundedSender;

use crate::constants::app::{MAX_DEBUG_LOG_LINES, MIN_QUERY_CHARS};
use crate::debounce::Debounce;
use crate::theme::{ColorScheme, Theme};
use crate::types::{AppEvent, BlocklistEntry, LookupRequest, Profile};

/// Where the search is in its Idle -> Searching -> found/not-found cycle.
/// Having a selected profile is tracked separately (see [`App::selected`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    CandidateFound,
    NoCandidate,
}

const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Search controller: owns every piece of mutable UI state and is changed
/// only through the transition methods below.
pub struct App {
    quit: bool,
    fps: u32,
    theme: Theme,
    colors: ColorScheme,

    // Search state
    query: String,
    candidate: Option<Profile>,
    selected: Option<Profile>,
    blocklist: Vec<BlocklistEntry>,
    busy: bool,
    blocklist_pending: bool,
    panel_offset: usize,
    phase: SearchPhase,
    debounce: Debounce,

    // Latest request tags; answers carrying an older tag are dropped
    resolve_generation: u64,
    blocklist_generation: u64,
    request_tx: Option<UnboundedSender<LookupRequest>>,

    // Hit areas recorded by the UI layer on each draw
    search_region: Rect,
    dropdown_area: Rect,

    // Debug log (Ctrl+D)
    debug_log: Vec<String>,
    debug_visible: bool,

    spinner_frame: usize,
}

impl App {
    pub fn new(
        fps: u32,
        theme: Theme,
        debounce: Duration,
        request_tx: Option<UnboundedSender<LookupRequest>>,
    ) -> Self {
        Self {
            quit: false,
            fps,
            theme,
            colors: theme.colors(),
            query: String::new(),
            candidate: None,
            selected: None,
            blocklist: Vec::new(),
            busy: false,
            blocklist_pending: false,
            panel_offset: 0,
            phase: SearchPhase::Idle,
            debounce: Debounce::new(debounce),
            resolve_generation: 0,
            blocklist_generation: 0,
            request_tx,
            search_region: Rect::default(),
            dropdown_area: Rect::default(),
            debug_log: Vec::new(),
            debug_visible: false,
            spinner_frame: 0,
        }
    }

    // ----- getters -----
    pub fn fps(&self) -> u32 { self.fps }
    pub fn quit_flag(&self) -> bool { self.quit }
    pub fn theme(&self) -> Theme { self.theme }
    pub fn colors(&self) -> &ColorScheme { &self.colors }
    pub fn query(&self) -> &str { &self.query }
    pub fn candidate(&self) -> Option<&Profile> { self.candidate.as_ref() }
    pub fn selected(&self) -> Option<&Profile> { self.selected.as_ref() }
    pub fn blocklist(&self) -> &[BlocklistEntry] { &self.blocklist }
    pub fn busy(&self) -> bool { self.busy }
    pub fn blocklist_pending(&self) -> bool { self.blocklist_pending }
    pub fn panel_offset(&self) -> usize { self.panel_offset }
    pub fn phase(&self) -> SearchPhase { self.phase }
    pub fn debug_log(&self) -> &[String] { &self.debug_log }
    pub fn debug_visible(&self) -> bool { self.debug_visible }
    pub fn debounce_pending(&self) -> bool { self.debounce.is_pending() }

    /// Time until the pending lookup fires, so the loop can wake in time
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.debounce.next_deadline(now)
    }

    pub fn spinner(&self) -> char {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }

    pub fn tick_spinner(&mut self) {
        if self.busy || self.blocklist_pending {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    // ----- rendering policy -----

    /// The dropdown shows only while there is a candidate
    pub fn dropdown_visible(&self) -> bool {
        self.candidate.is_some()
    }

    /// The panel needs a selected profile with at least one blocker.
    /// An empty result and a failed fetch look the same.
    pub fn panel_visible(&self) -> bool {
        self.selected.is_some() && !self.blocklist.is_empty()
    }

    // ----- query edits -----
    pub fn search_add_char(&mut self, c: char, now: Instant) {
        self.query.push(c);
        self.on_query_changed(now);
    }

    pub fn search_backspace(&mut self, now: Instant) {
        if self.query.pop().is_some() {
            self.on_query_changed(now);
        }
    }

    pub fn set_query(&mut self, query: &str, now: Instant) {
        self.query.clear();
        self.query.push_str(query);
        self.on_query_changed(now);
    }

    fn on_query_changed(&mut self, now: Instant) {
        self.debounce.set(now);
        if query_too_short(&self.query) && self.candidate.take().is_some() {
            self.phase = SearchPhase::Idle;
        }
    }

    /// Fire the debounced lookup once the quiet period has passed
    pub fn tick(&mut self, now: Instant) {
        if self.debounce.ready(now) {
            self.begin_resolution();
        }
    }

    /// Start resolving the current query, or clear the candidate if the
    /// query is too short to bother the network with.
    pub fn begin_resolution(&mut self) {
        self.debounce.cancel();
        let handle = self.query.trim().to_string();

        // The length gate counts what was typed; the handle sent is trimmed
        if query_too_short(&self.query) {
            self.candidate = None;
            self.phase = SearchPhase::Idle;
            self.log_debug(format!("[RESOLVE] skip {handle:?}, under {MIN_QUERY_CHARS} chars"));
            return;
        }

        self.resolve_generation += 1;
        let generation = self.resolve_generation;
        self.log_debug(format!("[RESOLVE] gen={generation} handle={handle}"));

        if self.send_request(LookupRequest::Resolve { generation, handle }) {
            self.busy = true;
            self.phase = SearchPhase::Searching;
        } else {
            self.busy = false;
            self.candidate = None;
            self.phase = SearchPhase::NoCandidate;
        }
    }

    // ----- selection / dismiss -----

    /// Commit to the shown candidate and fetch who blocks it
    pub fn select_candidate(&mut self) {
        let Some(profile) = self.candidate.take() else {
            return;
        };

        self.blocklist_generation += 1;
        let generation = self.blocklist_generation;
        let handle = profile.handle.clone();
        self.log_debug(format!("[SELECT] gen={generation} handle={handle}"));

        self.selected = Some(profile);
        self.blocklist.clear();
        self.panel_offset = 0;
        self.blocklist_pending = self.send_request(LookupRequest::Blocklist { generation, handle });

        // Closing the dropdown also abandons the search that produced it
        self.query.clear();
        self.debounce.cancel();
        self.resolve_generation += 1;
        self.busy = false;
        self.phase = SearchPhase::Idle;
    }

    /// Close the dropdown; the selected profile and its blocklist stay
    pub fn dismiss(&mut self) {
        if self.candidate.take().is_some() {
            self.log_debug("[DISMISS] dropdown closed".to_string());
            self.phase = SearchPhase::Idle;
        }
    }

    /// Esc: close the dropdown if open, otherwise clear the query
    pub fn escape(&mut self) {
        if self.dropdown_visible() {
            self.dismiss();
        } else if !self.query.is_empty() {
            self.query.clear();
            self.debounce.cancel();
            self.phase = SearchPhase::Idle;
        }
    }

    /// Scroll the blocklist rows, clamped to the list
    pub fn scroll_panel(&mut self, delta: i32) {
        let max = self.blocklist.len().saturating_sub(1) as i64;
        let next = (self.panel_offset as i64 + delta as i64).clamp(0, max.max(0));
        self.panel_offset = next as usize;
    }

    // ----- mouse -----

    /// Record the areas the last frame drew the search box and dropdown in
    pub fn set_hit_areas(&mut self, search_region: Rect, dropdown_area: Rect) {
        self.search_region = search_region;
        self.dropdown_area = dropdown_area;
    }

    /// Left button pressed at a terminal cell.
    /// A press on the dropdown selects; a press outside the search region dismisses.
    pub fn on_mouse_down(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);
        if self.dropdown_visible() && self.dropdown_area.contains(pos) {
            self.select_candidate();
        } else if !self.search_region.contains(pos) {
            self.dismiss();
        }
    }

    // ----- events -----
    pub fn on_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::Quit => self.quit = true,
            AppEvent::Resolved { generation, profile } => {
                if generation != self.resolve_generation {
                    self.log_debug(format!(
                        "[STALE] resolve gen={generation} (latest {})",
                        self.resolve_generation
                    ));
                    return;
                }
                self.busy = false;
                self.log_debug(format!(
                    "[RESOLVED] gen={generation} found={}",
                    profile.is_some()
                ));
                // The query may have shrunk while the request was in flight
                if query_too_short(&self.query) {
                    self.candidate = None;
                    self.phase = SearchPhase::Idle;
                    return;
                }
                self.phase = if profile.is_some() {
                    SearchPhase::CandidateFound
                } else {
                    SearchPhase::NoCandidate
                };
                self.candidate = profile;
            }
            AppEvent::BlocklistLoaded { generation, entries } => {
                if generation != self.blocklist_generation {
                    self.log_debug(format!(
                        "[STALE] blocklist gen={generation} (latest {})",
                        self.blocklist_generation
                    ));
                    return;
                }
                self.log_debug(format!("[BLOCKLIST] gen={generation} entries={}", entries.len()));
                self.blocklist_pending = false;
                self.blocklist = entries;
                self.panel_offset = 0;
            }
        }
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn toggle_debug_panel(&mut self) {
        self.debug_visible = !self.debug_visible;
    }

    pub fn log_debug(&mut self, msg: String) {
        log::debug!("{msg}");
        self.debug_log.push(msg);
        if self.debug_log.len() > MAX_DEBUG_LOG_LINES {
            let overflow = self.debug_log.len() - MAX_DEBUG_LOG_LINES;
            self.debug_log.drain(..overflow);
        }
    }

    fn send_request(&mut self, request: LookupRequest) -> bool {
        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };
        if !sent {
            log::warn!("[app] lookup worker unavailable, request dropped");
            self.log_debug("[WORKER] request dropped, worker unavailable".to_string());
        }
        sent
    }
}

fn query_too_short(query: &str) -> bool {
    query.chars().count() < MIN_QUERY_CHARS
}
