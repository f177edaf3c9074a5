//! Terminal session: raw mode, alternate screen and mouse capture.
//!
//! Mouse capture is what lets the app see clicks outside the search box, so
//! it is acquired together with the screen and released in `Drop`. Early
//! returns, `?` and panics all restore the user's terminal.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalSession {
    terminal: Tui,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore(&mut stdout);
            return Err(e).context("failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                restore(&mut io::stdout());
                return Err(e).context("failed to create terminal");
            }
        };

        // From here on Drop restores the terminal, including on a failed clear
        let mut session = Self { terminal };
        session.terminal.clear().context("failed to clear terminal")?;
        log::debug!("[terminal] session started, mouse capture on");
        Ok(session)
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
        log::debug!("[terminal] session restored");
    }
}

/// Undo everything `enter` turned on
fn restore<W: Write>(out: &mut W) {
    let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn restore_releases_mouse_and_alternate_screen() {
        let mut out: Vec<u8> = Vec::new();
        restore(&mut out);
        let written = String::from_utf8_lossy(&out);

        assert!(written.contains("\x1b[?1000l"), "mouse capture still on: {written:?}");
        assert!(written.contains("\x1b[?1049l"), "alternate screen kept: {written:?}");
    }
}
