// ABOUTME: Interactive full-screen browser for a loaded bundle
// ABOUTME: Owns the terminal session and feeds crossterm events into the browse model

pub mod content;
pub mod layout;
pub mod list;
pub mod model;
pub mod view;
pub mod viewport;

pub use model::{BrowseModel, BrowseOptions, Control, Mode, Screen, Tab};

use crate::constants::placeholders::IMAGE_RETURN_HINT;
use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use mdocx_sdk::{Document, HeaderInfo};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the browser until the user quits
pub fn run(document: Document, header: Option<HeaderInfo>, options: BrowseOptions) -> Result<()> {
    let mut model = BrowseModel::new(document, header, options)
        .context("Failed to prepare markdown renderer")?;

    let mut session = TerminalSession::start()?;
    let result = event_loop(&mut session.terminal, &mut model);
    session.restore()?;
    result
}

fn event_loop(terminal: &mut Term, model: &mut BrowseModel) -> Result<()> {
    let (width, height) = terminal::size().context("Failed to read terminal size")?;
    model.update(Event::Resize(width, height));

    let mut overlay_drawn = false;
    loop {
        match model.screen() {
            Screen::Browse => {
                if overlay_drawn {
                    terminal.clear()?;
                    overlay_drawn = false;
                }
                terminal.draw(|frame| view::draw(frame, model))?;
            }
            Screen::Image(sequence) => {
                let backend = terminal.backend_mut();
                queue!(backend, Clear(ClearType::All), MoveTo(0, 0))?;
                write!(backend, "{}\r\n\r\n{}", sequence, IMAGE_RETURN_HINT)?;
                backend.flush()?;
                overlay_drawn = true;
            }
        }

        let event = event::read().context("Failed to read terminal event")?;
        if !is_forwarded(&event) {
            continue;
        }
        if model.update(event) == Control::Quit {
            return Ok(());
        }
    }
}

/// Key releases and bare pointer motion never reach the model
fn is_forwarded(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind != KeyEventKind::Release,
        Event::Mouse(mouse) => mouse.kind != MouseEventKind::Moved,
        _ => true,
    }
}

/// Raw mode, alternate screen, and mouse capture for the lifetime of the browser
struct TerminalSession {
    terminal: Term,
    active: bool,
}

impl TerminalSession {
    fn start() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::debug!("Failed to restore terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    };

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_pointer_motion_is_dropped() {
        assert!(!is_forwarded(&mouse(MouseEventKind::Moved)));
        assert!(is_forwarded(&mouse(MouseEventKind::Down(MouseButton::Left))));
        assert!(is_forwarded(&mouse(MouseEventKind::Drag(MouseButton::Left))));
        assert!(is_forwarded(&mouse(MouseEventKind::ScrollDown)));
    }

    #[test]
    fn test_key_release_is_dropped() {
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert!(is_forwarded(&Event::Key(press)));
        assert!(!is_forwarded(&Event::Key(release)));
        assert!(is_forwarded(&Event::Resize(80, 24)));
    }
}
