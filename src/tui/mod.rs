//! Terminal user interface: the pad widgets, theme, and demo loop.
//!
//! This module contains the [`Key`] and [`NumberPad`] widgets, terminal
//! setup/teardown, and the interactive demo application driven by the
//! host terminal's event loop.

pub mod key;
pub mod numpad;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode as TermKey},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::events::KeyEventKind;
use crate::models::KeyCode;

// Re-export TUI components
pub use key::Key;
pub use numpad::NumberPad;
pub use theme::{Theme, ThemeVariant};

/// Shared demo input state, edited from observer callbacks.
#[derive(Debug, Default)]
struct InputState {
    /// Value being typed
    buffer: String,
    /// Last value confirmed with the enter key
    submitted: Option<String>,
    /// Most recent notification, for the status bar
    last_event: Option<(KeyCode, KeyEventKind)>,
    /// Set by the cancel key
    quit: bool,
}

impl InputState {
    fn apply_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Backspace => {
                self.buffer.pop();
            }
            KeyCode::Clear | KeyCode::Delete => self.buffer.clear(),
            KeyCode::Enter => {
                if !self.buffer.is_empty() {
                    self.submitted = Some(std::mem::take(&mut self.buffer));
                }
            }
            KeyCode::Cancel => self.quit = true,
            other => {
                if let Some(ch) = other.char_value() {
                    self.buffer.push(ch);
                }
            }
        }
    }
}

/// Demo application state: the pad plus an input field driven by it.
///
/// All editing happens inside observer callbacks registered on the pad,
/// exercising the same observer API an embedding application would use.
pub struct PadApp {
    /// The pad widget
    pub pad: NumberPad,
    /// Active color theme
    pub theme: Theme,
    input: Rc<RefCell<InputState>>,
}

impl PadApp {
    /// Creates the demo app from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut pad = NumberPad::with_gaps(config.pad.horizontal_gap, config.pad.vertical_gap);
        let input = Rc::new(RefCell::new(InputState::default()));

        let pressed_input = Rc::clone(&input);
        pad.set_on_key_pressed(Rc::new(move |event| {
            if let Some(code) = event.metadata {
                pressed_input.borrow_mut().last_event = Some((code, event.kind));
            }
        }));

        let released_input = Rc::clone(&input);
        pad.set_on_key_released(Rc::new(move |event| {
            let mut state = released_input.borrow_mut();
            if let Some(code) = event.metadata {
                state.last_event = Some((code, event.kind));
                state.apply_release(code);
            }
        }));

        Self {
            pad,
            theme: Theme::from_mode(config.ui.theme_mode),
            input,
        }
    }

    /// Whether the cancel key asked the demo to exit.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.input.borrow().quit
    }

    /// Value currently being typed.
    #[must_use]
    pub fn value(&self) -> String {
        self.input.borrow().buffer.clone()
    }

    /// Last value confirmed with the enter key.
    #[must_use]
    pub fn submitted(&self) -> Option<String> {
        self.input.borrow().submitted.clone()
    }

    fn last_event(&self) -> Option<(KeyCode, KeyEventKind)> {
        self.input.borrow().last_event
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop for the demo application.
pub fn run_pad(
    app: &mut PadApp,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if matches!(key.code, TermKey::Char('q') | TermKey::Esc) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    app.pad.handle_mouse(&mouse);
                }
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        if app.quit_requested() {
            break;
        }
    }

    Ok(())
}

/// Render the demo UI from current state
fn render(f: &mut Frame, app: &mut PadApp) {
    let theme = &app.theme;

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Value field
            Constraint::Min(10),   // Pad
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_value_field(f, chunks[0], app);
    app.pad.render(f, chunks[1], theme);
    render_status_bar(f, chunks[2], app);
}

/// Render the input field fed by the pad's observers
fn render_value_field(f: &mut Frame, area: Rect, app: &PadApp) {
    let theme = &app.theme;
    let value = app.value();

    let mut spans = vec![Span::styled(
        if value.is_empty() {
            " ".to_string()
        } else {
            format!(" {value}")
        },
        Style::default().fg(theme.text),
    )];
    if let Some(submitted) = app.submitted() {
        spans.push(Span::styled(
            format!("  (last: {submitted})"),
            Style::default().fg(theme.success),
        ));
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {APP_NAME} "))
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background)),
    );

    f.render_widget(field, area);
}

/// Render the status bar with the last notification and help hint
fn render_status_bar(f: &mut Frame, area: Rect, app: &PadApp) {
    let theme = &app.theme;

    let event_span = match app.last_event() {
        Some((code, kind)) => {
            let kind_text = match kind {
                KeyEventKind::Pressed => "pressed",
                KeyEventKind::Released => "released",
            };
            Span::styled(
                format!("{} {kind_text}", code.label()),
                Style::default().fg(theme.accent),
            )
        }
        None => Span::styled("click a key", Style::default().fg(theme.text_muted)),
    };

    let line = Line::from(vec![
        Span::styled(" Last: ", Style::default().fg(theme.primary)),
        event_span,
        Span::styled("  |  q/Esc: quit", Style::default().fg(theme.text_muted)),
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background)),
    );

    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn click(app: &mut PadApp, code: KeyCode) {
        let area = app.pad.key(code).expect("key exists").area();
        let (x, y) = (area.x + area.width / 2, area.y + area.height / 2);
        for kind in [
            MouseEventKind::Down(MouseButton::Left),
            MouseEventKind::Up(MouseButton::Left),
        ] {
            app.pad.handle_mouse(&MouseEvent {
                kind,
                column: x,
                row: y,
                modifiers: KeyModifiers::NONE,
            });
        }
    }

    fn test_app() -> PadApp {
        let mut app = PadApp::new(&Config::default());
        app.pad.resize(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_clicks_build_a_value() {
        let mut app = test_app();
        click(&mut app, KeyCode::Num1);
        click(&mut app, KeyCode::Num2);
        click(&mut app, KeyCode::Dot);
        click(&mut app, KeyCode::Num5);
        assert_eq!(app.value(), "12.5");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = test_app();
        click(&mut app, KeyCode::Num7);
        click(&mut app, KeyCode::Num8);
        click(&mut app, KeyCode::Backspace);
        assert_eq!(app.value(), "7");

        click(&mut app, KeyCode::Clear);
        assert_eq!(app.value(), "");
    }

    #[test]
    fn test_enter_submits_value() {
        let mut app = test_app();
        click(&mut app, KeyCode::Num4);
        click(&mut app, KeyCode::Num2);
        click(&mut app, KeyCode::Enter);
        assert_eq!(app.value(), "");
        assert_eq!(app.submitted(), Some("42".to_string()));
    }

    #[test]
    fn test_cancel_requests_quit() {
        let mut app = test_app();
        assert!(!app.quit_requested());
        click(&mut app, KeyCode::Cancel);
        assert!(app.quit_requested());
    }

    #[test]
    fn test_navigation_keys_do_not_edit() {
        let mut app = test_app();
        click(&mut app, KeyCode::Num3);
        click(&mut app, KeyCode::Up);
        click(&mut app, KeyCode::Left);
        assert_eq!(app.value(), "3");
        assert_eq!(
            app.input.borrow().last_event,
            Some((KeyCode::Left, KeyEventKind::Released))
        );
    }
}
