//! A single interactive pad key.
//!
//! A key owns its label, optional metadata, and observer registry. Mouse
//! input that lands inside its last laid-out rectangle is normalized into
//! a press or release notification and dispatched synchronously.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::events::{KeyEvent, KeyEventKind, KeyEventObserver, ObserverRegistry};
use crate::tui::Theme;

/// A single clickable key.
///
/// The metadata type `T` identifies the key semantically to application
/// code (the pad uses [`crate::models::KeyCode`]); it travels with every
/// event the key fires.
pub struct Key<T> {
    text: String,
    metadata: Option<T>,
    observers: ObserverRegistry<T>,
    area: Rect,
    pressed: bool,
}

impl<T: Clone> Key<T> {
    /// Creates a key with the given display text and no metadata.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: None,
            observers: ObserverRegistry::new(),
            area: Rect::default(),
            pressed: false,
        }
    }

    /// Attaches metadata to the key.
    #[must_use]
    pub fn with_metadata(mut self, metadata: T) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Current display text.
    #[must_use]
    pub fn key_text(&self) -> &str {
        &self.text
    }

    /// Replaces the display text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current metadata, if any.
    #[must_use]
    pub fn metadata(&self) -> Option<&T> {
        self.metadata.as_ref()
    }

    /// Replaces the metadata.
    pub fn set_metadata(&mut self, metadata: Option<T>) {
        self.metadata = metadata;
    }

    /// Registers an observer for press notifications.
    ///
    /// Re-registering an already registered observer is silently ignored.
    pub fn set_on_key_pressed(&mut self, observer: KeyEventObserver<T>) {
        self.observers.add(observer, KeyEventKind::Pressed);
    }

    /// Removes a press observer. No-op if it was never registered.
    pub fn remove_on_key_pressed(&mut self, observer: &KeyEventObserver<T>) {
        self.observers.remove(observer);
    }

    /// Registers an observer for release notifications.
    ///
    /// Re-registering an already registered observer is silently ignored.
    pub fn set_on_key_released(&mut self, observer: KeyEventObserver<T>) {
        self.observers.add(observer, KeyEventKind::Released);
    }

    /// Removes a release observer. No-op if it was never registered.
    pub fn remove_on_key_released(&mut self, observer: &KeyEventObserver<T>) {
        self.observers.remove(observer);
    }

    /// Removes every registered observer.
    pub fn remove_all_observers(&mut self) {
        self.observers.clear();
    }

    /// Rectangle assigned by the last layout pass.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Assigns the key's rectangle. Called by the pad on every layout pass.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Whether the key is currently held down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the given terminal position falls inside the key.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Handles a raw mouse event.
    ///
    /// Left-button down inside the key fires a press, left-button up inside
    /// the key fires a release. Everything else is ignored. Returns whether
    /// the event was handled.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        if !self.hit(mouse.column, mouse.row) {
            return false;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press();
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.release();
                true
            }
            _ => false,
        }
    }

    /// Fires a press notification and marks the key held.
    pub fn press(&mut self) {
        self.pressed = true;
        self.fire(KeyEventKind::Pressed);
    }

    /// Fires a release notification and clears the held state.
    pub fn release(&mut self) {
        self.pressed = false;
        self.fire(KeyEventKind::Released);
    }

    fn fire(&self, kind: KeyEventKind) {
        let event = KeyEvent::new(self.text.clone(), self.metadata.clone(), kind);
        self.observers.dispatch(&event);
    }

    /// Renders the key at its assigned rectangle.
    pub fn render(&self, f: &mut Frame, theme: &Theme) {
        let area = self.area;
        if area.width < 2 || area.height < 2 {
            return;
        }

        let (border_style, text_style) = if self.pressed {
            (
                Style::default().fg(theme.background),
                Style::default().fg(theme.background).bg(theme.accent),
            )
        } else {
            (
                Style::default().fg(theme.primary),
                Style::default().fg(theme.text),
            )
        };

        let block = Block::default().borders(Borders::ALL).style(
            Style::default().bg(if self.pressed {
                theme.accent
            } else {
                theme.background
            }),
        );
        let block = block.border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Center the label vertically; truncate to fit the inner width.
        let label: String = self.text.chars().take(inner.width as usize).collect();
        let label_area = Rect {
            x: inner.x,
            y: inner.y + (inner.height - 1) / 2,
            width: inner.width,
            height: 1,
        };
        let paragraph = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(text_style);
        f.render_widget(paragraph, label_area);
    }
}
