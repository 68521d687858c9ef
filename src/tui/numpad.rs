//! The number pad container widget.
//!
//! Builds the fixed 22-key layout, forwards bulk observer registration to
//! every child key, and routes mouse input to the key under the pointer.
//! Release events follow pointer capture: the key that received the press
//! gets the release even if the pointer has moved off it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

use crate::events::KeyEventObserver;
use crate::models::{GridSlot, KeyCode, PadGrid};
use crate::tui::key::Key;
use crate::tui::Theme;

/// A clickable number pad of 22 keys in a 5x5 grid.
pub struct NumberPad {
    keys: Vec<Key<KeyCode>>,
    slots: Vec<GridSlot>,
    grid: PadGrid,
    pressed_key: Option<usize>,
}

impl NumberPad {
    /// Grid assignment for every pad key.
    ///
    /// "0" and "CANCEL" span two columns, the enter key spans two rows.
    pub const LAYOUT: [(KeyCode, GridSlot); 22] = [
        (KeyCode::Left, GridSlot::new(0, 0)),
        (KeyCode::Right, GridSlot::new(1, 0)),
        (KeyCode::Clear, GridSlot::new(2, 0)),
        (KeyCode::Cancel, GridSlot::new(3, 0).with_column_span(2)),
        (KeyCode::Num7, GridSlot::new(0, 1)),
        (KeyCode::Num8, GridSlot::new(1, 1)),
        (KeyCode::Num9, GridSlot::new(2, 1)),
        (KeyCode::Backspace, GridSlot::new(3, 1)),
        (KeyCode::Up, GridSlot::new(4, 1)),
        (KeyCode::Num4, GridSlot::new(0, 2)),
        (KeyCode::Num5, GridSlot::new(1, 2)),
        (KeyCode::Num6, GridSlot::new(2, 2)),
        (KeyCode::Delete, GridSlot::new(3, 2)),
        (KeyCode::Down, GridSlot::new(4, 2)),
        (KeyCode::Num1, GridSlot::new(0, 3)),
        (KeyCode::Num2, GridSlot::new(1, 3)),
        (KeyCode::Num3, GridSlot::new(2, 3)),
        (KeyCode::Plus, GridSlot::new(3, 3)),
        (KeyCode::Enter, GridSlot::new(4, 3).with_row_span(2)),
        (KeyCode::Num0, GridSlot::new(0, 4).with_column_span(2)),
        (KeyCode::Dot, GridSlot::new(2, 4)),
        (KeyCode::Minus, GridSlot::new(3, 4)),
    ];

    /// Creates a pad with default gaps of one cell.
    #[must_use]
    pub fn new() -> Self {
        Self::with_gaps(1, 1)
    }

    /// Creates a pad with the given horizontal and vertical gaps.
    #[must_use]
    pub fn with_gaps(horizontal_gap: u16, vertical_gap: u16) -> Self {
        let mut keys = Vec::with_capacity(Self::LAYOUT.len());
        let mut slots = Vec::with_capacity(Self::LAYOUT.len());
        for (code, slot) in Self::LAYOUT {
            keys.push(Key::new(code.label()).with_metadata(code));
            slots.push(slot);
        }
        Self {
            keys,
            slots,
            grid: PadGrid::new(horizontal_gap, vertical_gap),
            pressed_key: None,
        }
    }

    /// Horizontal gap between keys.
    #[must_use]
    pub fn horizontal_gap(&self) -> u16 {
        self.grid.horizontal_gap()
    }

    /// Updates the horizontal gap. Takes effect on the next layout pass.
    pub fn set_horizontal_gap(&mut self, gap: u16) {
        self.grid.set_horizontal_gap(gap);
    }

    /// Vertical gap between keys.
    #[must_use]
    pub fn vertical_gap(&self) -> u16 {
        self.grid.vertical_gap()
    }

    /// Updates the vertical gap. Takes effect on the next layout pass.
    pub fn set_vertical_gap(&mut self, gap: u16) {
        self.grid.set_vertical_gap(gap);
    }

    /// Registers a press observer on every child key.
    pub fn set_on_key_pressed(&mut self, observer: KeyEventObserver<KeyCode>) {
        for key in &mut self.keys {
            key.set_on_key_pressed(std::rc::Rc::clone(&observer));
        }
    }

    /// Removes a press observer from every child key.
    pub fn remove_on_key_pressed(&mut self, observer: &KeyEventObserver<KeyCode>) {
        for key in &mut self.keys {
            key.remove_on_key_pressed(observer);
        }
    }

    /// Registers a release observer on every child key.
    pub fn set_on_key_released(&mut self, observer: KeyEventObserver<KeyCode>) {
        for key in &mut self.keys {
            key.set_on_key_released(std::rc::Rc::clone(&observer));
        }
    }

    /// Removes a release observer from every child key.
    pub fn remove_on_key_released(&mut self, observer: &KeyEventObserver<KeyCode>) {
        for key in &mut self.keys {
            key.remove_on_key_released(observer);
        }
    }

    /// Removes every observer from every child key.
    pub fn remove_all_observers(&mut self) {
        for key in &mut self.keys {
            key.remove_all_observers();
        }
    }

    /// The child key carrying the given code.
    #[must_use]
    pub fn key(&self, code: KeyCode) -> Option<&Key<KeyCode>> {
        self.keys.iter().find(|k| k.metadata() == Some(&code))
    }

    /// The child key carrying the given code, mutable.
    pub fn key_mut(&mut self, code: KeyCode) -> Option<&mut Key<KeyCode>> {
        self.keys.iter_mut().find(|k| k.metadata() == Some(&code))
    }

    /// Iterates over every child key.
    pub fn keys(&self) -> impl Iterator<Item = &Key<KeyCode>> {
        self.keys.iter()
    }

    /// Recomputes every key's rectangle for the given area.
    pub fn resize(&mut self, area: Rect) {
        for (key, slot) in self.keys.iter_mut().zip(&self.slots) {
            key.set_area(self.grid.slot_rect(area, *slot));
        }
    }

    /// Routes a mouse event to the pad's keys.
    ///
    /// Returns whether a key handled the event. Events outside every key
    /// are ignored, except a release while a press is outstanding, which
    /// always goes to the pressed key.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A new press while one is outstanding means the release for
                // the captured key was lost; let it go before re-targeting.
                let released_previous = self.pressed_key.take().is_some_and(|previous| {
                    self.keys[previous].release();
                    true
                });
                let hit = self
                    .keys
                    .iter()
                    .position(|key| key.hit(mouse.column, mouse.row));
                if let Some(index) = hit {
                    self.keys[index].press();
                    self.pressed_key = Some(index);
                    return true;
                }
                released_previous
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(index) = self.pressed_key.take() {
                    self.keys[index].release();
                    return true;
                }
                let hit = self
                    .keys
                    .iter()
                    .position(|key| key.hit(mouse.column, mouse.row));
                if let Some(index) = hit {
                    self.keys[index].release();
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    /// Lays out and renders every key within `area`.
    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.resize(area);
        for key in &self.keys {
            key.render(f, theme);
        }
    }
}

impl Default for NumberPad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn laid_out_pad() -> NumberPad {
        let mut pad = NumberPad::new();
        pad.resize(Rect::new(0, 0, 80, 24));
        pad
    }

    fn center_of(pad: &NumberPad, code: KeyCode) -> (u16, u16) {
        let area = pad.key(code).expect("key exists").area();
        (area.x + area.width / 2, area.y + area.height / 2)
    }

    #[test]
    fn test_pad_has_22_keys() {
        let pad = NumberPad::new();
        assert_eq!(pad.keys().count(), 22);
        for code in KeyCode::ALL {
            assert!(pad.key(code).is_some(), "missing key for {code:?}");
        }
    }

    #[test]
    fn test_press_routes_to_hit_key() {
        let mut pad = laid_out_pad();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = Rc::clone(&events);
        pad.set_on_key_pressed(Rc::new(move |event| {
            events_clone.borrow_mut().push(event.metadata);
        }));

        let (x, y) = center_of(&pad, KeyCode::Num5);
        pad.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), x, y));

        assert_eq!(*events.borrow(), vec![Some(KeyCode::Num5)]);
    }

    #[test]
    fn test_release_is_captured_by_pressed_key() {
        let mut pad = laid_out_pad();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = Rc::clone(&events);
        pad.set_on_key_released(Rc::new(move |event| {
            events_clone.borrow_mut().push(event.metadata);
        }));

        let (x, y) = center_of(&pad, KeyCode::Num8);
        pad.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        // Pointer dragged off the key before release
        let (ox, oy) = center_of(&pad, KeyCode::Num2);
        pad.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), ox, oy));

        assert_eq!(*events.borrow(), vec![Some(KeyCode::Num8)]);
    }

    #[test]
    fn test_second_press_releases_captured_key() {
        let mut pad = laid_out_pad();
        let released = Rc::new(RefCell::new(Vec::new()));
        let released_clone = Rc::clone(&released);
        pad.set_on_key_released(Rc::new(move |event| {
            released_clone.borrow_mut().push(event.metadata);
        }));

        // Press Num7, then press Num9 without an intervening release
        let (x, y) = center_of(&pad, KeyCode::Num7);
        pad.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        let (x, y) = center_of(&pad, KeyCode::Num9);
        pad.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), x, y));

        // The first key is released, not left visually stuck
        assert!(!pad.key(KeyCode::Num7).unwrap().is_pressed());
        assert!(pad.key(KeyCode::Num9).unwrap().is_pressed());
        assert_eq!(*released.borrow(), vec![Some(KeyCode::Num7)]);

        // The release then goes to the second key
        pad.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), x, y));
        assert_eq!(
            *released.borrow(),
            vec![Some(KeyCode::Num7), Some(KeyCode::Num9)]
        );
    }

    #[test]
    fn test_click_in_gap_is_ignored() {
        let mut pad = laid_out_pad();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = Rc::clone(&events);
        pad.set_on_key_pressed(Rc::new(move |event| {
            events_clone.borrow_mut().push(event.metadata);
        }));

        // Gap between the first two columns of the top row
        let left = pad.key(KeyCode::Left).unwrap().area();
        let handled = pad.handle_mouse(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            left.right(),
            left.y,
        ));

        assert!(!handled);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_gap_mutators_take_effect_on_resize() {
        let mut pad = NumberPad::with_gaps(0, 0);
        assert_eq!(pad.horizontal_gap(), 0);
        pad.set_horizontal_gap(2);
        pad.set_vertical_gap(2);
        assert_eq!(pad.horizontal_gap(), 2);
        assert_eq!(pad.vertical_gap(), 2);

        pad.resize(Rect::new(0, 0, 80, 24));
        let a = pad.key(KeyCode::Left).unwrap().area();
        let b = pad.key(KeyCode::Right).unwrap().area();
        assert_eq!(b.x - a.right(), 2);
    }
}
