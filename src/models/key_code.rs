//! Semantic key codes for the number pad.
//!
//! Each key on the pad carries a `KeyCode` as metadata so observers can
//! identify the key that fired without parsing its display label.

use serde::{Deserialize, Serialize};

/// Semantic identity of a pad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Digit 0
    Num0,
    /// Digit 1
    Num1,
    /// Digit 2
    Num2,
    /// Digit 3
    Num3,
    /// Digit 4
    Num4,
    /// Digit 5
    Num5,
    /// Digit 6
    Num6,
    /// Digit 7
    Num7,
    /// Digit 8
    Num8,
    /// Digit 9
    Num9,
    /// Decimal point
    Dot,
    /// Plus sign
    Plus,
    /// Minus sign
    Minus,
    /// Delete
    Delete,
    /// Backspace
    Backspace,
    /// Arrow up
    Up,
    /// Arrow right
    Right,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Enter / confirm
    Enter,
    /// Cancel / dismiss
    Cancel,
    /// Clear the current input
    Clear,
}

impl KeyCode {
    /// All pad key codes in grid order (left to right, top to bottom).
    pub const ALL: [KeyCode; 22] = [
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Clear,
        KeyCode::Cancel,
        KeyCode::Num7,
        KeyCode::Num8,
        KeyCode::Num9,
        KeyCode::Backspace,
        KeyCode::Up,
        KeyCode::Num4,
        KeyCode::Num5,
        KeyCode::Num6,
        KeyCode::Delete,
        KeyCode::Down,
        KeyCode::Num1,
        KeyCode::Num2,
        KeyCode::Num3,
        KeyCode::Plus,
        KeyCode::Enter,
        KeyCode::Num0,
        KeyCode::Dot,
        KeyCode::Minus,
    ];

    /// Default display label for this key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            KeyCode::Num0 => "0",
            KeyCode::Num1 => "1",
            KeyCode::Num2 => "2",
            KeyCode::Num3 => "3",
            KeyCode::Num4 => "4",
            KeyCode::Num5 => "5",
            KeyCode::Num6 => "6",
            KeyCode::Num7 => "7",
            KeyCode::Num8 => "8",
            KeyCode::Num9 => "9",
            KeyCode::Dot => ".",
            KeyCode::Plus => "+",
            KeyCode::Minus => "-",
            KeyCode::Delete => "DEL",
            KeyCode::Backspace => "BS",
            KeyCode::Up => "\u{25b2}",
            KeyCode::Right => "\u{25b6}",
            KeyCode::Down => "\u{25bc}",
            KeyCode::Left => "\u{25c0}",
            KeyCode::Enter => "\u{23ce}",
            KeyCode::Cancel => "CANCEL",
            KeyCode::Clear => "CLR",
        }
    }

    /// Character this key contributes to a numeric input field,
    /// or `None` for keys that do not type anything.
    #[must_use]
    pub const fn char_value(self) -> Option<char> {
        match self {
            KeyCode::Num0 => Some('0'),
            KeyCode::Num1 => Some('1'),
            KeyCode::Num2 => Some('2'),
            KeyCode::Num3 => Some('3'),
            KeyCode::Num4 => Some('4'),
            KeyCode::Num5 => Some('5'),
            KeyCode::Num6 => Some('6'),
            KeyCode::Num7 => Some('7'),
            KeyCode::Num8 => Some('8'),
            KeyCode::Num9 => Some('9'),
            KeyCode::Dot => Some('.'),
            KeyCode::Plus => Some('+'),
            KeyCode::Minus => Some('-'),
            _ => None,
        }
    }

    /// Whether this key is a digit key.
    #[must_use]
    pub const fn is_digit(self) -> bool {
        matches!(
            self,
            KeyCode::Num0
                | KeyCode::Num1
                | KeyCode::Num2
                | KeyCode::Num3
                | KeyCode::Num4
                | KeyCode::Num5
                | KeyCode::Num6
                | KeyCode::Num7
                | KeyCode::Num8
                | KeyCode::Num9
        )
    }

    /// Whether this key is a navigation arrow.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyCode::Up | KeyCode::Right | KeyCode::Down | KeyCode::Left
        )
    }
}
