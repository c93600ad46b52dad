//! Key-hold tracking.
//!
//! Instead of acting on each key event individually, `KeyTracker` records
//! the frame number of the last press/repeat event for every key.  Each
//! frame the game asks which keys are still "fresh" (within `HOLD_WINDOW`
//! frames), so Space + ←/→ can be held together.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
//!   `Repeat` / `Release` events; keys are removed on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::InputState;

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  At 60 ticks/s, 8 frames is ≈133 ms, shorter than any OS
/// key-repeat interval.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    close_requested: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal event observed during `frame`.
    pub fn record(&mut self, event: &Event, frame: u64) {
        let Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        else {
            return;
        };
        let code = normalize(*code);
        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(code, frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => self.close_requested = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.close_requested = true
                    }
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn snapshot(&self, frame: u64) -> InputState {
        InputState {
            left: self.is_held(KeyCode::Left, frame) || self.is_held(KeyCode::Char('a'), frame),
            right: self.is_held(KeyCode::Right, frame) || self.is_held(KeyCode::Char('d'), frame),
            fire: self.is_held(KeyCode::Char(' '), frame),
        }
    }
}

/// Fold upper-case letters onto lower-case so Shift/Caps Lock don't matter.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
