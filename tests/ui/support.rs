//! Key builders shared by the UI tests
#![allow(dead_code)]

use chatolution::ui::core::EventType;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn alt(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
}

pub fn press(code: KeyCode) -> EventType {
    EventType::Key(key(code))
}

pub fn chars(text: &str) -> Vec<EventType> {
    text.chars().map(|c| press(KeyCode::Char(c))).collect()
}
