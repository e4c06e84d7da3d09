//! Terminal event polling.
//!
//! Keys, pastes and resizes are returned as soon as crossterm has them; when
//! the terminal is quiet a [`EventType::Tick`] is produced once per tick period
//! so time-based state (the save banner) can expire.

use crate::constants::TICK_RATE_MS;
use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(TICK_RATE_MS))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        loop {
            if poll(Duration::ZERO)? {
                match crossterm::event::read()? {
                    // Release and repeat events would double every keystroke on some terminals
                    Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(EventType::Key(key)),
                    Event::Paste(text) => return Ok(EventType::Paste(text)),
                    Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                    _ => continue,
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(EventType::Tick);
            }

            // Short naps keep typing responsive between ticks
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventType {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
