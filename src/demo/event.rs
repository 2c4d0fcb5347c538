use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::demo::app::Action;

/// Handles terminal events and maps them to application `Action`s.
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Blocks until a key event is received or a timeout occurs.
    pub fn next(&self) -> std::io::Result<Action> {
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Self::map_key_event(key));
                }
            }
        }
        // If no key event, return a Tick action.
        Ok(Action::Tick)
    }

    /// Maps a `KeyEvent` to a corresponding `Action`.
    fn map_key_event(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Action::NextSlider,
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Action::PrevSlider,
            KeyCode::Right | KeyCode::Char('l') => Action::Increase,
            KeyCode::Left | KeyCode::Char('h') => Action::Decrease,
            KeyCode::Char('r') => Action::Reset,
            KeyCode::Char('s') => Action::CycleScenario,
            KeyCode::Char('?') => Action::ToggleHelp,
            _ => Action::Tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn key_bindings_map_to_actions() {
        assert_eq!(EventHandler::map_key_event(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(EventHandler::map_key_event(press(KeyCode::Esc)), Action::Quit);
        assert_eq!(EventHandler::map_key_event(press(KeyCode::Tab)), Action::NextSlider);
        assert_eq!(EventHandler::map_key_event(press(KeyCode::Left)), Action::Decrease);
        assert_eq!(EventHandler::map_key_event(press(KeyCode::Char('s'))), Action::CycleScenario);
        // Unbound keys are a no-op tick.
        assert_eq!(EventHandler::map_key_event(press(KeyCode::Char('x'))), Action::Tick);
    }
}
