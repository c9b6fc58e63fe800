use crate::action::Action;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Maps a key press to an action. Unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(Action::MoveUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(Action::MoveDown),
        (_, KeyCode::PageUp) => Some(Action::PageUp),
        (_, KeyCode::PageDown) => Some(Action::PageDown),
        (_, KeyCode::Enter) => Some(Action::Select),
        (_, KeyCode::Tab | KeyCode::Right) => Some(Action::FocusNext),
        (_, KeyCode::BackTab | KeyCode::Left) => Some(Action::FocusPrev),
        (_, KeyCode::Char('r')) => Some(Action::RetryBoards),
        _ => None,
    }
}

/// Waits up to `timeout` for terminal input.
pub fn poll_action(timeout: Duration) -> io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key) => {
            tracing::trace!("key {:?} modifiers {:?}", key.code, key.modifiers);
            action_for(key)
        }
        Event::Resize(_, _) => Some(Action::Resize),
        _ => None,
    })
}
