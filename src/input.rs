use crate::direction::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key press the simulation cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    Quit,
}

impl Input {
    pub fn from_key(key: KeyEvent) -> Option<Input> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Input::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
            KeyCode::Up | KeyCode::Char('w') => Some(Input::Turn(Direction::North)),
            KeyCode::Down | KeyCode::Char('s') => Some(Input::Turn(Direction::South)),
            KeyCode::Left | KeyCode::Char('a') => Some(Input::Turn(Direction::West)),
            KeyCode::Right | KeyCode::Char('d') => Some(Input::Turn(Direction::East)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_and_wasd_keys() {
        assert_eq!(
            Input::from_key(press(KeyCode::Up)),
            Some(Input::Turn(Direction::North))
        );
        assert_eq!(
            Input::from_key(press(KeyCode::Char('s'))),
            Some(Input::Turn(Direction::South))
        );
        assert_eq!(
            Input::from_key(press(KeyCode::Left)),
            Some(Input::Turn(Direction::West))
        );
        assert_eq!(
            Input::from_key(press(KeyCode::Char('d'))),
            Some(Input::Turn(Direction::East))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(Input::from_key(press(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(Input::from_key(press(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(
            Input::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Input::Quit)
        );
        assert_eq!(Input::from_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_releases_are_ignored() {
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        assert_eq!(Input::from_key(key), None);
    }
}
