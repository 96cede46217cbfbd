use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An input signal understood by the game session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Turn(Direction),
    /// Pause a running game or resume a paused one
    TogglePause,
    /// Start a new game, or restart after a game over
    Start,
    /// Abandon the current game and go back to the ready state
    Reset,
    /// Advance a running game by one tick right away
    Step,
    Quit,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => {
                Some(Command::Turn(Direction::Up))
            }
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Command::Turn(Direction::Down))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Command::Turn(Direction::Left))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Command::Turn(Direction::Right))
            }
            (KeyModifiers::NONE, KeyCode::Char(' ')) | (_, KeyCode::Esc) => {
                Some(Command::TogglePause)
            }
            (_, KeyCode::Enter) => Some(Command::Start),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Reset),
            (KeyModifiers::NONE, KeyCode::Char('.')) => Some(Command::Step),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(Command::Turn(Direction::Down)))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Turn(Direction::Right)))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Turn(Direction::Up)))]
    #[case(KeyCode::Char('h'), KeyModifiers::NONE, Some(Command::Turn(Direction::Left)))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::TogglePause))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::TogglePause))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Command::Start))]
    #[case(KeyCode::Enter, KeyModifiers::SHIFT, Some(Command::Start))]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::Reset))]
    #[case(KeyCode::Char('.'), KeyModifiers::NONE, Some(Command::Step))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Up, KeyModifiers::ALT, None)]
    #[case(KeyCode::Tab, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }
}
