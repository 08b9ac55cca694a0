use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    R,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::R),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyEvent::from(KeyCode::Up), Some(Command::Up))]
    #[case(KeyEvent::from(KeyCode::Char('w')), Some(Command::Up))]
    #[case(KeyEvent::from(KeyCode::Char('k')), Some(Command::Up))]
    #[case(KeyEvent::from(KeyCode::Char('a')), Some(Command::Left))]
    #[case(KeyEvent::from(KeyCode::Char('s')), Some(Command::Down))]
    #[case(KeyEvent::from(KeyCode::Char('d')), Some(Command::Right))]
    #[case(KeyEvent::from(KeyCode::Char(' ')), Some(Command::Space))]
    #[case(KeyEvent::from(KeyCode::Enter), Some(Command::Enter))]
    #[case(KeyEvent::from(KeyCode::Char('r')), Some(Command::R))]
    #[case(KeyEvent::from(KeyCode::Char('q')), Some(Command::Q))]
    #[case(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Command::Quit)
    )]
    #[case(KeyEvent::from(KeyCode::Char('x')), None)]
    #[case(KeyEvent::from(KeyCode::F(1)), None)]
    #[case(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }
}
