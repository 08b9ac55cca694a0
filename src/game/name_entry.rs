use crate::consts;
use crate::highscores::ANONYMOUS;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A popup prompting for a display name after a new high score.
///
/// The prompt never blocks: it consumes key events from the normal input
/// loop and resolves whenever the player hits Enter.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(super) struct NameEntry {
    name: String,
}

impl NameEntry {
    /// Longest name accepted by the prompt
    const MAX_LEN: usize = 12;

    pub(super) const SIZE: Size = Size {
        width: 25,
        height: 4,
    };

    pub(super) fn new() -> NameEntry {
        NameEntry::default()
    }

    /// Handle a key press.  Returns `Some(name)` once the player commits;
    /// a blank or all-whitespace entry commits as [`ANONYMOUS`].
    pub(super) fn handle_key(&mut self, ev: KeyEvent) -> Option<String> {
        match ev.code {
            KeyCode::Enter => {
                let name = self.name.trim();
                if name.is_empty() {
                    Some(String::from(ANONYMOUS))
                } else {
                    Some(name.to_owned())
                }
            }
            KeyCode::Backspace => {
                let _ = self.name.pop();
                None
            }
            KeyCode::Char(c)
                if !ev
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && !c.is_control()
                    && self.name.chars().count() < Self::MAX_LEN =>
            {
                self.name.push(c);
                None
            }
            _ => None,
        }
    }
}

impl Widget for &NameEntry {
    /*
     * ┌── NEW HIGH SCORE! ──┐
     * │ Name: Kaa_          │
     * │ Enter to save       │
     * └─────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" NEW HIGH SCORE! ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = [
            Line::from(format!("Name: {}_", self.name)),
            Line::from_iter([
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to save"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_name_is_committed() {
        let mut entry = NameEntry::new();
        for c in "Kaa".chars() {
            assert_eq!(entry.handle_key(KeyEvent::from(KeyCode::Char(c))), None);
        }
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(String::from("Kaa"))
        );
    }

    #[test]
    fn backspace_deletes() {
        let mut entry = NameEntry::new();
        for c in "Kab".chars() {
            entry.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        entry.handle_key(KeyEvent::from(KeyCode::Backspace));
        entry.handle_key(KeyEvent::from(KeyCode::Char('a')));
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(String::from("Kaa"))
        );
    }

    #[test]
    fn blank_name_commits_as_anonymous() {
        let mut entry = NameEntry::new();
        entry.handle_key(KeyEvent::from(KeyCode::Char(' ')));
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(String::from(ANONYMOUS))
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mut entry = NameEntry::new();
        for c in " Kaa ".chars() {
            entry.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(String::from("Kaa"))
        );
    }

    #[test]
    fn name_length_is_capped() {
        let mut entry = NameEntry::new();
        for c in "abcdefghijklmnop".chars() {
            entry.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(String::from("abcdefghijkl"))
        );
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut entry = NameEntry::new();
        entry.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(String::from(ANONYMOUS))
        );
    }
}
