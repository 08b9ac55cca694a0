use crate::game::Game;
use crate::highscores::HighScore;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The outer application: draws the game and feeds it input until it asks
/// to quit.
#[derive(Clone, Debug)]
pub(crate) struct App {
    game: Game,
}

impl App {
    pub(crate) fn new(high_score: HighScore) -> App {
        App {
            game: Game::new(high_score),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.game.draw(frame))?;
            if self.game.process_input()? == Outcome::Quit {
                return Ok(());
            }
        }
    }
}

/// What the game wants the outer loop to do after handling input
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Continue,
    Quit,
}
