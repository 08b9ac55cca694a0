mod banners;
mod direction;
mod name_entry;
mod snake;
use self::banners::{GameOverBanner, PausedBanner, StartBanner};
use self::direction::Direction;
use self::name_entry::NameEntry;
use self::snake::Snake;
use crate::app::Outcome;
use crate::command::Command;
use crate::consts;
use crate::highscores::HighScore;
use crate::util::{board_positions, center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    state: RunState,
    high_score: HighScore,
    name_entry: Option<NameEntry>,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(high_score: HighScore) -> Self {
        Game::new_with_rng(high_score, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(high_score: HighScore, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            snake: Snake::new(),
            food: None,
            score: 0,
            state: RunState::NotStarted,
            high_score,
            name_entry: None,
            next_tick: None,
        };
        game.place_food();
        game
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Outcome> {
        if self.state == RunState::Running {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
            }
            let when = self.next_tick.expect("next_tick was just set");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.next_tick = None;
                self.tick();
                Ok(Outcome::Continue)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Advance the game by one movement.  A no-op unless Running.
    fn tick(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        let Some(head) = self.snake.next_head() else {
            // Ran off the board.  The dead head is not appended, so the body
            // keeps its pre-collision shape.
            self.game_over();
            return;
        };
        if self.snake.contains(head) {
            self.game_over();
            return;
        }
        self.snake.push_head(head);
        if self.food == Some(head) {
            self.score += consts::FOOD_SCORE;
            self.place_food();
        } else {
            self.snake.pop_tail();
        }
    }

    /// Put the food on a uniformly-chosen unoccupied cell.  `None` only if
    /// the snake has filled the entire board.
    fn place_food(&mut self) {
        let snake = &self.snake;
        self.food = board_positions()
            .filter(|&p| !snake.contains(p))
            .choose(&mut self.rng);
    }

    fn handle_event(&mut self, event: Event) -> Outcome {
        if let Some(entry) = self.name_entry.as_mut() {
            if let Some(ev) = event.as_key_press_event() {
                if let Some(name) = entry.handle_key(ev) {
                    self.name_entry = None;
                    self.high_score = HighScore::new(self.score, name);
                    // Best-effort; the in-memory record is already current.
                    let _ = self.high_score.save();
                }
            }
            return Outcome::Continue;
        }
        if event == Event::FocusLost {
            self.pause();
            return Outcome::Continue;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return Outcome::Continue;
        };
        match cmd {
            Command::Quit | Command::Q => return Outcome::Quit,
            Command::Up => self.snake.turn(Direction::North),
            Command::Down => self.snake.turn(Direction::South),
            Command::Left => self.snake.turn(Direction::West),
            Command::Right => self.snake.turn(Direction::East),
            Command::Space => self.toggle_pause(),
            Command::Enter => self.start(),
            Command::R => self.reset(),
        }
        Outcome::Continue
    }

    /// Begin play.  From GameOver this is "Play Again": a full reset happens
    /// first.  A no-op while Running or Paused.
    fn start(&mut self) {
        match self.state {
            RunState::NotStarted => self.state = RunState::Running,
            RunState::GameOver => {
                self.reset();
                self.state = RunState::Running;
            }
            RunState::Running | RunState::Paused => (),
        }
    }

    /// Return to a fresh NotStarted state.  Unavailable while Running, and a
    /// no-op at NotStarted, where resampling the food would be an observable
    /// change.
    fn reset(&mut self) {
        if matches!(self.state, RunState::Running | RunState::NotStarted) {
            return;
        }
        self.snake = Snake::new();
        self.score = 0;
        self.state = RunState::NotStarted;
        self.name_entry = None;
        self.next_tick = None;
        self.place_food();
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn toggle_pause(&mut self) {
        match self.state {
            RunState::Running => {
                self.state = RunState::Paused;
                self.next_tick = None;
            }
            RunState::Paused => self.state = RunState::Running,
            RunState::NotStarted | RunState::GameOver => (),
        }
    }

    fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
            self.next_tick = None;
        }
    }

    fn game_over(&mut self) {
        self.state = RunState::GameOver;
        self.next_tick = None;
        if self.score > self.high_score.score() {
            self.name_entry = Some(NameEntry::new());
        }
    }

    /// The commands legal in the current state, for the bottom hint line
    fn hint_line(&self) -> Line<'static> {
        let mut line = Line::default();
        match self.state {
            RunState::NotStarted => {
                push_hint(&mut line, "Start", "Enter");
            }
            RunState::Running => {
                push_hint(&mut line, "Pause", "Space");
            }
            RunState::Paused => {
                push_hint(&mut line, "Resume", "Space");
                push_hint(&mut line, "Reset", "r");
            }
            RunState::GameOver => {
                push_hint(&mut line, "Play Again", "Enter");
                push_hint(&mut line, "Reset", "r");
            }
        }
        push_hint(&mut line, "Quit", "q");
        line
    }
}

fn push_hint(line: &mut Line<'static>, label: &str, key: &'static str) {
    let lead = if line.spans.is_empty() { " " } else { " — " };
    line.push_span(format!("{lead}{label} ("));
    line.push_span(Span::styled(key, consts::KEY_STYLE));
    line.push_span(")");
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}   Best: {} ({})",
                self.score,
                self.high_score.score(),
                self.high_score.name()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(
            board_area,
            Size::new(consts::BOARD_CELLS + 2, consts::BOARD_CELLS + 2),
        );
        Block::bordered().render(block_area, buf);
        let grid_area = block_area.inner(Margin::new(1, 1));
        let mut board = Canvas {
            area: grid_area,
            buf,
        };
        for p in board_positions() {
            board.draw_cell(p, consts::GRID_SYMBOL, consts::GRID_STYLE);
        }
        if let Some(food) = self.food {
            board.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &p in self.snake.cells.iter().skip(1) {
            board.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so it overwrites whatever it ran into
        if self.state == RunState::GameOver {
            board.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            board.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }

        self.hint_line().render(hint_area, buf);

        match self.state {
            RunState::Running => (),
            RunState::NotStarted => {
                StartBanner.render(center_rect(display, StartBanner::SIZE), buf);
            }
            RunState::Paused => {
                PausedBanner.render(center_rect(display, PausedBanner::SIZE), buf);
            }
            RunState::GameOver => {
                if let Some(ref entry) = self.name_entry {
                    entry.render(center_rect(display, NameEntry::SIZE), buf);
                } else {
                    GameOverBanner { score: self.score }
                        .render(center_rect(display, GameOverBanner::SIZE), buf);
                }
            }
        }
    }
}

/// Translates board cells into buffer cells within the board's drawing area
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RunState {
    NotStarted,
    Running,
    Paused,
    GameOver,
}
