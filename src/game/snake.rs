use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are board cells, relative to the top-left corner of the
/// board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head at the front.  Never empty, and
    /// never contains duplicates while the snake is alive.
    pub(super) cells: VecDeque<Position>,

    /// The direction applied on the most recent tick
    pub(super) direction: Direction,

    /// The direction buffered from input, applied at the start of the next
    /// tick
    pub(super) pending: Direction,
}

impl Snake {
    /// Create the starting snake: three cells, heading east
    pub(super) fn new() -> Snake {
        Snake {
            cells: VecDeque::from(consts::INITIAL_SNAKE),
            direction: Direction::East,
            pending: Direction::East,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        *self
            .cells
            .front()
            .expect("the snake should always have at least one cell")
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Buffer a direction change.  A request for the exact reverse of the
    /// current direction is ignored, as applying it would drive the head
    /// straight into the neck.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.pending = direction;
        }
    }

    /// Commit the buffered direction and return where the head would move
    /// this tick, or `None` if that would leave the board
    pub(super) fn next_head(&mut self) -> Option<Position> {
        self.direction = self.pending;
        self.direction.advance(self.head())
    }

    pub(super) fn push_head(&mut self, pos: Position) {
        self.cells.push_front(pos);
    }

    pub(super) fn pop_tail(&mut self) {
        let _ = self.cells.pop_back();
    }
}
