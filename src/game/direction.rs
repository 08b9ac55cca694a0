use crate::consts;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Move `pos` one cell in this direction.  Returns `None` if that would
    /// leave the board.
    pub(super) fn advance(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => {
                y = y.checked_sub(1)?;
            }
            Direction::East => {
                x = increment_in_bounds(x)?;
            }
            Direction::South => {
                y = increment_in_bounds(y)?;
            }
            Direction::West => {
                x = x.checked_sub(1)?;
            }
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

fn increment_in_bounds(x: u16) -> Option<u16> {
    x.checked_add(1).filter(|&xx| xx < consts::BOARD_CELLS)
}
