use crate::consts;
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

/// Overlay shown before the first start of a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct StartBanner;

impl StartBanner {
    pub(super) const SIZE: Size = Size {
        width: 24,
        height: 7,
    };
}

impl Widget for StartBanner {
    /*
     * ┌─────── SNAKE ────────┐
     * │ Steer: ←↓↑→ / wasd   │
     * │ Eat the food, but    │
     * │ don't hit yourself!  │
     * │                      │
     * │ Press Enter to start │
     * └──────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = banner_block(" SNAKE ");
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = [
            Line::from("Steer: ←↓↑→ / wasd"),
            Line::from("Eat the food, but"),
            Line::from("don't hit yourself!"),
            Line::default(),
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to start"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

/// Overlay shown while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PausedBanner;

impl PausedBanner {
    pub(super) const SIZE: Size = Size {
        width: 18,
        height: 5,
    };
}

impl Widget for PausedBanner {
    /*
     * ┌──── PAUSED ────┐
     * │ Resume (Space) │
     * │ Reset (r)      │
     * │ Quit (q)       │
     * └────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = banner_block(" PAUSED ");
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = [
            keyed_line("Resume (", "Space"),
            keyed_line("Reset (", "r"),
            keyed_line("Quit (", "q"),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

/// Overlay shown after a collision, prompting for a retry
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOverBanner {
    pub(super) score: u32,
}

impl GameOverBanner {
    pub(super) const SIZE: Size = Size {
        width: 22,
        height: 4,
    };
}

impl Widget for GameOverBanner {
    /*
     * ┌──── GAME OVER ─────┐
     * │ Score: 120         │
     * │ Play Again (Enter) │
     * └────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = banner_block(" GAME OVER ");
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        let lines = [
            Line::from(format!("Score: {}", self.score)),
            keyed_line("Play Again (", "Enter"),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

fn banner_block(title: &str) -> Block<'_> {
    Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1))
        .style(Style::reset())
}

fn keyed_line(prefix: &'static str, key: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::raw(prefix),
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(")"),
    ])
}
