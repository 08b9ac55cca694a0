use crate::consts;
use ratatui::layout::{Flex, Layout, Position, Positions, Rect, Size};
use std::path::PathBuf;

/// Return the centered [`DISPLAY_SIZE`][consts::DISPLAY_SIZE] rectangle that
/// everything is drawn inside of
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Center a `size`-sized rectangle within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Iterate over every cell of the board in row-major order
pub(crate) fn board_positions() -> Positions {
    Rect::from((
        Position::ORIGIN,
        Size::new(consts::BOARD_CELLS, consts::BOARD_CELLS),
    ))
    .positions()
}

/// Return the path at which the high score is persisted, or `None` if the
/// local data directory could not be determined
pub(crate) fn high_score_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("munch").join("highscore.json"))
}
