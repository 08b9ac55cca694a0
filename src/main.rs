mod app;
mod command;
mod consts;
mod game;
mod highscores;
mod util;
use crate::app::App;
use crate::highscores::HighScore;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let high_score = HighScore::load();
    let terminal = ratatui::init();
    let r = App::new(high_score).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
