mod app;
mod command;
mod consts;
mod game;
mod startup;
mod util;
use crate::app::App;
use crate::startup::StartupError;
use std::io::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let (terminal, display) = match startup::init() {
        Ok(init) => init,
        Err(e) => return startup_failure(&e),
    };
    let r = App::new(display).run(terminal);
    ratatui::restore();
    match r {
        Ok(score) => {
            println!("Game over!  Final score: {score}");
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

fn startup_failure(e: &StartupError) -> ExitCode {
    eprintln!("garter: {e}");
    if let StartupError::Init(source) = e {
        eprintln!("caused by: {source}");
        eprintln!("Likely causes:");
        eprintln!("  - the terminal window is too small");
        eprintln!("  - the program is not attached to an interactive terminal");
    }
    ExitCode::from(2)
}
