use crate::game::{FrameStatus, Game};
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(display: Size) -> App {
        App {
            screen: Screen::Game(Game::new(display)),
        }
    }

    /// Run the game to completion and return the final score.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<u32> {
        loop {
            match self.screen {
                Screen::Game(ref mut game) => {
                    let mut status = FrameStatus::Drawn;
                    terminal.draw(|frame| status = game.draw(frame))?;
                    if status == FrameStatus::Stale {
                        // Nothing was drawn; go straight back around for a
                        // fresh frame.
                        continue;
                    }
                    if let Some(screen) = game.process_input()? {
                        self.screen = screen;
                    }
                }
                Screen::Quit { score } => return Ok(score),
            }
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Game(Game),
    Quit { score: u32 },
}
