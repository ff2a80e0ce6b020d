use crate::consts;
use ratatui::{layout::Size, DefaultTerminal};
use thiserror::Error;

/// Acquire the terminal and check that the window is large enough to play
/// in.  On failure the terminal is restored before the error is returned, so
/// that the caller reports to a usable screen.
pub(crate) fn init() -> Result<(DefaultTerminal, Size), StartupError> {
    let terminal = ratatui::try_init().map_err(StartupError::Init)?;
    match terminal.size() {
        Ok(size)
            if size.width >= consts::MIN_TERMINAL_SIZE.width
                && size.height >= consts::MIN_TERMINAL_SIZE.height =>
        {
            Ok((terminal, size))
        }
        Ok(size) => {
            ratatui::restore();
            Err(StartupError::WindowTooSmall {
                width: size.width,
                height: size.height,
            })
        }
        Err(e) => {
            ratatui::restore();
            Err(StartupError::Init(e))
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum StartupError {
    #[error("failed to initialize the terminal display")]
    Init(#[source] std::io::Error),
    #[error(
        "terminal window is too small: {width}x{height} (at least {min_width}x{min_height} needed)",
        min_width = consts::MIN_TERMINAL_SIZE.width,
        min_height = consts::MIN_TERMINAL_SIZE.height,
    )]
    WindowTooSmall { width: u16, height: u16 },
}
