//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake at the start of a game
pub(crate) const BASE_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Factor applied to the tick period each time the snake eats
pub(crate) const SPEEDUP_FACTOR: f64 = 0.95;

/// Lower bound on the tick period, no matter how much the snake has eaten
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(30);

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_POINTS: u32 = 10;

/// Number of cells the snake occupies at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Rows at the top of the display reserved for the score bar and the
/// separator line
pub(crate) const HEADER_HEIGHT: u16 = 2;

/// Smallest terminal window the game will agree to start in
pub(crate) const MIN_TERMINAL_SIZE: Size = Size {
    width: 20,
    height: 10,
};

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph repeated across the separator line under the score bar
pub(crate) const SEPARATOR_SYMBOL: char = '─';

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Style for the "GAME OVER" banner
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::REVERSED);
