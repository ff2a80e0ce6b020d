mod direction;
mod snake;
use self::direction::Direction;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    score: u32,
    snake: Snake,
    food: Option<Position>,
    state: GameState,
    /// Size of the playing field, fixed at startup
    level_size: Size,
    /// Current time between snake movements; shrinks as the snake eats
    tick_period: Duration,
    /// Direction change queued for the next tick, at most one per tick
    pending_turn: Option<Direction>,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(display: Size) -> Self {
        Game::new_with_rng(display, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game whose playing field fills a `display`-sized window,
    /// minus the header rows and the border.
    pub(crate) fn new_with_rng(display: Size, rng: R) -> Game<R> {
        let level_size = Size {
            width: display.width.saturating_sub(2),
            height: display.height.saturating_sub(consts::HEADER_HEIGHT + 2),
        };
        let head = Position::new(level_size.width / 2, level_size.height / 2);
        let snake = Snake::new(head, Direction::East, level_size);
        let mut game = Game {
            rng,
            score: 0,
            snake,
            food: None,
            state: GameState::Running,
            level_size,
            tick_period: consts::BASE_TICK_PERIOD,
            pending_turn: None,
            next_tick: None,
        };
        game.place_food(level_size);
        game
    }

    /// Wait for input for up to the rest of the current tick.  A key that
    /// arrives before the deadline is handled without postponing the tick;
    /// once the deadline passes, the game advances one step.  After the game
    /// has ended, this blocks until any key is pressed.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.tick_period);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.next_tick = None;
                self.advance();
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Advance the game by one tick: apply the queued turn, move the snake,
    /// and resolve collisions and food.
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        if let Some(direction) = self.pending_turn.take() {
            self.snake.turn(direction);
        }
        let Some(next) = self.snake.next_head(self.level_size) else {
            // Ran into the border (the header rows lie beyond the top edge)
            self.state = GameState::Over;
            return;
        };
        if self.snake.occupies(next) {
            // The tail cell counts too: it has not moved out of the way yet
            self.state = GameState::Over;
            return;
        }
        let ate = self.food == Some(next);
        self.snake.slither(next, ate);
        if ate {
            self.score += consts::FOOD_POINTS;
            self.tick_period = self
                .tick_period
                .mul_f64(consts::SPEEDUP_FACTOR)
                .max(consts::MIN_TICK_PERIOD);
            self.place_food(self.level_size);
        }
    }

    /// Put the food on a uniformly random free cell within `bounds`.  When
    /// no free cell is left, the snake has filled the board and the game
    /// ends.
    fn place_food(&mut self, bounds: Size) {
        self.food = Rect::from((Position::ORIGIN, bounds))
            .positions()
            .filter(|&p| !self.snake.occupies(p))
            .choose(&mut self.rng);
        if self.food.is_none() {
            self.state = GameState::Over;
        }
    }

    /// Draw one frame.  If the food's coordinates no longer fall inside the
    /// drawable area (the window shrank under us), the food is re-placed and
    /// nothing is drawn; the caller should retry with a fresh frame.
    pub(crate) fn draw(&mut self, frame: &mut Frame<'_>) -> FrameStatus {
        if self.running() {
            if let Some(food) = self.food {
                let visible = self.board_area(frame.area()).inner(Margin::new(1, 1));
                if food.x >= visible.width || food.y >= visible.height {
                    self.place_food(visible.as_size());
                    return FrameStatus::Stale;
                }
            }
        }
        frame.render_widget(&*self, frame.area());
        FrameStatus::Drawn
    }
}

impl<R> Game<R> {
    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::Quit => {
                        return Some(Screen::Quit { score: self.score });
                    }
                    Command::Q => self.state = GameState::Over,
                    Command::Up => self.queue_turn(Direction::North),
                    Command::Down => self.queue_turn(Direction::South),
                    Command::Left => self.queue_turn(Direction::West),
                    Command::Right => self.queue_turn(Direction::East),
                }
                None
            }
            GameState::Over => event
                .as_key_press_event()
                .map(|_ev| Screen::Quit { score: self.score }),
        }
    }

    /// Record the tick's direction change.  Only the first direction key
    /// pressed during a tick takes the slot; the rest are dropped.
    fn queue_turn(&mut self, direction: Direction) {
        if self.pending_turn.is_none() {
            self.pending_turn = Some(direction);
        }
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Split `area` into the score bar, the separator line, and the bordered
    /// playing field.
    fn areas(&self, area: Rect) -> (Rect, Rect, Rect) {
        let [score_bar, separator, rest] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        let board = Size {
            width: self.level_size.width.saturating_add(2),
            height: self.level_size.height.saturating_add(2),
        };
        (score_bar, separator, center_rect(rest, board))
    }

    fn board_area(&self, area: Rect) -> Rect {
        self.areas(area).2
    }

    fn render_game_over(&self, area: Rect, buf: &mut Buffer) {
        const BANNER_HEIGHT: u16 = 5;
        let banner = center_rect(
            area,
            Size {
                width: area.width,
                height: BANNER_HEIGHT,
            },
        );
        let [title, _, score, _, prompt] =
            Layout::vertical([Constraint::Length(1); 5]).areas(banner);
        Line::styled("GAME OVER", consts::GAME_OVER_STYLE)
            .centered()
            .render(title, buf);
        let final_score = self.score;
        Line::from(format!("Your final score: {final_score}"))
            .centered()
            .render(score, buf);
        Line::from("Press any key to exit...")
            .centered()
            .render(prompt, buf);
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state == GameState::Over {
            self.render_game_over(area, buf);
            return;
        }
        let (score_bar, separator, board) = self.areas(area);
        let score = self.score;
        Line::styled(
            format!("Score: {score} | Use WASD or Arrow Keys | Press 'q' to Quit"),
            consts::SCORE_BAR_STYLE,
        )
        .centered()
        .render(score_bar, buf);
        Line::from(
            consts::SEPARATOR_SYMBOL
                .to_string()
                .repeat(usize::from(separator.width)),
        )
        .render(separator, buf);
        Block::bordered().render(board, buf);
        let mut level = Canvas {
            area: board.inner(Margin::new(1, 1)),
            buf,
        };
        if let Some(pos) = self.food {
            level.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &pos in self.snake.body() {
            level.draw_char(pos, consts::SNAKE_BODY_SYMBOL);
        }
        // Drawn last so the head wins any overlap
        level.draw_char(self.snake.head(), self.snake.head_symbol());
    }
}

/// Outcome of drawing a frame
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FrameStatus {
    /// A full frame was drawn
    Drawn,
    /// The food was off-screen; nothing was drawn this cycle
    Stale,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Over,
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_char(&mut self, pos: Position, symbol: char) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}
