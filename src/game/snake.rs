use super::direction::Direction;
use crate::consts;
use ratatui::layout::{Position, Size};
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are relative to the top-left corner of the playing field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body, oldest (the
    /// tail) at the front and most recent at the back
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing in `direction`,
    /// with its body trailing
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] minus one
    /// cells behind the head.
    pub(super) fn new(head: Position, direction: Direction, bounds: Size) -> Snake {
        let rear = direction.reverse();
        let mut body = VecDeque::with_capacity(consts::INITIAL_SNAKE_LENGTH - 1);
        for pos in std::iter::successors(Some(head), |&p| rear.advance(p, bounds))
            .skip(1)
            .take(consts::INITIAL_SNAKE_LENGTH - 1)
        {
            body.push_front(pos);
        }
        Snake {
            head,
            body,
            direction,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.head
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

    /// Return the positions of the cells in the snake's body
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// True if `pos` is covered by the snake's head or body
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Change the snake's direction to `direction`.  A turn directly back
    /// onto the snake's own neck is ignored.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// The cell the head will move into next, or `None` if the snake is
    /// facing the edge of a `bounds`-sized field
    pub(super) fn next_head(&self, bounds: Size) -> Option<Position> {
        self.direction.advance(self.head, bounds)
    }

    /// Move the head into `next`, dragging the body along behind it.  When
    /// `grow` is true the tail cell stays put and the snake gains one cell.
    pub(super) fn slither(&mut self, next: Position, grow: bool) {
        self.body.push_back(self.head);
        self.head = next;
        if !grow {
            let _ = self.body.pop_front();
        }
    }
}
