//! One game's worth of simulation state and the per-tick step.

use crate::body::Body;
use crate::consts;
use crate::direction::Direction;
use crate::food;
use crate::grid::{Grid, Pos, Size};
use crate::input::Input;
use log::{debug, info};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Ongoing,        // Moved, same length
    Nommed,         // Moved onto the food and grew by one
    Collision(Pos), // Head would have entered this wall or body cell
    BoardFull,      // Nowhere left to put food or grow into
    NoBody,         // Nothing to move
    Quit,
}

impl StepResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepResult::Ongoing | StepResult::Nommed)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    body: Body,
    heading: Direction,
    travelled: Direction,
    food: Option<Pos>,
}

impl Session {
    /// Standard opening: the seed segments stacked on the start cell, heading east.
    pub fn new(size: Size) -> Self {
        let start = Pos {
            x: consts::START_POS.x.min(size.width as i32 - 1).max(0),
            y: consts::START_POS.y.min(size.height as i32 - 1).max(0),
        };
        Self::with_start(size, start, consts::INITIAL_LENGTH, consts::INITIAL_DIRECTION)
    }

    pub fn with_start(size: Size, start: Pos, length: usize, direction: Direction) -> Self {
        let mut grid = Grid::new(size);
        let mut body = Body::with_capacity(size.area());

        if grid.contains(start) {
            for _ in 0..length.clamp(1, size.area().max(1)) {
                body.enqueue(start, &mut grid);
            }
        }
        info!(
            "New session on {}x{} board, {} segments at {:?} heading {:?}",
            size.width,
            size.height,
            body.len(),
            start,
            direction
        );

        Session {
            grid,
            body,
            heading: direction,
            travelled: direction,
            food: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn food(&self) -> Option<Pos> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.heading
    }

    /// Direction of the last move actually made.
    pub fn travelled(&self) -> Direction {
        self.travelled
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    /// Ignores any turn that would reverse the pending heading or the last move.
    pub fn change_direction(&mut self, new_direction: Direction) {
        if new_direction == self.heading.opposite() || new_direction == self.travelled.opposite()
        {
            debug!("Rejected reversal to {:?}", new_direction);
            return;
        }
        self.heading = new_direction;
    }

    /// Runs one tick: applies the inputs in order, makes sure food exists,
    /// then moves the snake one cell or reports why it cannot.
    pub fn step<I>(&mut self, inputs: I, rng: &mut impl Rng) -> StepResult
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            match input {
                Input::Turn(direction) => self.change_direction(direction),
                Input::Quit => return StepResult::Quit,
            }
        }

        let food = match self.food {
            Some(pos) => pos,
            None => match food::spawn(&self.grid, rng) {
                Some(pos) => {
                    debug!("Food spawned at {:?}", pos);
                    self.food = Some(pos);
                    pos
                }
                None => return StepResult::BoardFull,
            },
        };

        let Some(head) = self.body.head() else {
            return StepResult::NoBody;
        };
        let new_head = head.offset(self.heading.into());

        if self.grid.is_occupied(new_head) {
            return StepResult::Collision(new_head);
        }

        if !self.body.enqueue(new_head, &mut self.grid) {
            return StepResult::BoardFull;
        }
        self.travelled = self.heading;

        if new_head == food {
            self.food = None;
            debug!("Ate food at {:?}, length now {}", food, self.body.len());
            StepResult::Nommed
        } else {
            self.body.dequeue(&mut self.grid);
            StepResult::Ongoing
        }
    }

    #[cfg(test)]
    pub fn place_food(&mut self, pos: Pos) {
        assert!(
            !self.grid.is_occupied(pos),
            "Attempted to place food at invalid position"
        );
        self.food = Some(pos);
    }
}
