//! Hard-coded configuration
use crate::direction::Direction;
use crate::grid::{Pos, Size};
use ratatui::style::Color;
use std::time::Duration;

/// Playable area, not counting the wall ring
pub const GRID_SIZE: Size = Size {
    width: 30,
    height: 40,
};

/// Cell the seed segments are stacked on
pub const START_POS: Pos = Pos { x: 5, y: 5 };

pub const INITIAL_LENGTH: usize = 3;

pub const INITIAL_DIRECTION: Direction = Direction::East;

/// Fixed delay after each step, roughly ten ticks a second
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Terminal columns per grid cell. Terminal glyphs are about twice as tall as
/// they are wide, so two columns make a cell look square.
pub const CELL_COLS: u16 = 2;

pub const LOG_FILE: &str = "gridsnek.log";

pub const WALL_COLOR: Color = Color::Red;
pub const BODY_COLOR: Color = Color::White;
pub const HEAD_COLOR: Color = Color::Gray;
pub const FOOD_COLOR: Color = Color::Blue;
