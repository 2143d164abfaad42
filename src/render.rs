use crate::consts::{self, CELL_COLS};
use crate::direction::Direction;
use crate::grid::{Pos, Size};
use crate::session::Session;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

/// Terminal cells needed for a board including its wall ring.
pub fn arena_extent(size: Size) -> (u16, u16) {
    (
        size.width * CELL_COLS + 2 * CELL_COLS,
        size.height + 2,
    )
}

/// Centres an arena of `size` inside `area`, or `None` if it does not fit.
pub fn arena_rect(size: Size, area: Rect) -> Option<Rect> {
    let (width, height) = arena_extent(size);
    if width > area.width || height > area.height {
        return None;
    }
    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

fn fill(buf: &mut Buffer, area: Rect, pos: Pos, symbol: &str, fg: Color, bg: Color) {
    // Ring cell (-1, -1) is the top-left corner of the arena
    let col = (pos.x + 1) * CELL_COLS as i32;
    let row = pos.y + 1;
    if col < 0 || row < 0 {
        return;
    }

    for dx in 0..CELL_COLS {
        let x = area.x as i32 + col + dx as i32;
        let y = area.y as i32 + row;
        if x >= (area.x + area.width) as i32 || y >= (area.y + area.height) as i32 {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
            cell.set_symbol(symbol).set_fg(fg).set_bg(bg);
        }
    }
}

fn head_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "▲",
        Direction::South => "▼",
        Direction::East => "▶",
        Direction::West => "◀",
    }
}

impl Widget for &Session {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = self.grid();
        let size = grid.size();

        for y in -1..=size.height as i32 {
            for x in -1..=size.width as i32 {
                let pos = Pos { x, y };
                if grid.is_wall(pos) {
                    fill(buf, area, pos, " ", Color::Reset, consts::WALL_COLOR);
                }
            }
        }

        for pos in self.body().iter() {
            fill(buf, area, pos, " ", Color::Reset, consts::BODY_COLOR);
        }

        // Add snake head (different symbol/color)
        if let Some(head) = self.body().head() {
            let symbol = head_symbol(self.travelled());
            fill(buf, area, head, symbol, consts::HEAD_COLOR, consts::BODY_COLOR);
        }

        if let Some(food) = self.food() {
            fill(buf, area, food, " ", Color::Reset, consts::FOOD_COLOR);
        }
    }
}
