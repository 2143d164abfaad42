//! Occupancy map for O(1) collision checks.
//!
//! The playable area is surrounded by a permanent ring of wall cells, so the
//! backing store is `(width + 2) x (height + 2)` and playable cell `(x, y)`
//! lives at `(x + 1, y + 1)`. Interior cells hold the number of body segments
//! stacked on them; a cell is occupied while that count is non-zero.

use log::warn;

const WALL: u32 = u32::MAX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Number of playable cells, which is also the longest the snake can get.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A playable cell, 0-indexed. The wall ring is at `-1` and `width`/`height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone)]
pub struct Grid {
    size: Size,
    cells: Vec<u32>,
}

impl Grid {
    pub fn new(size: Size) -> Self {
        let mut grid = Grid {
            size,
            cells: vec![0; (size.width as usize + 2) * (size.height as usize + 2)],
        };
        grid.initialize();
        grid
    }

    /// Clears every cell, then walls off the outer ring.
    pub fn initialize(&mut self) {
        self.cells.fill(0);

        let stride = self.stride();
        let rows = self.size.height as usize + 2;
        for x in 0..stride {
            self.cells[x] = WALL;
            self.cells[(rows - 1) * stride + x] = WALL;
        }
        for y in 0..rows {
            self.cells[y * stride] = WALL;
            self.cells[y * stride + stride - 1] = WALL;
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn occupy(&mut self, pos: Pos) {
        match self.interior_index(pos) {
            Some(index) => self.cells[index] += 1,
            None => warn!("Ignoring occupy outside the playable area: {:?}", pos),
        }
    }

    pub fn vacate(&mut self, pos: Pos) {
        match self.interior_index(pos) {
            Some(index) => self.cells[index] = self.cells[index].saturating_sub(1),
            None => warn!("Ignoring vacate outside the playable area: {:?}", pos),
        }
    }

    /// True for wall cells, snake cells, and anything beyond the wall ring.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        match self.ring_index(pos) {
            Some(index) => self.cells[index] != 0,
            None => true,
        }
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        match self.ring_index(pos) {
            Some(index) => self.cells[index] == WALL,
            None => false,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.interior_index(pos).is_some()
    }

    /// Every unoccupied playable cell, row by row.
    pub fn free_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let (width, height) = (self.size.width as i32, self.size.height as i32);
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| Pos { x, y }))
            .filter(|pos| !self.is_occupied(*pos))
    }

    fn stride(&self) -> usize {
        self.size.width as usize + 2
    }

    fn ring_index(&self, pos: Pos) -> Option<usize> {
        let (x, y) = (pos.x + 1, pos.y + 1);
        if x < 0 || y < 0 || x > self.size.width as i32 + 1 || y > self.size.height as i32 + 1 {
            return None;
        }
        Some(y as usize * self.stride() + x as usize)
    }

    fn interior_index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0
            || pos.y < 0
            || pos.x >= self.size.width as i32
            || pos.y >= self.size.height as i32
        {
            return None;
        }
        self.ring_index(pos)
    }
}
