//! Snake body as a fixed-capacity ring buffer of cells, tail first.
//!
//! The buffer is allocated once at the largest length the board allows, so
//! moving (enqueue a head, dequeue a tail) never reallocates. Every enqueue
//! occupies its cell in the [`Grid`] and every dequeue vacates it, which keeps
//! the grid and the body in lockstep.

use crate::grid::{Grid, Pos};
use log::warn;

#[derive(Debug, Clone)]
pub struct Body {
    segments: Box<[Pos]>,
    rear: usize,
    front: usize,
    len: usize,
}

impl Body {
    pub fn with_capacity(capacity: usize) -> Self {
        Body {
            segments: vec![Pos::default(); capacity.max(1)].into_boxed_slice(),
            rear: 0,
            front: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Adds a new head. Returns `false`, changing nothing, once full.
    pub fn enqueue(&mut self, pos: Pos, grid: &mut Grid) -> bool {
        if self.is_full() {
            warn!("Body is at capacity {}, dropping {:?}", self.capacity(), pos);
            return false;
        }

        self.segments[self.front] = pos;
        grid.occupy(pos);
        self.front = (self.front + 1) % self.capacity();
        self.len += 1;
        true
    }

    /// Removes the tail, or returns `None` when there is nothing to remove.
    pub fn dequeue(&mut self, grid: &mut Grid) -> Option<Pos> {
        if self.is_empty() {
            warn!("Dequeue from an empty body");
            return None;
        }

        let tail = self.segments[self.rear];
        self.rear = (self.rear + 1) % self.capacity();
        self.len -= 1;
        grid.vacate(tail);
        Some(tail)
    }

    /// The most recently enqueued cell.
    pub fn head(&self) -> Option<Pos> {
        if self.is_empty() {
            return None;
        }
        Some(self.segments[(self.front + self.capacity() - 1) % self.capacity()])
    }

    /// Segments from tail to head.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.len).map(move |i| self.segments[(self.rear + i) % self.capacity()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Size;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn setup(width: u16, height: u16) -> (Grid, Body) {
        let size = Size { width, height };
        (Grid::new(size), Body::with_capacity(size.area()))
    }

    fn assert_grid_matches_body(grid: &Grid, body: &Body) {
        let segments: HashSet<Pos> = body.iter().collect();
        let size = grid.size();
        for y in -1..=size.height as i32 {
            for x in -1..=size.width as i32 {
                let pos = Pos { x, y };
                let expected = grid.is_wall(pos) || segments.contains(&pos);
                assert_eq!(grid.is_occupied(pos), expected, "Mismatch at {:?}", pos);
            }
        }
    }

    #[test]
    fn test_enqueue_then_dequeue_is_fifo() {
        let (mut grid, mut body) = setup(5, 5);
        let cells = [Pos { x: 0, y: 0 }, Pos { x: 1, y: 0 }, Pos { x: 2, y: 0 }];

        for pos in cells {
            assert!(body.enqueue(pos, &mut grid));
        }
        assert_eq!(body.len(), 3);
        assert_eq!(body.head(), Some(Pos { x: 2, y: 0 }));
        assert_eq!(body.iter().next(), Some(Pos { x: 0, y: 0 }));
        assert_eq!(body.iter().collect::<Vec<_>>(), cells);

        assert_eq!(body.dequeue(&mut grid), Some(Pos { x: 0, y: 0 }));
        assert!(!grid.is_occupied(Pos { x: 0, y: 0 }));
        assert!(grid.is_occupied(Pos { x: 1, y: 0 }));
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_dequeue_empty_returns_none() {
        let (mut grid, mut body) = setup(3, 3);
        assert_eq!(body.dequeue(&mut grid), None);
        assert_eq!(body.len(), 0);
        assert_eq!(body.head(), None);
        assert_eq!(body.iter().next(), None);
    }

    #[test]
    fn test_enqueue_full_is_noop() {
        let (mut grid, mut body) = setup(2, 2);
        for (x, y) in [(0, 0), (1, 0), (1, 1), (0, 1)] {
            assert!(body.enqueue(Pos { x, y }, &mut grid));
        }
        assert!(body.is_full());

        let before: Vec<Pos> = body.iter().collect();
        assert!(!body.enqueue(Pos { x: 0, y: 0 }, &mut grid));
        assert_eq!(body.len(), 4);
        assert_eq!(body.iter().collect::<Vec<_>>(), before);
        assert_eq!(body.head(), Some(Pos { x: 0, y: 1 }));
    }

    #[test]
    fn test_head_wraps_around_buffer() {
        let (mut grid, mut body) = setup(3, 1);

        // Walk right and back so front and rear both lap the buffer
        let path = [(0, 0), (1, 0), (2, 0)];
        for (x, y) in path {
            body.enqueue(Pos { x, y }, &mut grid);
        }
        body.dequeue(&mut grid);
        body.dequeue(&mut grid);
        body.enqueue(Pos { x: 1, y: 0 }, &mut grid);
        body.enqueue(Pos { x: 0, y: 0 }, &mut grid);

        assert_eq!(body.len(), 3);
        assert_eq!(body.head(), Some(Pos { x: 0, y: 0 }));
        assert_eq!(body.iter().next(), Some(Pos { x: 2, y: 0 }));
        assert_eq!(
            body.iter().collect::<Vec<_>>(),
            vec![Pos { x: 2, y: 0 }, Pos { x: 1, y: 0 }, Pos { x: 0, y: 0 }]
        );
    }

    #[test]
    fn test_stacked_seed_translates() {
        let (mut grid, mut body) = setup(30, 40);
        let seed = Pos { x: 5, y: 5 };
        for _ in 0..3 {
            body.enqueue(seed, &mut grid);
        }

        body.enqueue(Pos { x: 6, y: 5 }, &mut grid);
        assert_eq!(body.dequeue(&mut grid), Some(seed));

        assert_eq!(body.len(), 3);
        assert!(grid.is_occupied(seed), "Two seed segments remain");
        assert_grid_matches_body(&grid, &body);
    }

    #[test]
    fn test_random_operations_keep_grid_in_lockstep() {
        let mut rng = StdRng::seed_from_u64(7);
        let (mut grid, mut body) = setup(6, 4);
        let capacity = body.capacity();

        for _ in 0..5_000 {
            if rng.gen_bool(0.55) {
                let pos = Pos {
                    x: rng.gen_range(0..6),
                    y: rng.gen_range(0..4),
                };
                body.enqueue(pos, &mut grid);
            } else {
                body.dequeue(&mut grid);
            }

            assert!(body.len() <= capacity);
            assert_grid_matches_body(&grid, &body);
        }
    }
}
