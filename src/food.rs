//! Food placement.
//!
//! Rejection sampling is uniform over free cells and fast while the board is
//! mostly empty. After a bounded number of misses the spawner falls back to
//! listing the free cells and picking one, which is also uniform and always
//! terminates.

use crate::grid::{Grid, Pos};
use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

const SAMPLE_ATTEMPTS: usize = 64;

/// Picks a random unoccupied playable cell, or `None` when the board is full.
pub fn spawn(grid: &Grid, rng: &mut impl Rng) -> Option<Pos> {
    let size = grid.size();
    if size.area() == 0 {
        return None;
    }

    for _ in 0..SAMPLE_ATTEMPTS {
        let pos = Pos {
            x: rng.gen_range(0..size.width as i32),
            y: rng.gen_range(0..size.height as i32),
        };
        if !grid.is_occupied(pos) {
            return Some(pos);
        }
    }

    debug!("Sampling missed {} times, scanning free cells", SAMPLE_ATTEMPTS);
    grid.free_cells().choose(rng)
}
