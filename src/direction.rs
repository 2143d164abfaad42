use crate::grid::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// One orthogonal step. Exactly one axis is non-zero, with magnitude 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => PosDelta { x: 0, y: -1 },
            Direction::South => PosDelta { x: 0, y: 1 },
            Direction::East => PosDelta { x: 1, y: 0 },
            Direction::West => PosDelta { x: -1, y: 0 },
        }
    }
}

impl Pos {
    /// Unbounded step; stepping off the playable area lands on the wall ring.
    pub fn offset(&self, delta: PosDelta) -> Pos {
        Pos {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}
