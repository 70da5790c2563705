//! Cardinal directions and coordinate stepping on a rectangular grid.
//!
//! Coordinates are `(x, y)` with `x` growing east and `y` growing south, so
//! the top-left cell is `(0, 0)`.

/// A grid coordinate as `(x, y)`.
pub type Coord = (usize, usize);

/// One of the four cardinal directions.
///
/// The declaration order is the fixed expansion order used by the search
/// and is part of its tie-breaking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset as `(dx, dy)`.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Rotates 90 degrees counter-clockwise.
    #[inline]
    pub const fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Rotates 90 degrees clockwise.
    #[inline]
    pub const fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Moves one cell from `coord`, or `None` if that leaves a
    /// `width` x `height` grid.
    #[inline]
    pub fn step(self, coord: Coord, width: usize, height: usize) -> Option<Coord> {
        let (dx, dy) = self.offset();
        let x = coord.0.checked_add_signed(dx)?;
        let y = coord.1.checked_add_signed(dy)?;
        (x < width && y < height).then_some((x, y))
    }

    /// The direction leading from `from` to an adjacent `to`.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        Direction::ALL.into_iter().find(|dir| {
            let (dx, dy) = dir.offset();
            from.0.checked_add_signed(dx) == Some(to.0)
                && from.1.checked_add_signed(dy) == Some(to.1)
        })
    }

    /// Arrow glyph used when drawing routes.
    pub const fn arrow(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }
}
