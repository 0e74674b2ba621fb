use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use super::direction::Direction;

/// A cell address on a rectangular grid.
///
/// Rows are counted downward from the top edge, columns rightward from the
/// left edge; `(0, 0)` is the top-left cell. Coordinates are signed so that
/// off-map candidates produced by stepping over an edge remain representable
/// until they are bounds-checked.
///
/// The derived `Ord` is lexicographic by `(row, col)`. No geometric meaning
/// is attached to it; it exists so points can serve as deterministic
/// tie-breakers and map keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Point {
        Point { row, col }
    }

    /// Manhattan norm: `|row| + |col|`.
    ///
    /// Applied to a difference of two points, this is the 4-connected
    /// distance between them.
    #[inline]
    pub fn manhattan(self) -> i32 {
        self.row.abs() + self.col.abs()
    }

    /// Chebyshev norm: `max(|row|, |col|)`.
    ///
    /// Applied to a difference of two points, this is the 8-connected
    /// distance between them.
    #[inline]
    pub fn chebyshev(self) -> i32 {
        self.row.abs().max(self.col.abs())
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl AddAssign<Direction> for Point {
    fn add_assign(&mut self, rhs: Direction) {
        match rhs {
            Direction::Left => self.col -= 1,
            Direction::Right => self.col += 1,
            Direction::Up => self.row -= 1,
            Direction::Down => self.row += 1,
        }
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(mut self, rhs: Direction) -> Point {
        self += rhs;
        self
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Point {
        Point::new(row as i32, col as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
