/// A cardinal step on a rectangular grid.
///
/// `Up` decrements the row, `Left` decrements the column; rows grow
/// downward from the top edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Iterate through all `Direction`s: `Left`, `Right`, `Up`, `Down`.
    ///
    /// This is the 4-connected neighbor offset set
    /// `{(0,-1), (0,1), (-1,0), (1,0)}`, in that order.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::Left), |direction| {
            use Direction::*;

            match direction {
                Left => Some(Right),
                Right => Some(Up),
                Up => Some(Down),
                Down => None,
            }
        })
    }

    /// Iterate through the four diagonal offsets as
    /// `(vertical, horizontal)` pairs.
    ///
    /// Yields `(Up, Left)`, `(Up, Right)`, `(Down, Left)`, `(Down, Right)`:
    /// the offset set `{(-1,-1), (-1,1), (1,-1), (1,1)}`, in that order.
    pub fn iter_diag() -> impl Iterator<Item = (Direction, Direction)> {
        use Direction::*;

        std::iter::successors(Some((Up, Left)), |diagonal| match diagonal {
            (Up, Left) => Some((Up, Right)),
            (Up, Right) => Some((Down, Left)),
            (Down, Left) => Some((Down, Right)),
            _ => None,
        })
    }
}
