use smallstr::SmallString;
use std::{convert::TryFrom, marker::PhantomData};

use super::terrain::{IntoTerrain, Terrain};

/// Number of characters below which the [`Chunks`] iterator does not allocate.
pub const CHUNK_WIDTH: usize = 4;

/// A type implementing `DisplayWidth` has a constant width for display and parsing.
///
/// This makes it suitable for 2d cartesian maps.
pub trait DisplayWidth {
    const DISPLAY_WIDTH: usize;

    /// Split a string into an iterator of chunks of characters of length `DISPLAY_WIDTH`
    fn chunks(s: &str) -> Chunks<Self> {
        Chunks(s.chars(), PhantomData)
    }
}

/// Iterator of chunks of equal width from a string.
///
/// Created with [`DisplayWidth::chunks`]. Never heap-allocates if `T::DISPLAY_WIDTH <= CHUNK_WIDTH`.
pub struct Chunks<'a, T: ?Sized>(std::str::Chars<'a>, PhantomData<T>);

impl<T: DisplayWidth> Iterator for Chunks<'_, T> {
    // 4 bytes in a max-width char
    type Item = SmallString<[u8; 4 * CHUNK_WIDTH]>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut s = SmallString::new();
        for _ in 0..T::DISPLAY_WIDTH {
            s.push(self.0.next()?);
        }
        Some(s)
    }
}

/// A maze cell which is either solid wall or open floor.
///
/// Open floor costs 1 to enter.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[derive(Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wall {
    #[display("#")]
    Solid,
    #[display(".")]
    #[default]
    Open,
}

impl DisplayWidth for Wall {
    const DISPLAY_WIDTH: usize = 1;
}

impl From<bool> for Wall {
    fn from(solid: bool) -> Wall {
        if solid {
            Wall::Solid
        } else {
            Wall::Open
        }
    }
}

impl IntoTerrain for Wall {
    fn into_terrain(self) -> Terrain {
        match self {
            Wall::Solid => Terrain::Blocked,
            Wall::Open => Terrain::Open(1),
        }
    }
}

/// A weighted cell holding a single digit.
///
/// Its range is `0..=9`: zero is impassable, any other digit is the cost of
/// entering the cell.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[from_str(regex = r"(?P<0>\d)")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weight(u8);

impl DisplayWidth for Weight {
    const DISPLAY_WIDTH: usize = 1;
}

impl From<Weight> for u8 {
    fn from(Weight(value): Weight) -> Self {
        value
    }
}

impl TryFrom<u8> for Weight {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        (value < 10).then(|| Weight(value)).ok_or(())
    }
}

impl IntoTerrain for Weight {
    fn into_terrain(self) -> Terrain {
        self.0.into_terrain()
    }
}
