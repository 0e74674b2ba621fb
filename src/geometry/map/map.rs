use super::tile::DisplayWidth;
use crate::geometry::{Direction, Point};
use std::{
    convert::TryFrom,
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

/// A `Map` keeps track of a rectangular tile grid.
///
/// Tiles are stored row-major. The coordinate system puts the origin at the
/// top-left cell, with rows growing downward, so that a map displays in the
/// same orientation as its textual source.
///
/// While it is possible to clone a map, it is generally safe to assume that
/// doing so is a sign that there's a better approach possible.
///
/// ## Entry Points
///
/// - [`Map::new`] and [`Map::procedural`] are most useful when building a
///   grid in code.
/// - Use `Map::from` for 2d array literals, and [`Map::try_from`] for
///   textual input.
///
/// ## Panics
///
/// Several internal methods assume that the width and height of the map can
/// be represented in an `i32`. Very large maps may panic if that assumption
/// is violated.
#[derive(Clone, Default)]
pub struct Map<Tile> {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl<Tile> Map<Tile> {
    /// Procedurally create a new `Map` from a function.
    ///
    /// Dimensions are given as `height` rows of `width` columns.
    pub fn procedural(height: usize, width: usize, procedure: impl Fn(Point) -> Tile) -> Map<Tile> {
        let area = width * height;
        let mut map = Map {
            tiles: Vec::with_capacity(area),
            width,
            height,
        };
        for idx in 0..area {
            let point = map.index2point(idx);
            map.tiles.push(procedure(point));
        }
        map
    }

    /// Width of this map: the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of this map: the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterate over the points and tiles of this map.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Tile)> {
        let index2point = self.make_index2point();
        self.tiles
            .iter()
            .enumerate()
            .map(move |(idx, tile)| (index2point(idx), tile))
    }

    /// `true` when a point is legal within the bounds of this map.
    #[inline]
    pub fn in_bounds(&self, point: Point) -> bool {
        point.row >= 0
            && point.col >= 0
            && (point.row as usize) < self.height
            && (point.col as usize) < self.width
    }

    /// Make a function which returns `true` when the parameter is within the bounds of this map,
    /// without depending on the lifetime of `self`.
    pub fn make_in_bounds(&self) -> impl Fn(Point) -> bool {
        let width = self.width;
        let height = self.height;

        move |point| {
            point.row >= 0
                && point.col >= 0
                && (point.row as usize) < height
                && (point.col as usize) < width
        }
    }

    /// convert a 2d point into a 1d index into the tiles
    pub(crate) fn point2index(&self, row: usize, col: usize) -> usize {
        col + (row * self.width)
    }

    /// convert a 1d index in the tiles into a 2d point
    fn index2point(&self, idx: usize) -> Point {
        (idx / self.width, idx % self.width).into()
    }

    /// make a function which converts a 1d index in the tiles into a 2d point without borrowing self
    fn make_index2point(&self) -> impl Fn(usize) -> Point {
        let width = self.width;

        move |idx| (idx / width, idx % width).into()
    }

    /// Return an iterator of all legal points adjacent to the given point.
    ///
    /// This iterator will return up to 8 elements; it includes diagonals.
    /// Orthogonal neighbors come first, in [`Direction::iter`] order, then
    /// diagonals in [`Direction::iter_diag`] order.
    pub fn adjacencies(&self, point: Point) -> impl Iterator<Item = Point> {
        let in_bounds = self.make_in_bounds();
        self.orthogonal_adjacencies(point).chain(
            Direction::iter_diag()
                .map(move |(vertical, horizontal)| point + vertical + horizontal)
                .filter(move |&point| in_bounds(point)),
        )
    }

    /// Return an iterator of all legal points orthogonally adjacent to the given point.
    ///
    /// This iterator will return up to 4 elements; it does not include diagonals.
    pub fn orthogonal_adjacencies(&self, point: Point) -> impl Iterator<Item = Point> {
        let in_bounds = self.make_in_bounds();
        Direction::iter()
            .map(move |direction| point + direction)
            .filter(move |&point| in_bounds(point))
    }
}

impl<Tile: Clone + Default> Map<Tile> {
    /// Create a new map of the specified dimensions, filled with the tile default.
    ///
    /// Dimensions are given as `height` rows of `width` columns.
    #[inline]
    pub fn new(height: usize, width: usize) -> Map<Tile> {
        Map {
            tiles: vec![Tile::default(); width * height],
            width,
            height,
        }
    }
}

impl<Tile> fmt::Debug for Map<Tile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Map<{}>", std::any::type_name::<Tile>()))
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tiles", &format_args!("[...; {}]", self.tiles.len()))
            .finish()
    }
}

impl<Tile: PartialEq> PartialEq for Map<Tile> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.tiles == other.tiles
    }
}

impl<Tile: Eq> Eq for Map<Tile> {}

impl<Tile, Row> From<&[Row]> for Map<Tile>
where
    Tile: Clone,
    Row: AsRef<[Tile]>,
{
    /// Convert an input 2d array into a map.
    ///
    /// The outer array is the rows, topmost first; `source[0][0]` becomes
    /// the top-left corner of the map.
    ///
    /// Panics if the input array is not rectangular.
    fn from(source: &[Row]) -> Map<Tile> {
        let height = source.len();
        if height == 0 {
            return Map {
                tiles: Vec::new(),
                width: 0,
                height: 0,
            };
        }

        let width = source[0].as_ref().len();
        assert!(
            source
                .as_ref()
                .iter()
                .all(|row| row.as_ref().len() == width),
            "input must be rectangular"
        );

        let mut tiles = Vec::with_capacity(width * height);
        for row in source.iter() {
            for tile in row.as_ref().iter() {
                tiles.push(tile.clone());
            }
        }

        Map {
            tiles,
            width,
            height,
        }
    }
}

impl<Tile> Map<Tile>
where
    Tile: Clone + DisplayWidth + FromStr,
    <Tile as FromStr>::Err: 'static + std::error::Error + Send + Sync,
{
    /// Try to convert the contents of a reader into a map.
    ///
    /// We don't actually `impl<T, R> TryFrom<R> for Map<T>` because there's a
    /// coherence conflict with the stdlib blanket impl
    ///
    /// ```rust,ignore
    /// impl<T, U> std::convert::TryFrom<U> for T where U: std::convert::Into<T>;
    /// ```
    ///
    /// Because there's a chance that `R` also implements `Into<Map<T>>`, we can't do it.
    ///
    /// That doesn't stop us from doing it here, and implementing the official trait for
    /// a few concrete types
    pub fn try_from<R>(input: R) -> Result<Self, MapConversionErr>
    where
        R: std::io::BufRead,
    {
        let mut arr = Vec::new();

        for line in input.lines() {
            let line = line?;

            let mut row = Vec::with_capacity(line.len() / Tile::DISPLAY_WIDTH);
            for chunk in Tile::chunks(&line) {
                row.push(Tile::from_str(&chunk).map_err(|err| {
                    MapConversionErr::TileConversion(Box::new(err), chunk.to_string())
                })?);
            }
            if !row.is_empty() {
                arr.push(row);
            }
        }

        if !arr.is_empty() {
            let width = arr[0].len();
            if !arr.iter().all(|row| row.len() == width) {
                return Err(MapConversionErr::NotRectangular);
            }
        }

        Ok(Map::from(arr.as_slice()))
    }
}

impl<Tile> TryFrom<&str> for Map<Tile>
where
    Tile: Clone + DisplayWidth + FromStr,
    <Tile as FromStr>::Err: 'static + std::error::Error + Send + Sync,
{
    type Error = MapConversionErr;

    /// the input should be in natural graphical order:
    /// its first characters are the top left.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        <Self>::try_from(input.as_bytes())
    }
}

impl<Tile> Index<(usize, usize)> for Map<Tile> {
    type Output = Tile;

    fn index(&self, (row, col): (usize, usize)) -> &Tile {
        self.tiles.index(self.point2index(row, col))
    }
}

impl<Tile> Index<Point> for Map<Tile> {
    type Output = Tile;

    /// Panics if `point.row < 0 || point.col < 0`
    fn index(&self, point: Point) -> &Tile {
        assert!(
            point.row >= 0 && point.col >= 0,
            "point must be in the positive quadrant"
        );
        self.index((point.row as usize, point.col as usize))
    }
}

impl<Tile> IndexMut<(usize, usize)> for Map<Tile> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Tile {
        let idx = self.point2index(row, col);
        self.tiles.index_mut(idx)
    }
}

impl<Tile> IndexMut<Point> for Map<Tile> {
    /// Panics if `point.row < 0 || point.col < 0`
    fn index_mut(&mut self, point: Point) -> &mut Tile {
        assert!(
            point.row >= 0 && point.col >= 0,
            "point must be in the positive quadrant"
        );
        self.index_mut((point.row as usize, point.col as usize))
    }
}

impl<Tile> fmt::Display for Map<Tile>
where
    Tile: fmt::Display + DisplayWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(
                    f,
                    "{:width$}",
                    self.index((row, col)),
                    width = Tile::DISPLAY_WIDTH
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MapConversionErr {
    #[error("converting tile from {1:?}")]
    TileConversion(
        #[source] Box<dyn 'static + std::error::Error + Send + Sync>,
        String,
    ),
    #[error("map must be rectangular")]
    NotRectangular,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
