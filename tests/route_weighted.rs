//! Run with: `cargo test --test route_weighted`

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::convert::TryFrom;

use gridroute::geometry::map::{
    tile::{DisplayWidth, Weight},
    IntoTerrain, Terrain,
};
use gridroute::{Map, Point};

/// Two heavy columns flank a cheap corridor around the bottom; the right
/// half of the map is blocked padding.
const MAZE: &str = "\
1999100000
1919100000
1919100000
1111100000
";

/// Textbook Dijkstra, as an independent optimality reference.
fn dijkstra_cost<Tile>(map: &Map<Tile>, start: Point, goal: Point) -> Option<u32>
where
    Tile: Clone + IntoTerrain,
{
    let mut best: HashMap<Point, u32> = HashMap::new();
    let mut heap = BinaryHeap::new();
    best.insert(start, 0);
    heap.push(Reverse((0_u32, start)));

    while let Some(Reverse((cost, point))) = heap.pop() {
        if point == goal {
            return Some(cost);
        }
        if cost > best.get(&point).copied().unwrap_or(u32::MAX) {
            continue;
        }
        for neighbor in map.orthogonal_adjacencies(point) {
            let step = match map[neighbor].clone().into_terrain() {
                Terrain::Blocked => continue,
                Terrain::Open(step) => step,
            };
            let next = cost + step;
            if next < best.get(&neighbor).copied().unwrap_or(u32::MAX) {
                best.insert(neighbor, next);
                heap.push(Reverse((next, neighbor)));
            }
        }
    }

    None
}

#[test]
fn test_cheap_detour_beats_direct() {
    let map = <Map<Weight> as TryFrom<&str>>::try_from(MAZE).unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(0, 4);

    let route = map.route(start, goal, false).unwrap();
    assert!(route.reached_goal());
    assert_eq!(route.path().first(), Some(&start));
    assert_eq!(route.path().last(), Some(&goal));

    // around the bottom: 10 unit cells instead of a 9-weighted shortcut
    assert_eq!(route.cost(), 10);
    assert_eq!(route.path().len(), 11);
    assert!(route.path().contains(&Point::new(3, 2)));

    assert_eq!(dijkstra_cost(&map, start, goal), Some(route.cost()));
}

#[test]
fn test_matches_dijkstra_on_unit_grid() {
    let map: Map<u32> =
        Map::procedural(7, 7, |point| if point == Point::new(3, 3) { 0 } else { 1 });
    let start = Point::new(0, 0);
    let goal = Point::new(6, 6);

    let route = map.route(start, goal, false).unwrap();
    assert!(route.reached_goal());
    assert_eq!(dijkstra_cost(&map, start, goal), Some(route.cost()));
}

/// A caller-defined tile wrapping [`Weight`], as a downstream crate would.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
struct Cell(Weight);

impl DisplayWidth for Cell {
    const DISPLAY_WIDTH: usize = Weight::DISPLAY_WIDTH;
}

impl IntoTerrain for Cell {
    fn into_terrain(self) -> Terrain {
        self.0.into_terrain()
    }
}

#[test]
fn test_custom_tile_routes_like_weight() {
    let reference = <Map<Weight> as TryFrom<&str>>::try_from(MAZE).unwrap();
    let custom = <Map<Cell> as TryFrom<&str>>::try_from(MAZE).unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(0, 4);

    let expected = reference.route(start, goal, false).unwrap();
    let route = custom.route(start, goal, false).unwrap();

    assert_eq!(route.cost(), expected.cost());
    assert_eq!(route.into_path(), expected.path().to_vec());
}
