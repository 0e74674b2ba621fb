//! Run with: `cargo test --test route_give_up`
//!
//! Exercises the bounded-effort terminations: an unbroken wall exhausts the
//! frontier, and a winding corridor trips the `R*C/2` iteration cap. Both
//! return a best-effort path rather than an error.

use gridroute::{Map, Point, RouteError, Termination};

#[test]
fn test_frontier_exhausted() {
    // a solid wall of blocked cells splits start from goal
    let map = Map::from(&[[1_u32, 0, 1], [1, 0, 1], [1, 0, 1]][..]);
    let route = map.route(Point::new(0, 0), Point::new(0, 2), false).unwrap();

    assert_eq!(route.termination(), Termination::Exhausted);
    assert!(!route.reached_goal());
    assert_ne!(route.path().last(), Some(&Point::new(0, 2)));
    // the reachable column was explored top to bottom before giving up
    assert_eq!(
        route.path(),
        &[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
    );
    assert_eq!(route.cost(), 2);
    // 1 start + 1 first expansion + 2 second + 1 third, counting the
    // duplicates suppressed by the closed set
    assert_eq!(route.nodes_generated(), 5);
}

#[test]
fn test_iteration_cap() {
    // the only route needs more expansions than the cap of 3*3/2 = 4
    let map = Map::from(&[[1_u32, 0, 1], [1, 0, 1], [1, 1, 1]][..]);
    let route = map.route(Point::new(0, 0), Point::new(0, 2), false).unwrap();

    assert_eq!(route.termination(), Termination::IterationCap);
    assert!(!route.reached_goal());
    assert_eq!(
        route.path(),
        &[
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(2, 1),
        ]
    );
    assert_eq!(route.cost(), 3);
}

#[test]
fn test_cap_before_first_expansion() {
    // a 1x1 map has a cap of zero, tripped before anything is popped; the
    // terminal defaults to the start node
    let map = Map::from(&[[1_u32]][..]);
    let route = map.route(Point::new(0, 0), Point::new(0, 0), false).unwrap();

    assert_eq!(route.termination(), Termination::IterationCap);
    assert_eq!(route.path(), &[Point::new(0, 0)]);
    assert_eq!(route.cost(), 0);
    assert_eq!(route.nodes_generated(), 1);
}

#[test]
fn test_trivial_goal_within_cap() {
    let map = Map::from(&[[1_u32, 1], [1, 1]][..]);
    let route = map.route(Point::new(0, 0), Point::new(0, 0), false).unwrap();

    assert_eq!(route.termination(), Termination::Goal);
    assert_eq!(route.path(), &[Point::new(0, 0)]);
    assert_eq!(route.cost(), 0);
}

#[test]
fn test_empty_map() {
    let map = Map::<u32>::new(0, 0);
    let err = map
        .route(Point::new(0, 0), Point::new(0, 0), false)
        .unwrap_err();
    assert!(matches!(err, RouteError::EmptyMap));
}

#[test]
fn test_endpoints_out_of_bounds() {
    let map = Map::from(&[[1_u32, 1], [1, 1]][..]);

    let err = map
        .route(Point::new(0, 0), Point::new(2, 0), false)
        .unwrap_err();
    assert!(matches!(err, RouteError::OutOfBounds(point) if point == Point::new(2, 0)));

    let err = map
        .route(Point::new(-1, 0), Point::new(1, 1), false)
        .unwrap_err();
    assert!(matches!(err, RouteError::OutOfBounds(point) if point == Point::new(-1, 0)));
}
