pub mod geometry;

pub use geometry::{
    map::{Map, Route, RouteError, Termination},
    Direction, Point,
};
