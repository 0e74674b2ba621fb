use super::terrain::{IntoTerrain, Terrain};
use super::Map;
use crate::geometry::Point;
use bitvec::bitvec;
use std::collections::BinaryHeap;
use std::fmt;
use std::time::{Duration, Instant};

/// One instantiation of a grid cell during a search.
///
/// Nodes live in a per-call arena and refer to their parent by arena index;
/// the parent links form a tree rooted at the start node. Scores are zero at
/// construction and are assigned exactly once, before the node is pushed
/// onto the frontier.
pub(crate) struct SearchNode {
    pub position: Point,
    pub parent: Option<usize>,
    /// Accumulated cost from the start, inclusive of this cell's entry cost.
    pub g: u32,
    /// Manhattan estimate of the remaining cost to the goal.
    pub h: u32,
    /// `g + h`, the frontier priority key.
    pub f: u32,
}

impl SearchNode {
    fn new(parent: Option<usize>, position: Point) -> SearchNode {
        SearchNode {
            position,
            parent,
            g: 0,
            h: 0,
            f: 0,
        }
    }
}

/// Nodes compare equal when they stand for the same cell, whatever their
/// scores or ancestry. This is the identity used for closed-set membership
/// and duplicate suppression; it is intentionally not full-record equality.
impl PartialEq for SearchNode {
    fn eq(&self, other: &SearchNode) -> bool {
        self.position == other.position
    }
}

impl Eq for SearchNode {}

impl fmt::Debug for SearchNode {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            out,
            "{} - g: {} h: {} f: {}",
            self.position, self.g, self.h, self.f
        )
    }
}

/// A* frontier entry
// https://doc.rust-lang.org/std/collections/binary_heap/#examples
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct OpenEntry {
    f: u32,
    g: u32,
    /// Arena index of the node this entry schedules.
    node: usize,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for OpenEntry {
    fn cmp(&self, other: &OpenEntry) -> std::cmp::Ordering {
        // Notice that we flip the ordering on f. Ties prefer the larger g
        // (the deeper node), then the higher arena index (the newer node);
        // the last step also keeps `PartialEq` and `Ord` consistent.
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &OpenEntry) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The goal cell was reached; the route is complete.
    Goal,
    /// The iteration cap was hit first; the route is a best-effort prefix
    /// ending at the most recently expanded cell.
    IterationCap,
    /// The frontier emptied without reaching the goal: no route exists.
    Exhausted,
}

/// The product of a routing call.
///
/// The path always begins at the start cell; whether it reaches the goal is
/// reported by [`termination`](Route::termination), or equivalently by
/// inspecting the final path element. Cost, node count, and elapsed time
/// are informational side channels and never influence the path itself.
#[derive(Debug, Clone)]
pub struct Route {
    path: Vec<Point>,
    cost: u32,
    nodes_generated: usize,
    elapsed: Duration,
    termination: Termination,
}

impl Route {
    /// The cells of the route, from the start cell to the terminal cell.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Consume the route, keeping only the cells.
    pub fn into_path(self) -> Vec<Point> {
        self.path
    }

    /// Sum of the entry costs of every cell on the path except the start.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Total search nodes instantiated, counting suppressed duplicates.
    pub fn nodes_generated(&self) -> usize {
        self.nodes_generated
    }

    /// Wall-clock duration of the search.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// How the search ended.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// `true` when the route actually reaches the goal.
    pub fn reached_goal(&self) -> bool {
        self.termination == Termination::Goal
    }
}

/// A routing call was structurally invalid before the search could begin.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("cannot route on an empty map")]
    EmptyMap,
    #[error("endpoint {0} is outside the map bounds")]
    OutOfBounds(Point),
}

impl<Tile: Clone + IntoTerrain> Map<Tile> {
    /// Find a lowest-cost route between two cells using A*.
    ///
    /// Movement is 4-connected, or 8-connected when `allow_diagonal` is
    /// set. Each tile classifies its cell as blocked or open with an entry
    /// cost (see [`IntoTerrain`]); the route cost is the sum of entry costs
    /// over every cell after the start.
    ///
    /// The search gives up after `height * width / 2` iterations, and a
    /// search whose frontier empties found no route at all. Neither case is
    /// an error: both return the best-effort path ending at the most
    /// recently expanded cell, report the cause in [`Route::termination`],
    /// and emit a warning through the `log` facade. Only a structurally
    /// invalid call (empty map, endpoint out of bounds) fails with
    /// [`RouteError`].
    ///
    /// Frontier ties on the priority key break deterministically: deeper
    /// nodes first, then more recently generated ones. Repeated calls with
    /// identical inputs return identical routes.
    pub fn route(
        &self,
        start: Point,
        goal: Point,
        allow_diagonal: bool,
    ) -> Result<Route, RouteError> {
        let timer = Instant::now();

        if self.width() == 0 || self.height() == 0 {
            return Err(RouteError::EmptyMap);
        }
        if !self.in_bounds(start) {
            return Err(RouteError::OutOfBounds(start));
        }
        if !self.in_bounds(goal) {
            return Err(RouteError::OutOfBounds(goal));
        }

        // Arena of every node instantiated during this search. Its length
        // doubles as the nodes-generated statistic: candidates suppressed
        // below still count. The start node's heuristic is left at zero;
        // it is popped first no matter what its scores are.
        let mut nodes = vec![SearchNode::new(None, start)];

        let mut open = BinaryHeap::new();
        open.push(OpenEntry { f: 0, g: 0, node: 0 });

        // Closed set, keyed by cell index. Membership is by position only.
        let mut closed = bitvec![0; self.width() * self.height()];

        // Safety bound against pathological or disconnected grids.
        let max_iterations = self.width() * self.height() / 2;
        let mut iterations = 0_usize;

        // Most recently popped node: the terminal node of the give-up paths.
        let mut last = 0_usize;

        let termination = loop {
            iterations += 1;
            if iterations > max_iterations {
                break Termination::IterationCap;
            }

            let current = match open.pop() {
                Some(entry) => entry.node,
                None => break Termination::Exhausted,
            };
            last = current;

            let position = nodes[current].position;
            closed.set(
                self.point2index(position.row as usize, position.col as usize),
                true,
            );

            if position == goal {
                break Termination::Goal;
            }

            let current_g = nodes[current].g;
            let neighbors: Vec<Point> = if allow_diagonal {
                self.adjacencies(position).collect()
            } else {
                self.orthogonal_adjacencies(position).collect()
            };

            for neighbor in neighbors {
                let step_cost = match self[neighbor].clone().into_terrain() {
                    Terrain::Blocked => continue,
                    Terrain::Open(cost) => cost,
                };

                // Every walkable candidate counts as generated, including
                // the ones suppressed below.
                let candidate = nodes.len();
                nodes.push(SearchNode::new(Some(current), neighbor));

                if closed[self.point2index(neighbor.row as usize, neighbor.col as usize)] {
                    continue;
                }

                let g = current_g + step_cost;
                let h = (goal - neighbor).manhattan() as u32;
                let node = &mut nodes[candidate];
                node.g = g;
                node.h = h;
                node.f = g + h;
                let f = node.f;

                // Drop the candidate when the frontier already holds a
                // strictly cheaper entry for this cell. Equal-cost
                // duplicates are pushed, and stale heavier entries stay in
                // the frontier: popped later, they are re-expanded and all
                // their children suppressed by the closed set.
                if open
                    .iter()
                    .any(|entry| nodes[entry.node].position == neighbor && g > entry.g)
                {
                    continue;
                }

                open.push(OpenEntry {
                    f,
                    g,
                    node: candidate,
                });
            }
        };

        match termination {
            Termination::Goal => {}
            Termination::IterationCap => log::warn!(
                "giving up on route {} -> {}: too many iterations (cap {}, terminal {:?})",
                start,
                goal,
                max_iterations,
                nodes[last],
            ),
            Termination::Exhausted => log::warn!(
                "no route {} -> {}: frontier exhausted (terminal {:?})",
                start,
                goal,
                nodes[last],
            ),
        }

        // Walk the parent links back to the start, then flip into
        // start-to-terminal order.
        let mut path = Vec::new();
        let mut cursor = Some(last);
        while let Some(idx) = cursor {
            path.push(nodes[idx].position);
            cursor = nodes[idx].parent;
        }
        path.reverse();

        let cost = path[1..]
            .iter()
            .map(|&point| match self[point].clone().into_terrain() {
                Terrain::Open(cost) => cost,
                // never on a path beyond the start
                Terrain::Blocked => 0,
            })
            .sum();

        Ok(Route {
            path,
            cost,
            nodes_generated: nodes.len(),
            elapsed: timer.elapsed(),
            termination,
        })
    }
}
