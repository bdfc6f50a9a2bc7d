use std::collections::HashSet;
use std::iter::once;

use itertools::Itertools;
use petgraph::algo::dijkstra;
use petgraph::graphmap::UnGraphMap;
use tracing::debug;

use crate::error::{Malformation, MazeError, Result};
use crate::graph::ConnectivityGraph;
use crate::location::Location;
use crate::shape::{Compass, Neighbors, PipeShape};

/// The single closed loop of pipe running through the start.
///
/// Cells are in walking order beginning at the start; the last cell connects back to the start.
#[derive(Clone, Debug)]
pub struct Circuit {
    cells: Vec<Location>,
    members: HashSet<Location>,
}

impl Circuit {
    /// Trace the loop through `start` on `graph`.
    ///
    /// The loop is walked once from each of the start's two connections.
    /// The two walks must retrace each other exactly, otherwise the start does not sit on exactly one simple loop.
    pub fn extract(graph: &ConnectivityGraph, start: Location) -> Result<Self> {
        let (first, second) = graph.neighbors(start).into_iter()
            .collect_tuple()
            .ok_or(MazeError::malformed(Malformation::StartDegree, start))?;

        let forward = walk(graph, start, first)?;
        let backward = walk(graph, start, second)?;

        if !forward.iter().eq(backward.iter().rev()) {
            return Err(MazeError::malformed(Malformation::NotSimple, start));
        }

        let cells = once(start).chain(forward).collect_vec();
        let members = cells.iter().copied().collect();
        debug!(length = cells.len(), %start, "extracted loop");

        Ok(Self { cells, members })
    }

    /// Number of cells on the loop, which is also the number of steps needed to walk all the way around.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for an extracted loop.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The loop's cells in walking order, starting at the start.
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }

    /// The start cell, first in walking order.
    pub fn start(&self) -> Location {
        self.cells[0]
    }

    /// Whether `location` is on the loop.
    pub fn contains(&self, location: Location) -> bool {
        self.members.contains(&location)
    }

    /// Consecutive pairs of cells, including the pair closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        self.cells.iter().copied().circular_tuple_windows::<(Location, Location)>()
    }

    /// Steps from the start to the point on the loop farthest from it.
    ///
    /// A simple loop of length `L` is farthest at `L / 2` in either direction.
    pub fn farthest_distance(&self) -> usize {
        self.len() / 2
    }

    /// The same quantity as [`Self::farthest_distance`], found by searching outward from the start over the loop's edges only.
    pub fn farthest_distance_bfs(&self) -> usize {
        let graph: UnGraphMap<Location, ()> = UnGraphMap::from_edges(self.edges());

        dijkstra(&graph, self.start(), None, |_| 1usize)
            .into_values()
            .max()
            .unwrap_or(0)
    }

    /// Work out which pipe the start is hiding, from the directions the loop leaves it in.
    pub fn start_shape(&self) -> Result<PipeShape> {
        let start = self.start();
        let ambiguous = MazeError::malformed(Malformation::AmbiguousStart, start);

        let (Some(&after), Some(&before)) = (self.cells.get(1), self.cells.last()) else {
            return Err(ambiguous);
        };

        let exits = Compass::direction_to(start, after).zip(Compass::direction_to(start, before));
        exits
            .and_then(|(a, b)| PipeShape::from_exits(a, b))
            .ok_or(ambiguous)
    }
}

/// Follow the pipe from `start` through `first` until it comes back to `start`.
///
/// Returns every cell visited on the way, excluding `start`.
pub(crate) fn walk(graph: &ConnectivityGraph, start: Location, first: Location) -> Result<Vec<Location>> {
    let mut path = Vec::new();
    let (mut previous, mut current) = (start, first);

    while current != start {
        // a simple loop cannot be longer than the graph it lives in
        if path.len() >= graph.graph.node_count() {
            return Err(MazeError::malformed(Malformation::NotSimple, current));
        }
        path.push(current);

        let next = graph.graph.neighbors(current)
            .filter(|neighbor| *neighbor != previous)
            .exactly_one()
            .map_err(|_| MazeError::malformed(Malformation::Branch, current))?;

        previous = current;
        current = next;
    }

    Ok(path)
}
