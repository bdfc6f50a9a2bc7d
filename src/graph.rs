use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use tracing::debug;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::Location;
use crate::shape::Step;

/// Undirected connections between cells whose pipes open toward each other.
#[derive(Clone, Debug)]
pub struct ConnectivityGraph {
    pub(crate) graph: UnGraphMap<Location, ()>,
}

impl ConnectivityGraph {
    /// Connect every pair of adjacent cells which both open toward each other.
    ///
    /// A pipe end pointing at ground, off the grid, or at a pipe facing elsewhere is dropped.
    pub fn build(grid: &Grid) -> Self {
        let mut graph = UnGraphMap::new();

        for (location, cell) in grid.cells() {
            if cell != Cell::Ground {
                graph.add_node(location);
            }

            for direction in cell.candidate_exits() {
                let neighbor = direction.attempt_from(location);
                let answers = grid.get(neighbor)
                    .is_some_and(|other| other.candidate_exits().contains(&direction.invert()));

                if answers {
                    graph.add_edge(location, neighbor, ());
                }
            }
        }

        debug!(nodes = graph.node_count(), edges = graph.edge_count(), "built connectivity graph");

        Self { graph }
    }

    /// Cells connected to `location`. Empty if `location` is not a pipe.
    pub fn neighbors(&self, location: Location) -> Vec<Location> {
        self.graph.neighbors(location).collect_vec()
    }

    /// Number of cells connected to `location`.
    pub fn degree(&self, location: Location) -> usize {
        self.graph.neighbors(location).count()
    }

    /// Number of connections in the whole grid.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `a` and `b` are connected.
    pub fn connected(&self, a: Location, b: Location) -> bool {
        self.graph.contains_edge(a, b)
    }
}
