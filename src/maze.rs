use std::collections::HashSet;

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::Result;
use crate::graph::ConnectivityGraph;
use crate::grid::Grid;
use crate::interior::classify;
use crate::location::Location;
use crate::shape::PipeShape;

/// A parsed maze together with the connections between its pipes.
///
/// Build one with [`Maze::parse`], then call [`solve()`](Maze::solve).
#[derive(Clone, Debug)]
pub struct Maze {
    pub(crate) grid: Grid,
    pub(crate) graph: ConnectivityGraph,
}

/// Everything learned about a maze by solving it.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Steps along the loop from the start to the farthest point on it.
    pub farthest_distance: usize,
    /// Number of cells enclosed by the loop.
    pub interior_count: usize,
    /// The pipe hidden under the start marker.
    pub start_shape: PipeShape,
    /// The loop itself.
    pub circuit: Circuit,
    /// The enclosed cells.
    pub interior: HashSet<Location>,
}

impl Maze {
    /// Parse `text` and connect its pipes.
    pub fn parse(text: &str) -> Result<Self> {
        let grid = Grid::parse(text)?;
        let graph = ConnectivityGraph::build(&grid);

        Ok(Self { grid, graph })
    }

    /// The parsed cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The connections between pipes.
    pub fn graph(&self) -> &ConnectivityGraph {
        &self.graph
    }

    /// Trace the loop through the start and classify every other cell as enclosed by it or not.
    ///
    /// Fails as soon as any part of the maze turns out not to be a single simple loop.
    pub fn solve(&self) -> Result<Solution> {
        let circuit = Circuit::extract(&self.graph, self.grid.start())?;
        let start_shape = circuit.start_shape()?;
        let interior = classify(&self.grid, &circuit, start_shape)?;

        let solution = Solution {
            farthest_distance: circuit.farthest_distance(),
            interior_count: interior.len(),
            start_shape,
            circuit,
            interior,
        };
        debug!(
            farthest = solution.farthest_distance,
            interior = solution.interior_count,
            start_shape = ?solution.start_shape,
            "solved maze"
        );

        Ok(solution)
    }
}

impl Solution {
    /// Redraw `grid` showing only the loop, with the start drawn as its real pipe.
    ///
    /// Enclosed cells are drawn `I` and all other cells off the loop `O`.
    pub fn render(&self, grid: &Grid) -> String {
        grid.draw(|location, cell| {
            if location == self.circuit.start() {
                self.start_shape.symbol()
            } else if self.circuit.contains(location) {
                cell.symbol()
            } else if self.interior.contains(&location) {
                'I'
            } else {
                'O'
            }
        })
    }
}
