#![warn(missing_docs)]

//! # `pipemaze`
//!
//! Solves the pipe maze: a grid of pipe segments in which exactly one closed loop runs through a start cell marked `S`.
//! Parse the text into a [`Maze`] with [`Maze::parse`], then call [`solve()`](Maze::solve) to get a [`Solution`], or do both at once with [`solve`].
//!
//! The grid uses `|` `-` `L` `J` `7` `F` for pipes, `.` for ground and `S` for the start, whose own pipe is hidden and worked out from the loop.
//!
//! # Internals
//! A high level overview is as follows:
//!
//! 1. Express the grid as an undirected graph G whose vertices are cells.
//! Two adjacent cells share an edge only if each opens toward the other; the start is assumed to open every way.
//! Pipe ends pointing at ground or at a pipe facing elsewhere are dropped here, so they cannot fake a connection.
//! 2. The start must now have exactly two edges. Walk away from it along each, always leaving a cell by the edge not just arrived on, until back at the start.
//! Every cell on the way must have exactly two edges, and the two walks must be each other's reverse.
//! The farthest point on a simple loop of length L is L / 2 steps away.
//! 3. Scan each row from left to right, counting crossings of the loop.
//! A `|` is a crossing. A horizontal run `F-..-J` or `L-..-7` enters and leaves on opposite sides and is one crossing;
//! `F-..-7` and `L-..-J` double back and are none.
//! A cell off the loop with an odd count so far is enclosed.

pub use cell::Cell;
pub use circuit::Circuit;
pub use error::{Malformation, MazeError, Result};
pub use graph::ConnectivityGraph;
pub use grid::Grid;
pub use interior::{classify, ScanState};
pub use location::Location;
pub use maze::{Maze, Solution};
pub use shape::{Compass, Neighbors, PipeShape, Step};

pub(crate) mod cell;
pub(crate) mod circuit;
pub(crate) mod error;
pub(crate) mod graph;
pub(crate) mod grid;
pub(crate) mod interior;
pub mod location;
pub(crate) mod maze;
pub mod shape;
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;

/// Parse and solve the maze in `text` in one go.
pub fn solve(text: &str) -> Result<Solution> {
    Maze::parse(text)?.solve()
}
