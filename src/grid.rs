use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use tracing::debug;

use crate::cell::Cell;
use crate::error::{MazeError, Result};
use crate::location::{Dimension, Location};

/// A parsed maze, indexed by [`Location`].
///
/// Rows shorter than the longest row leave their missing cells absent; an absent cell has no connections and is not scanned.
#[derive(Clone, Debug)]
pub struct Grid {
    // row-major; None where a short row ended early
    cells: Array2<Option<Cell>>,
    // width, height
    dims: (Dimension, Dimension),
    start: Location,
}

impl Grid {
    /// Parse one row per line using the symbols `.|-LJ7FS`.
    ///
    /// Fails on the first unrecognized character, or if there is not exactly one `S`.
    pub fn parse(text: &str) -> Result<Self> {
        let lines = text.lines().map(|line| line.chars().collect_vec()).collect_vec();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = Array2::from_elem((lines.len(), width), None);
        let mut start = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, symbol) in line.iter().enumerate() {
                let location = Location::from((y, x));
                let cell = Cell::from_symbol(*symbol)
                    .ok_or(MazeError::UnknownSymbol { symbol: *symbol, location })?;

                if cell == Cell::Start {
                    if let Some(first) = start {
                        return Err(MazeError::MultipleStarts { first, second: location });
                    }
                    start = Some(location);
                }

                cells[(y, x)] = Some(cell);
            }
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        // a start exists, so neither dimension is zero
        let dims = NonZero::new(width)
            .zip(NonZero::new(lines.len()))
            .ok_or(MazeError::MissingStart)?;

        debug!(width = dims.0.get(), height = dims.1.get(), %start, "parsed grid");

        Ok(Self { cells, dims, start })
    }

    /// `(width, height)` of the grid. Width is that of the longest row.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Where the `S` is.
    pub fn start(&self) -> Location {
        self.start
    }

    /// The cell at `location`, or [`None`] if there is no such cell.
    pub fn get(&self, location: Location) -> Option<Cell> {
        location.as_index()
            .and_then(|index| self.cells.get(index))
            .copied()
            .flatten()
    }

    /// Every present cell, grouped by row, top to bottom and left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (Location, Cell)> + '_> + '_ {
        self.cells.outer_iter()
            .enumerate()
            .map(|(y, row)| row.into_iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|cell| (Location::from((y, x)), cell))))
    }

    /// Every present cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        self.rows().flatten()
    }

    /// Draw each present cell with the character chosen by `draw`, one line per row.
    pub(crate) fn draw(&self, draw: impl Fn(Location, Cell) -> char) -> String {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.rows() {
            for (location, cell) in row {
                out.push(draw(location, cell));
            }
            out.push('\n');
        }

        out
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.draw(|_, cell| cell.symbol()))
    }
}
