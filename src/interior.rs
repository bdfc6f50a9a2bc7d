use std::collections::HashSet;

use tracing::{debug, trace};

use crate::cell::Cell;
use crate::circuit::Circuit;
use crate::error::{Malformation, MazeError, Result};
use crate::grid::Grid;
use crate::location::Location;
use crate::shape::{Compass, PipeShape};

/// Crossing state for a left-to-right scan over a single row.
///
/// Scanning the row's cells in order, a cell not on the loop is enclosed exactly when `inside` is set as it is reached.
/// A fresh state is used for every row; nothing carries over from one row to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Whether the scan has crossed the loop an odd number of times.
    pub inside: bool,
    /// While inside a horizontal run of loop, the vertical side the run was entered from.
    ///
    /// `F` opens a run attached to the [`South`](Compass::South), `L` one attached to the [`North`](Compass::North).
    pub pending: Option<Compass>,
}

impl ScanState {
    /// Advance past a loop cell with the given `shape`.
    ///
    /// A run which leaves on the opposite vertical side to the one it entered on crosses the loop; one which doubles back does not.
    pub fn visit(&mut self, location: Location, shape: PipeShape) -> Result<()> {
        match shape {
            PipeShape::NorthSouth => self.inside = !self.inside,
            PipeShape::EastWest => {}
            PipeShape::SouthEast | PipeShape::NorthEast => {
                if self.pending.is_some() {
                    return Err(MazeError::malformed(Malformation::UnexpectedCorner, location));
                }
                self.pending = Some(vertical_side(shape));
            }
            PipeShape::NorthWest | PipeShape::SouthWest => {
                let opened = self.pending.take()
                    .ok_or(MazeError::malformed(Malformation::UnopenedCorner, location))?;
                if opened != vertical_side(shape) {
                    self.inside = !self.inside;
                }
            }
        }

        Ok(())
    }

    /// Check that a row which ended at `location` left the loop closed behind it.
    pub fn finish(&self, location: Location) -> Result<()> {
        if self.pending.is_some() {
            return Err(MazeError::malformed(Malformation::RowEndsInCorner, location));
        }
        if self.inside {
            return Err(MazeError::malformed(Malformation::RowEndsInside, location));
        }

        Ok(())
    }
}

// only meaningful for corners
fn vertical_side(shape: PipeShape) -> Compass {
    if shape.connects(Compass::North) { Compass::North } else { Compass::South }
}

/// Find every cell enclosed by `circuit`, scanning `grid` one row at a time.
///
/// Cells off the loop never affect the scan, whatever they are drawn as.
/// The start is treated as `start_shape`.
pub fn classify(grid: &Grid, circuit: &Circuit, start_shape: PipeShape) -> Result<HashSet<Location>> {
    let mut interior = HashSet::new();

    for (y, row) in grid.rows().enumerate() {
        let mut state = ScanState::default();
        let mut last = None;
        let mut enclosed = 0;

        for (location, cell) in row {
            last = Some(location);

            if !circuit.contains(location) {
                if state.inside {
                    interior.insert(location);
                    enclosed += 1;
                }
                continue;
            }

            let shape = match cell {
                _ if location == circuit.start() => start_shape,
                Cell::Pipe(shape) => shape,
                // only pipes and the start are ever connected
                _ => return Err(MazeError::malformed(Malformation::NotSimple, location)),
            };
            state.visit(location, shape)?;
        }

        if let Some(last) = last {
            state.finish(last)?;
        }
        trace!(row = y + 1, enclosed, "scanned row");
    }

    debug!(interior = interior.len(), "classified grid");

    Ok(interior)
}
