//! Cell positions.

use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// One component of a [`Location`].
pub type Coord = usize;
/// A grid width or height, which is never zero.
pub type Dimension = NonZero<Coord>;

/// A cell position on a [`Grid`](crate::Grid), stored as `(column, row)`.
///
/// Both components are 1-based, so the top-left cell is `Location(1, 1)`.
/// Column or row 0 never names a cell; stepping off the top or left edge lands there (or wraps) and simply finds nothing.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The `(row, column)` index of this location in a 0-based [`ndarray::Array2`], if it has one.
    pub(crate) fn as_index(&self) -> Option<(Ix, Ix)> {
        Some((self.1.checked_sub(1)?, self.0.checked_sub(1)?))
    }

    /// Move by `(columns, rows)`.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    // array index order is row, column
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1 + 1, value.0 + 1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
