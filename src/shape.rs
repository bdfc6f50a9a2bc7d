//! Directions and the pipe segments built from them.

use std::hash::Hash;

use strum::VariantArray;

use crate::location::Location;

/// A direction in which one cell can connect to another.
///
/// [`Compass`] is the only built-in implementation.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result is not checked against any grid; it may name a cell which does not exist.
    fn attempt_from(&self, location: Location) -> Location;
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
}

/// The four directions a pipe may open toward on a square grid.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Compass {
    /// Up, toward row 1.
    North,
    /// Down.
    South,
    /// Right.
    East,
    /// Left, toward column 1.
    West,
}

impl Step for Compass {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((0, -1)),
            Self::South => location.offset_by((0, 1)),
            Self::East => location.offset_by((1, 0)),
            Self::West => location.offset_by((-1, 0)),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// Lookups derived from [`Step`] alone, implemented once for every step type.
pub trait Neighbors: Step {
    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Step::attempt_from) until one works.
    ///
    /// Returns [`None`] unless the two locations are adjacent.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
}

impl<Sh> Neighbors for Sh
where
    Sh: Step,
{
    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}

/// The six pipe segments, each joining exactly two [`Compass`] directions.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum PipeShape {
    /// `|`
    NorthSouth,
    /// `-`
    EastWest,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
}

impl PipeShape {
    /// The two directions this segment opens toward.
    pub fn exits(&self) -> &'static [Compass] {
        match self {
            Self::NorthSouth => &[Compass::North, Compass::South],
            Self::EastWest => &[Compass::East, Compass::West],
            Self::NorthEast => &[Compass::North, Compass::East],
            Self::NorthWest => &[Compass::North, Compass::West],
            Self::SouthWest => &[Compass::South, Compass::West],
            Self::SouthEast => &[Compass::South, Compass::East],
        }
    }

    /// Whether this segment opens toward `direction`.
    pub fn connects(&self, direction: Compass) -> bool {
        self.exits().contains(&direction)
    }

    /// Find the segment joining `a` and `b`, in either order.
    ///
    /// Returns [`None`] if `a == b`, since no segment opens twice toward the same side.
    pub fn from_exits(a: Compass, b: Compass) -> Option<Self> {
        Self::VARIANTS.iter()
            .find(|shape| a != b && shape.connects(a) && shape.connects(b))
            .copied()
    }

    /// The character this segment is drawn with.
    pub fn symbol(&self) -> char {
        match self {
            Self::NorthSouth => '|',
            Self::EastWest => '-',
            Self::NorthEast => 'L',
            Self::NorthWest => 'J',
            Self::SouthWest => '7',
            Self::SouthEast => 'F',
        }
    }

    /// The segment drawn as `symbol`, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::VARIANTS.iter().find(|shape| shape.symbol() == symbol).copied()
    }
}
