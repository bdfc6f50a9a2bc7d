use std::fmt::{Display, Formatter};

use strum::VariantArray;

use crate::shape::{Compass, PipeShape};

/// One character of a maze.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    /// `.`, connecting nowhere.
    #[default]
    Ground,
    /// One of the six pipe segments.
    Pipe(PipeShape),
    /// The animal's starting point; its true shape is only known once the loop is found.
    Start,
}

impl Cell {
    /// Directions this cell claims to connect toward.
    ///
    /// The start claims every direction; claims are pruned by [`ConnectivityGraph`](crate::ConnectivityGraph).
    pub fn candidate_exits(&self) -> &'static [Compass] {
        match self {
            Cell::Ground => &[],
            Cell::Pipe(shape) => shape.exits(),
            Cell::Start => Compass::VARIANTS,
        }
    }

    /// The character this cell is written as.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Ground => '.',
            Cell::Pipe(shape) => shape.symbol(),
            Cell::Start => 'S',
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Ground),
            'S' => Some(Cell::Start),
            other => PipeShape::from_symbol(other).map(Cell::Pipe),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
