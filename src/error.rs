use thiserror::Error;

use crate::location::Location;

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, MazeError>;

/// Reasons a maze may fail to solve.
///
/// None of these are transient; the same input fails the same way every time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// A character outside `.|-LJ7FS` was found.
    #[error("unknown symbol {symbol:?} at {location}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Where it was found.
        location: Location,
    },

    /// No `S` was found.
    #[error("grid has no start marker")]
    MissingStart,

    /// More than one `S` was found; the first two are reported.
    #[error("grid has more than one start marker, at {first} and {second}")]
    MultipleStarts {
        /// The first start, in reading order.
        first: Location,
        /// The start found after it.
        second: Location,
    },

    /// The pipes do not form exactly one simple loop through the start.
    #[error("malformed maze{}: {reason}", fmt_location(.location))]
    MalformedMaze {
        /// What went wrong.
        reason: Malformation,
        /// The cell at which it was noticed, where there is one.
        location: Option<Location>,
    },
}

impl MazeError {
    pub(crate) fn malformed(reason: Malformation, location: Location) -> Self {
        Self::MalformedMaze { reason, location: Some(location) }
    }
}

fn fmt_location(location: &Option<Location>) -> String {
    match location {
        Some(location) => format!(" at {location}"),
        None => String::new(),
    }
}

/// The specific way in which a maze is malformed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Malformation {
    /// The start does not connect to exactly two pipes.
    #[error("start does not have exactly two connections")]
    StartDegree,
    /// A pipe on the loop leads nowhere, or to more than one place.
    #[error("branch encountered")]
    Branch,
    /// The two walks around the loop disagree.
    #[error("loop is not simple/unique")]
    NotSimple,
    /// The directions leaving the start match no pipe.
    #[error("start shape ambiguous")]
    AmbiguousStart,
    /// A run of loop was opened while another was still open.
    #[error("unexpected corner")]
    UnexpectedCorner,
    /// A run of loop was closed without being opened.
    #[error("closing corner without opening")]
    UnopenedCorner,
    /// A row ended with an odd number of crossings.
    #[error("row ends inside the loop")]
    RowEndsInside,
    /// A row ended partway along a run of loop.
    #[error("row ends with an unclosed corner")]
    RowEndsInCorner,
}
