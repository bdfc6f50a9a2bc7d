//! Bindings for calling the solver from JavaScript.

use std::num::TryFromIntError;

use wasm_bindgen::prelude::*;

use crate::Solution;

/// Solve the maze in `text`, returning `[farthestDistance, interiorCount]`.
///
/// Throws an `Error` carrying the reason if the maze is malformed, or a `RangeError` if an answer does not fit in 32 bits.
#[wasm_bindgen(js_name = solvePipeMaze)]
pub fn solve_pipe_maze(text: &str) -> Result<Vec<u32>, JsValue> {
    let solution = crate::solve(text)
        .map_err(|err| JsValue::from(js_sys::Error::new(&err.to_string())))?;

    answers(&solution)
        .map_err(|err| JsValue::from(js_sys::RangeError::new(&err.to_string())))
}

pub(crate) fn answers(solution: &Solution) -> Result<Vec<u32>, TryFromIntError> {
    [solution.farthest_distance, solution.interior_count]
        .into_iter()
        .map(u32::try_from)
        .collect()
}
