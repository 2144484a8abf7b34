//! Parsing many cells at once.
//!
//! Cells are independent, so the parallel driver simply maps
//! [`parse_params_with`] over them with rayon. Output order always matches
//! input order.

use crate::parser::{ParseOptions, ParseResult, parse_params_with};
use rayon::prelude::*;

/// Parse cells one after another with default options
pub fn parse_cells<S: AsRef<str>>(cells: &[S]) -> Vec<ParseResult> {
    parse_cells_with(cells, &ParseOptions::default())
}

pub fn parse_cells_with<S: AsRef<str>>(cells: &[S], options: &ParseOptions<'_>) -> Vec<ParseResult> {
    cells
        .iter()
        .map(|cell| parse_params_with(cell.as_ref(), options))
        .collect()
}

/// Parse cells in parallel with default options
pub fn par_parse_cells<S: AsRef<str> + Sync>(cells: &[S]) -> Vec<ParseResult> {
    par_parse_cells_with(cells, &ParseOptions::default())
}

pub fn par_parse_cells_with<S: AsRef<str> + Sync>(
    cells: &[S],
    options: &ParseOptions<'_>,
) -> Vec<ParseResult> {
    let results: Vec<ParseResult> = cells
        .par_iter()
        .map(|cell| parse_params_with(cell.as_ref(), options))
        .collect();

    let failed = results.iter().filter(|r| !r.ok()).count();
    if failed > 0 {
        tracing::debug!(cells = cells.len(), failed, "batch parsed with errors");
    }
    results
}
