//! `numbering` — grid materialization and clue numbering.
//!
//! After placement or fill, letters are written into a [`Grid`], then a
//! single row-major scan assigns sequential numbers to every cell that
//! starts an across or a down word. The across/down clue lists pair each
//! placed entry with its grid-assigned number.

use log::warn;

use crate::clue::{NumberedClue, PlacedEntry};
use crate::errors::CrosswordError;
use crate::grid::{CellKind, Direction, Grid};

/// Create a grid of the given size and write every placed entry's letters
/// into it, turning the covered cells white.
///
/// # Errors
///
/// Returns [`CrosswordError::Input`] when an entry runs off the grid or
/// two entries disagree about a cell's letter.
pub fn build_grid(placed: &[PlacedEntry], size: usize) -> Result<Grid, CrosswordError> {
    let mut grid = Grid::new(size);

    for entry in placed {
        let (dr, dc) = entry.direction.deltas();
        for (i, ch) in entry.answer.chars().enumerate() {
            let r = entry.row + dr * i;
            let c = entry.col + dc * i;
            if r >= size || c >= size {
                return Err(CrosswordError::Input(format!(
                    "'{}' runs off the {size}x{size} grid",
                    entry.answer
                )));
            }
            let cell = grid.cell_mut(r, c);
            cell.kind = CellKind::White;
            if let Some(existing) = cell.letter {
                if existing != ch {
                    return Err(CrosswordError::Input(format!(
                        "letter conflict at ({r},{c}): existing '{existing}' vs '{ch}'"
                    )));
                }
            }
            cell.letter = Some(ch);
        }
    }

    warn_on_short_runs(&grid);
    Ok(grid)
}

/// User-supplied placements may leave 2-cell white runs; that is allowed
/// but worth flagging.
fn warn_on_short_runs(grid: &Grid) {
    let n = grid.size();
    let mut shorts = 0usize;
    for r in 0..n {
        let mut c = 0;
        while c < n {
            if !grid.is_white(r, c) {
                c += 1;
                continue;
            }
            let start = c;
            while c < n && grid.is_white(r, c) {
                c += 1;
            }
            if c - start == 2 {
                shorts += 1;
            }
        }
    }
    for c in 0..n {
        let mut r = 0;
        while r < n {
            if !grid.is_white(r, c) {
                r += 1;
                continue;
            }
            let start = r;
            while r < n && grid.is_white(r, c) {
                r += 1;
            }
            if r - start == 2 {
                shorts += 1;
            }
        }
    }
    if shorts > 0 {
        warn!("grid contains {shorts} two-letter run(s)");
    }
}

/// Scan left-to-right, top-to-bottom and assign sequential numbers
/// (starting at 1) to every white cell that starts an across or a down
/// word.
pub fn number_grid(grid: &mut Grid) {
    let mut counter = 1u32;
    for r in 0..grid.size() {
        for c in 0..grid.size() {
            if grid.cell(r, c).kind != CellKind::White {
                continue;
            }
            if starts_across(grid, r, c) || starts_down(grid, r, c) {
                grid.cell_mut(r, c).number = Some(counter);
                counter += 1;
            }
        }
    }
}

/// Left neighbor is black or edge AND right neighbor is white.
fn starts_across(grid: &Grid, r: usize, c: usize) -> bool {
    let left_blocked = c == 0 || !grid.is_white(r, c - 1);
    let right_white = c + 1 < grid.size() && grid.is_white(r, c + 1);
    left_blocked && right_white
}

/// Top neighbor is black or edge AND bottom neighbor is white.
fn starts_down(grid: &Grid, r: usize, c: usize) -> bool {
    let top_blocked = r == 0 || !grid.is_white(r - 1, c);
    let bottom_white = r + 1 < grid.size() && grid.is_white(r + 1, c);
    top_blocked && bottom_white
}

/// Pair each placed entry with its grid-assigned number and split into
/// across/down lists sorted by number ascending.
pub fn build_clue_lists(
    grid: &Grid,
    placed: &[PlacedEntry],
) -> (Vec<NumberedClue>, Vec<NumberedClue>) {
    let mut across: Vec<NumberedClue> = Vec::new();
    let mut down: Vec<NumberedClue> = Vec::new();

    for entry in placed {
        let Some(number) = grid.cell(entry.row, entry.col).number else {
            warn!("placed entry '{}' has no grid number", entry.answer);
            continue;
        };
        let clue = NumberedClue {
            number,
            clue: entry.clue.clone(),
            answer: entry.answer.clone(),
            direction: entry.direction,
        };
        match entry.direction {
            Direction::Across => across.push(clue),
            Direction::Down => down.push(clue),
        }
    }

    across.sort_by_key(|c| c.number);
    down.sort_by_key(|c| c.number);
    (across, down)
}
