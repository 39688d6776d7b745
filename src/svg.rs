//! `svg` — standalone SVG rendering of a grid.
//!
//! Two variants of the same drawing: the puzzle (numbers only) and the
//! answer key (numbers plus letters). The downstream PDF renderer
//! consumes the same inputs (grid, clue lists, title) through its own
//! interface; these renderers exist for quick inspection and web use.

use std::path::Path;

use crate::errors::CrosswordError;
use crate::grid::{CellKind, Grid};

/// Render the grid as a standalone SVG document.
pub fn render_svg(grid: &Grid, show_answers: bool) -> String {
    let cell = default_cell_size(grid.size());
    let number_font = number_font_size(grid.size());
    let letter_font = cell * 0.45;
    let dim = cell * grid.size() as f64;

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" \
         width=\"{dim}\" height=\"{dim}\" viewBox=\"0 0 {dim} {dim}\">\n"
    ));

    for r in 0..grid.size() {
        for c in 0..grid.size() {
            let x = c as f64 * cell;
            let y = r as f64 * cell;
            let cell_ref = grid.cell(r, c);

            if cell_ref.kind == CellKind::Black {
                parts.push(format!(
                    "  <rect x=\"{x}\" y=\"{y}\" width=\"{cell}\" height=\"{cell}\" fill=\"black\"/>\n"
                ));
                continue;
            }

            parts.push(format!(
                "  <rect x=\"{x}\" y=\"{y}\" width=\"{cell}\" height=\"{cell}\" \
                 fill=\"white\" stroke=\"black\" stroke-width=\"0.5\"/>\n"
            ));

            if let Some(number) = cell_ref.number {
                let tx = x + 1.5;
                let ty = y + number_font + 1.0;
                parts.push(format!(
                    "  <text x=\"{tx}\" y=\"{ty}\" \
                     font-family=\"Helvetica, Arial, sans-serif\" font-weight=\"bold\" \
                     font-size=\"{number_font}\" fill=\"black\">{number}</text>\n"
                ));
            }

            if show_answers {
                if let Some(letter) = cell_ref.letter {
                    let cx = x + cell * 0.55;
                    let cy = y + cell * 0.58;
                    parts.push(format!(
                        "  <text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" \
                         dominant-baseline=\"central\" \
                         font-family=\"Helvetica, Arial, sans-serif\" \
                         font-size=\"{letter_font}\" fill=\"black\">{letter}</text>\n"
                    ));
                }
            }
        }
    }

    parts.push(format!(
        "  <rect x=\"0\" y=\"0\" width=\"{dim}\" height=\"{dim}\" \
         fill=\"none\" stroke=\"black\" stroke-width=\"1.5\"/>\n"
    ));
    parts.push("</svg>\n".to_string());
    parts.concat()
}

/// Write the puzzle grid (no answers) to `path`.
///
/// # Errors
///
/// Returns [`CrosswordError::Io`] when the file cannot be written.
pub fn write_puzzle_svg<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), CrosswordError> {
    std::fs::write(path, render_svg(grid, false))?;
    Ok(())
}

/// Write the answer grid (with letters) to `path`.
///
/// # Errors
///
/// Returns [`CrosswordError::Io`] when the file cannot be written.
pub fn write_answer_svg<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), CrosswordError> {
    std::fs::write(path, render_svg(grid, true))?;
    Ok(())
}

fn default_cell_size(grid_size: usize) -> f64 {
    if grid_size <= 15 {
        24.0
    } else if grid_size <= 17 {
        21.0
    } else {
        17.0
    }
}

fn number_font_size(grid_size: usize) -> f64 {
    if grid_size <= 13 {
        8.5
    } else if grid_size <= 15 {
        8.0
    } else if grid_size <= 17 {
        7.0
    } else {
        6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::PlacedEntry;
    use crate::grid::Direction;
    use crate::numbering::{build_grid, number_grid};

    fn sample_grid() -> Grid {
        let placed = vec![
            PlacedEntry {
                clue: "Feline pet".to_string(),
                answer: "CAT".to_string(),
                row: 0,
                col: 0,
                direction: Direction::Across,
            },
            PlacedEntry {
                clue: "Garage occupant".to_string(),
                answer: "CAR".to_string(),
                row: 0,
                col: 0,
                direction: Direction::Down,
            },
        ];
        let mut grid = build_grid(&placed, 3).unwrap();
        number_grid(&mut grid);
        grid
    }

    #[test]
    fn test_puzzle_svg_hides_letters() {
        let svg = render_svg(&sample_grid(), false);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(">1</text>"));
        assert!(!svg.contains(">C</text>"));
    }

    #[test]
    fn test_answer_svg_shows_letters() {
        let svg = render_svg(&sample_grid(), true);
        assert!(svg.contains(">C</text>"));
        assert!(svg.contains(">T</text>"));
    }

    #[test]
    fn test_black_cells_render_filled() {
        let svg = render_svg(&sample_grid(), false);
        // 3x3 grid with 5 white cells leaves 4 black rects.
        let black = svg.matches("fill=\"black\"/>").count();
        assert_eq!(black, 4);
    }
}
