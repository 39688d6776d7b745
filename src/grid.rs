//! `grid` — the cell/grid model shared by every construction stage.
//!
//! A [`Grid`] is a square N×N array of [`Cell`]s stored row-major and
//! 0-indexed. Black cells never carry a letter or a number; the numbering
//! pass is the only writer of `number`, and the fill/placement stages are
//! the only writers of `letter`.

use std::fmt;

use crate::template::Template;

/// Whether a cell is a block or an answer square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Black,
    White,
}

/// Direction of a word slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// (row, col) step taken when walking a slot of this direction.
    pub(crate) fn deltas(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// A single square of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Filled-in answer letter (always uppercase A–Z). `None` on black
    /// cells and on white cells that have not been filled yet.
    pub letter: Option<char>,
    /// Clue number assigned by the numbering pass, if this cell starts a
    /// word in either direction.
    pub number: Option<u32>,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { kind: CellKind::Black, letter: None, number: None }
    }
}

/// A square crossword grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-black grid of the given size. Stages that build a
    /// grid turn cells white as they write letters into them.
    pub fn new(size: usize) -> Grid {
        Grid { size, cells: vec![Cell::default(); size * size] }
    }

    /// Create an unfilled grid whose black/white layout copies `template`.
    pub fn from_template(template: &Template) -> Grid {
        let size = template.size();
        let mut grid = Grid::new(size);
        for r in 0..size {
            for c in 0..size {
                if !template.is_black(r, c) {
                    grid.cell_mut(r, c).kind = CellKind::White;
                }
            }
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, r: usize, c: usize) -> &Cell {
        &self.cells[r * self.size + c]
    }

    pub fn cell_mut(&mut self, r: usize, c: usize) -> &mut Cell {
        &mut self.cells[r * self.size + c]
    }

    pub fn is_white(&self, r: usize, c: usize) -> bool {
        self.cell(r, c).kind == CellKind::White
    }

    pub fn white_count(&self) -> usize {
        self.cells.iter().filter(|c| c.kind == CellKind::White).count()
    }

    /// Fraction of cells that are white, for diagnostics.
    pub fn density(&self) -> f64 {
        self.white_count() as f64 / (self.size * self.size) as f64
    }
}

impl fmt::Display for Grid {
    /// Render as one text row per grid row: `#` for black, the letter for
    /// filled white cells, `.` for unfilled white cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let cell = self.cell(r, c);
                let ch = match cell.kind {
                    CellKind::Black => '#',
                    CellKind::White => cell.letter.unwrap_or('.'),
                };
                write!(f, "{ch}")?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_black() {
        let grid = Grid::new(3);
        assert_eq!(grid.white_count(), 0);
        assert_eq!(grid.size(), 3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(grid.cell(r, c).kind, CellKind::Black);
                assert_eq!(grid.cell(r, c).letter, None);
                assert_eq!(grid.cell(r, c).number, None);
            }
        }
    }

    #[test]
    fn test_from_template_copies_layout() {
        let template = Template::parse(&["...", "...", "..."]).unwrap();
        let grid = Grid::from_template(&template);
        assert_eq!(grid.white_count(), 9);
        assert!(grid.is_white(1, 1));
    }

    #[test]
    fn test_display_render() {
        let template = Template::parse(&["...", "...", "..."]).unwrap();
        let mut grid = Grid::from_template(&template);
        grid.cell_mut(0, 0).letter = Some('A');
        let rendered = grid.to_string();
        assert_eq!(rendered, "A..\n...\n...");
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Across.deltas(), (0, 1));
        assert_eq!(Direction::Down.deltas(), (1, 0));
    }
}
