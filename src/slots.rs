//! `slots` — word-slot extraction and the crossing graph.
//!
//! A slot is a maximal run of at least two consecutive white cells in one
//! row (across) or column (down). Every white cell belongs to at most one
//! across and one down slot; where an across and a down slot share a cell
//! a [`Crossing`] records the offsets of that cell within both slots. The
//! graph holds non-owning coordinates into its template and is rebuilt
//! per attempt.

use smallvec::SmallVec;

use crate::grid::Direction;
use crate::template::Template;

/// Index into [`SlotGraph::slots`].
pub type SlotId = usize;

/// A maximal white run in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
    pub len: usize,
}

impl Slot {
    /// Coordinate of the cell at `offset` along the slot.
    pub fn cell(&self, offset: usize) -> (usize, usize) {
        let (dr, dc) = self.direction.deltas();
        (self.row + dr * offset, self.col + dc * offset)
    }

    /// All covered cells, in offset order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len).map(|offset| self.cell(offset))
    }
}

/// One shared cell between an across and a down slot, seen from one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    pub other: SlotId,
    pub my_offset: usize,
    pub other_offset: usize,
}

/// All slots of a template plus per-slot crossing adjacency.
#[derive(Debug, Clone)]
pub struct SlotGraph {
    pub slots: Vec<Slot>,
    /// Indexed by [`SlotId`]; each list is ordered by `my_offset`.
    pub crossings: Vec<SmallVec<[Crossing; 8]>>,
}

impl SlotGraph {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of crossings of one slot.
    pub fn crossing_count(&self, id: SlotId) -> usize {
        self.crossings[id].len()
    }
}

/// Enumerate the slots of a template and record their crossings.
///
/// Scans row-major for across slots, then column-major for down slots, so
/// slot ids are stable for a given template.
pub fn extract_slots(template: &Template) -> SlotGraph {
    let n = template.size();
    let mut slots: Vec<Slot> = Vec::new();

    for r in 0..n {
        let mut c = 0;
        while c < n {
            if template.is_black(r, c) {
                c += 1;
                continue;
            }
            let start = c;
            while c < n && !template.is_black(r, c) {
                c += 1;
            }
            if c - start >= 2 {
                let id = slots.len();
                slots.push(Slot { id, direction: Direction::Across, row: r, col: start, len: c - start });
            }
        }
    }
    for c in 0..n {
        let mut r = 0;
        while r < n {
            if template.is_black(r, c) {
                r += 1;
                continue;
            }
            let start = r;
            while r < n && !template.is_black(r, c) {
                r += 1;
            }
            if r - start >= 2 {
                let id = slots.len();
                slots.push(Slot { id, direction: Direction::Down, row: start, col: c, len: r - start });
            }
        }
    }

    // Per-cell slot membership, one map per direction.
    let mut across_at: Vec<Option<(SlotId, usize)>> = vec![None; n * n];
    let mut down_at: Vec<Option<(SlotId, usize)>> = vec![None; n * n];
    for slot in &slots {
        let map = match slot.direction {
            Direction::Across => &mut across_at,
            Direction::Down => &mut down_at,
        };
        for (offset, (r, c)) in slot.cells().enumerate() {
            map[r * n + c] = Some((slot.id, offset));
        }
    }

    // Walking each slot's cells in order yields adjacency sorted by
    // my_offset for free.
    let mut crossings: Vec<SmallVec<[Crossing; 8]>> = vec![SmallVec::new(); slots.len()];
    for slot in &slots {
        let other_map = match slot.direction {
            Direction::Across => &down_at,
            Direction::Down => &across_at,
        };
        for (my_offset, (r, c)) in slot.cells().enumerate() {
            if let Some((other, other_offset)) = other_map[r * n + c] {
                crossings[slot.id].push(Crossing { other, my_offset, other_offset });
            }
        }
    }

    SlotGraph { slots, crossings }
}
