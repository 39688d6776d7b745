//! `placer` — greedy placement of user-supplied word lists.
//!
//! Unlike the fill engine, the placer is partial: it may skip entries it
//! cannot fit, and it grows the black/white layout as it goes instead of
//! starting from a template. Answers are taken longest first; the first
//! goes at dead center, and every later answer is scored over all
//! positions that intersect an already-placed letter, the best position
//! winning. Several seeded attempts run and the best one (most words,
//! then most intersections, then most compact) is kept.

use std::collections::HashSet;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clue::{ClueEntry, PlacedEntry};
use crate::errors::CrosswordError;
use crate::grid::Direction;

/// An attempt's result is fatal when fewer than this many words land.
pub const DEFAULT_MIN_PLACED: usize = 30;

/// Retry floor when symmetry is enforced.
const SYMMETRY_RETRIES: usize = 30;

/// Empirical packing ratio: words placed ≈ ratio × size².
const PACKING_RATIO: f64 = 0.175;

/// Jitter ceiling on candidate scores.
const SCORE_JITTER: f64 = 0.1;

/// Placement run parameters.
#[derive(Debug, Clone)]
pub struct PlacerConfig {
    pub grid_size: usize,
    pub seed: u64,
    pub retries: usize,
    /// Enforce 180° rotational symmetry of the resulting layout.
    pub symmetry: bool,
    pub min_placed: usize,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        PlacerConfig {
            grid_size: 15,
            seed: 0,
            retries: 20,
            symmetry: false,
            min_placed: DEFAULT_MIN_PLACED,
        }
    }
}

/// Choose a grid size for a clue list when none was given: odd, at least
/// 15, sized so the expected packing fits the list.
pub fn derive_grid_size(entries: &[ClueEntry]) -> usize {
    if entries.is_empty() {
        return 15;
    }
    let raw = (entries.len() as f64 / PACKING_RATIO).sqrt();
    let mut size = (raw.round() as usize).max(15);
    if size % 2 == 0 {
        size += 1;
    }
    size
}

/// Run up to `config.retries` placement attempts and return the best.
///
/// # Errors
///
/// Returns [`CrosswordError::Placement`] when the best attempt placed
/// fewer than `config.min_placed` words.
pub fn place_entries(
    clues: &[ClueEntry],
    config: &PlacerConfig,
) -> Result<Vec<PlacedEntry>, CrosswordError> {
    let retries = if config.symmetry {
        config.retries.max(SYMMETRY_RETRIES)
    } else {
        config.retries
    };

    let mut best: Option<(Vec<PlacedEntry>, AttemptStats)> = None;
    for attempt in 0..retries {
        // Attempt-private RNG: caller seed plus attempt index.
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(attempt as u64));
        let (placed, stats) = single_attempt(clues, config.grid_size, &mut rng, config.symmetry);
        debug!(
            "placement attempt {attempt}: {} words, {} intersections",
            stats.placed, stats.intersections
        );
        if best.as_ref().is_none_or(|(_, b)| stats.better_than(b)) {
            best = Some((placed, stats));
        }
    }

    let Some((placed, stats)) = best else {
        return Err(CrosswordError::Placement { placed: 0, minimum: config.min_placed });
    };
    if placed.len() < config.min_placed {
        return Err(CrosswordError::Placement {
            placed: placed.len(),
            minimum: config.min_placed,
        });
    }
    info!(
        "placed {} of {} words ({} intersections, compactness {:.2})",
        placed.len(),
        clues.len(),
        stats.intersections,
        stats.compactness
    );
    Ok(placed)
}

/// How attempts compare: words placed, then total intersections, then
/// compactness.
#[derive(Debug, Clone, Copy)]
struct AttemptStats {
    placed: usize,
    intersections: usize,
    compactness: f64,
}

impl AttemptStats {
    fn better_than(&self, other: &AttemptStats) -> bool {
        if self.placed != other.placed {
            return self.placed > other.placed;
        }
        if self.intersections != other.intersections {
            return self.intersections > other.intersections;
        }
        self.compactness > other.compactness
    }
}

/// A viable position for one answer.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    row: usize,
    col: usize,
    direction: Direction,
    intersections: usize,
}

/// The letters written so far, plus cells pledged to the symmetric layout.
struct Board {
    size: usize,
    letters: Vec<Option<u8>>,
    reserved: HashSet<(usize, usize)>,
    // Bounding box of written cells, None while empty.
    bbox: Option<(usize, usize, usize, usize)>,
}

impl Board {
    fn new(size: usize) -> Board {
        Board { size, letters: vec![None; size * size], reserved: HashSet::new(), bbox: None }
    }

    fn get(&self, r: usize, c: usize) -> Option<u8> {
        self.letters[r * self.size + c]
    }

    fn bbox_area(&self) -> usize {
        match self.bbox {
            Some((min_r, max_r, min_c, max_c)) => (max_r - min_r + 1) * (max_c - min_c + 1),
            None => 0,
        }
    }

    /// Bounding-box area if cells covering `rows`/`cols` ranges joined.
    fn bbox_area_with(&self, min_r: usize, max_r: usize, min_c: usize, max_c: usize) -> usize {
        let (lo_r, hi_r, lo_c, hi_c) = match self.bbox {
            Some((a, b, c, d)) => (a.min(min_r), b.max(max_r), c.min(min_c), d.max(max_c)),
            None => (min_r, max_r, min_c, max_c),
        };
        (hi_r - lo_r + 1) * (hi_c - lo_c + 1)
    }
}

fn single_attempt(
    clues: &[ClueEntry],
    size: usize,
    rng: &mut StdRng,
    symmetry: bool,
) -> (Vec<PlacedEntry>, AttemptStats) {
    let mut board = Board::new(size);
    let mut placed: Vec<PlacedEntry> = Vec::new();
    let mut intersections_total = 0usize;

    // Longest first; ties alphabetical so attempts are reproducible.
    let mut order: Vec<&ClueEntry> = clues.iter().collect();
    order.sort_by(|a, b| {
        b.answer
            .len()
            .cmp(&a.answer.len())
            .then_with(|| a.answer.cmp(&b.answer))
    });

    for clue in order {
        let len = clue.answer.len();
        if placed.is_empty() {
            if len > size {
                continue;
            }
            // Dead center, across.
            let row = size / 2;
            let col = (size - len) / 2;
            commit(&mut board, &mut placed, clue, row, col, Direction::Across, symmetry);
            continue;
        }

        let mut best: Option<(f64, Candidate)> = None;
        for candidate in find_candidates(&clue.answer, &board, symmetry) {
            let score = score_candidate(&candidate, len, &board, rng);
            if best.is_none_or(|(s, _)| score > s) {
                best = Some((score, candidate));
            }
        }
        // No viable position: skip this entry (the placer is partial).
        if let Some((_, candidate)) = best {
            intersections_total += candidate.intersections;
            commit(
                &mut board,
                &mut placed,
                clue,
                candidate.row,
                candidate.col,
                candidate.direction,
                symmetry,
            );
        }
    }

    let white = board.letters.iter().filter(|l| l.is_some()).count();
    let area = board.bbox_area();
    let stats = AttemptStats {
        placed: placed.len(),
        intersections: intersections_total,
        compactness: if area == 0 { 0.0 } else { white as f64 / area as f64 },
    };
    (placed, stats)
}

/// Write an answer onto the board and record the placement. Under
/// symmetry, the covered cells' point reflections are reserved.
fn commit(
    board: &mut Board,
    placed: &mut Vec<PlacedEntry>,
    clue: &ClueEntry,
    row: usize,
    col: usize,
    direction: Direction,
    symmetry: bool,
) {
    let (dr, dc) = direction.deltas();
    let len = clue.answer.len();
    for (i, &b) in clue.answer.as_bytes().iter().enumerate() {
        let (r, c) = (row + dr * i, col + dc * i);
        board.letters[r * board.size + c] = Some(b);
        if symmetry {
            board.reserved.insert((board.size - 1 - r, board.size - 1 - c));
        }
    }
    let (end_r, end_c) = (row + dr * (len - 1), col + dc * (len - 1));
    board.bbox = Some(match board.bbox {
        Some((min_r, max_r, min_c, max_c)) => {
            (min_r.min(row), max_r.max(end_r), min_c.min(col), max_c.max(end_c))
        }
        None => (row, end_r, col, end_c),
    });
    placed.push(PlacedEntry {
        clue: clue.clue.clone(),
        answer: clue.answer.clone(),
        row,
        col,
        direction,
    });
}

/// Positions where `answer` overlaps at least one existing letter and
/// passes every validity rule.
fn find_candidates(answer: &str, board: &Board, symmetry: bool) -> Vec<Candidate> {
    let size = board.size;
    let len = answer.len();
    let bytes = answer.as_bytes();
    let mut candidates = Vec::new();
    let mut checked: HashSet<(usize, usize, Direction)> = HashSet::new();

    for direction in [Direction::Across, Direction::Down] {
        let (dr, dc) = direction.deltas();
        for r in 0..size {
            for c in 0..size {
                let Some(existing) = board.get(r, c) else { continue };
                for (i, &b) in bytes.iter().enumerate() {
                    if b != existing {
                        continue;
                    }
                    // Slide the answer so its i-th letter lands on (r, c).
                    let (Some(start_r), Some(start_c)) =
                        (r.checked_sub(dr * i), c.checked_sub(dc * i))
                    else {
                        continue;
                    };
                    if start_r + dr * (len - 1) >= size || start_c + dc * (len - 1) >= size {
                        continue;
                    }
                    if !checked.insert((start_r, start_c, direction)) {
                        continue;
                    }
                    if let Some(intersections) =
                        placement_intersections(bytes, start_r, start_c, direction, board, symmetry)
                    {
                        if intersections > 0 {
                            candidates.push(Candidate {
                                row: start_r,
                                col: start_c,
                                direction,
                                intersections,
                            });
                        }
                    }
                }
            }
        }
    }
    candidates
}

/// Validity check; returns the intersection count when the placement is
/// legal, `None` otherwise.
///
/// Rules: stay inside the grid; agree with every overlapped letter; the
/// cells along the axis immediately before and after the word must be
/// empty or edge (no accidental extension); newly written cells may have
/// no perpendicular letter neighbors (no accidental side-by-side words);
/// under symmetry, no covered cell may be reserved for the symmetric
/// layout.
fn placement_intersections(
    bytes: &[u8],
    row: usize,
    col: usize,
    direction: Direction,
    board: &Board,
    symmetry: bool,
) -> Option<usize> {
    let size = board.size;
    let len = bytes.len();
    let (dr, dc) = direction.deltas();

    // Cell before the start must be empty or edge.
    if row >= dr && col >= dc {
        let (br, bc) = (row - dr, col - dc);
        if board.get(br, bc).is_some() {
            return None;
        }
    }
    // Cell after the end must be empty or edge.
    let (ar, ac) = (row + dr * len, col + dc * len);
    if ar < size && ac < size && board.get(ar, ac).is_some() {
        return None;
    }

    // Perpendicular deltas.
    let (pr, pc) = match direction {
        Direction::Across => (1, 0),
        Direction::Down => (0, 1),
    };

    let mut intersections = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let (r, c) = (row + dr * i, col + dc * i);
        if symmetry && board.reserved.contains(&(r, c)) {
            return None;
        }
        match board.get(r, c) {
            Some(existing) => {
                if existing != b {
                    return None;
                }
                intersections += 1;
            }
            None => {
                // A new cell must not touch letters sideways.
                if r + pr < size && c + pc < size && board.get(r + pr, c + pc).is_some() {
                    return None;
                }
                if r >= pr && c >= pc && board.get(r - pr, c - pc).is_some() {
                    return None;
                }
            }
        }
    }
    Some(intersections)
}

/// Candidate score: 2·intersections + centrality − expansion + jitter.
///
/// Centrality is the negative normalized Manhattan distance from the
/// word's midpoint to the grid center; expansion is the normalized growth
/// of the bounding box; jitter breaks near-ties.
fn score_candidate(candidate: &Candidate, len: usize, board: &Board, rng: &mut StdRng) -> f64 {
    let size = board.size;
    let (dr, dc) = candidate.direction.deltas();

    let center = (size - 1) as f64 / 2.0;
    let mid_r = candidate.row as f64 + (dr * (len - 1)) as f64 / 2.0;
    let mid_c = candidate.col as f64 + (dc * (len - 1)) as f64 / 2.0;
    let centrality = -((mid_r - center).abs() + (mid_c - center).abs()) / size as f64;

    let end_r = candidate.row + dr * (len - 1);
    let end_c = candidate.col + dc * (len - 1);
    let grown = board.bbox_area_with(candidate.row, end_r, candidate.col, end_c);
    let expansion = grown.saturating_sub(board.bbox_area()) as f64 / (size * size) as f64;

    2.0 * candidate.intersections as f64 + centrality - expansion
        + rng.gen_range(0.0..SCORE_JITTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clues_of(answers: &[&str]) -> Vec<ClueEntry> {
        answers
            .iter()
            .enumerate()
            .map(|(i, answer)| ClueEntry {
                number: i as u32 + 1,
                clue: format!("clue for {answer}"),
                answer: (*answer).to_string(),
            })
            .collect()
    }

    #[test]
    fn test_derive_grid_size() {
        assert_eq!(derive_grid_size(&[]), 15);
        assert_eq!(derive_grid_size(&clues_of(&["CAT", "DOG"])), 15);
        let many: Vec<String> = (0..65).map(|i| format!("W{i:03}")).collect();
        let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
        assert_eq!(derive_grid_size(&clues_of(&many_refs)), 19);
    }

    #[test]
    fn test_first_word_lands_dead_center() {
        let clues = clues_of(&["OCEAN"]);
        let config = PlacerConfig { min_placed: 1, retries: 1, ..PlacerConfig::default() };
        let placed = place_entries(&clues, &config).unwrap();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].row, 7);
        assert_eq!(placed[0].col, 5);
        assert_eq!(placed[0].direction, Direction::Across);
    }

    #[test]
    fn test_places_overlapping_words() {
        let clues = clues_of(&["OCEAN", "CANOE", "TENT", "CAT", "NET", "TEN"]);
        let config = PlacerConfig { min_placed: 3, retries: 5, seed: 1, ..PlacerConfig::default() };
        let placed = place_entries(&clues, &config).unwrap();
        assert!(placed.len() >= 3, "only {} placed", placed.len());

        // Every later word must intersect the existing letters; rebuild the
        // grid to verify no conflicts were recorded.
        let grid = crate::numbering::build_grid(&placed, 15).unwrap();
        assert!(grid.white_count() > 0);
    }

    #[test]
    fn test_disjoint_letters_fail_minimum() {
        // After the first placement nothing else can intersect.
        let clues = clues_of(&["AAA", "BBB", "CCC"]);
        let config = PlacerConfig { seed: 1, retries: 2, ..PlacerConfig::default() };
        let err = place_entries(&clues, &config).unwrap_err();
        match err {
            CrosswordError::Placement { placed, minimum } => {
                assert_eq!(placed, 1);
                assert_eq!(minimum, DEFAULT_MIN_PLACED);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_symmetry_restricts_placement() {
        let clues = clues_of(&["OCEAN", "CANOE", "TENT", "CAT", "NET", "TEN"]);
        let open = PlacerConfig { min_placed: 1, retries: 5, seed: 1, ..PlacerConfig::default() };
        let symmetric = PlacerConfig { symmetry: true, ..open.clone() };

        let freely = place_entries(&clues, &open).unwrap();
        let constrained = place_entries(&clues, &symmetric).unwrap();
        // The centered first word reserves its own mirror cells, so the
        // symmetric attempt places strictly fewer words.
        assert!(constrained.len() < freely.len());
        assert_eq!(constrained.len(), 1);
    }

    #[test]
    fn test_attempts_are_deterministic() {
        let clues = clues_of(&["OCEAN", "CANOE", "TENT", "CAT", "NET", "TEN"]);
        let config = PlacerConfig { min_placed: 1, retries: 4, seed: 9, ..PlacerConfig::default() };
        let a = place_entries(&clues, &config).unwrap();
        let b = place_entries(&clues, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_accidental_adjacent_words() {
        let clues = clues_of(&["OCEAN", "CANOE", "TENT", "CAT", "NET", "TEN", "COT", "TOE"]);
        let config = PlacerConfig { min_placed: 1, retries: 5, seed: 3, ..PlacerConfig::default() };
        let placed = place_entries(&clues, &config).unwrap();
        let grid = crate::numbering::build_grid(&placed, 15).unwrap();

        // Every maximal white run of length >= 2 must be exactly one
        // placed answer (reading across or down).
        let answers: HashSet<&str> = placed.iter().map(|p| p.answer.as_str()).collect();
        let n = grid.size();
        for r in 0..n {
            let mut c = 0;
            while c < n {
                if !grid.is_white(r, c) {
                    c += 1;
                    continue;
                }
                let start = c;
                let mut word = String::new();
                while c < n && grid.is_white(r, c) {
                    word.push(grid.cell(r, c).letter.unwrap());
                    c += 1;
                }
                if c - start >= 2 {
                    assert!(answers.contains(word.as_str()), "stray across word {word}");
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
                let mut word = String::new();
                while r < n && grid.is_white(r, c) {
                    word.push(grid.cell(r, c).letter.unwrap());
                    r += 1;
                }
                if r - start >= 2 {
                    assert!(answers.contains(word.as_str()), "stray down word {word}");
                }
            }
        }
    }
}
