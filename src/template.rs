//! `template` — symmetric black/white grid skeletons.
//!
//! A valid template satisfies three structural invariants: the white cells
//! form a single 4-connected region, every maximal white run (across or
//! down) is at least [`MIN_SLOT_LEN`] cells, and generated templates are
//! 180°-rotationally symmetric. Generation is randomized construction
//! with repair: first break every run longer than the slot-length cap,
//! then add symmetric black pairs until the black-cell budget is met,
//! validating incrementally so only the affected rows and columns are
//! rescanned per placement.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::errors::CrosswordError;

/// Minimum length of any white run in a valid template.
pub const MIN_SLOT_LEN: usize = 3;

/// Longest slot the generator aims for; long runs are broken up so the
/// fill stage faces realistic slot sizes.
const MAX_SLOT_LEN: usize = 8;

/// Fraction of cells turned black before construction stops.
const TARGET_BLACK_FRACTION: f64 = 0.18;

/// Construction attempts per `generate` invocation.
const CONSTRUCTION_ATTEMPTS: usize = 50;

/// Upper bound on long-run-breaking rounds within one attempt.
const BREAK_ROUNDS: usize = 200;

/// How many shuffled break candidates to try per round.
const BREAK_CANDIDATE_CAP: usize = 30;

/// A black/white grid skeleton, before any letters are placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    size: usize,
    // Row-major; true = black.
    black: Vec<bool>,
}

/// Supplier of candidate templates for the retry controller. A seam so
/// stock-skeleton libraries (and tests) can stand in for the randomized
/// generator.
pub trait TemplateSource {
    /// Produce one validated template, or `None` when this invocation's
    /// budget is exhausted.
    fn next_template(&mut self, rng: &mut StdRng) -> Option<Template>;
}

/// The default source: randomized construction at a fixed size.
pub struct RandomTemplates {
    pub size: usize,
}

impl TemplateSource for RandomTemplates {
    fn next_template(&mut self, rng: &mut StdRng) -> Option<Template> {
        Template::generate(self.size, rng)
    }
}

impl Template {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_black(&self, r: usize, c: usize) -> bool {
        self.black[r * self.size + c]
    }

    pub fn black_count(&self) -> usize {
        self.black.iter().filter(|&&b| b).count()
    }

    pub fn white_count(&self) -> usize {
        self.size * self.size - self.black_count()
    }

    /// Whether cell (r, c) and its point reflection share a type, for all
    /// cells.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size;
        (0..n).all(|r| {
            (0..n).all(|c| self.is_black(r, c) == self.is_black(n - 1 - r, n - 1 - c))
        })
    }

    /// Parse a stock skeleton from row strings: `#` black, `.` white.
    ///
    /// The result passes the same structural validation as generated
    /// templates (run lengths, connectivity); symmetry is not required of
    /// stock skeletons.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::Input`] for non-square input, characters
    /// outside `#`/`.`, white runs shorter than [`MIN_SLOT_LEN`], or a
    /// disconnected white region.
    pub fn parse(rows: &[&str]) -> Result<Template, CrosswordError> {
        let size = rows.len();
        if size == 0 {
            return Err(CrosswordError::Input("empty template".to_string()));
        }
        let mut black = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(CrosswordError::Input(format!(
                    "template is not square: expected {size} columns, got {}",
                    row.len()
                )));
            }
            for ch in row.chars() {
                match ch {
                    '#' => black.push(true),
                    '.' => black.push(false),
                    other => {
                        return Err(CrosswordError::Input(format!(
                            "invalid template character '{other}'"
                        )))
                    }
                }
            }
        }
        let template = Template { size, black };
        if shortest_run(&template.black, size) < MIN_SLOT_LEN {
            return Err(CrosswordError::Input(format!(
                "template has a white run shorter than {MIN_SLOT_LEN}"
            )));
        }
        if !is_connected(&template.black, size) {
            return Err(CrosswordError::Input(
                "template white cells are not connected".to_string(),
            ));
        }
        Ok(template)
    }

    /// Generate a valid symmetric template, or `None` when every
    /// construction attempt within this invocation's budget failed.
    pub fn generate(size: usize, rng: &mut StdRng) -> Option<Template> {
        let target_black = ((size * size) as f64 * TARGET_BLACK_FRACTION).round() as usize;
        let max_len = MAX_SLOT_LEN.min(size);
        for _ in 0..CONSTRUCTION_ATTEMPTS {
            if let Some(template) = try_construct(size, rng, target_black, max_len) {
                return Some(template);
            }
        }
        None
    }
}

/// Single construction attempt. Two phases: break long runs, then densify
/// to the black budget, with a full validation at the end.
fn try_construct(
    size: usize,
    rng: &mut StdRng,
    target_black: usize,
    max_len: usize,
) -> Option<Template> {
    let mut black = vec![false; size * size];
    let mut placed = 0usize;

    // Phase 1: break all runs longer than max_len. Only short-run damage
    // is checked here; unbroken long runs still exist by construction.
    for _ in 0..BREAK_ROUNDS {
        let mut candidates = long_run_breaks(&black, size, max_len);
        if candidates.is_empty() {
            break;
        }
        candidates.shuffle(rng);

        let mut advanced = false;
        for &(r, c) in candidates.iter().take(BREAK_CANDIDATE_CAP) {
            if let Some(pair) = place_symmetric(&mut black, size, r, c) {
                placed += pair;
                advanced = true;
                break;
            }
        }
        if !advanced {
            // Stuck: cannot break the remaining long runs.
            return None;
        }
    }
    if longest_run(&black, size) > max_len {
        return None;
    }

    // Phase 2: random symmetric black pairs until the budget is met.
    // Adding black cells can only shorten runs, so only the short-run
    // check is needed per placement.
    let mut cells: Vec<(usize, usize)> = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .collect();
    cells.shuffle(rng);

    for (r, c) in cells {
        if placed >= target_black {
            break;
        }
        if let Some(pair) = place_symmetric(&mut black, size, r, c) {
            placed += pair;
        }
    }

    // Final full validation.
    if shortest_run(&black, size) < MIN_SLOT_LEN || !is_connected(&black, size) {
        return None;
    }
    Some(Template { size, black })
}

/// Tentatively blacken (r, c) and its symmetric partner. Commits and
/// returns the number of cells placed when no 1–2 cell white run appears
/// in the affected rows/columns; reverts and returns `None` otherwise.
fn place_symmetric(
    black: &mut [bool],
    size: usize,
    r: usize,
    c: usize,
) -> Option<usize> {
    let (sr, sc) = (size - 1 - r, size - 1 - c);
    if black[r * size + c] {
        return None;
    }
    if (sr, sc) != (r, c) && black[sr * size + sc] {
        return None;
    }

    black[r * size + c] = true;
    if (sr, sc) != (r, c) {
        black[sr * size + sc] = true;
    }

    if no_short_runs_in(black, size, &[r, sr], &[c, sc]) {
        Some(if (sr, sc) == (r, c) { 1 } else { 2 })
    } else {
        black[r * size + c] = false;
        if (sr, sc) != (r, c) {
            black[sr * size + sc] = false;
        }
        None
    }
}

/// Walk the maximal white runs of one line. `line(i)` maps a position to
/// the black flag; calls `f(start, len)` per run.
fn for_each_run(size: usize, line: impl Fn(usize) -> bool, mut f: impl FnMut(usize, usize)) {
    let mut i = 0;
    while i < size {
        if line(i) {
            i += 1;
            continue;
        }
        let start = i;
        while i < size && !line(i) {
            i += 1;
        }
        f(start, i - start);
    }
}

/// Candidate break positions inside runs exceeding `max_len`, keeping at
/// least [`MIN_SLOT_LEN`] cells on each side of the break.
fn long_run_breaks(black: &[bool], size: usize, max_len: usize) -> Vec<(usize, usize)> {
    let mut candidates = Vec::new();
    for r in 0..size {
        for_each_run(size, |c| black[r * size + c], |start, len| {
            if len > max_len {
                for c in start + MIN_SLOT_LEN..start + len - MIN_SLOT_LEN {
                    candidates.push((r, c));
                }
            }
        });
    }
    for c in 0..size {
        for_each_run(size, |r| black[r * size + c], |start, len| {
            if len > max_len {
                for r in start + MIN_SLOT_LEN..start + len - MIN_SLOT_LEN {
                    candidates.push((r, c));
                }
            }
        });
    }
    candidates
}

/// Length of the longest white run anywhere in the grid.
fn longest_run(black: &[bool], size: usize) -> usize {
    let mut longest = 0;
    for r in 0..size {
        for_each_run(size, |c| black[r * size + c], |_, len| longest = longest.max(len));
    }
    for c in 0..size {
        for_each_run(size, |r| black[r * size + c], |_, len| longest = longest.max(len));
    }
    longest
}

/// Length of the shortest white run anywhere in the grid (or `usize::MAX`
/// for an all-black grid).
fn shortest_run(black: &[bool], size: usize) -> usize {
    let mut shortest = usize::MAX;
    for r in 0..size {
        for_each_run(size, |c| black[r * size + c], |_, len| shortest = shortest.min(len));
    }
    for c in 0..size {
        for_each_run(size, |r| black[r * size + c], |_, len| shortest = shortest.min(len));
    }
    shortest
}

/// Whether any 1–2 cell white run exists in the given rows or columns.
fn no_short_runs_in(black: &[bool], size: usize, rows: &[usize], cols: &[usize]) -> bool {
    let mut ok = true;
    for &r in rows {
        for_each_run(size, |c| black[r * size + c], |_, len| {
            if len < MIN_SLOT_LEN {
                ok = false;
            }
        });
    }
    for &c in cols {
        for_each_run(size, |r| black[r * size + c], |_, len| {
            if len < MIN_SLOT_LEN {
                ok = false;
            }
        });
    }
    ok
}

/// Whether the white cells form one 4-connected component. Flood fill
/// from the first white cell; an all-black grid is not connected.
fn is_connected(black: &[bool], size: usize) -> bool {
    let white_total = black.iter().filter(|&&b| !b).count();
    if white_total == 0 {
        return false;
    }
    let start = black.iter().position(|&b| !b).unwrap_or(0);

    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);
    let mut seen = 0usize;

    while let Some(idx) = queue.pop_front() {
        seen += 1;
        let (r, c) = (idx / size, idx % size);
        let mut visit = |nr: usize, nc: usize| {
            let nidx = nr * size + nc;
            if !black[nidx] && !visited[nidx] {
                visited[nidx] = true;
                queue.push_back(nidx);
            }
        };
        if r > 0 {
            visit(r - 1, c);
        }
        if r + 1 < size {
            visit(r + 1, c);
        }
        if c > 0 {
            visit(r, c - 1);
        }
        if c + 1 < size {
            visit(r, c + 1);
        }
    }

    seen == white_total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn generate_any(size: usize) -> Template {
        // Construction is randomized; a handful of seeds is far more than
        // enough for one to succeed.
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(t) = Template::generate(size, &mut rng) {
                return t;
            }
        }
        panic!("no template produced for size {size}");
    }

    #[test]
    fn test_parse_valid() {
        let template = Template::parse(&["...", "...", "..."]).unwrap();
        assert_eq!(template.size(), 3);
        assert_eq!(template.black_count(), 0);
        assert!(template.is_symmetric());
    }

    #[test]
    fn test_parse_rejects_short_run() {
        // Middle row has a 1-cell white run next to the blacks.
        let err = Template::parse(&["....", "##.#", "....", "...."]).unwrap_err();
        assert!(matches!(err, CrosswordError::Input(_)));
    }

    #[test]
    fn test_parse_rejects_length_two_run() {
        let err = Template::parse(&["..#", "..#", "###"]).unwrap_err();
        assert!(matches!(err, CrosswordError::Input(_)));
    }

    #[test]
    fn test_parse_rejects_disconnected() {
        let rows = [
            "...#...",
            "...#...",
            "...#...",
            "#######",
            "...#...",
            "...#...",
            "...#...",
        ];
        let err = Template::parse(&rows).unwrap_err();
        assert!(matches!(err, CrosswordError::Input(_)));
    }

    #[test]
    fn test_parse_rejects_non_square() {
        assert!(Template::parse(&["....", "....", "...."]).is_err());
        assert!(Template::parse(&[]).is_err());
    }

    #[test]
    fn test_generated_template_invariants() {
        for size in [13, 15] {
            let template = generate_any(size);
            assert!(template.is_symmetric(), "size {size} not symmetric");
            assert!(is_connected(&template.black, size));
            assert!(shortest_run(&template.black, size) >= MIN_SLOT_LEN);
            assert!(longest_run(&template.black, size) <= MAX_SLOT_LEN);

            let fraction = template.black_count() as f64 / (size * size) as f64;
            assert!(
                (0.15..=0.22).contains(&fraction),
                "size {size}: black fraction {fraction}"
            );
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = Template::generate(15, &mut rng_a);
        let b = Template::generate(15, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shortest_run_helpers() {
        let template = Template::parse(&["...", "...", "..."]).unwrap();
        assert_eq!(shortest_run(&template.black, 3), 3);
        assert_eq!(longest_run(&template.black, 3), 3);
    }
}
