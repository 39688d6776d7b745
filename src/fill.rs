//! `fill` — the depth-first fill engine.
//!
//! One attempt walks the slot graph with chronological backtracking: pick
//! the most constrained unassigned slot (fewest lexicon candidates under
//! the current partial letters, ties broken by more crossings, then slot
//! id), try its candidates in descending score order with seeded jitter,
//! and forward-check every crossing slot before recursing — a crossing
//! left with zero candidates rejects the tentative word outright.
//!
//! An attempt is a small state machine: it starts assigning, reaches
//! success when every slot holds a word, and fails when the root is
//! exhausted or a budget (nodes or wall clock) runs out. Failure is clean:
//! the working letters are attempt-private and simply dropped, letters are
//! only materialized into a grid on success.
//!
//! Given identical template, lexicon and seed, the engine is fully
//! deterministic; randomness exists only in the candidate-order jitter.

use std::collections::HashSet;
use std::time::Duration;

use instant::Instant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::grid::Grid;
use crate::lexicon::{Lexicon, Pattern};
use crate::slots::{SlotGraph, SlotId};
use crate::template::Template;

/// Node expansions allowed per attempt.
const DEFAULT_NODE_BUDGET: u64 = 200_000;

/// Wall-clock time allowed per attempt.
const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Candidates considered per node expansion. Deeper alternatives are
/// reached by backtracking above, not by widening here.
const MAX_BRANCHING: usize = 64;

/// Scale turning an entry score into an integer sort key; the jitter is
/// added in the same units.
const SCORE_SCALE: f32 = 1000.0;

/// Per-attempt tuning knobs.
#[derive(Debug, Clone)]
pub struct FillConfig {
    pub seed: u64,
    pub node_budget: u64,
    pub time_budget: Duration,
    /// Candidate-order jitter magnitude in score-key units (a value of
    /// 100 is a tenth of one score point); 0 disables jitter.
    pub jitter: u32,
}

impl Default for FillConfig {
    fn default() -> Self {
        FillConfig {
            seed: 0,
            node_budget: DEFAULT_NODE_BUDGET,
            time_budget: DEFAULT_TIME_BUDGET,
            jitter: 100,
        }
    }
}

/// Why an attempt ended without a complete assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillFailure {
    /// The search exhausted every branch from the root.
    Exhausted,
    NodeBudgetExceeded,
    TimedOut,
}

/// A complete legal assignment: one lexicon word per slot, indexed by
/// [`SlotId`].
#[derive(Debug, Clone)]
pub struct Fill<'a> {
    pub words: Vec<&'a str>,
    /// Nodes expanded while searching, for diagnostics.
    pub nodes: u64,
}

impl Fill<'_> {
    /// Materialize the assignment's letters into `grid`.
    pub fn write_into(&self, graph: &SlotGraph, grid: &mut Grid) {
        for (slot, word) in graph.slots.iter().zip(&self.words) {
            for ((r, c), ch) in slot.cells().zip(word.chars()) {
                grid.cell_mut(r, c).letter = Some(ch);
            }
        }
    }
}

/// Wall-clock limit helper.
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Attempt a complete fill of `graph` against `lexicon`.
///
/// # Errors
///
/// Returns a [`FillFailure`] when no assignment exists within the
/// configured budgets; the caller (normally the retry controller) decides
/// whether to retry with a fresh template or seed.
pub fn fill<'a>(
    template: &Template,
    graph: &SlotGraph,
    lexicon: &'a Lexicon,
    config: &FillConfig,
) -> Result<Fill<'a>, FillFailure> {
    let mut searcher = Searcher {
        graph,
        lexicon,
        size: template.size(),
        letters: vec![None; template.size() * template.size()],
        assigned: vec![None; graph.len()],
        used: HashSet::new(),
        nodes: 0,
        node_budget: config.node_budget,
        budget: TimeBudget::new(config.time_budget),
        rng: StdRng::seed_from_u64(config.seed),
        jitter: config.jitter,
    };

    match searcher.dfs() {
        Ok(true) => Ok(Fill {
            words: searcher.assigned.iter().filter_map(|w| *w).collect(),
            nodes: searcher.nodes,
        }),
        Ok(false) => Err(FillFailure::Exhausted),
        Err(failure) => Err(failure),
    }
}

struct Searcher<'a, 'g> {
    graph: &'g SlotGraph,
    lexicon: &'a Lexicon,
    size: usize,
    // Working letters, row-major. Attempt-private; discarded on failure.
    letters: Vec<Option<char>>,
    assigned: Vec<Option<&'a str>>,
    used: HashSet<&'a str>,
    nodes: u64,
    node_budget: u64,
    budget: TimeBudget,
    rng: StdRng,
    jitter: u32,
}

impl<'a> Searcher<'a, '_> {
    fn pattern_for(&self, id: SlotId) -> Pattern {
        let slot = &self.graph.slots[id];
        let mut pattern = Pattern::blank(slot.len);
        for (i, (r, c)) in slot.cells().enumerate() {
            if let Some(ch) = self.letters[r * self.size + c] {
                pattern.set(i, ch);
            }
        }
        pattern
    }

    /// Most-constrained-first: fewest candidates, then more crossings,
    /// then lowest id. `None` once every slot is assigned.
    fn select_slot(&self) -> Option<SlotId> {
        let mut best: Option<(usize, usize, SlotId)> = None;
        for id in 0..self.graph.len() {
            if self.assigned[id].is_some() {
                continue;
            }
            let count = self.lexicon.count(&self.pattern_for(id));
            let crossings = self.graph.crossing_count(id);
            let better = match best {
                None => true,
                Some((best_count, best_crossings, _)) => {
                    count < best_count || (count == best_count && crossings > best_crossings)
                }
            };
            if better {
                best = Some((count, crossings, id));
            }
        }
        best.map(|(_, _, id)| id)
    }

    /// Candidates for one slot: top lexicon matches with unused words,
    /// reordered by score plus jitter.
    fn candidates(&mut self, id: SlotId) -> Vec<&'a str> {
        let pattern = self.pattern_for(id);
        let mut picks: Vec<(i64, &'a str)> = Vec::with_capacity(MAX_BRANCHING);
        for entry in self.lexicon.query(&pattern) {
            if self.used.contains(entry.word.as_str()) {
                continue;
            }
            let jitter = if self.jitter > 0 {
                self.rng.gen_range(0..=self.jitter) as i64
            } else {
                0
            };
            picks.push(((entry.score * SCORE_SCALE) as i64 + jitter, entry.word.as_str()));
            if picks.len() == MAX_BRANCHING {
                break;
            }
        }
        // Stable sort keeps the lexicon's order on equal keys.
        picks.sort_by_key(|&(key, _)| std::cmp::Reverse(key));
        picks.into_iter().map(|(_, word)| word).collect()
    }

    /// Write `word` into the slot, returning the cells newly written (the
    /// rest were already fixed by crossing assignments).
    fn place(&mut self, id: SlotId, word: &'a str) -> SmallVec<[usize; 21]> {
        let slot = &self.graph.slots[id];
        let mut wrote: SmallVec<[usize; 21]> = SmallVec::new();
        for ((r, c), ch) in slot.cells().zip(word.chars()) {
            let idx = r * self.size + c;
            if self.letters[idx].is_none() {
                self.letters[idx] = Some(ch);
                wrote.push(idx);
            }
        }
        self.assigned[id] = Some(word);
        self.used.insert(word);
        wrote
    }

    fn unplace(&mut self, id: SlotId, word: &'a str, wrote: &[usize]) {
        for &idx in wrote {
            self.letters[idx] = None;
        }
        self.assigned[id] = None;
        self.used.remove(word);
    }

    /// Forward check: every unassigned crossing slot must keep at least
    /// one candidate under the updated letters.
    fn crossings_viable(&self, id: SlotId) -> bool {
        self.graph.crossings[id].iter().all(|crossing| {
            self.assigned[crossing.other].is_some()
                || self.lexicon.count(&self.pattern_for(crossing.other)) > 0
        })
    }

    fn dfs(&mut self) -> Result<bool, FillFailure> {
        let Some(id) = self.select_slot() else {
            // Every slot assigned: success.
            return Ok(true);
        };

        self.nodes += 1;
        if self.nodes > self.node_budget {
            return Err(FillFailure::NodeBudgetExceeded);
        }
        if self.budget.expired() {
            return Err(FillFailure::TimedOut);
        }

        for word in self.candidates(id) {
            let wrote = self.place(id, word);
            if self.crossings_viable(id) && self.dfs()? {
                return Ok(true);
            }
            self.unplace(id, word, &wrote);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Provenance;

    fn lexicon_of(words: &[&str]) -> Lexicon {
        Lexicon::from_scored_words(
            words
                .iter()
                .map(|w| ((*w).to_string(), 1.0, Provenance::Bank)),
        )
    }

    fn square_lexicon() -> Lexicon {
        // Fills a 3x3 all-white grid: CAT/ORE/WED across, COW/ARE/TED down
        // (or the transpose).
        lexicon_of(&["CAT", "ORE", "WED", "COW", "ARE", "TED"])
    }

    fn open_three() -> (Template, SlotGraph) {
        let template = Template::parse(&["...", "...", "..."]).unwrap();
        let graph = crate::slots::extract_slots(&template);
        (template, graph)
    }

    #[test]
    fn test_fills_word_square() {
        let (template, graph) = open_three();
        let lexicon = square_lexicon();
        let fill = fill(&template, &graph, &lexicon, &FillConfig::default()).unwrap();

        assert_eq!(fill.words.len(), graph.len());
        // All words distinct.
        let unique: HashSet<&str> = fill.words.iter().copied().collect();
        assert_eq!(unique.len(), fill.words.len());
        // Crossing letters agree.
        for slot in &graph.slots {
            for crossing in &graph.crossings[slot.id] {
                let mine = fill.words[slot.id].as_bytes()[crossing.my_offset];
                let theirs = fill.words[crossing.other].as_bytes()[crossing.other_offset];
                assert_eq!(mine, theirs);
            }
        }
    }

    #[test]
    fn test_write_into_grid() {
        let (template, graph) = open_three();
        let lexicon = square_lexicon();
        let result = fill(&template, &graph, &lexicon, &FillConfig::default()).unwrap();

        let mut grid = Grid::from_template(&template);
        result.write_into(&graph, &mut grid);
        for r in 0..3 {
            for c in 0..3 {
                assert!(grid.cell(r, c).letter.is_some());
            }
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let (template, graph) = open_three();
        let lexicon = square_lexicon();
        let config = FillConfig { seed: 42, ..FillConfig::default() };
        let a = fill(&template, &graph, &lexicon, &config).unwrap();
        let b = fill(&template, &graph, &lexicon, &config).unwrap();
        assert_eq!(a.words, b.words);
    }

    #[test]
    fn test_single_word_cannot_fill_open_grid() {
        // Only CAT exists; reuse is forbidden, so a 3x3 all-white grid has
        // no fill.
        let (template, graph) = open_three();
        let lexicon = lexicon_of(&["CAT"]);
        let err = fill(&template, &graph, &lexicon, &FillConfig::default()).unwrap_err();
        assert_eq!(err, FillFailure::Exhausted);
    }

    #[test]
    fn test_empty_length_bucket_fails_cleanly() {
        let (template, graph) = open_three();
        // No 3-letter words at all.
        let lexicon = lexicon_of(&["OCEAN", "TIGER"]);
        let err = fill(&template, &graph, &lexicon, &FillConfig::default()).unwrap_err();
        assert_eq!(err, FillFailure::Exhausted);
    }

    #[test]
    fn test_node_budget_exceeded() {
        let (template, graph) = open_three();
        let lexicon = square_lexicon();
        let config = FillConfig { node_budget: 0, ..FillConfig::default() };
        let err = fill(&template, &graph, &lexicon, &config).unwrap_err();
        assert_eq!(err, FillFailure::NodeBudgetExceeded);
    }

    #[test]
    fn test_empty_graph_is_trivially_filled() {
        // A template with no slots of length >= 2 cannot be built, but an
        // empty graph is still a valid degenerate input.
        let template = Template::parse(&["...", "...", "..."]).unwrap();
        let graph = SlotGraph { slots: vec![], crossings: vec![] };
        let lexicon = lexicon_of(&["CAT"]);
        let result = fill(&template, &graph, &lexicon, &FillConfig::default()).unwrap();
        assert!(result.words.is_empty());
    }
}
