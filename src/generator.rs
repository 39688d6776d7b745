//! `generator` — the retry controller for generate mode.
//!
//! One attempt is `template → slots → fill`; the controller runs attempts
//! with per-attempt RNGs derived from the caller seed plus the attempt
//! index, keeps the best successful fill by word count, and stops early
//! once the target is reached. Per-attempt failures never surface: only
//! after the whole retry budget is spent does a terminal error come back
//! (template exhaustion when no attempt even produced a skeleton, a fill
//! error otherwise). An optional overall wall-clock budget cuts the loop
//! short with the same terminal reporting.

use std::time::Duration;

use instant::Instant;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clue::PlacedEntry;
use crate::errors::CrosswordError;
use crate::fill::{fill, FillConfig};
use crate::lexicon::Lexicon;
use crate::slots::{extract_slots, SlotGraph};
use crate::template::{RandomTemplates, TemplateSource};
use crate::word_bank::{resolve_clue, SemanticLookup};

/// Default retry budget for generate mode.
pub const DEFAULT_RETRIES: usize = 20;

/// Grid sizes the randomized generator accepts; the upper bound matches
/// the longest indexable word.
const SIZE_RANGE: std::ops::RangeInclusive<usize> = 5..=21;

/// Retry-loop parameters.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub grid_size: usize,
    pub seed: u64,
    pub retries: usize,
    /// Stop retrying early once an attempt places this many words.
    pub target_words: usize,
    /// The best attempt must place at least this many words.
    pub min_words: usize,
    /// Overall wall-clock budget across all attempts.
    pub overall_budget: Option<Duration>,
    /// Per-attempt fill budgets; the fill seed is overridden per attempt.
    pub fill: FillConfig,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            grid_size: 15,
            seed: 0,
            retries: DEFAULT_RETRIES,
            target_words: 60,
            min_words: 30,
            overall_budget: None,
            fill: FillConfig::default(),
        }
    }
}

/// Generate a crossword from the lexicon using randomized templates.
///
/// # Errors
///
/// [`CrosswordError::Input`] for an unsupported grid size,
/// [`CrosswordError::Template`] when no attempt produced a valid skeleton,
/// [`CrosswordError::Fill`] when no attempt reached `min_words`.
pub fn generate(
    lexicon: &Lexicon,
    semantic: Option<&dyn SemanticLookup>,
    config: &GenerateConfig,
) -> Result<Vec<PlacedEntry>, CrosswordError> {
    if !SIZE_RANGE.contains(&config.grid_size) {
        return Err(CrosswordError::Input(format!(
            "unsupported grid size {} (expected {}..={})",
            config.grid_size,
            SIZE_RANGE.start(),
            SIZE_RANGE.end()
        )));
    }
    let mut source = RandomTemplates { size: config.grid_size };
    generate_with(&mut source, lexicon, semantic, config)
}

/// Retry loop over an injectable template source.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with<S: TemplateSource>(
    source: &mut S,
    lexicon: &Lexicon,
    semantic: Option<&dyn SemanticLookup>,
    config: &GenerateConfig,
) -> Result<Vec<PlacedEntry>, CrosswordError> {
    let started = Instant::now();
    let mut best: Option<Vec<PlacedEntry>> = None;
    let mut templates_seen = 0usize;
    let mut attempts_made = 0usize;

    for attempt in 0..config.retries {
        if let Some(budget) = config.overall_budget {
            if started.elapsed() >= budget {
                debug!("overall budget expired after {attempts_made} attempts");
                break;
            }
        }
        attempts_made += 1;

        // Attempt-private randomness: caller seed plus attempt index.
        let attempt_seed = config.seed.wrapping_add(attempt as u64);
        let mut rng = StdRng::seed_from_u64(attempt_seed);
        let Some(template) = source.next_template(&mut rng) else {
            debug!("attempt {attempt}: template generation failed");
            continue;
        };
        templates_seen += 1;

        let graph = extract_slots(&template);
        let fill_config = FillConfig { seed: attempt_seed, ..config.fill.clone() };
        match fill(&template, &graph, lexicon, &fill_config) {
            Ok(result) => {
                debug!(
                    "attempt {attempt}: filled {} slots ({} nodes)",
                    result.words.len(),
                    result.nodes
                );
                let placed = to_placed_entries(&graph, &result.words, semantic);
                if best.as_ref().is_none_or(|b| placed.len() > b.len()) {
                    best = Some(placed);
                }
                if best.as_ref().is_some_and(|b| b.len() >= config.target_words) {
                    break;
                }
            }
            Err(failure) => {
                debug!("attempt {attempt}: fill failed ({failure:?})");
            }
        }
    }

    match best {
        Some(placed) if placed.len() >= config.min_words => {
            info!(
                "generated {} words in {attempts_made} attempt(s), {:.1}s",
                placed.len(),
                started.elapsed().as_secs_f64()
            );
            Ok(placed)
        }
        Some(placed) => Err(CrosswordError::Fill {
            attempts: attempts_made,
            best_words: placed.len(),
        }),
        None if templates_seen == 0 => Err(CrosswordError::Template { attempts: attempts_made }),
        None => Err(CrosswordError::Fill { attempts: attempts_made, best_words: 0 }),
    }
}

/// Turn a complete fill into placed entries with resolved clues.
fn to_placed_entries(
    graph: &SlotGraph,
    words: &[&str],
    semantic: Option<&dyn SemanticLookup>,
) -> Vec<PlacedEntry> {
    graph
        .slots
        .iter()
        .zip(words)
        .map(|(slot, word)| PlacedEntry {
            clue: resolve_clue(word, semantic),
            answer: (*word).to_string(),
            row: slot.row,
            col: slot.col,
            direction: slot.direction,
        })
        .collect()
}
