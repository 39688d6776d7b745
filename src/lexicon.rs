//! `lexicon` — the pre-indexed, immutable word source.
//!
//! The lexicon is built once per run from ranked sources (the curated bank
//! at score 1.0, a bulk dictionary at score 0.3) and shared read-only by
//! every fill attempt. The single query contract is `(length, pattern) →
//! candidates in descending score order`, and it is the one seam shared by
//! the template-based fill engine and the greedy placer.
//!
//! Index layout: one bucket per word length. Bucket entries are sorted by
//! descending score (ties by word, so construction is deterministic), and
//! each bucket carries a bitmap per (position, letter) over bucket
//! indices. A pattern query ANDs the bitmaps of its fixed positions and
//! walks the surviving bits lazily — ascending index order is descending
//! score order, and callers that only want the top few candidates stop
//! early without paying for the rest.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use crate::errors::CrosswordError;
use crate::word_bank::{self, SemanticLookup};

/// Score given to curated bank entries.
pub const BANK_SCORE: f32 = 1.0;
/// Score given to bulk dictionary entries.
pub const DICTIONARY_SCORE: f32 = 0.3;

/// Longest word the index accepts (enough for a 21×21 grid-spanning slot).
pub const MAX_WORD_LEN: usize = 21;

/// Shortest word the index accepts.
pub const MIN_WORD_LEN: usize = 2;

/// A generate-mode lexicon below this many clueable entries cannot fill a
/// standard grid and is rejected at construction.
const MIN_CLUEABLE_ENTRIES: usize = 100;

const ALPHABET: usize = 26;

/// Where an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Bank,
    Dictionary,
}

/// An immutable scored word.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    /// Uppercase A–Z, length `MIN_WORD_LEN..=MAX_WORD_LEN`.
    pub word: String,
    /// Higher is preferred.
    pub score: f32,
    pub provenance: Provenance,
}

/// A query pattern: one fixed letter or wildcard per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    // Letters stored as 0..26; None is a wildcard.
    slots: Vec<Option<u8>>,
}

impl Pattern {
    /// All-wildcard pattern of the given length.
    pub fn blank(len: usize) -> Pattern {
        Pattern { slots: vec![None; len] }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fix position `i` to `letter` (must be ascii-uppercase).
    pub fn set(&mut self, i: usize, letter: char) {
        debug_assert!(letter.is_ascii_uppercase());
        self.slots[i] = Some(letter as u8 - b'A');
    }

    /// Reset position `i` to a wildcard.
    pub fn clear(&mut self, i: usize) {
        self.slots[i] = None;
    }

    pub fn get(&self, i: usize) -> Option<char> {
        self.slots[i].map(|l| (l + b'A') as char)
    }

    /// True when every position is fixed.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub(crate) fn fixed(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.map(|l| (i, l)))
    }

    /// Whether `word` (uppercase A–Z) fits this pattern.
    pub fn matches(&self, word: &str) -> bool {
        word.len() == self.slots.len()
            && self
                .fixed()
                .all(|(i, l)| word.as_bytes()[i] == l + b'A')
    }
}

impl FromStr for Pattern {
    type Err = CrosswordError;

    /// Parse from text: `.` or `?` as wildcard, letters (any case) fixed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '.' | '?' => Ok(None),
                c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_uppercase() as u8 - b'A')),
                c => Err(CrosswordError::Input(format!(
                    "invalid pattern character '{c}'"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|slots| Pattern { slots })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(l) => write!(f, "{}", (*l + b'A') as char)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// All entries of one word length, plus the position/letter bitmaps.
struct Bucket {
    entries: Vec<LexiconEntry>,
    // One bitmap per (position, letter) over entry indices; bit i set means
    // entries[i] has that letter at that position.
    letter_masks: Vec<Vec<u64>>,
    blocks: usize,
}

impl Bucket {
    fn build(entries: Vec<LexiconEntry>, word_len: usize) -> Bucket {
        let blocks = entries.len().div_ceil(64);
        let mut letter_masks = vec![vec![0u64; blocks]; word_len * ALPHABET];
        for (id, entry) in entries.iter().enumerate() {
            for (pos, &b) in entry.word.as_bytes().iter().enumerate() {
                let letter = (b - b'A') as usize;
                letter_masks[pos * ALPHABET + letter][id / 64] |= 1 << (id % 64);
            }
        }
        Bucket { entries, letter_masks, blocks }
    }

    /// Bitmap of entries matching `pattern` (AND over fixed positions).
    fn match_mask(&self, pattern: &Pattern) -> Vec<u64> {
        let mut mask = vec![u64::MAX; self.blocks];
        // Clamp the last block so stray high bits never index past the end.
        let rem = self.entries.len() % 64;
        if rem != 0 {
            if let Some(last) = mask.last_mut() {
                *last = (1u64 << rem) - 1;
            }
        }
        for (pos, letter) in pattern.fixed() {
            let m = &self.letter_masks[pos * ALPHABET + letter as usize];
            for (dst, src) in mask.iter_mut().zip(m) {
                *dst &= src;
            }
        }
        mask
    }
}

/// Lazy walk over the set bits of a match mask, in descending score order.
pub struct Candidates<'a> {
    entries: &'a [LexiconEntry],
    mask: Vec<u64>,
    block: usize,
    bits: u64,
}

impl Candidates<'_> {
    fn empty() -> Candidates<'static> {
        Candidates { entries: &[], mask: Vec::new(), block: 0, bits: 0 }
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a LexiconEntry;

    fn next(&mut self) -> Option<&'a LexiconEntry> {
        loop {
            if self.bits != 0 {
                let bit = self.bits.trailing_zeros() as usize;
                self.bits &= self.bits - 1;
                let id = (self.block - 1) * 64 + bit;
                return Some(&self.entries[id]);
            }
            if self.block == self.mask.len() {
                return None;
            }
            self.bits = self.mask[self.block];
            self.block += 1;
        }
    }
}

/// The indexed word collection. Immutable once built; freely shareable.
pub struct Lexicon {
    // Index = word length; lengths with no entries hold None.
    buckets: Vec<Option<Bucket>>,
    total: usize,
}

impl Lexicon {
    /// Assemble a lexicon from raw scored words.
    ///
    /// Words are normalized (uppercased, non-A–Z stripped); empty results,
    /// words shorter than [`MIN_WORD_LEN`] and words longer than
    /// [`MAX_WORD_LEN`] are dropped. Case-normalized duplicates collapse to
    /// the highest-scored occurrence.
    pub fn from_scored_words<I>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = (String, f32, Provenance)>,
    {
        let mut best: HashMap<String, (f32, Provenance)> = HashMap::new();
        for (raw, score, provenance) in words {
            let Some(word) = normalize(&raw) else { continue };
            if word.len() > MAX_WORD_LEN {
                continue;
            }
            match best.get(&word) {
                Some((prev, _)) if *prev >= score => {
                    debug!("duplicate '{word}' collapsed (kept score {prev})");
                }
                _ => {
                    best.insert(word, (score, provenance));
                }
            }
        }

        // Deterministic order regardless of map iteration: descending
        // score, then alphabetical.
        let mut entries: Vec<LexiconEntry> = best
            .into_iter()
            .map(|(word, (score, provenance))| LexiconEntry { word, score, provenance })
            .collect();
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });

        let total = entries.len();
        let mut by_len: Vec<Vec<LexiconEntry>> = (0..=MAX_WORD_LEN).map(|_| Vec::new()).collect();
        for entry in entries {
            by_len[entry.word.len()].push(entry);
        }
        let buckets = by_len
            .into_iter()
            .enumerate()
            .map(|(len, bucket)| {
                if bucket.is_empty() {
                    None
                } else {
                    Some(Bucket::build(bucket, len))
                }
            })
            .collect();

        Lexicon { buckets, total }
    }

    /// Build the generate-mode lexicon: the curated bank at
    /// [`BANK_SCORE`] plus `dictionary` words at [`DICTIONARY_SCORE`],
    /// keeping only entries with a resolvable clue.
    ///
    /// When `filter_list` is given, dictionary words must appear in it (or
    /// be a common inflection of a listed word) — this screens out exotic
    /// entries from very large dictionaries.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::Lexicon`] when fewer than a minimum number
    /// of clueable entries survive.
    pub fn from_sources(
        dictionary: &[String],
        filter_list: Option<&HashSet<String>>,
        semantic: Option<&dyn SemanticLookup>,
    ) -> Result<Lexicon, CrosswordError> {
        let allowed = filter_list.map(expand_inflections);

        let mut scored: Vec<(String, f32, Provenance)> = Vec::new();
        for raw in dictionary {
            let Some(word) = normalize(raw) else { continue };
            if word.len() < 3 || word.len() > MAX_WORD_LEN {
                continue;
            }
            if let Some(allowed) = &allowed {
                if !allowed.contains(&word) {
                    continue;
                }
            }
            if !word_bank::has_clue_source(&word, semantic) {
                continue;
            }
            scored.push((word, DICTIONARY_SCORE, Provenance::Dictionary));
        }
        for (word, _) in word_bank::WORD_BANK {
            scored.push(((*word).to_string(), BANK_SCORE, Provenance::Bank));
        }

        let lexicon = Lexicon::from_scored_words(scored);
        if lexicon.len() < MIN_CLUEABLE_ENTRIES {
            return Err(CrosswordError::Lexicon(format!(
                "only {} clueable entries (minimum {MIN_CLUEABLE_ENTRIES})",
                lexicon.len()
            )));
        }
        info!("lexicon ready: {} entries", lexicon.len());
        Ok(lexicon)
    }

    /// Number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of entries of the given word length.
    pub fn bucket_len(&self, len: usize) -> usize {
        self.buckets
            .get(len)
            .and_then(Option::as_ref)
            .map_or(0, |b| b.entries.len())
    }

    /// All entries matching `pattern`, best first. An empty bucket for the
    /// pattern's length yields an empty sequence, not an error.
    pub fn query(&self, pattern: &Pattern) -> Candidates<'_> {
        match self.buckets.get(pattern.len()).and_then(Option::as_ref) {
            Some(bucket) => Candidates {
                entries: &bucket.entries,
                mask: bucket.match_mask(pattern),
                block: 0,
                bits: 0,
            },
            None => Candidates::empty(),
        }
    }

    /// How many entries match `pattern`. Cheaper than draining
    /// [`Lexicon::query`]: popcounts of the AND mask, no entry visits.
    pub fn count(&self, pattern: &Pattern) -> usize {
        match self.buckets.get(pattern.len()).and_then(Option::as_ref) {
            Some(bucket) => bucket
                .match_mask(pattern)
                .iter()
                .map(|b| b.count_ones() as usize)
                .sum(),
            None => 0,
        }
    }

    /// Exact-word membership test.
    pub fn contains(&self, word: &str) -> bool {
        let Ok(pattern) = word.parse::<Pattern>() else { return false };
        self.query(&pattern).next().is_some()
    }
}

/// Uppercase and strip non-A–Z; `None` when fewer than [`MIN_WORD_LEN`]
/// characters remain.
pub fn normalize(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if word.len() < MIN_WORD_LEN {
        None
    } else {
        Some(word)
    }
}

/// Read a newline-separated word file (the bulk dictionary format).
///
/// # Errors
///
/// Returns [`CrosswordError::Io`] when the file cannot be read.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CrosswordError> {
    let path_ref = path.as_ref();
    let data = std::fs::read_to_string(path_ref).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to read word list from '{}': {}", path_ref.display(), e),
        )
    })?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Expand a word set with common inflections so filtering through it keeps
/// regular plurals and verb forms.
fn expand_inflections(words: &HashSet<String>) -> HashSet<String> {
    let mut expanded = HashSet::with_capacity(words.len() * 2);
    for raw in words {
        let Some(word) = normalize(raw) else { continue };
        if word.len() >= 3 {
            for suffix in ["S", "ED", "ING", "ER", "LY", "ES", "D"] {
                expanded.insert(format!("{word}{suffix}"));
            }
        }
        expanded.insert(word);
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon_of(words: &[(&str, f32)]) -> Lexicon {
        Lexicon::from_scored_words(
            words
                .iter()
                .map(|(w, s)| ((*w).to_string(), *s, Provenance::Bank)),
        )
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("hello"), Some("HELLO".to_string()));
        assert_eq!(normalize("it's"), Some("ITS".to_string()));
        assert_eq!(normalize("a"), None);
        assert_eq!(normalize("1+1"), None);
    }

    #[test]
    fn test_duplicate_collapses_to_highest_score() {
        let lexicon = Lexicon::from_scored_words(vec![
            ("abc".to_string(), DICTIONARY_SCORE, Provenance::Dictionary),
            ("ABC".to_string(), BANK_SCORE, Provenance::Bank),
        ]);
        assert_eq!(lexicon.len(), 1);
        let entry = lexicon.query(&Pattern::blank(3)).next().unwrap();
        assert_eq!(entry.word, "ABC");
        assert_eq!(entry.score, BANK_SCORE);
        assert_eq!(entry.provenance, Provenance::Bank);
    }

    #[test]
    fn test_query_descending_score_order() {
        let lexicon = lexicon_of(&[("CAT", 0.3), ("COT", 1.0), ("CUT", 0.5)]);
        let words: Vec<&str> = lexicon
            .query(&Pattern::blank(3))
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(words, vec!["COT", "CUT", "CAT"]);
    }

    #[test]
    fn test_query_with_fixed_letters() {
        let lexicon = lexicon_of(&[("CAT", 1.0), ("COT", 1.0), ("DOG", 1.0), ("CUTS", 1.0)]);
        let pattern: Pattern = "C.T".parse().unwrap();
        let words: Vec<&str> = lexicon.query(&pattern).map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["CAT", "COT"]);
        assert_eq!(lexicon.count(&pattern), 2);
    }

    #[test]
    fn test_empty_bucket_is_empty_not_error() {
        let lexicon = lexicon_of(&[("CAT", 1.0)]);
        assert_eq!(lexicon.count(&Pattern::blank(7)), 0);
        assert!(lexicon.query(&Pattern::blank(7)).next().is_none());
    }

    #[test]
    fn test_early_termination() {
        let lexicon = lexicon_of(&[("AAA", 1.0), ("AAB", 0.9), ("AAC", 0.8)]);
        let top = lexicon.query(&Pattern::blank(3)).next().unwrap();
        assert_eq!(top.word, "AAA");
    }

    #[test]
    fn test_contains() {
        let lexicon = lexicon_of(&[("CAT", 1.0)]);
        assert!(lexicon.contains("CAT"));
        assert!(!lexicon.contains("DOG"));
        assert!(!lexicon.contains("CA#"));
    }

    #[test]
    fn test_pattern_parse_and_display() {
        let pattern: Pattern = "c.T?".parse().unwrap();
        assert_eq!(pattern.to_string(), "C.T.");
        assert!(pattern.matches("CATS"));
        assert!(!pattern.matches("COGS"));
        assert!(!pattern.matches("CAT"));
        assert!("c-t".parse::<Pattern>().is_err());
    }

    #[test]
    fn test_pattern_set_and_clear() {
        let mut pattern = Pattern::blank(3);
        pattern.set(1, 'A');
        assert_eq!(pattern.get(1), Some('A'));
        assert!(!pattern.is_complete());
        pattern.clear(1);
        assert_eq!(pattern.get(1), None);
    }

    #[test]
    fn test_bucket_spans_multiple_blocks() {
        // More than 64 entries of one length exercises the multi-block
        // bitmap path.
        let words: Vec<(String, f32, Provenance)> = (0..26)
            .flat_map(|a| (0..3).map(move |b| (a, b)))
            .map(|(a, b)| {
                let word = format!(
                    "{}{}X",
                    (b'A' + a) as char,
                    (b'A' + b) as char
                );
                (word, 0.5, Provenance::Dictionary)
            })
            .collect();
        let lexicon = Lexicon::from_scored_words(words);
        assert_eq!(lexicon.bucket_len(3), 78);
        let pattern: Pattern = "A.X".parse().unwrap();
        assert_eq!(lexicon.count(&pattern), 3);
        let found: Vec<&str> = lexicon.query(&pattern).map(|e| e.word.as_str()).collect();
        assert_eq!(found, vec!["AAX", "ABX", "ACX"]);
    }

    #[test]
    fn test_from_sources_system_filter_keeps_inflections() {
        let dictionary = vec!["cats".to_string(), "dogs".to_string()];
        let filter: HashSet<String> = ["cat".to_string()].into_iter().collect();
        let lexicon = Lexicon::from_sources(&dictionary, Some(&filter), None).unwrap();
        // CATS is an inflection of a listed word; DOGS is screened out.
        assert!(lexicon.contains("CATS"));
        assert!(!lexicon.contains("DOGS"));
    }

    #[test]
    fn test_from_sources_filters_unclueable() {
        // XYZZY has no bank entry, no inflection base and no semantic
        // source, so it cannot survive; CATS derives from the bank.
        let dictionary = vec!["xyzzy".to_string(), "cats".to_string()];
        let result = Lexicon::from_sources(&dictionary, None, None);
        // The bank alone clears the minimum, so construction succeeds.
        let lexicon = result.unwrap();
        assert!(lexicon.contains("CATS"));
        assert!(!lexicon.contains("XYZZY"));
    }
}
