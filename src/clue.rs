//! `clue` — clue/answer records and the clue-list input boundary.
//!
//! Worksheet parsing proper (XLSX) lives outside this crate; what the core
//! consumes is the extracted row stream. This module reads that stream in
//! its delimited text form, one entry per line:
//!
//! - `answer;clue` — the minimal format,
//! - `number;clue;answer` — with an ordering hint, or
//! - `number;direction;row;col;clue;answer` — the richest worksheet
//!   layout; direction and coordinates are ignored (placement is always
//!   recomputed) and `number` is an ordering hint discarded after
//!   placement.
//!
//! Lines without a separator are skipped silently; header lines (no
//! parseable data) fall out the same way. Answers are normalized to
//! uppercase A–Z. Entries that are too short, too long for the grid, or
//! duplicates are dropped with a warning; an empty result is an input
//! error.

use std::path::Path;

use log::warn;

use crate::errors::CrosswordError;
use crate::grid::Direction;

/// Minimum answer length accepted at the input boundary.
pub const MIN_ANSWER_LEN: usize = 3;

/// A clue/answer pair from the user's word list. `number` is an ordering
/// hint only; display numbers are assigned by the numbering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: String,
    /// Uppercase, A–Z only.
    pub answer: String,
}

/// A [`ClueEntry`] that has been assigned a position on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedEntry {
    pub clue: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// A clue carrying its grid-assigned display number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedClue {
    pub number: u32,
    pub clue: String,
    pub answer: String,
    pub direction: Direction,
}

/// Uppercase and strip everything that is not A–Z. Returns `None` when
/// nothing is left.
pub fn normalize_answer(raw: &str) -> Option<String> {
    let answer: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if answer.is_empty() {
        None
    } else {
        Some(answer)
    }
}

/// Parse a raw clue list from an in-memory string.
///
/// Each line is either `answer;clue` or `number;clue;answer`. Blank lines
/// and lines without a `;` are skipped.
pub fn parse_from_str(contents: &str) -> Vec<ClueEntry> {
    let mut next_hint = 0u32;
    contents
        .lines()
        .filter_map(|raw_line| {
            let line = raw_line.trim();
            if line.is_empty() {
                return None;
            }
            let fields: Vec<&str> = line.split(';').map(str::trim).collect();
            let (hint, clue, raw_answer) = match fields.as_slice() {
                [answer, clue] => (None, *clue, *answer),
                // In the numbered formats the first field must be the
                // ordering hint; a non-numeric first field means a header
                // line. Direction and coordinates, when present, are
                // dropped: placement is always recomputed.
                [number, clue, answer] => {
                    let n: u32 = number.parse().ok()?;
                    (Some(n), *clue, *answer)
                }
                [number, _direction, _row, _col, clue, answer] => {
                    let n: u32 = number.parse().ok()?;
                    (Some(n), *clue, *answer)
                }
                _ => return None,
            };
            let answer = normalize_answer(raw_answer)?;
            next_hint += 1;
            Some(ClueEntry {
                number: hint.unwrap_or(next_hint),
                clue: clue.to_string(),
                answer,
            })
        })
        .collect()
}

/// Read a clue list from a file and validate it against `grid_size`.
///
/// # Errors
///
/// Returns [`CrosswordError::Io`] when the file cannot be read and
/// [`CrosswordError::Input`] when no valid entries remain after filtering.
pub fn load_from_path<P: AsRef<Path>>(
    path: P,
    grid_size: usize,
) -> Result<Vec<ClueEntry>, CrosswordError> {
    let path_ref = path.as_ref();
    let data = std::fs::read_to_string(path_ref).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to read clue list from '{}': {}", path_ref.display(), e),
        )
    })?;
    validate_and_filter(parse_from_str(&data), grid_size)
}

/// Keep answers of length `MIN_ANSWER_LEN..=grid_size`, drop duplicates.
///
/// Skipped entries are reported on the warning stream; an empty result is
/// an input error.
pub fn validate_and_filter(
    entries: Vec<ClueEntry>,
    grid_size: usize,
) -> Result<Vec<ClueEntry>, CrosswordError> {
    let mut seen: Vec<&str> = Vec::with_capacity(entries.len());
    let mut result: Vec<ClueEntry> = Vec::with_capacity(entries.len());

    for entry in &entries {
        if entry.answer.len() < MIN_ANSWER_LEN {
            warn!("skipping '{}' (too short, <{MIN_ANSWER_LEN} letters)", entry.answer);
            continue;
        }
        if entry.answer.len() > grid_size {
            warn!("skipping '{}' (too long for {grid_size}x{grid_size} grid)", entry.answer);
            continue;
        }
        if seen.contains(&entry.answer.as_str()) {
            warn!("duplicate answer '{}', skipping", entry.answer);
            continue;
        }
        seen.push(&entry.answer);
        result.push(entry.clone());
    }

    if result.is_empty() {
        return Err(CrosswordError::Input(
            "no valid clue entries after filtering".to_string(),
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_non_alpha() {
        assert_eq!(normalize_answer("don't!"), Some("DONT".to_string()));
        assert_eq!(normalize_answer("  a b c "), Some("ABC".to_string()));
        assert_eq!(normalize_answer("123"), None);
        assert_eq!(normalize_answer(""), None);
    }

    #[test]
    fn test_parse_two_field_format() {
        let entries = parse_from_str("cat;Feline pet\ndog;Loyal companion");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].answer, "CAT");
        assert_eq!(entries[0].clue, "Feline pet");
        assert_eq!(entries[1].number, 2);
    }

    #[test]
    fn test_parse_three_field_format_keeps_hint() {
        let entries = parse_from_str("7;Feline pet;cat");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].number, 7);
        assert_eq!(entries[0].answer, "CAT");
    }

    #[test]
    fn test_parse_six_field_format_drops_coordinates() {
        let entries = parse_from_str("3;ACROSS;4;7;Feline pet;cat");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].number, 3);
        assert_eq!(entries[0].clue, "Feline pet");
        assert_eq!(entries[0].answer, "CAT");
    }

    #[test]
    fn test_parse_skips_header_and_malformed() {
        let input = "Number;Clue;Answer\nno separator line\n1;Feline pet;cat\n";
        let entries = parse_from_str(input);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].answer, "CAT");
    }

    #[test]
    fn test_filter_drops_short_long_and_duplicate() {
        let entries = parse_from_str("ox;Bovine\ncat;Feline\ncat;Feline again\nhippopotamus;Large mammal");
        let kept = validate_and_filter(entries, 5).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].answer, "CAT");
    }

    #[test]
    fn test_filter_empty_is_input_error() {
        let err = validate_and_filter(vec![], 15).unwrap_err();
        assert!(matches!(err, CrosswordError::Input(_)));
    }
}
