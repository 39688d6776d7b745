//! Integration tests for the crossword constructor.
//!
//! These exercise the complete pipeline — template, slot extraction, fill,
//! numbering and clue lists — plus the clue-list placement path, using
//! small hand-checked templates and lexicons.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crossforge::clue;
use crossforge::errors::CrosswordError;
use crossforge::generator::{generate_with, GenerateConfig};
use crossforge::grid::{Direction, Grid};
use crossforge::lexicon::{Lexicon, Pattern, Provenance};
use crossforge::numbering::{build_clue_lists, build_grid, number_grid};
use crossforge::placer::{place_entries, PlacerConfig};
use crossforge::slots::extract_slots;
use crossforge::template::{Template, TemplateSource};

/// A template source that hands out the same stock skeleton every time.
struct StockTemplate(Template);

impl TemplateSource for StockTemplate {
    fn next_template(&mut self, _rng: &mut StdRng) -> Option<Template> {
        Some(self.0.clone())
    }
}

/// A template source whose budget is always exhausted.
struct NeverTemplates;

impl TemplateSource for NeverTemplates {
    fn next_template(&mut self, _rng: &mut StdRng) -> Option<Template> {
        None
    }
}

fn lexicon_of(words: &[&str]) -> Lexicon {
    Lexicon::from_scored_words(
        words
            .iter()
            .map(|w| ((*w).to_string(), 1.0, Provenance::Bank)),
    )
}

/// 5x5 skeleton with a full-width center row and center column.
fn five_by_five() -> Template {
    Template::parse(&["...##", "...##", ".....", "##...", "##..."]).unwrap()
}

/// Words admitting at least one complete fill of [`five_by_five`]:
/// SEA/URN/METED/IRE/CAN across with SUM/ERE/ANTIC/ERA/DEN down, plus a
/// few decoys.
fn five_by_five_lexicon() -> Lexicon {
    lexicon_of(&[
        "SEA", "URN", "METED", "IRE", "CAN", "SUM", "ERE", "ANTIC", "ERA", "DEN",
        // decoys
        "CAT", "DOG", "TEA", "MUD", "OCEAN", "TIGER",
    ])
}

fn small_config(retries: usize) -> GenerateConfig {
    GenerateConfig {
        grid_size: 5,
        retries,
        target_words: 10,
        min_words: 1,
        ..GenerateConfig::default()
    }
}

mod generate_pipeline {
    use super::*;

    #[test]
    fn test_five_by_five_full_pipeline() {
        let template = five_by_five();
        let lexicon = five_by_five_lexicon();
        let placed = generate_with(
            &mut StockTemplate(template.clone()),
            &lexicon,
            None,
            &small_config(4),
        )
        .unwrap();
        assert_eq!(placed.len(), 10);

        let mut grid = build_grid(&placed, 5).unwrap();
        number_grid(&mut grid);
        let (across, down) = build_clue_lists(&grid, &placed);
        assert_eq!(across.len(), 5);
        assert_eq!(down.len(), 5);

        // Every white cell carries a letter; black cells carry nothing.
        for r in 0..5 {
            for c in 0..5 {
                if template.is_black(r, c) {
                    assert_eq!(grid.cell(r, c).letter, None);
                    assert_eq!(grid.cell(r, c).number, None);
                } else {
                    assert!(grid.cell(r, c).letter.is_some());
                }
            }
        }

        // Fill invariant: every maximal white run of length >= 2, read
        // from the grid, is a lexicon word, and no word repeats.
        let words = collect_runs(&grid);
        assert_eq!(words.len(), 10);
        let distinct: HashSet<&String> = words.iter().collect();
        assert_eq!(distinct.len(), words.len());
        for word in &words {
            assert!(lexicon.contains(word), "{word} not in lexicon");
        }
    }

    #[test]
    fn test_numbering_is_monotone_and_contiguous() {
        let template = five_by_five();
        let lexicon = five_by_five_lexicon();
        let placed =
            generate_with(&mut StockTemplate(template), &lexicon, None, &small_config(4)).unwrap();
        let mut grid = build_grid(&placed, 5).unwrap();
        number_grid(&mut grid);

        // Scan order must see 1, 2, 3, ... with no gaps.
        let numbers: Vec<u32> = (0..5)
            .flat_map(|r| (0..5).map(move |c| (r, c)))
            .filter_map(|(r, c)| grid.cell(r, c).number)
            .collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        assert_eq!(numbers, expected);

        let (across, down) = build_clue_lists(&grid, &placed);
        assert!(across.windows(2).all(|w| w[0].number < w[1].number));
        assert!(down.windows(2).all(|w| w[0].number < w[1].number));
    }

    #[test]
    fn test_identical_seed_gives_identical_grid() {
        let lexicon = five_by_five_lexicon();
        let config = GenerateConfig { seed: 42, ..small_config(4) };

        let mut render = Vec::new();
        for _ in 0..2 {
            let placed = generate_with(
                &mut StockTemplate(five_by_five()),
                &lexicon,
                None,
                &config,
            )
            .unwrap();
            let mut grid = build_grid(&placed, 5).unwrap();
            number_grid(&mut grid);
            render.push(grid.to_string());
        }
        assert_eq!(render[0], render[1]);
    }

    #[test]
    fn test_template_exhaustion_reports_after_all_retries() {
        let lexicon = five_by_five_lexicon();
        let err =
            generate_with(&mut NeverTemplates, &lexicon, None, &small_config(7)).unwrap_err();
        match err {
            CrosswordError::Template { attempts } => assert_eq!(attempts, 7),
            other => panic!("unexpected error {other:?}"),
        }
    }

    /// Read every maximal white run of length >= 2 from a filled grid.
    fn collect_runs(grid: &Grid) -> Vec<String> {
        let n = grid.size();
        let mut words = Vec::new();
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
                    word.extend(grid.cell(r, c).letter);
                    c += 1;
                }
                if c - start >= 2 {
                    words.push(word);
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
                    word.extend(grid.cell(r, c).letter);
                    r += 1;
                }
                if r - start >= 2 {
                    words.push(word);
                }
            }
        }
        words
    }
}

mod slot_graph {
    use super::*;

    #[test]
    fn test_extractor_round_trip_after_fill() {
        let template = five_by_five();
        let graph_before = extract_slots(&template);

        let lexicon = five_by_five_lexicon();
        let placed =
            generate_with(&mut StockTemplate(template), &lexicon, None, &small_config(4)).unwrap();
        let mut grid = build_grid(&placed, 5).unwrap();
        number_grid(&mut grid);

        // Rebuild the topology from the filled grid and re-extract: the
        // slot graph must be isomorphic to the original.
        let rows: Vec<String> = grid
            .to_string()
            .lines()
            .map(|line| {
                line.chars()
                    .map(|ch| if ch == '#' { '#' } else { '.' })
                    .collect()
            })
            .collect();
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let rebuilt = Template::parse(&row_refs).unwrap();
        let graph_after = extract_slots(&rebuilt);

        let key = |g: &crossforge::slots::SlotGraph| {
            let mut v: Vec<(Direction, usize, usize, usize)> = g
                .slots
                .iter()
                .map(|s| (s.direction, s.row, s.col, s.len))
                .collect();
            v.sort_unstable_by_key(|&(d, r, c, l)| (d == Direction::Down, r, c, l));
            v
        };
        assert_eq!(key(&graph_before), key(&graph_after));
    }
}

mod template_generation {
    use super::*;

    #[test]
    fn test_standard_sizes_are_accepted() {
        for size in [13usize, 15, 17, 21] {
            let template = (0..10)
                .find_map(|seed| {
                    let mut rng = StdRng::seed_from_u64(seed);
                    Template::generate(size, &mut rng)
                })
                .unwrap_or_else(|| panic!("no template for size {size}"));
            assert_eq!(template.size(), size);
            assert!(template.is_symmetric());

            // Black budget stays in a sane band.
            let fraction = template.black_count() as f64 / (size * size) as f64;
            assert!((0.10..=0.25).contains(&fraction), "fraction {fraction} at size {size}");

            // Every slot is at least 3 long.
            let graph = extract_slots(&template);
            assert!(graph.slots.iter().all(|s| s.len >= 3));
        }
    }
}

mod placement_pipeline {
    use super::*;

    const CLUE_LIST: &str = "\
ocean;Vast water
canoe;Paddled craft
tent;Camper's shelter
cat;Feline pet
net;Fisherman's gear
ten;Perfect score
cot;Camp bed
toe;Foot digit
";

    #[test]
    fn test_clue_list_to_numbered_grid() {
        let entries = clue::validate_and_filter(clue::parse_from_str(CLUE_LIST), 15).unwrap();
        assert_eq!(entries.len(), 8);

        let config = PlacerConfig {
            grid_size: 15,
            seed: 1,
            retries: 5,
            min_placed: 3,
            ..PlacerConfig::default()
        };
        let placed = place_entries(&entries, &config).unwrap();
        assert!(placed.len() >= 3);

        let mut grid = build_grid(&placed, 15).unwrap();
        number_grid(&mut grid);
        let (across, down) = build_clue_lists(&grid, &placed);
        assert_eq!(across.len() + down.len(), placed.len());
        assert!(across.windows(2).all(|w| w[0].number < w[1].number));
        assert!(down.windows(2).all(|w| w[0].number < w[1].number));
    }

    #[test]
    fn test_symmetry_mode_fails_for_small_lists() {
        let entries = clue::validate_and_filter(clue::parse_from_str(CLUE_LIST), 15).unwrap();
        let config = PlacerConfig {
            grid_size: 15,
            seed: 1,
            retries: 5,
            symmetry: true,
            ..PlacerConfig::default()
        };
        let err = place_entries(&entries, &config).unwrap_err();
        assert!(matches!(err, CrosswordError::Placement { .. }));
    }
}

mod clue_input {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_clue_list_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Number;Clue;Answer").unwrap();
        writeln!(file, "1;Feline pet;cat").unwrap();
        writeln!(file, "2;Loyal companion;dog!").unwrap();
        writeln!(file, "3;Too long for the grid;hippopotamus").unwrap();
        file.flush().unwrap();

        let entries = clue::load_from_path(file.path(), 5).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].answer, "CAT");
        assert_eq!(entries[1].answer, "DOG");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = clue::load_from_path("/nonexistent/clues.txt", 15).unwrap_err();
        assert!(matches!(err, CrosswordError::Io(_)));
    }
}

mod lexicon_contract {
    use super::*;

    #[test]
    fn test_query_is_shared_by_both_consumers() {
        // The same (length, pattern) contract drives the fill engine and
        // the placer's crossing lookups.
        let lexicon = five_by_five_lexicon();
        let pattern: Pattern = ".E.".parse().unwrap();
        let found: Vec<&str> = lexicon
            .query(&pattern)
            .map(|e| e.word.as_str())
            .collect();
        assert!(found.contains(&"SEA"));
        assert!(found.contains(&"DEN"));
        assert!(found.contains(&"TEA"));
        assert_eq!(lexicon.count(&pattern), found.len());
    }
}
