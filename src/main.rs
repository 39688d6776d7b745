use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{info, warn};

use crossforge::clue::{self, NumberedClue};
use crossforge::errors::CrosswordError;
use crossforge::generator::{self, GenerateConfig};
use crossforge::grid::Grid;
use crossforge::lexicon::{self, Lexicon};
use crossforge::logging;
use crossforge::numbering;
use crossforge::placer::{self, PlacerConfig};
use crossforge::svg;

/// Conventional bulk dictionary tried when none is given explicitly.
const SYSTEM_DICTIONARY: &str = "/usr/share/dict/words";

/// Crossword puzzle constructor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Clue list file, one `answer;clue` (or `number;clue;answer`) per
    /// line. Not needed with --generate.
    input: Option<PathBuf>,

    /// Output path; sibling puzzle/answer SVGs are derived from its stem
    /// (default: crossword.pdf, or the input with a .pdf extension)
    output: Option<PathBuf>,

    /// Generate a newspaper-style crossword from the built-in word bank
    #[arg(long)]
    generate: bool,

    /// Grid size N for an NxN puzzle (default: 15 for --generate, auto
    /// for clue-list input)
    #[arg(long)]
    grid_size: Option<usize>,

    /// Title printed above the clue lists
    #[arg(long, default_value = "CROSSWORD")]
    title: String,

    /// Random seed (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Placement/fill attempts (default: 20)
    #[arg(long, default_value_t = 20)]
    retries: usize,

    /// Enforce 180-degree rotational symmetry of placements
    #[arg(long)]
    symmetry: bool,

    /// Bulk dictionary file for generate mode, one word per line
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Verbose diagnostics
    #[arg(long)]
    debug: bool,
}

/// Entry point: delegate to [`try_main`], print any error in a
/// user-friendly way, and exit nonzero so scripts can detect failure.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.debug);

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: &Cli) -> Result<(), CrosswordError> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let t0 = Instant::now();

    let (grid, across, down) = if cli.generate {
        run_generate_mode(cli, seed)?
    } else {
        run_clue_list_mode(cli, seed)?
    };

    write_outputs(cli, &grid, &across, &down)?;

    info!(
        "grid density {:.0}%, time {:.1}s",
        grid.density() * 100.0,
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Generate mode: built-in bank + bulk dictionary → template fill.
fn run_generate_mode(
    cli: &Cli,
    seed: u64,
) -> Result<(Grid, Vec<NumberedClue>, Vec<NumberedClue>), CrosswordError> {
    let grid_size = cli.grid_size.unwrap_or(15);
    info!("generating {grid_size}x{grid_size} crossword (seed={seed})");

    let dictionary = match &cli.dictionary {
        // An explicitly named dictionary must exist.
        Some(path) => lexicon::read_word_file(path)
            .map_err(|e| CrosswordError::Lexicon(e.to_string()))?,
        None if Path::new(SYSTEM_DICTIONARY).exists() => {
            lexicon::read_word_file(SYSTEM_DICTIONARY)?
        }
        None => {
            warn!("no bulk dictionary found at {SYSTEM_DICTIONARY}; using the built-in bank only");
            Vec::new()
        }
    };
    let lexicon = Lexicon::from_sources(&dictionary, None, None)?;

    let config = GenerateConfig {
        grid_size,
        seed,
        retries: cli.retries,
        ..GenerateConfig::default()
    };
    let placed = generator::generate(&lexicon, None, &config)?;

    let mut grid = numbering::build_grid(&placed, grid_size)?;
    numbering::number_grid(&mut grid);
    let (across, down) = numbering::build_clue_lists(&grid, &placed);
    info!("generated {} words", placed.len());
    Ok((grid, across, down))
}

/// Clue-list mode: user-supplied answers → greedy placement.
fn run_clue_list_mode(
    cli: &Cli,
    seed: u64,
) -> Result<(Grid, Vec<NumberedClue>, Vec<NumberedClue>), CrosswordError> {
    let Some(input) = &cli.input else {
        return Err(CrosswordError::Input(
            "input clue list is required (or use --generate)".to_string(),
        ));
    };

    let data = std::fs::read_to_string(input).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to read clue list from '{}': {}", input.display(), e),
        )
    })?;
    let parsed = clue::parse_from_str(&data);

    let grid_size = match cli.grid_size {
        Some(size) => size,
        None => {
            let size = placer::derive_grid_size(&parsed);
            info!("auto grid size: {size}x{size}");
            size
        }
    };
    let clues = clue::validate_and_filter(parsed, grid_size)?;
    info!("read {} valid clue entries", clues.len());

    let config = PlacerConfig {
        grid_size,
        seed,
        retries: cli.retries,
        symmetry: cli.symmetry,
        ..PlacerConfig::default()
    };
    let placed = placer::place_entries(&clues, &config)?;

    for clue in &clues {
        if !placed.iter().any(|p| p.answer == clue.answer) {
            warn!("could not place '{}'", clue.answer);
        }
    }

    let mut grid = numbering::build_grid(&placed, grid_size)?;
    numbering::number_grid(&mut grid);
    let (across, down) = numbering::build_clue_lists(&grid, &placed);
    info!("placed {}/{} words", placed.len(), clues.len());
    Ok((grid, across, down))
}

/// Emit everything downstream of the core: puzzle and answer SVGs next to
/// the output path, and the clue lists on stdout. The print-ready PDF is
/// produced by the external renderer from the same grid, lists and title.
fn write_outputs(
    cli: &Cli,
    grid: &Grid,
    across: &[NumberedClue],
    down: &[NumberedClue],
) -> Result<(), CrosswordError> {
    let output = cli
        .output
        .clone()
        .or_else(|| cli.input.as_ref().map(|p| p.with_extension("pdf")))
        .unwrap_or_else(|| PathBuf::from("crossword.pdf"));

    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "crossword".to_string());
    let dir = output.parent().map(Path::to_path_buf).unwrap_or_default();

    let puzzle_path = dir.join(format!("{stem}_puzzle.svg"));
    let answer_path = dir.join(format!("{stem}_answer.svg"));
    svg::write_puzzle_svg(grid, &puzzle_path)?;
    svg::write_answer_svg(grid, &answer_path)?;
    info!("output: {}", puzzle_path.display());
    info!("output: {}", answer_path.display());

    println!("{}", cli.title);
    println!("\nACROSS");
    for clue in across {
        println!("{:>3}. {}", clue.number, clue.clue);
    }
    println!("\nDOWN");
    for clue in down {
        println!("{:>3}. {}", clue.number, clue.clue);
    }

    Ok(())
}
