use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use busca::errors::PuzzleError;
use busca::{generator, render, words};

/// Word-search puzzle generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Words to hide, separated by commas, semicolons, or newlines
    /// (e.g., "gato, cachorro; peixe")
    #[arg(required_unless_present = "sample")]
    words: Option<String>,

    /// Grid side length
    #[arg(short = 's', long, default_value_t = 15)]
    size: usize,

    /// Seed for reproducible puzzles (omit for a fresh puzzle each run)
    #[arg(long)]
    seed: Option<u64>,

    /// Reveal the answers: solution letters print uppercase, filler lowercase
    #[arg(short = 'a', long)]
    answers: bool,

    /// Emit the puzzle as JSON instead of rendered text
    #[arg(long)]
    json: bool,

    /// Title printed above the puzzle
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Use a random sample word list instead of providing words
    #[arg(long)]
    sample: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();
    busca::log::init_logger(cli.verbose);

    if let Err(e) = try_main(&cli) {
        // Print the error message to stderr, with detailed formatting if it's a PuzzleError
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the word-search CLI.
///
/// Steps:
/// 1. Collect the word list (from the argument or a built-in sample).
/// 2. Warn about words that can never fit the chosen grid.
/// 3. Generate the puzzle (seeded if requested).
/// 4. Print the puzzle on stdout, as text or JSON.
/// 5. Print placement diagnostics on stderr.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.size == 0 {
        return Err(Box::new(PuzzleError::GridTooSmall { size: cli.size }));
    }

    // 1. Collect the word list
    let word_list = if cli.sample {
        words::sample_words(&mut rand::rng())
    } else {
        // `words` is required unless --sample is given
        words::parse_word_list(cli.words.as_deref().unwrap_or_default())?
    };

    // 2. Pre-flight warning for words the generator is guaranteed to drop
    let oversized = words::oversized_words(&word_list, cli.size);
    if !oversized.is_empty() {
        eprintln!(
            "⚠️  Some words are longer than the grid ({}) and will be skipped: {}",
            cli.size,
            oversized.join(", ")
        );
    }

    // 3. Generate
    let t_generate = Instant::now();
    let puzzle = match cli.seed {
        Some(seed) => generator::generate_word_search_seeded(&word_list, cli.size, seed),
        None => generator::generate_word_search(&word_list, cli.size),
    };
    let generate_secs = t_generate.elapsed().as_secs_f64();

    // 4. Print the puzzle on stdout
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&puzzle).map_err(PuzzleError::Json)?);
    } else {
        if let Some(title) = &cli.title {
            println!("{title}\n");
        }
        print!("{}", render::render_grid(&puzzle, cli.answers));
        println!();
        print!("{}", render::render_word_list(&puzzle));
    }

    // 5. Diagnostics (placement counts, timing) to stderr
    if puzzle.placements.len() < word_list.len() {
        eprintln!(
            "⚠️  Placed {} of {} words; the rest did not fit",
            puzzle.placements.len(),
            word_list.len()
        );
    } else {
        eprintln!("✓ Placed all {} words", puzzle.placements.len());
    }
    eprintln!(
        "Generated a {0}x{0} grid in {1:.3}s.",
        puzzle.size, generate_secs
    );

    Ok(())
}
