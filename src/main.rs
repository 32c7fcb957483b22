use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wordbrain_solver::config::{Execution, SearchConfig};
use wordbrain_solver::errors::SolverError;
use wordbrain_solver::region_search::SearchPool;
use wordbrain_solver::session::Session;
use wordbrain_solver::utilities::{load_dictionary, load_grid, parse_word_lengths};

/// Find every word of the requested lengths hidden in a letter grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(short, long)]
    dictionary: PathBuf,

    /// Grid file, one row per line; '-' marks a blocked cell
    #[arg(short, long)]
    grid: PathBuf,

    /// Word lengths to find (repeat the flag or separate with commas)
    #[arg(short, long = "length", required = true, allow_hyphen_values = true)]
    lengths: Vec<String>,

    /// JSON search configuration; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worker pool size (defaults to the available parallelism)
    #[arg(short, long)]
    threads: Option<usize>,

    /// How many word lengths are searched at once
    #[arg(long)]
    request_workers: Option<usize>,

    /// Search each grid on a single thread
    #[arg(long)]
    sequential: bool,

    /// Explore every path instead of abandoning dead prefixes
    #[arg(long)]
    no_prune: bool,

    /// Largest region scanned without splitting
    #[arg(long)]
    max_leaf_area: Option<usize>,

    /// Largest cells-per-letter ratio scanned without splitting
    #[arg(long)]
    max_area_per_letter: Option<f64>,

    /// Print the words grouped by length as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    wordbrain_solver::log::init_logger(wordbrain_solver::log::debug_requested());

    if let Err(e) = try_main() {
        eprintln!("Error [{}]: {}", e.code(), e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), SolverError> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let t_load = Instant::now();
    let dictionary = load_dictionary(&cli.dictionary)?;
    let grid = load_grid(&cli.grid)?;
    let lengths = parse_word_lengths(&cli.lengths)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    info!(
        "read {} words and a {}x{} grid",
        dictionary.len(),
        grid.rows(),
        grid.cols()
    );

    let pool = SearchPool::from_config(&config)?;
    let session = Session::new(&grid, &dictionary, &pool, config);

    let t_solve = Instant::now();
    let found_count = if cli.json {
        let by_length = session.find_words_by_length(&lengths);
        let json = serde_json::to_string_pretty(&by_length).map_err(SolverError::OutputFormat)?;
        println!("{json}");
        by_length.values().map(|found| found.len()).sum::<usize>()
    } else {
        let found = session.find_all_words(&lengths);
        for word in &found {
            println!("{word}");
        }
        found.len()
    };
    let solve_secs = t_solve.elapsed().as_secs_f64();

    eprintln!(
        "Loaded {} words in {:.3}s; found {} words in {:.3}s using {} threads.",
        dictionary.len(),
        load_secs,
        found_count,
        solve_secs,
        pool.num_threads()
    );

    Ok(())
}

/// configuration file (if any) with command-line overrides applied
fn build_config(cli: &Cli) -> Result<SearchConfig, SolverError> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::default(),
    };

    if cli.threads.is_some() {
        config.num_threads = cli.threads;
    }
    if cli.request_workers.is_some() {
        config.request_workers = cli.request_workers;
    }
    if cli.sequential {
        config.execution = Execution::Sequential;
    }
    if cli.no_prune {
        config.prune_prefixes = false;
    }
    if let Some(max_leaf_area) = cli.max_leaf_area {
        config.split_policy.max_leaf_area = max_leaf_area;
    }
    if let Some(max_area_per_letter) = cli.max_area_per_letter {
        config.split_policy.max_area_per_letter = max_area_per_letter;
    }

    config.validate()?;
    Ok(config)
}
