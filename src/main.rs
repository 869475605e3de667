//! Bobble Solver - CLI
//!
//! Deal boards, look for words on them, and explore them in a TUI.

use anyhow::Result;
use bobble_solver::{
    commands::{check_words, list_words, prepare_board, resolve_size, run_benchmark},
    core::Board,
    dictionary::TrieDictionary,
    output::{print_benchmark_result, print_board, print_check_results, print_word_list},
    solver::Solver,
    wordlists::{EMBEDDED, loader::load_from_file},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bobble",
    about = "Bobble board generator and word finder",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board size (rows and columns); defaults to the size of --board, else 5
    #[arg(
        short,
        long,
        global = true,
        value_parser = clap::value_parser!(u8).range(3..=8)
    )]
    size: Option<u8>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Use this board instead of dealing one (letters in row-major order;
    /// its length sets the size unless --size is given)
    #[arg(short, long, global = true)]
    board: Option<String>,

    /// Seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Print a board
    New,

    /// Look for specific words on the board
    Check {
        /// Words to look for
        #[arg(required = true)]
        words: Vec<String>,

        /// Draw the board with each found path
        #[arg(long)]
        boards: bool,
    },

    /// List every word on the board
    Words {
        /// Only print the first N words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search many random boards
    Benchmark {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Build the dictionary named by the -w flag
fn load_dictionary(wordlist: &str) -> Result<TrieDictionary> {
    let dict = match wordlist {
        "embedded" => TrieDictionary::from_words(EMBEDDED),
        path => TrieDictionary::from_words(load_from_file(path)?),
    };
    if dict.is_empty() {
        anyhow::bail!("Wordlist '{wordlist}' contains no usable words");
    }
    Ok(dict)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let size = resolve_size(cli.size.map(usize::from), cli.board.as_deref());
    let dict = load_dictionary(&cli.wordlist)?;
    let solver = Solver::new(&dict);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let board = board_for(cli.board.as_deref(), size, cli.seed)?;
            run_play_command(solver, board)
        }
        Commands::New => {
            print_board(&board_for(cli.board.as_deref(), size, cli.seed)?, &[]);
            Ok(())
        }
        Commands::Check { words, boards } => {
            let board = board_for(cli.board.as_deref(), size, cli.seed)?;
            print_board(&board, &[]);
            let results =
                check_words(&solver, &board, &words).map_err(|e| anyhow::anyhow!(e))?;
            print_check_results(&board, &results, boards);
            Ok(())
        }
        Commands::Words { limit } => {
            let board = board_for(cli.board.as_deref(), size, cli.seed)?;
            print_board(&board, &[]);
            let result = list_words(&solver, &board).map_err(|e| anyhow::anyhow!(e))?;
            print_word_list(&result, limit);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let seed = cli.seed.unwrap_or(0);
            println!("Searching {count} random {size}×{size} boards (seed {seed})...");
            let result = run_benchmark(&solver, size, count, seed, true)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn board_for(literal: Option<&str>, size: usize, seed: Option<u64>) -> Result<Board> {
    prepare_board(size, literal, seed).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(solver: Solver<'_, TrieDictionary>, board: Board) -> Result<()> {
    use bobble_solver::interactive::{App, run_tui};

    let app = App::new(solver, board);
    run_tui(app)
}
