//! Wordle Cluster Solver - CLI
//!
//! Suggests guesses interactively, solves given answers, and measures how a
//! ranking performs over a whole answer list.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_clusters::{
    commands::{
        AverageConfig, OpenersConfig, PlayOutcome, analyze_guess, rank_openers, resolve_opening,
        run_average, run_play, solve_word,
    },
    output::{
        logger, print_analysis_result, print_average_result, print_openers, print_solve_result,
    },
    solver::{GameState, Objective, Ranking, Score, SolverConfig},
    wordlists::load_game_lists,
};

#[derive(Parser)]
#[command(
    name = "wordle_clusters",
    about = "Wordle solver that picks the guess leaving the smallest expected candidate set",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File of possible answers, one word per line
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// File of extra allowed guesses; the answers are always allowed too
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Allow guesses that ignore earlier clues
    #[arg(long, global = true)]
    easy: bool,

    /// Guesses allowed before a game counts as lost
    #[arg(long, global = true, default_value_t = 8)]
    max_rounds: usize,

    /// Ranking objective: expected-size, worst-case or entropy
    #[arg(long, global = true, default_value_t = Objective::ExpectedSize)]
    objective: Objective,

    /// Do not favor guesses that could be the answer on a tie
    #[arg(long, global = true)]
    no_prefer_candidates: bool,

    /// First guess to play (default: salet when it is allowed)
    #[arg(short = 'f', long, global = true)]
    opening: Option<String>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: suggest guesses and read back the feedback (default)
    Play,

    /// Solve a specific answer
    Solve {
        /// The answer to solve
        word: String,

        /// Show candidate counts and scores for each guess
        #[arg(short, long)]
        details: bool,
    },

    /// Average guess count over every answer, or a random sample
    Average {
        /// Number of random answers to play
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for the random sample
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Score one guess against all answers
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of clusters to list
        #[arg(short, long, default_value_t = 10)]
        clusters: usize,
    },

    /// Rank first guesses
    Openers {
        /// Ranked guesses to pass over
        #[arg(long, default_value_t = 0)]
        skip: usize,

        /// Ranked guesses to show
        #[arg(short = 'n', long, default_value_t = 20)]
        take: usize,

        /// Play every answer with each shown guess
        #[arg(short, long)]
        simulate: bool,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        let ranking =
            Ranking::new(self.objective).with_prefer_candidates(!self.no_prefer_candidates);
        SolverConfig::default()
            .with_hard_mode(!self.easy)
            .with_max_rounds(self.max_rounds)
            .with_ranking(ranking)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose).context("cannot install logger")?;

    let answers = cli
        .answers
        .as_deref()
        .context("an answer list is required (--answers <FILE>)")?;
    let (answers, options) = load_game_lists(answers, cli.guesses.as_deref())?;
    info!("answers: {answers}");
    info!("options: {options}");

    let config = cli.solver_config();
    let initial = GameState::new(answers, options)?.with_ranking(config.ranking);
    let opening = resolve_opening(&initial, cli.opening.as_deref())?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&initial, opening.as_ref(), &config),
        Commands::Solve { word, details } => {
            let result = solve_word(&word, &initial, opening.as_ref(), &config)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Average { sample, seed } => {
            let average = AverageConfig {
                sample,
                seed,
                show_progress: true,
            };
            let result = run_average(&initial, opening.as_ref(), &average, &config)?;
            print_average_result(&result);
            Ok(())
        }
        Commands::Analyze { word, clusters } => {
            let result = analyze_guess(&initial, &word, config.hard_mode)?;
            print_analysis_result(&result, clusters);
            Ok(())
        }
        Commands::Openers {
            skip,
            take,
            simulate,
        } => {
            let openers = OpenersConfig {
                skip,
                take,
                simulate,
                show_progress: true,
            };
            let results = rank_openers(&initial, &openers, &config)?;
            print_openers(&results);
            Ok(())
        }
    }
}

fn run_play_command(
    initial: &GameState,
    opening: Option<&Score>,
    config: &SolverConfig,
) -> Result<()> {
    println!("{}", initial.candidates().to_string().bright_black());
    let stdin = io::stdin();
    let outcome = run_play(initial, opening, config, stdin.lock(), io::stdout().lock())?;
    if outcome == PlayOutcome::Quit {
        info!("session ended without a solution");
    }
    Ok(())
}
