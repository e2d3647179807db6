use clap::Parser;
use letterpress_solver::*;
use log::debug;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// Finds the highest-scoring words you can play on a Letterpress board.
///
/// The board is given as three groups of letters that together make up its 25 tiles.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Letters held by the opponent that can still be taken (2 points each).
    opponent: String,

    /// Letters nobody has claimed yet (1 point each).
    unclaimed: String,

    /// Letters that are locked by the opponent or already yours (usable, but worth nothing).
    blocked: String,

    /// Path to a file that contains the dictionary, with words separated by whitespace.
    #[arg(short = 'f', long, default_value = "words.txt")]
    words_file: PathBuf,

    /// How many of the best words to show.
    #[arg(short = 'n', long, default_value_t = DEFAULT_CAPACITY)]
    top: usize,

    /// Search the plain trie instead of collapsing it into a radix tree first.
    #[arg(long)]
    trie: bool,

    /// Look for words using all available cores.
    #[arg(long)]
    parallel: bool,

    /// Report whether the given word is in the dictionary. May be repeated.
    #[arg(long = "check", value_name = "WORD")]
    check: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    debug!("Command line options: {:?}", args);

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SolverError> {
    let start_time = Instant::now();

    let board = Board::new(&args.opponent, &args.unclaimed, &args.blocked)?;
    println!("Available letters: {}", board);

    let form = if args.trie {
        IndexForm::Trie
    } else {
        IndexForm::Radix
    };
    println!("File: {}", args.words_file.display());
    let solver = Solver::from_path(&args.words_file, form)?;
    println!(
        "Successfully loaded dictionary. There are {} possible words.",
        solver.index().len()
    );

    for word in args.check.iter() {
        check_word(&solver, word);
    }

    let enumeration = if args.parallel {
        Enumeration::Parallel
    } else {
        Enumeration::Sequential
    };
    let candidates = solver.candidates(&board, enumeration);
    let num_candidates = candidates.len();
    let top = rank_words(candidates, &board.scorer(), args.top);
    for line in finalist_lines(&top, num_candidates) {
        println!("{}", line);
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn check_word(solver: &Solver, word: &str) {
    if solver.index().contains(&word.to_ascii_lowercase()) {
        println!("{} is in the dictionary!", word);
    } else {
        println!("{} is not in the dictionary :(", word);
    }
}

fn finalist_lines(top: &TopWords, num_candidates: usize) -> Vec<String> {
    if num_candidates == 0 {
        return vec!["No words can be made from these letters.".to_string()];
    }
    let mut lines = vec![format!("Candidate words found: {}", num_candidates)];
    lines.extend(
        top.ranked()
            .map(|(rank, entry)| format!("{}. {} - {}", rank, entry.word, entry.score)),
    );
    lines
}
