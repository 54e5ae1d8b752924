//! CLI that greets people by name.
//!
//! ## Usage
//!
//! ```bash
//! # Greet the default guests (Gladys, Samantha, Darrin)
//! hello
//!
//! # Greet specific names
//! hello Alice Bob
//!
//! # Reproducible greetings
//! hello --seed 7 Alice Bob
//!
//! # JSON output
//! hello --json Alice
//!
//! # Generate shell completions
//! source <(COMPLETE=bash hello)
//! ```

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use greetings::{GreetingError, Greetings, greetings, greetings_with_rng, hello};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Names greeted when none are given on the command line.
const DEFAULT_NAMES: [&str; 3] = ["Gladys", "Samantha", "Darrin"];

/// Prefix for every error reported on stderr.
const ERROR_PREFIX: &str = "greetings: ";

/// Greet people by name with a randomly chosen phrasing
#[derive(Parser, Debug)]
#[command(name = "hello", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Names to greet (defaults to Gladys, Samantha and Darrin)
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Seed the random generator so greetings are reproducible
    #[arg(short, long, value_name = "N")]
    seed: Option<u64>,

    /// Always use the plain "Hi, NAME. Welcome!" greeting
    #[arg(long)]
    simple: bool,

    /// Print greetings as a JSON object
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Enable tab completions by adding one line to your shell config:

  Bash (~/.bashrc):
    source <(COMPLETE=bash hello)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh hello)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish hello | source

EXAMPLES:
  hello                         # greet Gladys, Samantha and Darrin
  hello Alice Bob               # greet Alice and Bob
  hello --seed 7 Alice          # same greeting every run
  hello --simple Alice          # Hi, Alice. Welcome!
  hello --json Alice Bob        # {\"Alice\": ..., \"Bob\": ...}
";

fn main() {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        generate_completions(&shell_name);
        return;
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let names: Vec<String> = if cli.names.is_empty() {
        DEFAULT_NAMES.iter().map(|n| n.to_string()).collect()
    } else {
        cli.names.clone()
    };
    debug!(count = names.len(), seed = ?cli.seed, simple = cli.simple, "greeting names");

    let messages = match build_greetings(&cli, &names) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{ERROR_PREFIX}{e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&messages) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{ERROR_PREFIX}failed to serialize greetings: {e}");
                std::process::exit(1);
            }
        }
    } else {
        for (name, message) in &messages {
            println!("{name}: {message}");
        }
    }
}

/// Generate greetings for `names` according to the CLI flags.
fn build_greetings(cli: &Cli, names: &[String]) -> Result<Greetings, GreetingError> {
    if cli.simple {
        return names
            .iter()
            .map(|name| hello(name).map(|message| (name.clone(), message)))
            .collect();
    }

    match cli.seed {
        Some(seed) => greetings_with_rng(names, &mut StdRng::seed_from_u64(seed)),
        None => greetings(names),
    }
}

/// Set up stderr logging when `RUST_LOG` is set or `--verbose` is passed.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Generate shell completions and exit.
fn generate_completions(shell_name: &str) {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            eprintln!(
                "Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"
            );
            std::process::exit(1);
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "hello", &mut io::stdout());
}
