//! `bloomfilter` - run bloom filter commands from a file or a terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sfbloom::{run_file, run_interactive, FilterConfig, HasherKind, DEFAULT_PRIME_LIMIT};

/// Bloom filter driven by commands, one per line: `reset`,
/// `insert <str>`, `testmembership <str>` (or `test <str>`), and `exit`
/// when interactive.
#[derive(Parser, Debug)]
#[command(name = "bloomfilter", version, about)]
struct Args {
    /// Number of bits in the filter
    size: Option<usize>,

    /// Number of hash functions
    num_hashers: Option<usize>,

    /// File of commands to run; reads commands from stdin when omitted
    commands_path: Option<PathBuf>,

    /// Hash function variant
    #[arg(long, default_value_t = HasherKind::Sfold)]
    hasher: HasherKind,

    /// Add one to every sfold hash
    #[arg(long)]
    add_one: bool,

    /// Draw hash seeds from the primes below this bound
    #[arg(long, default_value_t = DEFAULT_PRIME_LIMIT)]
    prime_limit: u64,

    /// Seed the random source that picks hash seeds
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let (size, num_hashers) = match (args.size, args.num_hashers) {
        (Some(size), Some(num_hashers)) => (size, num_hashers),
        _ => {
            Args::command().print_help()?;
            return Ok(());
        }
    };

    let mut filter = FilterConfig::new(size, num_hashers)
        .with_hasher(args.hasher)
        .with_add_one(args.add_one)
        .with_prime_limit(args.prime_limit)
        .with_rng_seed(args.seed)
        .build_filter()
        .context("could not build bloom filter")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.commands_path {
        Some(path) => run_file(&path, &mut out, &mut filter)?,
        None => {
            let stdin = io::stdin();
            run_interactive(stdin.lock(), &mut out, &mut filter)
                .context("interactive session failed")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
