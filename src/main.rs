//! Motif discovery CLI
//!
//! Usage:
//!   motif-discovery AbCd AcCb               # Compare two sequences
//!   motif-discovery                         # Prompt for both sequences
//!   motif-discovery AbCd AcCb --json        # JSON report
//!   motif-discovery AbCd AcCb --unique      # Drop repeated patterns

use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use motif_discovery::core::Discovery;
use motif_discovery::types::{DiscoveryConfig, DiscoveryReport, EnumeratorConfig};
use motif_discovery::{DEFAULT_MAX_SEQUENCE_LENGTH, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "motif-discovery",
    version = VERSION,
    about = "Discover shared wildcard motifs between two symbol sequences",
    long_about = "Enumerates every wildcard mask of both sequences, reconciles the\n\
                  canonical forms they share and ranks the resulting patterns.\n\n\
                  Upper case symbols are significant, lower case symbols are plain.\n\n\
                  Notation:\n  \
                  A-b       literal symbols\n  \
                  x(n)      gap of n positions\n  \
                  x(n,m)    gap between n and m positions"
)]
struct Args {
    /// First sequence (prompted for if omitted)
    sequence_a: Option<String>,

    /// Second sequence (prompted for if omitted)
    sequence_b: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show scores and pattern-set sizes
    #[arg(long)]
    verbose: bool,

    /// Reject sequences longer than this
    #[arg(long, default_value_t = DEFAULT_MAX_SEQUENCE_LENGTH)]
    max_length: usize,

    /// Only keep canonical forms, not raw masked sequences
    #[arg(long)]
    no_raw: bool,

    /// Drop repeated patterns
    #[arg(long)]
    unique: bool,

    /// Show only the N best patterns
    #[arg(long)]
    top: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = DiscoveryConfig {
        enumerator: EnumeratorConfig {
            max_sequence_length: args.max_length,
            emit_raw: !args.no_raw,
        },
        unique_patterns: args.unique,
        top: args.top,
    };

    let discovery = match Discovery::with_config(config) {
        Ok(discovery) => discovery,
        Err(e) => fail(&e.to_string()),
    };

    let (seq_a, seq_b) = match (args.sequence_a.clone(), args.sequence_b.clone()) {
        (Some(a), Some(b)) => (a, b),
        _ => match prompt_sequences() {
            Ok(pair) => pair,
            Err(e) => fail(&format!("Could not read sequences: {}", e)),
        },
    };

    match discovery.run(&seq_a, &seq_b) {
        Ok(report) => print_report(&report, &args),
        Err(e) => fail(&e.to_string()),
    }
}

/// Print error and exit
fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Ask for both sequences on stdin
fn prompt_sequences() -> io::Result<(String, String)> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter sequence 1:");
    let a = read_sequence(&mut lines)?;
    println!("Enter sequence 2:");
    let b = read_sequence(&mut lines)?;
    Ok((a, b))
}

/// Read lines until a non-empty one arrives
fn read_sequence<I>(lines: &mut I) -> io::Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut stdout = io::stdout();
    loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")),
        };
        let line = line.trim();
        if line.is_empty() {
            println!("Please enter a valid sequence");
            stdout.flush()?;
            continue;
        }
        println!("Sequence entered: {}", line);
        return Ok(line.to_string());
    }
}

fn print_report(report: &DiscoveryReport, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e.to_string()),
        }
    } else if args.no_color {
        print!("{}", report.to_parseable_string(args.verbose));
    } else {
        println!("{}", report.to_terminal_string(args.verbose));
    }
}
