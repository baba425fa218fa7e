use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolate::monte_carlo::run_trial;

/// Parse a number that may have metric suffix (k/K=1000, m/M=1e6)
fn parse_metric_number(s: &str) -> Result<u32, String> {
    if s.is_empty() {
        return Err("Empty string".to_string());
    }

    let (num_part, suffix) = if s.ends_with(|c: char| c.is_ascii_alphabetic()) {
        let last_char = s.chars().last().unwrap();
        (&s[..s.len() - last_char.len_utf8()], Some(last_char))
    } else {
        (s, None)
    };

    let base: f64 = num_part
        .parse()
        .map_err(|e| format!("Invalid number: {e}"))?;

    let multiplier = match suffix {
        Some('k') | Some('K') => 1000.0,
        Some('m') | Some('M') => 1_000_000.0,
        Some(c) => return Err(format!("Unknown suffix '{c}'. Use k/K (1000) or m/M (1e6)")),
        None => 1.0,
    };

    let result = base * multiplier;

    if result > u32::MAX as f64 {
        return Err(format!("Value {result} too large for u32"));
    }

    Ok(result as u32)
}

/// percolate - Monte Carlo percolation simulation on an N-by-N grid
///
/// Opens uniformly random sites on a fresh grid until a chain of open sites
/// spans top to bottom, then prints the open-site fraction for that trial.
/// One fraction per line on stdout; progress goes to stderr.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Grid dimension N (the grid has N*N sites)
    #[clap(short = 'n', long = "grid-size", default_value = "20", value_parser = parse_metric_number)]
    grid_size: u32,

    /// Number of independent trials to run
    #[clap(short = 't', long = "trials", default_value = "1", value_parser = parse_metric_number)]
    trials: u32,

    /// Seed for the random generator (entropy-seeded when absent)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Quiet mode (no progress output)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.grid_size == 0 {
        eprintln!("Error: 0 is not a valid grid size. The grid needs at least one site.");
        std::process::exit(1);
    }

    let n = args.grid_size as usize;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !args.quiet {
        eprintln!("Running {} trial(s) on a {n}x{n} grid...", args.trials);
    }

    for trial in 1..=args.trials {
        let fraction = run_trial(n, &mut rng)?;
        if !args.quiet {
            eprintln!("trial {trial}/{}: percolated at open fraction {fraction:.4}", args.trials);
        }
        println!("{fraction:.6}");
    }

    Ok(())
}
