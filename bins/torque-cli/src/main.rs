//! torque-cli — Evaluate reward distribution functions from the command line.
//!
//! Reads a `DistributionSpec` JSON record (the same wire form the offer
//! backend persists) and prints payout amounts, either at a single point
//! or tabulated over a range. Handy for sanity-checking distributor
//! configuration before an offer goes live.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use torque_distribution::{DistributionSpec, evaluate};

#[derive(Parser)]
#[command(name = "torque-cli", version, about = "Reward distribution-function evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a distribution function at a single point.
    Eval {
        /// Path to a DistributionSpec JSON file, or `-` for stdin.
        #[arg(long)]
        spec: PathBuf,
        /// Value of the independent variable.
        #[arg(long, default_value = "0")]
        x: Decimal,
        /// Round the result to this many decimal places.
        #[arg(long)]
        decimals: Option<u32>,
        /// Points/asymmetric mode: floor the result to a whole number.
        #[arg(long)]
        points: bool,
    },
    /// Tabulate a distribution function over a range of inputs.
    Sample {
        /// Path to a DistributionSpec JSON file, or `-` for stdin.
        #[arg(long)]
        spec: PathBuf,
        /// First input value.
        #[arg(long)]
        from: Decimal,
        /// Last input value (inclusive).
        #[arg(long)]
        to: Decimal,
        /// Number of intervals between `from` and `to`.
        #[arg(long, default_value_t = 10)]
        steps: u32,
        /// Round each result to this many decimal places.
        #[arg(long)]
        decimals: Option<u32>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Eval {
            spec,
            x,
            decimals,
            points,
        } => {
            let spec = load_spec(&spec)?;
            let amount = evaluate(&spec, x, points, decimals)
                .with_context(|| format!("evaluating {} function at x = {x}", spec.kind))?;
            println!("{amount}");
        }
        Command::Sample {
            spec,
            from,
            to,
            steps,
            decimals,
        } => {
            if steps == 0 {
                bail!("--steps must be at least 1");
            }
            let spec = load_spec(&spec)?;
            let span = to - from;
            for i in 0..=steps {
                let x = from + span * Decimal::from(i) / Decimal::from(steps);
                let amount = evaluate(&spec, x, false, decimals)
                    .with_context(|| format!("evaluating {} function at x = {x}", spec.kind))?;
                println!("{x}\t{amount}");
            }
        }
    }

    Ok(())
}

fn load_spec(path: &Path) -> Result<DistributionSpec> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading spec from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading spec from {}", path.display()))?
    };
    let spec: DistributionSpec =
        serde_json::from_str(&raw).context("parsing DistributionSpec JSON")?;
    tracing::debug!(kind = %spec.kind, "loaded distribution spec");
    Ok(spec)
}
