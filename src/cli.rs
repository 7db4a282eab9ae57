/// CLI argument definitions for the `tf` command.
///
/// Defines all subcommands and their arguments using the `clap` derive
/// macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use truck_factor::config::Overrides;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "tf", version, about = "Truck factor estimation from git history")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG also works
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command.
#[derive(Args)]
pub struct CommonArgs {
    /// Repository to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Starting reference for the history (default: HEAD)
    #[arg(long)]
    pub rev: Option<String>,

    /// Configuration file (default: .truckfactor.toml in the analyzed directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum share of distinct files for an extension to count as source code
    #[arg(long)]
    pub language_threshold: Option<f64>,

    /// Parallel git/parse workers (default: number of CPUs, at most 32)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Thresholds used by the ownership analyses.
#[derive(Args)]
pub struct ThresholdArgs {
    /// Normalized DOA at which an author owns a file (default: 0.75)
    #[arg(long)]
    pub authorship_threshold: Option<f64>,

    /// Fraction of owned files that must lose all owners (default: 0.5)
    #[arg(long)]
    pub orphan_threshold: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the truck factor of a repository
    #[command(long_about = "\
Compute the truck factor: the minimum number of authors whose departure
leaves a critical share of the source files without a knowledgeable owner.

Each author's Degree of Authorship (DOA) on each file is

  DOA = 3.293 + 1.098 * FA + 0.164 * DL - 0.321 * ln(1 + AC)

where FA = 1 for the file's first author, DL = the author's lines added and
deleted, AC = lines added and deleted by everybody else. Scores are
normalized per file so the top author has 1.0.

An author owns a file when the normalized DOA reaches the authorship
threshold. Top owners are removed one at a time until the files still owned
drop to (owned files x orphan threshold).

Only files tracked at HEAD whose extension is a dominant programming
language are analyzed. Requires the git executable.

Examples:
  tf factor                               # current repository
  tf factor ../project --json             # machine-readable output
  tf factor --authorship-threshold 0.7 --orphan-threshold 0.5")]
    Factor {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Show the normalized Degree of Authorship per file and author
    Doa {
        #[command(flatten)]
        common: CommonArgs,

        /// Show only the top N rows (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Show which file extensions are treated as source code
    Languages {
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl CommonArgs {
    pub fn overrides(&self, thresholds: Option<&ThresholdArgs>) -> Overrides {
        Overrides {
            authorship_threshold: thresholds.and_then(|t| t.authorship_threshold),
            orphan_threshold: thresholds.and_then(|t| t.orphan_threshold),
            language_threshold: self.language_threshold,
            workers: self.workers,
        }
    }
}
