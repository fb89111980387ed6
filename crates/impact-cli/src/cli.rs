//! CLI argument definitions for the impact-study tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "impact-study",
    version,
    about = "Impact Study - Quasi-experimental effect estimation for panel data",
    long_about = "Estimate causal treatment effects from region x time panel data.\n\n\
                  Computes a difference-in-differences estimate and a weighted\n\
                  synthetic-control estimate, then publishes a plain-text study report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full study pipeline and publish the report.
    Study(StudyArgs),

    /// Print the DiD effect and a post-period t-test without writing files.
    Analyze(AnalyzeArgs),

    /// List the regions of a dataset with treatment status.
    Regions(RegionsArgs),
}

#[derive(Parser)]
pub struct StudyArgs {
    /// Path to the panel dataset CSV (columns: region, time, treatment, outcome).
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Output directory for generated files (default: <DATASET dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Pre-treatment time marker.
    #[arg(long = "pre", default_value_t = 0.0)]
    pub pre: f64,

    /// Post-treatment time marker.
    #[arg(long = "post", default_value_t = 1.0)]
    pub post: f64,

    /// Treated region to build the synthetic control for.
    ///
    /// Defaults to the first treated region by name order when several
    /// regions carry the treatment flag.
    #[arg(long = "treated-region", value_name = "REGION")]
    pub treated_region: Option<String>,

    /// Estimate and report to stdout without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the panel dataset CSV.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Pre-treatment time marker.
    #[arg(long = "pre", default_value_t = 0.0)]
    pub pre: f64,

    /// Post-treatment time marker.
    #[arg(long = "post", default_value_t = 1.0)]
    pub post: f64,
}

#[derive(Parser)]
pub struct RegionsArgs {
    /// Path to the panel dataset CSV.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
