use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sforge",
    about = "Planar skeleton layout to 3-D coordinates with implicit hydrogens",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    #[command(flatten)]
    pub io: IoOptions,

    /// Output format (inferred from extension if not specified)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    #[command(flatten)]
    pub geometry: GeometryOptions,

    /// Log pipeline diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// I/O options.
#[derive(Args)]
pub struct IoOptions {
    /// Skeleton graph file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file(s), repeatable for multi-format output
    #[arg(short, long, value_name = "FILE", action = ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Geometry parameter options.
#[derive(Args)]
#[command(next_help_heading = "Geometry")]
pub struct GeometryOptions {
    /// Custom geometry parameters (TOML file)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Reference C–C bond length (Å), overrides --params
    #[arg(long = "cc-bond", value_name = "Å")]
    pub cc_bond: Option<f64>,

    /// C–H bond length for synthesized hydrogens (Å), overrides --params
    #[arg(long = "ch-bond", value_name = "Å")]
    pub ch_bond: Option<f64>,

    /// Name prefix for synthesized hydrogens, overrides --params
    #[arg(long = "h-prefix", value_name = "PREFIX")]
    pub hydrogen_prefix: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Xyz,
    Sdf,
}

pub fn parse() -> Cli {
    Cli::parse()
}
