//! Command-line interface implementation for rebrand.
//! Provides argument parsing and help text using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for rebrand.
///
/// Every value can also come from `--stdin` answers or an interactive
/// prompt; flags given here take precedence over both.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "rebrand: template project copy + rebrand + setup tool", long_about = None)]
pub struct Args {
    /// Project display name (e.g., "My Project")
    #[arg(long)]
    pub name: Option<String>,

    /// Backend port; empty or omitted falls back to 8000
    #[arg(long, value_name = "PORT")]
    pub backend_port: Option<String>,

    /// Frontend port; empty or omitted falls back to 5173
    #[arg(long, value_name = "PORT")]
    pub frontend_port: Option<String>,

    /// Destination directory (copy mode); defaults to a sibling of the
    /// template root named after the kebab-case variant
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Operate on the current directory (no copy)
    #[arg(long)]
    pub in_place: bool,

    /// Skip the copy-mode confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Do not run `make setup` in the target after rebranding
    #[arg(long)]
    pub skip_install: bool,

    /// Get answers from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
