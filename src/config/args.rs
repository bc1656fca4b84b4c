//! Command-line argument parsing

use clap::Parser;

/// Lesson plan and notes generator for Kenyan teachers
#[derive(Debug, Clone, Parser)]
#[command(name = "edunjema", version, about)]
pub struct Args {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// Print a sample configuration file and exit
    #[arg(long = "generate-config")]
    pub generate_config: bool,
}
