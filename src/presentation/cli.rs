//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--root, --format, --color, --verbose) are inherited by all subcommands
//! - Running without a subcommand is the same as `check` with no arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorMode, OutputFormat};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// GitHub workflow commands when GITHUB_ACTIONS=true, console otherwise
    Auto,
    Github,
    Console,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Auto => OutputFormat::Auto,
            FormatArg::Github => OutputFormat::Github,
            FormatArg::Console => OutputFormat::Console,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Pinwarden - checks that CI action references are pinned to commit SHAs
#[derive(Parser, Debug)]
#[command(name = "pinwarden")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'pinwarden' without arguments to check the current repository.")]
pub struct Cli {
    /// Repository root to scan
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check workflow and action files for unpinned references
    Check(CheckArgs),

    /// Print the shape and references of each file (debugging)
    #[command(hide = true)]
    Parse {
        /// Files to parse instead of discovering them
        files: Vec<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckArgs {
    /// Allow-listed reference prefix (repeatable, replaces configured entries)
    #[arg(long = "allowlist", value_name = "PREFIX")]
    pub allowlist: Vec<String>,

    /// Report violations as warnings and exit successfully
    #[arg(long)]
    pub dry_run: bool,

    /// Fail when a file has no jobs, runs or steps
    #[arg(long)]
    pub strict_structure: bool,

    /// Directory holding workflow files, relative to the root
    #[arg(long, value_name = "DIR")]
    pub workflows_dir: Option<PathBuf>,

    /// Directory holding action definitions, relative to the root
    #[arg(long, value_name = "DIR")]
    pub actions_dir: Option<PathBuf>,

    /// Only check files named action.yml or action.yaml below the actions directory
    #[arg(long)]
    pub action_files_only: bool,

    /// Files to check instead of discovering them
    pub files: Vec<PathBuf>,
}
