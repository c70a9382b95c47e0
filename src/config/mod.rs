//! Configuration management

use crate::types::HdtpError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default output folder name, created next to where hdtp is run
pub const DEFAULT_COMBINED_DIR: &str = "Combined_Files";

/// Texture Pack File Management
#[derive(Debug, Parser)]
#[command(name = "hdtp", version, about)]
pub struct Cli {
    /// Base path where all texture folders are located
    #[arg(long, value_name = "PATH")]
    pub base_path: PathBuf,

    /// Output directory [default: ./Combined_Files]
    #[arg(long, value_name = "PATH")]
    pub combined_dir: Option<PathBuf>,

    /// Skip confirmation prompts
    #[arg(long)]
    pub skip_confirm: bool,

    /// Copy implementation to use
    #[arg(long, value_enum, default_value_t = CopierKind::Native)]
    pub copier: CopierKind,

    /// Show the plan without copying or deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Which recursive copy facility backs the tree copier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CopierKind {
    /// Built-in merge copy, works everywhere
    #[default]
    Native,
    /// Windows `robocopy /s`
    Robocopy,
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the numbered texture pack folders
    pub base_path: PathBuf,

    /// Directory every pack is merged into
    pub combined_dir: PathBuf,

    /// Suppress the acknowledgement prompts before copying
    pub skip_confirm: bool,

    pub copier: CopierKind,

    /// Dry run (show plan, don't execute)
    pub dry_run: bool,

    /// Log verbosity, 0 = warnings only
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::new(),
            combined_dir: PathBuf::from(DEFAULT_COMBINED_DIR),
            skip_confirm: false,
            copier: CopierKind::Native,
            dry_run: false,
            verbose: 0,
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = HdtpError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.base_path.as_os_str().is_empty() {
            return Err(HdtpError::Config("--base-path must not be empty".to_string()));
        }

        let combined_dir = match cli.combined_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                return Err(HdtpError::Config(
                    "--combined-dir must not be empty".to_string(),
                ))
            }
            Some(dir) => dir,
            None => std::env::current_dir()?.join(DEFAULT_COMBINED_DIR),
        };

        Ok(Self {
            base_path: cli.base_path,
            combined_dir,
            skip_confirm: cli.skip_confirm,
            copier: cli.copier,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }
}
