//! CLI argument parsing module for godeps

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Manage the dependent packages of a Go project
#[derive(Parser, Debug, Clone)]
#[command(
    name = "godeps",
    version,
    about = "The tool for manage the dependent packages for go project"
)]
pub struct CliArgs {
    /// Increase logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Init godeps.json according to the external packages of the project
    Init(InitArgs),
    /// Add one dependency to godeps.json
    Add(ItemArgs),
    /// Delete one dependency from godeps.json
    Delete(PathArgs),
    /// Update the origin of the dependency with the given path
    Update(ItemArgs),
    /// List all the dependencies in godeps.json
    List(ListArgs),
    /// Clone or pull the dependencies into the vendor directory
    Sync(PathArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Path of the package setting json file
    #[arg(short = 's', long = "packagesetting", visible_alias = "ps")]
    pub package_setting: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ItemArgs {
    /// Import path of the package
    #[arg(short, long)]
    pub path: Option<String>,

    /// Git origin of the package
    #[arg(short, long)]
    pub origin: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Import path of the package
    #[arg(short, long)]
    pub path: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Print the manifest as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
