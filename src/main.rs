//! godeps - manage the vendored git dependencies of a Go project
//!
//! Commands:
//! - init: build godeps.json from the project's imports
//! - add / delete / update / list: edit and show godeps.json
//! - sync: clone or pull every dependency into vendor/

use clap::Parser;
use colored::Colorize;
use godeps::cli::{CliArgs, Command};
use godeps::commands::{self, Context};
use godeps::config::Environment;
use godeps::output;
use godeps::progress::Progress;
use godeps::vendor::ShellRunner;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "GODEPS_LOG";

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.log_level());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("godeps={level}")));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let ctx = Context::from_current_dir(Environment::from_env())?;
    let mut progress = Progress::new(!args.quiet);
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Init(init) => {
            let report =
                commands::run_init(&ctx, init.package_setting.as_deref(), &mut progress)?;
            output::write_init_report(&report, &mut stdout)?;
        }
        Command::Add(item) => {
            let added = commands::run_add(&ctx, item.path.as_deref(), item.origin.as_deref())?;
            if !args.quiet {
                writeln!(stdout, "{} {}", "Added".green().bold(), added)?;
            }
        }
        Command::Delete(target) => {
            let path = target.path.as_deref();
            if commands::run_delete(&ctx, path)? {
                if !args.quiet {
                    writeln!(stdout, "{} {}", "Deleted".green().bold(), path.unwrap_or_default())?;
                }
            } else {
                tracing::warn!("the path {} is not in the manifest", path.unwrap_or_default());
            }
        }
        Command::Update(item) => {
            let path = item.path.as_deref();
            if commands::run_update(&ctx, path, item.origin.as_deref())? {
                if !args.quiet {
                    writeln!(stdout, "{} {}", "Updated".green().bold(), path.unwrap_or_default())?;
                }
            } else {
                tracing::warn!("nothing to update for {}", path.unwrap_or_default());
            }
        }
        Command::List(list) => {
            let manifest = commands::run_list(&ctx)?;
            if list.json {
                output::write_json(&manifest, &mut stdout)?;
            } else {
                output::write_list(manifest.items(), &mut stdout)?;
            }
        }
        Command::Sync(target) => {
            let runner = ShellRunner::new(&ctx.work_dir);
            let report =
                commands::run_sync(&ctx, target.path.as_deref(), runner, &mut progress)?;
            if !args.quiet {
                output::write_sync_report(&report, &mut stdout)?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}
