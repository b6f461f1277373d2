//! notepress build driver.
//!
//! # Responsibility
//! - Load site configuration and bootstrap logging.
//! - Expose route enumeration and payload generation on the command line.

mod build;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use notepress_core::{default_log_level, init_logging, PageService, SiteConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notepress")]
#[command(about = "Publish a directory of markdown notes as static route payloads", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON site configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content root directory (overrides the config file)
    #[arg(long, global = true, env = "NOTEPRESS_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files (stderr when omitted)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every static path of one route family
    Paths {
        #[arg(value_enum)]
        family: Family,
    },

    /// Print the payload of one folder route (root when no segments)
    Folder {
        /// Folder link segments
        segments: Vec<String>,
    },

    /// Print the payload of one note route
    Note {
        /// Note link segments
        #[arg(required = true)]
        segments: Vec<String>,
    },

    /// Write payloads for every route under an output directory
    Build {
        /// Output directory
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    Folders,
    Notes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_exit module=cli status=error error={err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let config = load_config(cli.config, cli.content_dir)?;
    let service = PageService::from_config(&config).with_context(|| {
        format!(
            "failed to open content root `{}`",
            config.content_dir.display()
        )
    })?;

    match cli.command {
        Commands::Paths { family } => {
            let paths = match family {
                Family::Folders => service.folder_paths()?,
                Family::Notes => service.note_paths()?,
            };
            print_json(&paths)
        }
        Commands::Folder { segments } => {
            print_json(&service.folder_page(Some(segments.as_slice()))?)
        }
        Commands::Note { segments } => print_json(&service.note_page(Some(segments.as_slice()))?),
        Commands::Build { out } => {
            let summary = build::build_site(&service, &out)?;
            println!(
                "built {} folder routes and {} note routes into {}",
                summary.folders,
                summary.notes,
                out.display()
            );
            Ok(())
        }
    }
}

fn load_config(config_path: Option<PathBuf>, content_dir: Option<PathBuf>) -> Result<SiteConfig> {
    let mut config = match config_path {
        Some(path) => SiteConfig::load(&path)?,
        None => SiteConfig::default(),
    };
    if let Some(dir) = content_dir {
        config.content_dir = dir;
    }
    config.validate()?;
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
