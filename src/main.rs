use anyhow::Result;
use oa_media_importer::config::{find_config_file, load_config, Config};
use oa_media_importer::models::ArticleDocument;
use oa_media_importer::ArticleStream;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clap::{Parser, Subcommand};

/// Open Access Media Importer - extract metadata and media references from article archives
#[derive(Parser, Debug)]
#[command(name = "oami")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract metadata and media references from scholarly article archives", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stream article records from an archive directory as JSON lines
    #[command(alias = "ls")]
    List {
        /// Directory holding the archive volumes (default: from configuration)
        directory: Option<PathBuf>,

        /// Include articles without a free license
        #[arg(long)]
        all: bool,

        /// Skip supplementary material extraction
        #[arg(long)]
        no_supplementary: bool,
    },

    /// Summarize license resolution over an archive directory
    #[command(alias = "lic")]
    Licenses {
        /// Directory holding the archive volumes (default: from configuration)
        directory: Option<PathBuf>,
    },
}

/// One output line: the entry name alongside the extracted record.
#[derive(Serialize)]
struct Record<'a> {
    name: &'a str,
    #[serde(flatten)]
    article: &'a ArticleDocument,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("oa_media_importer={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    match cli.command {
        Some(Commands::List {
            directory,
            all,
            no_supplementary,
        }) => {
            let directory = directory.unwrap_or_else(|| config.archives.directory.clone());
            let supplementary = !no_supplementary && config.extraction.supplementary_materials;
            let keep_non_free = all || config.extraction.keep_non_free;
            run_list(&directory, supplementary, keep_non_free)
        }

        Some(Commands::Licenses { directory }) => {
            let directory = directory.unwrap_or_else(|| config.archives.directory.clone());
            run_licenses(&directory)
        }

        None => {
            // No command provided - show help
            println!("No command provided. Use --help for usage information.");
            println!("Common commands:");
            println!("  list <dir>      - Stream article records as JSON lines");
            println!("  licenses <dir>  - Summarize license resolution");
            Ok(())
        }
    }
}

fn run_list(directory: &Path, supplementary: bool, keep_non_free: bool) -> Result<()> {
    let mut seen = HashSet::new();
    let stream = ArticleStream::open(directory, &mut seen, supplementary)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for item in stream {
        match item {
            Ok((name, article)) => {
                if !keep_non_free && !article.has_free_license() {
                    tracing::debug!("Skipping non-free article {}", name);
                    continue;
                }
                serde_json::to_writer(
                    &mut out,
                    &Record {
                        name: &name,
                        article: &article,
                    },
                )?;
                out.write_all(b"\n")?;
            }
            Err(err) => {
                failures += 1;
                tracing::error!("{}", err);
            }
        }
    }

    if failures > 0 {
        tracing::warn!("{} entries could not be processed", failures);
    }
    Ok(())
}

fn run_licenses(directory: &Path) -> Result<()> {
    let mut seen = HashSet::new();
    let stream = ArticleStream::open(directory, &mut seen, false)?;

    let mut total = 0usize;
    let mut unresolved = 0usize;
    let mut failures = 0usize;
    let mut by_url: BTreeMap<String, usize> = BTreeMap::new();

    for item in stream {
        match item {
            Ok((_, article)) => {
                total += 1;
                match article.license_url {
                    Some(url) => *by_url.entry(url).or_insert(0) += 1,
                    None => unresolved += 1,
                }
            }
            Err(err) => {
                failures += 1;
                tracing::error!("{}", err);
            }
        }
    }

    let free = by_url
        .iter()
        .filter(|(url, _)| oa_media_importer::extract::license::is_free_license(url))
        .map(|(_, count)| count)
        .sum::<usize>();

    println!("Articles:   {}", total);
    println!("Resolved:   {}", total - unresolved);
    println!("Free:       {}", free);
    println!("Unresolved: {}", unresolved);
    println!("Failures:   {}", failures);
    println!();
    for (url, count) in &by_url {
        println!("{:>8}  {}", count, url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_version() {
        let version = env!("CARGO_PKG_VERSION");
        assert!(!version.is_empty());
        let parts: Vec<&str> = version.split('.').collect();
        assert!(parts.len() >= 2);
        assert!(parts[0].parse::<u32>().is_ok());
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["oami"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["oami", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_list_command() {
        let cli = Cli::parse_from(["oami", "list", "./archives", "--all"]);
        match &cli.command {
            Some(Commands::List {
                directory,
                all,
                no_supplementary,
            }) => {
                assert_eq!(directory.as_deref(), Some(std::path::Path::new("./archives")));
                assert!(*all);
                assert!(!*no_supplementary);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_licenses_alias() {
        let cli = Cli::parse_from(["oami", "lic", "./archives"]);
        assert!(matches!(cli.command, Some(Commands::Licenses { .. })));
    }
}
