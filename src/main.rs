// SPDX-License-Identifier: PMPL-1.0-or-later

//! langlinks CLI: resolve alternate-language links for a page, check a
//! mapping, or render the navigation list as HTML.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use langlinks::{config::Settings, mapping, nav, LangSwitcher};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "langlinks")]
#[command(version)]
#[command(about = "Cross-language page identity resolution for multilingual sites")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the equivalent page in every configured language
    Resolve {
        /// Configuration file (JSON settings object)
        #[arg(short, long)]
        config: PathBuf,

        /// Active locale of the current page
        #[arg(short, long)]
        lang: String,

        /// Site-relative path of the current page
        #[arg(short, long)]
        path: String,

        /// Output format
        #[arg(short, long, default_value = "json", value_enum)]
        format: OutputFormat,

        /// Base URL for live title fetches (enables joining relative paths)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Validate the page-identity mapping in a configuration file
    Check {
        /// Configuration file (JSON settings object)
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Emit the navigation list as HTML markup
    Render {
        /// Configuration file (JSON settings object)
        #[arg(short, long)]
        config: PathBuf,

        /// Active locale of the current page
        #[arg(short, long)]
        lang: String,

        /// Site-relative path of the current page
        #[arg(short, long)]
        path: String,

        /// Base URL for live title fetches
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            config,
            lang,
            path,
            format,
            base_url,
        } => {
            let switcher = build_switcher(&config, &lang, &path, base_url)?;
            let links = switcher
                .resolve_links()
                .map_err(|err| anyhow!("{err}"))?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&links)?);
                }
                OutputFormat::Text => {
                    println!("{}", "RESOLVED LINKS".bold().cyan());
                    for (locale, link) in &links {
                        let marker = if locale == switcher.lang() { "*" } else { " " };
                        println!("  {} {:6} {:32} {}", marker, locale, link.path, link.title);
                    }
                }
            }
            Ok(())
        }

        Commands::Check { config } => {
            let settings = Settings::from_file(&config)?;
            match mapping::validate(settings.mapping.as_ref()) {
                Ok(validated) => {
                    let locales: Vec<&str> =
                        validated.keys().map(String::as_str).collect();
                    println!(
                        "{}",
                        format!("mapping ok: {} locale(s): {}", locales.len(), locales.join(", "))
                            .green()
                            .bold()
                    );
                    Ok(())
                }
                Err(err) => {
                    eprintln!("{}", err.to_string().red().bold());
                    Err(anyhow!("mapping validation failed"))
                }
            }
        }

        Commands::Render {
            config,
            lang,
            path,
            base_url,
        } => {
            let switcher = build_switcher(&config, &lang, &path, base_url)?;
            let list = switcher
                .run()
                .ok_or_else(|| anyhow!("mapping validation failed"))?;
            print!("{}", nav::to_html(&list));
            Ok(())
        }
    }
}

fn build_switcher(
    config: &PathBuf,
    lang: &str,
    path: &str,
    base_url: Option<String>,
) -> Result<LangSwitcher> {
    let settings = Settings::from_file(config)?;
    let mut switcher = LangSwitcher::new(settings, lang, path).quiet();
    if let Some(base) = base_url {
        switcher = switcher.with_base_url(base);
    }
    Ok(switcher)
}
