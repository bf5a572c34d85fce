// SPDX-License-Identifier: PMPL-1.0-or-later

//! pitchdeck: render the pitch-deck site from its JSON data document
//!
//! Each invocation is one or more page loads: resolve the URL, route it to a
//! page initializer, read the data fresh, and write the composed document.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::*;
use pitchdeck::chart::ChartJs;
use pitchdeck::config::SiteConfig;
use pitchdeck::error::SiteError;
use pitchdeck::gate::GateState;
use pitchdeck::i18n::{t, Lang};
use pitchdeck::loader::{self, DataSource, DEFAULT_DATA_PATH};
use pitchdeck::page::{build_site, PageLoader};
use pitchdeck::router::Page;
use pitchdeck::storage::FileStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pitchdeck")]
#[command(version)]
#[command(about = "Render the pitch-deck site from its JSON data document")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: ./pitchdeck.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page load for a URL or path such as "/gtm.html?lang=pt"
    Render {
        #[arg(value_name = "URL")]
        target: String,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render every page into a directory for static hosting (dataroom locked)
    Build {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Site language
        #[arg(short, long, default_value = "en")]
        lang: LangArg,
    },

    /// Submit the dataroom gate form and reload the dataroom page
    Unlock {
        #[arg(value_name = "EMAIL")]
        email: String,

        /// Page language for the reloaded dataroom
        #[arg(short, long, default_value = "en")]
        lang: LangArg,

        /// Write the reloaded document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show whether the dataroom gate is unlocked
    Status,

    /// List every data field that would render the "Data needed" badge
    Check,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Pt,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Pt => Lang::Pt,
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "pitchdeck=debug"
    } else {
        "pitchdeck=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn emit(document: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, document).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("{} {}", "Wrote".green(), path.display());
        }
        None => print!("{}", document),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SiteConfig::load(cli.config.as_deref())?;
    let source = config.data_source();

    match cli.command {
        Commands::Render { target, output } => {
            let url = config.page_url(&target)?;
            let mut store = FileStore::open(&config.state_file)?;
            let mut charts = ChartJs;
            let mut pages = PageLoader::new(&source, &mut store, &mut charts)
                .with_client_gate(config.client_gate());

            match pages.load(&url, today())? {
                Some(page) => emit(&page.to_document(&config.chart_script), output.as_deref())?,
                None => eprintln!(
                    "{} no page is registered for {}",
                    "Notice:".yellow().bold(),
                    url.path()
                ),
            }
        }

        Commands::Build { out, lang } => {
            let lang: Lang = lang.into();
            let base = config.base_url()?;
            let mut charts = ChartJs;

            fs::create_dir_all(&out)
                .with_context(|| format!("creating output directory {}", out.display()))?;
            println!("Building {} site from {}", lang.to_string().bold(), source);

            let pages = build_site(
                &source,
                &mut charts,
                &config.client_gate(),
                &base,
                lang,
                today(),
            )?;
            for page in pages {
                let file = out.join(page.page.file_name());
                fs::write(&file, page.to_document(&config.chart_script))
                    .with_context(|| format!("writing {}", file.display()))?;
                println!("  {} {}", "✓".green(), file.display());
            }

            // The unlocked dataroom reads its links from the published document.
            if let DataSource::File(path) = &source {
                let published = out.join(DEFAULT_DATA_PATH);
                if let Some(parent) = published.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &published).with_context(|| {
                    format!("publishing {} to {}", path.display(), published.display())
                })?;
                println!("  {} {}", "✓".green(), published.display());
            }
        }

        Commands::Unlock {
            email,
            lang,
            output,
        } => {
            let lang: Lang = lang.into();
            let url = config.page_url(&format!("/{}?lang={}", Page::Dataroom.file_name(), lang))?;
            let capture = config.email_capture()?;
            let mut store = FileStore::open(&config.state_file)?;
            let mut charts = ChartJs;
            let mut pages = PageLoader::new(&source, &mut store, &mut charts)
                .with_client_gate(config.client_gate());

            match pages.submit_gate(&url, today(), &email, capture.as_ref()) {
                Ok(Some(page)) => {
                    eprintln!("{}", "Dataroom unlocked".green().bold());
                    emit(&page.to_document(&config.chart_script), output.as_deref())?;
                }
                Ok(None) => {}
                Err(SiteError::InvalidEmail(address)) => {
                    return Err(anyhow!(
                        "{}: {:?}",
                        t(lang, "dataroom.invalid_email"),
                        address
                    ));
                }
                Err(err) => return Err(err.into()),
            }
        }

        Commands::Status => {
            let store = FileStore::open(&config.state_file)?;
            let state = GateState::read(&store);
            let label = match state {
                GateState::Unlocked => state.to_string().green().bold(),
                GateState::Locked => state.to_string().yellow().bold(),
            };
            println!("Dataroom gate: {} ({})", label, store.path().display());
        }

        Commands::Check => {
            let data = loader::load(&source)?;
            let missing = data.missing_fields();
            if missing.is_empty() {
                println!("{}", "All fields present".green());
            } else {
                println!(
                    "{} {} field(s) will render \"Data needed\":",
                    "Missing:".yellow().bold(),
                    missing.len()
                );
                for field in missing {
                    println!("  - {}", field);
                }
            }
        }
    }

    Ok(())
}
