//! The bidsite CLI application.
//!
//! Owns the loaded configuration and dispatches parsed commands to the
//! index and content crates.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bidsite_content::markdown::frontmatter::MetadataDefaults;
use bidsite_content::{SeoMeta, extract_metadata_with_source, extract_toc};
use bidsite_core::util::files;
use bidsite_core::{Error, Result, article_url, generate_slug};
use bidsite_index::{
    ContentIndex, IndexBuilder, IndexStats, IndexStatus, check_index, format_date,
    search_articles,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::BidsiteConfig;
use crate::config_handlers;

/// How a successful run should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The index is missing or out of date.
    Stale,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Stale => ExitCode::from(1),
        }
    }
}

// ============================================================================
// BidsiteApp
// ============================================================================

/// CLI application state.
pub struct BidsiteApp {
    name: String,
    config: BidsiteConfig,
    version: String,
}

impl BidsiteApp {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = BidsiteConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create an application with an explicit configuration.
    pub fn new(name: impl Into<String>, config: BidsiteConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &BidsiteConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<Outcome> {
        self.init_logging(args.verbose, args.quiet);

        let command = args.command.unwrap_or(Command::Build {
            content_dir: None,
            output: None,
        });
        tracing::debug!(?command, "dispatching command");

        match command {
            Command::Build {
                content_dir,
                output,
            } => {
                let content_dir = self.content_dir(content_dir.as_deref());
                let index_path = self.index_path(output.as_deref());
                self.build(&content_dir, &index_path).await
            }
            Command::Check { content_dir, index } => {
                let content_dir = self.content_dir(content_dir.as_deref());
                let index_path = self.index_path(index.as_deref());
                self.check(&content_dir, &index_path).await
            }
            Command::Search { query, index } => {
                self.search(&query, &self.index_path(index.as_deref()))
            }
            Command::Meta { file } => self.meta(Path::new(&file)).await,
            Command::Version => {
                println!("{} {}", self.name, self.version);
                Ok(Outcome::Success)
            }
            Command::Config(config_cmd) => {
                config_handlers::handle_config_command(
                    args.config.as_deref(),
                    &self.config,
                    config_cmd.command,
                )?;
                Ok(Outcome::Success)
            }
        }
    }

    fn content_dir(&self, flag: Option<&str>) -> PathBuf {
        flag.map(PathBuf::from)
            .unwrap_or_else(|| self.config.content_dir())
    }

    fn index_path(&self, flag: Option<&str>) -> PathBuf {
        flag.map(PathBuf::from)
            .unwrap_or_else(|| self.config.index_path())
    }

    fn builder(&self) -> IndexBuilder {
        IndexBuilder::new()
            .with_excerpt_length(self.config.content.excerpt_length)
            .with_exclude(self.config.content.exclude.clone())
    }

    async fn build(&self, content_dir: &Path, index_path: &Path) -> Result<Outcome> {
        let stats = self.builder().build(content_dir, index_path).await?;
        print_build_summary(&stats, index_path);
        Ok(Outcome::Success)
    }

    async fn check(&self, content_dir: &Path, index_path: &Path) -> Result<Outcome> {
        let status = check_index(content_dir, index_path, &self.config.content.exclude).await?;
        match status {
            IndexStatus::Fresh => {
                println!("Index is up to date: {}", index_path.display());
                Ok(Outcome::Success)
            }
            IndexStatus::Missing => {
                println!("Index not found: {}", index_path.display());
                Ok(Outcome::Stale)
            }
            IndexStatus::Stale(report) => {
                println!("Index is stale: {}", index_path.display());
                for name in &report.unindexed {
                    println!("  not indexed: {name}");
                }
                for name in &report.removed {
                    println!("  removed:     {name}");
                }
                for name in &report.modified {
                    println!("  modified:    {name}");
                }
                if report.total_mismatch {
                    println!("  total does not match the article list");
                }
                Ok(Outcome::Stale)
            }
        }
    }

    fn search(&self, query: &str, index_path: &Path) -> Result<Outcome> {
        let index = ContentIndex::load(index_path)?.ok_or_else(|| {
            Error::not_found(format!(
                "index file {} (run `{} build` first)",
                index_path.display(),
                self.name
            ))
        })?;

        let hits = search_articles(query, &index.articles);
        log::debug!("{} of {} articles match {query:?}", hits.len(), index.total);
        for article in &hits {
            println!(
                "{}  {}  {}",
                format_date(&article.date),
                article.title,
                article_url(&article.filename)
            );
        }
        println!("{} article(s) found", hits.len());
        Ok(Outcome::Success)
    }

    async fn meta(&self, file: &Path) -> Result<Outcome> {
        let content = files::read_file(file).await?;
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extraction = extract_metadata_with_source(&content, &MetadataDefaults::now());
        let seo = SeoMeta::from_document(&content, &extraction.metadata);
        let report = serde_json::json!({
            "filename": filename,
            "slug": generate_slug(&filename),
            "url": article_url(&filename),
            "source": extraction.source,
            "metadata": extraction.metadata,
            "seo": seo,
            "toc": extract_toc(&content),
        });

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| Error::serialization(e.to_string()))?;
        println!("{json}");
        Ok(Outcome::Success)
    }
}

fn print_build_summary(stats: &IndexStats, index_path: &Path) {
    println!(
        "Indexed {} article(s) into {}",
        stats.articles_indexed,
        index_path.display()
    );
    if !stats.skipped.is_empty() {
        println!("Skipped {} file(s):", stats.skipped.len());
        for skipped in &stats.skipped {
            println!("  {}: {}", skipped.filename, skipped.reason);
        }
    }
    println!("Last updated: {}", stats.last_updated);
}

// ============================================================================
// Tests
// ============================================================================
