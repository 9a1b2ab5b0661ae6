//! AlgoViz SEO command-line tool
//!
//! Annotates every HTML page in a directory with SEO metadata.

use algoviz_seo::config::{
    DEFAULT_AUTHOR, DEFAULT_BACKUP_DIR, DEFAULT_BASE_URL, DEFAULT_EXTENSION, DEFAULT_LANG,
    DEFAULT_LOGO_URL, DEFAULT_SITE_NAME, DEFAULT_TWITTER_HANDLE,
};
use algoviz_seo::{FileProcessor, ProcessEvent, SiteConfig};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// AlgoViz SEO annotator
#[derive(Parser, Debug)]
#[command(name = "algoviz-seo")]
#[command(author = "AlgoViz Hub")]
#[command(version)]
#[command(about = "Inject SEO meta tags, Open Graph, Twitter Cards and JSON-LD into HTML pages")]
struct Args {
    /// Directory containing the pages
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Public URL prefix pages are served under
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Article author for structured data
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    author: String,

    /// Site and publisher name
    #[arg(long, default_value = DEFAULT_SITE_NAME)]
    site_name: String,

    /// Publisher logo URL
    #[arg(long, default_value = DEFAULT_LOGO_URL)]
    logo_url: String,

    /// Twitter handle for twitter:site
    #[arg(long, default_value = DEFAULT_TWITTER_HANDLE)]
    twitter: String,

    /// Where unmodified copies are written
    #[arg(long, default_value = DEFAULT_BACKUP_DIR)]
    backup_dir: PathBuf,

    /// Only files ending with this suffix are processed
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Language set on <html> when missing
    #[arg(long, default_value = DEFAULT_LANG)]
    lang: String,

    /// Exit with status 1 if any file failed
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn site_config(&self) -> SiteConfig {
        SiteConfig::builder()
            .base_url(&self.base_url)
            .author(&self.author)
            .site_name(&self.site_name)
            .logo_url(&self.logo_url)
            .twitter_handle(&self.twitter)
            .backup_dir(&self.backup_dir)
            .extension(&self.extension)
            .lang(&self.lang)
            .build()
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let processor = FileProcessor::new(args.site_config()).context("Invalid configuration")?;
    let config = processor.config();
    tracing::debug!(
        base_url = %config.base_url,
        backup_dir = %config.backup_dir.display(),
        "Annotating *{} files",
        config.extension
    );

    let summary = processor
        .process_all(&args.dir, |event| match event {
            ProcessEvent::Started { total } => {
                println!("Processing {} HTML files...", total);
            }
            ProcessEvent::File(report) => match &report.outcome {
                Ok(()) => println!("✓ Processed {}", report.file_name),
                Err(e) => println!("✗ Error processing {}: {}", report.file_name, e),
            },
            ProcessEvent::Finished(summary) => {
                println!("SEO improvement process completed!");
                println!("{} processed, {} failed", summary.processed, summary.failed);
            }
        })
        .with_context(|| format!("Failed to process {}", args.dir.display()))?;

    Ok(!summary.has_failures())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{} {} starting", algoviz_seo::NAME, algoviz_seo::VERSION);

    match run(&args) {
        Ok(all_ok) if all_ok || !args.strict => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
