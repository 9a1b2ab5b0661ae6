//! AlgoViz SEO - Batch SEO Annotation for Static HTML Pages
//!
//! This crate rewrites static HTML pages in place, adding the metadata search
//! engines and social platforms look for.
//!
//! # Features
//!
//! - **Category Table**: keywords and description chosen by file name
//! - **Meta Tags**: description, keywords, Open Graph and Twitter Card
//! - **Canonical Links & JSON-LD**: schema.org Article structured data
//! - **Batch Processing**: backup-then-overwrite over a directory of pages
//!
//! Every insertion is skipped when an equivalent tag already exists, so
//! running the tool twice is harmless.
//!
//! # Architecture
//!
//! ```text
//! Directory ──▶ FileProcessor ──▶ backup copy
//!                     │
//!                     ▼
//!             DocumentAnnotator ──▶ category::resolve
//!                     │
//!                     ▼
//!               HtmlDocument (scraper tree)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use algoviz_seo::{FileProcessor, ProcessEvent, SiteConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let processor = FileProcessor::new(SiteConfig::default())?;
//!     let summary = processor.process_all(Path::new("."), |event| {
//!         if let ProcessEvent::File(report) = event {
//!             println!("{}: {}", report.file_name, report.is_success());
//!         }
//!     })?;
//!
//!     println!("{} processed, {} failed", summary.processed, summary.failed);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod annotate;
pub mod category;
pub mod config;
pub mod document;
pub mod error;
pub mod processor;

// Re-exports for convenience
pub use annotate::{annotate, DocumentAnnotator, PageMetadata};
pub use category::{resolve, CategoryEntry, CategoryInfo};
pub use config::SiteConfig;
pub use document::HtmlDocument;
pub use error::{Error, Result};
pub use processor::{FileProcessor, FileReport, ProcessEvent, ProcessSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
