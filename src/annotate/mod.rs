//! Document annotation module
//!
//! This module derives per-page SEO metadata and inserts it into a parsed
//! document: meta description and keywords, Open Graph and Twitter Card
//! tags, a canonical link, JSON-LD structured data and `<html lang>`.

pub mod annotator;
pub mod metadata;
pub mod structured_data;

pub use annotator::{annotate, AnnotationReport, DocumentAnnotator};
pub use metadata::{OpenGraphData, PageMetadata, TwitterCardData};
pub use structured_data::{StructuredData, JSON_LD_TYPE};
