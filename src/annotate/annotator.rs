//! Tag insertion
//!
//! Each step checks for an equivalent tag before inserting, so running the
//! annotator over its own output changes nothing.

use super::metadata::PageMetadata;
use super::structured_data::{StructuredData, JSON_LD_TYPE};
use crate::config::SiteConfig;
use crate::document::{new_element, HtmlDocument};
use crate::error::Result;
use serde::Serialize;
use tracing::{debug, instrument};

/// What a single annotation pass added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationReport {
    /// Names/properties of inserted meta tags, in insertion order
    pub inserted_meta: Vec<String>,
    /// Whether a canonical link was added
    pub canonical: bool,
    /// Whether a JSON-LD block was added
    pub structured_data: bool,
    /// Whether `lang` was set on `<html>`
    pub lang: bool,
}

impl AnnotationReport {
    /// Whether the pass left the document unchanged
    pub fn is_empty(&self) -> bool {
        self.inserted_meta.is_empty() && !self.canonical && !self.structured_data && !self.lang
    }
}

/// Document annotation functionality
pub struct DocumentAnnotator<'a> {
    config: &'a SiteConfig,
}

impl<'a> DocumentAnnotator<'a> {
    /// Create an annotator for a site
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Annotate HTML source, returning the serialized result
    pub fn annotate(&self, source: &str, file_name: &str) -> Result<String> {
        self.annotate_with_report(source, file_name)
            .map(|(html, _)| html)
    }

    /// Annotate HTML source, also reporting which tags were added
    #[instrument(skip(self, source))]
    pub fn annotate_with_report(
        &self,
        source: &str,
        file_name: &str,
    ) -> Result<(String, AnnotationReport)> {
        let mut doc = HtmlDocument::parse(source)?;
        let meta = PageMetadata::derive(doc.title()?, file_name, self.config);
        let mut report = AnnotationReport::default();

        if doc.find_meta_by_name("description")?.is_none() {
            doc.insert_in_head(
                0,
                new_element(
                    "meta",
                    &[("name", "description"), ("content", meta.description.as_str())],
                ),
            )?;
            report.inserted_meta.push("description".to_string());
        }

        if doc.find_meta_by_name("keywords")?.is_none() {
            doc.insert_in_head(
                1,
                new_element("meta", &[("name", "keywords"), ("content", meta.keywords.as_str())]),
            )?;
            report.inserted_meta.push("keywords".to_string());
        }

        for (property, content) in meta.open_graph(self.config).tags() {
            if doc.find_meta_by_property(property)?.is_none() {
                doc.append_to_head(new_element(
                    "meta",
                    &[("property", property), ("content", content)],
                ))?;
                report.inserted_meta.push(property.to_string());
            }
        }

        for (name, content) in meta.twitter_card(self.config).tags() {
            if doc.find_meta_by_name(name)?.is_none() {
                doc.append_to_head(new_element(
                    "meta",
                    &[("name", name), ("content", content)],
                ))?;
                report.inserted_meta.push(name.to_string());
            }
        }

        if doc.find_link_by_rel("canonical")?.is_none() {
            doc.append_to_head(new_element(
                "link",
                &[("rel", "canonical"), ("href", meta.canonical_url.as_str())],
            ))?;
            report.canonical = true;
        }

        if doc.find_script_by_type(JSON_LD_TYPE)?.is_none() {
            let text = StructuredData::article(&meta, self.config).to_script_text()?;
            doc.append_text_element_to_head(
                new_element("script", &[("type", JSON_LD_TYPE)]),
                &text,
            )?;
            report.structured_data = true;
        }

        report.lang = doc.set_html_attr_if_absent("lang", &self.config.lang)?;

        debug!(
            "Annotated {}: {} meta tags, canonical={}, json_ld={}, lang={}",
            file_name,
            report.inserted_meta.len(),
            report.canonical,
            report.structured_data,
            report.lang
        );

        Ok((doc.to_html(), report))
    }
}

/// Annotate HTML source with the given site configuration
pub fn annotate(source: &str, file_name: &str, config: &SiteConfig) -> Result<String> {
    DocumentAnnotator::new(config).annotate(source, file_name)
}
