//! schema.org Article JSON-LD
//!
//! Serialized into a `<script type="application/ld+json">` block.

use super::metadata::PageMetadata;
use crate::config::SiteConfig;
use crate::error::Result;
use serde::Serialize;

/// MIME type of the script element carrying the data
pub const JSON_LD_TYPE: &str = "application/ld+json";

/// A schema.org Article
#[derive(Debug, Clone, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    headline: String,
    description: String,
    author: Person,
    publisher: Organization,
    #[serde(rename = "mainEntityOfPage")]
    main_entity_of_page: WebPage,
}

#[derive(Debug, Clone, Serialize)]
struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
}

#[derive(Debug, Clone, Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    logo: ImageObject,
}

#[derive(Debug, Clone, Serialize)]
struct ImageObject {
    #[serde(rename = "@type")]
    kind: &'static str,
    url: String,
}

#[derive(Debug, Clone, Serialize)]
struct WebPage {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    id: String,
}

impl StructuredData {
    /// Build the Article for a page
    pub fn article(meta: &PageMetadata, config: &SiteConfig) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Article",
            headline: meta.title.clone(),
            description: meta.description.clone(),
            author: Person {
                kind: "Person",
                name: config.author.clone(),
            },
            publisher: Organization {
                kind: "Organization",
                name: config.site_name.clone(),
                logo: ImageObject {
                    kind: "ImageObject",
                    url: config.logo_url.clone(),
                },
            },
            main_entity_of_page: WebPage {
                kind: "WebPage",
                id: meta.canonical_url.clone(),
            },
        }
    }

    /// Pretty-printed JSON safe to embed in a script element
    pub fn to_script_text(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        // "</" would end the script element early
        Ok(json.replace("</", "<\\/"))
    }
}
