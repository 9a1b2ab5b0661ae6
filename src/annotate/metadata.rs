//! Per-page metadata
//!
//! [`PageMetadata`] is derived once per file from its title, name and
//! category. The Open Graph and Twitter Card sets are projections of it.

use crate::category::{self, CategoryInfo};
use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};

/// Metadata computed for a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page title
    pub title: String,
    /// Comma-separated keywords
    pub keywords: String,
    /// Meta description
    pub description: String,
    /// Canonical URL
    pub canonical_url: String,
}

/// Open Graph metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphData {
    /// og:title
    pub title: String,
    /// og:description
    pub description: String,
    /// og:type
    pub og_type: String,
    /// og:url
    pub url: String,
    /// og:site_name
    pub site_name: String,
}

/// Twitter Card metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCardData {
    /// twitter:card
    pub card: String,
    /// twitter:title
    pub title: String,
    /// twitter:description
    pub description: String,
    /// twitter:site
    pub site: String,
}

impl PageMetadata {
    /// Derive metadata for a page from its title and file name
    pub fn derive(title: Option<String>, file_name: &str, config: &SiteConfig) -> Self {
        let CategoryInfo {
            keywords,
            description,
        } = category::resolve(file_name);

        Self {
            title: title.unwrap_or_else(|| config.default_title.clone()),
            keywords: keywords.to_string(),
            description: description.to_string(),
            canonical_url: config.page_url(file_name),
        }
    }

    /// Open Graph values for this page
    pub fn open_graph(&self, config: &SiteConfig) -> OpenGraphData {
        OpenGraphData {
            title: self.title.clone(),
            description: self.description.clone(),
            og_type: "article".to_string(),
            url: self.canonical_url.clone(),
            site_name: config.site_name.clone(),
        }
    }

    /// Twitter Card values for this page
    pub fn twitter_card(&self, config: &SiteConfig) -> TwitterCardData {
        TwitterCardData {
            card: "summary".to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            site: config.twitter_handle.clone(),
        }
    }
}

impl OpenGraphData {
    /// `(property, content)` pairs in insertion order
    pub fn tags(&self) -> [(&'static str, &str); 5] {
        [
            ("og:title", self.title.as_str()),
            ("og:description", self.description.as_str()),
            ("og:type", self.og_type.as_str()),
            ("og:url", self.url.as_str()),
            ("og:site_name", self.site_name.as_str()),
        ]
    }
}

impl TwitterCardData {
    /// `(name, content)` pairs in insertion order
    pub fn tags(&self) -> [(&'static str, &str); 4] {
        [
            ("twitter:card", self.card.as_str()),
            ("twitter:title", self.title.as_str()),
            ("twitter:description", self.description.as_str()),
            ("twitter:site", self.site.as_str()),
        ]
    }
}
