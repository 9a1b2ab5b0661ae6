//! Site configuration
//!
//! Every constant that ends up in generated markup, plus the file filter and
//! backup location, lives in [`SiteConfig`]. Defaults reproduce the AlgoViz
//! Hub site.

use crate::error::{ConfigError, Result};
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Public URL prefix pages are served under
pub const DEFAULT_BASE_URL: &str = "https://sgkandale.github.io/";
/// Article author
pub const DEFAULT_AUTHOR: &str = "Shantanu Kandale";
/// Publisher and `og:site_name`
pub const DEFAULT_SITE_NAME: &str = "AlgoViz Hub";
/// Publisher logo
pub const DEFAULT_LOGO_URL: &str = "https://sgkandale.github.io/favicon.ico";
/// `twitter:site` handle
pub const DEFAULT_TWITTER_HANDLE: &str = "@sgkandale";
/// Where unmodified copies are written
pub const DEFAULT_BACKUP_DIR: &str = "/tmp/seo_backup";
/// Files processed by the batch run
pub const DEFAULT_EXTENSION: &str = ".html";
/// Title used when a page has no `<title>`
pub const DEFAULT_TITLE: &str = "Algorithm Visualization";
/// Value for a missing `<html lang>`
pub const DEFAULT_LANG: &str = "en";

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public URL prefix, joined with the file name for canonical/og:url
    pub base_url: String,
    /// JSON-LD author name
    pub author: String,
    /// Publisher name and og:site_name
    pub site_name: String,
    /// JSON-LD publisher logo
    pub logo_url: String,
    /// twitter:site handle
    pub twitter_handle: String,
    /// Backup directory (created if absent)
    pub backup_dir: PathBuf,
    /// File name suffix selecting pages to process
    pub extension: String,
    /// Fallback page title
    pub default_title: String,
    /// Language set on `<html>` when missing
    pub lang: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            twitter_handle: DEFAULT_TWITTER_HANDLE.to_string(),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl SiteConfig {
    /// Create a new config builder
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }

    /// Public URL of a page
    pub fn page_url(&self, file_name: &str) -> String {
        format!("{}{}", self.base_url, file_name)
    }

    /// Check values that would otherwise produce broken markup
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            }
            .into());
        }

        // Page names are appended verbatim
        if !self.base_url.ends_with('/') {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "must end with '/'".to_string(),
            }
            .into());
        }

        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(ConfigError::InvalidExtension(self.extension.clone()).into());
        }

        for (field, value) in [
            ("author", &self.author),
            ("site_name", &self.site_name),
            ("lang", &self.lang),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(field).into());
            }
        }

        if self.backup_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("backup_dir").into());
        }

        debug!("Validated site config for {}", self.base_url);
        Ok(())
    }
}

/// Builder for SiteConfig
#[derive(Default)]
pub struct SiteConfigBuilder {
    config: SiteConfig,
}

impl SiteConfigBuilder {
    /// Set the public URL prefix
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the author name
    pub fn author<S: Into<String>>(mut self, author: S) -> Self {
        self.config.author = author.into();
        self
    }

    /// Set the site/publisher name
    pub fn site_name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.site_name = name.into();
        self
    }

    /// Set the publisher logo URL
    pub fn logo_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.logo_url = url.into();
        self
    }

    /// Set the Twitter handle
    pub fn twitter_handle<S: Into<String>>(mut self, handle: S) -> Self {
        self.config.twitter_handle = handle.into();
        self
    }

    /// Set the backup directory
    pub fn backup_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.backup_dir = dir.into();
        self
    }

    /// Set the file extension filter
    pub fn extension<S: Into<String>>(mut self, ext: S) -> Self {
        self.config.extension = ext.into();
        self
    }

    /// Set the fallback title
    pub fn default_title<S: Into<String>>(mut self, title: S) -> Self {
        self.config.default_title = title.into();
        self
    }

    /// Set the document language
    pub fn lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.config.lang = lang.into();
        self
    }

    /// Build the config
    pub fn build(self) -> SiteConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, "https://sgkandale.github.io/");
        assert_eq!(config.site_name, "AlgoViz Hub");
        assert_eq!(config.backup_dir, PathBuf::from("/tmp/seo_backup"));
        assert_eq!(config.extension, ".html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SiteConfig::builder()
            .base_url("https://example.org/docs/")
            .author("Ada")
            .twitter_handle("@ada")
            .backup_dir("/var/tmp/bk")
            .lang("de")
            .build();

        assert_eq!(config.base_url, "https://example.org/docs/");
        assert_eq!(config.author, "Ada");
        assert_eq!(config.twitter_handle, "@ada");
        assert_eq!(config.backup_dir, PathBuf::from("/var/tmp/bk"));
        assert_eq!(config.lang, "de");
        assert_eq!(config.site_name, DEFAULT_SITE_NAME);
    }

    #[test]
    fn test_page_url() {
        let config = SiteConfig::default();
        assert_eq!(
            config.page_url("merge_sort.html"),
            "https://sgkandale.github.io/merge_sort.html"
        );
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        for url in ["not a url", "ftp://example.org/", "https://example.org"] {
            let config = SiteConfig::builder().base_url(url).build();
            assert!(
                matches!(
                    config.validate(),
                    Err(Error::Config(ConfigError::InvalidBaseUrl { .. }))
                ),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        let config = SiteConfig::builder().extension("html").build();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidExtension(_)))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_lang() {
        let config = SiteConfig::builder().lang("  ").build();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::EmptyValue("lang")))
        ));
    }
}
