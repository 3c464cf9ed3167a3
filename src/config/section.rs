//! Manifest sections.

use crate::sitemap::{ChangeFreq, DEFAULT_LASTMOD_LAYOUT, Image, News, Video};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[options]` section. Unset fields keep the library defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsSection {
    /// Host joined onto relative `loc` values and index entries.
    pub default_host: Option<String>,
    /// Output directory, relative to the manifest.
    pub public_path: Option<PathBuf>,
    pub filename: Option<String>,
    pub compress: bool,
    pub pretty: bool,
    pub max_links: Option<i64>,
    /// strftime layout used for `<lastmod>`.
    pub lastmod_layout: String,
}

impl Default for OptionsSection {
    fn default() -> Self {
        Self {
            default_host: None,
            public_path: None,
            filename: None,
            compress: false,
            pretty: false,
            max_links: None,
            lastmod_layout: DEFAULT_LASTMOD_LAYOUT.to_string(),
        }
    }
}

/// One `[[url]]` entry.
///
/// Extensions are attached videos first, then images, then news, each in
/// manifest order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlSection {
    pub loc: String,
    /// `YYYY-MM-DD` or RFC 3339.
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f64>,
    #[serde(default)]
    pub video: Vec<Video>,
    #[serde(default)]
    pub image: Vec<Image>,
    #[serde(default)]
    pub news: Vec<News>,
}
