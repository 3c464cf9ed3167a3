//! Sitemap manifest (`sitemap.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError
//! ├── section    # [options] and [[url]] sections
//! ├── util       # host joining, config discovery
//! └── mod.rs     # Manifest (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [options]
//! default_host = "https://example.com"
//! public_path = "public"
//! filename = "sitemap"
//! pretty = true
//!
//! [[url]]
//! loc = "/about/"
//! lastmod = "2024-06-15"
//! changefreq = "weekly"
//! priority = 0.8
//!
//! [[url.image]]
//! loc = "/img/portrait.png"
//! ```

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{OptionsSection, UrlSection};
pub use util::{find_config_file, join_host};

use crate::log;
use crate::sitemap::{Options, Sitemap, Url};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root manifest structure representing sitemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directory of the manifest file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub options: OptionsSection,

    #[serde(default, rename = "url")]
    pub urls: Vec<UrlSection>,
}

impl Manifest {
    /// Parse manifest from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load manifest from file path; relative paths resolve against its directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut manifest = Self::from_str(&content)?;
        manifest.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(manifest)
    }

    /// Build [`Options`] from the `[options]` section.
    ///
    /// An out-of-range `max_links` is reported and ignored, like
    /// [`Options::set_max_links`] does.
    pub fn options(&self) -> Options {
        let section = &self.options;
        let mut options = Options::new();

        if let Some(host) = &section.default_host {
            options.set_default_host(host.as_str());
        }
        // Without a manifest directory, keep the cwd default
        if let Some(path) = &section.public_path {
            options.set_public_path(self.root.join(path));
        } else if !self.root.as_os_str().is_empty() {
            options.set_public_path(self.root.as_path());
        }
        if let Some(filename) = &section.filename {
            options.set_filename(filename.as_str());
        }
        options
            .set_compress(section.compress)
            .set_pretty(section.pretty);

        if let Some(max) = section.max_links {
            if !usize::try_from(max).is_ok_and(Options::accepts_max_links) {
                log!("warning"; "options.max_links = {} is out of range, using {}", max, options.max_links());
            }
            options.set_max_links(max);
        }

        options
    }

    /// Build the whole sitemap document.
    pub fn into_sitemap(self) -> Result<Sitemap, ConfigError> {
        let mut sitemap = Sitemap::new(self.options());
        let layout = self.options.lastmod_layout.as_str();

        for (index, section) in self.urls.iter().enumerate() {
            let url = build_url(&sitemap, index, section, layout)?;
            sitemap.push(url);
        }

        Ok(sitemap)
    }
}

fn build_url(
    sitemap: &Sitemap,
    index: usize,
    section: &UrlSection,
    layout: &str,
) -> Result<Url, ConfigError> {
    let host = sitemap.options().default_host();
    let loc = section.loc.trim();
    if loc.is_empty() {
        return Err(ConfigError::entry(index, loc, "loc is empty"));
    }

    let mut url = sitemap.new_url();
    url.set_loc(join_host(host, loc));

    if let Some(lastmod) = &section.lastmod {
        let date = parse_date(lastmod)
            .ok_or_else(|| ConfigError::entry(index, loc, format!("invalid lastmod `{lastmod}`")))?;
        url.set_lastmod(&date, Some(layout));
    }
    if let Some(freq) = section.changefreq {
        url.set_changefreq(freq);
    }
    if let Some(priority) = section.priority {
        url.set_priority(priority)
            .map_err(|err| ConfigError::entry(index, loc, err))?;
    }

    for video in &section.video {
        let mut video = video.clone();
        video.thumbnail_loc = join_host(host, &video.thumbnail_loc);
        video.content_loc = video.content_loc.map(|l| join_host(host, &l));
        video.player_loc = video.player_loc.map(|l| join_host(host, &l));
        url.append_video(video);
    }
    for image in &section.image {
        let mut image = image.clone();
        image.loc = join_host(host, &image.loc);
        url.append_image(image);
    }
    for news in &section.news {
        url.append_news(news.clone());
    }

    Ok(url)
}

/// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
fn parse_date(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset())
}
