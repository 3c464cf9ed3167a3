//! Sitemap document model and rendering.
//!
//! # Module Structure
//!
//! ```text
//! sitemap/
//! ├── ext/         # video, image, news extensions
//! ├── freq         # ChangeFreq
//! ├── namespace    # shared namespace tracker
//! ├── options      # Options (host, filename, max links, ...)
//! ├── priority     # Priority
//! ├── render       # XML payloads, splitting, gzip
//! ├── url          # Url entry
//! ├── write        # publishing to disk
//! └── mod.rs       # Sitemap document (this file)
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut sitemap = Sitemap::new(Options::new());
//! let mut url = sitemap.new_url();
//! url.set_loc("https://example.com/").set_priority(0.8)?;
//! url.append_image(Image::new("https://example.com/a.png"));
//! sitemap.push(url);
//! sitemap.write()?;
//! ```

pub mod ext;
mod freq;
mod namespace;
mod options;
mod priority;
pub mod render;
mod url;
mod write;
mod xml;

pub use ext::{Extension, Image, MAX_IMAGES_PER_URL, News, Video};
pub use freq::{ChangeFreq, UnknownChangeFreq};
pub use namespace::{Namespace, Namespaces, SITEMAP_NS};
pub use options::{DEFAULT_FILENAME, DEFAULT_HOST, MAX_SITEMAP_LINKS, Options};
pub use priority::{InvalidPriorityError, Priority};
pub use render::{RenderError, Rendered, SitemapFile, render};
pub use url::{DEFAULT_LASTMOD_LAYOUT, Url};
pub use write::write_rendered;

use anyhow::Result;
use std::path::PathBuf;

/// A sitemap document: ordered entries plus the namespace tracker they share.
///
/// For several producers, wrap the document in a `parking_lot::Mutex`; entries
/// may be built on any thread since the tracker is internally locked.
#[derive(Debug, Default)]
pub struct Sitemap {
    options: Options,
    namespaces: Namespaces,
    urls: Vec<Url>,
}

impl Sitemap {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            namespaces: Namespaces::new(),
            urls: Vec::new(),
        }
    }

    /// Empty entry bound to this document's tracker.
    pub fn new_url(&self) -> Url {
        Url::with_namespaces(self.namespaces.clone())
    }

    /// Append an entry. Entries built with [`Url::new`] are rebound to this
    /// document's tracker, keeping the namespaces they already require.
    pub fn push(&mut self, mut url: Url) {
        url.bind(&self.namespaces);
        self.urls.push(url);
    }

    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    pub const fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub const fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn render(&self) -> Result<Rendered, RenderError> {
        render(&self.urls, &self.namespaces, &self.options)
    }

    /// Render and write all files under `options.public_path()`.
    pub fn write(&self) -> Result<Vec<PathBuf>> {
        let rendered = self.render()?;
        write_rendered(&rendered, self.options.public_path())
    }
}

impl Extend<Url> for Sitemap {
    fn extend<I: IntoIterator<Item = Url>>(&mut self, iter: I) {
        for url in iter {
            self.push(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rayon::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_url_shares_tracker() {
        let sitemap = Sitemap::new(Options::new());
        let mut url = sitemap.new_url();
        url.append_video(Video::new("t.jpg", "title", "desc"));

        assert!(sitemap.namespaces().contains(Namespace::Video));
        assert!(sitemap.is_empty());
    }

    #[test]
    fn test_push_standalone_url_merges_namespaces() {
        let mut sitemap = Sitemap::new(Options::new());
        let mut url = Url::new();
        url.set_loc("https://example.com/");
        url.append_news(News::new("Daily", "en", "2024-01-01", "Headline"));

        sitemap.push(url);

        assert!(sitemap.namespaces().contains(Namespace::News));
        assert!(sitemap.urls()[0].namespaces().shares_with(sitemap.namespaces()));
    }

    #[test]
    fn test_namespaces_survive_later_extensions() {
        let mut sitemap = Sitemap::new(Options::new());
        let mut first = sitemap.new_url();
        first.append_image(Image::new("a.png"));
        sitemap.push(first);

        let mut second = sitemap.new_url();
        second.append_video(Video::new("t.jpg", "title", "desc"));
        sitemap.push(second);

        let required = sitemap.namespaces().required();
        assert!(required.contains(&Namespace::Image));
        assert!(required.contains(&Namespace::Video));
    }

    #[test]
    fn test_concurrent_producers() {
        let sitemap = Mutex::new(Sitemap::new(Options::new()));
        let namespaces = sitemap.lock().namespaces().clone();

        (0..100).into_par_iter().for_each(|i| {
            let mut url = Url::with_namespaces(namespaces.clone());
            url.set_loc(format!("https://example.com/{i}/"));
            if i % 10 == 0 {
                url.append_image(Image::new(format!("https://example.com/{i}.png")));
            }
            sitemap.lock().push(url);
        });

        let sitemap = sitemap.into_inner();
        assert_eq!(sitemap.len(), 100);
        assert!(sitemap.namespaces().contains(Namespace::Image));
        assert!(!sitemap.namespaces().contains(Namespace::News));
    }

    #[test]
    fn test_write_to_public_path() {
        let tmp = TempDir::new().unwrap();
        let mut options = Options::new();
        options
            .set_public_path(tmp.path())
            .set_filename("map")
            .set_max_links(1);

        let mut sitemap = Sitemap::new(options);
        sitemap.extend(["https://example.com/a", "https://example.com/b"].map(|loc| {
            let mut url = Url::new();
            url.set_loc(loc);
            url
        }));

        let paths = sitemap.write().unwrap();

        assert_eq!(paths.len(), 3);
        assert!(tmp.path().join("map1.xml").exists());
        assert!(tmp.path().join("map2.xml").exists());
        let index = std::fs::read_to_string(tmp.path().join("map.xml")).unwrap();
        assert!(index.contains("<loc>http://www.example.com/map2.xml</loc>"));
    }

    #[test]
    fn test_write_nested_filename() {
        let tmp = TempDir::new().unwrap();
        let mut options = Options::new();
        options
            .set_public_path(tmp.path())
            .set_filename("maps/site")
            .set_max_links(1);

        let mut sitemap = Sitemap::new(options);
        sitemap.extend(["https://example.com/a", "https://example.com/b"].map(|loc| {
            let mut url = Url::new();
            url.set_loc(loc);
            url
        }));

        sitemap.write().unwrap();

        assert!(tmp.path().join("maps/site1.xml").exists());
        assert!(tmp.path().join("maps/site2.xml").exists());
        assert!(tmp.path().join("maps/site.xml").exists());
    }
}
