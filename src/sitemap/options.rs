//! Document-level sitemap options.
//!
//! Setters never fail: invalid values are either corrected (filename) or
//! ignored (max links), so a typo in configuration cannot abort a build.

use std::path::{Path, PathBuf};

/// Maximum number of `<url>` elements a single sitemap file may hold.
pub const MAX_SITEMAP_LINKS: usize = 50_000;

pub const DEFAULT_HOST: &str = "http://www.example.com";
pub const DEFAULT_FILENAME: &str = "Sitemap.xml";

const XML_EXT: &str = ".xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    default_host: String,
    public_path: PathBuf,
    filename: String,
    compress: bool,
    pretty: bool,
    max_links: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    pub fn new() -> Self {
        Self {
            default_host: DEFAULT_HOST.to_string(),
            public_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            filename: DEFAULT_FILENAME.to_string(),
            compress: false,
            pretty: false,
            max_links: MAX_SITEMAP_LINKS,
        }
    }

    pub fn set_default_host(&mut self, host: impl Into<String>) -> &mut Self {
        self.default_host = host.into();
        self
    }

    pub fn set_public_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.public_path = path.into();
        self
    }

    /// Set the output filename, appending `.xml` unless already present.
    pub fn set_filename(&mut self, filename: impl Into<String>) -> &mut Self {
        let mut filename = filename.into();
        if !filename.ends_with(XML_EXT) {
            filename.push_str(XML_EXT);
        }
        self.filename = filename;
        self
    }

    pub fn set_compress(&mut self, compress: bool) -> &mut Self {
        self.compress = compress;
        self
    }

    pub fn set_pretty(&mut self, pretty: bool) -> &mut Self {
        self.pretty = pretty;
        self
    }

    /// Accept `max` only when `0 < max < MAX_SITEMAP_LINKS`; otherwise keep
    /// the current value.
    pub fn set_max_links(&mut self, max: i64) -> &mut Self {
        if let Ok(max) = usize::try_from(max)
            && Self::accepts_max_links(max)
        {
            self.max_links = max;
        }
        self
    }

    /// Whether [`set_max_links`](Self::set_max_links) would take `max`.
    pub const fn accepts_max_links(max: usize) -> bool {
        max > 0 && max < MAX_SITEMAP_LINKS
    }

    pub fn default_host(&self) -> &str {
        &self.default_host
    }

    pub fn public_path(&self) -> &Path {
        &self.public_path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub const fn compress(&self) -> bool {
        self.compress
    }

    pub const fn pretty(&self) -> bool {
        self.pretty
    }

    pub const fn max_links(&self) -> usize {
        self.max_links
    }

    /// Filename without the trailing `.xml`.
    pub fn file_stem(&self) -> &str {
        self.filename
            .strip_suffix(XML_EXT)
            .unwrap_or(&self.filename)
    }

    /// Absolute URL of a file published next to the sitemap.
    pub fn public_url(&self, file: &str) -> String {
        format!("{}/{}", self.default_host.trim_end_matches('/'), file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::new();
        assert_eq!(options.filename(), "Sitemap.xml");
        assert_eq!(options.max_links(), 50_000);
        assert!(!options.compress());
        assert!(!options.pretty());
        assert_eq!(options.default_host(), "http://www.example.com");
        assert!(!options.public_path().as_os_str().is_empty());
    }

    #[test]
    fn test_set_filename_appends_xml() {
        let mut options = Options::new();
        options.set_filename("sitemap");
        assert_eq!(options.filename(), "sitemap.xml");

        options.set_filename("sitemap.txt");
        assert_eq!(options.filename(), "sitemap.txt.xml");

        // Extension match is case-sensitive
        options.set_filename("sitemap.XML");
        assert_eq!(options.filename(), "sitemap.XML.xml");
    }

    #[test]
    fn test_set_filename_keeps_xml() {
        let mut options = Options::new();
        options.set_filename("posts.xml");
        assert_eq!(options.filename(), "posts.xml");
        assert_eq!(options.file_stem(), "posts");
    }

    #[test]
    fn test_set_max_links_accepts_in_range() {
        let mut options = Options::new();
        options.set_max_links(1);
        assert_eq!(options.max_links(), 1);
        options.set_max_links(49_999);
        assert_eq!(options.max_links(), 49_999);
    }

    #[test]
    fn test_set_max_links_rejects_silently() {
        let mut options = Options::new();
        options.set_max_links(100);

        for invalid in [0, -1, i64::MIN, 50_000, 50_001, i64::MAX] {
            options.set_max_links(invalid);
            assert_eq!(options.max_links(), 100, "{invalid} should be ignored");
        }
    }

    #[test]
    fn test_setters_chain() {
        let mut options = Options::new();
        options
            .set_default_host("https://example.com/")
            .set_public_path("/tmp/out")
            .set_compress(true)
            .set_pretty(true);

        assert!(options.compress());
        assert!(options.pretty());
        assert_eq!(options.public_path(), Path::new("/tmp/out"));
        assert_eq!(
            options.public_url("Sitemap1.xml"),
            "https://example.com/Sitemap1.xml"
        );
    }
}
