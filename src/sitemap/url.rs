//! A single `<url>` entry.

use super::ext::{Extension, Image, MAX_IMAGES_PER_URL, News, Video};
use super::freq::ChangeFreq;
use super::namespace::Namespaces;
use super::priority::{InvalidPriorityError, Priority};
use crate::log;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Default `<lastmod>` layout: `YYYY-MM-DD`.
pub const DEFAULT_LASTMOD_LAYOUT: &str = "%Y-%m-%d";

/// One page of the sitemap.
///
/// Holds a handle to the namespace tracker of its document; attaching an
/// extension marks the extension's namespace there.
#[derive(Debug, Clone)]
pub struct Url {
    namespaces: Namespaces,
    loc: String,
    lastmod: Option<String>,
    changefreq: Option<ChangeFreq>,
    priority: Option<Priority>,
    extensions: Vec<Extension>,
}

impl Default for Url {
    fn default() -> Self {
        Self::new()
    }
}

impl Url {
    /// Entry with its own tracker. Pushing it into a
    /// [`Sitemap`](super::Sitemap) merges the tracker into the document's.
    pub fn new() -> Self {
        Self::with_namespaces(Namespaces::new())
    }

    /// Entry bound to an existing (document) tracker.
    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            namespaces,
            loc: String::new(),
            lastmod: None,
            changefreq: None,
            priority: None,
            extensions: Vec::new(),
        }
    }

    pub fn set_loc(&mut self, loc: impl Into<String>) -> &mut Self {
        self.loc = loc.into();
        self
    }

    /// Format `date` with a strftime `layout`, `%Y-%m-%d` when `None`.
    ///
    /// A layout chrono cannot format falls back to the default layout.
    pub fn set_lastmod<Tz>(&mut self, date: &DateTime<Tz>, layout: Option<&str>) -> &mut Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let layout = layout
            .filter(|layout| is_valid_layout(layout))
            .unwrap_or(DEFAULT_LASTMOD_LAYOUT);

        let mut formatted = String::new();
        let lastmod = match write!(formatted, "{}", date.format(layout)) {
            Ok(()) => formatted,
            Err(_) => date.format(DEFAULT_LASTMOD_LAYOUT).to_string(),
        };

        self.lastmod = (!lastmod.is_empty()).then_some(lastmod);
        self
    }

    pub fn set_changefreq(&mut self, freq: ChangeFreq) -> &mut Self {
        self.changefreq = Some(freq);
        self
    }

    /// Set the priority. Values outside `[0.0, 1.0]` are rejected and the
    /// stored priority is left untouched.
    pub fn set_priority(&mut self, priority: f64) -> Result<&mut Self, InvalidPriorityError> {
        self.priority = Some(Priority::new(priority)?);
        Ok(self)
    }

    pub fn append_video(&mut self, video: Video) -> &mut Self {
        self.append(Extension::Video(video))
    }

    /// Attach an image. Past [`MAX_IMAGES_PER_URL`] the image is still kept,
    /// but a warning is logged once.
    pub fn append_image(&mut self, image: Image) -> &mut Self {
        self.append(Extension::Image(image));
        if self.image_count() == MAX_IMAGES_PER_URL + 1 {
            log!("warning"; "{} carries more than {} images", self.loc, MAX_IMAGES_PER_URL);
        }
        self
    }

    fn image_count(&self) -> usize {
        self.extensions
            .iter()
            .filter(|ext| matches!(ext, Extension::Image(_)))
            .count()
    }

    pub fn append_news(&mut self, news: News) -> &mut Self {
        self.append(Extension::News(news))
    }

    /// Attach any extension token and mark its namespace.
    pub fn append(&mut self, ext: Extension) -> &mut Self {
        self.namespaces.set_ns(ext.namespace());
        self.extensions.push(ext);
        self
    }

    pub fn loc(&self) -> &str {
        &self.loc
    }

    pub fn lastmod(&self) -> Option<&str> {
        self.lastmod.as_deref()
    }

    pub const fn changefreq(&self) -> Option<ChangeFreq> {
        self.changefreq
    }

    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub const fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Rebind to a document tracker, carrying over this entry's marks.
    pub(crate) fn bind(&mut self, namespaces: &Namespaces) {
        if self.namespaces.shares_with(namespaces) {
            return;
        }
        namespaces.merge(&self.namespaces);
        self.namespaces = namespaces.clone();
    }
}

fn is_valid_layout(layout: &str) -> bool {
    !StrftimeItems::new(layout).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::namespace::Namespace;
    use chrono::{FixedOffset, Utc};

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 5, 14, 30, 45).unwrap()
    }

    #[test]
    fn test_new_url_is_empty() {
        let url = Url::new();
        assert_eq!(url.loc(), "");
        assert_eq!(url.lastmod(), None);
        assert_eq!(url.changefreq(), None);
        assert_eq!(url.priority(), None);
        assert!(url.extensions().is_empty());
        assert!(url.namespaces().is_empty());
    }

    #[test]
    fn test_append_image_past_limit_keeps_all() {
        let mut url = Url::new();
        url.set_loc("https://example.com/gallery/");
        for i in 0..=MAX_IMAGES_PER_URL {
            url.append_image(Image::new(format!("https://example.com/{i}.png")));
        }

        assert_eq!(url.extensions().len(), MAX_IMAGES_PER_URL + 1);
        assert!(url.namespaces().contains(Namespace::Image));
    }

    #[test]
    fn test_setters_chain() {
        let mut url = Url::new();
        url.set_loc("http://example.com/a")
            .set_changefreq(ChangeFreq::Weekly)
            .set_priority(0.8)
            .unwrap();

        assert_eq!(url.loc(), "http://example.com/a");
        assert_eq!(url.changefreq(), Some(ChangeFreq::Weekly));
        assert_eq!(url.priority().unwrap().to_string(), "0.800000");
    }

    #[test]
    fn test_set_lastmod_default_layout() {
        let mut url = Url::new();
        url.set_lastmod(&date(), None);
        assert_eq!(url.lastmod(), Some("2024-06-05"));
    }

    #[test]
    fn test_set_lastmod_custom_layout() {
        let mut url = Url::new();
        url.set_lastmod(&date(), Some("%Y-%m-%dT%H:%M:%S%:z"));
        assert_eq!(url.lastmod(), Some("2024-06-05T14:30:45+00:00"));

        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        url.set_lastmod(&date().with_timezone(&offset), Some("%Y/%m/%d %H"));
        assert_eq!(url.lastmod(), Some("2024/06/05 22"));
    }

    #[test]
    fn test_set_lastmod_invalid_layout_falls_back() {
        let mut url = Url::new();
        url.set_lastmod(&date(), Some("%Q"));
        assert_eq!(url.lastmod(), Some("2024-06-05"));
    }

    #[test]
    fn test_set_lastmod_empty_layout_omits() {
        let mut url = Url::new();
        url.set_lastmod(&date(), Some(""));
        assert_eq!(url.lastmod(), None);
    }

    #[test]
    fn test_set_priority_rejects_and_keeps_previous() {
        let mut url = Url::new();
        url.set_priority(0.3).unwrap();

        assert!(url.set_priority(1.2).is_err());
        assert!(url.set_priority(-0.1).is_err());
        assert_eq!(url.priority().unwrap().value(), 0.3);
    }

    #[test]
    fn test_set_priority_zero_is_explicit() {
        let mut url = Url::new();
        url.set_priority(0.0).unwrap();
        assert_eq!(url.priority().unwrap().to_string(), "0.000000");
    }

    #[test]
    fn test_append_marks_namespaces_monotonically() {
        let doc = Namespaces::new();
        let mut first = Url::with_namespaces(doc.clone());
        let mut second = Url::with_namespaces(doc.clone());

        first.append_video(Video::new("t.jpg", "title", "desc"));
        assert!(doc.contains(Namespace::Video));

        second.append_image(Image::new("a.png"));
        first.append_news(News::new("Daily", "en", "2024-01-01", "Headline"));

        assert!(doc.contains(Namespace::Video));
        assert!(doc.contains(Namespace::Image));
        assert!(doc.contains(Namespace::News));
    }

    #[test]
    fn test_extensions_keep_insertion_order() {
        let mut url = Url::new();
        url.append_image(Image::new("1.png"))
            .append_news(News::new("Daily", "en", "2024-01-01", "Headline"))
            .append_image(Image::new("2.png"));

        let kinds: Vec<_> = url.extensions().iter().map(Extension::namespace).collect();
        assert_eq!(
            kinds,
            vec![Namespace::Image, Namespace::News, Namespace::Image]
        );
    }

    #[test]
    fn test_bind_carries_marks() {
        let mut url = Url::new();
        url.append_image(Image::new("a.png"));

        let doc = Namespaces::new();
        url.bind(&doc);
        assert!(doc.contains(Namespace::Image));
        assert!(url.namespaces().shares_with(&doc));

        url.append_video(Video::new("t.jpg", "title", "desc"));
        assert!(doc.contains(Namespace::Video));
    }
}
