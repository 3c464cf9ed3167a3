use crate::sitemap::namespace::Namespace;
use crate::sitemap::render::RenderError;
use crate::sitemap::xml::{XmlWriter, qualified};
use serde::{Deserialize, Serialize};

const PREFIX: &str = Namespace::Image.prefix();

/// Images a single `<url>` may carry before search engines ignore the rest.
pub const MAX_IMAGES_PER_URL: usize = 1000;

/// `<image:image>` entry. A `<url>` should carry at most
/// [`MAX_IMAGES_PER_URL`] of them; [`Url`](crate::Url) warns past that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
    pub loc: String,
    pub caption: Option<String>,
    pub geo_location: Option<String>,
    pub title: Option<String>,
    pub license: Option<String>,
}

impl Image {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            caption: None,
            geo_location: None,
            title: None,
            license: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_geo_location(mut self, geo_location: impl Into<String>) -> Self {
        self.geo_location = Some(geo_location.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub(crate) fn write_xml(&self, w: &mut XmlWriter) -> Result<(), RenderError> {
        let root = qualified(PREFIX, "image");
        w.open(&root)?;
        w.element(&qualified(PREFIX, "loc"), &self.loc)?;
        w.optional(&qualified(PREFIX, "caption"), self.caption.as_deref())?;
        w.optional(&qualified(PREFIX, "geo_location"), self.geo_location.as_deref())?;
        w.optional(&qualified(PREFIX, "title"), self.title.as_deref())?;
        w.optional(&qualified(PREFIX, "license"), self.license.as_deref())?;
        w.close(&root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_minimal() {
        let mut w = XmlWriter::new(false, 128);
        Image::new("https://example.com/a.png").write_xml(&mut w).unwrap();
        let xml = String::from_utf8(w.into_inner()).unwrap();

        assert_eq!(
            xml,
            "<image:image><image:loc>https://example.com/a.png</image:loc></image:image>"
        );
    }

    #[test]
    fn test_image_optional_fields() {
        let image = Image::new("a.png")
            .with_caption("A & B")
            .with_title("Title")
            .with_license("https://example.com/license");
        let mut w = XmlWriter::new(false, 256);
        image.write_xml(&mut w).unwrap();
        let xml = String::from_utf8(w.into_inner()).unwrap();

        assert!(xml.contains("<image:caption>A &amp; B</image:caption>"));
        assert!(xml.contains("<image:title>Title</image:title>"));
        assert!(xml.contains("<image:license>https://example.com/license</image:license>"));
        assert!(!xml.contains("geo_location"));
    }
}
