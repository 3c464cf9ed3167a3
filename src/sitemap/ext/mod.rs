//! Sitemap extensions attached to a `<url>` entry.
//!
//! | Kind  | Element        | Namespace                                         |
//! |-------|----------------|---------------------------------------------------|
//! | Video | `video:video`  | `http://www.google.com/schemas/sitemap-video/1.1` |
//! | Image | `image:image`  | `http://www.google.com/schemas/sitemap-image/1.1` |
//! | News  | `news:news`    | `http://www.google.com/schemas/sitemap-news/0.9`  |

mod image;
mod news;
mod video;

pub use image::{Image, MAX_IMAGES_PER_URL};
pub use news::News;
pub use video::Video;

use super::namespace::Namespace;
use super::render::RenderError;
use super::xml::XmlWriter;

/// One extension token, serialized after the `<url>` metadata in attachment order.
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    Video(Video),
    Image(Image),
    News(News),
}

impl Extension {
    /// Namespace that must be declared on the root when this token is present.
    pub const fn namespace(&self) -> Namespace {
        match self {
            Self::Video(_) => Namespace::Video,
            Self::Image(_) => Namespace::Image,
            Self::News(_) => Namespace::News,
        }
    }

    pub(crate) fn write_xml(&self, w: &mut XmlWriter) -> Result<(), RenderError> {
        match self {
            Self::Video(video) => video.write_xml(w),
            Self::Image(image) => image.write_xml(w),
            Self::News(news) => news.write_xml(w),
        }
    }
}

impl From<Video> for Extension {
    fn from(video: Video) -> Self {
        Self::Video(video)
    }
}

impl From<Image> for Extension {
    fn from(image: Image) -> Self {
        Self::Image(image)
    }
}

impl From<News> for Extension {
    fn from(news: News) -> Self {
        Self::News(news)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_maps_to_one_namespace() {
        let video = Extension::from(Video::new("t.jpg", "title", "desc"));
        let image = Extension::from(Image::new("a.png"));
        let news = Extension::from(News::new("Daily", "en", "2024-01-01", "Headline"));

        assert_eq!(video.namespace(), Namespace::Video);
        assert_eq!(image.namespace(), Namespace::Image);
        assert_eq!(news.namespace(), Namespace::News);
    }
}
