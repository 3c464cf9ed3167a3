use crate::sitemap::namespace::Namespace;
use crate::sitemap::render::RenderError;
use crate::sitemap::xml::{XmlWriter, qualified};
use serde::{Deserialize, Serialize};

const PREFIX: &str = Namespace::News.prefix();

/// `<news:news>` entry for news articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct News {
    pub publication_name: String,
    /// ISO 639 language code, e.g. `en` or `zh-cn`.
    pub publication_language: String,
    pub publication_date: String,
    pub title: String,
    pub keywords: Option<String>,
}

impl News {
    pub fn new(
        publication_name: impl Into<String>,
        publication_language: impl Into<String>,
        publication_date: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            publication_name: publication_name.into(),
            publication_language: publication_language.into(),
            publication_date: publication_date.into(),
            title: title.into(),
            keywords: None,
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub(crate) fn write_xml(&self, w: &mut XmlWriter) -> Result<(), RenderError> {
        let root = qualified(PREFIX, "news");
        let publication = qualified(PREFIX, "publication");
        w.open(&root)?;
        w.open(&publication)?;
        w.element(&qualified(PREFIX, "name"), &self.publication_name)?;
        w.element(&qualified(PREFIX, "language"), &self.publication_language)?;
        w.close(&publication)?;
        w.element(&qualified(PREFIX, "publication_date"), &self.publication_date)?;
        w.element(&qualified(PREFIX, "title"), &self.title)?;
        w.optional(&qualified(PREFIX, "keywords"), self.keywords.as_deref())?;
        w.close(&root)
    }
}
