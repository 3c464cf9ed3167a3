use crate::sitemap::namespace::Namespace;
use crate::sitemap::render::RenderError;
use crate::sitemap::xml::{XmlWriter, qualified};
use serde::{Deserialize, Serialize};

const PREFIX: &str = Namespace::Video.prefix();

/// `<video:video>` entry.
///
/// For several videos on one page, attach one `Video` per video to the same
/// [`Url`](crate::sitemap::Url). Either `content_loc` or `player_loc` should be
/// set for search engines to accept the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Video {
    pub thumbnail_loc: String,
    pub title: String,
    pub description: String,
    pub content_loc: Option<String>,
    pub player_loc: Option<String>,
    /// Duration in seconds.
    pub duration: Option<u32>,
    pub publication_date: Option<String>,
    pub family_friendly: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(
        thumbnail_loc: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            thumbnail_loc: thumbnail_loc.into(),
            title: title.into(),
            description: description.into(),
            content_loc: None,
            player_loc: None,
            duration: None,
            publication_date: None,
            family_friendly: None,
            tags: Vec::new(),
        }
    }

    pub fn with_content_loc(mut self, loc: impl Into<String>) -> Self {
        self.content_loc = Some(loc.into());
        self
    }

    pub fn with_player_loc(mut self, loc: impl Into<String>) -> Self {
        self.player_loc = Some(loc.into());
        self
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn with_publication_date(mut self, date: impl Into<String>) -> Self {
        self.publication_date = Some(date.into());
        self
    }

    pub fn with_family_friendly(mut self, family_friendly: bool) -> Self {
        self.family_friendly = Some(family_friendly);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub(crate) fn write_xml(&self, w: &mut XmlWriter) -> Result<(), RenderError> {
        let root = qualified(PREFIX, "video");
        w.open(&root)?;
        w.element(&qualified(PREFIX, "thumbnail_loc"), &self.thumbnail_loc)?;
        w.element(&qualified(PREFIX, "title"), &self.title)?;
        w.element(&qualified(PREFIX, "description"), &self.description)?;
        w.optional(&qualified(PREFIX, "content_loc"), self.content_loc.as_deref())?;
        w.optional(&qualified(PREFIX, "player_loc"), self.player_loc.as_deref())?;
        w.optional(&qualified(PREFIX, "duration"), self.duration)?;
        w.optional(
            &qualified(PREFIX, "publication_date"),
            self.publication_date.as_deref(),
        )?;
        w.optional(
            &qualified(PREFIX, "family_friendly"),
            self.family_friendly.map(yes_no),
        )?;
        let tag = qualified(PREFIX, "tag");
        for value in &self.tags {
            w.element(&tag, value)?;
        }
        w.close(&root)
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
