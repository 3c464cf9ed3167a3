//! Sitemap rendering.
//!
//! Turns entries into one or more XML payloads:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">
//!   <url priority="0.800000">
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <image:image>...</image:image>
//!   </url>
//! </urlset>
//! ```
//!
//! When the entry count exceeds `max_links`, entries are split into
//! `<stem>1.xml`, `<stem>2.xml`, ... and a `<sitemapindex>` listing the parts
//! is emitted under the configured filename.

use super::namespace::{Namespace, Namespaces, SITEMAP_NS};
use super::options::Options;
use super::url::Url;
use super::xml::XmlWriter;
use crate::debug;
use flate2::{Compression, write::GzEncoder};
use quick_xml::events::BytesStart;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::io::Write;
use thiserror::Error;

/// Rough per-entry size, used to presize output buffers.
const BYTES_PER_URL: usize = 128;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("XML write error: {0}")]
    Xml(String),

    #[error("gzip compression failed")]
    Compress(#[from] std::io::Error),
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapFile {
    /// File name relative to the public path (`.gz` appended when compressed).
    pub name: String,
    /// Payload, gzip-compressed when requested.
    pub bytes: Vec<u8>,
    /// Number of `<url>` (or `<sitemap>`, for an index) elements.
    pub links: usize,
}

/// Result of rendering a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// `<urlset>` files, in entry order.
    pub files: Vec<SitemapFile>,
    /// `<sitemapindex>` listing `files`, present only when split.
    pub index: Option<SitemapFile>,
}

impl Rendered {
    /// All files to publish: parts first, then the index.
    pub fn all(&self) -> impl Iterator<Item = &SitemapFile> {
        self.files.iter().chain(self.index.as_ref())
    }

    pub fn is_split(&self) -> bool {
        self.index.is_some()
    }
}

/// Render `urls` under `options`.
///
/// Each `<urlset>` declares every namespace in `namespaces` plus those
/// required by entries bound to another tracker.
pub fn render(
    urls: &[Url],
    namespaces: &Namespaces,
    options: &Options,
) -> Result<Rendered, RenderError> {
    let required = required_namespaces(urls, namespaces);
    let max_links = options.max_links().max(1);

    if urls.len() <= max_links {
        let bytes = render_urlset(urls, &required, options.pretty())?;
        let file = finish(options.filename().to_string(), bytes, urls.len(), options)?;
        return Ok(Rendered {
            files: vec![file],
            index: None,
        });
    }

    let stem = options.file_stem();
    let files = urls
        .par_chunks(max_links)
        .enumerate()
        .map(|(i, chunk)| {
            let name = format!("{stem}{}.xml", i + 1);
            debug!("render"; "{} ({} urls)", name, chunk.len());
            let bytes = render_urlset(chunk, &required, options.pretty())?;
            finish(name, bytes, chunk.len(), options)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let locs: Vec<String> = files.iter().map(|f| options.public_url(&f.name)).collect();
    let bytes = render_index(&locs, options.pretty())?;
    let index = finish(options.filename().to_string(), bytes, locs.len(), options)?;

    Ok(Rendered {
        files,
        index: Some(index),
    })
}

/// Union of the document tracker and any foreign entry trackers.
fn required_namespaces(urls: &[Url], namespaces: &Namespaces) -> BTreeSet<Namespace> {
    let mut required = namespaces.required();
    for url in urls {
        if !url.namespaces().shares_with(namespaces) {
            required.extend(url.namespaces().required());
        }
    }
    required
}

fn render_urlset(
    urls: &[Url],
    required: &BTreeSet<Namespace>,
    pretty: bool,
) -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::new(pretty, 256 + urls.len() * BYTES_PER_URL);
    w.decl()?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    for ns in required {
        urlset.push_attribute((ns.xmlns_attr().as_str(), ns.uri()));
    }
    w.start(urlset)?;

    for url in urls {
        write_url(&mut w, url)?;
    }

    w.close("urlset")?;
    Ok(w.into_inner())
}

fn write_url(w: &mut XmlWriter, url: &Url) -> Result<(), RenderError> {
    let mut elem = BytesStart::new("url");
    if let Some(priority) = url.priority() {
        elem.push_attribute(("priority", priority.to_string().as_str()));
    }
    w.start(elem)?;

    w.element("loc", url.loc())?;
    w.optional("lastmod", url.lastmod())?;
    w.optional("changefreq", url.changefreq())?;
    for ext in url.extensions() {
        ext.write_xml(w)?;
    }

    w.close("url")
}

fn render_index(locs: &[String], pretty: bool) -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::new(pretty, 256 + locs.len() * BYTES_PER_URL);
    w.decl()?;

    let mut index = BytesStart::new("sitemapindex");
    index.push_attribute(("xmlns", SITEMAP_NS));
    w.start(index)?;

    for loc in locs {
        w.open("sitemap")?;
        w.element("loc", loc)?;
        w.close("sitemap")?;
    }

    w.close("sitemapindex")?;
    Ok(w.into_inner())
}

/// Apply compression and the matching file name.
fn finish(
    name: String,
    bytes: Vec<u8>,
    links: usize,
    options: &Options,
) -> Result<SitemapFile, RenderError> {
    if !options.compress() {
        return Ok(SitemapFile { name, bytes, links });
    }

    let mut encoder = GzEncoder::new(Vec::with_capacity(bytes.len() / 4), Compression::default());
    encoder.write_all(&bytes)?;
    Ok(SitemapFile {
        name: format!("{name}.gz"),
        bytes: encoder.finish()?,
        links,
    })
}
