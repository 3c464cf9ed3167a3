//! sitemap-gen - build `sitemap.xml` files.
//!
//! The [`sitemap`] module holds the document model ([`Url`], [`Options`],
//! [`Priority`], [`ChangeFreq`], the shared namespace tracker) and the
//! renderer. [`config`] and [`cli`] drive it from a `sitemap.toml` manifest.

pub mod cli;
pub mod config;
pub mod logger;
pub mod sitemap;

pub use sitemap::{
    ChangeFreq, Extension, Image, InvalidPriorityError, MAX_IMAGES_PER_URL, Namespace, Namespaces,
    News, Options, Priority, RenderError, Rendered, Sitemap, SitemapFile, Url, Video,
};
