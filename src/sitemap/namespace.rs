//! Document-scoped tracking of optional XML namespaces.
//!
//! Every [`Url`](super::Url) holds a handle to the tracker of the document it
//! belongs to. Attaching an extension marks the extension's namespace, so the
//! `<urlset>` root can declare exactly what is needed without rescanning
//! entries at render time.

use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Namespace of the base sitemap protocol, always declared on the root.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Optional namespace required by a sitemap extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    Video,
    Image,
    News,
}

impl Namespace {
    /// Element prefix, e.g. `video` in `video:video`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::News => "news",
        }
    }

    pub const fn uri(self) -> &'static str {
        match self {
            Self::Video => "http://www.google.com/schemas/sitemap-video/1.1",
            Self::Image => "http://www.google.com/schemas/sitemap-image/1.1",
            Self::News => "http://www.google.com/schemas/sitemap-news/0.9",
        }
    }

    /// Attribute name for the root declaration, e.g. `xmlns:video`.
    pub fn xmlns_attr(self) -> String {
        format!("xmlns:{}", self.prefix())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Shared, monotonic set of required namespaces.
///
/// Cloning yields another handle to the same set. Marks are never removed.
#[derive(Debug, Clone, Default)]
pub struct Namespaces(Arc<RwLock<BTreeSet<Namespace>>>);

impl Namespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `ns` must be declared. Idempotent.
    pub fn set_ns(&self, ns: Namespace) {
        // Fast path: most attachments hit an already-marked namespace
        if self.0.read().contains(&ns) {
            return;
        }
        self.0.write().insert(ns);
    }

    pub fn contains(&self, ns: Namespace) -> bool {
        self.0.read().contains(&ns)
    }

    /// Snapshot of the required namespaces, in declaration order.
    pub fn required(&self) -> BTreeSet<Namespace> {
        self.0.read().clone()
    }

    /// Mark everything `other` requires.
    pub fn merge(&self, other: &Self) {
        if self.shares_with(other) {
            return;
        }
        let marks = other.required();
        if marks.is_empty() {
            return;
        }
        self.0.write().extend(marks);
    }

    /// Whether both handles point at the same tracker.
    pub fn shares_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}
