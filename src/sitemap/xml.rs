//! Thin wrapper over `quick_xml::Writer` for sitemap output.

use super::render::RenderError;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::fmt::Display;

const INDENT: usize = 2;

pub(crate) struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    pub fn new(pretty: bool, capacity: usize) -> Self {
        let buf = Vec::with_capacity(capacity);
        let inner = if pretty {
            Writer::new_with_indent(buf, b' ', INDENT)
        } else {
            Writer::new(buf)
        };
        Self { inner }
    }

    /// `<?xml version="1.0" encoding="UTF-8"?>`
    pub fn decl(&mut self) -> Result<(), RenderError> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    pub fn start(&mut self, elem: BytesStart<'_>) -> Result<(), RenderError> {
        self.emit(Event::Start(elem))
    }

    pub fn open(&mut self, name: &str) -> Result<(), RenderError> {
        self.start(BytesStart::new(name))
    }

    pub fn close(&mut self, name: &str) -> Result<(), RenderError> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    /// `<name>text</name>`, text escaped.
    pub fn element(&mut self, name: &str, text: &str) -> Result<(), RenderError> {
        self.open(name)?;
        self.emit(Event::Text(BytesText::new(text)))?;
        self.close(name)
    }

    /// Write `<name>` only when `value` is present.
    pub fn optional<T: Display>(
        &mut self,
        name: &str,
        value: Option<T>,
    ) -> Result<(), RenderError> {
        match value {
            Some(value) => self.element(name, &value.to_string()),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner.into_inner()
    }

    fn emit(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.inner
            .write_event(event)
            .map_err(|e| RenderError::Xml(e.to_string()))
    }
}

/// Qualified element name, e.g. `video:title`.
pub(crate) fn qualified(prefix: &str, local: &str) -> String {
    format!("{prefix}:{local}")
}
