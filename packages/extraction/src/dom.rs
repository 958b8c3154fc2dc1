//! Minimal queryable view over a parsed HTML document.
//!
//! Extractors are written against this capability set only: find the first or
//! all descendants matching a CSS selector, step to the next sibling element
//! with a given tag, read trimmed text, read an attribute. Everything else the
//! `scraper` crate offers stays behind this module.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document. Parsing is lenient and never fails.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn find_all(&self, selector: &Selector) -> Vec<Element<'_>> {
        self.html.select(selector).map(Element::from).collect()
    }
}

/// A single element inside a [`Document`].
#[derive(Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Element<'a> {
    fn from(inner: ElementRef<'a>) -> Self {
        Self { inner }
    }
}

impl<'a> Element<'a> {
    /// Tag name, lowercase.
    pub fn tag_name(&self) -> &'a str {
        self.inner.value().name()
    }

    /// First descendant matching `selector`.
    pub fn find_first(&self, selector: &Selector) -> Option<Element<'a>> {
        self.inner.select(selector).next().map(Element::from)
    }

    /// All descendants matching `selector`, in document order.
    pub fn find_all(&self, selector: &Selector) -> Vec<Element<'a>> {
        self.inner.select(selector).map(Element::from).collect()
    }

    /// First following sibling element whose tag is `tag`.
    ///
    /// Text nodes and siblings with other tags are stepped over, so this
    /// finds `<footer>` even when whitespace or another element sits between.
    pub fn next_sibling_element(&self, tag: &str) -> Option<Element<'a>> {
        self.inner
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| sibling.value().name() == tag)
            .map(Element::from)
    }

    /// First descendant `<a>` whose text is exactly `label` (untrimmed).
    pub fn find_link_with_text(&self, label: &str) -> Option<Element<'a>> {
        self.find_all(&LINK)
            .into_iter()
            .find(|link| link.raw_text() == label)
    }

    /// Concatenated descendant text, untouched.
    pub fn raw_text(&self) -> String {
        self.inner.text().collect()
    }

    /// Concatenated descendant text with surrounding whitespace removed.
    pub fn text(&self) -> String {
        self.raw_text().trim().to_string()
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }

    /// Outer HTML, for diagnostics.
    pub fn html(&self) -> String {
        self.inner.html()
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.html())
    }
}
