use std::collections::HashSet;

use scraper::{ElementRef, Html, Node, Selector};
use unicode_normalization::UnicodeNormalization;

use crate::{
    Error, Result, CONTENT_SELECTOR, SKIP_SELECTOR, SMALLCAPS_SELECTOR, VERSE_SELECTOR,
};

/// CSS selectors describing where the text lives in a chapter page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSelectors {
    /// Nodes holding the text, each starts a new line.
    pub content: String,
    /// Verse number markers, each starts a new line that keeps the number.
    pub verse: String,
    /// Text inside these is dropped.
    pub skip: String,
    /// Text inside these is uppercased.
    pub smallcaps: String,
}

impl ContentSelectors {
    pub fn new(
        content: impl Into<String>,
        verse: impl Into<String>,
        skip: impl Into<String>,
        smallcaps: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            verse: verse.into(),
            skip: skip.into(),
            smallcaps: smallcaps.into(),
        }
    }

    pub fn compile(&self) -> Result<CompiledSelectors> {
        Ok(CompiledSelectors {
            content: create_selector(&self.content)?,
            verse: create_selector(&self.verse)?,
            skip: create_selector(&self.skip)?,
            smallcaps: create_selector(&self.smallcaps)?,
        })
    }
}

impl Default for ContentSelectors {
    fn default() -> Self {
        Self::new(
            CONTENT_SELECTOR,
            VERSE_SELECTOR,
            SKIP_SELECTOR,
            SMALLCAPS_SELECTOR,
        )
    }
}

#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    content: Selector,
    verse: Selector,
    skip: Selector,
    smallcaps: Selector,
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}

/// Extracts the text of every content node in the page as normalized lines.
/// Every content node and every verse marker inside one starts a new line, the verse number
/// is kept at the front of its line. Lines that are empty after normalization are left out.
/// Returns `None` if the page has no text at all.
pub fn extract_text(html: &str, selectors: &CompiledSelectors) -> Option<String> {
    let doc = Html::parse_document(html);

    let lines: Vec<String> = doc
        .select(&selectors.content)
        .flat_map(|node| node_lines(node, selectors))
        .map(|line| normalize_text(&line))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Collects the raw text under `node`, split at verse markers.
/// Skipped elements are left out and small caps are uppercased.
fn node_lines(node: ElementRef, selectors: &CompiledSelectors) -> Vec<String> {
    let verses: HashSet<_> = node.select(&selectors.verse).map(|el| el.id()).collect();
    let skipped: HashSet<_> = node.select(&selectors.skip).map(|el| el.id()).collect();
    let smallcaps: HashSet<_> = node.select(&selectors.smallcaps).map(|el| el.id()).collect();

    let mut lines = Vec::new();
    let mut current = String::new();
    for child in node.descendants() {
        let text = match child.value() {
            Node::Element(_) if verses.contains(&child.id()) => {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            Node::Text(text) => text,
            _ => continue,
        };
        if child.ancestors().any(|a| skipped.contains(&a.id())) {
            continue;
        }
        if child.ancestors().any(|a| smallcaps.contains(&a.id())) {
            current.push_str(&text.to_uppercase());
        } else {
            current.push_str(text);
        }
    }
    lines.push(current);
    lines
}

/// Normalizes to NFC, straightens curly quotes, drops thin spaces
/// and collapses all whitespace runs into a single space.
pub fn normalize_text(input: &str) -> String {
    let straightened: String = input
        .nfc()
        .filter(|&c| c != '\u{2009}')
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            c => c,
        })
        .collect();

    straightened.split_whitespace().collect::<Vec<_>>().join(" ")
}
