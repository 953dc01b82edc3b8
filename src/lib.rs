//! Bible scraper.
//! Walks every chapter page of the World English Bible on ebible.org in canonical order,
//! pulls the verse text out of each page and writes the whole thing into one plain text file.

pub mod config;
pub mod document;
mod error;
pub mod extract;
mod macros;
pub mod process;
pub mod request;
pub mod table;

pub use error::{Error, Result};

const BASE_URL: &str = "https://ebible.org/eng-web";
const OUTPUT_FILE: &str = "WEB_Full_Bible.txt";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("scripture-scrap/", env!("CARGO_PKG_VERSION"));

/// Every block inside the chapter body except labels, headings and footnotes.
const CONTENT_SELECTOR: &str = "div.main > div:not(.chapterlabel):not(.mt):not(.mt1):not(.mt2)\
    :not(.ms):not(.ms1):not(.s):not(.s1):not(.s2):not(.r):not(.footnote):not(.copyright)";
/// Verse numbers start a new line.
const VERSE_SELECTOR: &str = "span.verse";
/// Footnote markers are not part of the text.
const SKIP_SELECTOR: &str = "a.notemark, sup";
/// The divine name is set in small caps.
const SMALLCAPS_SELECTOR: &str = "span.nd";
