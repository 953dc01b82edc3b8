use std::fmt;

/// Display name, site code and chapter count of every book, in canonical order.
const CANON: [(&str, &str, u32); 66] = [
    ("Genesis", "GEN", 50),
    ("Exodus", "EXO", 40),
    ("Leviticus", "LEV", 27),
    ("Numbers", "NUM", 36),
    ("Deuteronomy", "DEU", 34),
    ("Joshua", "JOS", 24),
    ("Judges", "JDG", 21),
    ("Ruth", "RUT", 4),
    ("1 Samuel", "1SA", 31),
    ("2 Samuel", "2SA", 24),
    ("1 Kings", "1KI", 22),
    ("2 Kings", "2KI", 25),
    ("1 Chronicles", "1CH", 29),
    ("2 Chronicles", "2CH", 36),
    ("Ezra", "EZR", 10),
    ("Nehemiah", "NEH", 13),
    ("Esther", "EST", 10),
    ("Job", "JOB", 42),
    ("Psalms", "PSA", 150),
    ("Proverbs", "PRO", 31),
    ("Ecclesiastes", "ECC", 12),
    ("Song of Solomon", "SNG", 8),
    ("Isaiah", "ISA", 66),
    ("Jeremiah", "JER", 52),
    ("Lamentations", "LAM", 5),
    ("Ezekiel", "EZK", 48),
    ("Daniel", "DAN", 12),
    ("Hosea", "HOS", 14),
    ("Joel", "JOL", 3),
    ("Amos", "AMO", 9),
    ("Obadiah", "OBA", 1),
    ("Jonah", "JON", 4),
    ("Micah", "MIC", 7),
    ("Nahum", "NAM", 3),
    ("Habakkuk", "HAB", 3),
    ("Zephaniah", "ZEP", 3),
    ("Haggai", "HAG", 2),
    ("Zechariah", "ZEC", 14),
    ("Malachi", "MAL", 4),
    ("Matthew", "MAT", 28),
    ("Mark", "MRK", 16),
    ("Luke", "LUK", 24),
    ("John", "JHN", 21),
    ("Acts", "ACT", 28),
    ("Romans", "ROM", 16),
    ("1 Corinthians", "1CO", 16),
    ("2 Corinthians", "2CO", 13),
    ("Galatians", "GAL", 6),
    ("Ephesians", "EPH", 6),
    ("Philippians", "PHP", 4),
    ("Colossians", "COL", 4),
    ("1 Thessalonians", "1TH", 5),
    ("2 Thessalonians", "2TH", 3),
    ("1 Timothy", "1TI", 6),
    ("2 Timothy", "2TI", 4),
    ("Titus", "TIT", 3),
    ("Philemon", "PHM", 1),
    ("Hebrews", "HEB", 13),
    ("James", "JAS", 5),
    ("1 Peter", "1PE", 5),
    ("2 Peter", "2PE", 3),
    ("1 John", "1JN", 5),
    ("2 John", "2JN", 1),
    ("3 John", "3JN", 1),
    ("Jude", "JUD", 1),
    ("Revelation", "REV", 22),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Used in section headers.
    pub name: String,
    /// Used in page urls.
    pub code: String,
    pub chapters: u32,
}

impl Book {
    pub fn new(name: impl Into<String>, code: impl Into<String>, chapters: u32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            chapters,
        }
    }
}

/// One chapter page on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageId {
    pub book: String,
    pub chapter: u32,
    /// Path stem of the page, e.g. `GEN01` or `PSA119`.
    pub slug: String,
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

/// Ordered, read-only list of the books to scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTable {
    books: Vec<Book>,
}

impl BookTable {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn canonical() -> Self {
        Self::new(
            CANON
                .iter()
                .map(|&(name, code, chapters)| Book::new(name, code, chapters))
                .collect(),
        )
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Every chapter page, books in table order and chapters ascending within a book.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.books.iter().flat_map(|book| {
            // Books with more than 99 chapters use three digit page names.
            let width = if book.chapters > 99 { 3 } else { 2 };
            (1..=book.chapters).map(move |chapter| PageId {
                book: book.name.clone(),
                chapter,
                slug: format!("{}{:0width$}", book.code, chapter),
            })
        })
    }

    pub fn page_count(&self) -> usize {
        self.books.iter().map(|b| b.chapters as usize).sum()
    }
}
