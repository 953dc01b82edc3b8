use std::path::Path;

use tokio::{fs::File, io::AsyncWriteExt};

/// One chapter of the output: a header line followed by its text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub text: String,
}

/// The whole output file, kept in memory until every page is in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    sections: Vec<Section>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sections: Vec::with_capacity(capacity),
        }
    }

    pub fn push_section(&mut self, header: impl Into<String>, text: impl Into<String>) {
        self.sections.push(Section {
            header: header.into(),
            text: text.into(),
        });
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections in insertion order, separated by a blank line. Ends with a single newline.
    pub fn render(&self) -> String {
        let mut out = self
            .sections
            .iter()
            .map(|s| format!("{}\n{}", s.header, s.text))
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        out
    }

    /// Creates or truncates the file at `path` and writes the rendered document.
    /// Returns the number of bytes written.
    pub async fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<usize> {
        let bytes = self.render().into_bytes();
        let mut file = File::create(path).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        Ok(bytes.len())
    }
}
