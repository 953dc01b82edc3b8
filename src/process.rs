use std::path::PathBuf;

use chrono::Local;

use crate::config::Config;
use crate::document::OutputDocument;
use crate::extract::extract_text;
use crate::request::PageSource;
use crate::{info_time, Error, Result};

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub pages: usize,
    pub bytes_downloaded: usize,
    pub bytes_written: usize,
    pub output_path: PathBuf,
}

/// Fetches every page of the table in order, one at a time, and writes the collected text
/// to `config.output_path`.
///
/// The first failing page aborts the run. The output file is only written once every page
/// made it, so a failed run never leaves a partial file behind.
pub async fn process_site(config: &Config, source: &impl PageSource) -> Result<Summary> {
    let start_time = Local::now();
    let selectors = config.selectors.compile()?;

    let page_count = config.table.page_count();
    if page_count == 0 {
        return Err(Error::EmptyTable);
    }
    info_time!("Started scraping {} pages", page_count);

    let mut document = OutputDocument::with_capacity(page_count);
    let mut bytes_downloaded = 0;

    for page in config.table.pages() {
        let url = config.page_url(&page);
        tracing::debug!(page = %page, url = %url, "Fetching");

        let html = source.fetch(&page, &url).await?;
        bytes_downloaded += html.len();

        let Some(text) = extract_text(&html, &selectors) else {
            return Err(Error::MissingContent { page });
        };
        tracing::info!(page = %page, bytes = html.len(), "Processed");

        document.push_section(page.to_string(), text);
    }
    info_time!(start_time, "Finished PROCESSING ALL pages.");

    let local_now = Local::now();
    let bytes_written = document.write_to(&config.output_path).await?;
    info_time!(
        local_now,
        "Wrote the results to file: {}",
        config.output_path.display()
    );

    Ok(Summary {
        pages: document.sections().len(),
        bytes_downloaded,
        bytes_written,
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::extract::ContentSelectors;
    use crate::table::{Book, BookTable, PageId};

    /// Serves canned pages by slug and records every url it was asked for.
    #[derive(Default)]
    struct MockSource {
        pages: HashMap<String, String>,
        failing: Option<String>,
        requested: Mutex<Vec<String>>,
    }

    impl MockSource {
        fn with_page(mut self, slug: &str, html: &str) -> Self {
            self.pages.insert(slug.into(), html.into());
            self
        }

        fn failing_on(mut self, slug: &str) -> Self {
            self.failing = Some(slug.into());
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for MockSource {
        async fn fetch(&self, page: &PageId, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            if self.failing.as_deref() == Some(page.slug.as_str()) {
                return Err(Error::Status {
                    page: page.clone(),
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                });
            }
            Ok(self.pages.get(&page.slug).cloned().unwrap_or_default())
        }
    }

    fn test_config(dir: &tempfile::TempDir, books: Vec<Book>) -> Config {
        Config {
            base_url: "http://mock".into(),
            output_path: dir.path().join("bible.txt"),
            selectors: ContentSelectors::new("p", "span.verse", "sup", "span.nd"),
            table: BookTable::new(books),
            ..Config::default()
        }
    }

    fn ruth_source() -> MockSource {
        MockSource::default()
            .with_page("RUT01", "<p>Ruth one a</p><p>Ruth one b</p>")
            .with_page("RUT02", "<p>Ruth two</p>")
            .with_page("JUD01", "<p>Jude one</p>")
    }

    #[tokio::test]
    async fn genesis_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, vec![Book::new("Genesis", "GEN", 1)]);
        let source = MockSource::default().with_page(
            "GEN01",
            "<html><body><h1>Genesis 1</h1><p>In the beginning...</p></body></html>",
        );

        let summary = process_site(&config, &source).await.unwrap();

        let out = std::fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(out, "Genesis 1\nIn the beginning...\n");
        assert_eq!(summary.pages, 1);
        assert_eq!(summary.bytes_written, out.len());
        assert_eq!(summary.output_path, config.output_path);
    }

    #[tokio::test]
    async fn verses_keep_their_numbers_and_lines() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, vec![Book::new("Genesis", "GEN", 1)]);
        let source = MockSource::default().with_page(
            "GEN01",
            concat!(
                r#"<p><span class="verse">1&#160;</span>In the beginning, God created the heavens and the earth. "#,
                r#"<span class="verse">2&#160;</span>The earth was formless and empty.</p>"#,
            ),
        );

        process_site(&config, &source).await.unwrap();

        let out = std::fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(
            out,
            "Genesis 1\n1 In the beginning, God created the heavens and the earth.\n2 The earth was formless and empty.\n"
        );
    }

    #[tokio::test]
    async fn one_request_per_page_in_table_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &dir,
            vec![Book::new("Ruth", "RUT", 2), Book::new("Jude", "JUD", 1)],
        );
        let source = ruth_source();

        process_site(&config, &source).await.unwrap();

        assert_eq!(
            source.requested(),
            [
                "http://mock/RUT01.htm",
                "http://mock/RUT02.htm",
                "http://mock/JUD01.htm"
            ]
        );
    }

    #[tokio::test]
    async fn one_section_per_page_in_table_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &dir,
            vec![Book::new("Jude", "JUD", 1), Book::new("Ruth", "RUT", 2)],
        );

        process_site(&config, &ruth_source()).await.unwrap();

        let out = std::fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(
            out,
            "Jude 1\nJude one\n\nRuth 1\nRuth one a\nRuth one b\n\nRuth 2\nRuth two\n"
        );
    }

    #[tokio::test]
    async fn failed_fetch_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &dir,
            vec![Book::new("Ruth", "RUT", 2), Book::new("Jude", "JUD", 1)],
        );
        let source = ruth_source().failing_on("RUT02");

        let err = process_site(&config, &source).await.unwrap_err();

        match err {
            Error::Status { page, .. } => assert_eq!(page.to_string(), "Ruth 2"),
            other => panic!("expected a status error, got {other:?}"),
        }
        // Nothing after the failing page is requested.
        assert_eq!(source.requested().len(), 2);
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn page_without_content_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, vec![Book::new("Ruth", "RUT", 3)]);

        let err = process_site(&config, &ruth_source()).await.unwrap_err();

        assert!(matches!(err, Error::MissingContent { ref page } if page.chapter == 3));
        assert!(err.to_string().contains("Ruth 3"));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn failed_run_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, vec![Book::new("Ruth", "RUT", 2)]);
        std::fs::write(&config.output_path, "previous run").unwrap();

        let source = ruth_source().failing_on("RUT01");
        assert!(process_site(&config, &source).await.is_err());

        let out = std::fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(out, "previous run");
    }

    #[tokio::test]
    async fn empty_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, Vec::new());

        let err = process_site(&config, &MockSource::default()).await.unwrap_err();

        assert!(matches!(err, Error::EmptyTable));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn reruns_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(
            &dir,
            vec![Book::new("Ruth", "RUT", 2), Book::new("Jude", "JUD", 1)],
        );

        process_site(&config, &ruth_source()).await.unwrap();
        let first = std::fs::read(&config.output_path).unwrap();
        process_site(&config, &ruth_source()).await.unwrap();
        let second = std::fs::read(&config.output_path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn counts_downloaded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, vec![Book::new("Ruth", "RUT", 2)]);

        let summary = process_site(&config, &ruth_source()).await.unwrap();

        let expected = "<p>Ruth one a</p><p>Ruth one b</p>".len() + "<p>Ruth two</p>".len();
        assert_eq!(summary.bytes_downloaded, expected);
        assert_eq!(summary.pages, 2);
    }
}
