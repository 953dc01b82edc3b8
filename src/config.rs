use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::extract::ContentSelectors;
use crate::table::{BookTable, PageId};
use crate::{BASE_URL, OUTPUT_FILE, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Everything a run needs. Built once and only ever borrowed.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
    pub selectors: ContentSelectors,
    pub table: BookTable,
}

impl Config {
    pub fn page_url(&self, page: &PageId) -> String {
        format!("{}/{}.htm", self.base_url.trim_end_matches('/'), page.slug)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            output_path: output_path_beside_exe(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.into(),
            selectors: ContentSelectors::default(),
            table: BookTable::canonical(),
        }
    }
}

/// The output file goes next to the running executable.
/// Falls back to the working directory if the executable path can't be resolved.
fn output_path_beside_exe() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map(|dir| dir.join(OUTPUT_FILE))
        .unwrap_or_else(|| PathBuf::from(OUTPUT_FILE))
}
