use thiserror::Error;

use crate::table::PageId;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't fetch {page}: {source}")]
    Fetch {
        page: PageId,
        #[source]
        source: reqwest::Error,
    },
    #[error("Couldn't fetch {page}: server answered with status {status}")]
    Status {
        page: PageId,
        status: reqwest::StatusCode,
    },

    #[error("The selector you are trying to scrape for is invalid. Selector: {0}")]
    ParseMissingSelector(String),
    #[error("No verse text found on the page for {page}")]
    MissingContent { page: PageId },

    #[error("The book table doesn't contain any chapters.")]
    EmptyTable,

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
