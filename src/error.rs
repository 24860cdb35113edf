//! Error type shared by the fetch, parse and export stages.

/// Everything that can make a scrape fail outright.
///
/// Missing title, price or image elements are not errors; the parser
/// falls back to default field values for those.
#[derive(thiserror::Error, Debug)]
pub enum CrawlError {
    #[error("failed to fetch page: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to parse page: {0}")]
    Parse(String),

    #[error("failed to build spreadsheet: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

}

pub type Result<T> = std::result::Result<T, CrawlError>;
