use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed translation response: {0}")]
    MalformedResponse(String),

    #[error("translation failed: {0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum XltransError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache file {} is malformed: {source}", path.display())]
    CacheParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode cache file {}: {source}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("spreadsheet error in {}: {message}", path.display())]
    Spreadsheet { path: PathBuf, message: String },

    #[error(transparent)]
    Translation(#[from] TranslateError),

    #[error("configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("cannot add sheet {0}")]
    SheetConflict(String),

    #[error("no sheet named {0}")]
    MissingSheet(String),
}

pub type Result<T> = std::result::Result<T, XltransError>;
