pub mod batch;
pub mod cache;
pub mod cell;
pub mod config;
pub mod error;
pub mod layout;
pub mod sheet;
pub mod single;
pub mod translator;

pub use cache::{CacheStore, TranslationCache};
pub use cell::{TranscribeOutcome, Transcriber};
pub use config::AppConfig;
pub use error::{Result, TranslateError, XltransError};
pub use sheet::{SheetDecision, SheetProcessor, WorkbookReport};
pub use translator::{GoogleTranslator, Translate};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "xltrans=info";

/// `RUST_LOG`-style directives, or `xltrans=info` when absent or unparsable.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Logs to stderr, `xltrans=info` unless `RUST_LOG` says otherwise.
pub fn init_tracing() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(directives.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
