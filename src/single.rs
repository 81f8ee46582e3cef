use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::cache::CacheStore;
use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::layout;
use crate::sheet::SheetProcessor;
use crate::translator::GoogleTranslator;

/// Translates one workbook into a separate English artifact; the input stays untouched.
pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    let config = AppConfig::load_or_default(Some(Path::new(DEFAULT_CONFIG_FILE)))?;
    let (default_input, default_output) = layout::input_output_paths(&config)?;
    let input = args.next().map(PathBuf::from).unwrap_or(default_input);
    let output = args.next().map(PathBuf::from).unwrap_or(default_output);

    if !input.is_file() {
        return Err(anyhow!("input workbook not found: {}", input.display()));
    }
    if let Some(parent) = output.parent() {
        layout::ensure_dir(parent)?;
    }

    let store = CacheStore::new(config.cache_path());
    let mut cache = store.load()?;
    let translator = GoogleTranslator::new(&config.translation)?;
    let processor = SheetProcessor::from_config(&config.translation);

    processor
        .process_file(&input, &output, &store, &mut cache, &translator)
        .with_context(|| format!("failed to translate workbook {}", input.display()))?;
    println!("Translated workbook saved to {}", output.display());
    Ok(())
}
