use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cache::{CacheStore, TranslationCache};
use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::layout;
use crate::sheet::{SheetProcessor, WorkbookReport};
use crate::translator::{GoogleTranslator, Translate};

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub files: Vec<(PathBuf, WorkbookReport)>,
}

impl BatchReport {
    pub fn network_calls(&self) -> usize {
        self.files.iter().map(|(_, r)| r.network_calls()).sum()
    }
}

/// Workbooks in `dir` with the given extension, sorted by file name.
pub fn list_workbooks(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let matches = path
            .file_name()
            .map(|n| n.to_string_lossy().ends_with(&suffix))
            .unwrap_or(false);
        if matches && path.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "Ignored directory entry");
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Translates every workbook of `dir` in place, one after the other, sharing `cache`.
/// The cache file is rewritten after each workbook.
pub fn translate_dir<T: Translate>(
    processor: &SheetProcessor,
    dir: &Path,
    extension: &str,
    store: &CacheStore,
    cache: &mut TranslationCache,
    translator: &T,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for path in list_workbooks(dir, extension)? {
        info!(path = %path.display(), "Processing workbook");
        let workbook = processor
            .process_file(&path, &path, store, cache, translator)
            .with_context(|| format!("failed to translate workbook {}", path.display()))?;
        report.files.push((path, workbook));
    }
    Ok(report)
}

pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    let mut config = AppConfig::load_or_default(Some(Path::new(DEFAULT_CONFIG_FILE)))?;
    if let Some(dir) = args.next() {
        config.paths.target_dir = PathBuf::from(dir);
    }

    layout::ensure_dir(&config.paths.reference_dir)?;
    let store = CacheStore::new(config.cache_path());
    let mut cache = store.load()?;

    let target = layout::target_dir(&config)?;
    let translator = GoogleTranslator::new(&config.translation)?;
    let processor = SheetProcessor::from_config(&config.translation);

    let report = translate_dir(
        &processor,
        &target,
        &config.paths.extension,
        &store,
        &mut cache,
        &translator,
    )?;
    println!(
        "Processed {} workbook(s) in {}: {} new translation(s), {} cached entries",
        report.files.len(),
        target.display(),
        report.network_calls(),
        cache.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_matching_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.xlsx", "a.xlsx", "notes.txt", "c.xls", "10.xlsx"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.xlsx")).unwrap();

        let files = list_workbooks(dir.path(), "xlsx").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["10.xlsx", "a.xlsx", "b.xlsx"]);
    }

    #[test]
    fn empty_directory_is_an_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_workbooks(dir.path(), "xlsx").unwrap().is_empty());
    }
}
