use std::path::Path;

use tracing::info;
use umya_spreadsheet::Spreadsheet;

use crate::cache::{CacheStore, TranslationCache};
use crate::cell::{TranscribeOutcome, Transcriber};
use crate::config::TranslationConfig;
use crate::error::{Result, XltransError};
use crate::translator::Translate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetDecision {
    /// `<name>.<marker>` is already in the workbook.
    AlreadyTranslated,
    /// The sheet is itself an English variant.
    IsTranslation,
    Translate,
}

pub fn translated_sheet_name(name: &str, marker: &str) -> String {
    format!("{name}.{marker}")
}

/// Rules are checked in order; the first match wins.
pub fn decide<S: AsRef<str>>(sheet_names: &[S], name: &str, marker: &str) -> SheetDecision {
    let counterpart = translated_sheet_name(name, marker);
    if sheet_names.iter().any(|n| n.as_ref() == counterpart) {
        return SheetDecision::AlreadyTranslated;
    }
    // TODO: the suffix rule is subsumed by the substring rule; drop one once it is
    // settled whether names like "영문 요약" count as English variants.
    if name.contains(marker) {
        return SheetDecision::IsTranslation;
    }
    if name.ends_with(marker) {
        return SheetDecision::IsTranslation;
    }
    SheetDecision::Translate
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetReport {
    pub translated: usize,
    pub cached: usize,
    pub skipped: usize,
}

impl SheetReport {
    fn record(&mut self, outcome: TranscribeOutcome) {
        match outcome {
            TranscribeOutcome::Translated => self.translated += 1,
            TranscribeOutcome::Cached => self.cached += 1,
            TranscribeOutcome::Skipped => self.skipped += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookReport {
    /// Source sheet name and the counts of its translation, in sheet order.
    pub translated_sheets: Vec<(String, SheetReport)>,
    pub skipped_sheets: Vec<(String, SheetDecision)>,
}

impl WorkbookReport {
    pub fn network_calls(&self) -> usize {
        self.translated_sheets.iter().map(|(_, r)| r.translated).sum()
    }
}

/// Adds an English sheet next to every untranslated sheet of a workbook.
#[derive(Debug, Clone)]
pub struct SheetProcessor {
    transcriber: Transcriber,
    marker: String,
}

impl SheetProcessor {
    pub fn new(transcriber: Transcriber, marker: impl Into<String>) -> Self {
        Self {
            transcriber,
            marker: marker.into(),
        }
    }

    pub fn from_config(config: &TranslationConfig) -> Self {
        Self::new(Transcriber::from_config(config), &config.sheet_marker)
    }

    pub fn translate_workbook<T: Translate>(
        &self,
        book: &mut Spreadsheet,
        cache: &mut TranslationCache,
        translator: &T,
    ) -> Result<WorkbookReport> {
        let mut report = WorkbookReport::default();

        // Sheets appended below are not visited again.
        let names: Vec<String> = sheet_names(book);
        for name in names {
            let decision = decide(sheet_names(book).as_slice(), &name, &self.marker);
            match decision {
                SheetDecision::AlreadyTranslated => {
                    info!(sheet = %name, "This sheet already translated");
                    report.skipped_sheets.push((name, decision));
                }
                SheetDecision::IsTranslation => {
                    info!(sheet = %name, "English sheet will be skipped");
                    report.skipped_sheets.push((name, decision));
                }
                SheetDecision::Translate => {
                    info!(sheet = %name, "Translating sheet");
                    let sheet_report = self.translate_sheet(book, &name, cache, translator)?;
                    report.translated_sheets.push((name, sheet_report));
                }
            }
        }

        Ok(report)
    }

    /// Copies sheet `name` to `<name>.<marker>` and overwrites every non-empty cell
    /// of the copy with its translation.
    pub fn translate_sheet<T: Translate>(
        &self,
        book: &mut Spreadsheet,
        name: &str,
        cache: &mut TranslationCache,
        translator: &T,
    ) -> Result<SheetReport> {
        let dest_name = translated_sheet_name(name, &self.marker);
        let source = book
            .get_sheet_by_name(name)
            .ok_or_else(|| XltransError::MissingSheet(name.to_string()))?;

        let mut dest = source.clone();
        dest.set_name(dest_name.as_str());

        let mut cells = source.get_cell_collection();
        cells.sort_by_key(|c| {
            let coord = c.get_coordinate();
            (*coord.get_row_num(), *coord.get_col_num())
        });

        let mut report = SheetReport::default();
        for cell in cells {
            let outcome = self
                .transcriber
                .transcribe(cell, &mut dest, cache, translator)?;
            report.record(outcome);
        }

        book.add_sheet(dest)
            .map_err(|e| XltransError::SheetConflict(format!("{dest_name}: {e}")))?;
        Ok(report)
    }

    /// Reads `input`, translates it, persists the cache, then writes the workbook to
    /// `output` (which may be `input` itself).
    pub fn process_file<T: Translate>(
        &self,
        input: &Path,
        output: &Path,
        store: &CacheStore,
        cache: &mut TranslationCache,
        translator: &T,
    ) -> Result<WorkbookReport> {
        let mut book = read_workbook(input)?;
        let report = self.translate_workbook(&mut book, cache, translator)?;

        store.save(cache)?;
        write_workbook(&book, output)?;
        info!(
            path = %output.display(),
            sheets = report.translated_sheets.len(),
            calls = report.network_calls(),
            "Saved workbook"
        );
        Ok(report)
    }
}

pub fn sheet_names(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection()
        .iter()
        .map(|ws| ws.get_name().to_string())
        .collect()
}

pub fn read_workbook(path: &Path) -> Result<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read(path).map_err(|e| XltransError::Spreadsheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn write_workbook(book: &Spreadsheet, path: &Path) -> Result<()> {
    umya_spreadsheet::writer::xlsx::write(book, path).map_err(|e| XltransError::Spreadsheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
