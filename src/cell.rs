use regex::Regex;
use tracing::info;
use umya_spreadsheet::{Cell, CellRawValue, Style, Worksheet};

use crate::cache::TranslationCache;
use crate::config::TranslationConfig;
use crate::error::Result;
use crate::translator::Translate;

pub fn column_number_to_name(mut column: u32) -> String {
    // 1 -> A, 26 -> Z, 27 -> AA ...
    let mut name = String::new();
    while column > 0 {
        let rem = ((column - 1) % 26) as u8;
        name.insert(0, (b'A' + rem) as char);
        column = (column - 1) / 26;
    }
    name
}

pub fn to_a1(col_1based: u32, row_1based: u32) -> String {
    format!("{}{}", column_number_to_name(col_1based), row_1based)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscribeOutcome {
    /// Nothing written: empty value, formula, or no Hangul to translate.
    Skipped,
    Cached,
    Translated,
}

/// Writes translated copies of source cells into a destination sheet.
#[derive(Debug, Clone)]
pub struct Transcriber {
    target_lang: String,
    fallback_font: String,
    hangul: Option<Regex>,
    skip_formulas: bool,
}

impl Transcriber {
    pub fn new(target_lang: impl Into<String>, fallback_font: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
            fallback_font: fallback_font.into(),
            hangul: None,
            skip_formulas: false,
        }
    }

    pub fn from_config(config: &TranslationConfig) -> Self {
        let mut transcriber = Self::new(&config.target_lang, &config.fallback_font);
        if config.skip_without_hangul {
            transcriber = transcriber.skip_without_hangul();
        }
        if config.skip_formulas {
            transcriber = transcriber.skip_formulas();
        }
        transcriber
    }

    /// Leave values without any Hangul syllable or jamo untranslated.
    pub fn skip_without_hangul(mut self) -> Self {
        self.hangul = Some(Regex::new(r"\p{Hangul}").expect("valid regex"));
        self
    }

    /// Leave formula cells as copied instead of translating their `=...` text.
    pub fn skip_formulas(mut self) -> Self {
        self.skip_formulas = true;
        self
    }

    pub fn transcribe<T: Translate>(
        &self,
        source: &Cell,
        dest: &mut Worksheet,
        cache: &mut TranslationCache,
        translator: &T,
    ) -> Result<TranscribeOutcome> {
        if self.skip_formulas && source.is_formula() {
            return Ok(TranscribeOutcome::Skipped);
        }

        let value = source_text(source);
        if value.is_empty() {
            return Ok(TranscribeOutcome::Skipped);
        }
        if let Some(re) = &self.hangul {
            if !re.is_match(&value) {
                return Ok(TranscribeOutcome::Skipped);
            }
        }

        let coord = source.get_coordinate();
        let (col, row) = (*coord.get_col_num(), *coord.get_row_num());
        let cell_ref = to_a1(col, row);
        info!(cell = %cell_ref, original = %value, "Original");

        let (translated, outcome) = match cache.lookup(&value) {
            Some(hit) => {
                info!(cell = %cell_ref, existed = %hit, "Existed");
                (hit.to_string(), TranscribeOutcome::Cached)
            }
            None => {
                let fresh = translator.translate(&value, &self.target_lang)?;
                cache.insert(value.clone(), fresh.clone());
                info!(cell = %cell_ref, translated = %fresh, "Translated");
                (fresh, TranscribeOutcome::Translated)
            }
        };

        let cell = dest.get_cell_mut((col, row));
        cell.set_value_string(translated);
        if has_style(source.get_style()) {
            cell.set_style(transcribe_style(source.get_style(), &self.fallback_font));
        }

        Ok(outcome)
    }
}

pub fn has_style(style: &Style) -> bool {
    style.get_font().is_some()
        || style.get_borders().is_some()
        || style.get_fill().is_some()
        || style.get_number_format().is_some()
        || style.get_protection().is_some()
        || style.get_alignment().is_some()
}

/// Text a cell is translated from: `=` plus the formula for formula cells,
/// `True`/`False` for booleans, the displayed value otherwise.
pub fn source_text(cell: &Cell) -> String {
    if cell.is_formula() {
        return format!("={}", cell.get_formula().trim_start_matches('='));
    }
    match cell.get_cell_value().get_raw_value() {
        CellRawValue::Bool(true) => "True".to_string(),
        CellRawValue::Bool(false) => "False".to_string(),
        _ => cell.get_value().into_owned(),
    }
}

/// Copy of `source` with every attribute kept except the font family.
pub fn transcribe_style(source: &Style, fallback_font: &str) -> Style {
    let mut style = Style::default();

    let mut font = source.get_font().cloned().unwrap_or_default();
    font.set_name(fallback_font);
    style.set_font(font);

    if let Some(borders) = source.get_borders() {
        style.set_borders(borders.clone());
    }
    if let Some(fill) = source.get_fill() {
        style.set_fill(fill.clone());
    }
    if let Some(number_format) = source.get_number_format() {
        style.set_number_format(number_format.clone());
    }
    if let Some(protection) = source.get_protection() {
        style.set_protection(protection.clone());
    }
    if let Some(alignment) = source.get_alignment() {
        style.set_alignment(alignment.clone());
    }

    style
}
