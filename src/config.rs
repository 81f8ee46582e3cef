use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, XltransError};

pub const DEFAULT_CONFIG_FILE: &str = "xltrans.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub target_dir: PathBuf,
    pub reference_dir: PathBuf,
    pub cache_file: String,
    /// Stem of the workbook translated by `xltrans-single`.
    pub input_name: String,
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub source_lang: String,
    pub target_lang: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
    /// Suffix marking a sheet (or file stem) as the English variant.
    pub sheet_marker: String,
    pub fallback_font: String,
    pub skip_without_hangul: bool,
    /// Keep formulas in the English sheet instead of translating their text.
    pub skip_formulas: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("excel_input"),
            output_dir: PathBuf::from("excel_output"),
            target_dir: PathBuf::from("excel_target"),
            reference_dir: PathBuf::from("reference"),
            cache_file: "reference_target_translated.json".to_string(),
            input_name: "엑셀_헌법_20250316".to_string(),
            extension: "xlsx".to_string(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_lang: "auto".to_string(),
            target_lang: "en".to_string(),
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_seconds: 30,
            sheet_marker: "영문".to_string(),
            fallback_font: "Consolas".to_string(),
            skip_without_hangul: false,
            skip_formulas: false,
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| XltransError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// A missing file yields the defaults; a file that exists must parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load_from_file(p),
            _ => Ok(Self::default()),
        }
    }

    pub fn cache_path(&self) -> PathBuf {
        self.paths.reference_dir.join(&self.paths.cache_file)
    }
}
