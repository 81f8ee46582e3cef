use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::Result;

pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// `<stem>.<marker>.<ext>`, the name of an English copy of a workbook.
pub fn translated_file_name(stem: &str, marker: &str, extension: &str) -> String {
    format!("{stem}.{marker}.{extension}")
}

/// Input workbook and output artifact for `xltrans-single`; creates the output directory.
pub fn input_output_paths(config: &AppConfig) -> Result<(PathBuf, PathBuf)> {
    let paths = &config.paths;
    ensure_dir(&paths.output_dir)?;
    let input = paths
        .input_dir
        .join(format!("{}.{}", paths.input_name, paths.extension));
    let output = paths.output_dir.join(translated_file_name(
        &paths.input_name,
        &config.translation.sheet_marker,
        &paths.extension,
    ));
    Ok((input, output))
}

/// Target directory of the batch; created when absent.
pub fn target_dir(config: &AppConfig) -> Result<PathBuf> {
    ensure_dir(&config.paths.target_dir)?;
    Ok(config.paths.target_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_artifact_carries_the_marker() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.paths.input_dir = dir.path().join("in");
        config.paths.output_dir = dir.path().join("out");

        let (input, output) = input_output_paths(&config).unwrap();
        assert_eq!(input, dir.path().join("in").join("엑셀_헌법_20250316.xlsx"));
        assert_eq!(
            output,
            dir.path().join("out").join("엑셀_헌법_20250316.영문.xlsx")
        );
        assert!(dir.path().join("out").is_dir());
        assert!(!dir.path().join("in").exists());
    }

    #[test]
    fn target_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.paths.target_dir = dir.path().join("a").join("b");

        let target = target_dir(&config).unwrap();
        assert!(target.is_dir());
    }
}
