use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileTableConfig {
    pub ligand_column: Option<String>,
    pub mode_column: Option<String>,
    pub affinity_column: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileAnalysisConfig {
    pub threshold: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileChartConfig {
    pub bins: Option<usize>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub top_n: Option<usize>,
}

/// Every field is optional; anything left out falls back to the built-in defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub table: Option<FileTableConfig>,
    pub analysis: Option<FileAnalysisConfig>,
    pub chart: Option<FileChartConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn full_file_is_parsed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dockviz.toml");
        fs::write(
            &path,
            r#"
            [table]
            ligand-column = "Compound"
            affinity-column = "Score"
            delimiter = "\t"

            [analysis]
            threshold = -9.0

            [chart]
            bins = 40
            top-n = 10
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();

        let table = config.table.unwrap();
        assert_eq!(table.ligand_column.as_deref(), Some("Compound"));
        assert_eq!(table.mode_column, None);
        assert_eq!(table.affinity_column.as_deref(), Some("Score"));
        assert_eq!(table.delimiter.as_deref(), Some("\t"));
        assert_eq!(config.analysis.unwrap().threshold, Some(-9.0));
        let chart = config.chart.unwrap();
        assert_eq!(chart.bins, Some(40));
        assert_eq!(chart.top_n, Some(10));
        assert_eq!(chart.width, None);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(FileConfig::from_file(&path).unwrap(), FileConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("typo.toml");
        fs::write(&path, "[chart]\nbin-count = 12\n").unwrap();

        match FileConfig::from_file(&path) {
            Err(CliError::FileParsing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected a parsing error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
