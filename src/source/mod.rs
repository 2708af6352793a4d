use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;

use crate::config::SourceSettings;
use crate::errors::{with_parse_context, with_read_context};
use crate::league::parse_evening_date;

/// Raw text of one league evening
#[derive(Debug, Clone, PartialEq)]
pub struct EveningFile {
    pub date: NaiveDate,
    pub text: String,
}

/// Directory of `YYYY-MM-DD.txt` result files, optionally listed by `index.json`
pub struct ResultsDirectory {
    dir: PathBuf,
    settings: SourceSettings,
}

impl ResultsDirectory {
    pub fn new<P: AsRef<Path>>(dir: P, settings: SourceSettings) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            settings,
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Result file names in processing (chronological) order
    pub fn discover(&self) -> Result<Vec<String>> {
        let index_path = self.dir.join(self.settings.index_file);
        let mut files = if index_path.exists() {
            self.read_index(&index_path)?
        } else {
            self.list_result_files()?
        };

        files.sort();
        info!("Found {} evening files in {}", files.len(), self.dir.display());
        Ok(files)
    }

    /// Read every evening listed by `discover`
    pub fn load_evenings(&self) -> Result<Vec<EveningFile>> {
        self.discover()?
            .iter()
            .map(|file| self.load_evening(file))
            .collect()
    }

    fn load_evening(&self, file: &str) -> Result<EveningFile> {
        let path = self.dir.join(file);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("Result file has no usable name: {}", path.display()))?;
        let date = parse_evening_date(stem).with_context(|| format!("Bad result file name: {}", file))?;
        let text = with_read_context(fs::read_to_string(&path), &path)?;

        Ok(EveningFile { date, text })
    }

    // --- Discovery Helpers ---

    fn read_index(&self, index_path: &Path) -> Result<Vec<String>> {
        let json = with_read_context(fs::read_to_string(index_path), index_path)?;
        with_parse_context(serde_json::from_str::<Vec<String>>(&json), "results index")
    }

    fn list_result_files(&self) -> Result<Vec<String>> {
        let entries = with_read_context(fs::read_dir(&self.dir), &self.dir)?;
        let mut files = Vec::new();

        for entry in entries {
            let path = entry?.path();
            if self.is_result_file(&path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    files.push(name.to_string());
                }
            }
        }

        Ok(files)
    }

    fn is_result_file(&self, path: &Path) -> bool {
        path.is_file() && path.extension().is_some_and(|ext| ext == self.settings.extension)
    }
}
