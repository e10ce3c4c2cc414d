//! Creating record files.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use tracing::{debug, info};

use adr_core::config::DEFAULT_STATUS;
use adr_core::error::AdrError;
use adr_core::frontmatter::yaml_scalar;
use adr_core::Result;
use adr_core::naming::{format_record_id, record_file_name};
use adr_template::load_record_template;

use crate::numbering::next_number;

/// Create `dir` and its parents if missing.
///
/// # Errors
///
/// Returns [`AdrError::InvalidArgument`] for an empty path and
/// [`AdrError::Io`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Err(AdrError::InvalidArgument("empty directory path".to_string()));
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Options for a new record. Empty strings select the defaults.
#[derive(Debug, Clone, Default)]
pub struct NewRecordOptions {
    /// `madr`, `nygard` or a path to a template file.
    pub template: String,
    /// Defaults to `Proposed`.
    pub status: String,
    /// `YYYY-MM-DD`, defaults to today.
    pub date: String,
}

/// Values available to record templates.
///
/// The `*YAML` fields hold the same values encoded as YAML scalars, for use
/// inside the header block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RecordContext<'a> {
    #[serde(rename = "ID")]
    id: String,
    title: &'a str,
    status: &'a str,
    date: &'a str,
    #[serde(rename = "TitleYAML")]
    title_yaml: String,
    #[serde(rename = "StatusYAML")]
    status_yaml: String,
    #[serde(rename = "DateYAML")]
    date_yaml: String,
}

impl<'a> RecordContext<'a> {
    fn new(number: u32, title: &'a str, status: &'a str, date: &'a str) -> Result<Self> {
        Ok(Self {
            id: format_record_id(number),
            title,
            status,
            date,
            title_yaml: yaml_scalar(title)?,
            status_yaml: yaml_scalar(status)?,
            date_yaml: yaml_scalar(date)?,
        })
    }
}

/// A directory of records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Next unused record number.
    ///
    /// # Errors
    ///
    /// See [`next_number`].
    pub fn next_number(&self) -> Result<u32> {
        next_number(&self.dir)
    }

    /// Write a new record from a template and return its path.
    ///
    /// The file is created exclusively: an existing file with the same name
    /// is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AdrError::InvalidArgument`] for a blank title or an empty
    /// directory path, [`AdrError::Template`] if the template does not parse
    /// or render, [`AdrError::AlreadyExists`] if the target file exists and
    /// [`AdrError::Io`] for other filesystem failures.
    pub fn create_record(
        &self,
        title: &str,
        options: &NewRecordOptions,
    ) -> Result<PathBuf> {
        if title.trim().is_empty() {
            return Err(AdrError::InvalidArgument("empty record title".to_string()));
        }
        ensure_dir(&self.dir)?;

        let number = self.next_number()?;
        let path = self.dir.join(record_file_name(number, title));

        let date = if options.date.is_empty() {
            Local::now().format("%Y-%m-%d").to_string()
        } else {
            options.date.clone()
        };
        let status = if options.status.is_empty() {
            DEFAULT_STATUS
        } else {
            options.status.as_str()
        };

        let template = load_record_template(&options.template)?;
        let content = template.render(&RecordContext::new(number, title, status, &date)?)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|err| match err.kind() {
                ErrorKind::AlreadyExists => AdrError::AlreadyExists(path.clone()),
                _ => AdrError::Io(err),
            })?;
        file.write_all(content.as_bytes())?;

        debug!(number, template = %options.template, "rendered record");
        info!(path = %path.display(), "created record");
        Ok(path)
    }
}
