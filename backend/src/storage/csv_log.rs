use crate::config::ColumnLayout;
use crate::error::StorageError;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::warn;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Append-only CSV file holding one row per submission.
///
/// The first append to an absent or empty file writes the column names as the
/// header row. Every append opens the file, writes, flushes and closes it
/// again; no handle outlives a call.
#[derive(Debug, Clone)]
pub struct CsvLog {
    path: PathBuf,
    layout: ColumnLayout,
}

impl CsvLog {
    pub fn new(path: impl Into<PathBuf>, layout: ColumnLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `answers` as one data row, `questions` naming each answer's column.
    ///
    /// Blocking; run it off the async workers.
    pub fn append(&self, questions: &[String], answers: &[String]) -> Result<(), StorageError> {
        let has_header = self.has_header()?;

        let row = match self.layout {
            ColumnLayout::Header if has_header => {
                let header = self.read_header()?;
                align_to_header(&header, questions, answers)
            }
            _ => answers.to_vec(),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(Terminator::CRLF)
            .from_writer(file);

        if !has_header {
            writer.write_record(questions)?;
        }
        writer.write_record(&row)?;
        writer.flush()?;
        Ok(())
    }

    fn has_header(&self) -> Result<bool, StorageError> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() > 0),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read_header(&self) -> Result<StringRecord, StorageError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let mut header = StringRecord::new();
        reader.read_record(&mut header)?;
        Ok(header)
    }
}

/// Orders `answers` by the existing header's column names.
///
/// Header columns the submission lacks stay empty; fields the header has no
/// column for are dropped.
fn align_to_header(header: &StringRecord, questions: &[String], answers: &[String]) -> Vec<String> {
    let row = header
        .iter()
        .map(|column| {
            questions
                .iter()
                .position(|q| q == column)
                .and_then(|i| answers.get(i))
                .cloned()
                .unwrap_or_default()
        })
        .collect();

    let dropped: Vec<&str> = questions
        .iter()
        .filter(|q| !header.iter().any(|column| column == q.as_str()))
        .map(String::as_str)
        .collect();
    if !dropped.is_empty() {
        warn!("Dropping fields with no column in the CSV header: {}", dropped.join(", "));
    }

    row
}
