//! Analysis Log
//!
//! Append-only persistence of analyses, one CSV row per request. The file is
//! meant to be opened directly in spreadsheet and BI tools, so a new file
//! starts with a UTF-8 byte-order mark followed by the header row, and rows
//! end with CRLF.

use async_trait::async_trait;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{AnalysisRecord, RECORD_HEADER};

/// UTF-8 byte-order mark written at the start of a new log file
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Defines the public interface for analysis persistence.
///
/// The HTTP layer only depends on this trait, so tests can swap the CSV file
/// for an in-memory sink.
#[async_trait]
pub trait AnalysisLog: Send + Sync + 'static {
    /// Appends one record. Records are never updated or removed.
    async fn append(&self, record: AnalysisRecord) -> Result<(), AppError>;
}

/// CSV-backed analysis log.
#[derive(Debug, Clone)]
pub struct CsvAnalysisLog {
    path: Arc<PathBuf>,
    /// Serializes appends so the header is written once and rows never interleave.
    write_lock: Arc<Mutex<()>>,
}

impl CsvAnalysisLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Synchronous append, run on the blocking pool by [`AnalysisLog::append`].
    pub fn append_blocking(&self, record: &AnalysisRecord) -> Result<(), AppError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| AppError::Internal("Analysis log lock poisoned".to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating log directory: {:?}", parent);
                fs::create_dir_all(parent)?;
            }
        }

        // A missing or empty file still needs the BOM and header
        let is_new = match fs::metadata(self.path.as_ref()) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        let chunk = encode_chunk(record, is_new)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path.as_ref())?;
        file.write_all(&chunk)?;
        file.flush()?;

        debug!(user_id = %record.user_id, label = %record.mood_label, "Analysis appended");
        Ok(())
    }
}

/// Encode one record, preceded by the BOM and header for a new file.
///
/// Everything lands in the file with a single write, so a failed append never
/// leaves a BOM without its header behind.
fn encode_chunk(record: &AnalysisRecord, with_header: bool) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    if with_header {
        buf.extend_from_slice(UTF8_BOM);
    }

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(&mut buf);
        if with_header {
            writer.write_record(RECORD_HEADER)?;
        }
        writer.serialize(record)?;
        writer.flush()?;
    }

    Ok(buf)
}

#[async_trait]
impl AnalysisLog for CsvAnalysisLog {
    async fn append(&self, record: AnalysisRecord) -> Result<(), AppError> {
        let log = self.clone();
        tokio::task::spawn_blocking(move || log.append_blocking(&record)).await?
    }
}
