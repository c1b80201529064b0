use crate::model::ReportDocument;
use crate::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

// Overlapping saves must never share a temp file
static TMP_FILE_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Owns the report document file. This is the only place that touches it:
/// every read returns the whole document and every write replaces it.
///
/// There is no locking, two overlapping saves race and the later one wins.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DocumentStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file means nothing was saved yet. A file that exists but
    /// can't be parsed is an error, it never falls back to the default.
    pub fn load(&self) -> Result<ReportDocument> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No document yet, using defaults");
                return Ok(ReportDocument::default());
            }
            Err(e) => Err(e)?,
        };
        Ok(serde_json::from_slice(&data)?)
    }

    pub fn save(&self, doc: &ReportDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("data.json");
        let tmp_path = self
            .path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!(
                ".{file_name}.{}.{}.tmp",
                std::process::id(),
                TMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed),
            ));
        if let Err(e) = fs::write(&tmp_path, json).and_then(|_| fs::rename(&tmp_path, &self.path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        info!(
            path = %self.path.display(),
            rows = doc.table_data.len(),
            "Saved report document",
        );
        Ok(())
    }
}
