//! Transient storage for uploaded dumps.
//!
//! Every upload is written under its own generated name so two requests that
//! upload files with the same name never overwrite each other. Stored files
//! are not read back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::RigCheckError;

/// Which dump an upload holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    DxDiag,
    MsInfo,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::DxDiag => "dxdiag",
            UploadKind::MsInfo => "msinfo",
        }
    }
}

/// An uploaded file as received from the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Name supplied by the client; only used to label the stored copy.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a dump from disk.
    pub fn from_path(path: &Path) -> Result<Self, RigCheckError> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.txt")
            .to_string();
        Ok(Self { file_name, bytes })
    }
}

/// Where and when an upload was written.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub kind: UploadKind,
    pub path: PathBuf,
    pub stored_at: DateTime<Utc>,
}

/// Writes uploads into a directory, one distinct file per upload.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `upload` to `<dir>/<kind>-<uuid>-<name>`, creating the directory
    /// if needed.
    pub fn store(&self, kind: UploadKind, upload: &Upload) -> Result<StoredUpload, RigCheckError> {
        fs::create_dir_all(&self.dir)?;

        let name = format!(
            "{}-{}-{}",
            kind.as_str(),
            Uuid::new_v4(),
            sanitize_file_name(&upload.file_name)
        );
        let path = self.dir.join(name);
        fs::write(&path, &upload.bytes)?;

        tracing::info!(
            "Stored {} upload ({} bytes) at {}",
            kind.as_str(),
            upload.bytes.len(),
            path.display()
        );
        Ok(StoredUpload {
            kind,
            path,
            stored_at: Utc::now(),
        })
    }
}

/// Reduce a client-supplied name to a safe final path component.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "upload.txt".to_string()
    } else {
        cleaned
    }
}
