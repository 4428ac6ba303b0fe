//! Core check pipeline shared by every front end.
//! No CLI or request-handling dependencies.

use std::path::PathBuf;

use crate::catalog::{Catalog, TitleSpec};
use crate::parser::{decode_dump, parse_dxdiag, parse_msinfo};
use crate::report::compose_dxdiag_report;
use crate::uploads::{Upload, UploadKind, UploadStore};

#[derive(Debug, thiserror::Error)]
pub enum RigCheckError {
    #[error("Failed to process report: {field} value {value:?} is not a number")]
    MalformedNumeric { field: &'static str, value: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for check runs.
#[derive(Clone, Debug, Default)]
pub struct CheckOptions {
    /// Keep a copy of every upload in this directory. `None` keeps nothing.
    pub upload_dir: Option<PathBuf>,
}

/// One request from the shell: a title plus whichever dumps were supplied.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub title: String,
    pub dxdiag: Option<Upload>,
    pub msinfo: Option<Upload>,
}

impl CheckRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            dxdiag: None,
            msinfo: None,
        }
    }

    pub fn with_dxdiag(mut self, upload: Upload) -> Self {
        self.dxdiag = Some(upload);
        self
    }

    pub fn with_msinfo(mut self, upload: Upload) -> Self {
        self.msinfo = Some(upload);
        self
    }
}

/// Summaries produced for a request. A summary is `None` when its dump was
/// not supplied.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Title the requirements were taken from, after any fallback.
    pub title: &'static str,
    pub dxdiag_summary: Option<String>,
    pub msinfo_summary: Option<String>,
}

impl CheckOutcome {
    pub fn is_empty(&self) -> bool {
        self.dxdiag_summary.is_none() && self.msinfo_summary.is_none()
    }
}

/// Check pipeline bound to a catalog.
pub struct RigCheckCore<'a> {
    catalog: &'a Catalog,
    store: Option<UploadStore>,
}

impl<'a> RigCheckCore<'a> {
    pub fn new(catalog: &'a Catalog, options: CheckOptions) -> Self {
        Self {
            catalog,
            store: options.upload_dir.map(UploadStore::new),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Run every supplied dump through its parser.
    ///
    /// An unknown title falls back to the catalog default. A diagnostic dump
    /// that cannot be processed fails the whole request.
    pub fn check(&self, request: &CheckRequest) -> Result<CheckOutcome, RigCheckError> {
        let title = self.catalog.resolve(&request.title);
        tracing::debug!("Checking request against {}", title.name);

        let dxdiag_summary = match &request.dxdiag {
            Some(upload) => {
                self.keep(UploadKind::DxDiag, upload)?;
                Some(Self::analyze_dxdiag_for(&upload.bytes, title)?)
            }
            None => None,
        };

        let msinfo_summary = match &request.msinfo {
            Some(upload) => {
                self.keep(UploadKind::MsInfo, upload)?;
                Some(Self::analyze_msinfo(&upload.bytes))
            }
            None => None,
        };

        Ok(CheckOutcome {
            title: title.name,
            dxdiag_summary,
            msinfo_summary,
        })
    }

    /// Compatibility summary for a diagnostic dump against `title`.
    pub fn analyze_dxdiag(&self, bytes: &[u8], title: &str) -> Result<String, RigCheckError> {
        Self::analyze_dxdiag_for(bytes, self.catalog.resolve(title))
    }

    /// Summary of a system information dump.
    pub fn analyze_msinfo(bytes: &[u8]) -> String {
        parse_msinfo(&decode_dump(bytes)).render()
    }

    fn analyze_dxdiag_for(bytes: &[u8], title: &TitleSpec) -> Result<String, RigCheckError> {
        let parsed = parse_dxdiag(&decode_dump(bytes));
        compose_dxdiag_report(&parsed, title).map_err(|e| {
            tracing::warn!("Diagnostic dump could not be processed: {}", e);
            e
        })
    }

    fn keep(&self, kind: UploadKind, upload: &Upload) -> Result<(), RigCheckError> {
        if let Some(store) = &self.store {
            store.store(kind, upload)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_without_dumps() {
        let catalog = Catalog::builtin();
        let core = RigCheckCore::new(&catalog, CheckOptions::default());
        let outcome = core.check(&CheckRequest::new("NBA 2K24")).unwrap();
        assert_eq!(outcome.title, "NBA 2K24");
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_unknown_title_falls_back() {
        let catalog = Catalog::builtin();
        let core = RigCheckCore::new(&catalog, CheckOptions::default());
        let request = CheckRequest::new("Not A Game")
            .with_dxdiag(Upload::new("DxDiag.txt", b"Memory: 4096MB".to_vec()));
        let outcome = core.check(&request).unwrap();
        assert_eq!(outcome.title, "NBA 2K25");
        let summary = outcome.dxdiag_summary.unwrap();
        assert!(summary.contains("Game: NBA 2K25"));
        assert!(summary.contains("- Rec Spec: 8 GB → Too Low"));
    }

    #[test]
    fn test_malformed_dxdiag_fails_request() {
        let catalog = Catalog::builtin();
        let core = RigCheckCore::new(&catalog, CheckOptions::default());
        let request = CheckRequest::new("NBA 2K25")
            .with_dxdiag(Upload::new("DxDiag.txt", b"Memory: abcMB".to_vec()))
            .with_msinfo(Upload::new("msinfo.txt", b"OS Name: Windows".to_vec()));
        assert!(matches!(
            core.check(&request),
            Err(RigCheckError::MalformedNumeric { .. })
        ));
    }

    #[test]
    fn test_uploads_are_kept_when_configured() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let options = CheckOptions {
            upload_dir: Some(dir.path().to_path_buf()),
        };
        let core = RigCheckCore::new(&catalog, options);
        let request = CheckRequest::new("NBA 2K25")
            .with_dxdiag(Upload::new("dump.txt", b"Memory: 8192MB".to_vec()))
            .with_msinfo(Upload::new("dump.txt", b"OS Name: Windows".to_vec()));
        core.check(&request).unwrap();

        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 2);
    }
}
