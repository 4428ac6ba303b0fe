//! RigCheck - game requirement checks from Windows diagnostic dumps
//!
//! This library reads the text dumps produced by `dxdiag` and `msinfo32`,
//! classifies the CPU and GPU they describe, and compares the machine with
//! the minimum and recommended requirements of a small catalog of titles.
//!
//! # Quick Start
//!
//! ```no_run
//! use rigcheck::{Catalog, CheckOptions, CheckRequest, RigCheckCore, Upload};
//! use std::path::Path;
//!
//! let catalog = Catalog::builtin();
//! let core = RigCheckCore::new(&catalog, CheckOptions::default());
//! let request = CheckRequest::new("NBA 2K25")
//!     .with_dxdiag(Upload::from_path(Path::new("DxDiag.txt")).unwrap());
//!
//! let outcome = core.check(&request).unwrap();
//! if let Some(summary) = outcome.dxdiag_summary {
//!     println!("{}", summary);
//! }
//! ```
//!
//! # Features
//!
//! - **DxDiag parsing**: display adapter, processor, memory, DirectX version
//! - **MSInfo parsing**: OS and memory facts, low RAM/disk and device warnings
//! - **Requirement checks**: per-title minimum and recommended comparisons

pub mod catalog;
pub mod classifier;
pub mod core;
pub mod parser;
pub mod report;
pub mod uploads;

// Re-export main types
pub use catalog::{Catalog, RequirementTier, TitleSpec};
pub use classifier::{CpuTier, CpuVerdict, GpuTier, GpuVerdict, RamVerdict};
pub use crate::core::{CheckOptions, CheckOutcome, CheckRequest, RigCheckCore, RigCheckError};
pub use parser::{ParsedDiagnostic, ParsedSystemInfo, SystemWarning};
pub use report::CompatibilityReport;
pub use uploads::{Upload, UploadKind, UploadStore};

/// Parse a diagnostic dump from raw bytes (convenience wrapper).
pub fn parse_dxdiag_bytes(bytes: &[u8]) -> ParsedDiagnostic {
    parser::parse_dxdiag(&parser::decode_dump(bytes))
}

/// Parse a system information dump from raw bytes (convenience wrapper).
pub fn parse_msinfo_bytes(bytes: &[u8]) -> ParsedSystemInfo {
    parser::parse_msinfo(&parser::decode_dump(bytes))
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Catalog, CheckOptions, CheckOutcome, CheckRequest, RigCheckCore, RigCheckError, Upload,
    };
}
