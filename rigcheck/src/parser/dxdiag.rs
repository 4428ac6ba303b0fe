//! DirectX diagnostic dump parser.
//!
//! Pulls the display adapter, processor, system memory and DirectX version
//! out of a `dxdiag /t` text dump. Fields whose keyword line is missing get
//! a sentinel value instead of an error.

use crate::core::RigCheckError;
use crate::parser::lines::{dump_lines, first_value};
use crate::parser::{megabytes_to_gigabytes, strict_megabytes};

/// Sentinel for a text field whose keyword line is absent.
pub const UNKNOWN: &str = "Unknown";
/// Sentinel for a missing memory line.
pub const UNKNOWN_RAM_MB: &str = "0";

const GPU_KEY: &str = "Card name";
const CPU_KEY: &str = "Processor";
const RAM_KEY: &str = "Memory:";
const DIRECTX_KEY: &str = "DirectX Version";

/// Fields extracted from a diagnostic dump. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDiagnostic {
    pub gpu: String,
    pub cpu: String,
    /// Megabyte count exactly as found, not yet validated as a number.
    pub ram_mb: String,
    pub directx: String,
}

impl ParsedDiagnostic {
    /// Installed memory in whole gigabytes.
    ///
    /// Fails with [`RigCheckError::MalformedNumeric`] when the memory field
    /// is not an integer.
    pub fn ram_gb(&self) -> Result<i64, RigCheckError> {
        strict_megabytes("Memory", &self.ram_mb).map(megabytes_to_gigabytes)
    }
}

/// Parse a diagnostic dump.
pub fn parse_dxdiag(content: &str) -> ParsedDiagnostic {
    let lines: Vec<&str> = dump_lines(content).collect();
    let text_field = |keyword: &str| {
        first_value(lines.iter().copied(), keyword)
            .unwrap_or(UNKNOWN)
            .to_string()
    };

    // "Memory: 16384MB RAM" -> "16384"
    let ram_mb = first_value(lines.iter().copied(), RAM_KEY)
        .map(|value| value.split("MB").next().unwrap_or(value).trim())
        .unwrap_or(UNKNOWN_RAM_MB)
        .to_string();

    let parsed = ParsedDiagnostic {
        gpu: text_field(GPU_KEY),
        cpu: text_field(CPU_KEY),
        ram_mb,
        directx: text_field(DIRECTX_KEY),
    };
    tracing::debug!(
        gpu = %parsed.gpu,
        cpu = %parsed.cpu,
        ram_mb = %parsed.ram_mb,
        directx = %parsed.directx,
        "Parsed diagnostic dump"
    );
    parsed
}
