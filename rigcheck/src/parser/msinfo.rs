//! System information dump parser.
//!
//! Collects the OS, processor and memory lines of an `msinfo32` text report
//! and flags conditions likely to hurt gameplay: little RAM, little free disk
//! space, and devices reported as disabled or having driver problems.

use std::fmt;

use crate::parser::lenient_megabytes;
use crate::parser::lines::{dump_lines, nth_field};

/// Header line separating facts from warnings in the rendered summary.
pub const ISSUES_HEADER: &str = "[POTENTIAL ISSUES]";
/// Rendered in place of the warnings when there are none.
pub const NO_ISSUES: &str = "No immediate issues found.";

const LOW_RAM_GB: f64 = 8.0;
const LOW_DISK_GB: f64 = 20.0;

/// A condition flagged while scanning the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemWarning {
    LowRam,
    LowStorage,
    /// Carries the trimmed line that reported the problem.
    DeviceProblem(String),
}

impl fmt::Display for SystemWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemWarning::LowRam => f.write_str("[!] Low RAM: Less than 8 GB may cause lag."),
            SystemWarning::LowStorage => {
                f.write_str("[!] Low storage: Less than 20 GB free space.")
            }
            SystemWarning::DeviceProblem(line) => {
                write!(f, "[!] Driver issue or disabled device: {}", line)
            }
        }
    }
}

/// Facts and warnings from a system information dump, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSystemInfo {
    pub info_lines: Vec<String>,
    pub warnings: Vec<SystemWarning>,
}

impl ParsedSystemInfo {
    /// Render the summary: facts, a blank line, the issues header, then the
    /// warnings (or the no-issues placeholder).
    pub fn render(&self) -> String {
        let mut out: Vec<String> = self.info_lines.clone();
        out.push(String::new());
        out.push(ISSUES_HEADER.to_string());
        if self.warnings.is_empty() {
            out.push(NO_ISSUES.to_string());
        } else {
            out.extend(self.warnings.iter().map(ToString::to_string));
        }
        out.join("\n")
    }
}

/// Gigabytes from the value field of a line, if it holds any digits.
fn field_gigabytes(line: &str) -> Option<f64> {
    let field = nth_field(line, 1)?;
    lenient_megabytes(field).map(|mb| mb as f64 / 1024.0)
}

/// Parse a system information dump.
///
/// Each line is checked against every rule independently, so one line can
/// contribute both a fact and a warning.
pub fn parse_msinfo(content: &str) -> ParsedSystemInfo {
    let mut info = ParsedSystemInfo::default();

    for line in dump_lines(content) {
        let trimmed = line.trim();

        if line.contains("OS Name") {
            info.info_lines.push(trimmed.to_string());
        }
        if line.contains("Processor") {
            info.info_lines.push(trimmed.to_string());
        }
        if line.contains("Total Physical Memory") {
            if let Some(gb) = field_gigabytes(line) {
                if gb < LOW_RAM_GB {
                    info.warnings.push(SystemWarning::LowRam);
                }
            }
            // Kept even when the value did not parse
            info.info_lines.push(trimmed.to_string());
        }
        // Disk lines raise warnings but are not listed as facts
        if line.contains("Free Space") || line.contains("Free Disk Space") {
            if let Some(gb) = field_gigabytes(line) {
                if gb < LOW_DISK_GB {
                    info.warnings.push(SystemWarning::LowStorage);
                }
            }
        }
        if line.contains("Driver Problem") || line.contains("Disabled") {
            info.warnings
                .push(SystemWarning::DeviceProblem(trimmed.to_string()));
        }
    }

    tracing::debug!(
        facts = info.info_lines.len(),
        warnings = info.warnings.len(),
        "Parsed system information dump"
    );
    info
}
