//! Parsers for the two supported dump formats.
//!
//! - [`dxdiag`]: DirectX diagnostic dump (`dxdiag /t`)
//! - [`msinfo`]: system information dump (`msinfo32 /report`)
//!
//! The two parsers treat unparseable numbers differently. The diagnostic
//! parser fails the whole report through [`strict_megabytes`]; the
//! system-info parser skips the affected check through
//! [`lenient_megabytes`].

pub mod dxdiag;
pub mod lines;
pub mod msinfo;

pub use dxdiag::{parse_dxdiag, ParsedDiagnostic};
pub use lines::{decode_dump, dump_lines, first_value, nth_field};
pub use msinfo::{parse_msinfo, ParsedSystemInfo, SystemWarning};

use crate::core::RigCheckError;

/// Parse a megabyte count, failing on anything that is not an integer.
pub fn strict_megabytes(field: &'static str, raw: &str) -> Result<i64, RigCheckError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| RigCheckError::MalformedNumeric {
            field,
            value: raw.to_string(),
        })
}

/// Collect the ASCII digits of `raw` into a megabyte count.
///
/// Returns `None` when there are no digits or the number does not fit.
pub fn lenient_megabytes(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(mb) => Some(mb),
        Err(e) => {
            tracing::debug!("Ignoring non-numeric value {:?}: {}", raw.trim(), e);
            None
        }
    }
}

/// Convert megabytes to gigabytes, rounding to the nearest whole number
/// (ties go to the even neighbour).
pub fn megabytes_to_gigabytes(mb: i64) -> i64 {
    (mb as f64 / 1024.0).round_ties_even() as i64
}
