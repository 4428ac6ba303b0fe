//! Hardware tier assessment and requirement comparison.
//!
//! Every rule is a case-sensitive substring test. Rules are checked in a fixed
//! order and the first match wins, since one model string can satisfy several
//! predicates (an "RTX" card name may also contain "GTX 10", for example).

use std::fmt;

/// Qualitative GPU tier derived from the card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuTier {
    HighEnd,
    MostGames,
    LowEnd,
    Unknown,
}

impl fmt::Display for GpuTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GpuTier::HighEnd => "High-end gaming",
            GpuTier::MostGames => "Good for most games",
            GpuTier::LowEnd => "Low-end, older games",
            GpuTier::Unknown => "Unknown performance",
        };
        f.write_str(label)
    }
}

/// Qualitative CPU tier derived from the processor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuTier {
    Great,
    Good,
    Entry,
    Unknown,
}

impl fmt::Display for CpuTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CpuTier::Great => "Great for gaming",
            CpuTier::Good => "Good performance",
            CpuTier::Entry => "Entry level",
            CpuTier::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Outcome of comparing the user's CPU against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuVerdict {
    Better,
    Match,
    Below,
    Unknown,
}

impl fmt::Display for CpuVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CpuVerdict::Better => "Better",
            CpuVerdict::Match => "Match",
            CpuVerdict::Below => "Below",
            CpuVerdict::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Outcome of comparing the user's GPU against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuVerdict {
    MatchOrBetter,
    Below,
    Unknown,
}

impl fmt::Display for GpuVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GpuVerdict::MatchOrBetter => "Match or Better",
            GpuVerdict::Below => "Below",
            GpuVerdict::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Outcome of comparing installed RAM against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamVerdict {
    Ok,
    TooLow,
}

impl fmt::Display for RamVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RamVerdict::Ok => "OK",
            RamVerdict::TooLow => "Too Low",
        };
        f.write_str(label)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

pub fn assess_gpu(gpu: &str) -> GpuTier {
    if contains_any(gpu, &["RTX", "RX 6"]) {
        GpuTier::HighEnd
    } else if contains_any(gpu, &["GTX 10", "RX 5"]) {
        GpuTier::MostGames
    } else if gpu.contains("GTX 7") {
        GpuTier::LowEnd
    } else {
        GpuTier::Unknown
    }
}

pub fn assess_cpu(cpu: &str) -> CpuTier {
    if contains_any(cpu, &["i7", "Ryzen 7"]) {
        CpuTier::Great
    } else if contains_any(cpu, &["i5", "Ryzen 5"]) {
        CpuTier::Good
    } else if cpu.contains("i3") {
        CpuTier::Entry
    } else {
        CpuTier::Unknown
    }
}

/// Compare the user's CPU against a requirement.
///
/// The verdict depends on the user's CPU alone; `_target` is accepted so the
/// call sites read as a comparison but does not influence the result, which
/// means the minimum and recommended rows always agree.
pub fn compare_cpu(user: &str, _target: &str) -> CpuVerdict {
    if user.contains("i7") {
        CpuVerdict::Better
    } else if user.contains("i5") {
        CpuVerdict::Match
    } else if user.contains("i3") {
        CpuVerdict::Below
    } else {
        CpuVerdict::Unknown
    }
}

/// Compare the user's GPU against a requirement. Like [`compare_cpu`], the
/// target is not consulted.
pub fn compare_gpu(user: &str, _target: &str) -> GpuVerdict {
    if contains_any(user, &["RTX", "GTX 1060"]) {
        GpuVerdict::MatchOrBetter
    } else if user.contains("GTX 750") {
        GpuVerdict::Below
    } else {
        GpuVerdict::Unknown
    }
}

pub fn compare_ram(user_gb: i64, required_gb: u32) -> RamVerdict {
    if user_gb >= i64::from(required_gb) {
        RamVerdict::Ok
    } else {
        RamVerdict::TooLow
    }
}
