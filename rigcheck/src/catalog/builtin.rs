//! Built-in requirement table.

use crate::catalog::{RequirementTier, TitleSpec};

/// Title used when a requested title is not in the table.
pub const DEFAULT_TITLE: &str = "NBA 2K25";

const fn tier(cpu: &'static str, gpu: &'static str, ram_gb: u32) -> RequirementTier {
    RequirementTier { cpu, gpu, ram_gb }
}

const TITLE_SPECS: [TitleSpec; 6] = [
    TitleSpec {
        name: "NBA 2K25",
        min: tier("Intel i3-6100", "NVIDIA GTX 750 Ti", 4),
        rec: tier("Intel i5-8400", "NVIDIA GTX 1060", 8),
    },
    TitleSpec {
        name: "NBA 2K24",
        min: tier("Intel i3-2100", "NVIDIA GT 450", 4),
        rec: tier("Intel i5-4430", "NVIDIA GTX 770", 8),
    },
    TitleSpec {
        name: "WWE 2K24",
        min: tier("Intel i5-3550", "NVIDIA GTX 1060", 8),
        rec: tier("Intel i7-4790", "NVIDIA RTX 2060", 16),
    },
    TitleSpec {
        name: "PGA 2K23",
        min: tier("Intel i5-7600", "NVIDIA GTX 1070", 6),
        rec: tier("Intel i5-10600K", "NVIDIA RTX 2070", 12),
    },
    TitleSpec {
        name: "TopSpin 2K25",
        min: tier("Intel i3-6100", "NVIDIA GTX 960", 4),
        rec: tier("Intel i5-8400", "NVIDIA GTX 1070", 8),
    },
    TitleSpec {
        name: "LEGO 2K Drive",
        min: tier("Intel i5-4690", "NVIDIA GTX 960", 8),
        rec: tier("Intel i7-8700", "NVIDIA RTX 2070", 16),
    },
];

/// Get all built-in title specs in table order.
pub fn title_specs() -> Vec<TitleSpec> {
    TITLE_SPECS.to_vec()
}
