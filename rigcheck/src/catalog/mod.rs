//! Hardware requirement catalog.
//!
//! The catalog is a fixed table of minimum and recommended hardware for each
//! supported title. It is built once with [`Catalog::builtin`] and then passed
//! by reference to whatever needs it; nothing mutates it afterwards.

pub mod builtin;

use serde::Serialize;

/// One requirement level (minimum or recommended) for a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementTier {
    pub cpu: &'static str,
    pub gpu: &'static str,
    pub ram_gb: u32,
}

/// Minimum and recommended requirements for a single title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleSpec {
    pub name: &'static str,
    pub min: RequirementTier,
    pub rec: RequirementTier,
}

/// Read-only lookup table of title requirements.
#[derive(Debug, Clone)]
pub struct Catalog {
    titles: Vec<TitleSpec>,
    default_index: usize,
}

impl Catalog {
    /// The built-in requirement table with "NBA 2K25" as the fallback title.
    pub fn builtin() -> Self {
        let titles = builtin::title_specs();
        let default_index = titles
            .iter()
            .position(|t| t.name == builtin::DEFAULT_TITLE)
            .unwrap_or(0);
        Self {
            titles,
            default_index,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, title: &str) -> Option<&TitleSpec> {
        self.titles.iter().find(|t| t.name == title)
    }

    /// Look up `title`, substituting the default title when it is not listed.
    pub fn resolve(&self, title: &str) -> &TitleSpec {
        match self.get(title) {
            Some(spec) => spec,
            None => {
                let fallback = self.default_spec();
                tracing::warn!(
                    "Unknown title {:?}, falling back to {:?}",
                    title,
                    fallback.name
                );
                fallback
            }
        }
    }

    pub fn default_title(&self) -> &'static str {
        self.default_spec().name
    }

    /// All titles in table order.
    pub fn titles(&self) -> impl Iterator<Item = &TitleSpec> {
        self.titles.iter()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    fn default_spec(&self) -> &TitleSpec {
        &self.titles[self.default_index]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_all_titles() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.titles().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "NBA 2K25",
                "NBA 2K24",
                "WWE 2K24",
                "PGA 2K23",
                "TopSpin 2K25",
                "LEGO 2K Drive",
            ]
        );
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("WWE 2K24").is_some());
        assert!(catalog.get("wwe 2k24").is_none());
        assert!(catalog.get("WWE 2K24 ").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let catalog = Catalog::builtin();
        let spec = catalog.resolve("Half-Life 3");
        assert_eq!(spec.name, "NBA 2K25");
        assert_eq!(catalog.default_title(), "NBA 2K25");
    }

    #[test]
    fn test_resolve_known_title() {
        let catalog = Catalog::builtin();
        let spec = catalog.resolve("PGA 2K23");
        assert_eq!(spec.min.ram_gb, 6);
        assert_eq!(spec.rec.gpu, "NVIDIA RTX 2070");
    }
}
