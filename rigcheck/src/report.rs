//! Compatibility report composer.
//!
//! Combines a parsed diagnostic dump with a title's requirements and renders
//! the fixed text layout shown to the user. The layout (field order, section
//! markers, leading and trailing newline) is relied on by consumers of the
//! text and must not drift.

use crate::catalog::TitleSpec;
use crate::classifier::{
    assess_cpu, assess_gpu, compare_cpu, compare_gpu, compare_ram, CpuTier, CpuVerdict, GpuTier,
    GpuVerdict, RamVerdict,
};
use crate::core::RigCheckError;
use crate::parser::ParsedDiagnostic;

/// Verdicts for one diagnostic dump against one title.
#[derive(Debug, Clone)]
pub struct CompatibilityReport<'a> {
    pub title: &'a TitleSpec,
    pub parsed: &'a ParsedDiagnostic,
    pub ram_gb: i64,
    pub gpu_tier: GpuTier,
    pub cpu_tier: CpuTier,
    pub cpu_min: CpuVerdict,
    pub cpu_rec: CpuVerdict,
    pub gpu_min: GpuVerdict,
    pub gpu_rec: GpuVerdict,
    pub ram_min: RamVerdict,
    pub ram_rec: RamVerdict,
}

impl<'a> CompatibilityReport<'a> {
    /// Classify the parsed hardware against `title`.
    ///
    /// Fails when the memory field is not a number; no partial report is
    /// produced in that case.
    pub fn evaluate(
        parsed: &'a ParsedDiagnostic,
        title: &'a TitleSpec,
    ) -> Result<Self, RigCheckError> {
        let ram_gb = parsed.ram_gb()?;

        Ok(Self {
            title,
            parsed,
            ram_gb,
            gpu_tier: assess_gpu(&parsed.gpu),
            cpu_tier: assess_cpu(&parsed.cpu),
            cpu_min: compare_cpu(&parsed.cpu, title.min.cpu),
            cpu_rec: compare_cpu(&parsed.cpu, title.rec.cpu),
            gpu_min: compare_gpu(&parsed.gpu, title.min.gpu),
            gpu_rec: compare_gpu(&parsed.gpu, title.rec.gpu),
            ram_min: compare_ram(ram_gb, title.min.ram_gb),
            ram_rec: compare_ram(ram_gb, title.rec.ram_gb),
        })
    }

    pub fn render(&self) -> String {
        let t = self.title;
        let p = self.parsed;
        let mut out = String::new();

        out.push('\n');
        out.push_str(&format!("🎮 Game: {}\n\n", t.name));

        out.push_str(&format!("🖥️ Graphics Card: {}\n", p.gpu));
        out.push_str(&format!("   → {}\n\n", self.gpu_tier));

        out.push_str(&format!("⚙️ CPU: {}\n", p.cpu));
        out.push_str(&format!("   → {}\n\n", self.cpu_tier));

        out.push_str(&format!("💾 RAM: {} GB\n", self.ram_gb));
        out.push_str(&format!(
            "   → Required: Min {} GB / Rec {} GB\n\n",
            t.min.ram_gb, t.rec.ram_gb
        ));

        out.push_str(&format!("🧩 DirectX Version: {}\n\n", p.directx));

        out.push_str("📊 Game Compatibility:\n\n");

        out.push_str("🧠 CPU:\n");
        out.push_str(&format!("- Min Spec: {} → {}\n", t.min.cpu, self.cpu_min));
        out.push_str(&format!("- Rec Spec: {} → {}\n\n", t.rec.cpu, self.cpu_rec));

        out.push_str("🎮 GPU:\n");
        out.push_str(&format!("- Min Spec: {} → {}\n", t.min.gpu, self.gpu_min));
        out.push_str(&format!("- Rec Spec: {} → {}\n\n", t.rec.gpu, self.gpu_rec));

        out.push_str("📦 RAM:\n");
        out.push_str(&format!("- Min Spec: {} GB → {}\n", t.min.ram_gb, self.ram_min));
        out.push_str(&format!("- Rec Spec: {} GB → {}\n", t.rec.ram_gb, self.ram_rec));

        out
    }
}

/// Evaluate and render in one step.
pub fn compose_dxdiag_report(
    parsed: &ParsedDiagnostic,
    title: &TitleSpec,
) -> Result<String, RigCheckError> {
    CompatibilityReport::evaluate(parsed, title).map(|report| report.render())
}
