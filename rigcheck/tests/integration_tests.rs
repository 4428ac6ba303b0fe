//! End-to-end checks through the core pipeline

use rigcheck::prelude::*;
use rigcheck::{CompatibilityReport, CpuVerdict, GpuVerdict, RamVerdict};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn upload(name: &str) -> Upload {
    Upload::from_path(&fixture_path(name)).expect("fixture should exist")
}

#[test]
fn test_high_end_rig_against_nba_2k25() {
    let catalog = Catalog::builtin();
    let parsed = rigcheck::parse_dxdiag_bytes(
        b"Card name: NVIDIA GeForce RTX 3070\n\
          Processor: Intel(R) Core(TM) i7-9700K\n\
          Memory: 16384MB\n\
          DirectX Version: DirectX 12\n",
    );
    let title = catalog.get("NBA 2K25").expect("title should be listed");
    let report = CompatibilityReport::evaluate(&parsed, title).unwrap();

    assert_eq!(report.gpu_tier.to_string(), "High-end gaming");
    assert_eq!(report.cpu_tier.to_string(), "Great for gaming");
    assert_eq!(report.ram_gb, 16);
    assert_eq!(report.cpu_min, CpuVerdict::Better);
    assert_eq!(report.cpu_rec, CpuVerdict::Better);
    assert_eq!(report.gpu_min, GpuVerdict::MatchOrBetter);
    assert_eq!(report.gpu_rec, GpuVerdict::MatchOrBetter);
    assert_eq!(report.ram_min, RamVerdict::Ok);
    assert_eq!(report.ram_rec, RamVerdict::Ok);
}

#[test]
fn test_low_end_rig_against_lego_drive() {
    let catalog = Catalog::builtin();
    let core = RigCheckCore::new(&catalog, CheckOptions::default());
    let request = CheckRequest::new("LEGO 2K Drive").with_dxdiag(upload("dxdiag_gtx750.txt"));

    let outcome = core.check(&request).unwrap();
    let summary = outcome.dxdiag_summary.unwrap();

    assert!(summary.contains("   → Low-end, older games"));
    assert!(summary.contains("   → Entry level"));
    assert!(summary.contains("💾 RAM: 6 GB"));
    assert!(summary.contains("- Min Spec: Intel i5-4690 → Below"));
    assert!(summary.contains("- Rec Spec: NVIDIA RTX 2070 → Below"));
    assert!(summary.contains("- Min Spec: 8 GB → Too Low"));
    assert!(outcome.msinfo_summary.is_none());
}

#[test]
fn test_both_dumps() {
    let catalog = Catalog::builtin();
    let core = RigCheckCore::new(&catalog, CheckOptions::default());
    let request = CheckRequest::new("WWE 2K24")
        .with_dxdiag(upload("dxdiag_rtx3070.txt"))
        .with_msinfo(upload("msinfo_low_spec.txt"));

    let outcome = core.check(&request).unwrap();
    assert_eq!(outcome.title, "WWE 2K24");

    let dx = outcome.dxdiag_summary.unwrap();
    assert!(dx.starts_with("\n🎮 Game: WWE 2K24\n"));
    assert!(dx.ends_with("- Rec Spec: 16 GB → OK\n"));

    let ms = outcome.msinfo_summary.unwrap();
    let issues = ms.split("[POTENTIAL ISSUES]\n").nth(1).unwrap();
    let lines: Vec<_> = issues.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Low RAM"));
    assert!(lines[1].contains("Low storage"));
    assert!(lines[2].contains("Realtek"));
}

#[test]
fn test_unknown_title_uses_default() {
    let catalog = Catalog::builtin();
    let core = RigCheckCore::new(&catalog, CheckOptions::default());

    let summary = core
        .analyze_dxdiag(&std::fs::read(fixture_path("dxdiag_rtx3070.txt")).unwrap(), "Madden 25")
        .unwrap();
    assert!(summary.contains("🎮 Game: NBA 2K25"));
    assert!(summary.contains("Required: Min 4 GB / Rec 8 GB"));
}

#[test]
fn test_malformed_dump_produces_no_report() {
    let catalog = Catalog::builtin();
    let core = RigCheckCore::new(&catalog, CheckOptions::default());
    let request = CheckRequest::new("NBA 2K25").with_dxdiag(upload("dxdiag_malformed.txt"));

    let result = core.check(&request);
    assert!(matches!(result, Err(RigCheckError::MalformedNumeric { .. })));
}

#[test]
fn test_every_title_renders() {
    let catalog = Catalog::builtin();
    let core = RigCheckCore::new(&catalog, CheckOptions::default());
    let bytes = std::fs::read(fixture_path("dxdiag_rtx3070.txt")).unwrap();

    for title in catalog.titles() {
        let summary = core.analyze_dxdiag(&bytes, title.name).unwrap();
        assert!(summary.contains(&format!("🎮 Game: {}", title.name)));
        assert!(summary.contains(&format!("- Min Spec: {} →", title.min.cpu)));
        assert!(summary.contains(&format!("- Rec Spec: {} →", title.rec.gpu)));
    }
}
