//! Simple check example: compare a DxDiag dump with a title and print the summary.

use rigcheck::prelude::*;
use std::path::Path;

fn main() -> Result<(), RigCheckError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/dxdiag_rtx3070.txt".to_string());
    let title = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "NBA 2K25".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example simple_check [path/to/DxDiag.txt] [title]");
        std::process::exit(1);
    }

    let catalog = Catalog::builtin();
    let core = RigCheckCore::new(&catalog, CheckOptions::default());
    let request = CheckRequest::new(title).with_dxdiag(Upload::from_path(path)?);

    let outcome = core.check(&request)?;
    println!("Requirements from: {}", outcome.title);
    if let Some(summary) = outcome.dxdiag_summary {
        println!("{}", summary);
    }
    Ok(())
}
