//! RigCheck CLI - check DxDiag and MSInfo dumps against game requirements.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use rigcheck::{Catalog, CheckOptions, CheckOutcome, CheckRequest, RigCheckCore, Upload};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "rigcheck")]
#[command(about = "Check DxDiag and MSInfo reports against game requirements", long_about = None)]
#[command(version)]
struct Cli {
    /// Log parsing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one or both dumps for a title
    Check {
        /// DirectX diagnostic dump (dxdiag /t)
        #[arg(long, value_name = "FILE")]
        dxdiag: Option<PathBuf>,

        /// System information dump (msinfo32 /report)
        #[arg(long, value_name = "FILE")]
        msinfo: Option<PathBuf>,

        /// Title to compare against; unknown titles use the default
        #[arg(short, long, default_value = "NBA 2K25")]
        title: String,

        /// Keep a copy of each dump in this directory
        #[arg(long, value_name = "DIR")]
        upload_dir: Option<PathBuf>,
    },

    /// List titles and their requirements
    Titles {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = Catalog::builtin();
    let result = match cli.command {
        Commands::Check {
            dxdiag,
            msinfo,
            title,
            upload_dir,
        } => handle_check(&catalog, dxdiag, msinfo, title, upload_dir),
        Commands::Titles { format } => handle_titles(&catalog, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_upload(path: &Path) -> anyhow::Result<Upload> {
    Upload::from_path(path).with_context(|| format!("could not read {}", path.display()))
}

fn handle_check(
    catalog: &Catalog,
    dxdiag: Option<PathBuf>,
    msinfo: Option<PathBuf>,
    title: String,
    upload_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    if dxdiag.is_none() && msinfo.is_none() {
        bail!("nothing to check, pass --dxdiag and/or --msinfo");
    }

    let mut request = CheckRequest::new(title);
    if let Some(path) = &dxdiag {
        request = request.with_dxdiag(read_upload(path)?);
    }
    if let Some(path) = &msinfo {
        request = request.with_msinfo(read_upload(path)?);
    }

    let core = RigCheckCore::new(catalog, CheckOptions { upload_dir });
    let outcome = core
        .check(&request)
        .context("could not process the uploaded reports")?;
    output_outcome(&outcome);
    Ok(())
}

fn output_outcome(outcome: &CheckOutcome) {
    if let Some(ref summary) = outcome.dxdiag_summary {
        println!("DxDiag Summary");
        println!("{}", "─".repeat(60));
        println!("{}", summary);
    }
    if let Some(ref summary) = outcome.msinfo_summary {
        println!("MSInfo Summary");
        println!("{}", "─".repeat(60));
        println!("{}", summary);
    }
}

fn handle_titles(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Human => {
            println!("Available titles:\n");
            for spec in catalog.titles() {
                let marker = if spec.name == catalog.default_title() {
                    " (default)"
                } else {
                    ""
                };
                println!("  {}{}", spec.name, marker);
                println!(
                    "    Min: {} / {} / {} GB",
                    spec.min.cpu, spec.min.gpu, spec.min.ram_gb
                );
                println!(
                    "    Rec: {} / {} / {} GB",
                    spec.rec.cpu, spec.rec.gpu, spec.rec.ram_gb
                );
                println!();
            }
        }
        OutputFormat::Json => {
            let titles: Vec<_> = catalog.titles().collect();
            println!("{}", serde_json::to_string_pretty(&titles)?);
        }
    }
    Ok(())
}
