use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rollcall::{
    extract_records, format_summary, gather_image_files, recognize_batch, write_workbook,
    PipelineConfig, RosterReport, ScanConfig, TesseractEngine,
};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(
    author,
    version,
    about = "Use OCR to build a spreadsheet from meeting participant-list screenshots",
    long_about = "Use OCR to build an attendee spreadsheet from meeting participant-list \
                  screenshots. Take screenshots as cropped as possible to avoid interference \
                  from other UI elements."
)]
struct Cli {
    /// Image files and directories to read - leave blank to use all .png
    /// files in the current directory
    inputs: Vec<PathBuf>,

    /// Output spreadsheet file name
    #[arg(short, long, default_value = "output.xlsx")]
    output: PathBuf,

    /// Also write a machine-readable JSON report to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Tesseract executable (set if tesseract is not on PATH)
    #[arg(long, default_value = "tesseract")]
    tesseract_cmd: PathBuf,

    /// OCR language passed to tesseract
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    run(cli)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run(cli: Cli) -> Result<()> {
    let files = gather_image_files(&cli.inputs, &ScanConfig::default())
        .context("Failed to gather input images")?;
    if files.is_empty() {
        bail!("No input images found (expected .png screenshots)");
    }
    info!("Found {} input image(s)", files.len());

    let engine = TesseractEngine::new(cli.tesseract_cmd, cli.lang);
    let ocr_text = recognize_batch(&engine, &files).context("OCR failed")?;

    let records = extract_records(&ocr_text, &PipelineConfig::default());
    info!("Extracted {} attendee record(s)", records.len());

    write_workbook(&records, &cli.output)
        .with_context(|| format!("Failed to write spreadsheet: {:?}", cli.output))?;
    info!("Spreadsheet written to {:?}", cli.output);

    if let Some(json_path) = &cli.json {
        RosterReport::from_records(&records)
            .write_json(json_path)
            .with_context(|| format!("Failed to write JSON report: {:?}", json_path))?;
        info!("JSON report written to {:?}", json_path);
    }

    print!("{}", format_summary(&records));

    Ok(())
}
