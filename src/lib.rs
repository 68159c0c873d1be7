pub mod io;
pub mod models;
pub mod pipeline;

pub use io::{
    format_summary, gather_image_files, recognize_batch, write_workbook, OcrEngine, OcrError,
    RosterReport, ScanConfig, TesseractEngine,
};
pub use models::{Affiliation, AttendeeRecord};
pub use pipeline::{extract_records, PipelineConfig};
