pub mod files;
pub mod ocr;
pub mod report;
pub mod spreadsheet;

pub use files::*;
pub use ocr::*;
pub use report::*;
pub use spreadsheet::*;
