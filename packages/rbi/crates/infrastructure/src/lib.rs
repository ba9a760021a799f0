pub mod adapters;

pub use adapters::csv_report::{CsvReportFile, CsvReportWriter};
pub use adapters::csv_source::CsvVesselSource;
