pub mod csv_report;
pub mod csv_source;
