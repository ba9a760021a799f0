pub mod report_sink;
pub mod vessel_source;
