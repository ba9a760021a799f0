pub mod assessment;
pub mod dataset;
pub mod vessel;
