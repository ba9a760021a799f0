//! Facade over the RBI layers so front-ends depend on a single crate.

pub use application;
pub use domain;
pub use infrastructure;
