pub mod csv;
pub mod dataset;

pub use dataset::Dataset;
