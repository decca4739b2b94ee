//! Pluggable building blocks shared by the pipeline.

pub mod indicator;

pub use indicator::Indicator;
