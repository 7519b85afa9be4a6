pub mod aggregation;
pub mod progress;
pub mod scoring;
