pub mod article;
pub mod metrics;
pub mod thresholds;
