pub mod stage1_ingest;
pub mod stage2_metrics;
pub mod stage3_report;
