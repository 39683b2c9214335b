use super::*;
use crate::model::metrics::ArticleMetrics;

#[test]
fn test_quantiles() {
    let v = vec![1.0f64, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p90(&v), 5.0);
    assert_eq!(mean(&v), 3.0);
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn test_metric_stats() {
    let results: Vec<MetricsResult> = [10u64, 30, 20]
        .iter()
        .enumerate()
        .map(|(i, &wc)| MetricsResult {
            url_id: format!("r{i}"),
            metrics: ArticleMetrics {
                word_count: wc,
                ..ArticleMetrics::default()
            },
        })
        .collect();

    let stats = metric_stats(MetricName::WordCount, &results);
    assert_eq!(stats.name, "WORD COUNT");
    assert_eq!(stats.mean, 20.0);
    assert_eq!(stats.median, 20.0);
    assert_eq!(stats.p90, 30.0);
    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.max, 30.0);
}

#[test]
fn test_metric_stats_empty() {
    let stats = metric_stats(MetricName::FogIndex, &[]);
    assert_eq!(stats.mean, 0.0);
    assert_eq!(stats.min, 0.0);
    assert_eq!(stats.max, 0.0);
}
