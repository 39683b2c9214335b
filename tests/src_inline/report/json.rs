use super::*;
use crate::report::{InputSummary, NamedStats, ProfileSummary, ToolMeta};

fn sample_summary() -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: "kira-textmetrics".to_string(),
            version: "0.1.0".to_string(),
        },
        input: InputSummary {
            path: "Input.tsv".to_string(),
            rows: 3,
            processed: 2,
            skipped: 1,
            skipped_ids: vec!["b".to_string()],
        },
        profile: ProfileSummary {
            pronoun_mode: "substring".to_string(),
            complex_syllable_threshold: 2,
            fog_weight: 0.4,
            lexicon: "builtin:en".to_string(),
        },
        output_table: "out/Output.tsv".to_string(),
        metrics: vec![NamedStats {
            name: "FOG INDEX",
            mean: 13.0,
            median: 13.0,
            p90: 14.0,
            min: 12.0,
            max: 14.0,
        }],
    }
}

#[test]
fn test_summary_json_shape() {
    let json = render_summary_json(&sample_summary()).unwrap();
    assert!(json.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"]["name"], "kira-textmetrics");
    assert_eq!(value["input"]["processed"], 2);
    assert_eq!(value["input"]["skipped_ids"][0], "b");
    assert_eq!(value["profile"]["pronoun_mode"], "substring");
    assert_eq!(value["metrics"][0]["name"], "FOG INDEX");
    assert_eq!(value["metrics"][0]["p90"], 14.0);
}
