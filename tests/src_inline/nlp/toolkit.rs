use super::*;

#[test]
fn test_initialize_with_builtin_lexicon() {
    let toolkit = NlpToolkit::initialize(&NlpConfig::default()).unwrap();
    assert_eq!(toolkit.lexicon_source(), "builtin:en");
    assert_eq!(toolkit.tokenizer().words("two words").unwrap().len(), 2);
    assert_eq!(toolkit.syllables().count("amazing").unwrap(), 3);
    let s = toolkit.sentiment().analyze("great").unwrap();
    assert_eq!(s.polarity, 0.8);
}

#[test]
fn test_initialize_with_missing_lexicon_fails() {
    let config = NlpConfig {
        lexicon_path: Some(PathBuf::from("/nonexistent/kira/lexicon.tsv")),
    };
    assert!(matches!(
        NlpToolkit::initialize(&config),
        Err(NlpError::Io(_))
    ));
}
