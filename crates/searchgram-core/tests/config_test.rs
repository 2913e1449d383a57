use searchgram_core::config::{Config, NumericPolicy, ReportConfig};
use searchgram_core::error::SearchgramError;
use searchgram_core::loader::ReportLoader;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.loader.header_skip, 2);
    assert_eq!(config.loader.numeric_policy(), NumericPolicy::Coerce);
    assert_eq!(config.report.get_ngram_sizes().unwrap(), vec![1, 2, 3]);
    assert_eq!(config.report.min_clicks, 5.0);
    assert_eq!(config.report.top_waste, 10);
}

#[test]
fn test_ngram_sizes_parsing_custom() {
    let report = ReportConfig {
        ngram_sizes: " 2, 4 ,2".to_string(),
        ..Default::default()
    };
    assert_eq!(report.get_ngram_sizes().unwrap(), vec![2, 4]);
}

#[test]
fn test_ngram_sizes_rejects_zero_and_garbage() {
    for bad in ["0", "1,x", "", " , "] {
        let report = ReportConfig {
            ngram_sizes: bad.to_string(),
            ..Default::default()
        };
        let err = report.get_ngram_sizes().unwrap_err();
        assert!(matches!(err, SearchgramError::Config(_)), "{}", bad);
    }
}

#[test]
fn test_partial_json_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("searchgram.json");
    std::fs::write(
        &path,
        r#"{ "loader": { "strict_numbers": true }, "report": { "min_clicks": 0 } }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.loader.numeric_policy(), NumericPolicy::Strict);
    assert_eq!(config.loader.header_skip, 2);
    assert_eq!(config.report.min_clicks, 0.0);
    assert_eq!(config.report.ngram_sizes, "1,2,3");
}

#[test]
fn test_bad_json_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SearchgramError::Json(_))
    ));
}

#[test]
fn test_loader_from_config() {
    let mut config = Config::default();
    config.loader.delimiter = ';';
    config.loader.header_skip = 0;
    let loader = ReportLoader::from_config(&config.loader).unwrap();
    assert_eq!(loader.delimiter, b';');

    let set = loader.load_from_bytes(b"Search term;Cost\nshoes;2\n").unwrap();
    assert_eq!(set.records[0].cost, 2.0);

    config.loader.delimiter = '€';
    assert!(ReportLoader::from_config(&config.loader).is_err());
}
