use dealbot::{decide, Catalog, KeywordSentimentScorer, NegotiationError, Negotiator};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_catalog_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[products]]
id = "Bicycle"
max_price = 1200
min_price = 800
start_price = 1000

[[products]]
id = "Helmet"
max_price = 90
min_price = 40
start_price = 60
"#
    )
    .unwrap();

    let catalog = Catalog::from_file(file.path()).unwrap();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["Bicycle", "Helmet"]);
    assert_eq!(catalog.get("Helmet").unwrap().min_price, 40);
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::from_file(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(NegotiationError::IoError(_))));
}

#[test]
fn test_invalid_catalog_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[products]]
id = "Helmet"
max_price = 90
min_price = 70
start_price = 60
"#
    )
    .unwrap();

    let err = Catalog::from_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        NegotiationError::InvalidConfigValueError { .. }
    ));
}

#[tokio::test]
async fn test_custom_catalog_negotiation() {
    let catalog = Catalog::from_toml_str(
        r#"
[[products]]
id = "Helmet"
max_price = 90
min_price = 40
start_price = 60
"#,
    )
    .unwrap();

    let helmet = catalog.get("Helmet").unwrap().clone();
    let mut bot = Negotiator::seeded(Arc::new(catalog), KeywordSentimentScorer::new(), 4);
    assert!(bot.start_session("Laptop").is_err());

    let mut session = bot.start_session("Helmet").unwrap();
    let decision = bot.submit(&mut session, "39").await.unwrap();
    let discount = session.current_discount().unwrap();

    // 折扣夠大時 39 會被接受，即使低於底價
    assert_eq!(decision, decide(39, &helmet, discount));
    assert_eq!(decision.is_accepted(), 39 >= 60 - discount);
}
