use std::fs;

use pretty_assertions::assert_eq;
use robots_tags::{RobotsDirectives, RobotsHeaders, RobotsMeta, RobotsSource, SourceError};
use tempfile::tempdir;

#[tokio::test]
async fn test_meta_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, r#"<meta name="robots" content="nofollow">"#).unwrap();

    let meta = RobotsMeta::read_from(path.to_str().unwrap()).await.unwrap();

    assert!(!meta.may_follow(None));
    assert!(meta.may_index(None));
}

#[tokio::test]
async fn test_file_has_no_headers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, "X-Robots-Tag: noindex").unwrap();

    let headers = RobotsHeaders::read_from(path.to_str().unwrap()).await.unwrap();

    assert!(headers.may_index(None));
    assert!(headers.table().is_empty());
}

#[tokio::test]
async fn test_source_keeps_location_and_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, "<html></html>").unwrap();
    let location = path.to_str().unwrap();

    let source = RobotsSource::load(location).await.unwrap();

    assert_eq!(source.location(), location);
    assert_eq!(source.status_code(), None);
    assert_eq!(source.content(), "<html></html>");
}

#[tokio::test]
async fn test_missing_file_is_unreadable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.html");

    let error = RobotsMeta::read_from(path.to_str().unwrap()).await.unwrap_err();

    assert!(matches!(error, SourceError::Unreadable { .. }));
    assert!(error.to_string().starts_with("Could not read from source"));
}

#[tokio::test]
async fn test_unsupported_scheme() {
    let error = RobotsSource::load("ftp://example.com/page.html").await.unwrap_err();

    assert!(matches!(error, SourceError::UnsupportedSource(_)));
}
