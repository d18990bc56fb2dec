//! Loading site content from disk.

use std::io::Write;

use folio_core::{FolioError, SiteContent, SpringConfig};
use tempfile::NamedTempFile;

fn write_json(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write");
    file
}

#[test]
fn loads_content_file() {
    let file = write_json(
        r#"{
            "name": "Ada",
            "projects": [
                { "title": "Engine", "description": "Toy renderer", "link": "https://example.com", "tech": ["Rust"] },
                { "title": "Notes", "description": "Offline editor" }
            ],
            "motion": { "stiffness": 80 }
        }"#,
    );

    let content = SiteContent::load(file.path()).unwrap();
    assert_eq!(content.name, "Ada");
    assert_eq!(content.projects.len(), 2);
    assert_eq!(content.projects[0].tech, vec!["Rust".to_string()]);
    assert!(content.projects[1].link.is_empty());
    assert_eq!(content.motion.stiffness, 80.0);
    assert_eq!(content.motion.damping, SpringConfig::default().damping);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteContent::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, FolioError::Io(_)));
}

#[test]
fn malformed_json_is_reported() {
    let file = write_json("{ \"name\": ");
    let err = SiteContent::load(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::Json(_)));
    assert!(err.to_string().starts_with("Serialization error"));
}

#[test]
fn invalid_timeline_is_rejected() {
    let file = write_json(r#"{ "timeline": [{ "title": "", "text": "x" }] }"#);
    let err = SiteContent::load(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::InvalidContent(_)));
}
