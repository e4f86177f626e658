//! File and byte input tests.

use std::io::Write;

use html2draft::{ConvertOptions, Error, convert_bytes, convert_file};
use tempfile::NamedTempFile;

#[test]
fn test_convert_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "<h1>Title</h1>\n<p>Some <em>text</em> and <a href='https://example.com'>a link</a>.</p>"
    )
    .unwrap();

    let doc = convert_file(file.path(), &ConvertOptions::default()).unwrap();
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[1].text, "Some text and a link.");
    assert_eq!(doc.entity_map.len(), 1);
}

#[test]
fn test_convert_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_file(dir.path().join("absent.html"), &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_convert_file_with_declared_encoding() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<meta charset='iso-8859-15'><p>\xa4 5</p>")
        .unwrap();

    let doc = convert_file(file.path(), &ConvertOptions::new().with_strict(true)).unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].text, "\u{20ac} 5");
}

#[test]
fn test_convert_bytes_with_bom() {
    let doc = convert_bytes(b"\xef\xbb\xbf<p>bom</p>", &ConvertOptions::default()).unwrap();
    assert_eq!(doc.blocks[0].text, "bom");
}

#[test]
fn test_json_round_trip_through_file() {
    let doc = convert_bytes(b"<ul><li>a</li></ul>", &ConvertOptions::default()).unwrap();

    let mut out = NamedTempFile::new().unwrap();
    out.write_all(doc.to_json_pretty().unwrap().as_bytes()).unwrap();

    let text = std::fs::read_to_string(out.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["blocks"][0]["type"], "unordered-list-item");
    assert_eq!(value["entityMap"], serde_json::json!({}));
}
