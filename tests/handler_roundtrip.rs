//! Handler Round-Trip Tests
//!
//! End-to-end properties of the document handler:
//! - NotFound carries the exact missing path
//! - write/read round-trips children in order
//! - append preserves order across repeated calls
//! - overwrite leaves no residue
//! - malformed content fails Corrupted, never a partial tree

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use treedoc::document::Element;
use treedoc::handler::{DocumentHandler, ErrorKind, HandlerError};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup(content: &str) -> (TempDir, DocumentHandler) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("doc.xml");
    fs::write(&path, content).unwrap();

    let handler = DocumentHandler::open(&path)
        .unwrap()
        .with_audit_log(tmp.path().join("audit.log"));
    (tmp, handler)
}

fn item(id: &str, text: &str) -> Element {
    Element::new("item").with_attribute("id", id).with_text(text)
}

fn child_ids(root: &Element) -> Vec<String> {
    root.children
        .iter()
        .map(|c| c.get_attribute("id").unwrap_or("").to_string())
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

/// A handler over a missing path fails NotFound with that exact path.
#[test]
fn test_open_missing_path_fails_not_found_with_path() {
    let tmp = TempDir::new().unwrap();
    let missing: PathBuf = tmp.path().join("does-not-exist.xml");

    let err = DocumentHandler::open(&missing).unwrap_err();
    assert_eq!(err, HandlerError::NotFound(missing.clone()));
    assert_eq!(err.path(), missing.as_path());
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

/// Existence is only checked at open time; deleting the file afterwards
/// surfaces as Corrupted on the next operation, not NotFound.
#[test]
fn test_file_deleted_after_open_reads_as_corrupted() {
    let (_tmp, handler) = setup("<data/>");
    fs::remove_file(handler.path()).unwrap();

    let err = handler.read().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Corrupted);
}

// =============================================================================
// Round-Trip Properties
// =============================================================================

/// write followed by read returns the same children in the same order.
#[test]
fn test_write_read_round_trip() {
    let (_tmp, handler) = setup("<data/>");

    let mut root = Element::new("data");
    root.children.push(item("1", "first"));
    root.children.push(item("2", "second"));
    root.children.push(item("3", "third"));
    handler.write(&root).unwrap();

    let reread = handler.read().unwrap();
    assert_eq!(reread, root);
    assert_eq!(child_ids(&reread), vec!["1", "2", "3"]);
}

/// Appending N nodes one at a time yields the same final sequence as
/// the order of the calls: no reordering, no dedup.
#[test]
fn test_append_preserves_order_no_dedup() {
    let (_tmp, handler) = setup("<data/>");

    handler.append(item("1", "a")).unwrap();
    handler.append(item("2", "b")).unwrap();
    handler.append(item("2", "b")).unwrap();
    handler.append(item("3", "c")).unwrap();

    let root = handler.read().unwrap();
    assert_eq!(child_ids(&root), vec!["1", "2", "2", "3"]);
}

/// One item on disk, append a second, read back two in order.
#[test]
fn test_append_scenario() {
    let (_tmp, handler) = setup(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<data>\n  <item id=\"1\">first</item>\n</data>",
    );

    handler.append(item("2", "second")).unwrap();

    let root = handler.read().unwrap();
    assert_eq!(root.children.len(), 2);
    assert_eq!(child_ids(&root), vec!["1", "2"]);
    assert_eq!(root.children[0].text.as_deref(), Some("first"));
    assert_eq!(root.children[1].text.as_deref(), Some("second"));
}

/// A second write fully replaces the first; nothing lingers.
#[test]
fn test_write_overwrites_completely() {
    let (_tmp, handler) = setup("<data/>");

    let mut first = Element::new("data");
    first.children.push(item("1", "first"));
    first.children.push(item("2", "second"));
    handler.write(&first).unwrap();

    let mut second = Element::new("data");
    second.children.push(item("100", "replacement"));
    handler.write(&second).unwrap();

    let root = handler.read().unwrap();
    assert_eq!(child_ids(&root), vec!["100"]);

    let raw = fs::read_to_string(handler.path()).unwrap();
    assert!(!raw.contains("id=\"1\""));
    assert!(!raw.contains("first"));
}

// =============================================================================
// Corruption Handling
// =============================================================================

/// Unparseable markup fails Corrupted with a parse-error reason.
#[test]
fn test_read_unclosed_tag_fails_corrupted() {
    let (_tmp, handler) = setup("<?xml version='1.0'?><data><item>unclosed");

    let err = handler.read().unwrap_err();
    match err {
        HandlerError::Corrupted { path, reason: Some(reason) } => {
            assert_eq!(path, handler.path());
            assert!(reason.starts_with("parse error"), "reason: {reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// append on a corrupt document fails the same way and does not touch
/// the file.
#[test]
fn test_append_on_corrupt_document_fails_and_preserves_file() {
    let (_tmp, handler) = setup("<data><item>unclosed");
    let before = fs::read_to_string(handler.path()).unwrap();

    let err = handler.append(item("2", "second")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Corrupted);

    let after = fs::read_to_string(handler.path()).unwrap();
    assert_eq!(before, after);
}

/// Garbage that is not markup at all also fails Corrupted.
#[test]
fn test_read_non_markup_fails_corrupted() {
    let (_tmp, handler) = setup("this is not a document");

    let err = handler.read().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Corrupted);
}

// =============================================================================
// Persisted Format
// =============================================================================

/// write produces a declaration header and two-space indentation.
#[test]
fn test_written_format() {
    let (_tmp, handler) = setup("<data/>");

    let mut root = Element::new("data");
    root.children.push(item("1", "first"));
    handler.write(&root).unwrap();

    let raw = fs::read_to_string(handler.path()).unwrap();
    assert!(raw.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(raw.contains("\n  <item id=\"1\">first</item>"));
}

/// Paths are exposed unchanged through the handler.
#[test]
fn test_handler_path_accessor() {
    let (tmp, handler) = setup("<data/>");
    assert_eq!(handler.path(), tmp.path().join("doc.xml").as_path());
}
