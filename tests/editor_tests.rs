use fontsnip::editor::{InsertPosition, apply_edit};
use std::fs;

#[test]
fn test_replace_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(&path, "<head>OLD</head>").unwrap();

    apply_edit(&path, &InsertPosition::Replace(6..9), "NEW").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "<head>NEW</head>");
}

#[test]
fn test_insert_at_offset_deletes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.css");
    fs::write(&path, "body {}").unwrap();

    apply_edit(&path, &InsertPosition::At(0), "@import x;\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "@import x;\nbody {}");
}

#[test]
fn test_append_at_end_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.css");
    fs::write(&path, "body {}\n").unwrap();

    apply_edit(&path, &InsertPosition::End, "@import x;").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "body {}\n@import x;");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.html");
    let err = apply_edit(&path, &InsertPosition::End, "x").unwrap_err();
    assert!(err.to_string().contains("No editing context"));
}

#[test]
fn test_failed_edit_leaves_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    let original = "<head></head>";
    fs::write(&path, original).unwrap();

    // Range far past end of file.
    let err = apply_edit(&path, &InsertPosition::Replace(5..999), "snippet").unwrap_err();
    assert!(err.to_string().contains("past the end"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        original,
        "file must be byte-identical after a failed edit"
    );
}

#[test]
fn test_inverted_range_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    let original = "<head></head>";
    fs::write(&path, original).unwrap();

    let err = apply_edit(&path, &InsertPosition::Replace(9..3), "snippet").unwrap_err();
    assert!(err.to_string().contains("past its end"));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_multibyte_boundary_rejected_without_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    let original = "héllo";
    fs::write(&path, original).unwrap();

    // Offset 2 is inside the two-byte 'é'.
    let err = apply_edit(&path, &InsertPosition::At(2), "x").unwrap_err();
    assert!(err.to_string().contains("character boundary"));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
