//! Integration tests for loading stylesheets from disk.

use std::io::Write;

use restyle::adaptive::AdaptiveStyle;
use restyle::{
    ContentSizeCategory, Environment, Font, StyleValidationError, Stylesheet, StylesheetError,
};
use tempfile::NamedTempFile;

const SHEET: &str = r##"
body:
  font: { family: Avenir-Book, size: 17 }
  line_spacing: 4
  adaptations: [body]
em:
  font: { family: Avenir-BookOblique, size: 17 }
strong:
  foreground_color: "#cc3300"
footnote: caption
caption:
  font: { family: Avenir-Book, size: 12 }
  adaptations: [control]
"##;

fn write_sheet(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_path_loads_named_styles() {
    let file = write_sheet(SHEET);
    let sheet = Stylesheet::from_path(file.path()).unwrap();

    assert_eq!(sheet.styles().len(), 5);
    let footnote = sheet.get("footnote").unwrap();
    assert_eq!(footnote.font, Some(Font::new("Avenir-Book", 12.0)));
    assert_eq!(footnote.adaptations, vec![AdaptiveStyle::Control]);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    match Stylesheet::from_path(&path) {
        Err(StylesheetError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn test_cycle_is_reported_from_disk() {
    let file = write_sheet("a: b\nb: a\n");
    match Stylesheet::from_path(file.path()) {
        Err(StylesheetError::Validation(StyleValidationError::CycleDetected { path })) => {
            assert!(path.len() >= 2);
        }
        other => panic!("expected a cycle, got {:?}", other),
    }
}

#[test]
fn test_unknown_field_is_parse_error() {
    let file = write_sheet("body:\n  colour: red\n");
    let err = Stylesheet::from_path(file.path()).unwrap_err();
    assert!(matches!(err, StylesheetError::Parse(_)));
}

#[test]
fn test_markup_with_stylesheet_tags() {
    let sheet = Stylesheet::from_yaml_str(SHEET).unwrap();
    let body = sheet
        .get("body")
        .unwrap()
        .clone()
        .markup(sheet.tag_styler());

    let text = body.styled_text("plain <em>slanted</em> &amp; <strong>bold</strong>");
    assert_eq!(text.text(), "plain slanted & bold");

    let slanted = text.attributes_at(6).and_then(|a| a.font()).unwrap();
    assert_eq!(slanted.family(), "Avenir-BookOblique");

    // Tag styles merge over the body style, so adaptation still applies.
    let large = text.adapted(&Environment::new(ContentSizeCategory::ExtraLarge));
    let plain = large.attributes_at(0).and_then(|a| a.font()).unwrap();
    assert_eq!(plain.point_size(), 19.0);
}

#[test]
fn test_broken_markup_falls_back_to_plain_text() {
    let sheet = Stylesheet::from_yaml_str(SHEET).unwrap();
    let body = sheet
        .get("body")
        .unwrap()
        .clone()
        .markup(sheet.tag_styler());

    let text = body.styled_text("<em>never closed");
    assert_eq!(text.text(), "<em>never closed");
    assert_eq!(text.runs().len(), 1);
}
