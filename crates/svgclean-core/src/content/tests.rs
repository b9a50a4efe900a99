use super::*;

#[test]
fn strips_text_and_records_attribution() {
    let svg = r#"<svg width="10"><text>Icon by Jane</text></svg>"#;
    let res = clean(svg, "noun-bell-001.svg");
    assert_eq!(res.attribution, "noun-bell-001.svg: Icon by Jane");
    assert_eq!(
        res.content,
        r#"<svg preserveAspectRatio="xMidYMid meet" width="10"></svg>"#
    );
}

#[test]
fn no_text_elements() {
    let res = clean(r#"<svg><path d="M0 0"/></svg>"#, "plain.svg");
    assert_eq!(res.attribution, "plain.svg: No attribution detail");
    assert!(res.attribution.ends_with(NO_ATTRIBUTION));
    assert_eq!(
        res.content,
        r#"<svg preserveAspectRatio="xMidYMid meet"><path d="M0 0"/></svg>"#
    );
}

#[test]
fn multiple_text_elements_in_document_order() {
    let svg = concat!(
        r#"<svg viewBox="0 0 24 24"><path d="M1 1"/>"#,
        r#"<text x="0" y="115" font-size="5">Created by Jane</text>"#,
        r#"<text x="0" y="120" font-size="5">from the Noun Project</text>"#,
        "</svg>"
    );
    let res = clean(svg, "noun-x-1.svg");
    assert_eq!(
        res.attribution,
        "noun-x-1.svg: Created by Jane from the Noun Project"
    );
    assert!(!res.content.contains("<text"));
    assert!(!res.content.contains("</text>"));
    assert_eq!(
        res.content,
        r#"<svg preserveAspectRatio="xMidYMid meet" viewBox="0 0 100 100"><path d="M1 1"/></svg>"#
    );
}

#[test]
fn text_body_may_span_lines() {
    let svg = "<svg>\n<text\n  x=\"1\">Line one\nline two</text>\n</svg>";
    let res = clean(svg, "a.svg");
    assert_eq!(res.attribution, "a.svg: Line one\nline two");
    assert_eq!(
        res.content,
        "<svg preserveAspectRatio=\"xMidYMid meet\">\n\n</svg>"
    );
}

#[test]
fn text_match_is_case_sensitive() {
    let svg = "<svg><TEXT>kept</TEXT></svg>";
    let res = clean(svg, "a.svg");
    assert_eq!(res.attribution, "a.svg: No attribution detail");
    assert!(res.content.contains("<TEXT>kept</TEXT>"));
}

#[test]
fn only_first_svg_tag_gets_aspect_ratio() {
    let svg = "<svg><svg x=\"1\"></svg></svg>";
    let res = clean(svg, "nested.svg");
    assert_eq!(
        res.content,
        "<svg preserveAspectRatio=\"xMidYMid meet\"><svg x=\"1\"></svg></svg>"
    );
}

#[test]
fn every_view_box_is_rewritten() {
    let svg = r#"<svg viewBox="0 0 24 24"><symbol viewBox="-5 -5 10 10"/></svg>"#;
    let res = clean(svg, "a.svg");
    assert_eq!(res.content.matches(r#"viewBox="0 0 100 100""#).count(), 2);
    assert!(!res.content.contains("24 24"));
}

#[test]
fn view_box_rewrite_is_idempotent() {
    let svg: &[u8] = br#"<svg viewBox="0 0 48 48"></svg>"#;
    let replacement: &[u8] = br#"viewBox="0 0 100 100""#;
    let once = VIEW_BOX.replace_all(svg, replacement).into_owned();
    let twice = VIEW_BOX.replace_all(&once, replacement).into_owned();
    assert_eq!(once, twice);

    let cleaned = clean_bytes(svg, "a.svg").content;
    let again = clean_bytes(&cleaned, "a.svg").content;
    assert_eq!(
        VIEW_BOX.find(&cleaned).map(|m| m.as_bytes().to_vec()),
        VIEW_BOX.find(&again).map(|m| m.as_bytes().to_vec())
    );
}

#[test]
fn latin1_bytes_pass_through_unchanged() {
    let svg: &[u8] = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<svg viewBox=\"0 0 24 24\"><desc>\xA9 Jane</desc><text>\xA9 Jane</text></svg>";
    let res = clean_bytes(svg, "latin.svg");
    assert_eq!(
        res.content,
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<svg preserveAspectRatio=\"xMidYMid meet\" viewBox=\"0 0 100 100\"><desc>\xA9 Jane</desc></svg>".to_vec()
    );
    assert_eq!(res.attribution, "latin.svg: \u{FFFD} Jane");
}

#[test]
fn no_svg_tag_leaves_content_alone() {
    let res = clean("not svg at all", "broken.svg");
    assert_eq!(res.content, "not svg at all");
    assert_eq!(res.attribution, "broken.svg: No attribution detail");
}

#[test]
fn empty_text_body_still_counts() {
    let res = clean("<svg><text></text></svg>", "e.svg");
    assert_eq!(res.attribution, "e.svg:");
    assert_eq!(res.content, "<svg preserveAspectRatio=\"xMidYMid meet\"></svg>");
}
