use nbt_path::{SEPARATOR, TagPath, path::Segments};

fn collect(segments: Segments<'_>) -> Vec<&str> {
    segments.collect()
}

#[test]
fn test_parse_multi_segment() {
    let path = TagPath::parse("a.b.c");
    assert_eq!(path.parent(), ["a", "b"]);
    assert_eq!(path.leaf(), "c");
    assert!(!path.is_root());
    assert_eq!(collect(path.segments()), ["a", "b", "c"]);
}

#[test]
fn test_parse_single_segment() {
    let path = TagPath::parse("leaf");
    assert!(path.parent().is_empty());
    assert_eq!(path.leaf(), "leaf");
    assert_eq!(collect(path.segments()), ["leaf"]);
}

#[test]
fn test_parse_root() {
    let path = TagPath::parse("");
    assert!(path.is_root());
    assert_eq!(path.leaf(), "");
    assert!(collect(path.segments()).is_empty());
    assert_eq!(path, TagPath::default());
}

#[test]
fn test_empty_segments_are_kept() {
    let path = TagPath::parse("a..b");
    assert_eq!(path.parent(), ["a", ""]);
    assert_eq!(path.leaf(), "b");

    let path = TagPath::parse("a.");
    assert_eq!(path.parent(), ["a"]);
    assert_eq!(path.leaf(), "");
    assert!(!path.is_root());
    assert_eq!(collect(path.segments()), ["a", ""]);
}

#[test]
fn test_display_and_from_str() {
    for raw in ["", "a", "a.b", "a..b", "a.", ".a", "x.y.z.w"] {
        let path: TagPath = raw.parse().unwrap();
        assert_eq!(path.to_string(), raw);
        assert_eq!(TagPath::from(raw), path);
    }
}

#[test]
fn test_separator() {
    assert_eq!(SEPARATOR, '.');
}
