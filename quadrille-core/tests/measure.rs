use quadrille_core::measure::{display_width, max_display_width};

#[test]
fn test_ascii_width() {
    assert_eq!(display_width("status"), 6);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_wide_characters() {
    // CJK cells are two columns wide
    assert_eq!(display_width("名前"), 4);
    assert_eq!(display_width("a名"), 3);
}

#[test]
fn test_max_display_width() {
    let texts = ["id", "hostname", "up"];
    assert_eq!(max_display_width(texts), 8);
}

#[test]
fn test_max_display_width_empty() {
    assert_eq!(max_display_width(std::iter::empty::<&str>()), 0);
}
