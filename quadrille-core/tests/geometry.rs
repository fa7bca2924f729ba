use quadrille_core::geometry::Rect;

#[test]
fn test_contains_inside_and_edges() {
    let r = Rect::new(2, 3, 4, 2);
    assert!(r.contains(2, 3));
    assert!(r.contains(5, 4));
    assert!(!r.contains(6, 3));
    assert!(!r.contains(2, 5));
    assert!(!r.contains(1, 3));
}

#[test]
fn test_right_and_bottom_are_exclusive() {
    let r = Rect::new(10, 1, 30, 5);
    assert_eq!(r.right(), 40);
    assert_eq!(r.bottom(), 6);
    assert!(r.contains(39, 5));
    assert!(!r.contains(40, 5));
    assert!(!r.contains(39, 6));
}

#[test]
fn test_header_row_outside_body_rect() {
    // The body rect starts one row under the header; a pointer on the
    // header line must hit the viewport but never a body row.
    let viewport = Rect::new(0, 0, 40, 12);
    let body = Rect::new(0, 1, 39, 5);
    assert!(viewport.contains(8, 0));
    assert!(!body.contains(8, 0));
    assert!(body.contains(8, 1));
    assert!(!body.contains(8, 6));
}

#[test]
fn test_empty_rect_contains_nothing() {
    let r = Rect::new(4, 4, 0, 5);
    assert!(r.is_empty());
    assert!(!r.contains(4, 4));

    let r = Rect::new(0, 0, 5, 0);
    assert!(r.is_empty());
    assert!(!r.contains(0, 0));
}
