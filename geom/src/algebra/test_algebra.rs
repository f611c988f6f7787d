//! Unit tests for the geometry algebra.

use super::*;
use crate::{Pool, Rect, ScalarKind, Size};

/// A handful of non-null rectangles of all kinds, some of them anti-normalized or without extent on one axis.
fn samples() -> Vec<Rect<'static>> {
    vec![
        Rect::int(0, 0, 9, 9),
        Rect::int(-5, 3, 4, 20),
        Rect::int(5, 5, 0, 0),
        Rect::int(7, 7, 7, 7),
        Rect::int(5, 0, 4, 9),
        Rect::float(0, 0, 10, 10),
        Rect::float(-2.5, 1.25, 3.5, 8),
        Rect::float(10, 10, 0, 0),
        Rect::float(5, 0, 5, 9),
        Rect::from_corners(ScalarKind::Float32, 0.1, 0.2, 10.3, 5.7),
        Rect::from_corners(ScalarKind::Float32, 3.3, 9.9, -1.1, 0.7),
    ]
}

fn corners(r: &impl RectLike) -> [f64; 4] {
    r.corners()
}

#[test]
fn test_size_of() {
    let mut out = Size::int(0, 0);
    size_of(&Rect::int(0, 0, 9, 9), &mut out);
    assert_eq!(Size::int(10, 10), out);

    let mut out = Size::float(0, 0);
    size_of(&Rect::float(0, 0, 10, 10), &mut out);
    assert_eq!(Size::float(10, 10), out);

    for r in samples() {
        let mut out = Size::float(0, 0);
        size_of(&r, &mut out);
        let adj = r.adj();
        assert_eq!([r.right() - r.left() + adj, r.bottom() - r.top() + adj], [out.width(), out.height()]);
    }
}

#[test]
fn test_is_null() {
    assert!(is_null(&Rect::new(ScalarKind::Int16)));
    assert!(is_null(&Rect::new(ScalarKind::Float64)));
    assert!(is_null(&Rect::int(4, 6, 3, 5)));
    assert!(is_null(&Rect::float(4, 6, 4, 6)));
    assert!(is_null(&Rect::float(0.1 + 0.2, 0, 0.3, 0)));

    assert!(!is_null(&Rect::int(0, 0, 9, 9)));
    assert!(!is_null(&Rect::int(5, 5, 0, 0)));
    // Zero extent on one axis only
    assert!(!is_null(&Rect::int(0, 0, -1, 5)));
    assert!(!is_null(&Rect::float(0, 0, 0, 5)));
    // Single unit
    assert!(!is_null(&Rect::int(3, 3, 3, 3)));
}

#[test]
fn test_is_empty() {
    assert!(is_empty(&Rect::new(ScalarKind::Int16)));
    assert!(is_empty(&Rect::int(5, 5, 0, 0)));
    assert!(is_empty(&Rect::float(0, 0, 0, 5)));
    assert!(is_valid(&Rect::int(3, 3, 3, 3)));
    assert!(is_valid(&Rect::float(0, 0, 0.5, 0.5)));
}

#[test]
fn test_set_size() {
    let mut r = Rect::int(2, 3, 4, 5);
    set_size(&mut r, &Size::int(10, 20));
    assert_eq!([2.0, 3.0, 11.0, 22.0], corners(&r));

    let mut r = Rect::float(2, 3, 4, 5);
    set_size(&mut r, &Size::float(10, 20));
    assert_eq!([2.0, 3.0, 12.0, 23.0], corners(&r));
}

#[test]
fn test_corner_getters() {
    let r = Rect::int(1, 2, 3, 4);
    let mut p = Point::default();
    top_left(&r, &mut p);
    assert_eq!(Point::new(1, 2), p);
    bottom_right(&r, &mut p);
    assert_eq!(Point::new(3, 4), p);
    top_right(&r, &mut p);
    assert_eq!(Point::new(3, 2), p);
    bottom_left(&r, &mut p);
    assert_eq!(Point::new(1, 4), p);
}

#[test]
fn test_corner_setters_hold_opposite_corner() {
    let mut r = Rect::int(0, 0, 9, 9);
    set_top_left(&mut r, (2, 3));
    assert_eq!([2.0, 3.0, 9.0, 9.0], corners(&r));
    set_bottom_right(&mut r, (20, 30));
    assert_eq!([2.0, 3.0, 20.0, 30.0], corners(&r));
    set_top_right(&mut r, (5, 1));
    assert_eq!([2.0, 1.0, 5.0, 30.0], corners(&r));
    set_bottom_left(&mut r, (-1, 4));
    assert_eq!([-1.0, 1.0, 5.0, 4.0], corners(&r));
}

#[test]
fn test_center_integer_quirk() {
    // The mean of the corners, not the middle of the ten covered units (which would be 5.0)
    let mut p = Point::default();
    center(&Rect::int(0, 0, 9, 9), &mut p);
    assert_eq!(Point::new(4.5, 4.5), p);

    center(&Rect::float(0, 0, 10, 10), &mut p);
    assert_eq!(Point::new(5, 5), p);
}

#[test]
fn test_move_edges() {
    let mut r = Rect::int(0, 0, 9, 9);
    move_left(&mut r, 5.0);
    assert_eq!([5.0, 0.0, 14.0, 9.0], corners(&r));
    move_top(&mut r, -5.0);
    assert_eq!([5.0, -5.0, 14.0, 4.0], corners(&r));
    move_right(&mut r, 9.0);
    assert_eq!([0.0, -5.0, 9.0, 4.0], corners(&r));
    move_bottom(&mut r, 9.0);
    assert_eq!([0.0, 0.0, 9.0, 9.0], corners(&r));

    let mut r = Rect::float(0, 0, 10, 10);
    move_right(&mut r, 2.5);
    assert_eq!([-7.5, 0.0, 2.5, 10.0], corners(&r));
}

#[test]
fn test_move_edges_integer_rounds_delta() {
    let mut r = Rect::int(0, 0, 9, 9);
    move_left(&mut r, -2.5);
    // Rounded away from zero, size kept
    assert_eq!([-3.0, 0.0, 6.0, 9.0], corners(&r));
}

#[test]
fn test_move_top_left() {
    let mut r = Rect::int(0, 0, 9, 9);
    move_top_left(&mut r, Point::new(3, 4));
    assert_eq!([3.0, 4.0, 12.0, 13.0], corners(&r));
    let mut size = Size::int(0, 0);
    size_of(&r, &mut size);
    assert_eq!(Size::int(10, 10), size);
}

#[test]
fn test_move_corners() {
    let mut r = Rect::int(0, 0, 9, 9);
    move_bottom_right(&mut r, (20, 20));
    assert_eq!([11.0, 11.0, 20.0, 20.0], corners(&r));
    move_top_right(&mut r, (9, 0));
    assert_eq!([0.0, 0.0, 9.0, 9.0], corners(&r));
    move_bottom_left(&mut r, (1, 19));
    assert_eq!([1.0, 10.0, 10.0, 19.0], corners(&r));

    let mut r = Rect::float(0, 0, 10, 10);
    move_bottom_right(&mut r, (0.5, 0.5));
    assert_eq!([-9.5, -9.5, 0.5, 0.5], corners(&r));
}

#[test]
fn test_move_center() {
    let mut r = Rect::float(0, 0, 10, 4);
    move_center(&mut r, (0, 0));
    assert_eq!([-5.0, -2.0, 5.0, 2.0], corners(&r));

    let mut r = Rect::int(0, 0, 9, 9);
    move_center(&mut r, (10, 10));
    assert_eq!([6.0, 6.0, 15.0, 15.0], corners(&r));
    let mut p = Point::default();
    center(&r, &mut p);
    assert_eq!(Point::new(10.5, 10.5), p);

    let mut r = Rect::int(0, 0, 10, 10);
    move_center(&mut r, (20, 20));
    assert_eq!([15.0, 15.0, 25.0, 25.0], corners(&r));
}

#[test]
fn test_translate() {
    let mut r = Rect::float(0, 0, 10, 10);
    translate(&mut r, (1.5, -2));
    assert_eq!([1.5, -2.0, 11.5, 8.0], corners(&r));
    translate(&mut r, Point::new(-1.5, 2));
    assert_eq!([0.0, 0.0, 10.0, 10.0], corners(&r));

    let mut r = Rect::int(0, 0, 9, 9);
    translate(&mut r, (2.5, -2.5));
    assert_eq!([3.0, -3.0, 12.0, 6.0], corners(&r));
}

#[test]
fn test_translated() {
    let source = Rect::int(0, 0, 9, 9);
    let mut out = Rect::new(ScalarKind::Int16);
    translated(&source, (2.5, 2.5), &mut out);
    assert_eq!([3.0, 3.0, 12.0, 12.0], corners(&out));
    // The source is not touched
    assert_eq!([0.0, 0.0, 9.0, 9.0], corners(&source));

    // Away from zero, also for negative results
    let mut out = Rect::new(ScalarKind::Int16);
    translated(&Rect::int(-5, 0, 1, 1), (2.5, -0.5), &mut out);
    assert_eq!([-3.0, -1.0, 4.0, 1.0], corners(&out));

    // Float sources are not rounded
    let mut out = Rect::new(ScalarKind::Float64);
    translated(&Rect::float(0, 0, 9, 9), (2.5, 2.5), &mut out);
    assert_eq!([2.5, 2.5, 11.5, 11.5], corners(&out));
}

#[test]
fn test_adjusted() {
    let mut out = Rect::new(ScalarKind::Int16);
    adjusted(&Rect::int(0, 0, 9, 9), 1.0, 2.0, -1.0, -2.0, &mut out);
    assert_eq!([1.0, 2.0, 8.0, 7.0], corners(&out));
}

#[test]
fn test_transposed() {
    let mut out = Rect::new(ScalarKind::Int16);
    transposed(&Rect::int(2, 3, 11, 7), &mut out);
    assert_eq!([2.0, 3.0, 6.0, 12.0], corners(&out));

    let mut out = Rect::new(ScalarKind::Float64);
    transposed(&Rect::float(2, 3, 12, 8), &mut out);
    assert_eq!([2.0, 3.0, 7.0, 13.0], corners(&out));
}

#[test]
fn test_normalized() {
    let mut out = Rect::new(ScalarKind::Int16);
    normalized(&Rect::int(5, 5, 0, 0), &mut out);
    assert_eq!([0.0, 0.0, 5.0, 5.0], corners(&out));

    normalized(&Rect::int(5, 0, 0, 9), &mut out);
    assert_eq!([0.0, 0.0, 5.0, 9.0], corners(&out));

    // The null rectangle is not anti-normalized
    normalized(&Rect::new(ScalarKind::Int16), &mut out);
    assert_eq!([0.0, 0.0, -1.0, -1.0], corners(&out));

    let mut out = Rect::new(ScalarKind::Float64);
    normalized(&Rect::float(10, 10, 0, 0), &mut out);
    assert_eq!([0.0, 0.0, 10.0, 10.0], corners(&out));
}

#[test]
fn test_normalized_is_idempotent() {
    for r in samples() {
        let mut once = Rect::new(r.kind());
        let mut twice = Rect::new(r.kind());
        normalized(&r, &mut once);
        normalized(&once, &mut twice);
        assert_eq!(once, twice, "{:?}", r);
    }
}

#[test]
fn test_and() {
    let mut out = Rect::new(ScalarKind::Int16);
    and(&Rect::int(0, 0, 9, 9), &Rect::int(5, 5, 14, 14), &mut out);
    assert_eq!([5.0, 5.0, 9.0, 9.0], corners(&out));

    let mut out = Rect::new(ScalarKind::Float64);
    and(&Rect::float(0, 0, 10, 10), &Rect::float(5, 5, 15, 15), &mut out);
    assert_eq!([5.0, 5.0, 10.0, 10.0], corners(&out));

    // Anti-normalized inputs are normalized independently
    let mut out = Rect::new(ScalarKind::Int16);
    and(&Rect::int(9, 9, 0, 0), &Rect::int(5, 14, 14, 5), &mut out);
    assert_eq!([5.0, 5.0, 9.0, 9.0], corners(&out));
}

#[test]
fn test_and_empty_uses_result_kind() {
    let mut out = Rect::float(1, 2, 3, 4);
    and(&Rect::int(0, 0, 9, 9), &Rect::int(20, 20, 29, 29), &mut out);
    assert_eq!([0.0, 0.0, 0.0, 0.0], corners(&out));

    let mut out = Rect::int(1, 2, 3, 4);
    and(&Rect::float(0, 0, 10, 10), &Rect::new(ScalarKind::Float64), &mut out);
    assert_eq!([0.0, 0.0, -1.0, -1.0], corners(&out));
}

#[test]
fn test_and_self_is_normalized() {
    for r in samples() {
        let mut meet = Rect::new(r.kind());
        let mut norm = Rect::new(r.kind());
        and(&r, &r, &mut meet);
        normalized(&r, &mut norm);
        assert_eq!(norm, meet, "{:?}", r);
    }
}

#[test]
fn test_or() {
    let a = Rect::int(0, 0, 9, 9);
    let b = Rect::int(20, -5, 15, 4);
    let mut out = Rect::new(ScalarKind::Int16);
    let joined = or(&a, &b, &mut out);
    assert_eq!([0.0, -5.0, 20.0, 9.0], corners(joined));
    assert_eq!([0.0, -5.0, 20.0, 9.0], corners(&out));
}

#[test]
fn test_or_with_null_returns_other_input() {
    let null = Rect::new(ScalarKind::Int16);
    for r in samples().into_iter().filter(|r| r.kind() == ScalarKind::Int16) {
        let mut out = Rect::int(100, 100, 100, 100);
        let joined = or(&r, &null, &mut out);
        assert!(std::ptr::eq(&r, joined));
        let joined = or(&null, &r, &mut out);
        assert!(std::ptr::eq(&r, joined));
        assert_eq!(r, *joined);
    }

    // The result argument is untouched
    let mut out = Rect::int(100, 100, 100, 100);
    let _ = or(&null, &Rect::int(0, 0, 1, 1), &mut out);
    assert_eq!([100.0; 4], corners(&out));
}

#[test]
fn test_contains_point() {
    let r = Rect::int(0, 0, 9, 9);
    assert!(contains_point(&r, (0, 0), false));
    assert!(contains_point(&r, (9, 9), false));
    assert!(contains_point(&r, Point::new(4.5, 4.5), false));
    assert!(!contains_point(&r, (10, 5), false));

    assert!(!contains_point(&r, (0, 5), true));
    assert!(!contains_point(&r, (5, 9), true));
    assert!(contains_point(&r, (1, 8), true));

    // Anti-normalized
    assert!(contains_point(&Rect::float(10, 10, 0, 0), (2, 3), false));
    // Null rectangles contain nothing
    assert!(!contains_point(&Rect::new(ScalarKind::Int16), (0, 0), false));
}

#[test]
fn test_contains_rect() {
    let outer = Rect::int(0, 0, 9, 9);
    assert!(contains_rect(&outer, &Rect::int(0, 0, 4, 4), false));
    assert!(!contains_rect(&outer, &Rect::int(0, 0, 4, 4), true));
    assert!(contains_rect(&outer, &Rect::int(1, 1, 8, 8), true));
    assert!(!contains_rect(&outer, &Rect::int(5, 5, 10, 8), false));
    assert!(contains_rect(&outer, &Rect::int(8, 8, 1, 1), true));

    assert!(!contains_rect(&outer, &Rect::new(ScalarKind::Int16), false));
    assert!(!contains_rect(&Rect::new(ScalarKind::Int16), &outer, false));
}

#[test]
fn test_contains_self() {
    for r in samples() {
        assert!(contains_rect(&r, &r, false), "{:?}", r);
        assert!(!contains_rect(&r, &r, true), "{:?}", r);
    }
}

#[test]
fn test_intersects_rect() {
    let r = Rect::int(0, 0, 9, 9);
    assert!(intersects_rect(&r, &Rect::int(5, 5, 14, 14)));
    // Sharing the last column
    assert!(intersects_rect(&r, &Rect::int(9, 0, 20, 9)));
    assert!(!intersects_rect(&r, &Rect::int(10, 0, 20, 9)));
    assert!(intersects_rect(&r, &Rect::int(14, 14, 5, 5)));
    assert!(!intersects_rect(&r, &Rect::new(ScalarKind::Int16)));

    let r = Rect::float(0, 0, 10, 10);
    assert!(intersects_rect(&r, &Rect::float(10, 0, 20, 10)));
    assert!(!intersects_rect(&r, &Rect::float(10.5, 0, 20, 10)));
}

#[test]
fn test_intersects_agrees_with_and() {
    let rects = [
        Rect::int(0, 0, 9, 9),
        Rect::int(5, 5, 14, 14),
        Rect::int(9, 0, 20, 3),
        Rect::int(10, 10, 12, 12),
        Rect::int(-4, -4, 0, 0),
        Rect::int(3, 3, 3, 3),
        Rect::int(5, 0, 4, 9),
    ];
    let mut scratch = Rect::new(ScalarKind::Int16);
    for a in &rects {
        for b in &rects {
            and(a, b, &mut scratch);
            assert_eq!(intersects_rect(a, b), !is_null(&scratch), "{:?} {:?}", a, b);
        }
    }

    let rects = [
        Rect::float(0, 0, 10, 10),
        Rect::float(5, 5, 15, 15),
        Rect::float(2.5, -1, 3.5, 20),
        Rect::float(11, 11, 12, 12),
    ];
    let mut scratch = Rect::new(ScalarKind::Float64);
    for a in &rects {
        for b in &rects {
            and(a, b, &mut scratch);
            assert_eq!(intersects_rect(a, b), !is_null(&scratch), "{:?} {:?}", a, b);
        }
    }
}

#[test]
fn test_and_self_zero_extent_axis() {
    let r = Rect::int(5, 0, 4, 9);
    let mut meet = Rect::new(ScalarKind::Int16);
    and(&r, &r, &mut meet);
    assert_eq!(r, meet);
    assert!(intersects_rect(&r, &r));

    // The collapsed column at x = 5 lies in (0, 0, 9, 9)
    and(&r, &Rect::int(0, 0, 9, 9), &mut meet);
    assert_eq!([5.0, 0.0, 4.0, 9.0], corners(&meet));
    assert!(!intersects_rect(&r, &Rect::int(6, 0, 9, 9)));

    let r = Rect::float(5, 0, 5, 9);
    let mut meet = Rect::new(ScalarKind::Float64);
    and(&r, &r, &mut meet);
    assert_eq!(r, meet);
}

#[test]
fn test_meeting_in_a_single_point() {
    // Overlap is found, but the intersection is the null rectangle
    let a = Rect::float(0, 0, 5, 5);
    let b = Rect::float(5, 5, 10, 10);
    let mut meet = Rect::new(ScalarKind::Float64);
    and(&a, &b, &mut meet);
    assert!(intersects_rect(&a, &b));
    assert!(is_null(&meet));
    assert_eq!([5.0, 5.0, 5.0, 5.0], corners(&meet));

    // The same for a collapsed column crossing a collapsed row
    let a = Rect::int(5, 0, 4, 9);
    let b = Rect::int(0, 5, 9, 4);
    let mut meet = Rect::new(ScalarKind::Int16);
    and(&a, &b, &mut meet);
    assert!(intersects_rect(&a, &b));
    assert!(is_null(&meet));
}

#[test]
fn test_float32_rects() {
    let a = Rect::from_corners(ScalarKind::Float32, 0.1, 0.1, 10.7, 10.7);
    let b = Rect::from_corners(ScalarKind::Float32, 5.3, 5.3, 15.9, 15.9);
    // Stored with single precision
    assert_eq!(0.1f32 as f64, a.left());
    assert_ne!(0.1, a.left());

    let mut out = Rect::new(ScalarKind::Float32);
    and(&a, &b, &mut out);
    assert!(fuzzy_eq_rect(&Rect::float(5.3, 5.3, 10.7, 10.7), &out), "{:?}", out);

    normalized(&Rect::from_corners(ScalarKind::Float32, 10.7, 0.1, 0.1, 5.3), &mut out);
    assert!(fuzzy_eq_rect(&Rect::float(0.1, 0.1, 10.7, 5.3), &out), "{:?}", out);

    let mut size = Size::float(0, 0);
    size_of(&a, &mut size);
    assert!(fuzzy_eq_size(&Size::float(10.6, 10.6), &size), "{:?}", size);

    translated(&a, (0.2, -0.1), &mut out);
    assert!(fuzzy_eq_rect(&Rect::float(0.3, 0, 10.9, 10.6), &out), "{:?}", out);
    assert_eq!(ScalarKind::Float32, out.kind());
}

#[test]
fn test_fuzzy_eq_rect() {
    assert!(fuzzy_eq_rect(&Rect::float(0.1 + 0.2, 0, 1, 1), &Rect::float(0.3, 0, 1, 1)));
    assert!(fuzzy_eq_rect(&Rect::from_corners(ScalarKind::Float32, 0.1, 0.0, 1.0, 1.0), &Rect::float(0.1, 0, 1, 1)));
    assert!(!fuzzy_eq_rect(&Rect::float(0, 0, 1, 1), &Rect::float(0, 0, 1, 1.01)));
}

#[test]
fn test_functions_on_pooled_rects() {
    let pool = Pool::new(64);
    let a = Rect::construct_in_pool(&pool, ScalarKind::Int16, &[0, 0, 9, 9].map(crate::Operand::from)).unwrap();
    let b = Rect::construct_in_pool(&pool, ScalarKind::Int16, &[5, 5, 14, 14].map(crate::Operand::from)).unwrap();
    let mut out = Rect::in_pool(&pool, ScalarKind::Int16).unwrap();
    and(&a, &b, &mut out);
    assert_eq!([5.0, 5.0, 9.0, 9.0], corners(&out));

    let offset = out.offset().unwrap();
    let view = Rect::view_at(&pool, ScalarKind::Int16, offset).unwrap();
    assert_eq!(out.detach(), view.detach());
}

#[test]
fn test_size_algebra() {
    assert!(is_null_size(&Size::int(0, 0)));
    assert!(!is_null_size(&Size::int(0, 1)));
    assert!(is_empty_size(&Size::float(0, 1)));
    assert!(is_empty_size(&Size::float(-1, 1)));
    assert!(is_valid_size(&Size::float(0, 1)));
    assert!(!is_valid_size(&Size::float(-1, 1)));

    let mut out = Size::int(0, 0);
    transposed_size(&Size::int(3, 4), &mut out);
    assert_eq!(Size::int(4, 3), out);
    expanded_to(&Size::int(3, 10), &Size::int(5, 2), &mut out);
    assert_eq!(Size::int(5, 10), out);
    bounded_to(&Size::int(3, 10), &Size::int(5, 2), &mut out);
    assert_eq!(Size::int(3, 2), out);

    assert!(fuzzy_eq_size(&Size::float(0.1 + 0.2, 1), &Size::float(0.3, 1)));
    assert!(!fuzzy_eq_size(&Size::float(1, 1), &Size::float(1, 2)));
}

#[test]
fn test_set_null() {
    let mut r = Rect::int(1, 2, 3, 4);
    set_null(&mut r);
    assert!(is_null(&r));
    assert_eq!([0.0, 0.0, -1.0, -1.0], corners(&r));
}
