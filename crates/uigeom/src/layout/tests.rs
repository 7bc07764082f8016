use super::*;
use crate::error::GeometryError;

#[test]
fn size_clip_scale_equal() {
    let s = Size::new(10.0, 20.0);
    assert_eq!(s.clip_to(Some(Size::new(15.0, 5.0))), Size::new(10.0, 5.0));
    assert_eq!(s.clip_to(None), s);
    assert_eq!(s.scale(0.5), Size::new(5.0, 10.0));
    assert!(s.is_equal(Some(&Size::new(10.0, 20.0))));
    assert!(!s.is_equal(Some(&Size::new(10.0, 21.0))));
    assert!(!s.is_equal(None));
    // Negative extents are allowed.
    assert_eq!(Size::new(-1.0, 2.0).add_width(-3.0), Size::new(-4.0, 2.0));
}

#[test]
fn size_combinators_accept_scalar_or_size() {
    let s = Size::new(10.0, 20.0);
    assert_eq!(s.width_to_max(30.0), Size::new(30.0, 20.0));
    assert_eq!(s.width_to_max(Size::new(5.0, 100.0)), s);
    assert_eq!(s.add_width(Size::new(5.0, 100.0)), Size::new(15.0, 20.0));
    assert_eq!(s.height_to_max(Size::new(0.0, 25.0)), Size::new(10.0, 25.0));
    assert_eq!(s.add_height(1.5), Size::new(10.0, 21.5));
}

#[test]
fn size_min_max_carry_nan() {
    let s = Size::new(10.0, 20.0);
    let w = s.width_to_max(f64::NAN);
    assert!(w.width.is_nan());
    assert_eq!(w.height, 20.0);
    assert!(s.height_to_max(Size::new(0.0, f64::NAN)).height.is_nan());

    let clipped = s.clip_to(Some(Size::new(f64::NAN, 5.0)));
    assert!(clipped.width.is_nan());
    assert_eq!(clipped.height, 5.0);
}

#[test]
fn insets_equality() {
    let i = Insets::new(1.0, 2.0, 3.0, 4.0);
    assert!(i.is_equal(Some(&Insets::new(1.0, 2.0, 3.0, 4.0))));
    assert!(!i.is_equal(Some(&Insets::new(1.0, 2.0, 3.0, 5.0))));
    assert!(!i.is_equal(None));
}

#[test]
fn rect_ops() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.scale(2.0), Rect::new(20.0, 40.0, 60.0, 80.0));
    assert_eq!(r.size(), Size::new(30.0, 40.0));
    assert!(r.is_equal(Some(&r)));
    assert!(!r.is_equal(None));

    let origin = Rect::new(5.0, 5.0, 100.0, 100.0);
    let local = r.relative_to(&origin);
    assert_eq!(local, Rect::new(5.0, 15.0, 30.0, 40.0));
    assert_eq!(local.rebase_to(&origin), r);
}

#[test]
fn constraints_validate_on_construction() {
    let err = Constraints::new(Size::new(10.0, 10.0), Some(Size::new(5.0, 5.0))).unwrap_err();
    assert!(matches!(err, GeometryError::MinimumExceedsPreferred { .. }));
    assert!(err.to_string().contains("greater than preferred"));

    // One axis is enough to fail.
    assert!(Constraints::new(Size::new(1.0, 10.0), Some(Size::new(5.0, 5.0))).is_err());

    let c = Constraints::new(Size::new(3.0, 4.0), None).unwrap();
    assert_eq!(c.preferred(), Size::new(3.0, 4.0));
    assert_eq!(c, Constraints::from_minimum(Size::new(3.0, 4.0)));

    let zero = Constraints::default();
    assert_eq!(zero.minimum(), Size::new(0.0, 0.0));
    assert_eq!(zero.preferred(), Size::new(0.0, 0.0));
}

#[test]
fn constraints_equality() {
    let a = Constraints::new(Size::new(1.0, 1.0), Some(Size::new(2.0, 2.0))).unwrap();
    let b = Constraints::new(Size::new(1.0, 1.0), Some(Size::new(2.0, 3.0))).unwrap();
    assert!(a.is_equal(Some(&a)));
    assert!(!a.is_equal(Some(&b)));
    assert!(!a.is_equal(None));
}

#[test]
fn constraints_combinators_apply_to_both_sizes() {
    let a = Constraints::new(Size::new(10.0, 10.0), Some(Size::new(50.0, 60.0))).unwrap();
    let b = Constraints::new(Size::new(20.0, 5.0), Some(Size::new(30.0, 70.0))).unwrap();

    let w = a.width_to_max(b);
    assert_eq!(w.minimum(), Size::new(20.0, 10.0));
    assert_eq!(w.preferred(), Size::new(50.0, 60.0));

    let added = a.add_width(b);
    assert_eq!(added.minimum(), Size::new(30.0, 10.0));
    assert_eq!(added.preferred(), Size::new(80.0, 60.0));

    let h = a.height_to_max(b);
    assert_eq!(h.minimum(), Size::new(10.0, 10.0));
    assert_eq!(h.preferred(), Size::new(50.0, 70.0));

    let stacked = a.add_height(b);
    assert_eq!(stacked.minimum(), Size::new(10.0, 15.0));
    assert_eq!(stacked.preferred(), Size::new(50.0, 130.0));

    let padded = a.add_width(4.0).add_height(2.0);
    assert_eq!(padded.minimum(), Size::new(14.0, 12.0));
    assert_eq!(padded.preferred(), Size::new(54.0, 62.0));

    let floor = a.width_to_max(40.0);
    assert_eq!(floor.minimum(), Size::new(40.0, 10.0));
    assert_eq!(floor.preferred(), Size::new(50.0, 60.0));
}
