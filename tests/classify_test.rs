//! Shape classification: one strategy per static input shape.

use uni_capture::{
    ArrayRef, ArrayValue, Bool, Capture, CaptureOf, Captured, Record, RecordRef, RecordValue,
    Scalar, ScalarRef, ScalarValue, Shape, ShapeOf, ShapeTag, assert_same, capture, shape,
    shape_of,
};

#[derive(Record, Clone, Copy, Debug, PartialEq)]
struct Gauge {
    val: i32,
}

#[derive(Scalar, Clone, Copy, Debug, PartialEq)]
enum Mode {
    Idle,
    Busy,
}

fn tag<X: Capture>() -> ShapeTag {
    <ShapeOf<X> as Shape>::TAG
}

// =============================================================================
// Decision rules
// =============================================================================

#[test]
fn test_arrays() {
    assert_eq!(tag::<[i32; 4]>(), ShapeTag::ConstBoundedArray);
    assert_eq!(tag::<&'static [i32; 4]>(), ShapeTag::ConstBoundedArray);
    assert_eq!(tag::<&'static mut [i32; 4]>(), ShapeTag::BoundedArray);
}

#[test]
fn test_mutable_borrows() {
    assert_eq!(tag::<&'static mut i32>(), ShapeTag::ScalarReference);
    assert_eq!(tag::<&'static mut Mode>(), ShapeTag::ScalarReference);
    assert_eq!(tag::<&'static mut *const u8>(), ShapeTag::ScalarReference);
    assert_eq!(tag::<&'static mut Gauge>(), ShapeTag::RecordReference);
}

#[test]
fn test_values() {
    assert_eq!(tag::<Gauge>(), ShapeTag::RecordValue);
    assert_eq!(tag::<i32>(), ShapeTag::ScalarValue);
    assert_eq!(tag::<Mode>(), ShapeTag::ScalarValue);
    assert_eq!(tag::<*const u8>(), ShapeTag::ScalarValue);
    assert_eq!(tag::<fn(i32) -> i32>(), ShapeTag::ScalarValue);
}

#[test]
fn test_shared_borrows_are_pointers() {
    assert_eq!(tag::<&'static Gauge>(), ShapeTag::ScalarValue);
    assert_eq!(tag::<&'static i32>(), ShapeTag::ScalarValue);
    assert_eq!(tag::<&'static str>(), ShapeTag::ScalarValue);
    assert_eq!(tag::<&'static [u8]>(), ShapeTag::ScalarValue);
}

#[cfg(feature = "alloc")]
#[test]
fn test_owned_containers_are_records() {
    assert_eq!(tag::<String>(), ShapeTag::RecordValue);
    assert_eq!(tag::<Vec<u8>>(), ShapeTag::RecordValue);
    assert_eq!(tag::<&'static mut Vec<u8>>(), ShapeTag::RecordReference);
}

// =============================================================================
// Wrapper types
// =============================================================================

#[test]
fn test_wrapper_types() {
    assert_same::<CaptureOf<[u8; 3]>, ArrayValue<u8, 3>>();
    assert_same::<CaptureOf<&'static [u8; 3]>, ArrayValue<u8, 3>>();
    assert_same::<CaptureOf<&'static mut [u8; 3]>, ArrayRef<'static, u8, 3>>();
    assert_same::<CaptureOf<&'static mut f64>, ScalarRef<'static, f64>>();
    assert_same::<CaptureOf<&'static mut Gauge>, RecordRef<'static, Gauge>>();
    assert_same::<CaptureOf<Gauge>, RecordValue<Gauge>>();
    assert_same::<CaptureOf<&'static Gauge>, ScalarValue<&'static Gauge>>();
    assert_same::<CaptureOf<char>, ScalarValue<char>>();
}

#[test]
fn test_same_shape_same_strategy() {
    let a = capture([1u8, 2]);
    let b = capture([3u8, 4]);
    assert_eq!(a.shape(), b.shape());

    let (mut x, mut y) = (1i32, 2i32);
    assert_eq!(shape_of(&&mut x), shape_of(&&mut y));
    assert_eq!(shape_of(&Mode::Idle), shape_of(&Mode::Busy));
}

#[test]
fn test_wrapper_shape_matches_classifier() {
    let mut g = Gauge { val: 1 };
    assert_eq!(shape_of(&&mut g), ShapeTag::RecordReference);
    assert_eq!(capture(&mut g).shape(), ShapeTag::RecordReference);
    assert_eq!(capture(g).shape(), ShapeTag::RecordValue);
}

// =============================================================================
// Shape tags
// =============================================================================

#[test]
fn test_shape_flags() {
    assert!(<<shape::BoundedArray as Shape>::Alias as Bool>::VALUE);
    assert!(<<shape::BoundedArray as Shape>::Mutable as Bool>::VALUE);
    assert!(!<<shape::ConstBoundedArray as Shape>::Mutable as Bool>::VALUE);
    assert!(<<shape::ConstBoundedArray as Shape>::Array as Bool>::VALUE);
    assert!(!<<shape::RecordValue as Shape>::Array as Bool>::VALUE);
    assert_eq!(<shape::RecordValue as Shape>::NAME, "RecordValue");
}

#[test]
fn test_tags_partition() {
    let alias = ShapeTag::ALL.iter().filter(|t| t.is_alias()).count();
    let arrays = ShapeTag::ALL.iter().filter(|t| t.is_array()).count();
    assert_eq!(alias, 3);
    assert_eq!(arrays, 2);
}

// =============================================================================
// String literals
// =============================================================================

#[test]
fn test_string_literal_is_an_array() {
    let lit = capture!("foobar");
    let _: &ArrayValue<u8, 6> = &lit;
    assert_eq!(lit.shape(), ShapeTag::ConstBoundedArray);
    assert_eq!(lit.as_str(), Ok("foobar"));

    let bytes = capture!(b"ab");
    assert_eq!(bytes.len(), 2);
}

#[test]
fn test_str_value_is_a_pointer() {
    let s: &str = "foobar";
    let ptr = capture(s);
    assert_eq!(ptr.shape(), ShapeTag::ScalarValue);
    assert_eq!(*ptr, "foobar");
}

#[test]
fn test_macro_matches_function_for_non_literals() {
    let mut x = 3u16;
    let w = capture!(&mut x);
    assert_eq!(w.shape(), ShapeTag::ScalarReference);
    assert_eq!(capture!((5u8)).shape(), ShapeTag::ScalarValue);
}
