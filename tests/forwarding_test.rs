//! Operator forwarding: a wrapper supports exactly what its captured type
//! supports.

use core::cmp::Ordering;
use std::collections::HashSet;

use uni_capture::{Callable, Record, Scalar, capture};

#[derive(Record, Clone, Copy, Debug, PartialEq, PartialOrd)]
struct Meters {
    val: f64,
}

impl core::ops::Add for Meters {
    type Output = Meters;

    fn add(self, rhs: Meters) -> Meters {
        Meters { val: self.val + rhs.val }
    }
}

impl core::ops::Neg for Meters {
    type Output = Meters;

    fn neg(self) -> Meters {
        Meters { val: -self.val }
    }
}

#[derive(Scalar, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Level {
    Low,
    High,
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn test_wrapper_and_plain() {
    let w = capture(10i32);
    assert_eq!(w + 5i32, 15);
    assert_eq!(w - 3i32, 7);
    assert_eq!(w / 3i32, 3);
    assert_eq!(w & 6i32, 2);
    assert_eq!(w >> 1u32, 5);
}

#[test]
fn test_plain_and_wrapper() {
    let mut x = 4u64;
    let r = capture(&mut x);
    assert_eq!(100u64 - r, 96);
    assert_eq!(3u64 * capture(2u64), 6);
}

#[test]
fn test_wrapper_and_wrapper() {
    let mut x = 2i32;
    let a = capture(5i32);
    let b = capture(&mut x);
    assert_eq!(a * b, 10);
}

#[test]
fn test_record_arithmetic() {
    let a = capture(Meters { val: 1.5 });
    let b = Meters { val: 2.0 };
    assert_eq!(a + b, Meters { val: 3.5 });
    assert_eq!(-a, Meters { val: -1.5 });
}

#[test]
fn test_compound_assignment_on_aliases() {
    let mut x = 42i32;
    let mut w = capture(&mut x);
    w += 7i32;
    w *= 2i32;
    w -= capture(8i32);
    assert_eq!(x, 90);

    let mut items = [1u8, 2, 3];
    let mut a = capture(&mut items);
    a[2] ^= 0xFF;
    assert_eq!(items, [1, 2, 0xFC]);
}

#[test]
fn test_increment_through_alias() {
    let mut counter = 0usize;
    let mut w = capture(&mut counter);
    for _ in 0..3 {
        w += 1usize;
    }
    assert_eq!(counter, 3);
}

#[test]
fn test_every_binary_operator() {
    let w = capture(12u32);
    assert_eq!(w + 5u32, 17);
    assert_eq!(w - 2u32, 10);
    assert_eq!(w * 3u32, 36);
    assert_eq!(w / 5u32, 2);
    assert_eq!(w % 5u32, 2);
    assert_eq!(w & 10u32, 8);
    assert_eq!(w | 3u32, 15);
    assert_eq!(w ^ 5u32, 9);
    assert_eq!(w << 2u32, 48);
    assert_eq!(w >> 2u32, 3);

    let mut n = 12u32;
    let mut r = capture(&mut n);
    assert_eq!(r.reborrow() + capture(1u32), 13);
    assert_eq!(r.reborrow() % 7u32, 5);
    assert_eq!(r.reborrow() ^ 0xFu32, 3);
    assert_eq!(r.reborrow() << 1u32, 24);
}

#[test]
fn test_every_compound_assignment() {
    let mut x = 12u32;
    {
        let mut w = capture(&mut x);
        w += 4u32;
        w -= 1u32;
        w *= 2u32;
        w /= 3u32;
        w %= 7u32;
        w <<= 4u32;
        w >>= 1u32;
        w |= 1u32;
        w &= 0b1_0001u32;
        w ^= 0b0_0011u32;
    }
    assert_eq!(x, 18);
}

#[test]
fn test_every_plain_left_operator() {
    assert_eq!(20u32 + capture(4u32), 24);
    assert_eq!(20u32 - capture(4u32), 16);
    assert_eq!(20u32 * capture(4u32), 80);
    assert_eq!(20u32 / capture(4u32), 5);
    assert_eq!(20u32 % capture(3u32), 2);
    assert_eq!(12u32 & capture(10u32), 8);
    assert_eq!(12u32 | capture(3u32), 15);
    assert_eq!(12u32 ^ capture(5u32), 9);
    assert_eq!(1u32 << capture(3u32), 8);
    assert_eq!(16u32 >> capture(2u32), 4);

    let mut k = 4u32;
    assert_eq!(20u32 - capture(&mut k), 16);
}

// =============================================================================
// Comparison
// =============================================================================

#[test]
fn test_equality_and_ordering() {
    let low = capture(Level::Low);
    let high = capture(Level::High);
    assert!(low < high);
    assert!(low == Level::Low);
    assert_eq!(low.cmp(&high), Ordering::Less);
    assert_eq!(high.partial_cmp(&Level::Low), Some(Ordering::Greater));
}

#[test]
fn test_mixed_comparison() {
    let mut x = 7i32;
    let r = capture(&mut x);
    assert!(r == capture(7i32));
    assert!(r > 6i32);
    assert!(8i32 > r);
}

#[test]
fn test_record_comparison() {
    let a = capture(Meters { val: 1.0 });
    assert!(a < Meters { val: 2.0 });
    assert!(a != capture(Meters { val: 1.5 }));
}

#[test]
fn test_hash_matches_entity() {
    let mut set = HashSet::new();
    set.insert(capture(Level::High));
    set.insert(capture(Level::High));
    set.insert(capture(Level::Low));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_debug_shows_entity() {
    assert_eq!(format!("{:?}", capture(Level::High)), "High");
    assert_eq!(format!("{:?}", capture([1u8, 2])), "[1, 2]");
}

// =============================================================================
// Indexing, dereferencing, iteration
// =============================================================================

#[test]
fn test_indexing() {
    let w = capture([1i32, 8, 9, 20]);
    assert_eq!(w.len(), 4);
    assert_eq!(w[3], 20);
    assert_eq!(&w[1..3], &[8, 9]);

    let mut v = vec![1, 2, 3];
    let mut r = capture(&mut v);
    r[0] = 10;
    assert_eq!(v[0], 10);
}

#[test]
fn test_chained_deref() {
    let s = String::from("hello");
    let w = capture(&s);
    // ScalarValue<&String> -> &String -> String -> str
    assert_eq!(w.len(), 5);
    assert!(w.starts_with("he"));
}

#[test]
fn test_array_iteration() {
    let mut items = [1, 2, 3];
    let mut w = capture(&mut items);
    for item in &mut w {
        *item *= 10;
    }
    let sum: i32 = w.iter().sum();
    assert_eq!(sum, 60);

    let copy = capture([4, 5]);
    let collected: Vec<i32> = copy.into_iter().collect();
    assert_eq!(collected, [4, 5]);
}

#[test]
fn test_record_iteration() {
    let w = capture(vec![1, 2, 3]);
    let doubled: Vec<i32> = (&w).into_iter().map(|x| x * 2).collect();
    assert_eq!(doubled, [2, 4, 6]);
}

// =============================================================================
// Calling
// =============================================================================

fn square(x: i32) -> i32 {
    x * x
}

#[test]
fn test_call_through_wrapper() {
    let f = capture(square as fn(i32) -> i32);
    assert_eq!(f.invoke((7,)), 49);

    let add3: fn(i32, i32, i32) -> i32 = |a, b, c| a + b + c;
    assert_eq!(capture(add3).invoke((1, 2, 3)), 6);
}

#[test]
fn test_call_through_alias() {
    let mut f: fn() -> &'static str = || "first";
    {
        let mut w = capture(&mut f);
        assert_eq!(w.invoke(()), "first");
        w.set(|| "second");
    }
    assert_eq!(f(), "second");
}
