//! `#[derive(Record)]`, `#[derive(Scalar)]` and their hooks.

use std::cell::Cell;

use uni_capture::{Captured, Record, Scalar, Simplified, assert_same, capture, swap, swap_value};

// =============================================================================
// Generic records
// =============================================================================

#[derive(Record, Clone, Debug, PartialEq)]
struct Pair<A, B> {
    first: A,
    second: B,
}

#[derive(Record, Clone, Copy, Debug, PartialEq)]
struct Wrapper<T: Copy>(T)
where
    T: Default;

#[test]
fn test_generic_record() {
    let p = Pair { first: 1u8, second: "two" };
    let w = capture(p.clone());
    assert_eq!(w.second, "two");
    assert_eq!(w.readback(), p);
}

#[test]
fn test_where_clause_record() {
    let w = capture(Wrapper(5u32));
    assert_eq!((*w).0, 5);
    assert_same::<Simplified<Wrapper<u32>>, Wrapper<u32>>();
}

// =============================================================================
// Scalar newtypes and enums
// =============================================================================

#[derive(Scalar, Clone, Copy, Debug, PartialEq, PartialOrd)]
struct Celsius(f32);

impl core::ops::Sub for Celsius {
    type Output = Celsius;

    fn sub(self, rhs: Celsius) -> Celsius {
        Celsius(self.0 - rhs.0)
    }
}

impl core::ops::SubAssign for Celsius {
    fn sub_assign(&mut self, rhs: Celsius) {
        self.0 -= rhs.0;
    }
}

#[test]
fn test_scalar_newtype() {
    let mut t = Celsius(21.5);
    {
        let mut w = capture(&mut t);
        w -= Celsius(1.5);
    }
    assert_eq!(t, Celsius(20.0));
    assert_eq!(capture(t) - Celsius(10.0), Celsius(10.0));
}

// =============================================================================
// Swap hook
// =============================================================================

thread_local! {
    static SWAPS: Cell<usize> = const { Cell::new(0) };
}

fn counted_swap(a: &mut Slot, b: &mut Slot) {
    SWAPS.with(|n| n.set(n.get() + 1));
    core::mem::swap(&mut a.value, &mut b.value);
}

#[derive(Record, Debug, PartialEq)]
#[capture(swap = counted_swap)]
struct Slot {
    value: i32,
    label: &'static str,
}

#[test]
fn test_swap_hook_is_used() {
    SWAPS.with(|n| n.set(0));

    let mut a = Slot { value: 1, label: "a" };
    let mut b = Slot { value: 2, label: "b" };
    swap(&mut capture(&mut a), &mut capture(&mut b));

    // Only the values moved; labels stayed with their slots.
    assert_eq!(a, Slot { value: 2, label: "a" });
    assert_eq!(b, Slot { value: 1, label: "b" });

    let mut plain = Slot { value: 9, label: "p" };
    swap_value(&mut capture(&mut a), &mut plain);
    assert_eq!(a.value, 9);
    assert_eq!(plain.value, 2);

    assert_eq!(SWAPS.with(Cell::get), 2);
}

// =============================================================================
// Address hook
// =============================================================================

#[derive(Record)]
#[capture(address = payload_address)]
struct Framed {
    header: u32,
    payload: [u8; 4],
}

fn payload_address(f: &Framed) -> *const Framed {
    f.payload.as_ptr().cast()
}

#[test]
fn test_address_hook_wins_for_values() {
    let framed = Framed { header: 0xAB, payload: [1, 2, 3, 4] };
    let w = capture(framed);
    assert_eq!(w.header, 0xAB);
    assert_eq!(w.address_of(), w.payload.as_ptr().cast::<Framed>());
}

#[test]
fn test_address_hook_ignored_for_aliases() {
    let mut framed = Framed { header: 0, payload: [0; 4] };
    let expected: *const Framed = &framed;
    let w = capture(&mut framed);
    assert_eq!(w.address_of(), expected);
}

#[derive(Scalar, Clone, Copy)]
#[capture(address = low_half_address)]
struct Halves(u16, u16);

fn low_half_address(h: &Halves) -> *const Halves {
    (&h.1 as *const u16).cast()
}

#[test]
fn test_address_hook_wins_for_scalar_values() {
    let w = capture(Halves(7, 9));
    assert_eq!(w.address_of(), (&w.1 as *const u16).cast::<Halves>());

    let mut h = Halves(1, 2);
    let expected: *const Halves = &h;
    assert_eq!(capture(&mut h).address_of(), expected);
}
