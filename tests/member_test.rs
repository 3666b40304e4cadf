//! Member pointers: every combination of plain and wrapped receiver and
//! member.

use uni_capture::{
    Callable, Captured, Field, MemberReceiver, Method, Record, apply_member, capture, member, method,
};

#[derive(Record, Clone, Copy, Debug, PartialEq)]
struct Account {
    id: u32,
    balance: i64,
}

impl Account {
    fn doubled(&self) -> i64 {
        self.balance * 2
    }

    fn after(&self, fee: i64, count: i64) -> i64 {
        self.balance - fee * count
    }
}

#[derive(Record, Clone, Copy)]
struct Pair(u8, u8);

// =============================================================================
// Four combinations
// =============================================================================

#[test]
fn test_plain_receiver_plain_member() {
    let acct = Account { id: 1, balance: 50 };
    assert_eq!(*apply_member(&acct, member!(Account, balance)).invoke(()), 50);
    assert_eq!(apply_member(&acct, method!(Account, doubled)).invoke(()), 100);
}

#[test]
fn test_plain_receiver_wrapped_member() {
    let acct = Account { id: 2, balance: 30 };
    let field = capture(member!(Account, id));
    assert_eq!(*apply_member(&acct, &field).invoke(()), 2);

    let mut m = method!(Account, after);
    let aliased = capture(&mut m);
    assert_eq!(apply_member(&acct, aliased).invoke((5, 2)), 20);
}

#[test]
fn test_wrapped_receiver_plain_member() {
    let mut acct = Account { id: 3, balance: 10 };
    {
        let w = capture(&mut acct);
        assert_eq!(*w.apply_member(member!(Account, balance)).invoke(()), 10);
    }

    let copy = capture(acct);
    assert_eq!(copy.apply_member(method!(Account, doubled)).invoke(()), 20);
}

#[test]
fn test_wrapped_receiver_wrapped_member() {
    let mut acct = Account { id: 4, balance: 7 };
    let field = capture(member!(Account, balance));
    let w = capture(&mut acct);
    let bound = w.apply_member(field);
    assert_eq!(*bound.invoke(()), 7);
    assert_eq!(bound.receiver().id, 4);
}

// =============================================================================
// Field and method details
// =============================================================================

#[test]
fn test_tuple_fields() {
    let p = Pair(3, 9);
    let second = member!(Pair, 1);
    assert_eq!(*second.read(&p), 9);
    assert_eq!(*capture(p).apply_member(second).invoke(()), 9);
}

#[test]
fn test_member_is_a_scalar() {
    let f: Field<Account, u32> = member!(Account, id);
    let copy = f;
    assert_eq!(capture(copy).shape(), uni_capture::ShapeTag::ScalarValue);
}

#[test]
fn test_bound_member_is_callable() {
    let acct = Account { id: 5, balance: 100 };
    let bound = apply_member(&acct, Method::<Account, _>::new(Account::after));
    assert_eq!(Callable::invoke(&bound, (10, 3)), 70);
}
