//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};

/// Constant-time equality of two byte slices as a Choice
///
/// Slices of different lengths compare unequal; the length itself is not secret.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Branch-free selection: `if_true` when `condition` is set, `if_false` otherwise.
///
/// Both operands are always evaluated by the caller.
#[inline]
pub fn select<T>(condition: Choice, if_true: T, if_false: T) -> T
where
    T: ConditionallySelectable,
{
    T::conditional_select(&if_false, &if_true, condition)
}

/// Turn the low bit of `bit` into a Choice
#[inline]
pub fn choice_from_bit(bit: u64) -> Choice {
    Choice::from((bit & 1) as u8)
}

/// `a == b` as a Choice
#[inline]
pub fn ct_eq_u64(a: u64, b: u64) -> Choice {
    a.ct_eq(&b)
}

/// `a > b` as a Choice
#[inline]
pub fn ct_gt_u64(a: u64, b: u64) -> Choice {
    a.ct_gt(&b)
}

/// Branch-free minimum
#[inline]
pub fn ct_min_u64(a: u64, b: u64) -> u64 {
    select(ct_gt_u64(a, b), b, a)
}

/// Write `value` into `slots[index]` touching every slot.
///
/// An `index` past the end leaves the slice unchanged.
pub fn ct_store(slots: &mut [u64], index: u64, value: u64) {
    for (i, slot) in slots.iter_mut().enumerate() {
        slot.conditional_assign(&value, ct_eq_u64(i as u64, index));
    }
}

/// Read `slots[index]` touching every slot; zero past the end.
pub fn ct_load(slots: &[u64], index: u64) -> u64 {
    let mut value = 0u64;
    for (i, slot) in slots.iter().enumerate() {
        value.conditional_assign(slot, ct_eq_u64(i as u64, index));
    }
    value
}
