//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slice lengths are
/// treated as public; only the contents are compared in constant time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
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

/// Constant-time selection of a single value
///
/// Returns `a` if `choice` is 0 and `b` if `choice` is 1.
pub fn ct_select<T>(a: &T, b: &T, choice: Choice) -> T
where
    T: ConditionallySelectable,
{
    T::conditional_select(a, b, choice)
}

/// Constant-time selection between two fixed-size byte buffers
///
/// Returns a copy of `a` if `choice` is 0 and of `b` if `choice` is 1. Every
/// byte of both inputs is read regardless of `choice`.
pub fn ct_select_bytes<const N: usize>(a: &[u8; N], b: &[u8; N], choice: Choice) -> [u8; N] {
    let mut out = [0u8; N];
    for ((o, x), y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = u8::conditional_select(x, y, choice);
    }
    out
}
