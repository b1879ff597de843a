//! Predicate negation and the pattern adapter.

/// Wraps a predicate, producing its negation.
///
/// `not(p)(x) == !p(x)` for every `x`; nothing is allocated beyond the
/// wrapping closure.
///
/// # Example
///
/// ```
/// use fixop::{gt, not};
///
/// let at_most_five = not(gt(5));
/// assert!(at_most_five(&5));
/// assert!(!at_most_five(&6));
/// ```
#[inline]
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Applies a predicate as a pattern: `matches(p, v) == p(v)`.
///
/// This is the bridge that lets a unary predicate sit where a literal
/// comparison is expected — in a `match` guard:
///
/// # Example
///
/// ```
/// use fixop::{eq, ge, gt, matches, not};
///
/// fn signum(x: i32) -> i32 {
///     match x {
///         n if matches(not(ge(0)), &n) => -1,
///         n if matches(eq(0), &n) => 0,
///         n if matches(gt(0), &n) => 1,
///         _ => unreachable!(),
///     }
/// }
///
/// assert_eq!(signum(-5), -1);
/// assert_eq!(signum(0), 0);
/// assert_eq!(signum(3), 1);
/// ```
#[inline]
pub fn matches<T, P>(pattern: P, value: &T) -> bool
where
    T: ?Sized,
    P: FnOnce(&T) -> bool,
{
    pattern(value)
}
