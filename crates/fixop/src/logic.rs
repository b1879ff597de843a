//! Boolean combinators.
//!
//! The eager forms fix a `bool` value. The `_else` forms fix a lazily
//! evaluated expression instead and preserve `&&`/`||` short-circuiting:
//! the fixed expression runs only when the argument does not already decide
//! the result. Laziness only arises for the fix-right direction; a fix-left
//! operand is the short-circuit condition itself and the argument it might
//! skip has necessarily been evaluated by the caller already.

/// Creates a function returning `argument && rhs`.
///
/// # Example
///
/// ```
/// use fixop::and;
///
/// let gate = and(true);
/// assert!(gate(true));
/// assert!(!gate(false));
/// ```
#[inline]
pub fn and(rhs: bool) -> impl Fn(bool) -> bool {
    move |lhs| lhs && rhs
}

/// Creates a function returning `lhs && argument`.
#[inline]
pub fn and_flipped(lhs: bool) -> impl Fn(bool) -> bool {
    move |rhs| lhs && rhs
}

/// Creates a function returning `argument || rhs`.
#[inline]
pub fn or(rhs: bool) -> impl Fn(bool) -> bool {
    move |lhs| lhs || rhs
}

/// Creates a function returning `lhs || argument`.
#[inline]
pub fn or_flipped(lhs: bool) -> impl Fn(bool) -> bool {
    move |rhs| lhs || rhs
}

/// Creates a function returning `argument && rhs()`.
///
/// `rhs` is never called when the argument is `false`.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use fixop::and_else;
///
/// let calls = Cell::new(0);
/// let gate = and_else(|| {
///     calls.set(calls.get() + 1);
///     true
/// });
///
/// assert!(!gate(false));
/// assert_eq!(calls.get(), 0); // short-circuited
/// assert!(gate(true));
/// assert_eq!(calls.get(), 1);
/// ```
#[inline]
pub fn and_else<F>(rhs: F) -> impl Fn(bool) -> bool
where
    F: Fn() -> bool,
{
    move |lhs| lhs && rhs()
}

/// Creates a function returning `argument || rhs()`.
///
/// `rhs` is never called when the argument is `true`.
#[inline]
pub fn or_else<F>(rhs: F) -> impl Fn(bool) -> bool
where
    F: Fn() -> bool,
{
    move |lhs| lhs || rhs()
}
