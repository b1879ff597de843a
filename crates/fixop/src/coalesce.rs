//! Optional-coalescing combinators.
//!
//! Only the fix-right direction exists: the left operand of a coalescing
//! expression is always the optional under test, never a capturable
//! constant.

/// Creates a function that unwraps an optional, substituting `default` for
/// `None`.
///
/// The default is cloned only when it is actually needed.
///
/// # Example
///
/// ```
/// use fixop::unwrap_or;
///
/// let readings = vec![Some(1), Some(2), None, Some(4), None, Some(6)];
/// let filled: Vec<i32> = readings.into_iter().map(unwrap_or(100)).collect();
/// assert_eq!(filled, [1, 2, 100, 4, 100, 6]);
/// ```
#[inline]
pub fn unwrap_or<T: Clone>(default: T) -> impl Fn(Option<T>) -> T {
    move |opt| opt.unwrap_or_else(|| default.clone())
}

/// Creates a function that unwraps an optional, computing the default from
/// `default` on `None`.
///
/// `default` is never called when the input is `Some`.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use fixop::unwrap_or_else;
///
/// let calls = Cell::new(0);
/// let fill = unwrap_or_else(|| {
///     calls.set(calls.get() + 1);
///     100
/// });
///
/// assert_eq!(fill(Some(7)), 7);
/// assert_eq!(calls.get(), 0); // default untouched
/// assert_eq!(fill(None), 100);
/// assert_eq!(calls.get(), 1);
/// ```
#[inline]
pub fn unwrap_or_else<T, F>(default: F) -> impl Fn(Option<T>) -> T
where
    F: Fn() -> T,
{
    move |opt| opt.unwrap_or_else(&default)
}
