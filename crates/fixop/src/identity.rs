//! Reference-identity combinators.
//!
//! These compare addresses with `core::ptr::eq`, never structural equality:
//! two distinct objects with equal contents are not identical, and a type
//! whose `PartialEq` claims equality for distinct objects is still told
//! apart here.

use core::ptr;

/// Creates a predicate that is true when its argument is the same object
/// as `rhs`.
///
/// # Example
///
/// ```
/// use fixop::identical;
///
/// let a = String::from("same");
/// let b = String::from("same");
///
/// let is_a = identical(&a);
/// assert!(is_a(&a));
/// assert!(!is_a(&b)); // equal contents, distinct objects
/// ```
#[inline]
pub fn identical<'a, T: ?Sized>(rhs: &'a T) -> impl Fn(&T) -> bool + 'a {
    move |lhs| ptr::eq(lhs, rhs)
}

/// Creates a predicate that is true when `lhs` is the same object as the
/// argument.
#[inline]
pub fn identical_flipped<'a, T: ?Sized>(lhs: &'a T) -> impl Fn(&T) -> bool + 'a {
    move |rhs| ptr::eq(lhs, rhs)
}

/// Creates a predicate that is true when its argument is a different object
/// than `rhs`.
///
/// # Example
///
/// ```
/// use fixop::not_identical;
///
/// let a = 1;
/// let b = 1;
/// assert!(not_identical(&a)(&b));
/// assert!(!not_identical(&a)(&a));
/// ```
#[inline]
pub fn not_identical<'a, T: ?Sized>(rhs: &'a T) -> impl Fn(&T) -> bool + 'a {
    move |lhs| !ptr::eq(lhs, rhs)
}

/// Creates a predicate that is true when `lhs` is a different object than
/// the argument.
#[inline]
pub fn not_identical_flipped<'a, T: ?Sized>(lhs: &'a T) -> impl Fn(&T) -> bool + 'a {
    move |rhs| !ptr::eq(lhs, rhs)
}
