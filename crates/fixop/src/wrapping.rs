//! Wrapping (modular) arithmetic combinators.
//!
//! Semantically identical to the plain arithmetic combinators except that
//! overflow wraps silently instead of panicking in debug builds. Bounds come
//! from the `num_traits` wrapping traits, which are implemented for every
//! fixed-width integer.

use num_traits::{WrappingAdd, WrappingMul, WrappingShl, WrappingShr, WrappingSub};

fixed_wrapping_pair! {
    /// Creates a function that adds `rhs` to its argument, wrapping on
    /// overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::wrapping_add;
    ///
    /// let bump = wrapping_add(1u8);
    /// assert_eq!(bump(41), 42);
    /// assert_eq!(bump(u8::MAX), 0);
    /// ```
    wrapping_add,
    /// Creates a function that adds its argument to `lhs`, wrapping on
    /// overflow.
    wrapping_add_flipped,
    WrappingAdd, wrapping_add
}

fixed_wrapping_pair! {
    /// Creates a function that subtracts `rhs` from its argument, wrapping
    /// on underflow.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::wrapping_sub;
    ///
    /// assert_eq!(wrapping_sub(1u8)(0), u8::MAX);
    /// ```
    wrapping_sub,
    /// Creates a function that subtracts its argument from `lhs`, wrapping
    /// on underflow.
    wrapping_sub_flipped,
    WrappingSub, wrapping_sub
}

fixed_wrapping_pair! {
    /// Creates a function that multiplies its argument by `rhs`, wrapping
    /// on overflow.
    wrapping_mul,
    /// Creates a function that multiplies `lhs` by its argument, wrapping
    /// on overflow.
    wrapping_mul_flipped,
    WrappingMul, wrapping_mul
}

// The wrapping shifts take a `u32` amount (the native signature), so they
// cannot share the macro above: the two operand types differ.

/// Creates a function that shifts its argument left by `rhs` bits, wrapping
/// the shift amount modulo the bit width.
///
/// # Example
///
/// ```
/// use fixop::wrapping_shl;
///
/// assert_eq!(wrapping_shl(1)(0x80u8), 0);
/// assert_eq!(wrapping_shl(8)(1u8), 1); // amount wraps to 0
/// ```
#[inline]
pub fn wrapping_shl<T: WrappingShl>(rhs: u32) -> impl Fn(T) -> T {
    move |lhs| lhs.wrapping_shl(rhs)
}

/// Creates a function that shifts `lhs` left by its argument, wrapping the
/// shift amount modulo the bit width.
#[inline]
pub fn wrapping_shl_flipped<T: WrappingShl>(lhs: T) -> impl Fn(u32) -> T {
    move |rhs| lhs.wrapping_shl(rhs)
}

/// Creates a function that shifts its argument right by `rhs` bits, wrapping
/// the shift amount modulo the bit width.
#[inline]
pub fn wrapping_shr<T: WrappingShr>(rhs: u32) -> impl Fn(T) -> T {
    move |lhs| lhs.wrapping_shr(rhs)
}

/// Creates a function that shifts `lhs` right by its argument, wrapping the
/// shift amount modulo the bit width.
#[inline]
pub fn wrapping_shr_flipped<T: WrappingShr>(lhs: T) -> impl Fn(u32) -> T {
    move |rhs| lhs.wrapping_shr(rhs)
}
