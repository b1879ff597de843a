//! Partial application of binary operators.
//!
//! Fixing one operand of a binary operator yields a unary function that can
//! be handed straight to `filter`, `map`, `find`, or a `match` guard:
//!
//! ```
//! use fixop::{add, eq, gt};
//!
//! let numbers = [1, 2, 3, 3, 3, 4, 5];
//! let threes: Vec<i32> = numbers.iter().copied().filter(eq(3)).collect();
//! assert_eq!(threes, [3, 3, 3]);
//!
//! let large: Vec<i32> = (1..=10).filter(gt(5)).collect();
//! assert_eq!(large, [6, 7, 8, 9, 10]);
//!
//! let shifted: Vec<i32> = (1..=10).map(add(2)).collect();
//! assert_eq!(shifted, (3..=12).collect::<Vec<i32>>());
//! ```
//!
//! # Binding directions
//!
//! Every operator comes in two forms: the plain name fixes the *right*
//! operand (`sub(k)(x) == x - k`) and the `_flipped` variant fixes the
//! *left* one (`sub_flipped(k)(x) == k - x`). For commutative operators the
//! two agree; for subtraction, division, comparisons, and shifts they do
//! not, so pick the side the constant occupies in the expression you are
//! replacing. The one exception is optional coalescing, which only has a
//! fix-right form — its left operand is always the optional under test.
//!
//! # Capability bounds
//!
//! Each operator family is bounded by the operand capability it needs
//! (`PartialEq`, `PartialOrd`, the `core::ops` arithmetic and bitwise
//! traits, the `num_traits` wrapping traits), so applying a combinator to a
//! type without the operation is a compile error, never a runtime check.
//!
//! # Architecture
//!
//! Every constructor returns an unboxed `impl Fn` closure capturing the
//! fixed operand by value - no `Box<dyn Fn>`, no allocation, no state. The
//! produced closures are `Send`/`Sync` whenever the captured operand is.

#[macro_use]
mod macros;

mod arith;
mod bits;
mod coalesce;
mod eq;
mod identity;
mod logic;
mod ord;
mod pattern;
mod wrapping;

#[cfg(test)]
mod proptests;

pub use arith::{
    add, add_flipped, div, div_flipped, mul, mul_flipped, rem, rem_flipped, sub, sub_flipped,
};
pub use bits::{
    bit_and, bit_and_flipped, bit_or, bit_or_flipped, bit_xor, bit_xor_flipped, shl, shl_flipped,
    shr, shr_flipped,
};
pub use coalesce::{unwrap_or, unwrap_or_else};
pub use eq::{eq, eq_flipped, is, is_flipped, ne, ne_flipped};
pub use identity::{identical, identical_flipped, not_identical, not_identical_flipped};
pub use logic::{and, and_else, and_flipped, or, or_else, or_flipped};
pub use ord::{ge, ge_flipped, gt, gt_flipped, le, le_flipped, lt, lt_flipped};
pub use pattern::{matches, not};
pub use wrapping::{
    wrapping_add, wrapping_add_flipped, wrapping_mul, wrapping_mul_flipped, wrapping_shl,
    wrapping_shl_flipped, wrapping_shr, wrapping_shr_flipped, wrapping_sub, wrapping_sub_flipped,
};
