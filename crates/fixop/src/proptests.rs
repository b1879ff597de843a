//! Property tests for the binding-direction laws.
//!
//! Arithmetic operands are drawn from bounded ranges so the laws are tested
//! without tripping native debug-mode overflow; the wrapping family is
//! exercised over the full domain since wrapping never traps.

use proptest::prelude::*;

use crate::*;

proptest! {
    #[test]
    fn commutative_directions_agree(a in -10_000i32..10_000, b in -10_000i32..10_000) {
        prop_assert_eq!(eq(b)(&a), eq_flipped(b)(&a));
        prop_assert_eq!(ne(b)(&a), ne_flipped(b)(&a));
        prop_assert_eq!(is(b)(&a), is_flipped(b)(&a));
        prop_assert_eq!(add(b)(a), add_flipped(b)(a));
        prop_assert_eq!(mul(b)(a), mul_flipped(b)(a));
    }

    #[test]
    fn bitwise_directions_agree(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(bit_and(b)(a), bit_and_flipped(b)(a));
        prop_assert_eq!(bit_or(b)(a), bit_or_flipped(b)(a));
        prop_assert_eq!(bit_xor(b)(a), bit_xor_flipped(b)(a));
    }

    #[test]
    fn boolean_directions_agree(a in any::<bool>(), b in any::<bool>()) {
        prop_assert_eq!(and(b)(a), and_flipped(b)(a));
        prop_assert_eq!(or(b)(a), or_flipped(b)(a));
        prop_assert_eq!(and_else(move || b)(a), a && b);
        prop_assert_eq!(or_else(move || b)(a), a || b);
    }

    #[test]
    fn relational_direction_formulas(k in any::<i32>(), x in any::<i32>()) {
        prop_assert_eq!(lt(k)(&x), x < k);
        prop_assert_eq!(lt_flipped(k)(&x), k < x);
        prop_assert_eq!(gt(k)(&x), x > k);
        prop_assert_eq!(gt_flipped(k)(&x), k > x);
        prop_assert_eq!(le(k)(&x), x <= k);
        prop_assert_eq!(le_flipped(k)(&x), k <= x);
        prop_assert_eq!(ge(k)(&x), x >= k);
        prop_assert_eq!(ge_flipped(k)(&x), k >= x);
    }

    #[test]
    fn subtraction_direction_formulas(k in -10_000i64..10_000, x in -10_000i64..10_000) {
        prop_assert_eq!(sub(k)(x), x - k);
        prop_assert_eq!(sub_flipped(k)(x), k - x);
    }

    #[test]
    fn division_direction_formulas(k in 1i32..1_000, x in 1i32..10_000) {
        prop_assert_eq!(div(k)(x), x / k);
        prop_assert_eq!(div_flipped(x)(k), x / k);
        prop_assert_eq!(rem(k)(x), x % k);
        prop_assert_eq!(rem_flipped(x)(k), x % k);
    }

    #[test]
    fn shift_direction_formulas(k in 0u32..8, x in any::<u8>()) {
        prop_assert_eq!(shl(k)(x), x << k);
        prop_assert_eq!(shl_flipped(x)(k), x << k);
        prop_assert_eq!(shr(k)(x), x >> k);
        prop_assert_eq!(shr_flipped(x)(k), x >> k);
    }

    #[test]
    fn wrapping_agrees_with_native_over_full_domain(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(wrapping_add(b)(a), a.wrapping_add(b));
        prop_assert_eq!(wrapping_add_flipped(b)(a), b.wrapping_add(a));
        prop_assert_eq!(wrapping_sub(b)(a), a.wrapping_sub(b));
        prop_assert_eq!(wrapping_sub_flipped(b)(a), b.wrapping_sub(a));
        prop_assert_eq!(wrapping_mul(b)(a), a.wrapping_mul(b));
        prop_assert_eq!(wrapping_mul_flipped(b)(a), b.wrapping_mul(a));
    }

    #[test]
    fn wrapping_shifts_never_trap(amount in any::<u32>(), x in any::<u8>()) {
        prop_assert_eq!(wrapping_shl(amount)(x), x.wrapping_shl(amount));
        prop_assert_eq!(wrapping_shl_flipped(x)(amount), x.wrapping_shl(amount));
        prop_assert_eq!(wrapping_shr(amount)(x), x.wrapping_shr(amount));
        prop_assert_eq!(wrapping_shr_flipped(x)(amount), x.wrapping_shr(amount));
    }

    #[test]
    fn negation_law(k in any::<i32>(), x in any::<i32>()) {
        prop_assert_eq!(not(gt(k))(&x), !gt(k)(&x));
        prop_assert_eq!(not(le(k))(&x), !le(k)(&x));
    }

    #[test]
    fn pattern_adapter_is_transparent(k in any::<i32>(), x in any::<i32>()) {
        prop_assert_eq!(matches(le(k), &x), le(k)(&x));
        prop_assert_eq!(matches(ne(k), &x), ne(k)(&x));
    }

    #[test]
    fn coalescing_direction_formula(x in proptest::option::of(any::<i32>()), d in any::<i32>()) {
        prop_assert_eq!(unwrap_or(d)(x), x.unwrap_or(d));
        prop_assert_eq!(unwrap_or_else(move || d)(x), x.unwrap_or(d));
    }
}
