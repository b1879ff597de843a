//! Declarative macros for reducing combinator boilerplate.
//!
//! Every operator family repeats the same two-function shape: a fix-right
//! constructor capturing the right operand and a fix-left constructor
//! capturing the left one. These macros generate the pair from a trait
//! bound and an operator token; doc comments (and their doctests) are
//! supplied at the invocation site so each public item keeps its own.

/// Generates a fix-right/fix-left pair of comparison combinators.
///
/// The produced functions return `impl Fn(&T) -> bool` and delegate to the
/// operand type's own `core::cmp` impl.
///
/// # Usage
/// ```ignore
/// fixed_predicate_pair!(eq, eq_flipped, PartialEq, ==);
/// fixed_predicate_pair!(lt, lt_flipped, PartialOrd, <);
/// ```
macro_rules! fixed_predicate_pair {
    (
        $(#[$right_doc:meta])*
        $right:ident,
        $(#[$left_doc:meta])*
        $left:ident,
        $bound:ident,
        $op:tt
    ) => {
        $(#[$right_doc])*
        #[inline]
        pub fn $right<T>(rhs: T) -> impl Fn(&T) -> bool
        where
            T: ::core::cmp::$bound,
        {
            move |lhs| *lhs $op rhs
        }

        $(#[$left_doc])*
        #[inline]
        pub fn $left<T>(lhs: T) -> impl Fn(&T) -> bool
        where
            T: ::core::cmp::$bound,
        {
            move |rhs| lhs $op *rhs
        }
    };
}

/// Generates a fix-right/fix-left pair of transform combinators for a
/// `core::ops` operator with matching operand and output types.
///
/// # Usage
/// ```ignore
/// fixed_op_pair!(add, add_flipped, Add, +);
/// fixed_op_pair!(bit_xor, bit_xor_flipped, BitXor, ^);
/// ```
macro_rules! fixed_op_pair {
    (
        $(#[$right_doc:meta])*
        $right:ident,
        $(#[$left_doc:meta])*
        $left:ident,
        $bound:ident,
        $op:tt
    ) => {
        $(#[$right_doc])*
        #[inline]
        pub fn $right<T>(rhs: T) -> impl Fn(T) -> T
        where
            T: ::core::ops::$bound<Output = T> + Copy,
        {
            move |lhs| lhs $op rhs
        }

        $(#[$left_doc])*
        #[inline]
        pub fn $left<T>(lhs: T) -> impl Fn(T) -> T
        where
            T: ::core::ops::$bound<Output = T> + Copy,
        {
            move |rhs| lhs $op rhs
        }
    };
}

/// Generates a fix-right/fix-left pair of shift combinators.
///
/// Shifts are the one `core::ops` family where the two operand types may
/// differ, so the pair is generic over the shift-amount type as well.
macro_rules! fixed_shift_pair {
    (
        $(#[$right_doc:meta])*
        $right:ident,
        $(#[$left_doc:meta])*
        $left:ident,
        $bound:ident,
        $op:tt
    ) => {
        $(#[$right_doc])*
        #[inline]
        pub fn $right<T, U>(rhs: U) -> impl Fn(T) -> T
        where
            T: ::core::ops::$bound<U, Output = T>,
            U: Copy,
        {
            move |lhs| lhs $op rhs
        }

        $(#[$left_doc])*
        #[inline]
        pub fn $left<T, U>(lhs: T) -> impl Fn(U) -> T
        where
            T: ::core::ops::$bound<U, Output = T> + Copy,
        {
            move |rhs| lhs $op rhs
        }
    };
}

/// Generates a fix-right/fix-left pair of wrapping-arithmetic combinators
/// from a `num_traits` wrapping trait and its method.
///
/// # Usage
/// ```ignore
/// fixed_wrapping_pair!(wrapping_add, wrapping_add_flipped, WrappingAdd, wrapping_add);
/// ```
macro_rules! fixed_wrapping_pair {
    (
        $(#[$right_doc:meta])*
        $right:ident,
        $(#[$left_doc:meta])*
        $left:ident,
        $bound:ident,
        $method:ident
    ) => {
        $(#[$right_doc])*
        #[inline]
        pub fn $right<T>(rhs: T) -> impl Fn(T) -> T
        where
            T: ::num_traits::$bound,
        {
            move |lhs| lhs.$method(&rhs)
        }

        $(#[$left_doc])*
        #[inline]
        pub fn $left<T>(lhs: T) -> impl Fn(T) -> T
        where
            T: ::num_traits::$bound,
        {
            move |rhs| lhs.$method(&rhs)
        }
    };
}
