//! Equality combinators.
//!
//! All forms delegate to the operand type's own `PartialEq` impl; the
//! combinator never redefines what equality means.

fixed_predicate_pair! {
    /// Creates a predicate that is true when its argument equals `rhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::eq;
    ///
    /// let numbers = [1, 2, 3, 3, 3, 4, 5];
    /// let threes: Vec<i32> = numbers.iter().copied().filter(eq(3)).collect();
    /// assert_eq!(threes, [3, 3, 3]);
    /// ```
    eq,
    /// Creates a predicate that is true when `lhs` equals its argument.
    ///
    /// Equality is commutative, so this agrees with [`eq()`] for every
    /// lawful `PartialEq` impl; both directions exist so call sites can
    /// keep the operand on the side it occupies at the call site.
    eq_flipped,
    PartialEq, ==
}

fixed_predicate_pair! {
    /// Creates a predicate that is true when its argument differs from `rhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::ne;
    ///
    /// let numbers = [1, 2, 3, 3, 3, 4, 5];
    /// let rest: Vec<i32> = numbers.iter().copied().filter(ne(3)).collect();
    /// assert_eq!(rest, [1, 2, 4, 5]);
    /// ```
    ne,
    /// Creates a predicate that is true when `lhs` differs from its argument.
    ne_flipped,
    PartialEq, !=
}

fixed_predicate_pair! {
    /// Creates a predicate matching values equal to `rhs`, intended for use
    /// as a pattern.
    ///
    /// Semantically identical to [`eq()`]; this is the form meant to be fed
    /// to [`matches()`](crate::matches) in a `match` guard, mirroring how
    /// pattern-matching contexts test a candidate against a case value.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::{is, matches};
    ///
    /// let answer = 42;
    /// assert!(matches(is(42), &answer));
    /// ```
    is,
    /// Creates a pattern-form predicate with the left operand fixed.
    is_flipped,
    PartialEq, ==
}
