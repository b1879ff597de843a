//! Ordering combinators.
//!
//! Comparison delegates entirely to the operand type's `PartialOrd` impl;
//! no tie-breaking is added. The direction laws are:
//!
//! - `lt(k)(x) == (x < k)` and `lt_flipped(k)(x) == (k < x)`
//!
//! and symmetrically for `gt`, `le`, and `ge`.

fixed_predicate_pair! {
    /// Creates a predicate that is true when its argument is less than `rhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::lt;
    ///
    /// let small: Vec<i32> = (1..=10).filter(lt(4)).collect();
    /// assert_eq!(small, [1, 2, 3]);
    /// ```
    lt,
    /// Creates a predicate that is true when `lhs` is less than its argument.
    ///
    /// ```
    /// use fixop::lt_flipped;
    ///
    /// let above: Vec<i32> = (1..=10).filter(lt_flipped(8)).collect();
    /// assert_eq!(above, [9, 10]);
    /// ```
    lt_flipped,
    PartialOrd, <
}

fixed_predicate_pair! {
    /// Creates a predicate that is true when its argument is greater than `rhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::gt;
    ///
    /// let large: Vec<i32> = (1..=10).filter(gt(5)).collect();
    /// assert_eq!(large, [6, 7, 8, 9, 10]);
    /// ```
    gt,
    /// Creates a predicate that is true when `lhs` is greater than its argument.
    gt_flipped,
    PartialOrd, >
}

fixed_predicate_pair! {
    /// Creates a predicate that is true when its argument is at most `rhs`.
    le,
    /// Creates a predicate that is true when `lhs` is at most its argument.
    le_flipped,
    PartialOrd, <=
}

fixed_predicate_pair! {
    /// Creates a predicate that is true when its argument is at least `rhs`.
    ge,
    /// Creates a predicate that is true when `lhs` is at least its argument.
    ge_flipped,
    PartialOrd, >=
}
