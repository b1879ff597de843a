//! Arithmetic combinators.
//!
//! Overflow, division by zero, and NaN follow the operand type's native
//! semantics unchanged: float division by zero yields the IEEE infinity or
//! NaN, integer division by zero panics, and integer division truncates
//! toward zero. The combinator layer adds no checking and no suppression.
//!
//! For the non-commutative operators the binding direction matters:
//! `sub(k)(x) == x - k` while `sub_flipped(k)(x) == k - x`.

fixed_op_pair! {
    /// Creates a function that adds `rhs` to its argument.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::add;
    ///
    /// let shifted: Vec<i32> = (1..=10).map(add(2)).collect();
    /// assert_eq!(shifted, (3..=12).collect::<Vec<i32>>());
    /// ```
    add,
    /// Creates a function that adds its argument to `lhs`.
    add_flipped,
    Add, +
}

fixed_op_pair! {
    /// Creates a function that subtracts `rhs` from its argument.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::sub;
    ///
    /// assert_eq!(sub(3)(10), 7);
    /// ```
    sub,
    /// Creates a function that subtracts its argument from `lhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::sub_flipped;
    ///
    /// let countdown: Vec<i32> = (1..=10).map(sub_flipped(11)).collect();
    /// assert_eq!(countdown, (1..=10).rev().collect::<Vec<i32>>());
    /// ```
    sub_flipped,
    Sub, -
}

fixed_op_pair! {
    /// Creates a function that multiplies its argument by `rhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::mul;
    ///
    /// let doubled: Vec<i32> = (1..=5).map(mul(2)).collect();
    /// assert_eq!(doubled, [2, 4, 6, 8, 10]);
    /// ```
    mul,
    /// Creates a function that multiplies `lhs` by its argument.
    mul_flipped,
    Mul, *
}

fixed_op_pair! {
    /// Creates a function that divides its argument by `rhs`.
    ///
    /// Division semantics are the operand type's own: floats divide exactly
    /// (with `/ 0.0` producing an infinity or NaN), integers truncate toward
    /// zero and panic on a zero divisor.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::div;
    ///
    /// let halves: Vec<i32> = (1..=5).map(div(2)).collect();
    /// assert_eq!(halves, [0, 1, 1, 2, 2]);
    /// ```
    div,
    /// Creates a function that divides `lhs` by its argument.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::div_flipped;
    ///
    /// let factors = [1, 2, 3, 4, 6, 12];
    /// let cofactors: Vec<i32> = factors.iter().copied().map(div_flipped(12)).collect();
    /// assert_eq!(cofactors, [12, 6, 4, 3, 2, 1]);
    /// ```
    div_flipped,
    Div, /
}

fixed_op_pair! {
    /// Creates a function that takes its argument modulo `rhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::rem;
    ///
    /// let parities: Vec<i32> = (1..=5).map(rem(2)).collect();
    /// assert_eq!(parities, [1, 0, 1, 0, 1]);
    /// ```
    rem,
    /// Creates a function that takes `lhs` modulo its argument.
    rem_flipped,
    Rem, %
}
