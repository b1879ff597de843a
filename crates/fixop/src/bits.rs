//! Bit-manipulation combinators.
//!
//! Pure rebinding of operand position; operator semantics are untouched.
//! In particular, right shift stays arithmetic for signed operands and
//! logical for unsigned ones, exactly as the native `>>` behaves.

fixed_op_pair! {
    /// Creates a function that ANDs its argument with `rhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::bit_and;
    ///
    /// let low_nibble = bit_and(0x0Fu8);
    /// assert_eq!(low_nibble(0xA7), 0x07);
    /// ```
    bit_and,
    /// Creates a function that ANDs `lhs` with its argument.
    bit_and_flipped,
    BitAnd, &
}

fixed_op_pair! {
    /// Creates a function that ORs its argument with `rhs`.
    bit_or,
    /// Creates a function that ORs `lhs` with its argument.
    bit_or_flipped,
    BitOr, |
}

fixed_op_pair! {
    /// Creates a function that XORs its argument with `rhs`.
    bit_xor,
    /// Creates a function that XORs `lhs` with its argument.
    bit_xor_flipped,
    BitXor, ^
}

fixed_shift_pair! {
    /// Creates a function that shifts its argument left by `rhs` bits.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::shl;
    ///
    /// let powers: Vec<u32> = (0..5).map(|n| shl(n)(1u32)).collect();
    /// assert_eq!(powers, [1, 2, 4, 8, 16]);
    /// ```
    shl,
    /// Creates a function that shifts `lhs` left by its argument.
    shl_flipped,
    Shl, <<
}

fixed_shift_pair! {
    /// Creates a function that shifts its argument right by `rhs` bits.
    ///
    /// The shift is arithmetic for signed operands and logical for unsigned
    /// ones, as with the native operator.
    ///
    /// # Example
    ///
    /// ```
    /// use fixop::shr;
    ///
    /// assert_eq!(shr(1)(-8i32), -4); // arithmetic: sign bit preserved
    /// assert_eq!(shr(1u32)(0x80u8), 0x40); // logical: zero-filled
    /// ```
    shr,
    /// Creates a function that shifts `lhs` right by its argument.
    shr_flipped,
    Shr, >>
}
