/// One of the four supported binary operators.
///
/// All operators are left-associative. `*` and `/` bind tighter than `+` and
/// `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl Operator {
    /// Returns the precedence tier of the operator.
    ///
    /// A pending operator is applied before a new one whenever its tier is
    /// greater than or equal to the new operator's tier.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::operator::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
