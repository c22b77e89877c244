use crate::{error::EvalResult, value::core::Value};

/// Represents a binary set operator as written in a script.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Union (`+`)
    Add,
    /// Relative complement (`-`)
    Sub,
    /// Intersection (`*`)
    Mul,
    /// Relative complement (`/`), the same operation as `-`
    Div,
}

impl BinaryOperator {
    /// Name of the set operation the operator stands for.
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Add => "union",
            Self::Sub | Self::Div => "complement",
            Self::Mul => "intersection",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl Value {
    /// Evaluates a set operator with `self` on the left and `rhs` on the
    /// right.
    ///
    /// Supported operators map to set operations:
    /// - `Add` produces the union.
    /// - `Sub` and `Div` produce the relative complement.
    /// - `Mul` produces the intersection.
    ///
    /// Both operands must be sets. Anything else is rejected without
    /// coercion.
    ///
    /// # Returns
    /// - `Ok(Value::Set)`: The newly built result set.
    /// - `Err(RuntimeError::InvalidArgumentType)`: If an operand is not a set.
    ///
    /// # Example
    /// ```
    /// use semset::value::{binary::BinaryOperator, core::Value};
    ///
    /// let a = Value::set_of([Value::from(1), Value::from(2)]);
    /// let b = Value::set_of([Value::from(2), Value::from(3)]);
    ///
    /// let union = a.eval_set_op(BinaryOperator::Add, &b).unwrap();
    /// assert_eq!(union,
    ///            Value::set_of([Value::from(1), Value::from(2), Value::from(3)]));
    ///
    /// assert!(a.eval_set_op(BinaryOperator::Sub, &Value::from(2)).is_err());
    /// ```
    pub fn eval_set_op(&self, op: BinaryOperator, rhs: &Self) -> EvalResult<Self> {
        let left = self.as_set(op.operation())?;
        let right = rhs.as_set(op.operation())?;

        let result = match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        };
        Ok(result.into())
    }
}
