use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Arithmetic follows IEEE-754 doubles, except that `/` and `%` reject a
    /// right operand of exactly zero instead of producing an infinity or NaN.
    /// `%` is the floating-point remainder and takes the sign of the left
    /// operand.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mod, 7.5, 2.0, 1).unwrap();
    /// assert_eq!(result, 1.5);
    ///
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       line: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div | Mod if right == 0.0 => Err(RuntimeError::DivisionByZero { line }),
            Div => Ok(left / right),
            Mod => Ok(left % right),
        }
    }
}
