use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::symbol_table::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: every variable declared so far.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every statement, so
/// declarations made by one statement are visible to the next.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Variable bindings, including any predefined constants.
    pub symbols: SymbolTable,
}

impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub const fn new() -> Self {
        Self { symbols: SymbolTable::new() }
    }

    /// Creates a context whose symbol table already holds `pi` and `e`.
    #[must_use]
    pub fn with_constants() -> Self {
        Self { symbols: SymbolTable::with_constants() }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left before right, and the first error stops evaluation.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     ast::{Expr, UnaryOperator},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let context = Context::with_constants();
    /// let expr = Expr::UnaryOp { op:   UnaryOperator::Negate,
    ///                            expr: Box::new(Expr::Variable { name: "pi".to_string(),
    ///                                                            line: 1, }),
    ///                            line: 1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), -3.141_592_653_5);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.symbols.get(name, *line),
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, self.eval(expr)?)),
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Expression statements yield their value. Declarations evaluate the
    /// right-hand side, bind it to the new name and yield the bound value; if
    /// the right-hand side fails nothing is bound.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The value the session should print.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::Declaration { name, value, line } => {
                let value = self.eval(value)?;
                self.symbols.define(name, value, *line)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::{
        ast::{BinaryOperator, Expr, Statement},
        error::RuntimeError,
    };

    fn literal(value: f64) -> Expr {
        Expr::Literal { value, line: 1 }
    }

    fn declaration(name: &str, value: Expr) -> Statement {
        Statement::Declaration { name: name.to_string(),
                                 value,
                                 line: 1 }
    }

    #[test]
    fn declarations_are_visible_later() {
        let mut context = Context::new();
        assert_eq!(context.eval_statement(&declaration("x", literal(10.0))), Ok(10.0));

        let doubled = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".into(),
                                                                        line: 2, }),
                                       op:    BinaryOperator::Mul,
                                       right: Box::new(literal(2.0)),
                                       line:  2, };
        assert_eq!(context.eval(&doubled), Ok(20.0));
    }

    #[test]
    fn failed_right_hand_side_binds_nothing() {
        let mut context = Context::new();
        let broken = Expr::BinaryOp { left:  Box::new(literal(1.0)),
                                      op:    BinaryOperator::Div,
                                      right: Box::new(literal(0.0)),
                                      line:  1, };
        assert_eq!(context.eval_statement(&declaration("x", broken)),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
        assert!(!context.symbols.is_declared("x"));
    }

    #[test]
    fn redeclaration_keeps_first_value() {
        let mut context = Context::new();
        context.eval_statement(&declaration("x", literal(1.0))).unwrap();
        assert_eq!(context.eval_statement(&declaration("x", literal(2.0))),
                   Err(RuntimeError::DuplicateDeclaration { name: "x".into(),
                                                            line: 1, }));
        assert_eq!(context.symbols.get("x", 1), Ok(1.0));
    }

    #[test]
    fn constants_only_when_requested() {
        let pi = Expr::Variable { name: "pi".into(),
                                  line: 1, };
        assert!(Context::new().eval(&pi).is_err());
        assert_eq!(Context::with_constants().eval(&pi), Ok(3.141_592_653_5));
    }
}
