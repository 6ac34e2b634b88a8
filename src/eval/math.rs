use super::EvalError;
use crate::lexer::Operator;

impl Operator {
    /// Apply the operator to `a op b`.
    /// Division checks for an exactly-zero divisor first (`-0.0` included).
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}
