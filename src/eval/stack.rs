use super::EvalError;

/// Operand stack owned by a single evaluation
#[derive(Debug, Default)]
pub(crate) struct ValueStack {
    values: Vec<f64>,
}

impl ValueStack {
    pub(crate) fn new() -> Self {
        ValueStack { values: Vec::new() }
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pop the operands of a binary operator as `(left, right)`.
    /// The right operand was pushed last, so it comes off first.
    pub(crate) fn pop_operands(&mut self) -> Result<(f64, f64), EvalError> {
        let len = self.values.len();
        if len < 2 {
            return Err(EvalError::InvalidExpression);
        }
        let b = self.values[len - 1];
        let a = self.values[len - 2];
        self.values.truncate(len - 2);
        Ok((a, b))
    }

    /// The single remaining value, or an error if there are zero or several
    pub(crate) fn into_result(self) -> Result<f64, EvalError> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::InvalidExpression),
        }
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.values.len()
    }
}
