use log::warn;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::parse_js_number,
};

/// Shown to the user whenever a program reads input.
pub const INPUT_PROMPT: &str = "কাকা কিছু বলো (Input): ";

impl Interpreter<'_> {
    /// Prints one line with the value's printed form.
    ///
    /// # Errors
    /// `OutputLimitExceeded` when the line would exceed the configured
    /// maximum, or `TimeLimitExceeded`.
    pub(crate) fn print_value(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        self.check_time(line)?;

        if let Some(limit) = self.limits.max_output_lines
           && self.output_lines >= limit
        {
            return Err(RuntimeError::OutputLimitExceeded { limit, line });
        }

        self.console.print(&value.to_string());
        self.output_lines += 1;
        Ok(())
    }

    /// Reads one line from the console.
    ///
    /// A non-blank answer that parses as a number becomes that number, any
    /// other answer stays a string. Without an input source the result is
    /// null.
    pub(crate) fn eval_input(&mut self, line: usize) -> EvalResult<Value> {
        let Some(answer) = self.console.read_line(INPUT_PROMPT) else {
            warn!("no input available for line {line}; using null");
            return Ok(Value::Null);
        };

        if !answer.trim().is_empty()
           && let Some(number) = parse_js_number(&answer)
        {
            return Ok(Value::Number(number));
        }
        Ok(Value::from(answer))
    }
}
