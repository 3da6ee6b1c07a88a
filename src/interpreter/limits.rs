use std::time::Duration;

/// Default ceiling on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Safeguards a host can place on a running program.
///
/// Exceeding any of them stops evaluation with a runtime error. The defaults
/// allow unlimited output and time, and [`DEFAULT_MAX_CALL_DEPTH`] nested
/// calls.
///
/// # Example
/// ```
/// use std::time::Duration;
///
/// use kaka::interpreter::limits::Limits;
///
/// let limits = Limits::default().with_max_output_lines(100)
///                               .with_time_limit(Duration::from_secs(2));
///
/// assert_eq!(limits.max_output_lines, Some(100));
/// assert_eq!(limits.max_call_depth, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of printed lines, if any.
    pub max_output_lines: Option<usize>,
    /// Maximum wall-clock running time, if any. Checked on every loop
    /// iteration, function call and print.
    pub time_limit:       Option<Duration>,
    /// Maximum depth of nested function calls.
    pub max_call_depth:   usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_output_lines: None,
               time_limit:       None,
               max_call_depth:   DEFAULT_MAX_CALL_DEPTH, }
    }
}

impl Limits {
    /// Caps the number of printed lines.
    #[must_use]
    pub const fn with_max_output_lines(mut self, lines: usize) -> Self {
        self.max_output_lines = Some(lines);
        self
    }

    /// Caps the running time.
    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Caps the depth of nested function calls.
    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }
}
