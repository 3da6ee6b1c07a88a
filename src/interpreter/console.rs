use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// The host side of a running program: where printed lines go and where
/// input lines come from.
pub trait Console {
    /// Receives one rendered line per print statement.
    fn print(&mut self, line: &str);

    /// Shows `prompt` and reads one line of input, without its line ending.
    ///
    /// Returns `None` when input is unavailable, for example at the end of
    /// standard input or on a host without an input device.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// A console backed by the process's standard streams.
///
/// The prompt is written to standard output and flushed before reading.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        // A closed stdout only loses output; the program keeps running.
        let _ = writeln!(stdout, "{line}");
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{prompt}");
        let _ = stdout.flush();
        drop(stdout);

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(strip_line_ending(answer)),
        }
    }
}

/// A console that records printed lines and serves queued input.
///
/// Used by tests and by embedders that want the output as data.
///
/// # Example
/// ```
/// use kaka::interpreter::console::{BufferedConsole, Console};
///
/// let mut console = BufferedConsole::with_input(["৫"]);
/// console.print("hello");
///
/// assert_eq!(console.read_line("? "), Some("৫".to_string()));
/// assert_eq!(console.read_line("? "), None);
/// assert_eq!(console.output(), ["hello"]);
/// assert_eq!(console.prompts(), ["? ", "? "]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferedConsole {
    output:  Vec<String>,
    input:   VecDeque<String>,
    prompts: Vec<String>,
}

impl BufferedConsole {
    /// Creates a console with no queued input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that answers input requests with `lines`, in order.
    #[must_use]
    pub fn with_input<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input: lines.into_iter().map(Into::into).collect(),
               ..Self::default() }
    }

    /// The lines printed so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Every prompt shown so far, including unanswered ones.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Consumes the console and returns the printed lines.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }
}

impl Console for BufferedConsole {
    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front()
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
