//! Where `swagdef check` writes its summary.
//!
//! Generated TypeScript goes to stdout untouched; reports share stdout but
//! send warnings to stderr, next to the tracing output.

/// Sink for report lines.
///
/// A report calls these in reading order; the sink owns the formatting.
pub trait Output {
    /// Heading of a group of counts, e.g. `4 definitions`.
    fn section(&mut self, name: &str);

    /// One count under the current heading, e.g. `structured: 3`.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// A problem in the schema that generation works around.
    fn warning(&mut self, msg: &str);

    /// A line printed as given.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A summary that knows how to lay itself out on an [`Output`].
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the terminal: lines on stdout, warnings on stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
