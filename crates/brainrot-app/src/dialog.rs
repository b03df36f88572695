//! User prompts: modal messages, notifications, text input and selections

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stderr, Write};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeLevel::Info => write!(f, "info"),
            NoticeLevel::Warning => write!(f, "warning"),
            NoticeLevel::Error => write!(f, "error"),
        }
    }
}

/// Everything the app asks of the user
///
/// Every prompt can be cancelled; cancellation is `None`.
pub trait Dialog {
    /// Modal message the user acknowledges
    fn ok(&mut self, heading: &str, message: &str);

    /// Transient message
    fn notification(&mut self, heading: &str, message: &str, level: NoticeLevel);

    /// Free text, pre-filled with `default`
    fn input(&mut self, heading: &str, default: &str) -> Option<String>;

    /// Pick one option, returning its index
    fn select(&mut self, heading: &str, options: &[String]) -> Option<usize>;

    /// Pick any number of options, returning their indices in display order
    fn multiselect(&mut self, heading: &str, options: &[String]) -> Option<Vec<usize>>;
}

/// Line-oriented dialog over a reader and a writer
///
/// Options are numbered from 1. An empty answer cancels a selection.
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
}

impl TerminalDialog<StdinLock<'static>, Stderr> {
    /// Prompt on stderr and read answers from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, mostly for inspecting what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(text).and_then(|_| self.output.flush()) {
            tracing::warn!(error = %e, "cannot write prompt");
        }
    }

    /// Next line without its line ending, `None` at end of input
    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "cannot read answer");
                None
            }
        }
    }

    fn list_options(&mut self, heading: &str, options: &[String]) {
        self.say(format_args!("{}\n", heading));
        for (i, option) in options.iter().enumerate() {
            self.say(format_args!("  {:>2}. {}\n", i + 1, option));
        }
    }
}

impl<R: BufRead, W: Write> Dialog for TerminalDialog<R, W> {
    fn ok(&mut self, heading: &str, message: &str) {
        self.say(format_args!("[{}] {}\n", heading, message));
    }

    fn notification(&mut self, heading: &str, message: &str, level: NoticeLevel) {
        self.say(format_args!("({}) {}: {}\n", level, heading, message));
    }

    fn input(&mut self, heading: &str, default: &str) -> Option<String> {
        if default.is_empty() {
            self.say(format_args!("{} ", heading));
        } else {
            self.say(format_args!("{} [{}] ", heading, default));
        }

        let answer = self.read_answer()?;
        let answer = answer.trim();
        if answer.is_empty() {
            return (!default.is_empty()).then(|| default.to_string());
        }
        Some(answer.to_string())
    }

    fn select(&mut self, heading: &str, options: &[String]) -> Option<usize> {
        self.list_options(heading, options);
        self.say(format_args!("> "));

        let answer = self.read_answer()?;
        parse_choice(answer.trim(), options.len())
    }

    fn multiselect(&mut self, heading: &str, options: &[String]) -> Option<Vec<usize>> {
        self.list_options(heading, options);
        self.say(format_args!("(numbers separated by spaces or commas) > "));

        let answer = self.read_answer()?;
        let chosen: Vec<usize> = answer
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter_map(|piece| parse_choice(piece, options.len()))
            .collect();
        (!chosen.is_empty()).then_some(chosen)
    }
}

/// 1-based answer to a 0-based index
fn parse_choice(answer: &str, len: usize) -> Option<usize> {
    let n: usize = answer.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}
