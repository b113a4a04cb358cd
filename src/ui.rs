//! Leveled console output for installation feedback
//!
//! The orchestrator reports outcomes through the [`Console`] trait so that
//! commands decide how lines reach the terminal and tests can capture them.

use std::cell::RefCell;

use console::Style;

/// Severity of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

/// Sink for leveled text messages
pub trait Console {
    fn line(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.line(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.line(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.line(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.line(Level::Error, message);
    }
}

/// Terminal sink styled with the `console` crate
///
/// Debug lines are only shown in verbose mode. Errors go to stderr.
pub struct TermConsole {
    verbose: bool,
}

impl TermConsole {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Console for TermConsole {
    fn line(&self, level: Level, message: &str) {
        match level {
            Level::Debug => {
                if self.verbose {
                    println!("{}", Style::new().dim().apply_to(message));
                }
            }
            Level::Info => println!("{message}"),
            Level::Warning => println!("{}", Style::new().yellow().apply_to(message)),
            Level::Error => eprintln!("{}", Style::new().red().apply_to(message)),
        }
    }
}

/// In-memory sink capturing lines for assertions
#[allow(dead_code)]
pub struct MemoryConsole {
    lines: RefCell<Vec<(Level, String)>>,
}

#[allow(dead_code)]
impl MemoryConsole {
    pub fn new() -> Self {
        Self {
            lines: RefCell::new(Vec::new()),
        }
    }

    /// All captured lines in emission order
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Captured messages at a single level
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|(_, m)| m.contains(needle))
    }
}

impl Console for MemoryConsole {
    fn line(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}
