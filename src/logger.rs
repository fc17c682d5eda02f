use std::{
    fmt::{Display, Write as _},
    io::{self, Stdout, Write},
};

use crate::{
    severity::Severity,
    terminate::{ProcessExit, Terminate, FATAL_EXIT_CODE},
};

/// Prints `[TAG]message` once, on drop. Fatal loggers then pass
/// [`FATAL_EXIT_CODE`] to their terminator.
pub struct Logger<W: Write = Stdout, T: Terminate = ProcessExit> {
    severity: Severity,
    buffer: String,
    out: W,
    terminator: T,
}

impl Logger {
    pub fn new(severity: Severity) -> Self {
        Self::with_parts(severity, io::stdout(), ProcessExit)
    }
    pub fn info() -> Self {
        Self::new(Severity::Info)
    }
    pub fn warning() -> Self {
        Self::new(Severity::Warning)
    }
    pub fn fatal() -> Self {
        Self::new(Severity::Fatal)
    }
}

impl<W: Write, T: Terminate> Logger<W, T> {
    pub fn with_parts(severity: Severity, out: W, terminator: T) -> Self {
        Self {
            severity,
            buffer: String::new(),
            out,
            terminator,
        }
    }
    pub fn append(mut self, fragment: impl Display) -> Self {
        let _ = write!(self.buffer, "{}", fragment);
        self
    }
    pub fn severity(&self) -> Severity {
        self.severity
    }
    pub fn message(&self) -> &str {
        &self.buffer
    }
}

impl<W: Write, T: Terminate> Drop for Logger<W, T> {
    fn drop(&mut self) {
        let line: String = format!("[{}]{}\n", self.severity.tag(), self.buffer);
        // one write per line so concurrent loggers don't interleave
        let _ = self
            .out
            .write_all(line.as_bytes())
            .and_then(|_| self.out.flush());
        if self.severity.is_fatal() {
            self.terminator.terminate(FATAL_EXIT_CODE);
        }
    }
}
