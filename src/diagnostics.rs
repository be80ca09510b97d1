// SPDX-License-Identifier: PMPL-1.0-or-later

//! Severity-colored advisory reporting.
//!
//! Nothing reported here is ever fatal to the host: configuration
//! errors print and resolution is skipped, warnings print and execution
//! continues. A quiet channel swallows everything, which is what
//! library embedders and tests want.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Console message channel with severity coloring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    quiet: bool,
}

impl Diagnostics {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    pub fn success(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn emit(&self, level: Level, message: &str) {
        if self.quiet {
            return;
        }
        match level {
            Level::Error => eprintln!("{}", message.red().bold()),
            Level::Warn => eprintln!("{}", message.yellow()),
            Level::Info => println!("{}", message.green().bold()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_channel_swallows_everything() {
        // Exercises the no-output path; nothing to assert beyond "does
        // not panic".
        let diagnostics = Diagnostics::new(true);
        diagnostics.error("unseen");
        diagnostics.warn("unseen");
        diagnostics.success("unseen");
    }
}
