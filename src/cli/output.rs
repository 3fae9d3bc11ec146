//! Colored terminal output for the command line.
//!
//! Progress goes to stdout. Quiet mode suppresses everything here; verbose
//! mode adds detail lines. Color is dropped when stdout is not a terminal or
//! carries `--json` output.

use cyrup_termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Verbosity-aware terminal printer.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    color: ColorChoice,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool, color: ColorChoice) -> Self {
        Self {
            verbose,
            quiet,
            color,
        }
    }

    /// Print a detail line in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.line(None, "  ", message)
    }

    /// Print a progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.line(Some(Color::Cyan), "→ ", message)
    }

    /// Print a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.line(Some(Color::Green), "✓ ", message)
    }

    /// Print a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        let Some(mut out) = self.stdout() else {
            return Ok(());
        };
        writeln!(out)?;
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "{title}")?;
        out.reset()?;
        writeln!(out, "{}", "─".repeat(title.chars().count()))?;
        out.flush()
    }

    /// Print an indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.line(None, "   ", message)
    }

    fn line(&self, color: Option<Color>, marker: &str, message: &str) -> io::Result<()> {
        let Some(mut out) = self.stdout() else {
            return Ok(());
        };
        if let Some(color) = color {
            out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        }
        write!(out, "{marker}")?;
        out.reset()?;
        writeln!(out, "{message}")?;
        out.flush()
    }

    fn stdout(&self) -> Option<StandardStream> {
        (!self.quiet).then(|| StandardStream::stdout(self.color))
    }
}

/// Color policy for stdout. `plain` forces uncolored output.
pub fn color_choice(plain: bool) -> ColorChoice {
    if plain || !io::stdout().is_terminal() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_is_never_colored() {
        assert_eq!(color_choice(true), ColorChoice::Never);
    }

    #[test]
    fn quiet_output_writes_nothing() {
        let output = OutputManager::new(true, true, ColorChoice::Never);
        assert!(output.stdout().is_none());
        output.section("Bundling").unwrap();
        output.success("done").unwrap();
    }
}
