//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! of values that clap cannot check on its own.

use clap::Parser;
use std::path::PathBuf;

/// Java application bundler producing runnable JARs and native executables
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_jar",
    version,
    about = "Compiles a Java project into a runnable JAR and wraps it with Launch4j",
    long_about = "Compiles a Java project with javac, packages classes and resources into a runnable JAR,
then wraps the JAR into a native executable with Launch4j.

Settings are read from bundle.toml in the project directory; command line options override it.

Usage:
  kodegen_bundler_jar
  kodegen_bundler_jar --project-dir ./sticky-notes --product-name StickyNoteApp
  kodegen_bundler_jar --jar-only --json

Exit code 0 = every requested artifact exists at its output path."
)]
pub struct Args {
    /// Project root containing the source tree and bundle.toml
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Project file to use instead of <project-dir>/bundle.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Product name used for artifact names and the launcher error title
    #[arg(long, value_name = "NAME")]
    pub product_name: Option<String>,

    /// Fully qualified entry-point class (e.g. Main, com.example.App)
    #[arg(short, long, value_name = "CLASS")]
    pub main_class: Option<String>,

    /// Output directory for the JAR and the executable
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Launch4j installation probed when launch4j is not on PATH
    #[arg(long, value_name = "DIR", env = "LAUNCH4J_HOME")]
    pub launch4j_dir: Option<PathBuf>,

    /// Erase the classes directory before compiling
    #[arg(long)]
    pub clean: bool,

    /// Stop after creating the JAR
    #[arg(long)]
    pub jar_only: bool,

    /// Print the artifact summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Show debug output, including tool resolution
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.project_dir.is_dir() {
            return Err(format!(
                "Project directory does not exist: {}",
                self.project_dir.display()
            ));
        }

        if self.product_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err("Product name cannot be empty".to_string());
        }

        if self.main_class.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err("Main class cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        // JSON output owns stdout: no progress lines and no color codes.
        let output = super::OutputManager::new(
            args.verbose,
            args.quiet || args.json,
            super::output::color_choice(args.json),
        );

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
