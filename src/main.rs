//! Kodegen Bundler JAR - Java application packager.
//!
//! This binary compiles a Java project, creates a runnable JAR and wraps it
//! into a native executable with Launch4j.

use kodegen_bundler_jar::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  • {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
