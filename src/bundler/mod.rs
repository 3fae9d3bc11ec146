//! Java application bundler producing runnable JARs and native launchers.
//!
//! The bundler runs a fixed, strictly sequential pipeline:
//!
//! 1. **compile** - `javac` compiles the source tree into a classes directory
//! 2. **manifest** - a `Main-Class` manifest is written for the archiver
//! 3. **archive** - `jar` packs classes, manifest and resource directories
//! 4. **wrap** - Launch4j wraps the archive into a native executable
//!
//! A failing stage aborts every later stage. Transient descriptor files (the
//! JAR manifest and the Launch4j configuration) are scoped guards and are
//! removed on every exit path.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_jar::bundler::{Bundler, JavaSettings, PackageSettings, SettingsBuilder};
//!
//! # async fn example() -> kodegen_bundler_jar::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_dir("/work/sticky-notes")
//!     .package_settings(PackageSettings {
//!         product_name: "StickyNoteApp".into(),
//!         ..Default::default()
//!     })
//!     .java_settings(JavaSettings {
//!         resources: vec!["notes_rtf".into()],
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let artifacts = Bundler::new(settings).bundle().await?;
//! for artifact in artifacts {
//!     println!("{}: {}", artifact.package_type, artifact.paths[0].display());
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
pub(crate) mod error;
pub(crate) mod platform;
mod settings;
pub(crate) mod utils;

pub use builder::{BuildState, Bundler, Stage, ToolResolver};
pub use error::{Context, Error, ErrorExt, Result};
pub use platform::PackageType;
pub use settings::{
    HeaderType, JavaSettings, JdkPreference, LauncherSettings, OutputSettings, PackageSettings,
    Priority, RuntimeBits, Settings, SettingsBuilder,
};

/// A bundled artifact produced by a successful run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BundledArtifact {
    /// The kind of deliverable (runnable JAR or native executable).
    pub package_type: PackageType,

    /// Paths to the files making up this deliverable.
    pub paths: Vec<std::path::PathBuf>,

    /// Total size of the artifact in bytes.
    pub size: u64,

    /// SHA-256 checksum of the main artifact.
    pub checksum: String,
}
