//! Configuration structures for bundling operations.
//!
//! Settings are grouped by concern: package metadata, the Java build, output
//! locations and the native launcher. [`SettingsBuilder`] resolves every
//! configured path against the project directory so downstream stages only
//! ever see absolute paths.

mod builder;
mod core;
mod java;
mod launcher;
mod output;
mod package;

pub use builder::SettingsBuilder;
pub use self::core::Settings;
pub use java::JavaSettings;
pub use launcher::{HeaderType, JdkPreference, LauncherSettings, Priority, RuntimeBits};
pub(crate) use launcher::normalize_version;
pub use output::OutputSettings;
pub use package::PackageSettings;
