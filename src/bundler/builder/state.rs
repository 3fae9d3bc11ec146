//! Pipeline stages and run state.

use std::fmt;

/// A pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// `javac` compiles the source tree.
    Compile,
    /// The `Main-Class` manifest is written.
    Manifest,
    /// `jar` packs classes, manifest and resources.
    Archive,
    /// Launch4j wraps the archive into an executable.
    Wrap,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Compile => "compile",
            Stage::Manifest => "manifest",
            Stage::Archive => "archive",
            Stage::Wrap => "wrap",
        })
    }
}

/// State of a bundling run.
///
/// `Init → Compiled → Manifested → Archived → Wrapped → Done`, where any stage
/// may instead move the run to `Failed`. There is no retry: both `Failed` and
/// `Done` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Init,
    Compiled,
    Manifested,
    Archived,
    Wrapped,
    Done,
    Failed(Stage),
}

impl BuildState {
    /// The stage that moves the run out of this state, if any.
    pub fn next_stage(self) -> Option<Stage> {
        match self {
            BuildState::Init => Some(Stage::Compile),
            BuildState::Compiled => Some(Stage::Manifest),
            BuildState::Manifested => Some(Stage::Archive),
            BuildState::Archived => Some(Stage::Wrap),
            BuildState::Wrapped | BuildState::Done | BuildState::Failed(_) => None,
        }
    }

    /// State reached once `stage` succeeds.
    pub fn after(stage: Stage) -> Self {
        match stage {
            Stage::Compile => BuildState::Compiled,
            Stage::Manifest => BuildState::Manifested,
            Stage::Archive => BuildState::Archived,
            Stage::Wrap => BuildState::Wrapped,
        }
    }

    /// Whether the run is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, BuildState::Done | BuildState::Failed(_))
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildState::Init => f.write_str("init"),
            BuildState::Compiled => f.write_str("compiled"),
            BuildState::Manifested => f.write_str("manifested"),
            BuildState::Archived => f.write_str("archived"),
            BuildState::Wrapped => f.write_str("wrapped"),
            BuildState::Done => f.write_str("done"),
            BuildState::Failed(stage) => write!(f, "failed({stage})"),
        }
    }
}
