//! Error types for version resolution and artifact generation.
//!
//! "Not installed" is never an error: it is reported as `Ok(None)` by
//! [`crate::resolve`]. Everything here means the environment itself is
//! broken and each variant names the path that failed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while scanning installations or writing artifacts.
///
/// # Example
///
/// ```rust
/// use jetbrains_context_menu::Error;
///
/// fn report(error: &Error) {
///     eprintln!("error: {}", error);
///     eprintln!("hint: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Listing or inspecting an installation directory failed.
    #[error("failed to scan {}: {source}", .path.display())]
    Scan {
        /// Directory being scanned.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stale artifact could not be removed before rewriting it.
    #[error("failed to remove existing artifact {}: {source}", .path.display())]
    RemoveArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the artifact contents failed.
    #[error("failed to write artifact {}: {source}", .path.display())]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The application definitions file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The application definitions file is not valid JSON for this schema.
    #[error("failed to parse config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An application definition breaks the field invariants.
    #[error("invalid application definition {name:?}: {reason}")]
    InvalidDefinition {
        /// Display name of the offending definition (may be empty).
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The user profile variable needed to locate installations is unset.
    #[error("environment variable {var} is not set")]
    ProfileNotSet {
        /// Name of the missing variable.
        var: &'static str,
    },
}

impl Error {
    /// An actionable hint for resolving this error.
    pub fn fix_suggestion(&self) -> &'static str {
        match self {
            Self::Scan { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
                "Grant read access to the Toolbox apps directory or pass --root"
            }
            Self::Scan { .. } => "Check that the installation root is readable or pass --root",
            Self::CreateOutputDir { .. } => {
                "Choose a writable output directory with --out"
            }
            Self::RemoveArtifact { .. } | Self::WriteArtifact { .. } => {
                "Close any program holding the .reg file and check write permissions"
            }
            Self::ReadConfig { .. } => "Check the --config path",
            Self::ParseConfig { .. } => {
                "The config must be a JSON array of {display_name, installation_id, executable_name}"
            }
            Self::InvalidDefinition { .. } => {
                "Use non-empty names without quotes, backslashes or brackets; ids and executables must not contain path separators"
            }
            Self::ProfileNotSet { .. } => "Set USERPROFILE or pass --root explicitly",
        }
    }
}
