//! Batch generation options.
//!
//! This module provides the [`GenerateOptions`] struct that tells the
//! driver where installations live, where artifacts go, and which
//! applications to process.

use crate::{AppDefinition, AppKind, Error};
use std::path::{Path, PathBuf};

/// Variable holding the Windows user profile directory.
pub const PROFILE_VAR: &str = "USERPROFILE";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Toolbox apps directory under the user profile when installed with Scoop.
///
/// ```rust
/// use jetbrains_context_menu::installation_root_from_profile;
/// use std::path::Path;
///
/// let root = installation_root_from_profile(Path::new("/home/me"));
/// assert!(root.ends_with("scoop/persist/jetbrains-toolbox/apps"));
/// ```
pub fn installation_root_from_profile(profile: &Path) -> PathBuf {
    profile
        .join("scoop")
        .join("persist")
        .join("jetbrains-toolbox")
        .join("apps")
}

/// Resolve the installation root from `USERPROFILE`.
pub fn default_installation_root() -> Result<PathBuf, Error> {
    std::env::var_os(PROFILE_VAR)
        .filter(|v| !v.is_empty())
        .map(|profile| installation_root_from_profile(Path::new(&profile)))
        .ok_or(Error::ProfileNotSet { var: PROFILE_VAR })
}

/// Configuration for one batch run.
///
/// # Example
///
/// ```rust
/// use jetbrains_context_menu::{AppKind, GenerateOptions};
///
/// let opts = GenerateOptions::new("/apps")
///     .output_dir("/tmp/reg")
///     .only(["IDEA-U"]);
/// assert_eq!(opts.apps, vec![AppKind::IntellijIdea.definition()]);
/// ```
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory holding `{installation_id}/ch-0/{version}` trees.
    pub installation_root: PathBuf,

    /// Where artifacts are written.
    ///
    /// Default: `out`
    pub output_dir: PathBuf,

    /// Applications to process, in order.
    ///
    /// Default: every [`AppKind`]
    pub apps: Vec<AppDefinition>,

    /// Resolve only; write nothing.
    ///
    /// Default: `false`
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(installation_root: impl Into<PathBuf>) -> Self {
        Self {
            installation_root: installation_root.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            apps: AppKind::definitions(),
            dry_run: false,
        }
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn apps(mut self, apps: Vec<AppDefinition>) -> Self {
        self.apps = apps;
        self
    }

    /// Keep only the applications whose installation id is listed.
    /// Matching ignores ASCII case; an empty filter keeps everything.
    pub fn only<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<S> = ids.into_iter().collect();
        if !ids.is_empty() {
            self.apps.retain(|app| {
                ids.iter()
                    .any(|id| id.as_ref().eq_ignore_ascii_case(&app.installation_id))
            });
        }
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
