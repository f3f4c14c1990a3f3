//! Resolution of an application's newest installed launcher.

use crate::detection::scan_channel;
use crate::{AppDefinition, Error};
use semver::Version;
use std::path::{Path, PathBuf};

/// Toolbox channel directory name. Only the first channel is ever used.
pub const CHANNEL_SEGMENT: &str = "ch-0";

/// The launcher of the highest installed version of an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExecutable {
    /// `{version_dir}/bin/{executable_name}`. Not checked for existence.
    pub path: PathBuf,
    /// The version that was selected.
    pub version: Version,
    /// The selected version directory.
    pub version_dir: PathBuf,
}

/// The channel directory holding an application's version folders:
/// `{root}/{installation_id}/ch-0`.
pub fn channel_dir(root: &Path, def: &AppDefinition) -> PathBuf {
    root.join(&def.installation_id).join(CHANNEL_SEGMENT)
}

/// Find the launcher for the highest installed version of `def`.
///
/// # Detection Process
///
/// 1. List `{root}/{installation_id}/ch-0`
/// 2. Keep subdirectories named exactly `major.minor.patch`
/// 3. Pick the highest version (numeric, not string, ordering)
/// 4. Return `{version_dir}/bin/{executable_name}`
///
/// # Returns
///
/// - `Ok(Some(_))` when at least one version directory exists
/// - `Ok(None)` when the root or channel is missing, or holds no versions
/// - `Err(Error::Scan)` for any other filesystem failure, such as
///   permission denied
///
/// # Example
///
/// ```rust,no_run
/// use jetbrains_context_menu::{resolve, AppKind};
/// use std::path::Path;
///
/// let root = Path::new(r"C:\Users\me\scoop\persist\jetbrains-toolbox\apps");
/// match resolve(root, &AppKind::CLion.definition()) {
///     Ok(Some(exe)) => println!("CLion {} at {}", exe.version, exe.path.display()),
///     Ok(None) => println!("CLion not detected."),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub fn resolve(root: &Path, def: &AppDefinition) -> Result<Option<ResolvedExecutable>, Error> {
    let channel = channel_dir(root, def);
    let Some(index) = scan_channel(root, &channel)? else {
        return Ok(None);
    };

    let Some(latest) = index.into_latest() else {
        tracing::debug!(channel = %channel.display(), "no version directories");
        return Ok(None);
    };

    let path = latest.dir.join("bin").join(&def.executable_name);
    tracing::debug!(
        app = %def.display_name,
        version = %latest.version,
        path = %path.display(),
        "resolved executable"
    );

    Ok(Some(ResolvedExecutable {
        path,
        version: latest.version,
        version_dir: latest.dir,
    }))
}
