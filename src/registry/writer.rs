//! Artifact file output.

use crate::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Appended to the executable name to form the artifact file name.
pub const ARTIFACT_SUFFIX: &str = "-install-context.reg";

/// `idea64.exe` -> `idea64.exe-install-context.reg`
pub fn artifact_file_name(executable_name: &str) -> String {
    format!("{executable_name}{ARTIFACT_SUFFIX}")
}

/// Write `content` to `{output_dir}/{file_name}` as UTF-8.
///
/// The directory is created if needed. An existing file of the same name
/// is deleted first and the content written fresh; nothing is merged.
pub fn write_artifact(output_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, Error> {
    fs::create_dir_all(output_dir).map_err(|source| Error::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(file_name);
    match fs::remove_file(&path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed previous artifact"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(Error::RemoveArtifact { path, source }),
    }

    fs::write(&path, content.as_bytes()).map_err(|source| Error::WriteArtifact {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
