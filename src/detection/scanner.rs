//! Channel directory scanning.

use super::parse_version_dir;
use crate::Error;
use semver::Version;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One version directory found in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledVersion {
    /// Parsed version.
    pub version: Version,
    /// The version directory itself, e.g. `.../IDEA-U/ch-0/2023.2.3`.
    pub dir: PathBuf,
}

/// All valid version directories of one channel, keyed by version.
///
/// Built fresh by every scan and never cached. When two directory names
/// parse to the same version (`1.02.0` and `1.2.0`), the textually greater
/// name is kept, so the result does not depend on listing order.
#[derive(Debug, Clone, Default)]
pub struct InstalledVersionIndex {
    entries: BTreeMap<Version, (OsString, PathBuf)>,
}

impl InstalledVersionIndex {
    /// Record a version directory, applying the tie-break rule on collision.
    pub fn insert(&mut self, version: Version, name: OsString, dir: PathBuf) {
        match self.entries.get(&version) {
            Some((existing, _)) if *existing >= name => {
                tracing::debug!(
                    kept = ?existing,
                    dropped = ?name,
                    %version,
                    "duplicate version directory"
                );
            }
            _ => {
                self.entries.insert(version, (name, dir));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The highest installed version, if any.
    pub fn latest(&self) -> Option<InstalledVersion> {
        self.entries
            .iter()
            .next_back()
            .map(|(version, (_, dir))| InstalledVersion {
                version: version.clone(),
                dir: dir.clone(),
            })
    }

    /// Consume the index, yielding the highest installed version.
    pub fn into_latest(mut self) -> Option<InstalledVersion> {
        self.entries
            .pop_last()
            .map(|(version, (_, dir))| InstalledVersion { version, dir })
    }

    /// Versions in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.entries.keys()
    }
}

/// Scan the immediate children of `channel`.
///
/// Returns `Ok(None)` when the channel or any ancestor up to and including
/// `root` is missing or not a directory. Any other I/O failure is an error.
pub(crate) fn scan_channel(
    root: &Path,
    channel: &Path,
) -> Result<Option<InstalledVersionIndex>, Error> {
    if !chain_is_dir(root, channel)? {
        return Ok(None);
    }

    let read_dir = fs::read_dir(channel).map_err(|source| scan_error(channel, source))?;
    let mut index = InstalledVersionIndex::default();

    for entry in read_dir {
        let entry = entry.map_err(|source| scan_error(channel, source))?;
        let path = entry.path();
        let name = entry.file_name();

        let Some(version) = name.to_str().and_then(parse_version_dir) else {
            tracing::debug!(entry = ?name, "skipping non-version entry");
            continue;
        };
        // Follows symlinks, matching how Toolbox may link version folders.
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                tracing::debug!(entry = ?name, "skipping version-named file");
                continue;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(entry = ?name, "skipping dangling link");
                continue;
            }
            Err(source) => return Err(scan_error(&path, source)),
        }

        tracing::debug!(%version, dir = %path.display(), "found version directory");
        index.insert(version, name, path);
    }

    Ok(Some(index))
}

/// Check that `root` and every directory between it and `leaf` exist and
/// are directories.
fn chain_is_dir(root: &Path, leaf: &Path) -> Result<bool, Error> {
    let mut chain: Vec<&Path> = leaf
        .ancestors()
        .take_while(|p| p.starts_with(root) && *p != root)
        .collect();
    chain.push(root);

    for dir in chain.into_iter().rev() {
        match fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                tracing::debug!(path = %dir.display(), "not a directory");
                return Ok(false);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %dir.display(), "does not exist");
                return Ok(false);
            }
            Err(source) => return Err(scan_error(dir, source)),
        }
    }
    Ok(true)
}

fn scan_error(path: &Path, source: io::Error) -> Error {
    Error::Scan {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn channel_with(dirs: &[&str]) -> (TempDir, PathBuf) {
        let root = TempDir::new().unwrap();
        let channel = root.path().join("IDEA-U").join("ch-0");
        fs::create_dir_all(&channel).unwrap();
        for d in dirs {
            fs::create_dir(channel.join(d)).unwrap();
        }
        (root, channel)
    }

    #[test]
    fn test_index_keeps_textually_greater_name_on_collision() {
        let mut index = InstalledVersionIndex::default();
        let v = Version::new(1, 2, 0);
        index.insert(v.clone(), "1.2.0".into(), PathBuf::from("/a/1.2.0"));
        index.insert(v.clone(), "1.02.0".into(), PathBuf::from("/a/1.02.0"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.latest().unwrap().dir, PathBuf::from("/a/1.2.0"));

        // Same outcome with the opposite insertion order.
        let mut index = InstalledVersionIndex::default();
        index.insert(v.clone(), "1.02.0".into(), PathBuf::from("/a/1.02.0"));
        index.insert(v, "1.2.0".into(), PathBuf::from("/a/1.2.0"));
        assert_eq!(index.into_latest().unwrap().dir, PathBuf::from("/a/1.2.0"));
    }

    #[test]
    fn test_scan_orders_numerically() {
        let (root, channel) = channel_with(&["1.9.0", "1.10.0"]);
        let index = scan_channel(root.path(), &channel).unwrap().unwrap();
        let versions: Vec<_> = index.versions().map(|v| v.to_string()).collect();
        assert_eq!(versions, ["1.9.0", "1.10.0"]);
        assert_eq!(index.latest().unwrap().version, Version::new(1, 10, 0));
    }

    #[test]
    fn test_scan_ignores_invalid_names_and_files() {
        let (root, channel) = channel_with(&["v1.0.0", "1.2", "1.2.3.4", "2021.3.1"]);
        fs::write(channel.join("9.9.9"), "not a dir").unwrap();
        fs::write(channel.join(".settings.json"), "{}").unwrap();

        let index = scan_channel(root.path(), &channel).unwrap().unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.latest().unwrap().version, Version::new(2021, 3, 1));
    }

    #[test]
    fn test_scan_missing_channel_is_none() {
        let root = TempDir::new().unwrap();
        let channel = root.path().join("CLion").join("ch-0");
        assert!(scan_channel(root.path(), &channel).unwrap().is_none());
    }

    #[test]
    fn test_scan_missing_root_is_none() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");
        let channel = missing.join("CLion").join("ch-0");
        assert!(scan_channel(&missing, &channel).unwrap().is_none());
    }

    #[test]
    fn test_scan_file_in_place_of_directory_is_none() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("CLion"), "").unwrap();
        let channel = root.path().join("CLion").join("ch-0");
        assert!(scan_channel(root.path(), &channel).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_dangling_version_link() {
        let (root, channel) = channel_with(&["2023.1.0"]);
        std::os::unix::fs::symlink(root.path().join("gone"), channel.join("2024.1.0")).unwrap();

        let index = scan_channel(root.path(), &channel).unwrap().unwrap();
        assert_eq!(index.latest().unwrap().version, Version::new(2023, 1, 0));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_version_entry_is_error() {
        // A self-referencing link fails to stat with ELOOP, even as root.
        let (root, channel) = channel_with(&["2023.1.0"]);
        let looped = channel.join("2024.1.0");
        std::os::unix::fs::symlink(&looped, &looped).unwrap();

        let err = scan_channel(root.path(), &channel).unwrap_err();
        match err {
            Error::Scan { path, .. } => assert_eq!(path, looped),
            other => panic!("expected scan error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_channel_is_error() {
        let root = TempDir::new().unwrap();
        let app = root.path().join("CLion");
        fs::create_dir(&app).unwrap();
        let channel = app.join("ch-0");
        std::os::unix::fs::symlink(&channel, &channel).unwrap();

        let err = scan_channel(root.path(), &channel).unwrap_err();
        assert!(matches!(err, Error::Scan { .. }));
    }

    #[test]
    fn test_scan_empty_channel_is_empty_index() {
        let (root, channel) = channel_with(&[]);
        let index = scan_channel(root.path(), &channel).unwrap().unwrap();
        assert!(index.is_empty());
        assert!(index.latest().is_none());
    }
}
