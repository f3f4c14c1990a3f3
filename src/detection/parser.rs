//! Version directory name parsing with regex matching.

use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

/// Directory names must be exactly `major.minor.patch`, nothing else.
static VERSION_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("Invalid regex pattern"));

/// Parse a semantic version from a version directory name.
///
/// Unlike [`Version::parse`], leading zeros are accepted and read as plain
/// integers, so `1.02.0` and `1.2.0` are the same version:
///
/// - `2023.2.3` -> 2023.2.3
/// - `1.02.0` -> 1.2.0
/// - `v1.0.0`, `1.2`, `1.2.3.4`, `1.0.0-eap` -> `None`
///
/// Components that overflow `u64` are rejected rather than wrapped, and
/// only ASCII digits count: `١.٢.٣` matches the regex's Unicode `\d` but
/// is not a version.
pub(crate) fn parse_version_dir(name: &str) -> Option<Version> {
    let caps = VERSION_DIR.captures(name)?;
    let part = |i: usize| caps.get(i)?.as_str().parse::<u64>().ok();
    Some(Version::new(part(1)?, part(2)?, part(3)?))
}
