//! Detection implementation submodule.
//!
//! This module contains the internal details of finding installed versions
//! inside a Toolbox channel directory. It provides:
//!
//! - `parse_version_dir`: strict `major.minor.patch` directory name parsing
//! - `scan_channel`: build an [`InstalledVersionIndex`] from a channel directory

mod parser;
mod scanner;

pub(crate) use parser::parse_version_dir;
pub use scanner::{InstalledVersion, InstalledVersionIndex};
pub(crate) use scanner::scan_channel;
