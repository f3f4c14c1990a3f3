//! # jetbrains-context-menu
//!
//! Explorer "Open with" context-menu entries for JetBrains IDEs installed
//! through the Scoop `jetbrains-toolbox` package.
//!
//! The crate finds the newest installed version of each IDE under
//! `{root}/{installation_id}/ch-0/{major.minor.patch}` and renders a
//! `.reg` file that registers the IDE launcher for files, folders and
//! folder backgrounds. It only produces the files; applying them is left
//! to `regedit` or the user.
//!
//! ## Features
//!
//! - `AppKind` enum naming the built-in IDEs
//! - `resolve()` for finding one application's newest launcher
//! - `render()` / `write_artifact()` for the registry file itself
//! - `generate_all()` for the whole batch
//!
//! ## Example
//!
//! ```rust,no_run
//! use jetbrains_context_menu::{generate_all, default_installation_root, GenerateOptions};
//!
//! fn main() -> Result<(), jetbrains_context_menu::Error> {
//!     let options = GenerateOptions::new(default_installation_root()?);
//!     let report = generate_all(&options)?;
//!     println!("wrote {} artifacts", report.written());
//!     Ok(())
//! }
//! ```

mod app_kind;
mod config;
mod detection;
mod error;
mod generate;
mod options;
mod registry;
mod resolve;

pub use app_kind::{AppDefinition, AppKind};
pub use config::{load_definitions, validate_definitions};
pub use detection::{InstalledVersion, InstalledVersionIndex};
pub use error::Error;
pub use generate::{generate_all, AppOutcome, BatchReport};
pub use options::{
    default_installation_root, installation_root_from_profile, GenerateOptions,
    DEFAULT_OUTPUT_DIR, PROFILE_VAR,
};
pub use registry::{
    artifact_file_name, escape_path, render, write_artifact, Scope, ARTIFACT_SUFFIX, REG_HEADER,
};
pub use resolve::{channel_dir, resolve, ResolvedExecutable, CHANNEL_SEGMENT};
