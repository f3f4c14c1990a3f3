//! Registry (`.reg`) artifact generation.
//!
//! - `template`: render the six context-menu key blocks for one application
//! - `writer`: replace the artifact file inside the output directory

mod template;
mod writer;

pub use template::{escape_path, render, Scope, REG_HEADER};
pub use writer::{artifact_file_name, write_artifact, ARTIFACT_SUFFIX};
