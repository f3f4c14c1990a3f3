//! Application definitions loaded from a JSON file.
//!
//! The file replaces the built-in list entirely; it is a JSON array of
//! objects with `display_name`, `installation_id` and `executable_name`:
//!
//! ```json
//! [
//!   { "display_name": "GoLand", "installation_id": "Goland", "executable_name": "goland64.exe" }
//! ]
//! ```

use crate::{AppDefinition, Error};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Read and validate a definitions file.
pub fn load_definitions(path: &Path) -> Result<Vec<AppDefinition>, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let defs = parse_definitions(&text).map_err(|source| Error::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    validate_definitions(&defs)?;
    tracing::debug!(count = defs.len(), path = %path.display(), "loaded definitions");
    Ok(defs)
}

fn parse_definitions(text: &str) -> Result<Vec<AppDefinition>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Validate each definition and reject two definitions writing the same
/// artifact file.
pub fn validate_definitions(defs: &[AppDefinition]) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for def in defs {
        def.validate()?;
        // Windows file names are case-insensitive.
        if !seen.insert(def.executable_name.to_ascii_lowercase()) {
            return Err(Error::InvalidDefinition {
                name: def.display_name.clone(),
                reason: format!("executable_name {:?} is used twice", def.executable_name),
            });
        }
    }
    Ok(())
}
