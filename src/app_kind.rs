//! Built-in JetBrains applications and the definition record used to resolve them.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path};
use strum::IntoEnumIterator;

use crate::Error;

/// A JetBrains IDE known to this tool out of the box.
///
/// Each variant maps to a Toolbox application directory and the 64-bit
/// Windows launcher inside its `bin` folder.
///
/// # Example
///
/// ```rust
/// use jetbrains_context_menu::AppKind;
///
/// for kind in AppKind::all() {
///     println!("{}: {}", kind.display_name(), kind.executable_name());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum AppKind {
    /// CLion (C/C++)
    CLion,
    /// IntelliJ IDEA Ultimate
    IntellijIdea,
    /// PyCharm Professional
    PyCharm,
    /// Rider (.NET)
    Rider,
}

impl AppKind {
    /// Name shown in the context menu label.
    ///
    /// ```rust
    /// use jetbrains_context_menu::AppKind;
    ///
    /// assert_eq!(AppKind::IntellijIdea.display_name(), "IntelliJ IDEA");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CLion => "CLion",
            Self::IntellijIdea => "IntelliJ IDEA",
            Self::PyCharm => "PyCharm",
            Self::Rider => "Rider",
        }
    }

    /// Toolbox application directory name under the installation root.
    pub fn installation_id(&self) -> &'static str {
        match self {
            Self::CLion => "CLion",
            Self::IntellijIdea => "IDEA-U",
            Self::PyCharm => "PyCharm-P",
            Self::Rider => "Rider",
        }
    }

    /// Launcher file name inside `{version}/bin`.
    pub fn executable_name(&self) -> &'static str {
        match self {
            Self::CLion => "clion64.exe",
            Self::IntellijIdea => "idea64.exe",
            Self::PyCharm => "pycharm64.exe",
            Self::Rider => "rider64.exe",
        }
    }

    /// The definition record for this application.
    pub fn definition(&self) -> AppDefinition {
        AppDefinition::new(
            self.display_name(),
            self.installation_id(),
            self.executable_name(),
        )
    }

    /// Iterator over all built-in applications, in menu order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Definitions for every built-in application, in menu order.
    pub fn definitions() -> Vec<AppDefinition> {
        Self::all().map(AppDefinition::from).collect()
    }
}

/// One application the batch resolves and generates an artifact for.
///
/// The built-in list comes from [`AppKind::definitions`]; a JSON file of
/// these records can replace it (see [`crate::load_definitions`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppDefinition {
    /// Label used in `Open with &<display_name>`.
    pub display_name: String,
    /// Directory name under the installation root.
    pub installation_id: String,
    /// Launcher file name inside the version's `bin` directory.
    pub executable_name: String,
}

impl AppDefinition {
    pub fn new(
        display_name: impl Into<String>,
        installation_id: impl Into<String>,
        executable_name: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            installation_id: installation_id.into(),
            executable_name: executable_name.into(),
        }
    }

    /// Check that every field is non-empty, that the display name can be
    /// placed in a `.reg` key and string unescaped, and that the id and
    /// executable name are each a single plain path segment.
    pub fn validate(&self) -> Result<(), Error> {
        if self.display_name.trim().is_empty() {
            return Err(self.invalid("display_name is empty"));
        }
        if let Some(c) = self
            .display_name
            .chars()
            .find(|&c| matches!(c, '"' | '\\' | '[' | ']') || c.is_control())
        {
            return Err(self.invalid(format!("display_name contains {c:?}")));
        }
        for (field, value) in [
            ("installation_id", &self.installation_id),
            ("executable_name", &self.executable_name),
        ] {
            if value.is_empty() {
                return Err(self.invalid(format!("{field} is empty")));
            }
            if !is_single_segment(value) {
                return Err(self.invalid(format!(
                    "{field} {value:?} must be a single path segment"
                )));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> Error {
        Error::InvalidDefinition {
            name: self.display_name.clone(),
            reason: reason.into(),
        }
    }
}

impl From<AppKind> for AppDefinition {
    fn from(kind: AppKind) -> Self {
        kind.definition()
    }
}

fn is_single_segment(value: &str) -> bool {
    // Both separators are rejected so a definition stays portable to Windows.
    if value.contains('/') || value.contains('\\') {
        return false;
    }
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
