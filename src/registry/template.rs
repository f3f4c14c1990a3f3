//! Context-menu template rendering.

use crate::AppDefinition;
use std::path::Path;
use strum::IntoEnumIterator;

/// First line of every file accepted by `regedit`.
pub const REG_HEADER: &str = "Windows Registry Editor Version 5.00";

/// Where in Explorer the menu entry appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Scope {
    /// Right-click on any file.
    File,
    /// Right-click on a folder.
    Directory,
    /// Right-click on the empty background of an open folder.
    DirectoryBackground,
}

impl Scope {
    /// Registry key the `shell` subkey lives under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::File => r"HKEY_CURRENT_USER\Software\Classes\*",
            Self::Directory => r"HKEY_CURRENT_USER\Software\Classes\Directory",
            Self::DirectoryBackground => {
                r"HKEY_CURRENT_USER\Software\Classes\Directory\Background"
            }
        }
    }

    /// Explorer argument placeholder: the clicked item, or for the
    /// background scope the folder being shown.
    pub fn target_placeholder(&self) -> &'static str {
        match self {
            Self::File | Self::Directory => "%1",
            Self::DirectoryBackground => "%V",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// Double every backslash so the path survives a quoted `.reg` string.
///
/// ```rust
/// use jetbrains_context_menu::escape_path;
/// use std::path::Path;
///
/// assert_eq!(escape_path(Path::new(r"C:\Tools\clion64.exe")), r"C:\\Tools\\clion64.exe");
/// ```
pub fn escape_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', r"\\")
}

/// Render the full registry file for one application.
///
/// The display name is inserted verbatim. A name containing `"`, `\`,
/// brackets or control characters produces a broken file;
/// [`AppDefinition::validate`] rejects such names, but `render` itself
/// does not check.
pub fn render(def: &AppDefinition, executable: &Path) -> String {
    let exe = escape_path(executable);
    let label = format!("Open with &{}", def.display_name);

    let blocks: Vec<String> = Scope::all()
        .map(|scope| {
            let key = format!(r"{}\shell\{label}", scope.key());
            let placeholder = scope.target_placeholder();
            format!(
                "[{key}]\n\
                 @=\"{label}\"\n\
                 \"Icon\"=\"{exe}\"\n\
                 [{key}\\command]\n\
                 @=\"\\\"{exe}\\\" \\\"{placeholder}\\\"\"\n"
            )
        })
        .collect();

    format!("{REG_HEADER}\n\n{}", blocks.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppKind;

    const CLION: &str = r"C:\Tools\clion64.exe";

    fn clion() -> String {
        render(&AppKind::CLion.definition(), Path::new(CLION))
    }

    #[test]
    fn test_escape_doubles_every_backslash() {
        assert_eq!(
            escape_path(Path::new(r"C:\Users\me\scoop\idea64.exe")),
            r"C:\\Users\\me\\scoop\\idea64.exe"
        );
        assert_eq!(escape_path(Path::new("no-separators")), "no-separators");
    }

    #[test]
    fn test_icon_path_is_escaped() {
        let out = clion();
        assert!(out.contains(r#""Icon"="C:\\Tools\\clion64.exe""#));
        assert_eq!(out.matches(r#""Icon"="#).count(), 3);
    }

    #[test]
    fn test_command_placeholders_per_scope() {
        let out = clion();
        let item = r#"@="\"C:\\Tools\\clion64.exe\" \"%1\"""#;
        let background = r#"@="\"C:\\Tools\\clion64.exe\" \"%V\"""#;
        assert_eq!(out.matches(item).count(), 2);
        assert_eq!(out.matches(background).count(), 1);

        let bg_key = r"[HKEY_CURRENT_USER\Software\Classes\Directory\Background\shell\Open with &CLion\command]";
        let bg_pos = out.find(bg_key).unwrap();
        assert!(out[bg_pos..].contains("%V"));
        assert!(!out[bg_pos..].contains("%1"));
    }

    #[test]
    fn test_exact_layout() {
        let expected = concat!(
            "Windows Registry Editor Version 5.00\n",
            "\n",
            r"[HKEY_CURRENT_USER\Software\Classes\*\shell\Open with &CLion]", "\n",
            r#"@="Open with &CLion""#, "\n",
            r#""Icon"="C:\\Tools\\clion64.exe""#, "\n",
            r"[HKEY_CURRENT_USER\Software\Classes\*\shell\Open with &CLion\command]", "\n",
            r#"@="\"C:\\Tools\\clion64.exe\" \"%1\"""#, "\n",
            "\n",
            r"[HKEY_CURRENT_USER\Software\Classes\Directory\shell\Open with &CLion]", "\n",
            r#"@="Open with &CLion""#, "\n",
            r#""Icon"="C:\\Tools\\clion64.exe""#, "\n",
            r"[HKEY_CURRENT_USER\Software\Classes\Directory\shell\Open with &CLion\command]", "\n",
            r#"@="\"C:\\Tools\\clion64.exe\" \"%1\"""#, "\n",
            "\n",
            r"[HKEY_CURRENT_USER\Software\Classes\Directory\Background\shell\Open with &CLion]", "\n",
            r#"@="Open with &CLion""#, "\n",
            r#""Icon"="C:\\Tools\\clion64.exe""#, "\n",
            r"[HKEY_CURRENT_USER\Software\Classes\Directory\Background\shell\Open with &CLion\command]", "\n",
            r#"@="\"C:\\Tools\\clion64.exe\" \"%V\"""#, "\n",
        );
        assert_eq!(clion(), expected);
    }

    #[test]
    fn test_display_name_with_spaces() {
        let out = render(
            &AppKind::IntellijIdea.definition(),
            Path::new(r"D:\idea64.exe"),
        );
        assert!(out.contains(r"\shell\Open with &IntelliJ IDEA]"));
        assert!(out.contains(r#"@="Open with &IntelliJ IDEA""#));
    }

    #[test]
    fn test_scope_keys() {
        let keys: Vec<_> = Scope::all().map(|s| s.key()).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys[0].ends_with(r"Classes\*"));
        assert!(keys[2].ends_with(r"Directory\Background"));
    }
}
