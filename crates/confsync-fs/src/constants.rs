//! Fixed path segments of the local store layout.

use std::path::Path;

/// Well-known names used when building store paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePath {
    /// Directory under a project that holds named environments
    EnvDir,
    /// Extension of every stored document
    DocumentExtension,
    /// Placeholder written into freshly scaffolded environment folders
    Placeholder,
    /// Default store root, relative to the working directory
    DefaultRoot,
}

impl StorePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnvDir => "env",
            Self::DocumentExtension => "json",
            Self::Placeholder => ".gitkeep",
            Self::DefaultRoot => "configs",
        }
    }
}

impl AsRef<Path> for StorePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for StorePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for StorePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
