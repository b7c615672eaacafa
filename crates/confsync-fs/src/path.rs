//! Slash-separated paths for store addresses

use std::fmt;
use std::path::{Path, PathBuf};

/// A store location written with `/` separators and no repeated slashes.
///
/// Every `(project, version, environment)` triple resolves to exactly one
/// `NormalizedPath`, so two resolutions can be compared as strings. The
/// platform form is produced only when touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: normalize(&path.as_ref().to_string_lossy()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Platform-native form for I/O.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append one or more `/`-separated segments.
    pub fn join(&self, segment: &str) -> Self {
        if self.inner.is_empty() {
            return Self {
                inner: normalize(segment),
            };
        }
        Self {
            inner: normalize(&format!("{}/{}", self.inner, segment)),
        }
    }

    pub fn parent(&self) -> Option<Self> {
        let (head, _) = self.inner.rsplit_once('/')?;
        let inner = if head.is_empty() { "/" } else { head };
        Some(Self {
            inner: inner.to_string(),
        })
    }

    /// Last component, `None` for the filesystem root.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Extension of the last component. Dotfiles such as `.gitkeep` have none.
    pub fn extension(&self) -> Option<&str> {
        match self.file_name()?.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => Some(ext),
            _ => None,
        }
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

/// Backslashes become `/`, runs of `/` collapse, and a trailing `/` is
/// dropped (except for the root itself).
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().map(|c| if c == '\\' { '/' } else { c }) {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}
