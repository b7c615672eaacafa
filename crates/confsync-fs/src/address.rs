//! Address resolution for versioned configuration documents
//!
//! An [`Address`] is the `(project, version, environment)` key of a document.
//! It resolves to exactly one location under the store root:
//!
//! ```text
//! <root>/<project>/<project>@<version>.json                 default environment
//! <root>/<project>/env/<env>/<project>@<version>.json       named environment
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, NormalizedPath, Result, StorePath};

/// `<project>@<version>.json`; the project stops at the first `@`.
static FILE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)@(.+)\.json$").unwrap());

/// Semantic key of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub project: String,
    pub version: String,
    pub environment: Option<String>,
}

impl Address {
    pub fn new(
        project: impl Into<String>,
        version: impl Into<String>,
        environment: Option<&str>,
    ) -> Self {
        Self {
            project: project.into(),
            version: version.into(),
            environment: environment.map(str::to_string),
        }
    }

    /// Recover an address from a document path.
    ///
    /// Only the basename is parsed; the environment is taken from the caller
    /// rather than inferred from the directory structure.
    pub fn from_path(path: &NormalizedPath, environment: Option<&str>) -> Result<Self> {
        let name = path.file_name().unwrap_or_default();
        let (project, version) = parse_file_name(name)?;
        Ok(Self::new(project, version, environment))
    }

    /// Basename of the document file for this address.
    pub fn file_name(&self) -> String {
        format!(
            "{}@{}.{}",
            self.project,
            self.version,
            StorePath::DocumentExtension
        )
    }

    /// Directory holding documents for this project and environment.
    pub fn directory(&self, root: &NormalizedPath) -> NormalizedPath {
        let project_dir = root.join(&self.project);
        match &self.environment {
            Some(env) => project_dir.join(StorePath::EnvDir.as_str()).join(env),
            None => project_dir,
        }
    }

    /// Resolve the canonical location of this address under `root`.
    pub fn resolve(&self, root: &NormalizedPath) -> NormalizedPath {
        self.directory(root).join(&self.file_name())
    }

    /// Check a requested project and environment before anything is
    /// resolved from them.
    ///
    /// A project may not contain `@`, since the file name would then parse
    /// back to a different project.
    pub fn check_scope(project: &str, environment: Option<&str>) -> Result<()> {
        check_segment("project", project)?;
        if project.contains('@') {
            return Err(Error::InvalidSegment {
                label: "project",
                value: project.to_string(),
            });
        }
        if let Some(env) = environment {
            check_segment("environment", env)?;
        }
        Ok(())
    }

    /// Ensure this address resolves inside `<root>/<project>/` and that its
    /// file name parses back to the same project and version.
    pub fn check(&self) -> Result<()> {
        Self::check_scope(&self.project, self.environment.as_deref())?;
        check_segment("version", &self.version)?;

        let name = self.file_name();
        let (project, version) = parse_file_name(&name)?;
        if project != self.project || version != self.version {
            return Err(Error::InvalidFilenameFormat { name });
        }
        Ok(())
    }
}

/// One directory or file name component: non-empty, no separators, not `.`
/// or `..`.
fn check_segment(label: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(Error::InvalidSegment {
            label,
            value: value.to_string(),
        });
    }
    Ok(())
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.project, self.version)?;
        if let Some(env) = &self.environment {
            write!(f, " ({})", env)?;
        }
        Ok(())
    }
}

/// Split a `<project>@<version>.json` file name into its parts.
pub fn parse_file_name(name: &str) -> Result<(String, String)> {
    FILE_NAME_PATTERN
        .captures(name)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .ok_or_else(|| Error::InvalidFilenameFormat {
            name: name.to_string(),
        })
}
