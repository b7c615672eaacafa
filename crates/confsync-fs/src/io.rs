//! Raw file I/O for store documents and settings files

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result};

/// Write content to a file, creating missing parent directories.
///
/// Content goes to a temp file in the target directory first and is renamed
/// over the destination, so readers never observe a half-written document.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    if let Err(error) = write_and_replace(&temp_path, &native_path, content) {
        if let Err(cleanup) = fs::remove_file(&temp_path)
            && cleanup.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %temp_path.display(), error = %cleanup, "could not remove temp file");
        }
        return Err(error);
    }

    tracing::debug!(path = %path, bytes = content.len(), "wrote file");
    Ok(())
}

/// Fill `temp_path` under an exclusive lock and move it over `target`.
fn write_and_replace(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    drop(temp_file);

    fs::rename(temp_path, target).map_err(|e| Error::io(target, e))
}

/// Read text content from a file.
///
/// A missing file surfaces as [`Error::FileNotFound`].
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &NormalizedPath) -> Result<T> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_native(),
        message: e.to_string(),
    })
}

/// Serialize a value as pretty-printed JSON and write it.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &NormalizedPath, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
        path: path.to_native(),
        message: e.to_string(),
    })?;
    content.push('\n');
    write_text(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    #[test]
    fn test_write_atomic_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("atlas/env/qa/atlas@1.json");

        write_atomic(&path, b"{}").unwrap();

        assert_eq!(read_text(&path).unwrap(), "{}");
        assert!(leftovers(&temp.path().join("atlas/env/qa")).is_empty());
    }

    #[test]
    fn test_failed_replace_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("atlas@1.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupied"), "x").unwrap();

        let result = write_atomic(&NormalizedPath::new(&target), b"{}");

        assert!(result.is_err());
        assert!(target.is_dir());
        assert!(leftovers(temp.path()).is_empty());
    }
}
