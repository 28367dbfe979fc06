use super::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-based backend: the value for `key` lives in `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The per-user data directory (e.g. `~/.local/share/notekeep`), if the OS reports one.
    pub fn default_root() -> Option<PathBuf> {
        ProjectDirs::from("com", "notekeep", "notekeep").map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }

    fn ensure_dir(&self) -> StorageResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StorageError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.value_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.ensure_dir()?;

        let target = self.value_path(key);
        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", sanitize_key(key), Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(StorageError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(StorageError::Io(e));
        }
        Ok(())
    }
}

fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
