// src/resources.rs
//! File names in commands are resource keys looked up under a fixed
//! root directory, never arbitrary filesystem paths.

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{CcwcError, Result};

#[derive(Debug, Clone)]
pub struct ResourceDir {
    root: PathBuf,
}

impl ResourceDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the named resource as UTF-8 text.
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;
        std::fs::read_to_string(path).map_err(|source| CcwcError::FileRead {
            name: name.to_string(),
            source,
        })
    }

    // Absolute names and names traversing out of the root are rejected
    // the same way a missing file is.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir));
        if escapes {
            return Err(CcwcError::FileRead {
                name: name.to_string(),
                source: io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "name escapes the resource root",
                ),
            });
        }
        Ok(self.root.join(relative))
    }
}
