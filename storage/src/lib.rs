//! File store for captured screenshots.
//!
//! One root directory, flat namespace. File names never reach the
//! filesystem without sanitisation.

use std::path::{Path, PathBuf};

#[cfg(feature = "test")]
pub mod tst;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: &'static str },

    #[error("file '{name}' not found")]
    NotFound { name: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{path}': {source}")]
    WithPath {
        path: String,
        #[source]
        source: Box<Self>,
    },
}

impl Error {
    pub fn with_path(path: impl Into<String>) -> impl FnOnce(Self) -> Self {
        let path = path.into();
        move |source| {
            Error::WithPath {
                path,
                source: Box::new(source),
            }
        }
    }

    fn invalid(
        name: &str,
        reason: &'static str,
    ) -> Self {
        Error::InvalidFileName {
            name: name.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn default_root() -> PathBuf {
    PathBuf::from("./static")
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(alias = "ROOT", default = "default_root")]
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// Screenshot store rooted at a single directory.
pub struct ScreenshotStore {
    root: PathBuf,
}

impl ScreenshotStore {
    /// Opens the store, creating the root directory if needed.
    pub async fn new(config: &Config) -> Result<Self> {
        tokio::fs::create_dir_all(&config.root)
            .await
            .map_err(Error::from)
            .map_err(Error::with_path(config.root.display().to_string()))?;
        Ok(Self {
            root: config.root.clone(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a file name inside the root, rejecting anything that could
    /// escape it.
    pub fn path_for(
        &self,
        name: &str,
    ) -> Result<PathBuf> {
        Ok(self.root.join(sanitize(name)?))
    }

    pub async fn save(
        &self,
        name: &str,
        bytes: &[u8],
    ) -> Result<()> {
        let path = self.path_for(name)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(Error::from)
            .map_err(Error::with_path(path.display().to_string()))?;
        tracing::debug!("saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    pub async fn read(
        &self,
        name: &str,
    ) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound {
                    name: name.to_string(),
                })
            },
            Err(e) => Err(Error::with_path(path.display().to_string())(e.into())),
        }
    }

    pub async fn delete(
        &self,
        name: &str,
    ) -> Result<()> {
        let path = self.path_for(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!("deleted {}", path.display());
                Ok(())
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound {
                    name: name.to_string(),
                })
            },
            Err(e) => Err(Error::with_path(path.display().to_string())(e.into())),
        }
    }
}

fn sanitize(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(Error::invalid(name, "empty"));
    }
    if name == "." || name == ".." {
        return Err(Error::invalid(name, "reserved"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::invalid(name, "path separators are not allowed"));
    }
    if name.contains('\0') {
        return Err(Error::invalid(name, "NUL is not allowed"));
    }
    Ok(name)
}
