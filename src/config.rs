//! # Configuration
//!
//! Inkpad keeps all durable state under one data directory:
//!
//! ```text
//! <data_dir>/
//! ├── store/          key/value files (FsBackend)
//! └── notes_images/   imported note images (AssetStore)
//! ```
//!
//! [`InkpadConfig`] is managed by [`confique`]: compiled defaults,
//! optionally overridden by a TOML file. The data directory defaults to
//! the OS-appropriate application data location (via the `directories`
//! crate) and can be pointed elsewhere for tests or portable installs.

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

const APP_NAME: &str = "inkpad";

/// Configuration for inkpad, stored in `inkpad.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InkpadConfig {
    /// Root directory for all persisted data. Platform default when absent.
    pub data_dir: Option<PathBuf>,

    /// Name of the subdirectory images are copied into.
    #[config(default = "notes_images")]
    pub asset_dir: String,
}

impl Default for InkpadConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            asset_dir: "notes_images".to_string(),
        }
    }
}

impl InkpadConfig {
    /// Load configuration, layering `file` (when given and present) over
    /// the compiled defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let builder = Self::builder();
        let config = match file {
            Some(path) => builder.file(path).load()?,
            None => builder.load()?,
        };
        Ok(config)
    }

    /// The resolved data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Where the key/value store lives.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir().join("store")
    }

    /// Where imported images live.
    pub fn asset_root(&self) -> PathBuf {
        self.data_dir().join(&self.asset_dir)
    }
}

/// OS-appropriate per-user data directory, falling back to a dotted
/// directory in the working directory when the platform gives us nothing.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_NAME)))
}
