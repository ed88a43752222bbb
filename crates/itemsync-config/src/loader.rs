//! Loading behavior files from disk

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::CopyConfig;
use crate::{Error, Result};

/// A behavior file: any number of `[[behavior]]` tables.
///
/// Files with no behaviors are legal; they configure nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorFile {
    /// Configured behaviors, in file order.
    #[serde(default, rename = "behavior")]
    pub behaviors: Vec<CopyConfig>,
}

impl BehaviorFile {
    /// Parse behaviors from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load behaviors from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: Self = toml::from_str(&text).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            "Loaded {} behavior(s) from {}",
            file.behaviors.len(),
            path.display()
        );
        Ok(file)
    }

    /// Validate every behavior, stopping at the first hard error.
    pub fn validate(&self) -> Result<()> {
        for behavior in &self.behaviors {
            behavior.validate()?;
        }
        Ok(())
    }
}
