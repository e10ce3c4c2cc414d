//! Project configuration loaded from `.adr.toml`.
//!
//! Every key is optional; command-line flags override file values.
//! ```toml
//! dir = "docs/adr"
//! template = "nygard"
//! status = "Proposed"
//! index = "docs/adr/index.md"
//! project_name = "Payments"
//! project_url = "https://example.com/payments"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AdrError;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".adr.toml";

/// Default record directory.
pub const DEFAULT_DIR: &str = "docs/adr";

/// Default template identifier.
pub const DEFAULT_TEMPLATE: &str = "madr";

/// Status given to new records unless overridden.
pub const DEFAULT_STATUS: &str = "Proposed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdrConfig {
    pub dir: PathBuf,
    pub template: String,
    pub status: String,
    /// Default output path of `adr index`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
}

impl Default for AdrConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            template: DEFAULT_TEMPLATE.to_string(),
            status: DEFAULT_STATUS.to_string(),
            index: None,
            project_name: None,
            project_url: None,
        }
    }
}

impl AdrConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AdrError::Config`] if the text is not valid config TOML.
    pub fn from_toml(text: &str) -> Result<Self, AdrError> {
        toml::from_str(text).map_err(|e| AdrError::Config(e.to_string()))
    }

    /// Load a config file.
    ///
    /// A missing file is only an error when `required` is set; otherwise
    /// the defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AdrError::Io`] if the file cannot be read and
    /// [`AdrError::Config`] if it does not parse.
    pub fn load(path: &Path, required: bool) -> Result<Self, AdrError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text)
                .map_err(|e| AdrError::Config(format!("{}: {e}", path.display()))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}
