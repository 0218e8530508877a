//! Sidebar file loading.
//!
//! The format is chosen by file extension: `.yaml`/`.yml` or `.json`.

use std::path::Path;

use crate::{SidebarError, Sidebars};

impl Sidebars {
    /// Load and structurally validate a sidebar file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, does not parse, or fails [`Sidebars::validate`].
    pub fn load(path: &Path) -> Result<Self, SidebarError> {
        let content = std::fs::read_to_string(path).map_err(|source| SidebarError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let sidebars = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(SidebarError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(
            path = %path.display(),
            sidebars = sidebars.len(),
            documents = sidebars.doc_refs().len(),
            "Loaded sidebars"
        );

        Ok(sidebars)
    }

    /// Parse and validate sidebars from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or validation fails.
    pub fn from_yaml_str(content: &str) -> Result<Self, SidebarError> {
        let sidebars: Self = serde_yaml::from_str(content)?;
        sidebars.validate()?;
        Ok(sidebars)
    }

    /// Parse and validate sidebars from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or validation fails.
    pub fn from_json_str(content: &str) -> Result<Self, SidebarError> {
        let sidebars: Self = serde_json::from_str(content)?;
        sidebars.validate()?;
        Ok(sidebars)
    }
}
