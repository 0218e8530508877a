//! Generated artifact files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{Site, SiteError};

pub(crate) const ROUTES_FILE: &str = "routes.json";
pub(crate) const SIDEBARS_FILE: &str = "sidebars.json";
pub(crate) const DOCS_FILE: &str = "docs.json";
pub(crate) const SITE_FILE: &str = "site.json";

impl Site<'_> {
    /// Write `routes.json`, `sidebars.json`, `docs.json` and `site.json`
    /// into `out_dir`, creating it if needed.
    ///
    /// Output is pretty-printed with a trailing newline; the same inputs
    /// always produce byte-identical files.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file write fails.
    pub fn write_artifacts(&self, out_dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
        fs::create_dir_all(out_dir).map_err(|source| SiteError::Write {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let files = [
            (ROUTES_FILE, self.manifest().to_json()?),
            (SIDEBARS_FILE, to_json(SIDEBARS_FILE, self.sidebar_view())?),
            (DOCS_FILE, to_json(DOCS_FILE, self.metadata())?),
            (SITE_FILE, to_json(SITE_FILE, &self.data())?),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (name, json) in files {
            let path = out_dir.join(name);
            fs::write(&path, json).map_err(|source| SiteError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "Wrote artifact");
            written.push(path);
        }

        Ok(written)
    }
}

fn to_json<T: Serialize + ?Sized>(name: &'static str, value: &T) -> Result<String, SiteError> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|source| SiteError::Serialize { name, source })?;
    json.push('\n');
    Ok(json)
}
