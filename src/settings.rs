use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Initial expand/collapse state of the rendered API documentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocExpansion {
    None,
    #[default]
    List,
    Full,
}

/// Options handed to the API documentation UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDocsSettings {
    pub url: String,
    pub app_url: String,
    pub app_name: String,
    pub doc_expansion: DocExpansion,
    pub hide_url_input: bool,
}

impl Default for ApiDocsSettings {
    fn default() -> Self {
        ApiDocsSettings {
            url: "/api/v1/docs.json".to_string(),
            app_url: "/".to_string(),
            app_name: "API".to_string(),
            doc_expansion: DocExpansion::List,
            hide_url_input: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Title of the root page.
    pub app_name: String,
    /// Element id the front-end application mounts into.
    pub mount_id: String,
    pub api_docs: ApiDocsSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            app_name: "Ransackable".to_string(),
            mount_id: "root".to_string(),
            api_docs: ApiDocsSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
