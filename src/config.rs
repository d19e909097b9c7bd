//! Configuration loaded from `cvmatch.toml`.
//!
//! Values missing from the file fall back to defaults. The environment
//! variable `CVMATCH_ENDPOINT` takes precedence over the file for the
//! service endpoint.

use std::path::Path;

use serde::Deserialize;

use crate::api::AnalysisMode;
use crate::error::CvmatchError;

const CONFIG_FILE: &str = "cvmatch.toml";

/// Top-level configuration loaded from `cvmatch.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CvmatchConfig {
    /// Base URL of the analysis service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Mode used when none is given on the command line.
    #[serde(default)]
    pub default_mode: AnalysisMode,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for CvmatchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_mode: AnalysisMode::Quick,
        }
    }
}

impl CvmatchConfig {
    /// Loads the configuration from `cvmatch.toml` in the current directory,
    /// falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self, CvmatchError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, CvmatchError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<CvmatchConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment variable takes precedence over the file.
        if let Ok(endpoint) = std::env::var("CVMATCH_ENDPOINT")
            && !endpoint.is_empty()
        {
            config.endpoint = endpoint;
        }

        if config.endpoint.trim().is_empty() {
            return Err(CvmatchError::Config(
                "endpoint must not be empty".to_string(),
            ));
        }

        // The client appends `/analyze` itself.
        config.endpoint = config.endpoint.trim_end_matches('/').to_string();

        Ok(config)
    }
}
