//! Runtime configuration.
//!
//! Loaded from environment variables with defaults, or built explicitly
//! for tests.

use std::path::PathBuf;

/// Output format of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Configuration shared by the use-case layer and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionConfig {
    /// Directory holding one JSON file per proposition.
    pub state_dir: PathBuf,
    /// Log output format.
    pub log_format: LogFormat,
    /// Days given to a candidate to return requested documents.
    pub delai_reclamation_documents_jours: u32,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(".osis").join("propositions"),
            log_format: LogFormat::Text,
            delai_reclamation_documents_jours: DEFAULT_DELAI_RECLAMATION_JOURS,
        }
    }
}

const DEFAULT_DELAI_RECLAMATION_JOURS: u32 = 15;
const MAX_DELAI_RECLAMATION_JOURS: u32 = 365;

impl AdmissionConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `OSIS_STATE_DIR` (default: `.osis/propositions`)
    /// - `OSIS_LOG_FORMAT`: `text` or `json` (default: `text`)
    /// - `OSIS_DELAI_RECLAMATION_DOCUMENTS_JOURS`: 1..=365 (default: 15)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let state_dir = lookup("OSIS_STATE_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.state_dir);

        let log_format = match lookup("OSIS_LOG_FORMAT").as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        let delai_reclamation_documents_jours = match lookup("OSIS_DELAI_RECLAMATION_DOCUMENTS_JOURS") {
            None => defaults.delai_reclamation_documents_jours,
            Some(raw) => {
                let jours: u32 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidDelai(raw.clone()))?;
                if jours == 0 || jours > MAX_DELAI_RECLAMATION_JOURS {
                    return Err(ConfigError::InvalidDelai(raw));
                }
                jours
            }
        };

        Ok(Self {
            state_dir,
            log_format,
            delai_reclamation_documents_jours,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OSIS_LOG_FORMAT must be `text` or `json`, got {0:?}")]
    InvalidLogFormat(String),
    #[error("OSIS_DELAI_RECLAMATION_DOCUMENTS_JOURS must be a number of days between 1 and 365, got {0:?}")]
    InvalidDelai(String),
}
