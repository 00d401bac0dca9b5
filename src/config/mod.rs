//! Step configuration: navigation targets, display texts and the optional
//! expiry check.
//!
//! Every field has a default, so an empty JSON object is a complete
//! configuration.
//!
//! ```rust
//! use checkout_step::config::StepConfig;
//!
//! let config = StepConfig::from_json(r#"{"paths": {"nextStep": "/confirm"}}"#).unwrap();
//!
//! assert_eq!(config.paths.home, "/");
//! assert_eq!(config.paths.next_step, "/confirm");
//! assert!(!config.reject_expired_cards);
//! ```

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Where the step navigates to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepPaths {
    /// Start of the wizard, used when the inbound context is unusable
    pub home: String,
    /// Step that receives the outbound context
    pub next_step: String,
}

impl Default for StepPaths {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            next_step: "/step4".to_string(),
        }
    }
}

/// Heading texts of the step layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepTexts {
    pub title: String,
    pub subtitle: String,
}

impl Default for StepTexts {
    fn default() -> Self {
        Self {
            title: "Aguarde".to_string(),
            subtitle: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepConfig {
    pub paths: StepPaths,
    /// Texts shown before the guard has run
    pub texts: StepTexts,
    /// Title that replaces `texts.title` once the step is ready
    pub ready_title: String,
    /// Also reject cards whose expiry month is already over
    pub reject_expired_cards: bool,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            paths: StepPaths::default(),
            texts: StepTexts::default(),
            ready_title: "Método de pagamento".to_string(),
            reject_expired_cards: false,
        }
    }
}

impl StepConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: StepConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.home.trim().is_empty() {
            return Err(ConfigError::EmptyPath { field: "home" });
        }
        if self.paths.next_step.trim().is_empty() {
            return Err(ConfigError::EmptyPath { field: "nextStep" });
        }
        Ok(())
    }
}
