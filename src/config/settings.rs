use crate::config::toml_config::TomlConfig;
use crate::core::client::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use std::time::Duration;

/// Fully resolved settings: command line over TOML file over built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub model: String,
    pub output_path: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub raw_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            output_path: None,
            timeout_seconds: None,
            raw_output: false,
        }
    }
}

impl Settings {
    pub fn with_file(mut self, file: &TomlConfig) -> Self {
        if let Some(endpoint) = &file.backend.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(model) = &file.backend.model {
            self.model = model.clone();
        }
        if let Some(timeout) = file.backend.timeout_seconds {
            self.timeout_seconds = Some(timeout);
        }
        if let Some(path) = &file.output.path {
            self.output_path = Some(path.clone());
        }
        if let Some(raw) = file.output.raw {
            self.raw_output = raw;
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn raw_output(&self) -> bool {
        self.raw_output
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("model", &self.model)?;

        if let Some(path) = &self.output_path {
            validate_path("output", path)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout", timeout, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_ollama() {
        let settings = Settings::default();

        assert_eq!(settings.endpoint(), "http://localhost:11434/api/generate");
        assert_eq!(settings.model(), "gemma3:4b");
        assert_eq!(settings.output_path(), None);
        assert_eq!(settings.timeout(), None);
        assert!(!settings.raw_output());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = TomlConfig::from_toml_str(
            "[backend]\nmodel = \"llama3.2\"\ntimeout_seconds = 30\n[output]\nraw = true\n",
        )
        .unwrap();

        let settings = Settings::default().with_file(&file);

        assert_eq!(settings.model, "llama3.2");
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.timeout(), Some(Duration::from_secs(30)));
        assert!(settings.raw_output);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_endpoint = Settings {
            endpoint: "localhost:11434".to_string(),
            ..Settings::default()
        };
        assert!(bad_endpoint.validate().is_err());

        let blank_model = Settings {
            model: "  ".to_string(),
            ..Settings::default()
        };
        assert!(blank_model.validate().is_err());

        let zero_timeout = Settings {
            timeout_seconds: Some(0),
            ..Settings::default()
        };
        assert!(zero_timeout.validate().is_err());

        let empty_output = Settings {
            output_path: Some(String::new()),
            ..Settings::default()
        };
        assert!(empty_output.validate().is_err());
    }
}
