use std::env;
use serde::{Deserialize, Serialize};

// OutputFormat selects how the console renders command responses
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<String> for OutputFormat {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub json_logs: bool,
    pub output: OutputFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            output: OutputFormat::Text,
        }
    }

    // Reads LMS_BRANCH, LMS_LOG_LEVEL, LMS_LOG_JSON and LMS_OUTPUT; anything unset keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Configuration::new(lookup("LMS_BRANCH").as_deref().unwrap_or("main"));
        if let Some(level) = lookup("LMS_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(json) = lookup("LMS_LOG_JSON") {
            config.json_logs = matches!(json.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(output) = lookup("LMS_OUTPUT") {
            config.output = OutputFormat::from(output);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{Configuration, OutputFormat};

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!("info", config.log_level.as_str());
        assert!(!config.json_logs);
        assert_eq!(OutputFormat::Text, config.output);
    }

    #[test]
    fn test_should_build_config_from_lookup() {
        let vars = HashMap::from([
            ("LMS_BRANCH", "downtown"),
            ("LMS_LOG_LEVEL", "debug"),
            ("LMS_LOG_JSON", "true"),
            ("LMS_OUTPUT", "JSON"),
        ]);
        let config = Configuration::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!("downtown", config.branch_id.as_str());
        assert_eq!("debug", config.log_level.as_str());
        assert!(config.json_logs);
        assert_eq!(OutputFormat::Json, config.output);
    }

    #[test]
    fn test_should_default_missing_vars() {
        let config = Configuration::from_lookup(|_| None);
        assert_eq!(Configuration::new("main"), config);
    }
}
