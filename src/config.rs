use std::path::PathBuf;
use std::env;
use std::fs;
use std::io;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub env_name: String,
    /// Print each grammar rule as the parser enters it.
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_banner() -> bool {
    true
}

fn env_name() -> String {
    env::var("LWC_ENV").unwrap_or_else(|_| String::from("default"))
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

impl Default for Config {
    fn default() -> Self {
        Config {
            env_name: env_name(),
            verbose: false,
            banner: default_banner(),
        }
    }
}

impl Config {
    /// Loads the config file for the current environment. A missing or
    /// malformed file falls back to defaults; `LWC_VERBOSE` wins over both.
    pub fn load() -> Self {
        let mut config = fs::read_to_string(Self::get_config_path())
            .ok()
            .and_then(|contents| Self::from_json(&contents))
            .unwrap_or_default();

        if let Some(verbose) = env_flag("LWC_VERBOSE") {
            config.verbose = verbose;
        }

        config
    }

    pub fn from_json(contents: &str) -> Option<Self> {
        serde_json::from_str(contents).ok()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save(&self) -> io::Result<()> {
        let config_path = Self::get_config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = self.to_json()?;
        fs::write(&config_path, contents)
    }

    pub fn get_config_path() -> PathBuf {
        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };

        PathBuf::from(home.unwrap_or_else(|_| String::from(".")))
            .join(".lwc")
            .join(env_name())
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = Config::from_json(r#"{ "env_name": "ci" }"#).unwrap();
        assert_eq!(config.env_name, "ci");
        assert!(!config.verbose);
        assert!(config.banner);
    }

    #[test]
    fn json_round_trips() {
        let config = Config {
            env_name: String::from("dev"),
            verbose: true,
            banner: false,
        };
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json), Some(config));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert_eq!(Config::from_json("not json"), None);
    }
}
