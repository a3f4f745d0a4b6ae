use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash-preview-09-2025".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Generative endpoint credential; `GEMINI_API_KEY` overrides at runtime
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Optional shell command whose stdout becomes the voice transcription
    #[serde(default)]
    pub stt_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            image_model: default_image_model(),
            text_model: default_text_model(),
            stt_command: String::new(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".trainer-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Where generated visuals are written
    pub fn visual_dir(&self) -> PathBuf {
        Self::config_dir()
            .unwrap_or_else(env::temp_dir)
            .join("visuals")
    }

    /// Diagnostics log; stdout belongs to the TUI
    pub fn log_path() -> PathBuf {
        Self::config_dir()
            .unwrap_or_else(env::temp_dir)
            .join("trainer-tui.log")
    }

    /// The credential actually used: environment first, then the config
    /// file. An absent key is not specially detected; it surfaces as a
    /// request failure once the retries exhaust.
    pub fn resolved_api_key(&self) -> String {
        env::var("GEMINI_API_KEY").unwrap_or_else(|_| self.api_key.clone())
    }

    /// Recognizer command for voice input, None when unset
    pub fn stt_command(&self) -> Option<String> {
        if self.stt_command.trim().is_empty() {
            None
        } else {
            Some(self.stt_command.clone())
        }
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_key":"abc"}"#).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_base, default_api_base());
        assert_eq!(config.image_model, default_image_model());
        assert_eq!(config.stt_command(), None);
    }

    #[test]
    fn test_stt_command_blank_is_none() {
        let mut config = Config::default();
        config.stt_command = "  ".to_string();
        assert_eq!(config.stt_command(), None);
        config.stt_command = "arecord | transcribe".to_string();
        assert!(config.stt_command().is_some());
    }
}
