//! Terminal configuration.
//!
//! Loaded from TOML. Every field has a default so an empty table is a valid
//! config; the compiled-in defaults match the original site's feel.

use serde::Deserialize;

use crate::error::{Result, TermError};
use crate::theme::Theme;

/// Tunable terminal behavior: prompt identity, reveal pacing, default theme,
/// and the welcome banner.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// User shown in `whoami` and the prompt.
    #[serde(default = "default_user")]
    pub user: String,

    /// Host name shown in the prompt.
    #[serde(default = "default_host")]
    pub host: String,

    /// Base delay per revealed character, in milliseconds.
    #[serde(default = "default_char_delay")]
    pub char_delay_ms: u32,

    /// Upper bound of the random extra delay added per character.
    #[serde(default = "default_char_jitter")]
    pub char_jitter_ms: u32,

    /// Pause inserted at each line break during reveal.
    #[serde(default = "default_newline_delay")]
    pub newline_delay_ms: u32,

    /// Name of the theme active at session start.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Banner revealed when the session opens.
    #[serde(default = "default_welcome")]
    pub welcome: String,
}

fn default_user() -> String {
    "guest".to_string()
}

fn default_host() -> String {
    "portfolio".to_string()
}

fn default_char_delay() -> u32 {
    10
}

fn default_char_jitter() -> u32 {
    20
}

fn default_newline_delay() -> u32 {
    100
}

fn default_theme() -> String {
    "vscode".to_string()
}

fn default_welcome() -> String {
    "Welcome to the portfolio terminal. Type 'help' to begin.".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            char_delay_ms: default_char_delay(),
            char_jitter_ms: default_char_jitter(),
            newline_delay_ms: default_newline_delay(),
            theme: default_theme(),
            welcome: default_welcome(),
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: TerminalConfig = toml::from_str(text)?;
        config.validate()?;
        log::debug!("config parsed (user: {}, theme: {})", config.user, config.theme);
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The configured startup theme.
    pub fn startup_theme(&self) -> Result<Theme> {
        Theme::parse(&self.theme).ok_or_else(|| {
            TermError::Config(format!(
                "unknown theme '{}' (valid: {})",
                self.theme,
                Theme::list()
            ))
        })
    }

    fn validate(&self) -> Result<()> {
        if self.user.is_empty() {
            return Err(TermError::Config("user must not be empty".to_string()));
        }
        self.startup_theme()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_gives_defaults() {
        let config = TerminalConfig::from_toml_str("").unwrap();
        assert_eq!(config.user, "guest");
        assert_eq!(config.char_delay_ms, 10);
        assert_eq!(config.startup_theme().unwrap(), Theme::Vscode);
    }

    #[test]
    fn partial_override() {
        let config = TerminalConfig::from_toml_str(
            r#"
            user = "manoj"
            theme = "retro"
            char_delay_ms = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.user, "manoj");
        assert_eq!(config.startup_theme().unwrap(), Theme::Retro);
        assert_eq!(config.char_delay_ms, 5);
        // Unset fields keep defaults.
        assert_eq!(config.newline_delay_ms, 100);
    }

    #[test]
    fn unknown_theme_is_config_error() {
        let err = TerminalConfig::from_toml_str(r#"theme = "neon""#).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("unknown theme 'neon'"));
        assert!(msg.contains("cyberpunk"));
    }

    #[test]
    fn empty_user_rejected() {
        let err = TerminalConfig::from_toml_str(r#"user = """#).unwrap_err();
        assert!(format!("{err}").contains("user"));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = TerminalConfig::from_toml_str("user = [[[").unwrap_err();
        assert!(format!("{err}").contains("TOML parse error"));
    }
}
