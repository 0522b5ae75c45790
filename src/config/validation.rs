//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use linebot_proto::response::builtins;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Smallest line limit that still fits a short command.
const MIN_LINE_LEN: usize = 16;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bot.nick is required")]
    MissingNick,
    #[error("bot.nick must not contain whitespace, '!' or ':', got '{0}'")]
    InvalidNick(String),
    #[error("dispatcher.commands names an unknown command: '{0}'")]
    UnknownCommand(String),
    #[error("dispatcher.commands lists '{0}' more than once")]
    DuplicateCommand(String),
    #[error("limits.max_line_len must be at least 16, got {0}")]
    LineLenTooSmall(usize),
    #[error("logging.level is not a valid filter directive: '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let nick = &config.bot.nick;
    if nick.is_empty() {
        errors.push(ValidationError::MissingNick);
    } else if nick.contains(|c: char| c.is_whitespace() || c == '!' || c == ':') {
        errors.push(ValidationError::InvalidNick(nick.clone()));
    }

    let mut seen: Vec<&str> = Vec::new();
    for name in &config.dispatcher.commands {
        if builtins::lookup(name).is_none() {
            errors.push(ValidationError::UnknownCommand(name.clone()));
        } else if seen.contains(&name.as_str()) {
            errors.push(ValidationError::DuplicateCommand(name.clone()));
        } else {
            seen.push(name);
        }
    }

    if config.limits.max_line_len < MIN_LINE_LEN {
        errors.push(ValidationError::LineLenTooSmall(config.limits.max_line_len));
    }

    if EnvFilter::try_new(&config.logging.level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_nick_fails() {
        let config: Config = toml::from_str("[bot]\nnick = \"\"\n").unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::MissingNick)));
    }

    #[test]
    fn test_nick_with_space_fails() {
        let config: Config = toml::from_str("[bot]\nnick = \"two words\"\n").unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidNick(_))));
    }

    #[test]
    fn test_unknown_command_fails() {
        let toml = r#"
[dispatcher]
commands = ["reverse", "method_name"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::UnknownCommand(name) if name == "method_name"
        ));
    }

    #[test]
    fn test_duplicate_command_fails() {
        let config: Config =
            toml::from_str("[dispatcher]\ncommands = [\"echo\", \"echo\"]\n").unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::DuplicateCommand(_))));
    }

    #[test]
    fn test_empty_command_list_passes() {
        let config: Config = toml::from_str("[dispatcher]\ncommands = []\n").unwrap();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_multiple_errors_reported() {
        let toml = r#"
[bot]
nick = ""

[limits]
max_line_len = 4
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::LineLenTooSmall(4))));
    }

    #[test]
    fn test_invalid_log_level_fails() {
        let config: Config = toml::from_str("[logging]\nlevel = \"linebot=loud\"\n").unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidLogLevel(_))));
    }
}
