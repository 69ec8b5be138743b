//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;
use crate::config::validation::ValidationError;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML document without validating it.
///
/// Validation runs once the command-line overrides have been applied.
pub fn parse_config(content: &str) -> Result<ProxyConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_document() {
        let config = parse_config(
            r#"
            [backend]
            service_name = "backend"
            namespace = "default"
            service_port = "9000"

            [upstream]
            host = "shop.example.com"
            connect_to = "127.0.0.1:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.service_name, "backend");
        assert_eq!(config.backend.namespace, "default");
        assert_eq!(config.backend.service_port, "9000");
        assert_eq!(config.upstream.host, "shop.example.com");
        assert_eq!(config.upstream.connect_to, Some("127.0.0.1:9000".parse().unwrap()));
        // Untouched sections keep their defaults
        assert_eq!(config.listener.port, 8080);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), ProxyConfig::default());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = parse_config("[observability]\nlog_format = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_file_without_validating() {
        let path = std::env::temp_dir().join(format!(
            "default-backend-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[backend]\nservice_name = \"\"\nservice_port = \"http\"\n").unwrap();

        let config = read_config(&path).unwrap();
        let _ = fs::remove_file(&path);

        // Overrides may still fill these in, so reading leaves them be.
        assert_eq!(config.backend.service_name, "");
        let errors = crate::config::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_config(Path::new("/nonexistent/default-backend.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
