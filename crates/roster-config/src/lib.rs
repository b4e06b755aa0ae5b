use std::env;

use thiserror::Error;

pub const SPACE_ID_VAR: &str = "CONTENTFUL_SPACE_ID";
pub const ENVIRONMENT_VAR: &str = "CONTENTFUL_ENVIRONMENT";
pub const DELIVERY_TOKEN_VAR: &str = "CONTENTFUL_DELIVERY_TOKEN";
pub const PREVIEW_TOKEN_VAR: &str = "CONTENTFUL_PREVIEW_TOKEN";
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const BACKEND_PUBLIC_KEY_VAR: &str = "BACKEND_PUBLIC_KEY";

pub const DEFAULT_ENVIRONMENT: &str = "master";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cms: CmsConfig,
    pub backend: Option<BackendConfig>,
}

#[derive(Debug, Clone)]
pub struct CmsConfig {
    pub space_id: String,
    pub environment: String,
    pub delivery_token: String,
    pub preview_token: Option<String>,
}

/// Auxiliary data/auth service. Only the connection settings live here;
/// no client for it exists in this workspace.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub public_key: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("{0} is set but {1} is missing")]
    IncompleteBackend(&'static str, &'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl CmsConfig {
    /// Token the GraphQL client should authenticate with. Preview mode is
    /// an error unless a preview token was configured.
    pub fn bearer_token(&self, preview: bool) -> Result<&str> {
        if preview {
            self.preview_token
                .as_deref()
                .ok_or(ConfigError::MissingVar(PREVIEW_TOKEN_VAR))
        } else {
            Ok(&self.delivery_token)
        }
    }
}

pub fn load() -> Result<AppConfig> {
    // A missing .env just means the plain process environment applies.
    let _ = dotenv::dotenv();
    from_lookup(|key| env::var(key).ok())
}

pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<AppConfig> {
    let space_id = required(&lookup, SPACE_ID_VAR)?;
    let delivery_token = required(&lookup, DELIVERY_TOKEN_VAR)?;
    let environment = optional(&lookup, ENVIRONMENT_VAR)
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());
    let preview_token = optional(&lookup, PREVIEW_TOKEN_VAR);

    let backend = match (
        optional(&lookup, BACKEND_URL_VAR),
        optional(&lookup, BACKEND_PUBLIC_KEY_VAR),
    ) {
        (Some(url), Some(public_key)) => Some(BackendConfig { url, public_key }),
        (None, None) => None,
        (Some(_), None) => {
            return Err(ConfigError::IncompleteBackend(
                BACKEND_URL_VAR,
                BACKEND_PUBLIC_KEY_VAR,
            ))
        }
        (None, Some(_)) => {
            return Err(ConfigError::IncompleteBackend(
                BACKEND_PUBLIC_KEY_VAR,
                BACKEND_URL_VAR,
            ))
        }
    };

    Ok(AppConfig {
        cms: CmsConfig {
            space_id,
            environment,
            delivery_token,
            preview_token,
        },
        backend,
    })
}

fn optional(lookup: impl Fn(&str) -> Option<String>, key: &'static str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(lookup: impl Fn(&str) -> Option<String>, key: &'static str) -> Result<String> {
    optional(lookup, key).ok_or(ConfigError::MissingVar(key))
}

#[cfg(test)]
mod tests {
    use super::{
        from_lookup, ConfigError, DEFAULT_ENVIRONMENT, DELIVERY_TOKEN_VAR, SPACE_ID_VAR,
    };
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn loads_minimal_configuration() {
        let lookup = lookup_from(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_DELIVERY_TOKEN", "tok"),
        ]);
        let config = from_lookup(lookup).expect("load");
        assert_eq!(config.cms.space_id, "space123");
        assert_eq!(config.cms.environment, DEFAULT_ENVIRONMENT);
        assert!(config.cms.preview_token.is_none());
        assert!(config.backend.is_none());
    }

    #[test]
    fn missing_space_id_names_the_variable() {
        let lookup = lookup_from(&[("CONTENTFUL_DELIVERY_TOKEN", "tok")]);
        let err = from_lookup(lookup).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(SPACE_ID_VAR)));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let lookup = lookup_from(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_DELIVERY_TOKEN", "   "),
        ]);
        let err = from_lookup(lookup).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(DELIVERY_TOKEN_VAR)));
    }

    #[test]
    fn values_are_trimmed() {
        let lookup = lookup_from(&[
            ("CONTENTFUL_SPACE_ID", " space123 "),
            ("CONTENTFUL_DELIVERY_TOKEN", "tok\n"),
            ("CONTENTFUL_ENVIRONMENT", " staging "),
        ]);
        let config = from_lookup(lookup).expect("load");
        assert_eq!(config.cms.space_id, "space123");
        assert_eq!(config.cms.delivery_token, "tok");
        assert_eq!(config.cms.environment, "staging");
    }

    #[test]
    fn backend_requires_both_variables() {
        let lookup = lookup_from(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_DELIVERY_TOKEN", "tok"),
            ("BACKEND_URL", "https://backend.example.com"),
        ]);
        let err = from_lookup(lookup).unwrap_err();
        assert!(matches!(err, ConfigError::IncompleteBackend(_, _)));
    }

    #[test]
    fn backend_loads_when_complete() {
        let lookup = lookup_from(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_DELIVERY_TOKEN", "tok"),
            ("BACKEND_URL", "https://backend.example.com"),
            ("BACKEND_PUBLIC_KEY", "pk_live"),
        ]);
        let config = from_lookup(lookup).expect("load");
        let backend = config.backend.expect("backend");
        assert_eq!(backend.url, "https://backend.example.com");
        assert_eq!(backend.public_key, "pk_live");
    }

    #[test]
    fn bearer_token_selects_preview_when_configured() {
        let lookup = lookup_from(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_DELIVERY_TOKEN", "delivery"),
            ("CONTENTFUL_PREVIEW_TOKEN", "preview"),
        ]);
        let config = from_lookup(lookup).expect("load");
        assert_eq!(config.cms.bearer_token(false).expect("token"), "delivery");
        assert_eq!(config.cms.bearer_token(true).expect("token"), "preview");
    }

    #[test]
    fn preview_without_token_is_an_error() {
        let lookup = lookup_from(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_DELIVERY_TOKEN", "delivery"),
        ]);
        let config = from_lookup(lookup).expect("load");
        let err = config.cms.bearer_token(true).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(_)));
    }
}
