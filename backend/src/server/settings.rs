//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TODO_*` environment variables and an optional
//! configuration file, in that order of precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use todo_backend::domain::{Locale, LocaleParseError};

const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener and localisation settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Locale used when `Accept-Language` names nothing the catalogue has.
    pub default_locale: Option<String>,
}

/// Settings values that parse but do not make sense.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
    #[error("invalid default locale: {0}")]
    InvalidLocale(#[from] LocaleParseError),
}

impl ServerSettings {
    /// Socket address to bind; the host defaults to `0.0.0.0`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Configured fallback locale, defaulting to `en`.
    pub fn default_locale(&self) -> Result<Locale, SettingsError> {
        match self.default_locale.as_deref() {
            Some(tag) => Ok(tag.parse()?),
            None => Ok(Locale::default()),
        }
    }
}
