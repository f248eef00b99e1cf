//! Server configuration parsed from environment variables.

use client::i18n::Locale;

use crate::error::ConfigError;

pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub locale: Locale,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: host to listen on, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `FEED_LOCALE`: `en` (default) or `pt-BR`
    ///
    /// Leptos build settings (`LEPTOS_*`) are read separately by
    /// `leptos::config::get_configuration`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_HOST.to_owned());
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let locale = parse_locale(std::env::var("FEED_LOCALE").ok().as_deref())?;
        Ok(Self { host, port, locale })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn parse_locale(raw: Option<&str>) -> Result<Locale, ConfigError> {
    match raw {
        None => Ok(Locale::default()),
        Some(raw) => Locale::parse(raw).ok_or_else(|| ConfigError::UnknownLocale(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
