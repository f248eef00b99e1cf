//! Startup error types.

/// A configuration value could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),

    #[error("unknown FEED_LOCALE '{0}': expected 'en' or 'pt-BR'")]
    UnknownLocale(String),

    /// Missing or malformed `[package.metadata.leptos]` / `LEPTOS_*` settings.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Anything that stops the server from starting or keeps it from running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
