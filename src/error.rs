//! Error handling types and utilities.
//!
//! Catalog and highlight operations are total and never fail; the only
//! fallible surface is decoding a host-supplied viewer configuration.

/// A specialized Result type for catalog-lens operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error returned when a viewer configuration cannot be decoded.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid TOML, or does not match the schema.
    #[error("Invalid viewer configuration: {message}")]
    Parse { message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse {
            message: err.message().to_string(),
        }
    }
}
