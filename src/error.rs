//! # Error Types Module
//!
//! Centralized error handling for the portfolio application.
//!
//! ## Error Types
//! - `ConfigError`: Configuration file I/O and parsing errors
//! - `AssetError`: Remote asset (profile image) fetch errors
//!
//! The core view state machine has no error paths; these cover the two
//! fallible edges (the config file and the one remote image).

use std::fmt;

/// Errors that can occur during configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read config file
    ReadFailed(std::io::Error),
    /// Failed to write config file
    WriteFailed(std::io::Error),
    /// Failed to parse config file
    ParseFailed(toml::de::Error),
    /// Failed to serialize config
    SerializeFailed(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadFailed(e) => {
                write!(f, "Failed to read config file: {}", e)
            }
            ConfigError::WriteFailed(e) => {
                write!(f, "Failed to write config file: {}", e)
            }
            ConfigError::ParseFailed(e) => {
                write!(f, "Failed to parse config file: {}", e)
            }
            ConfigError::SerializeFailed(e) => {
                write!(f, "Failed to serialize config: {}", e)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadFailed(e) => Some(e),
            ConfigError::WriteFailed(e) => Some(e),
            ConfigError::ParseFailed(e) => Some(e),
            ConfigError::SerializeFailed(e) => Some(e),
        }
    }
}

/// Errors that can occur while fetching the remote profile image
#[derive(Debug, Clone)]
pub enum AssetError {
    /// The HTTP request could not be sent or completed
    RequestFailed(String),
    /// The server answered with a non-success status
    BadStatus(u16),
    /// The response body could not be read
    BodyRead(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::RequestFailed(msg) => {
                write!(f, "Failed to fetch asset: {}", msg)
            }
            AssetError::BadStatus(code) => {
                write!(f, "Asset server returned HTTP {}", code)
            }
            AssetError::BodyRead(msg) => {
                write!(f, "Failed to read asset body: {}", msg)
            }
        }
    }
}

impl std::error::Error for AssetError {}
