//! Error types for the Pokédex shell
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Error Enum ==
/// Unified error type for the catalog client, gateway, and shell commands.
///
/// Every variant is non-fatal: the shell prints the error and keeps its
/// interactive loop running. The cache itself has no error states.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP request could not be completed (DNS, connect, timeout, ...)
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog service answered with a non-success status
    #[error("request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// A fetched value could not be encoded to bytes before caching
    #[error("could not encode response for {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Cached or freshly encoded bytes could not be decoded into the
    /// expected shape
    #[error("could not decode response for {key}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A shell command was invoked with missing or invalid arguments
    #[error("{0}")]
    Usage(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokédex shell.
pub type Result<T> = std::result::Result<T, Error>;
