//! # whois-prep #
//!
//! Rewrites raw WHOIS responses into canonical `Label: Value` lines
//!
//! Every registry lays out its WHOIS output differently: contact blocks implied
//! by indentation, positional fields with no label, addresses spread over several
//! lines, bracketed section markers. [`prepare`] detects which registry produced a
//! response and flattens it so that a record parser can treat all of them alike.
//! Responses from registries without a dedicated dialect pass through untouched
//! (apart from carriage returns and tabs).
//!
//! ```rust,ignore
//! let text = whois_prep::prepare("domain: example.ru\nperson: John Smith\n");
//! assert_eq!(text, "domain: example.ru\nRegistrant Name: John Smith");
//! ```
use serde::Serialize;
use thiserror::Error;

pub mod config;
mod prepare;

pub use prepare::{
    Dialect, detect_tld, dialect_for, normalize_whitespace, prepare, prepare_for_tld,
    prepare_traced, prepare_traced_for_tld, supported_tlds,
};

/// The outcome of a preparation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedWhois {
    /// The TLD announced by the response (or forced by the caller)
    pub tld: Option<String>,
    /// The name of the dialect applied, `None` when passed through
    pub dialect: Option<&'static str>,
    /// The normalized text
    pub text: String,
}

#[derive(Error, Debug)]
pub enum WhoisPrepError {
    /// Configuration parameter value is out of bounds.
    #[error("config parameter `{parameter}` value is out of bounds: {message}")]
    ConfigParameterValue {
        parameter: &'static str,
        message: String,
    },

    /// Wrapper for [`Figment::Error`](https://docs.rs/figment/latest/figment/struct.Error.html)
    #[error("config deserialization: {0:?}")]
    ConfigDeserialization(#[from] figment::Error),

    /// Wrapper for [`serde_json::Error`](https://docs.rs/serde_json/latest/serde_json/struct.Error.html)
    #[error("json serialization error: {0:?}")]
    SerdeJson(#[from] serde_json::Error),

    /// Wrapper for [`std::io::Error`](https://doc.rust-lang.org/std/io/struct.Error.html)
    #[error("IO error: {0:?}")]
    IO(#[from] std::io::Error),

    /// The response exceeds the configured size limit.
    #[error("input exceeds the maximum processed size of {limit} bytes")]
    InputTooLarge { limit: u64 },
}
