//! Facilities for reading runtime configuration values
use crate::WhoisPrepError;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use tracing::trace;

/// Front end configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Maximum allowed input size in bytes.
    #[serde(default = "Config::default_max_processed_size")]
    pub max_processed_size: u64,

    /// Whether to write a JSON object (TLD, dialect and text) instead of plain text.
    #[serde(default)]
    pub json_output: bool,

    /// TLD whose dialect is applied regardless of what the response announces.
    #[serde(default)]
    pub tld: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_processed_size: Self::default_max_processed_size(),
            json_output: false,
            tld: None,
        }
    }
}

impl Config {
    /// Constructs `Config` from a `toml` file and environment variables
    pub fn new() -> Result<Self, WhoisPrepError> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file("whois-prep.toml"))
                .merge(Env::prefixed("WHOIS_PREP__").split("__")),
        )
    }

    /// Extracts and validates `Config` from the given providers
    pub fn from_figment(figment: Figment) -> Result<Self, WhoisPrepError> {
        let config: Self = figment.extract()?;

        macro_rules! disallow_value_below {
            ($parent:ident.$var:ident, $limit:expr) => {
                if $parent.$var < $limit {
                    Err(WhoisPrepError::ConfigParameterValue {
                        parameter: stringify!($var),
                        message: format!(
                            "parameter value should be equal or larger than {}",
                            $limit
                        ),
                    })?
                }
            };
        }
        disallow_value_below!(config.max_processed_size, 1);

        if let Some(tld) = config.tld.as_deref() {
            if tld.is_empty() || !tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                Err(WhoisPrepError::ConfigParameterValue {
                    parameter: "tld",
                    message: format!("{tld:?} is not a valid TLD label"),
                })?
            }
        }

        trace!("final config: {config:#?}");

        Ok(config)
    }

    /// Returns the default input size limit
    fn default_max_processed_size() -> u64 {
        1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_figment(Figment::new()).expect("a valid config");
        assert_eq!(config.max_processed_size, 1024 * 1024);
        assert!(!config.json_output);
        assert!(config.tld.is_none());
    }

    #[test]
    fn from_toml() {
        let config = Config::from_figment(Figment::new().merge(Toml::string(
            "max_processed_size = 4096\njson_output = true\ntld = \"fr\"\n",
        )))
        .expect("a valid config");
        assert_eq!(config.max_processed_size, 4096);
        assert!(config.json_output);
        assert_eq!(config.tld.as_deref(), Some("fr"));
    }

    #[test]
    fn out_of_bounds() {
        let err = Config::from_figment(Figment::new().merge(Toml::string("max_processed_size = 0")))
            .expect_err("zero size limit");
        assert!(matches!(
            err,
            WhoisPrepError::ConfigParameterValue {
                parameter: "max_processed_size",
                ..
            }
        ));
        let err = Config::from_figment(Figment::new().merge(Toml::string("tld = \"co.uk\"")))
            .expect_err("dotted tld");
        assert!(matches!(
            err,
            WhoisPrepError::ConfigParameterValue {
                parameter: "tld",
                ..
            }
        ));
    }

    #[test]
    fn bad_type() {
        let err = Config::from_figment(Figment::new().merge(Toml::string("json_output = 12")))
            .expect_err("wrong type");
        assert!(matches!(err, WhoisPrepError::ConfigDeserialization(_)));
    }
}
