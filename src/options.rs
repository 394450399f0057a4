use crate::util::{is_http_token, is_origin_host};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// What to do with a request whose origin is not in the configured list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Answer `400 origin not found` without calling the downstream handler.
    #[default]
    Reject,
    /// Forward the request untouched; the browser blocks the response.
    Allow,
}

/// Declared CORS configuration.
///
/// `origins` holds bare hosts (`example.com`, `localhost:3000`); each one is
/// accepted over both `http://` and `https://`. An empty list accepts any
/// origin and answers with `*`.
///
/// The optional fields are independent: `None` suppresses the header entirely
/// while `Some(vec![])` still emits it with an empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsOptions {
    #[serde(deserialize_with = "null_as_empty")]
    pub origins: Vec<String>,
    pub expose_headers: Option<Vec<String>>,
    pub allow_methods: Option<Vec<String>>,
    pub allow_headers: Option<Vec<String>>,
    pub allow_credentials: Option<bool>,
    pub max_age: Option<u64>,
    pub on_mismatch: MismatchPolicy,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document and validates the result.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = collect(origins);
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = Some(collect(headers));
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = Some(collect(methods));
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = Some(collect(headers));
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn on_mismatch(mut self, policy: MismatchPolicy) -> Self {
        self.on_mismatch = policy;
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(host) = self.origins.iter().find(|host| !is_origin_host(host)) {
            return Err(ValidationError::InvalidOrigin(host.clone()));
        }

        validate_tokens(&self.expose_headers, ValidationError::InvalidExposeHeader)?;
        validate_tokens(&self.allow_methods, ValidationError::InvalidMethod)?;
        validate_tokens(&self.allow_headers, ValidationError::InvalidAllowHeader)?;

        if self.is_wildcard() && self.allow_credentials == Some(true) {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        Ok(())
    }
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

// `"origins": null` means the same as an absent or empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_tokens(
    values: &Option<Vec<String>>,
    error: fn(String) -> ValidationError,
) -> Result<(), ValidationError> {
    match values
        .iter()
        .flatten()
        .find(|value| !is_http_token(value))
    {
        Some(value) => Err(error(value.clone())),
        None => Ok(()),
    }
}

/// Errors raised when a [`CorsOptions`] cannot be compiled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid origin host {0:?}: expected a bare host such as \"example.com\"")]
    InvalidOrigin(String),
    #[error("invalid method {0:?} in allow_methods")]
    InvalidMethod(String),
    #[error("invalid header name {0:?} in allow_headers")]
    InvalidAllowHeader(String),
    #[error("invalid header name {0:?} in expose_headers")]
    InvalidExposeHeader(String),
    #[error(
        "allow_credentials cannot be true when every origin is allowed; configure explicit origins"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("value for {0} is not a valid HTTP header value")]
    InvalidHeaderValue(String),
}

/// Errors raised while loading options from a serialized document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse CORS configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
