use crate::constants::{WILDCARD, header};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::{CorsOptions, MismatchPolicy, ValidationError};
use crate::origin::{OriginDecision, OriginMatcher};
use crate::result::{CorsDecision, Rejection};
use hyper::header::{HeaderName, HeaderValue};
use tracing::debug;

/// Compiled, read-only CORS policy.
///
/// Built once from [`CorsOptions`] and shared (typically behind an `Arc`)
/// by every request. Nothing in here changes after [`CorsPolicy::new`].
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origin: OriginMatcher,
    static_headers: HeaderCollection,
    http_headers: Vec<(HeaderName, HeaderValue)>,
    on_mismatch: MismatchPolicy,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        let origin = OriginMatcher::from_hosts(&options.origins);
        let static_headers = HeaderBuilder::new(&options).build_static_headers();
        let http_headers = compile_headers(static_headers.as_headers())?;

        debug!(
            wildcard = origin.is_any(),
            origins = origin.len(),
            static_headers = static_headers.len(),
            on_mismatch = ?options.on_mismatch,
            "compiled CORS policy"
        );

        Ok(Self {
            origin,
            static_headers,
            http_headers,
            on_mismatch: options.on_mismatch,
        })
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        let allow_origin = match self.resolve_origin(request) {
            OriginDecision::Any => WILDCARD,
            OriginDecision::Exact(origin) => origin,
            OriginDecision::Disallow => {
                return match self.disallow(request) {
                    Some(rejection) => CorsDecision::Rejected(rejection),
                    None => CorsDecision::Passthrough,
                };
            }
        };

        let mut headers = HeaderCollection::with_estimate(self.static_headers.len() + 1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        headers.extend(&self.static_headers);

        CorsDecision::Accepted {
            headers: headers.into_headers(),
        }
    }

    pub(crate) fn resolve_origin<'a>(&self, request: &RequestContext<'a>) -> OriginDecision<'a> {
        self.origin.resolve(request.origin)
    }

    /// `None` forwards the request untouched.
    pub(crate) fn disallow(&self, request: &RequestContext<'_>) -> Option<Rejection> {
        let origin = request.origin.unwrap_or_default();
        match self.on_mismatch {
            MismatchPolicy::Allow => {
                debug!(origin, "origin not allowed, forwarding without CORS headers");
                None
            }
            MismatchPolicy::Reject => {
                debug!(origin, "origin not allowed, rejecting request");
                Some(Rejection::origin_not_found())
            }
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.origin.is_any()
    }

    pub fn origin_matcher(&self) -> &OriginMatcher {
        &self.origin
    }

    /// Headers sent with every accepted request after `Access-Control-Allow-Origin`.
    pub fn static_headers(&self) -> &Headers {
        self.static_headers.as_headers()
    }

    pub fn on_mismatch(&self) -> MismatchPolicy {
        self.on_mismatch
    }

    /// Static headers in wire form, same order as [`CorsPolicy::static_headers`].
    pub(crate) fn http_headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.http_headers
    }
}

fn compile_headers(headers: &Headers) -> Result<Vec<(HeaderName, HeaderValue)>, ValidationError> {
    headers
        .iter()
        .map(|(name, value)| {
            let invalid = || ValidationError::InvalidHeaderValue(name.clone());
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            Ok((name, value))
        })
        .collect()
}

impl TryFrom<CorsOptions> for CorsPolicy {
    type Error = ValidationError;

    fn try_from(options: CorsOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
