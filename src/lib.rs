//! CORS request decoration for hyper services.
//!
//! A [`CorsOptions`] is compiled once into a [`CorsPolicy`]; [`decorate`] then
//! wraps a downstream service so each request is either annotated with the
//! policy's `Access-Control-*` headers, forwarded untouched, or rejected with
//! `400 origin not found`.
//!
//! ```
//! use cors_gate::{CorsOptions, CorsPolicy, CorsDecision, RequestContext};
//!
//! let policy = CorsPolicy::new(
//!     CorsOptions::new()
//!         .origins(["example.com"])
//!         .allow_methods(["GET", "POST"]),
//! )
//! .expect("valid CORS configuration");
//!
//! let decision = policy.evaluate(&RequestContext::new(Some("https://example.com")));
//! let headers = decision.headers().expect("origin is listed");
//! assert_eq!(headers["Access-Control-Allow-Origin"], "https://example.com");
//! assert_eq!(headers["Access-Control-Allow-Methods"], "GET, POST");
//! ```

pub mod constants;
mod context;
mod header_builder;
mod headers;
mod options;
mod origin;
mod policy;
mod result;
mod service;
mod util;

pub use context::RequestContext;
pub use headers::Headers;
pub use options::{ConfigError, CorsOptions, MismatchPolicy, ValidationError};
pub use origin::{OriginDecision, OriginMatcher};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, Rejection};
pub use service::{Cors, decorate};
