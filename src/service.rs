use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use hyper::body::Bytes;
use hyper::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, Entry, HeaderMap,
    HeaderName, HeaderValue, ORIGIN,
};
use hyper::service::Service;
use hyper::{Request, Response, StatusCode};

use crate::constants::{WILDCARD, rejection};
use crate::context::RequestContext;
use crate::origin::OriginDecision;
use crate::policy::CorsPolicy;
use crate::result::Rejection;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Wraps `downstream` so every request goes through `policy` first.
pub fn decorate<P, S>(policy: P, downstream: S) -> Cors<S>
where
    P: Into<Arc<CorsPolicy>>,
{
    Cors::new(policy, downstream)
}

/// Hyper service that applies a [`CorsPolicy`] in front of an inner service.
///
/// Accepted requests get the policy headers added to the inner response,
/// unless the inner service already set a header with the same name.
/// Rejected requests never reach the inner service.
///
/// If the inner service sets its own `Access-Control-Allow-Origin` that differs
/// from the one the policy would send, `Access-Control-Allow-Credentials` is
/// left out.
#[derive(Clone)]
pub struct Cors<S> {
    inner: S,
    policy: Arc<CorsPolicy>,
}

impl<S> Cors<S> {
    pub fn new<P>(policy: P, inner: S) -> Self
    where
        P: Into<Arc<CorsPolicy>>,
    {
        Self {
            inner,
            policy: policy.into(),
        }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for Cors<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: From<Bytes> + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<ReqBody>) -> Self::Future {
        let origin = req.headers().get(ORIGIN).cloned();
        let request = RequestContext::new(origin.as_ref().and_then(|value| value.to_str().ok()));

        let allow_origin = match (self.policy.resolve_origin(&request), &origin) {
            (OriginDecision::Any, _) => HeaderValue::from_static(WILDCARD),
            (OriginDecision::Exact(_), Some(value)) => value.clone(),
            _ => match self.policy.disallow(&request) {
                None => return Box::pin(self.inner.call(req)),
                Some(rejection) => {
                    return Box::pin(async move { Ok(rejection_response(rejection)) });
                }
            },
        };

        let policy = Arc::clone(&self.policy);
        let future = self.inner.call(req);
        Box::pin(async move {
            let mut response = future.await?;
            apply_headers(response.headers_mut(), allow_origin, policy.http_headers());
            Ok(response)
        })
    }
}

fn apply_headers(
    map: &mut HeaderMap,
    allow_origin: HeaderValue,
    headers: &[(HeaderName, HeaderValue)],
) {
    let echoed = match map.entry(ACCESS_CONTROL_ALLOW_ORIGIN) {
        Entry::Vacant(entry) => {
            entry.insert(allow_origin);
            true
        }
        Entry::Occupied(entry) => *entry.get() == allow_origin,
    };

    for (name, value) in headers {
        if *name == ACCESS_CONTROL_ALLOW_CREDENTIALS && !echoed {
            continue;
        }
        if let Entry::Vacant(entry) = map.entry(name.clone()) {
            entry.insert(value.clone());
        }
    }
}

fn rejection_response<B>(rejection: Rejection) -> Response<B>
where
    B: From<Bytes>,
{
    let mut response = Response::new(B::from(Bytes::from_static(rejection.body.as_bytes())));
    *response.status_mut() =
        StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::BAD_REQUEST);
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static(rejection::CONTENT_TYPE),
    );
    response
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
