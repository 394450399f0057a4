use crate::constants::rejection;
use crate::headers::Headers;

/// Response produced instead of calling the downstream handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub body: &'static str,
}

impl Rejection {
    pub(crate) fn origin_not_found() -> Self {
        Self {
            status: rejection::STATUS,
            body: rejection::BODY,
        }
    }
}

/// Per-request outcome of a [`crate::CorsPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Forward the request and attach `headers` to the response.
    Accepted { headers: Headers },
    /// Forward the request without any CORS header.
    Passthrough,
    /// Answer with the rejection; the downstream handler is not called.
    Rejected(Rejection),
}

impl CorsDecision {
    pub fn is_forwarded(&self) -> bool {
        !matches!(self, CorsDecision::Rejected(_))
    }

    /// Headers to attach to the response; `None` unless accepted.
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Accepted { headers } => Some(headers),
            _ => None,
        }
    }
}
