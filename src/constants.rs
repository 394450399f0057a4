pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ORIGIN: &str = "Origin";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod scheme {
    pub const HTTP: &str = "http://";
    pub const HTTPS: &str = "https://";
}

/// Separator used when joining configured lists into a single header value.
pub const LIST_SEPARATOR: &str = ", ";

pub const WILDCARD: &str = "*";

/// Status and body sent when an unknown origin is rejected.
pub mod rejection {
    pub const STATUS: u16 = 400;
    pub const BODY: &str = "origin not found";
    pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";
}
