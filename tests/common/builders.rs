use cors_gate::{CorsDecision, CorsOptions, CorsPolicy, MismatchPolicy, RequestContext};

#[derive(Default)]
pub struct PolicyBuilder {
    options: CorsOptions,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.origins(origins);
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.expose_headers(headers);
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allow_methods(methods);
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allow_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options = self.options.allow_credentials(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options = self.options.max_age(seconds);
        self
    }

    pub fn on_mismatch(mut self, policy: MismatchPolicy) -> Self {
        self.options = self.options.on_mismatch(policy);
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(self.options).expect("valid CORS configuration")
    }
}

#[derive(Default)]
pub struct RequestBuilder {
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> CorsDecision {
        policy.evaluate(&RequestContext::new(self.origin.as_deref()))
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
