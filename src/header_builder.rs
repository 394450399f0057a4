use crate::constants::{LIST_SEPARATOR, header};
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;

/// Produces the headers that every accepted request receives, independent
/// of the presented origin.
pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_static_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(5);
        headers.extend(&self.build_exposed_headers());
        headers.extend(&self.build_methods_header());
        headers.extend(&self.build_allowed_headers());
        headers.extend(&self.build_credentials_header());
        headers.extend(&self.build_max_age_header());
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        list_header(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.options.expose_headers.as_deref(),
        )
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        list_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.options.allow_methods.as_deref(),
        )
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        list_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.options.allow_headers.as_deref(),
        )
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        match self.options.allow_credentials {
            Some(enabled) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    if enabled { "true" } else { "false" },
                );
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        match self.options.max_age {
            Some(seconds) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
                headers
            }
            None => HeaderCollection::new(),
        }
    }
}

// A present but empty list still emits the header, with an empty value.
fn list_header(name: &str, values: Option<&[String]>) -> HeaderCollection {
    match values {
        Some(values) => {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(name, values.join(LIST_SEPARATOR));
            headers
        }
        None => HeaderCollection::new(),
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
