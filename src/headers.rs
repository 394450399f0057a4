use indexmap::IndexMap;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(0)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    /// Inserting an existing name replaces its value but keeps its position.
    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(name.into(), value.into());
    }

    pub(crate) fn extend(&mut self, other: &HeaderCollection) {
        for (name, value) in &other.headers {
            self.headers.insert(name.clone(), value.clone());
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.headers.len()
    }

    pub(crate) fn as_headers(&self) -> &Headers {
        &self.headers
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
