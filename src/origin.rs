use crate::constants::scheme;
use std::collections::HashSet;

/// Compiled origin check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OriginMatcher {
    /// Every origin is accepted and answered with `*`.
    Any,
    /// Full origins (`scheme://host`) accepted verbatim.
    List(HashSet<String>),
}

/// Outcome of matching a presented origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginDecision<'a> {
    Any,
    /// The presented origin is listed and must be echoed back as-is.
    Exact(&'a str),
    Disallow,
}

impl OriginMatcher {
    pub fn any() -> Self {
        Self::Any
    }

    /// Expands each host into its `http://` and `https://` origins.
    /// An empty host list yields [`OriginMatcher::Any`].
    pub fn from_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut origins = HashSet::new();
        for host in hosts {
            let host = host.as_ref();
            origins.insert(format!("{}{host}", scheme::HTTP));
            origins.insert(format!("{}{host}", scheme::HTTPS));
        }

        if origins.is_empty() {
            Self::Any
        } else {
            Self::List(origins)
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Number of full origins accepted; zero for the wildcard.
    pub fn len(&self) -> usize {
        match self {
            Self::Any => 0,
            Self::List(origins) => origins.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Comparison is byte-exact: scheme and host are case-sensitive.
    pub fn resolve<'a>(&self, request_origin: Option<&'a str>) -> OriginDecision<'a> {
        match self {
            Self::Any => OriginDecision::Any,
            Self::List(origins) => match request_origin {
                Some(origin) if origins.contains(origin) => OriginDecision::Exact(origin),
                _ => OriginDecision::Disallow,
            },
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
