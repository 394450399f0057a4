use crate::constants::WILDCARD;

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// A configured host is the `host[:port]` part of an origin, without scheme.
pub(crate) fn is_origin_host(value: &str) -> bool {
    !value.is_empty()
        && !value.contains("://")
        && !value.contains(WILDCARD)
        && value.bytes().all(|byte| {
            byte.is_ascii_graphic() && !matches!(byte, b'/' | b',' | b'?' | b'#' | b'"')
        })
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
