//! Connection-URI format acceptance
//!
//! A cluster endpoint must be an absolute request URI: either an absolute
//! path ("/internal/replicate") or a scheme-prefixed form
//! ("https://host:443", "localhost:19530" — anything before the first
//! colon that is a well-formed scheme). Relative references are rejected,
//! as is any URI containing whitespace or ASCII control characters.
//!
//! Equality elsewhere is byte-exact; no host-case, trailing-slash, or
//! default-port normalization happens here.

/// Returns true when `uri` is acceptable as a cluster endpoint.
pub fn is_valid_request_uri(uri: &str) -> bool {
    if uri.is_empty() {
        return false;
    }
    if uri.chars().any(|c| c.is_ascii_control() || c == ' ') {
        return false;
    }
    if uri.starts_with('/') {
        return true;
    }
    match uri.split_once(':') {
        Some((scheme, _)) => is_valid_scheme(scheme),
        None => false,
    }
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
