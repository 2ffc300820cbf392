use url::Url;

/// A string is a URL when it parses with both a scheme and a host
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}
