use qpid_domain::properties::non_empty;
use qpid_jms::DEFAULT_REMOTE_URI;

/// Picks the endpoint a factory is seeded with.
///
/// A present, non-empty URL is returned unchanged, embedded options included. Anything
/// else resolves to [`DEFAULT_REMOTE_URI`]. Syntax is not checked here; the transport
/// reports malformed URLs when the factory is built.
#[must_use]
pub fn resolve_remote_uri(remote_url: Option<&str>) -> &str {
    non_empty(remote_url).unwrap_or(DEFAULT_REMOTE_URI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_falls_back_to_default() {
        assert_eq!(resolve_remote_uri(None), "amqp://localhost:5672");
        assert_eq!(resolve_remote_uri(Some("")), "amqp://localhost:5672");
    }

    #[test]
    fn present_url_is_returned_verbatim() {
        let url = "amqps://broker:5671?jms.clientID=a&transport.verifyHost=false";
        assert_eq!(resolve_remote_uri(Some(url)), url);
        assert_eq!(resolve_remote_uri(Some("not a uri")), "not a uri");
    }
}
