use std::fmt;

/// Failure of a single query execution.
///
/// The `Display` text is what the dashboard shows after `"Error: "`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The client could not be built from its configuration (bad endpoint URL).
    Config(String),
    /// No HTTP response: connection refused, DNS failure, timeout.
    Transport(String),
    /// The server answered with a non-success status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Start of the response body, for context.
        body: String,
    },
    /// The response carried a non-empty `errors` array.
    Graphql(Vec<String>),
    /// The body was not the expected JSON shape.
    Decode(String),
}

/// Longest body excerpt kept in an HTTP error.
const BODY_EXCERPT_CHARS: usize = 200;

impl QueryError {
    /// Build an HTTP error, keeping only a short excerpt of the body.
    pub fn http(status: u16, body: &str) -> Self {
        let body: String = body.trim().chars().take(BODY_EXCERPT_CHARS).collect();
        Self::Http { status, body }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Transport(msg) => write!(f, "Network error: {msg}"),
            Self::Http { status, body } if body.is_empty() => {
                write!(f, "Response not successful: Received status code {status}")
            }
            Self::Http { status, body } => {
                write!(
                    f,
                    "Response not successful: Received status code {status} ({body})"
                )
            }
            Self::Graphql(messages) => f.write_str(&messages.join("; ")),
            Self::Decode(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Self::http(status.as_u16(), "");
        }
        if e.is_decode() {
            return Self::Decode(e.to_string());
        }
        Self::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_messages_are_joined() {
        let e = QueryError::Graphql(vec![
            "Variable \"$value\" got invalid value".to_string(),
            "second".to_string(),
        ]);
        assert_eq!(e.to_string(), "Variable \"$value\" got invalid value; second");
    }

    #[test]
    fn config_error_is_not_reported_as_network_failure() {
        let e = QueryError::Config("Invalid endpoint 'x'".to_string());
        assert_eq!(e.to_string(), "Configuration error: Invalid endpoint 'x'");
    }

    #[test]
    fn http_error_truncates_body() {
        let long = "x".repeat(1000);
        let QueryError::Http { status, body } = QueryError::http(502, &long) else {
            panic!("expected http error");
        };
        assert_eq!(status, 502);
        assert_eq!(body.len(), BODY_EXCERPT_CHARS);
        assert_eq!(
            QueryError::http(404, "  ").to_string(),
            "Response not successful: Received status code 404"
        );
    }
}
