use thiserror::Error;

/// Failures of a single chat completion. None of them are fatal to the
/// widget; the next submission starts from scratch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    /// No API key stored; raised before any request is made.
    #[error("Missing Gemini API key. Add one in the chat settings.")]
    MissingCredential,

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Network error: {0}")]
    Transport(String),

    /// A 2xx response whose body was not the expected JSON.
    #[error("Could not read the API response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_mentions_status_and_body() {
        let err = ChatError::Http {
            status: 500,
            body: "server error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("server error"));
    }

    #[test]
    fn missing_credential_says_so() {
        assert!(ChatError::MissingCredential
            .to_string()
            .contains("API key"));
    }
}
