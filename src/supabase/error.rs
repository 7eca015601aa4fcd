//! Error types for talking to the Supabase backend

/// Errors that can occur while calling the auth or rest endpoints
#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message} (status {status})")]
    Api { status: u16, message: String },

    #[error("Session is missing or has expired: {0}")]
    Unauthorized(String),
}

impl SupabaseError {
    /// Build an error from a non-success response body. A 401 becomes
    /// `Unauthorized`, anything else `Api`.
    ///
    /// GoTrue and PostgREST disagree on where the human readable text lives, so
    /// the first known key wins and the raw body is the last resort.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["error_description", "msg", "message", "error"]
                    .iter()
                    .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_string))
            });

        let message = from_json
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .or_else(|| reason.map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());

        if status == 401 {
            return Self::Unauthorized(message);
        }
        Self::Api { status, message }
    }
}

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, SupabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: SupabaseError) -> String {
        match err {
            SupabaseError::Api { message, .. } => message,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn gotrue_error_description_wins() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        let err = SupabaseError::from_response(400, Some("Bad Request"), body);
        assert_eq!(message(err), "Invalid login credentials");
    }

    #[test]
    fn postgrest_message_is_used() {
        let body = r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"sensors\" does not exist"}"#;
        let err = SupabaseError::from_response(404, Some("Not Found"), body);
        assert_eq!(message(err), "relation \"sensors\" does not exist");
    }

    #[test]
    fn plain_body_falls_back_to_text_then_reason() {
        let err = SupabaseError::from_response(502, Some("Bad Gateway"), "upstream down\n");
        assert_eq!(message(err), "upstream down");

        let err = SupabaseError::from_response(503, Some("Service Unavailable"), "");
        assert_eq!(message(err), "Service Unavailable");
    }

    #[test]
    fn unauthorized_keeps_backend_message() {
        let err = SupabaseError::from_response(401, None, r#"{"msg":"JWT expired"}"#);
        assert!(matches!(&err, SupabaseError::Unauthorized(m) if m == "JWT expired"));
        assert_eq!(err.to_string(), "Session is missing or has expired: JWT expired");

        let err = SupabaseError::from_response(401, Some("Unauthorized"), "");
        assert!(matches!(&err, SupabaseError::Unauthorized(m) if m == "Unauthorized"));
    }

    #[test]
    fn display_includes_status() {
        let err = SupabaseError::Api {
            status: 400,
            message: "Email not confirmed".into(),
        };
        assert_eq!(err.to_string(), "Email not confirmed (status 400)");
    }
}
