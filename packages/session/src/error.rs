//! Error types for the session layer.

/// Why a login attempt did not produce a session.
///
/// Storage problems never show up here: an unusable stored session is
/// absorbed by [`SessionStore::check_auth`](crate::SessionStore::check_auth).
/// Every variant below means the submitted credentials did not get the
/// operator in, and is meant for the login view to display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Email or password was empty; no request was sent.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The authentication endpoint answered with a non-success status.
    #[error("authentication rejected ({status})")]
    Rejected { status: u16, message: Option<String> },

    /// No response from the authentication endpoint.
    #[error("authentication endpoint unreachable: {0}")]
    Unreachable(String),

    /// The endpoint answered with success but the body was not a usable
    /// `{user, token}` pair.
    #[error("malformed login response: {0}")]
    MalformedResponse(String),
}

impl LoginError {
    /// Text to show the operator.
    pub fn user_message(&self) -> String {
        match self {
            LoginError::MissingField(field) => {
                let mut chars = field.chars();
                match chars.next() {
                    Some(first) => format!("{}{} is required", first.to_uppercase(), chars.as_str()),
                    None => "Required field missing".to_string(),
                }
            }
            LoginError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            LoginError::Rejected { .. } => "Invalid email or password".to_string(),
            LoginError::Unreachable(_) => "No response from server".to_string(),
            LoginError::MalformedResponse(_) => "Error on authentication".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            LoginError::MissingField("email").user_message(),
            "Email is required"
        );
        assert_eq!(
            LoginError::Rejected {
                status: 401,
                message: Some("Account locked".to_string()),
            }
            .user_message(),
            "Account locked"
        );
        assert_eq!(
            LoginError::Rejected {
                status: 401,
                message: Some("  ".to_string()),
            }
            .user_message(),
            "Invalid email or password"
        );
        assert_eq!(
            LoginError::Unreachable("dns".to_string()).user_message(),
            "No response from server"
        );
        assert_eq!(
            LoginError::MalformedResponse("no token".to_string()).user_message(),
            "Error on authentication"
        );
    }
}
