//! Route guard decision.
//!
//! The guard component in the UI crate re-evaluates this on every session
//! change and renders accordingly.

use crate::state::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet: show a placeholder, do not redirect.
    Loading,
    /// No session: send the operator to login, remembering where they were going.
    RedirectToLogin,
    /// Session active: render the protected subtree.
    Render,
}

pub fn evaluate(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Initializing => GuardDecision::Loading,
        SessionState::Unauthenticated => GuardDecision::RedirectToLogin,
        SessionState::Authenticated(_) => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Session, Token, User};

    #[test]
    fn test_decisions() {
        assert_eq!(evaluate(&SessionState::Initializing), GuardDecision::Loading);
        assert_eq!(
            evaluate(&SessionState::Unauthenticated),
            GuardDecision::RedirectToLogin
        );
        let session = Session::new(User::new("a@b.com"), Token::new("T")).unwrap();
        assert_eq!(
            evaluate(&SessionState::Authenticated(session)),
            GuardDecision::Render
        );
    }
}
