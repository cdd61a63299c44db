mod login;
pub use login::Login;

mod shell;
pub use shell::{NotFound, ProtectedShell, Root};

mod inmates;
pub use inmates::Inmates;

mod bookings;
pub use bookings::Bookings;

/// Message for a list that failed to load.
pub(crate) fn load_error(error: &api::ApiError, what: &str) -> String {
    if error.is_unauthorized() {
        return "The server rejected your session. Log out and sign in again.".to_string();
    }
    error.user_message(&format!("Failed to load {what}"))
}

/// Date used by the form rules ("not in the future", "not in the past").
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
