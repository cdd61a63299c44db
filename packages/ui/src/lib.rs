//! This crate contains all shared UI for the console.

use dioxus::prelude::*;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const CONSOLE_CSS: Asset = asset!("/assets/console.css");

mod auth;
pub use auth::{
    use_api, use_console_config, use_session, ConsoleApi, ConsoleSession, LogoutButton,
    SessionProvider, SharedNavigator, SignalCell,
};

mod guard;
pub use guard::{LoadingScreen, ProtectedRoute};

mod navbar;
pub use navbar::Navbar;

pub mod forms;
pub use forms::{error_for, BookingForm, FieldError, InmateForm};

pub mod notices;
pub use notices::{notify, use_notices, NoticeKind, NoticeList, Notices};

mod pagination;
pub use pagination::{Pagination, PaginationBar};

mod timer;
pub use timer::use_debounced;

pub mod views;
