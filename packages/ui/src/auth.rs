//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one [`SessionStore`] of the application. It
//! builds the store on first render, runs `check_auth` once after mount, and
//! hands clones to every view through context. Views read state through
//! [`use_session`]; the store's state lives in a signal, so anything that
//! renders from it re-renders on login and logout.

use std::fmt;
use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;
use session::{
    platform_storage, ConsoleConfig, Navigator as SessionNavigator, PlatformStorage,
    SessionState, SessionStore, StateCell,
};

/// [`StateCell`] backed by a Dioxus signal.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalCell(Signal<SessionState>);

impl SignalCell {
    pub fn new(signal: Signal<SessionState>) -> Self {
        Self(signal)
    }
}

impl StateCell for SignalCell {
    fn get(&self) -> SessionState {
        self.0.read().clone()
    }

    fn set(&self, state: SessionState) {
        // Unchanged writes would still wake every subscriber
        if *self.0.peek() == state {
            return;
        }
        let mut signal = self.0;
        signal.set(state);
    }
}

/// Type-erased navigator the web crate hands to [`SessionProvider`].
#[derive(Clone)]
pub struct SharedNavigator(Rc<dyn SessionNavigator>);

impl SharedNavigator {
    pub fn new(navigator: impl SessionNavigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }
}

impl SessionNavigator for SharedNavigator {
    fn go_to_default_protected_route(&self) {
        self.0.go_to_default_protected_route()
    }

    fn go_to_login(&self, return_to: Option<&str>) {
        self.0.go_to_login(return_to)
    }
}

impl PartialEq for SharedNavigator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedNavigator")
    }
}

/// The store as the console uses it.
pub type ConsoleSession = SessionStore<PlatformStorage, SharedNavigator, SignalCell>;

/// HTTP client reading its token from the same storage as [`ConsoleSession`].
pub type ConsoleApi = ApiClient<PlatformStorage>;

/// Get the session store.
pub fn use_session() -> ConsoleSession {
    use_context::<ConsoleSession>()
}

/// Get the API client.
pub fn use_api() -> ConsoleApi {
    use_context::<ConsoleApi>()
}

/// Get the console configuration.
pub fn use_console_config() -> ConsoleConfig {
    use_context::<ConsoleConfig>()
}

/// Provider component that owns the session store.
/// Must be rendered inside the router so `navigator` can push routes.
#[component]
pub fn SessionProvider(config: ConsoleConfig, navigator: SharedNavigator, children: Element) -> Element {
    let state = use_signal(SessionState::default);

    let session = use_hook(|| {
        let storage = platform_storage();
        let api = ApiClient::new(&config.api, storage.clone());
        provide_context(api);
        provide_context(config.clone());
        SessionStore::with_cell(storage, navigator, SignalCell::new(state))
    });

    // Resolve the persisted session once, after the first (loading) render
    let resolver = session.clone();
    use_effect(move || {
        resolver.check_auth();
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current operator.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| session.logout(),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl SessionNavigator for Recorder {
        fn go_to_default_protected_route(&self) {
            self.0.borrow_mut().push("default".to_string());
        }

        fn go_to_login(&self, return_to: Option<&str>) {
            self.0
                .borrow_mut()
                .push(format!("login:{}", return_to.unwrap_or("")));
        }
    }

    #[test]
    fn test_shared_navigator_delegates() {
        let recorder = Rc::new(Recorder::default());
        let shared = SharedNavigator::new(recorder.clone());

        shared.go_to_login(Some("/booking"));
        shared.go_to_default_protected_route();

        assert_eq!(*recorder.0.borrow(), vec!["login:/booking", "default"]);
    }

    #[test]
    fn test_shared_navigator_equality_is_identity() {
        let a = SharedNavigator::new(Recorder::default());
        let b = SharedNavigator::new(Recorder::default());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
