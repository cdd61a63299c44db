use dioxus::prelude::*;
use session::guard::{evaluate, GuardDecision};
use session::Navigator as _;

use crate::auth::use_session;
use crate::icons::FaSpinner;
use crate::Icon;

/// Full-page placeholder shown while the session is still being resolved.
#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading-screen",
            span {
                class: "loading-screen-spinner",
                Icon { icon: FaSpinner, width: 24, height: 24 }
            }
            span { class: "loading-screen-label", "{label}" }
        }
    }
}

/// Renders `children` only for a signed-in operator.
///
/// While the session is initializing nothing protected is rendered and no
/// redirect happens. Without a session the operator is sent to the login
/// route with `current_path` as the return location. The guard reads the
/// session signal, so a logout anywhere below unmounts the subtree at once.
#[component]
pub fn ProtectedRoute(current_path: String, children: Element) -> Element {
    let session = use_session();

    match evaluate(&session.state()) {
        GuardDecision::Loading => rsx! {
            LoadingScreen {}
        },
        GuardDecision::RedirectToLogin => {
            tracing::debug!("No session for {current_path}, redirecting to login");
            session.navigator().go_to_login(Some(&current_path));
            rsx! {}
        }
        GuardDecision::Render => rsx! {
            {children}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use session::{
        platform_storage, PlatformStorage, Session, SessionPersistence, SessionState, SessionStore,
        Token, User,
    };

    use crate::auth::{ConsoleSession, SharedNavigator, SignalCell};

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl session::Navigator for Recorder {
        fn go_to_default_protected_route(&self) {
            self.0.borrow_mut().push("default".to_string());
        }

        fn go_to_login(&self, return_to: Option<&str>) {
            self.0
                .borrow_mut()
                .push(format!("login:{}", return_to.unwrap_or("")));
        }
    }

    /// Shared between the test body and the rendered tree.
    struct Fixture {
        storage: PlatformStorage,
        visits: Rc<Recorder>,
        session: RefCell<Option<ConsoleSession>>,
        mounted: Rc<Cell<bool>>,
    }

    impl Fixture {
        fn signed_in() -> Rc<Self> {
            let storage = platform_storage();
            let session = Session::new(User::new("a@b.com"), Token::new("T")).unwrap();
            SessionPersistence::new(storage.clone()).save(&session);
            Rc::new(Self {
                storage,
                visits: Rc::new(Recorder::default()),
                session: RefCell::new(None),
                mounted: Rc::new(Cell::new(false)),
            })
        }

        fn session(&self) -> ConsoleSession {
            self.session.borrow().clone().unwrap()
        }

        fn visits(&self) -> Vec<String> {
            self.visits.0.borrow().clone()
        }
    }

    #[allow(non_snake_case)]
    fn GuardedPage(fixture: Rc<Fixture>) -> Element {
        let state = use_signal(SessionState::default);
        let session = use_hook(|| {
            let navigator = SharedNavigator::new(fixture.visits.clone());
            let session =
                SessionStore::with_cell(fixture.storage.clone(), navigator, SignalCell::new(state));
            fixture.session.replace(Some(session.clone()));
            session
        });
        use_context_provider(|| session);

        rsx! {
            ProtectedRoute {
                current_path: "/booking".to_string(),
                InmateRecords { mounted: fixture.mounted.clone() }
            }
        }
    }

    #[component]
    fn InmateRecords(mounted: Rc<Cell<bool>>) -> Element {
        mounted.set(true);
        let on_drop = mounted.clone();
        use_drop(move || on_drop.set(false));
        rsx! { "inmate records" }
    }

    #[test]
    fn test_initializing_renders_neither_children_nor_redirect() {
        let fixture = Fixture::signed_in();
        let mut dom = VirtualDom::new_with_props(GuardedPage, fixture.clone());
        dom.rebuild_in_place();

        assert!(!fixture.mounted.get());
        assert!(fixture.visits().is_empty());
    }

    #[test]
    fn test_logout_unmounts_children_and_redirects() {
        let fixture = Fixture::signed_in();
        let mut dom = VirtualDom::new_with_props(GuardedPage, fixture.clone());
        dom.rebuild_in_place();

        let session = fixture.session();
        dom.in_runtime(|| session.check_auth());
        dom.render_immediate_to_vec();
        assert!(fixture.mounted.get());
        assert!(fixture.visits().is_empty());

        dom.in_runtime(|| session.logout());
        dom.render_immediate_to_vec();

        assert!(!fixture.mounted.get());
        let visits = fixture.visits();
        assert_eq!(visits.first().map(String::as_str), Some("login:"));
        assert_eq!(visits.last().map(String::as_str), Some("login:/booking"));
    }

    #[test]
    fn test_empty_storage_redirects_with_return_path() {
        let fixture = Rc::new(Fixture {
            storage: platform_storage(),
            visits: Rc::new(Recorder::default()),
            session: RefCell::new(None),
            mounted: Rc::new(Cell::new(false)),
        });
        let mut dom = VirtualDom::new_with_props(GuardedPage, fixture.clone());
        dom.rebuild_in_place();

        let session = fixture.session();
        dom.in_runtime(|| session.check_auth());
        dom.render_immediate_to_vec();

        assert!(!fixture.mounted.get());
        assert_eq!(fixture.visits(), vec!["login:/booking"]);
    }
}
