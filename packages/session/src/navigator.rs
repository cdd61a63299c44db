//! Programmatic redirection, decoupled from the router.
//!
//! The session store only ever needs two destinations: the default protected
//! landing route after login, and the login route after logout or a guard
//! rejection. Navigation is local and synchronous; there is nothing to retry.

use std::rc::Rc;

use crate::config::RoutesConfig;

pub trait Navigator {
    fn go_to_default_protected_route(&self);
    fn go_to_login(&self, return_to: Option<&str>);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn go_to_default_protected_route(&self) {
        (**self).go_to_default_protected_route()
    }

    fn go_to_login(&self, return_to: Option<&str>) {
        (**self).go_to_login(return_to)
    }
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn go_to_default_protected_route(&self) {
        (**self).go_to_default_protected_route()
    }

    fn go_to_login(&self, return_to: Option<&str>) {
        (**self).go_to_login(return_to)
    }
}

/// Navigator that resolves destinations through [`RoutesConfig`] and hands the
/// resulting path to a closure (a router push, `location.replace`, a test log).
#[derive(Clone)]
pub struct PathNavigator<F> {
    routes: RoutesConfig,
    go: F,
}

impl<F: Fn(&str)> PathNavigator<F> {
    pub fn new(routes: RoutesConfig, go: F) -> Self {
        Self { routes, go }
    }

    pub fn routes(&self) -> &RoutesConfig {
        &self.routes
    }
}

impl<F: Fn(&str)> Navigator for PathNavigator<F> {
    fn go_to_default_protected_route(&self) {
        tracing::debug!("Navigating to {}", self.routes.default_protected);
        (self.go)(&self.routes.default_protected);
    }

    fn go_to_login(&self, return_to: Option<&str>) {
        let location = self.routes.login_location(return_to);
        tracing::debug!("Navigating to {location}");
        (self.go)(&location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_path_navigator_uses_configured_routes() {
        let visited = Rc::new(RefCell::new(Vec::<String>::new()));
        let log = visited.clone();
        let routes = RoutesConfig {
            login: "/login".to_string(),
            default_protected: "/dashboard".to_string(),
        };
        let nav = PathNavigator::new(routes, move |path: &str| {
            log.borrow_mut().push(path.to_string())
        });

        nav.go_to_default_protected_route();
        nav.go_to_login(None);
        nav.go_to_login(Some("/booking"));

        assert_eq!(
            *visited.borrow(),
            vec!["/dashboard", "/login", "/login?from=/booking"]
        );
    }
}
