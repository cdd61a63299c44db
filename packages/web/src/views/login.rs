//! Login page view with email/password.

use api::HttpAuthenticator;
use dioxus::prelude::*;
use session::{Credentials, Navigator as _, RoutesConfig};
use ui::forms::{error_for, validate_login};
use ui::views::FieldMessage;
use ui::{notify, use_console_config, use_notices, use_session, FieldError, LoadingScreen, NoticeKind};

/// Login page component.
///
/// `from` is the protected path the guard intercepted, if any.
#[component]
pub fn Login(from: String) -> Element {
    let session = use_session();
    let config = use_console_config();
    let return_target = RoutesConfig::return_target(&from);
    let authenticator = use_hook(|| HttpAuthenticator::new(&config.api));
    let mut notices = use_notices();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let state = session.state();
    if state.is_initializing() {
        return rsx! { LoadingScreen {} };
    }
    // Already signed in (reload on the login page, back button)
    if state.is_authenticated() {
        session.navigator().go_to_default_protected_route();
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let found = validate_login(&email(), &password());
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        server_error.set(None);
        submitting.set(true);
        let session = session.clone();
        let authenticator = authenticator.clone();
        let credentials = Credentials::new(email().trim(), password());
        spawn(async move {
            match session.login(&authenticator, credentials).await {
                Ok(user) => notify(
                    &mut notices,
                    NoticeKind::Success,
                    "Signed in",
                    Some(format!("Welcome back, {}", user.display_name())),
                ),
                Err(e) => {
                    let message = e.user_message();
                    server_error.set(Some(message.clone()));
                    notify(&mut notices, NoticeKind::Destructive, "Login failed", Some(message));
                }
            }
            submitting.set(false);
        });
    };

    let email_error = error_for(&errors.read(), "email").map(str::to_string);
    let password_error = error_for(&errors.read(), "password").map(str::to_string);

    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-card",
                h1 { class: "login-title", "Inmate Console" }
                p {
                    class: "login-subtitle",
                    if return_target.is_empty() {
                        "Sign in to your account"
                    } else {
                        "Sign in to continue to {return_target}"
                    }
                }

                form {
                    onsubmit: handle_login,

                    if let Some(err) = server_error() {
                        div { class: "login-error", "{err}" }
                    }

                    div {
                        class: "form-field",
                        label { class: "form-label", r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "you@example.com",
                            autocomplete: "username",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        FieldMessage { message: email_error }
                    }

                    div {
                        class: "form-field",
                        label { class: "form-label", r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        FieldMessage { message: password_error }
                    }

                    button {
                        class: "btn btn-primary login-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
