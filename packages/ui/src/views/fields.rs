use dioxus::prelude::*;

use crate::forms::{error_for, FieldError};
use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Labelled text input with its validation message underneath.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    errors: Vec<FieldError>,
    field: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = "".to_string())] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    let message = error_for(&errors, &field).map(str::to_string);

    rsx! {
        div {
            class: "form-field",
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: if message.is_some() { "form-input form-input--invalid" } else { "form-input" },
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            FieldMessage { message: message.clone() }
        }
    }
}

#[component]
pub fn FieldMessage(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "form-error", "{message}" }
        },
        None => rsx! {},
    }
}

/// Search input for the list views; the view debounces the value.
#[component]
pub fn SearchBox(
    value: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
