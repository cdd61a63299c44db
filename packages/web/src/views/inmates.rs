//! Inmate profiles: searchable paged table, add/edit modal, delete confirmation.

use api::{Gender, Inmate, ListQuery};
use dioxus::prelude::*;
use ui::forms::error_for;
use ui::icons::{FaPen, FaPlus, FaTrash};
use ui::views::{ConfirmDialog, FieldMessage, ModalOverlay, SearchBox, TextField};
use ui::{
    notify, use_api, use_console_config, use_debounced, use_notices, FieldError, Icon, InmateForm,
    NoticeKind, Pagination, PaginationBar,
};

use super::{load_error, today};

#[component]
pub fn Inmates() -> Element {
    let api = use_api();
    let config = use_console_config();
    let page_size = config.tables.default_page_size;
    let mut notices = use_notices();

    let mut search = use_signal(String::new);
    let debounced = use_debounced(search, config.tables.search_debounce_ms);
    let mut page = use_signal(|| 0u32);
    let mut editing = use_signal(|| Option::<InmateForm>::None);
    let mut deleting = use_signal(|| Option::<Inmate>::None);
    let mut busy = use_signal(|| false);

    let lister = api.clone();
    let mut inmates = use_resource(move || {
        let api = lister.clone();
        let query = ListQuery::new(page(), page_size, debounced());
        async move { api.list_inmates(&query).await }
    });

    let saver = api.clone();
    let handle_save = move |inmate: Inmate| {
        let api = saver.clone();
        spawn(async move {
            busy.set(true);
            let creating = inmate.is_new();
            let result = if creating {
                api.create_inmate(&inmate).await
            } else {
                api.update_inmate(&inmate).await
            };
            busy.set(false);

            match result {
                Ok(()) => {
                    editing.set(None);
                    let title = if creating { "Inmate added" } else { "Inmate updated" };
                    notify(&mut notices, NoticeKind::Success, title, Some(inmate.full_name()));
                    inmates.restart();
                }
                Err(e) => {
                    let title = if creating {
                        "Failed to add inmate"
                    } else {
                        "Failed to update inmate"
                    };
                    notify(
                        &mut notices,
                        NoticeKind::Destructive,
                        title,
                        Some(e.user_message("Please try again")),
                    );
                }
            }
        });
    };

    let remover = api.clone();
    let handle_delete = move |_: ()| {
        let Some(target) = deleting() else {
            return;
        };
        let api = remover.clone();
        spawn(async move {
            busy.set(true);
            let result = api.delete_inmate(&target.id).await;
            busy.set(false);
            deleting.set(None);

            match result {
                Ok(()) => {
                    notify(&mut notices, NoticeKind::Success, "Inmate deleted", Some(target.full_name()));
                    inmates.restart();
                }
                Err(e) => notify(
                    &mut notices,
                    NoticeKind::Destructive,
                    "Failed to delete inmate",
                    Some(e.user_message("Please try again")),
                ),
            }
        });
    };

    // A delete can empty the last page; step back onto the new last one
    use_effect(move || {
        let total = match &*inmates.read() {
            Some(Ok(list)) => list.total(),
            _ => return,
        };
        let shown = *page.peek();
        let clamped = Pagination::new(page_size)
            .at_page(shown)
            .with_total(total)
            .clamped();
        if clamped.page != shown {
            page.set(clamped.page);
        }
    });

    let listing = inmates.read().clone();
    let total = match &listing {
        Some(Ok(list)) => list.total(),
        _ => 0,
    };
    let pagination = Pagination::new(page_size)
        .at_page(page())
        .with_total(total)
        .clamped();

    let table = match listing {
        None => rsx! {
            div { class: "table-empty", "Loading inmates..." }
        },
        Some(Err(e)) => {
            let message = load_error(&e, "inmates");
            rsx! {
                div { class: "table-error", "{message}" }
            }
        }
        Some(Ok(list)) if list.items.is_empty() => rsx! {
            div { class: "table-empty", "No inmates found" }
        },
        Some(Ok(list)) => rsx! {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Date of Birth" }
                        th { "Citizenship Number" }
                        th { "Gender" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for inmate in list.items {
                        InmateRow {
                            key: "{inmate.id}",
                            inmate: inmate,
                            on_edit: move |inmate: Inmate| editing.set(Some(InmateForm::from_inmate(&inmate))),
                            on_delete: move |inmate: Inmate| deleting.set(Some(inmate)),
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page-header",
            h2 { class: "page-title", "Inmates" }
            button {
                class: "btn btn-primary",
                onclick: move |_| editing.set(Some(InmateForm::default())),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add Inmate"
            }
        }

        div {
            class: "list-card",
            SearchBox {
                value: search(),
                placeholder: "Search inmates...",
                oninput: move |value: String| {
                    search.set(value);
                    page.set(0);
                },
            }
            {table}
            PaginationBar {
                pagination: pagination,
                on_page: move |next: u32| page.set(next),
            }
        }

        if let Some(form) = editing() {
            InmateFormModal {
                initial: form,
                busy: busy(),
                on_save: handle_save,
                on_cancel: move |_| editing.set(None),
            }
        }

        if let Some(inmate) = deleting() {
            ConfirmDialog {
                title: "Delete Inmate",
                message: format!(
                    "Are you sure you want to delete {}? This action cannot be undone.",
                    inmate.full_name()
                ),
                busy: busy(),
                on_confirm: handle_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn InmateRow(inmate: Inmate, on_edit: EventHandler<Inmate>, on_delete: EventHandler<Inmate>) -> Element {
    let date_of_birth = inmate.date_of_birth.format("%d/%m/%Y").to_string();
    let for_edit = inmate.clone();
    let for_delete = inmate.clone();

    rsx! {
        tr {
            td { "{inmate.full_name()}" }
            td { "{date_of_birth}" }
            td { "{inmate.citizenship_number}" }
            td { "{inmate.gender}" }
            td {
                button {
                    class: "icon-button icon-button--edit",
                    title: "Edit inmate",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                button {
                    class: "icon-button icon-button--delete",
                    title: "Delete inmate",
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

#[component]
fn InmateFormModal(
    initial: InmateForm,
    busy: bool,
    on_save: EventHandler<Inmate>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if initial.is_edit() { "Edit Inmate" } else { "Add New Inmate" };
    let mut form = use_signal(|| initial.clone());
    let mut errors = use_signal(Vec::<FieldError>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let built = form.read().to_inmate(today());
        match built {
            Ok(inmate) => {
                errors.set(Vec::new());
                on_save.call(inmate);
            }
            Err(found) => errors.set(found),
        }
    };

    let values = form();
    let gender_error = error_for(&errors.read(), "gender").map(str::to_string);

    rsx! {
        ModalOverlay {
            title: title.to_string(),
            wide: true,
            on_close: move |_| on_cancel.call(()),
            form {
                onsubmit: handle_submit,
                div {
                    class: "modal-body modal-grid",
                    TextField {
                        id: "inmate-first-name",
                        label: "First Name",
                        field: "first_name",
                        value: values.first_name.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().first_name = v,
                    }
                    TextField {
                        id: "inmate-middle-name",
                        label: "Middle Name",
                        field: "middle_name",
                        value: values.middle_name.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().middle_name = v,
                    }
                    TextField {
                        id: "inmate-last-name",
                        label: "Last Name",
                        field: "last_name",
                        value: values.last_name.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().last_name = v,
                    }
                    TextField {
                        id: "inmate-date-of-birth",
                        label: "Date of Birth",
                        field: "date_of_birth",
                        input_type: "date",
                        value: values.date_of_birth.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().date_of_birth = v,
                    }
                    TextField {
                        id: "inmate-citizenship-number",
                        label: "Citizenship Number",
                        field: "citizenship_number",
                        value: values.citizenship_number.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().citizenship_number = v,
                    }
                    div {
                        class: "form-field",
                        label { class: "form-label", r#for: "inmate-gender", "Gender" }
                        select {
                            id: "inmate-gender",
                            class: "form-select",
                            value: values.gender.clone(),
                            onchange: move |evt: FormEvent| form.write().gender = evt.value(),
                            option { value: "", "Select gender" }
                            for gender in Gender::ALL {
                                option {
                                    key: "{gender.code()}",
                                    value: "{gender.code()}",
                                    selected: values.gender == gender.code().to_string(),
                                    "{gender.label()}"
                                }
                            }
                        }
                        FieldMessage { message: gender_error }
                    }
                    TextField {
                        id: "inmate-address",
                        label: "Address",
                        field: "address",
                        value: values.address.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().address = v,
                    }
                    TextField {
                        id: "inmate-phone",
                        label: "Phone Number",
                        field: "phone_number",
                        input_type: "tel",
                        value: values.phone_number.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().phone_number = v,
                    }
                    TextField {
                        id: "inmate-emergency-contact",
                        label: "Emergency Contact",
                        field: "emergency_contact",
                        value: values.emergency_contact.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().emergency_contact = v,
                    }
                    TextField {
                        id: "inmate-emergency-phone",
                        label: "Emergency Contact Phone",
                        field: "emergency_contact_phone",
                        input_type: "tel",
                        value: values.emergency_contact_phone.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().emergency_contact_phone = v,
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
