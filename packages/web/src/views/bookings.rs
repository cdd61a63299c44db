//! Bookings: searchable paged table, add booking, delete and release workflows.

use api::{BookingListItem, ListQuery, NewBooking};
use dioxus::prelude::*;
use ui::forms::{error_for, validate_release};
use ui::icons::{FaDoorOpen, FaPlus, FaTrash};
use ui::views::{ConfirmDialog, FieldMessage, ModalOverlay, SearchBox, TextField};
use ui::{
    notify, use_api, use_console_config, use_debounced, use_notices, BookingForm, FieldError, Icon,
    NoticeKind, Pagination, PaginationBar,
};

use super::{load_error, today};

/// Inmates offered in the booking form's picker.
const INMATE_PICKER_SIZE: u32 = 1000;

#[component]
pub fn Bookings() -> Element {
    let api = use_api();
    let config = use_console_config();
    let page_size = config.tables.default_page_size;
    let mut notices = use_notices();

    let mut search = use_signal(String::new);
    let debounced = use_debounced(search, config.tables.search_debounce_ms);
    let mut page = use_signal(|| 0u32);
    let mut adding = use_signal(|| false);
    let mut deleting = use_signal(|| Option::<BookingListItem>::None);
    let mut releasing = use_signal(|| Option::<BookingListItem>::None);
    let mut busy = use_signal(|| false);

    let lister = api.clone();
    let mut bookings = use_resource(move || {
        let api = lister.clone();
        let query = ListQuery::new(page(), page_size, debounced());
        async move { api.list_bookings(&query).await }
    });

    let creator = api.clone();
    let handle_create = move |booking: NewBooking| {
        let api = creator.clone();
        spawn(async move {
            busy.set(true);
            let result = api.create_booking(&booking).await;
            busy.set(false);

            match result {
                Ok(()) => {
                    adding.set(false);
                    notify(&mut notices, NoticeKind::Success, "Booking created", None);
                    bookings.restart();
                }
                Err(e) => notify(
                    &mut notices,
                    NoticeKind::Destructive,
                    "Failed to create booking",
                    Some(e.user_message("Please try again")),
                ),
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
            let result = api.delete_booking(&target.id).await;
            busy.set(false);
            deleting.set(None);

            match result {
                Ok(()) => {
                    notify(
                        &mut notices,
                        NoticeKind::Success,
                        "Booking deleted",
                        Some(target.booking_number.clone()),
                    );
                    bookings.restart();
                }
                Err(e) => notify(
                    &mut notices,
                    NoticeKind::Destructive,
                    "Failed to delete booking",
                    Some(e.user_message("Please try again")),
                ),
            }
        });
    };

    let releaser = api.clone();
    let handle_release = move |reason: String| {
        let Some(target) = releasing() else {
            return;
        };
        let api = releaser.clone();
        spawn(async move {
            busy.set(true);
            let result = api.release_booking(&target.id, &reason).await;
            busy.set(false);

            match result {
                Ok(()) => {
                    releasing.set(None);
                    notify(
                        &mut notices,
                        NoticeKind::Success,
                        "Inmate released",
                        Some(format!("{} ({})", target.inmate_name, target.booking_number)),
                    );
                    bookings.restart();
                }
                Err(e) => notify(
                    &mut notices,
                    NoticeKind::Destructive,
                    "Failed to release inmate",
                    Some(e.user_message("Please try again")),
                ),
            }
        });
    };

    // A delete or release can empty the last page; step back onto the new last one
    use_effect(move || {
        let total = match &*bookings.read() {
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

    let listing = bookings.read().clone();
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
            div { class: "table-empty", "Loading bookings..." }
        },
        Some(Err(e)) => {
            let message = load_error(&e, "bookings");
            rsx! {
                div { class: "table-error", "{message}" }
            }
        }
        Some(Ok(list)) if list.items.is_empty() => rsx! {
            div { class: "table-empty", "No bookings found" }
        },
        Some(Ok(list)) => rsx! {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Booking Date" }
                        th { "Booking Number" }
                        th { "Inmate Name" }
                        th { "Booking Location" }
                        th { "Facility Name" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for booking in list.items {
                        BookingRow {
                            key: "{booking.id}",
                            booking: booking,
                            on_release: move |booking: BookingListItem| releasing.set(Some(booking)),
                            on_delete: move |booking: BookingListItem| deleting.set(Some(booking)),
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page-header",
            h2 { class: "page-title", "Bookings" }
            button {
                class: "btn btn-primary",
                onclick: move |_| adding.set(true),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add Booking"
            }
        }

        div {
            class: "list-card",
            SearchBox {
                value: search(),
                placeholder: "Search bookings...",
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

        if adding() {
            AddBookingModal {
                busy: busy(),
                on_save: handle_create,
                on_cancel: move |_| adding.set(false),
            }
        }

        if let Some(booking) = deleting() {
            ConfirmDialog {
                title: "Delete Booking",
                message: format!(
                    "Are you sure you want to delete booking {}? This action cannot be undone.",
                    booking.booking_number
                ),
                busy: busy(),
                on_confirm: handle_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }

        if let Some(booking) = releasing() {
            ReleaseModal {
                booking: booking,
                busy: busy(),
                on_release: handle_release,
                on_cancel: move |_| releasing.set(None),
            }
        }
    }
}

#[component]
fn BookingRow(
    booking: BookingListItem,
    on_release: EventHandler<BookingListItem>,
    on_delete: EventHandler<BookingListItem>,
) -> Element {
    let booking_date = booking.booking_date.format("%d/%m/%Y").to_string();
    let for_release = booking.clone();
    let for_delete = booking.clone();

    rsx! {
        tr {
            td { "{booking_date}" }
            td { "{booking.booking_number}" }
            td { "{booking.inmate_name}" }
            td { "{booking.booking_location}" }
            td { "{booking.facility_name}" }
            td {
                button {
                    class: "icon-button icon-button--release",
                    title: "Release inmate",
                    onclick: move |_| on_release.call(for_release.clone()),
                    Icon { icon: FaDoorOpen, width: 14, height: 14 }
                }
                button {
                    class: "icon-button icon-button--delete",
                    title: "Delete booking",
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

#[component]
fn AddBookingModal(busy: bool, on_save: EventHandler<NewBooking>, on_cancel: EventHandler<()>) -> Element {
    let api = use_api();
    let mut form = use_signal(|| BookingForm::starting(today()));
    let mut errors = use_signal(Vec::<FieldError>::new);

    let inmate_api = api.clone();
    let inmates = use_resource(move || {
        let api = inmate_api.clone();
        async move {
            api.list_inmates(&ListQuery::new(0, INMATE_PICKER_SIZE, ""))
                .await
                .map(|page| page.items)
                .unwrap_or_else(|e| {
                    tracing::warn!("Could not load inmates for the booking form: {e}");
                    Vec::new()
                })
        }
    });
    let charges = use_resource(move || {
        let api = api.clone();
        async move {
            api.list_charges().await.unwrap_or_else(|e| {
                tracing::warn!("Could not load charges for the booking form: {e}");
                Vec::new()
            })
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let built = form.read().to_booking(today());
        match built {
            Ok(booking) => {
                errors.set(Vec::new());
                on_save.call(booking);
            }
            Err(found) => errors.set(found),
        }
    };

    let values = form();
    let inmate_options = inmates.read().clone().unwrap_or_default();
    let charge_options = charges.read().clone().unwrap_or_default();
    let inmate_error = error_for(&errors.read(), "inmate_id").map(str::to_string);
    let charge_error = error_for(&errors.read(), "charge_id").map(str::to_string);

    rsx! {
        ModalOverlay {
            title: "Add New Booking",
            on_close: move |_| on_cancel.call(()),
            form {
                onsubmit: handle_submit,
                div {
                    class: "modal-body",
                    div {
                        class: "form-field",
                        label { class: "form-label", r#for: "booking-inmate", "Inmate" }
                        select {
                            id: "booking-inmate",
                            class: "form-select",
                            value: values.inmate_id.clone(),
                            onchange: move |evt: FormEvent| form.write().inmate_id = evt.value(),
                            option { value: "", "Select an inmate" }
                            for inmate in inmate_options {
                                option {
                                    key: "{inmate.id}",
                                    value: "{inmate.id}",
                                    selected: values.inmate_id == inmate.id,
                                    "{inmate.full_name()}"
                                }
                            }
                        }
                        FieldMessage { message: inmate_error }
                    }
                    div {
                        class: "form-field",
                        label { class: "form-label", r#for: "booking-charge", "Charge" }
                        select {
                            id: "booking-charge",
                            class: "form-select",
                            value: values.charge_id.clone(),
                            onchange: move |evt: FormEvent| form.write().charge_id = evt.value(),
                            option { value: "", "Select a charge" }
                            for charge in charge_options {
                                option {
                                    key: "{charge.id}",
                                    value: "{charge.id}",
                                    selected: values.charge_id == charge.id,
                                    "{charge.charge_name}"
                                }
                            }
                        }
                        FieldMessage { message: charge_error }
                    }
                    TextField {
                        id: "booking-date",
                        label: "Booking Date",
                        field: "booking_date",
                        input_type: "date",
                        value: values.booking_date.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().booking_date = v,
                    }
                    TextField {
                        id: "booking-location",
                        label: "Booking Location",
                        field: "booking_location",
                        value: values.booking_location.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().booking_location = v,
                    }
                    TextField {
                        id: "booking-facility",
                        label: "Facility Name",
                        field: "facility_name",
                        value: values.facility_name.clone(),
                        errors: errors(),
                        oninput: move |v: String| form.write().facility_name = v,
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
                        if busy { "Saving..." } else { "Create Booking" }
                    }
                }
            }
        }
    }
}

#[component]
fn ReleaseModal(
    booking: BookingListItem,
    busy: bool,
    on_release: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut reason = use_signal(String::new);
    let mut errors = use_signal(Vec::<FieldError>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let found = validate_release(&reason());
        if found.is_empty() {
            errors.set(Vec::new());
            on_release.call(reason());
        } else {
            errors.set(found);
        }
    };

    let reason_error = error_for(&errors.read(), "release_reason").map(str::to_string);

    rsx! {
        ModalOverlay {
            title: "Release Inmate",
            on_close: move |_| on_cancel.call(()),
            form {
                onsubmit: handle_submit,
                div {
                    class: "modal-body",
                    p {
                        class: "confirm-message",
                        "Releasing {booking.inmate_name} from booking {booking.booking_number}."
                    }
                    div {
                        class: "form-field",
                        label { class: "form-label", r#for: "release-reason", "Release Reason" }
                        textarea {
                            id: "release-reason",
                            class: "form-textarea",
                            rows: "4",
                            value: reason(),
                            oninput: move |evt: FormEvent| reason.set(evt.value()),
                        }
                        FieldMessage { message: reason_error }
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
                        if busy { "Releasing..." } else { "Release" }
                    }
                }
            }
        }
    }
}
