//! Transient operator notices ("Inmate added", "Failed to delete booking").
//!
//! A `Signal<Notices>` is provided at the root of the app. Views push entries
//! with [`notify`]; [`NoticeList`] renders them in a corner stack. Entries
//! dismiss themselves after [`NOTICE_TTL_MS`] or when clicked.

use dioxus::prelude::*;
use dioxus::core::spawn_forever;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::timer::sleep_ms;
use crate::Icon;

pub const NOTICE_TTL_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, title: &str, description: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            kind,
            title: title.to_string(),
            description,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|notice| notice.id != id);
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Show a notice and schedule its removal.
pub fn notify(notices: &mut Signal<Notices>, kind: NoticeKind, title: &str, description: Option<String>) {
    match kind {
        NoticeKind::Success => tracing::info!("{title}"),
        NoticeKind::Destructive => tracing::warn!("{title}: {}", description.as_deref().unwrap_or("")),
    }
    let id = notices.write().push(kind, title, description);

    // Outlives the calling view: a login notice survives the redirect
    let mut notices = *notices;
    spawn_forever(async move {
        sleep_ms(NOTICE_TTL_MS).await;
        notices.write().dismiss(id);
    });
}

#[component]
pub fn NoticeList() -> Element {
    let mut notices = use_notices();

    if notices.read().is_empty() {
        return rsx! {};
    }

    let entries = notices.read().entries().to_vec();

    rsx! {
        div {
            class: "notice-list",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: match notice.kind {
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Destructive => "notice notice--destructive",
                    },
                    onclick: move |_| notices.write().dismiss(notice.id),
                    span {
                        class: "notice-icon",
                        {match notice.kind {
                            NoticeKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                            NoticeKind::Destructive => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
                        }}
                    }
                    div {
                        class: "notice-body",
                        div { class: "notice-title", "{notice.title}" }
                        if let Some(description) = &notice.description {
                            div { class: "notice-description", "{description}" }
                        }
                    }
                    span {
                        class: "notice-close",
                        title: "Dismiss",
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
