//! Paging state for the list views and the bar that drives it.

use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Zero-based paging over a server-side list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    pub fn at_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn last_page(&self) -> u32 {
        self.page_count() - 1
    }

    /// Same paging with `page` pulled back onto the last page when the total
    /// no longer reaches it (a delete emptied the page being shown).
    pub fn clamped(self) -> Self {
        let last = self.last_page();
        self.at_page(self.page.min(last))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// One-based page number for display.
    pub fn page_number(&self) -> u32 {
        self.page + 1
    }

    /// "11-20 of 31", or "0 of 0" for an empty list.
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0 of 0".to_string();
        }
        let size = u64::from(self.page_size.max(1));
        let first = u64::from(self.page) * size + 1;
        let last = (first + size - 1).min(self.total);
        format!("{first}-{last} of {}", self.total)
    }
}

#[component]
pub fn PaginationBar(pagination: Pagination, on_page: EventHandler<u32>) -> Element {
    let page = pagination.page;

    rsx! {
        div {
            class: "pagination-bar",
            span { class: "pagination-range", "{pagination.range_label()}" }
            button {
                class: "pagination-button",
                title: "Previous page",
                disabled: !pagination.has_previous(),
                onclick: move |_| on_page.call(page.saturating_sub(1)),
                Icon { icon: FaChevronLeft, width: 12, height: 12 }
            }
            span { class: "pagination-page", "Page {pagination.page_number()} of {pagination.page_count()}" }
            button {
                class: "pagination-button",
                title: "Next page",
                disabled: !pagination.has_next(),
                onclick: move |_| on_page.call(page + 1),
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}
