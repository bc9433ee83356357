use dioxus::prelude::*;

use super::filter::{InsightFilter, CATEGORY_FILTERS};

/// Category filter buttons. At most one carries the active styling: the one
/// whose filter value matches the last selected category.
#[component]
pub fn FilterBar(filter: Signal<InsightFilter>) -> Element {
    let mut filter_signal = filter;

    rsx! {
        div { class: "insight-filters",
            for (value, label) in CATEGORY_FILTERS {
                button {
                    key: "{value}",
                    r#type: "button",
                    class: if filter().is_button_active(value) { "filter-btn active" } else { "filter-btn" },
                    "data-filter": value,
                    onclick: move |_| filter_signal.write().select_category(value),
                    "{label}"
                }
            }
        }
    }
}

/// Free-text search over card titles and summaries. Fires on every
/// keystroke; the term is matched as typed, without trimming.
#[component]
pub fn SearchBox(filter: Signal<InsightFilter>) -> Element {
    let mut filter_signal = filter;

    rsx! {
        div { class: "insight-search",
            input {
                id: "insightSearch",
                r#type: "search",
                placeholder: "Search insights…",
                aria_label: "Search insights",
                oninput: move |event: dioxus::events::FormEvent| {
                    filter_signal.write().search(&event.value())
                },
            }
        }
    }
}
