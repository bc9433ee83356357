use dioxus::prelude::*;

use crate::core::layout::LayoutState;
use crate::core::viewport;
use crate::insights::{
    CardGrid, DetailPanel, FilterBar, InsightFilter, InsightsState, SearchBox,
};

/// The insights page: filter toolbar, card grid, and detail panel inside the
/// full-width section.
#[component]
pub fn Insights() -> Element {
    let state = use_context::<InsightsState>();
    let filter = use_signal(InsightFilter::default);
    let selected = use_signal(|| None::<String>);
    let layout = use_signal(LayoutState::new);

    // Evaluate the layout once on mount, then again on every window resize.
    // Resize events are not coalesced; each one re-runs the full evaluation.
    use_effect(move || {
        let mut layout_signal = layout;
        if let Some(width) = viewport::width() {
            layout_signal.write().apply(width);
        }
        viewport::subscribe_resize(move |width| layout_signal.write().apply(width));
    });

    let current_layout = layout();

    rsx! {
        section { class: "insights-full-width", style: current_layout.section_style(),
            div { class: current_layout.container_class(),
                h1 { "Insights" }
                p { class: "insights-intro",
                    "Trade write-ups, macro notes, and post-mortems from the desk."
                }

                if let Some(error) = state.error.as_ref() {
                    p { class: "insights-error", "{error}" }
                }

                div { class: "insights-toolbar",
                    FilterBar { filter }
                    SearchBox { filter }
                }

                div { class: "insights-layout",
                    CardGrid { records: state.records.clone(), filter, selected }
                    DetailPanel { records: state.records.clone(), files: state.files.clone(), selected }
                }
            }
        }
    }
}
