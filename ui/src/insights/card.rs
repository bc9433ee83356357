use dioxus::prelude::*;

use super::filter::InsightFilter;
use super::Insight;
use crate::core::format::format_card_date;

/// The card grid. Every record renders; filtering toggles the display style
/// rather than dropping cards from the tree, and visibility is recomputed
/// for the whole set on each action.
#[component]
pub fn CardGrid(
    records: Vec<Insight>,
    filter: Signal<InsightFilter>,
    selected: Signal<Option<String>>,
) -> Element {
    let current = filter();

    rsx! {
        div { class: "insight-grid",
            for record in records.into_iter() {
                {render_card(current.is_visible(&record), record, selected)}
            }
        }
    }
}

fn render_card(visible: bool, record: Insight, mut selected: Signal<Option<String>>) -> Element {
    let Insight {
        slug,
        title,
        summary,
        category,
        date,
        outcome,
        tags,
        author,
        ..
    } = record;

    let card_slug = slug.clone();
    let date_label = format_card_date(&date);

    rsx! {
        article {
            key: "{slug}",
            class: "insight-card",
            "data-category": category.slug(),
            style: if visible { "display: block;" } else { "display: none;" },
            onclick: move |_| selected.set(Some(card_slug.clone())),

            header { class: "insight-card__header",
                h3 { class: "card-title", "{title}" }
                span { class: "insight-card__date", "{date_label}" }
            }

            p { class: "insight-summary", "{summary}" }

            footer { class: "insight-card__footer",
                span { class: format!("insight-badge insight-badge--{}", outcome.slug()),
                    {outcome.label()}
                }
                for tag in tags.iter() {
                    span { key: "{tag}", class: "insight-tag", "{tag}" }
                }
                if let Some(author) = author.as_ref() {
                    span { class: "insight-card__author", "by {author}" }
                }
            }
        }
    }
}
