use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Marketlens" }
            p {
                "A quiet place to keep score: trade write-ups, macro context, and the lessons worth keeping."
            }

            ul { class: "page-home__features",
                li { "Browse insights by category or free-text search." }
                li { "Open a card to read the full note and the dataset behind it." }
                li { "Everything ships with the page; nothing phones home." }
            }
            p { class: "page-home__cta", "Head to the Insights tab to start reading." }
        }
    }
}
