use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
/// Each closure receives the label to render inside the link.
///
/// A platform crate installs it before rendering the root:
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     insights: |label| rsx!( Link { class: "navbar__link", to: Route::Insights {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub insights: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    // Build the nav links if a builder is registered; a bare brand header
    // renders otherwise.
    let links: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let insights = (builder.insights)("Insights");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {insights}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Marketlens" }
                    }
                    span { class: "navbar__brand-subtitle", "insights from the desk" }
                }

                if let Some(nav) = links {
                    {nav}
                }
            }
        }
    }
}
