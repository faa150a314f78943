use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    rsx! {
        section { class: "page page-about",
            h1 { {crate::t!("about-title")} }
            p { {crate::t!("about-intro-1")} }
            p { {crate::t!("about-intro-2")} }

            ul { class: "page-about__points",
                li { {crate::t!("about-point-filters")} }
                li { {crate::t!("about-point-charts")} }
                li { {crate::t!("about-point-radar")} }
            }
            p { class: "page-about__note",
                {crate::t!("about-note")}
            }
        }
    }
}
