//! Shared hover detail overlay. Every chart writes into one context signal;
//! this component renders whatever is current next to the pointer.

use dioxus::prelude::*;

/// One line of hover text, optionally tinted (risk levels keep their color).
#[derive(Debug, Clone, PartialEq)]
pub struct HoverLine {
    pub text: String,
    pub color: Option<&'static str>,
}

impl HoverLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn tinted(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Current hover payload plus the pointer's page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverDetail {
    pub x: f64,
    pub y: f64,
    pub lines: Vec<HoverLine>,
}

impl HoverDetail {
    pub fn at(event: &MouseEvent, lines: Vec<HoverLine>) -> Self {
        let point = event.page_coordinates();
        Self {
            x: point.x,
            y: point.y,
            lines,
        }
    }
}

#[component]
pub fn HoverOverlay() -> Element {
    let hover = use_context::<Signal<Option<HoverDetail>>>();

    let detail = match hover() {
        Some(detail) => detail,
        None => return rsx! {},
    };

    // Offset mirrors the pointer so the box never sits under the cursor.
    let left = detail.x + 10.0;
    let top = detail.y - 28.0;

    rsx! {
        div {
            class: "chart-tooltip",
            style: "left: {left}px; top: {top}px;",
            for line in detail.lines.iter() {
                if let Some(color) = line.color {
                    span { class: "chart-tooltip__line", style: "color: {color};", "{line.text}" }
                } else {
                    span { class: "chart-tooltip__line", "{line.text}" }
                }
            }
        }
    }
}
