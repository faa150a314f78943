//! Risk level legend shared by the stacked and scatter charts.

use dioxus::prelude::*;

use crate::core::record::RiskLevel;
use crate::i18n;

/// Legend rows read top-to-bottom High, Medium, Low by default, matching the
/// painted stacks (Low sits at the bottom of every bar).
#[component]
pub fn RiskLegend(levels: Option<Vec<RiskLevel>>) -> Element {
    let rows = levels.unwrap_or_else(|| {
        let mut all = RiskLevel::ALL.to_vec();
        all.reverse();
        all
    });

    rsx! {
        ul { class: "chart-legend",
            for level in rows.into_iter() {
                li { class: "chart-legend__row",
                    span {
                        class: "chart-legend__swatch",
                        style: "background: {level.color()};",
                    }
                    span { class: "chart-legend__label", {i18n::risk_label(level)} }
                }
            }
        }
    }
}
