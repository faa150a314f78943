//! Headline figures for the current filter selection.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::kpi::KpiSummary;
use crate::core::record::RiskLevel;
use crate::i18n;
use crate::t;

#[component]
fn KpiCard(label: String, value: String, color: Option<&'static str>) -> Element {
    rsx! {
        div { class: "kpi-card",
            span { class: "kpi-card__label", {label} }
            if let Some(color) = color {
                strong { class: "kpi-card__value", style: "color: {color};", {value} }
            } else {
                strong { class: "kpi-card__value", {value} }
            }
        }
    }
}

/// Card with one figure per risk level present in the selection.
#[component]
fn KpiBreakdownCard(label: String, rows: Vec<(RiskLevel, String)>) -> Element {
    rsx! {
        div { class: "kpi-card kpi-card--split",
            span { class: "kpi-card__label", {label} }
            if rows.is_empty() {
                strong { class: "kpi-card__value", {t!("kpi-not-available")} }
            } else {
                ul { class: "kpi-card__rows",
                    for (level, figure) in rows.into_iter() {
                        li { class: "kpi-card__row",
                            span {
                                class: "kpi-card__level",
                                style: "color: {level.color()};",
                                {i18n::risk_label(level)}
                            }
                            span { class: "kpi-card__figure", {figure} }
                        }
                    }
                }
            }
        }
    }
}

fn share_for(summary: &KpiSummary, level: RiskLevel) -> String {
    summary
        .risk_percent
        .iter()
        .find(|(candidate, _)| *candidate == level)
        .map(|(_, percent)| format::format_percent(*percent))
        .unwrap_or_else(|| t!("kpi-not-available"))
}

#[component]
pub fn KpiPanel(summary: KpiSummary) -> Element {
    let checkup = summary
        .checkup_percent
        .map(format::format_percent)
        .unwrap_or_else(|| t!("kpi-not-available"));
    let mean_age: Vec<(RiskLevel, String)> = summary
        .mean_age
        .iter()
        .map(|(level, mean)| (*level, format::format_mean(*mean)))
        .collect();
    let mean_sleep: Vec<(RiskLevel, String)> = summary
        .mean_sleep
        .iter()
        .map(|(level, mean)| (*level, format::format_mean(*mean)))
        .collect();

    rsx! {
        section { class: "kpis",
            KpiCard {
                label: t!("kpi-total"),
                value: summary.total.to_string(),
            }
            KpiCard {
                label: t!("kpi-low-share"),
                value: share_for(&summary, RiskLevel::Low),
                color: RiskLevel::Low.color(),
            }
            KpiCard {
                label: t!("kpi-medium-share"),
                value: share_for(&summary, RiskLevel::Medium),
                color: RiskLevel::Medium.color(),
            }
            KpiCard {
                label: t!("kpi-high-share"),
                value: share_for(&summary, RiskLevel::High),
                color: RiskLevel::High.color(),
            }
            KpiCard {
                label: t!("kpi-checkup-share"),
                value: checkup,
            }
            KpiBreakdownCard { label: t!("kpi-mean-age"), rows: mean_age }
            KpiBreakdownCard { label: t!("kpi-mean-sleep"), rows: mean_sleep }
            KpiCard {
                label: t!("kpi-unchecked-high"),
                value: summary.unchecked_high_risk.to_string(),
                color: RiskLevel::High.color(),
            }
        }
    }
}
