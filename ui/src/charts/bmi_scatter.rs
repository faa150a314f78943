//! Scatter of BMI against risk rows; dot size tracks sleep hours.

use dioxus::prelude::*;

use crate::charts::scale::{BandScale, LinearScale};
use crate::charts::tooltip::{HoverDetail, HoverLine};
use crate::core::format;
use crate::core::record::{Record, RiskLevel};
use crate::i18n;
use crate::t;

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 90.0;

const DOT_RADIUS_MIN: f64 = 4.0;
const DOT_RADIUS_MAX: f64 = 15.0;

struct Dot {
    cx: f64,
    cy: f64,
    r: f64,
    color: &'static str,
    lines: Vec<HoverLine>,
}

/// Rows run bottom-to-top Low, Medium, High, like the stacked bars.
fn risk_row(level: RiskLevel) -> usize {
    match level {
        RiskLevel::High => 0,
        RiskLevel::Medium => 1,
        RiskLevel::Low => 2,
    }
}

#[component]
pub fn BmiScatterChart(records: Vec<Record>) -> Element {
    let mut hover = use_context::<Signal<Option<HoverDetail>>>();

    if records.is_empty() {
        return rsx! {
            section { class: "chart-card",
                h3 { class: "chart-card__title", {t!("chart-bmi-title")} }
                p { class: "chart-card__placeholder", {t!("chart-empty")} }
            }
        };
    }

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let bmi_extent = extent(records.iter().map(|r| r.bmi));
    let sleep_extent = extent(records.iter().map(|r| r.sleep_hours));

    let x = LinearScale::nice(bmi_extent, (0.0, plot_width), 6);
    let rows = BandScale::new(RiskLevel::ALL.len(), (0.0, plot_height), 0.0);
    let radius = LinearScale::new(sleep_extent, (DOT_RADIUS_MIN, DOT_RADIUS_MAX));

    let dots: Vec<Dot> = records
        .iter()
        .map(|record| {
            let level = record.risk_level;
            Dot {
                cx: x.scale(record.bmi),
                cy: rows.center(risk_row(level)),
                r: radius.scale(record.sleep_hours),
                color: level.color(),
                lines: vec![
                    HoverLine::plain(format!("{}: {}", t!("tooltip-age"), record.age)),
                    HoverLine::plain(format!(
                        "{}: {}",
                        t!("tooltip-bmi"),
                        format::format_mean(record.bmi)
                    )),
                    HoverLine::tinted(i18n::risk_label(level), level.color()),
                    HoverLine::plain(format!(
                        "{}: {} h",
                        t!("tooltip-sleep"),
                        format::format_mean(record.sleep_hours)
                    )),
                ],
            }
        })
        .collect();

    let ticks = x.ticks(6);

    rsx! {
        section { class: "chart-card",
            h3 { class: "chart-card__title", {t!("chart-bmi-title")} }
            div { class: "chart-card__body",
                svg {
                    class: "chart chart--bmi",
                    view_box: "0 0 {WIDTH} {HEIGHT}",
                    g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                        for level in RiskLevel::ALL {
                            line {
                                x1: "0",
                                x2: "{plot_width}",
                                y1: "{rows.center(risk_row(level))}",
                                y2: "{rows.center(risk_row(level))}",
                                class: "chart__gridline",
                            }
                            text {
                                x: "-10",
                                y: "{rows.center(risk_row(level)) + 4.0}",
                                text_anchor: "end",
                                class: "chart__tick-label",
                                fill: "{level.color()}",
                                {i18n::risk_label(level)}
                            }
                        }

                        for tick in ticks.iter() {
                            text {
                                x: "{x.scale(*tick)}",
                                y: "{plot_height + 24.0}",
                                text_anchor: "middle",
                                class: "chart__axis-label",
                                "{tick:.0}"
                            }
                        }
                        line {
                            x1: "0",
                            x2: "{plot_width}",
                            y1: "{plot_height}",
                            y2: "{plot_height}",
                            class: "chart__axis",
                        }

                        for dot in dots.into_iter() {
                            circle {
                                cx: "{dot.cx}",
                                cy: "{dot.cy}",
                                r: "{dot.r}",
                                fill: "{dot.color}",
                                fill_opacity: "0.7",
                                class: "chart__dot",
                                onmousemove: move |evt: MouseEvent| {
                                    hover.set(Some(HoverDetail::at(&evt, dot.lines.clone())));
                                },
                                onmouseleave: move |_| hover.set(None),
                            }
                        }
                    }
                }
            }
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}
