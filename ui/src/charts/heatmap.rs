//! Diet x stress heatmap of mean risk scores.

use dioxus::prelude::*;

use crate::charts::scale::BandScale;
use crate::charts::tooltip::{HoverDetail, HoverLine};
use crate::core::aggregate::MeanRiskCell;
use crate::core::format;
use crate::core::record::{DietType, StressLevel};
use crate::i18n;
use crate::t;

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 320.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 110.0;

/// Piecewise-linear green -> yellow -> red ramp over mean risk 0..2.
fn risk_color(mean: f64) -> String {
    let lerp = |a: f64, b: f64, t: f64| a + (b - a) * t;
    let (from, to, t) = if mean <= 1.0 {
        ((0.0, 128.0, 0.0), (255.0, 255.0, 0.0), mean.max(0.0))
    } else {
        ((255.0, 255.0, 0.0), (255.0, 0.0, 0.0), (mean - 1.0).min(1.0))
    };
    let r = lerp(from.0, to.0, t).round() as u8;
    let g = lerp(from.1, to.1, t).round() as u8;
    let b = lerp(from.2, to.2, t).round() as u8;
    format!("rgb({r},{g},{b})")
}

struct Cell {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: String,
    lines: Vec<HoverLine>,
}

#[component]
pub fn HeatmapChart(cells: Vec<MeanRiskCell>) -> Element {
    let mut hover = use_context::<Signal<Option<HoverDetail>>>();

    if cells.is_empty() {
        return rsx! {
            section { class: "chart-card",
                h3 { class: "chart-card__title", {t!("chart-heatmap-title")} }
                p { class: "chart-card__placeholder", {t!("chart-empty")} }
            }
        };
    }

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let columns = BandScale::new(DietType::ALL.len(), (0.0, plot_width), 0.05);
    let rows = BandScale::new(StressLevel::ALL.len(), (0.0, plot_height), 0.05);

    let tiles: Vec<Cell> = cells
        .iter()
        .map(|cell| Cell {
            x: columns.position(cell.diet as usize),
            y: rows.position(cell.stress as usize),
            width: columns.band_width(),
            height: rows.band_width(),
            fill: risk_color(cell.mean),
            lines: vec![
                HoverLine::plain(format!("{}: {}", t!("tooltip-diet"), i18n::diet_label(cell.diet))),
                HoverLine::plain(format!(
                    "{}: {}",
                    t!("tooltip-stress"),
                    i18n::stress_label(cell.stress)
                )),
                HoverLine::plain(format!(
                    "{}: {}",
                    t!("tooltip-mean-risk"),
                    format::format_score(cell.mean)
                )),
            ],
        })
        .collect();

    rsx! {
        section { class: "chart-card",
            h3 { class: "chart-card__title", {t!("chart-heatmap-title")} }
            div { class: "chart-card__body",
                svg {
                    class: "chart chart--heatmap",
                    view_box: "0 0 {WIDTH} {HEIGHT}",
                    g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                        for tile in tiles.into_iter() {
                            rect {
                                x: "{tile.x}",
                                y: "{tile.y}",
                                width: "{tile.width}",
                                height: "{tile.height}",
                                fill: "{tile.fill}",
                                class: "chart__cell",
                                onmousemove: move |evt: MouseEvent| {
                                    hover.set(Some(HoverDetail::at(&evt, tile.lines.clone())));
                                },
                                onmouseleave: move |_| hover.set(None),
                            }
                        }

                        for (index, diet) in DietType::ALL.iter().enumerate() {
                            text {
                                x: "{columns.center(index)}",
                                y: "{plot_height + 28.0}",
                                text_anchor: "middle",
                                class: "chart__axis-label",
                                {i18n::diet_label(*diet)}
                            }
                        }

                        for (index, stress) in StressLevel::ALL.iter().enumerate() {
                            text {
                                x: "-10",
                                y: "{rows.center(index) + 4.0}",
                                text_anchor: "end",
                                class: "chart__axis-label",
                                {i18n::stress_label(*stress)}
                            }
                        }
                    }
                }
            }
        }
    }
}
