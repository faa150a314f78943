//! Stacked risk counts split by regular health checkup habit.

use dioxus::prelude::*;

use crate::charts::legend::RiskLegend;
use crate::charts::scale::{BandScale, LinearScale};
use crate::charts::tooltip::{HoverDetail, HoverLine};
use crate::core::aggregate::GroupTally;
use crate::core::record::YesNo;
use crate::i18n;
use crate::t;

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 50.0;

struct SegmentRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: &'static str,
    lines: Vec<HoverLine>,
}

#[component]
pub fn CheckupChart(groups: Vec<GroupTally<YesNo>>) -> Element {
    let mut hover = use_context::<Signal<Option<HoverDetail>>>();

    if groups.is_empty() {
        return rsx! {
            section { class: "chart-card",
                h3 { class: "chart-card__title", {t!("chart-checkup-title")} }
                p { class: "chart-card__placeholder", {t!("chart-empty")} }
            }
        };
    }

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let x = BandScale::new(groups.len(), (0.0, plot_width), 0.4);
    let max_total = groups.iter().map(|group| group.total).max().unwrap_or(0);
    let y = LinearScale::nice((0.0, max_total as f64), (plot_height, 0.0), 5);

    let mut rects: Vec<SegmentRect> = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        let answer = i18n::yes_no_label(group.key);
        for segment in group.tally.stack() {
            if segment.end == segment.start {
                continue;
            }
            let top = y.scale(segment.end as f64);
            let bottom = y.scale(segment.start as f64);
            rects.push(SegmentRect {
                x: x.position(index),
                y: top,
                width: x.band_width(),
                height: bottom - top,
                color: segment.level.color(),
                lines: vec![
                    HoverLine::plain(format!("{}: {answer}", t!("tooltip-checkup"))),
                    HoverLine::tinted(i18n::risk_label(segment.level), segment.level.color()),
                    HoverLine::plain(format!(
                        "{}: {}",
                        t!("tooltip-people"),
                        segment.end - segment.start
                    )),
                ],
            });
        }
    }

    rsx! {
        section { class: "chart-card",
            h3 { class: "chart-card__title", {t!("chart-checkup-title")} }
            div { class: "chart-card__body",
                svg {
                    class: "chart chart--checkup",
                    view_box: "0 0 {WIDTH} {HEIGHT}",
                    g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                        for tick in y.ticks(5) {
                            line {
                                x1: "0",
                                x2: "{plot_width}",
                                y1: "{y.scale(tick)}",
                                y2: "{y.scale(tick)}",
                                class: "chart__gridline",
                            }
                            text {
                                x: "-8",
                                y: "{y.scale(tick) + 4.0}",
                                text_anchor: "end",
                                class: "chart__tick-label",
                                "{tick:.0}"
                            }
                        }

                        for slice in rects.into_iter() {
                            rect {
                                x: "{slice.x}",
                                y: "{slice.y}",
                                width: "{slice.width}",
                                height: "{slice.height}",
                                fill: "{slice.color}",
                                class: "chart__bar",
                                onmousemove: move |evt: MouseEvent| {
                                    hover.set(Some(HoverDetail::at(&evt, slice.lines.clone())));
                                },
                                onmouseleave: move |_| hover.set(None),
                            }
                        }

                        for (index, group) in groups.iter().enumerate() {
                            text {
                                x: "{x.center(index)}",
                                y: "{plot_height + 24.0}",
                                text_anchor: "middle",
                                class: "chart__axis-label",
                                {i18n::yes_no_label(group.key)}
                            }
                        }

                        line {
                            x1: "0",
                            x2: "{plot_width}",
                            y1: "{plot_height}",
                            y2: "{plot_height}",
                            class: "chart__axis",
                        }
                    }
                }
                RiskLegend {}
            }
        }
    }
}
