//! Twin stacked-bar panels: risk by diet type and by activity level.
//! Both panels share one y scale so their bars are directly comparable.

use dioxus::prelude::*;

use crate::charts::legend::RiskLegend;
use crate::charts::scale::{BandScale, LinearScale};
use crate::charts::tooltip::{HoverDetail, HoverLine};
use crate::core::aggregate::{GroupTally, StackSegment};
use crate::core::record::{ActivityLevel, DietType};
use crate::i18n;
use crate::t;

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 50.0;
const PANEL_GAP: f64 = 24.0;

struct SegmentRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: &'static str,
    lines: Vec<HoverLine>,
}

struct AxisLabel {
    x: f64,
    text: String,
}

#[component]
pub fn LifestyleChart(
    diet: Vec<GroupTally<DietType>>,
    activity: Vec<GroupTally<ActivityLevel>>,
) -> Element {
    let mut hover = use_context::<Signal<Option<HoverDetail>>>();

    if diet.is_empty() && activity.is_empty() {
        return rsx! {
            section { class: "chart-card",
                h3 { class: "chart-card__title", {t!("chart-lifestyle-title")} }
                p { class: "chart-card__placeholder", {t!("chart-empty")} }
            }
        };
    }

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let panel_width = (plot_width - PANEL_GAP) / 2.0;
    let right_offset = panel_width + PANEL_GAP;

    let max_total = diet
        .iter()
        .map(|g| g.total)
        .chain(activity.iter().map(|g| g.total))
        .max()
        .unwrap_or(0);
    let y = LinearScale::nice((0.0, max_total as f64), (plot_height, 0.0), 5);

    let mut rects = Vec::new();
    let mut labels = Vec::new();

    let diet_bands = BandScale::new(diet.len(), (0.0, panel_width), 0.25);
    for (index, group) in diet.iter().enumerate() {
        labels.push(AxisLabel {
            x: diet_bands.center(index),
            text: i18n::diet_label(group.key),
        });
        push_stack(
            &mut rects,
            group.tally.stack(),
            diet_bands.position(index),
            diet_bands.band_width(),
            &y,
            i18n::diet_label(group.key),
        );
    }

    let activity_bands = BandScale::new(activity.len(), (0.0, panel_width), 0.25);
    for (index, group) in activity.iter().enumerate() {
        labels.push(AxisLabel {
            x: right_offset + activity_bands.center(index),
            text: i18n::activity_label(group.key),
        });
        push_stack(
            &mut rects,
            group.tally.stack(),
            right_offset + activity_bands.position(index),
            activity_bands.band_width(),
            &y,
            i18n::activity_label(group.key),
        );
    }

    let ticks = y.ticks(5);
    let separator_x = panel_width + PANEL_GAP / 2.0;
    let diet_caption_x = panel_width / 2.0;
    let activity_caption_x = right_offset + panel_width / 2.0;

    rsx! {
        section { class: "chart-card",
            h3 { class: "chart-card__title", {t!("chart-lifestyle-title")} }
            div { class: "chart-card__body",
                svg {
                    class: "chart chart--lifestyle",
                    view_box: "0 0 {WIDTH} {HEIGHT}",
                    g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                        text {
                            x: "{diet_caption_x}",
                            y: "-14",
                            text_anchor: "middle",
                            class: "chart__panel-caption",
                            {t!("chart-lifestyle-diet")}
                        }
                        text {
                            x: "{activity_caption_x}",
                            y: "-14",
                            text_anchor: "middle",
                            class: "chart__panel-caption",
                            {t!("chart-lifestyle-activity")}
                        }

                        for tick in ticks.iter() {
                            line {
                                x1: "0",
                                x2: "{plot_width}",
                                y1: "{y.scale(*tick)}",
                                y2: "{y.scale(*tick)}",
                                class: "chart__gridline",
                            }
                            text {
                                x: "-8",
                                y: "{y.scale(*tick) + 4.0}",
                                text_anchor: "end",
                                class: "chart__tick-label",
                                "{tick:.0}"
                            }
                        }

                        line {
                            x1: "{separator_x}",
                            x2: "{separator_x}",
                            y1: "0",
                            y2: "{plot_height}",
                            stroke_dasharray: "4 4",
                            class: "chart__separator",
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

                        for label in labels.into_iter() {
                            text {
                                x: "{label.x}",
                                y: "{plot_height + 24.0}",
                                text_anchor: "middle",
                                class: "chart__axis-label",
                                "{label.text}"
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

fn push_stack(
    rects: &mut Vec<SegmentRect>,
    segments: [StackSegment; 3],
    x: f64,
    width: f64,
    y: &LinearScale,
    group_label: String,
) {
    for segment in segments {
        if segment.end == segment.start {
            continue;
        }
        let top = y.scale(segment.end as f64);
        let bottom = y.scale(segment.start as f64);
        rects.push(SegmentRect {
            x,
            y: top,
            width,
            height: bottom - top,
            color: segment.level.color(),
            lines: vec![
                HoverLine::plain(group_label.clone()),
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
