//! Radar overlay of normalized attribute profiles per risk level.

use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;

use crate::charts::legend::RiskLegend;
use crate::charts::tooltip::{HoverDetail, HoverLine};
use crate::core::format;
use crate::core::profile::{ProfileAttribute, ProfileAxis};
use crate::core::record::RiskLevel;
use crate::i18n;
use crate::t;

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 420.0;
const RING_COUNT: usize = 5;
const LABEL_OFFSET: f64 = 1.18;

const CENTER_X: f64 = WIDTH / 2.0;
const CENTER_Y: f64 = HEIGHT / 2.0;
const RADIUS: f64 = HEIGHT / 2.0 - 70.0;

/// Point on the spoke for `index`, `distance` units from the center.
///
/// The first spoke points straight up and the rest follow clockwise.
fn spoke_point(index: usize, distance: f64) -> (f64, f64) {
    let angle = TAU * index as f64 / ProfileAttribute::ALL.len() as f64 - FRAC_PI_2;
    (
        CENTER_X + distance * angle.cos(),
        CENTER_Y + distance * angle.sin(),
    )
}

struct Marker {
    cx: f64,
    cy: f64,
    color: &'static str,
    lines: Vec<HoverLine>,
}

struct Outline {
    color: &'static str,
    points: String,
}

fn build_outline(level: RiskLevel, axes: &[ProfileAxis]) -> Outline {
    let mut points = String::new();
    for (index, axis) in axes.iter().enumerate() {
        let (px, py) = spoke_point(index, axis.value * RADIUS);
        if !points.is_empty() {
            points.push(' ');
        }
        points.push_str(&format!("{px:.1},{py:.1}"));
    }
    Outline {
        color: level.color(),
        points,
    }
}

fn build_markers(level: RiskLevel, axes: &[ProfileAxis]) -> Vec<Marker> {
    axes.iter()
        .enumerate()
        .map(|(index, axis)| {
            let (px, py) = spoke_point(index, axis.value * RADIUS);
            Marker {
                cx: px,
                cy: py,
                color: level.color(),
                lines: vec![
                    HoverLine::tinted(i18n::risk_label(level), level.color()),
                    HoverLine::plain(format!(
                        "{}: {}",
                        i18n::attribute_label(axis.attribute),
                        format::format_score(axis.value)
                    )),
                ],
            }
        })
        .collect()
}

#[component]
pub fn RadarChart(profiles: Vec<(RiskLevel, Vec<ProfileAxis>)>) -> Element {
    let mut hover = use_context::<Signal<Option<HoverDetail>>>();

    if profiles.is_empty() {
        return rsx! {
            section { class: "chart-card",
                h3 { class: "chart-card__title", {t!("chart-radar-title")} }
                p { class: "chart-card__placeholder", {t!("chart-empty")} }
            }
        };
    }

    let outlines: Vec<Outline> = profiles
        .iter()
        .map(|(level, axes)| build_outline(*level, axes))
        .collect();
    let markers: Vec<Marker> = profiles
        .iter()
        .flat_map(|(level, axes)| build_markers(*level, axes))
        .collect();
    let mut legend_levels: Vec<RiskLevel> = profiles.iter().map(|(level, _)| *level).collect();
    legend_levels.reverse();

    rsx! {
        section { class: "chart-card chart-card--radar",
            h3 { class: "chart-card__title", {t!("chart-radar-title")} }
            div { class: "chart-card__body",
                svg {
                    class: "chart chart--radar",
                    view_box: "0 0 {WIDTH} {HEIGHT}",
                    for ring in 1..=RING_COUNT {
                        circle {
                            cx: "{CENTER_X}",
                            cy: "{CENTER_Y}",
                            r: "{RADIUS * ring as f64 / RING_COUNT as f64}",
                            class: "chart__ring",
                        }
                    }

                    for index in 0..ProfileAttribute::ALL.len() {
                        line {
                            x1: "{CENTER_X}",
                            y1: "{CENTER_Y}",
                            x2: "{spoke_point(index, RADIUS).0}",
                            y2: "{spoke_point(index, RADIUS).1}",
                            class: "chart__spoke",
                        }
                    }

                    for outline in outlines.into_iter() {
                        polygon {
                            points: "{outline.points}",
                            fill: "{outline.color}",
                            fill_opacity: "0.2",
                            stroke: "{outline.color}",
                            stroke_width: "2",
                            class: "chart__profile",
                        }
                    }

                    for marker in markers.into_iter() {
                        circle {
                            cx: "{marker.cx}",
                            cy: "{marker.cy}",
                            r: "4",
                            fill: "{marker.color}",
                            class: "chart__marker",
                            onmousemove: move |evt: MouseEvent| {
                                hover.set(Some(HoverDetail::at(&evt, marker.lines.clone())));
                            },
                            onmouseleave: move |_| hover.set(None),
                        }
                    }

                    for (index, attribute) in ProfileAttribute::ALL.iter().enumerate() {
                        text {
                            x: "{spoke_point(index, RADIUS * LABEL_OFFSET).0}",
                            y: "{spoke_point(index, RADIUS * LABEL_OFFSET).1 + 4.0}",
                            text_anchor: "middle",
                            class: "chart__axis-label",
                            {i18n::attribute_label(*attribute)}
                        }
                    }
                }
                RiskLegend { levels: legend_levels }
            }
        }
    }
}
