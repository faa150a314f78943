//! Dashboard view wiring dataset loading, filtering, and the chart grid.

use dioxus::prelude::*;

use crate::charts::{
    AgeRiskChart, BmiScatterChart, CheckupChart, HeatmapChart, HoverDetail, HoverOverlay,
    LifestyleChart, RadarChart,
};
use crate::core::aggregate;
use crate::core::dataset::{self, DatasetStore};
use crate::core::filter::FilterCriteria;
use crate::core::kpi::KpiSummary;
use crate::core::profile::{self, ProfileAxis};
use crate::core::record::{ActivityLevel, DietType, RiskLevel, YesNo};
use crate::dashboard::{FilterPanel, KpiPanel};
use crate::t;

#[cfg(debug_assertions)]
fn log_dashboard_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Dashboard render (lang_marker={lang})");
}

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_dashboard_render(&_lang_current);
    }

    let mut store = use_signal(|| Option::<DatasetStore>::None);
    let dataset = use_resource(|| async move { dataset::load_dataset().await });
    use_context_provider(|| Signal::new(Option::<HoverDetail>::None));

    // Seed the store once the dataset arrives; later criteria edits only
    // touch the store.
    use_effect(move || {
        if store.peek().is_some() {
            return;
        }
        if let Some(Ok(records)) = &*dataset.read() {
            store.set(Some(DatasetStore::new(records.clone())));
        }
    });

    let on_criteria = move |criteria: FilterCriteria| {
        store.with_mut(|slot| {
            if let Some(data) = slot.as_mut() {
                data.set_criteria(criteria);
            }
        });
    };

    let snapshot = store.read();
    let data = match snapshot.as_ref() {
        Some(data) => data,
        None => {
            let failure = match &*dataset.read() {
                Some(Err(err)) => Some(err.to_string()),
                _ => None,
            };
            return rsx! {
                section { class: "page page-dashboard",
                    h1 { {t!("dashboard-title")} }
                    if let Some(detail) = failure {
                        div { class: "dashboard__error",
                            strong { {t!("dataset-error-title")} }
                            p { "{detail}" }
                        }
                    } else {
                        p { class: "dashboard__loading", {t!("dataset-loading")} }
                    }
                }
            };
        }
    };

    let criteria = *data.criteria();
    let matched = data.filtered().len();
    let total = data.full().len();

    let buckets = aggregate::age_risk_buckets(data.filtered(), data.full());
    let scatter_records = data.filtered().to_vec();
    let diet_groups = aggregate::risk_tally_by(data.filtered(), &DietType::ALL, |record| {
        record.diet_type
    });
    let activity_groups =
        aggregate::risk_tally_by(data.filtered(), &ActivityLevel::ALL, |record| {
            record.physical_activity_level
        });
    let heat_cells = aggregate::mean_risk_by_diet_stress(data.filtered());
    let checkup_groups = aggregate::risk_tally_by(data.filtered(), &YesNo::ALL, |record| {
        record.regular_health_checkup
    });
    let summary = KpiSummary::from_records(data.filtered());

    // Profiles always come from the full dataset so the radar stays a stable
    // portrait of each risk level while filters move the other panels.
    let profiles: Vec<(RiskLevel, Vec<ProfileAxis>)> = RiskLevel::ALL
        .iter()
        .filter_map(|level| {
            profile::risk_profile(data.full(), *level).map(|axes| (*level, axes))
        })
        .collect();

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { class: "page-dashboard__intro", {t!("dashboard-intro")} }

            div { class: "dashboard__layout",
                FilterPanel {
                    criteria,
                    matched,
                    total,
                    on_change: on_criteria,
                }

                div { class: "dashboard__content",
                    KpiPanel { summary }

                    section { class: "dashboard__section",
                        h2 { class: "dashboard__section-title", {t!("section-risk-profile")} }
                        div { class: "dashboard__grid",
                            AgeRiskChart { buckets }
                            BmiScatterChart { records: scatter_records }
                        }
                    }

                    section { class: "dashboard__section",
                        h2 { class: "dashboard__section-title", {t!("section-lifestyle")} }
                        div { class: "dashboard__grid",
                            LifestyleChart { diet: diet_groups, activity: activity_groups }
                            HeatmapChart { cells: heat_cells }
                        }
                    }

                    section { class: "dashboard__section",
                        h2 { class: "dashboard__section-title", {t!("section-prevention")} }
                        div { class: "dashboard__grid",
                            CheckupChart { groups: checkup_groups }
                            RadarChart { profiles }
                        }
                    }
                }
            }

            HoverOverlay {}
        }
    }
}
