//! Filter controls feeding the shared criteria signal.

use dioxus::prelude::*;

use crate::core::filter::{Constraint, FilterCriteria, AGE_CEIL, AGE_FLOOR};
use crate::core::record::{ActivityLevel, AlcoholUse, DietType, StressLevel, YesNo};
use crate::i18n;
use crate::t;

/// One labelled dropdown over an enumerated domain.
///
/// `selected == None` maps to the "all" option; `Some(i)` to the i-th
/// domain value in its fixed order.
#[component]
fn FilterSelect(
    label: String,
    selected: Option<usize>,
    options: Vec<String>,
    on_pick: EventHandler<Option<usize>>,
) -> Element {
    rsx! {
        label { class: "filters__field",
            span { class: "filters__label", {label} }
            select {
                class: "filters__select",
                onchange: move |evt: FormEvent| {
                    on_pick.call(evt.value().parse::<usize>().ok());
                },
                option { value: "all", selected: selected.is_none(), {t!("filters-all")} }
                for (index, name) in options.into_iter().enumerate() {
                    option { value: "{index}", selected: selected == Some(index), {name} }
                }
            }
        }
    }
}

fn pick<T: Copy>(domain: &[T], index: Option<usize>) -> Constraint<T> {
    match index.and_then(|index| domain.get(index)) {
        Some(value) => Constraint::Only(*value),
        None => Constraint::Any,
    }
}

#[component]
pub fn FilterPanel(
    criteria: FilterCriteria,
    matched: usize,
    total: usize,
    on_change: EventHandler<FilterCriteria>,
) -> Element {
    rsx! {
        section { class: "filters",
            h2 { class: "filters__title", {t!("filters-title")} }

            label { class: "filters__field filters__field--age",
                span { class: "filters__label", {t!("filters-min-age")} }
                span { class: "filters__age-readout", "{criteria.min_age}+" }
                input {
                    class: "filters__slider",
                    r#type: "range",
                    min: "{AGE_FLOOR}",
                    max: "{AGE_CEIL}",
                    value: "{criteria.min_age}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(age) = evt.value().parse::<u32>() {
                            on_change.call(FilterCriteria {
                                min_age: age.clamp(AGE_FLOOR, AGE_CEIL),
                                ..criteria
                            });
                        }
                    },
                }
            }

            FilterSelect {
                label: t!("filters-activity"),
                selected: criteria.activity.selected_index(&ActivityLevel::ALL),
                options: ActivityLevel::ALL.iter().map(|level| i18n::activity_label(*level)).collect::<Vec<_>>(),
                on_pick: move |index| {
                    on_change.call(FilterCriteria { activity: pick(&ActivityLevel::ALL, index), ..criteria });
                },
            }
            FilterSelect {
                label: t!("filters-smoker"),
                selected: criteria.smoker.selected_index(&YesNo::ALL),
                options: YesNo::ALL.iter().map(|answer| i18n::yes_no_label(*answer)).collect::<Vec<_>>(),
                on_pick: move |index| {
                    on_change.call(FilterCriteria { smoker: pick(&YesNo::ALL, index), ..criteria });
                },
            }
            FilterSelect {
                label: t!("filters-alcohol"),
                selected: criteria.alcohol.selected_index(&AlcoholUse::ALL),
                options: AlcoholUse::ALL.iter().map(|use_level| i18n::alcohol_label(*use_level)).collect::<Vec<_>>(),
                on_pick: move |index| {
                    on_change.call(FilterCriteria { alcohol: pick(&AlcoholUse::ALL, index), ..criteria });
                },
            }
            FilterSelect {
                label: t!("filters-diet"),
                selected: criteria.diet.selected_index(&DietType::ALL),
                options: DietType::ALL.iter().map(|diet| i18n::diet_label(*diet)).collect::<Vec<_>>(),
                on_pick: move |index| {
                    on_change.call(FilterCriteria { diet: pick(&DietType::ALL, index), ..criteria });
                },
            }
            FilterSelect {
                label: t!("filters-checkup"),
                selected: criteria.checkup.selected_index(&YesNo::ALL),
                options: YesNo::ALL.iter().map(|answer| i18n::yes_no_label(*answer)).collect::<Vec<_>>(),
                on_pick: move |index| {
                    on_change.call(FilterCriteria { checkup: pick(&YesNo::ALL, index), ..criteria });
                },
            }
            FilterSelect {
                label: t!("filters-stress"),
                selected: criteria.stress.selected_index(&StressLevel::ALL),
                options: StressLevel::ALL.iter().map(|level| i18n::stress_label(*level)).collect::<Vec<_>>(),
                on_pick: move |index| {
                    on_change.call(FilterCriteria { stress: pick(&StressLevel::ALL, index), ..criteria });
                },
            }

            footer { class: "filters__footer",
                button {
                    class: "filters__reset",
                    onclick: move |_| on_change.call(FilterCriteria::default()),
                    {t!("filters-reset")}
                }
                p { class: "filters__count",
                    {t!("filters-matching", matched = matched.to_string(), total = total.to_string())}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pick;
    use crate::core::filter::Constraint;
    use crate::core::record::DietType;

    #[test]
    fn pick_maps_indices_onto_the_domain() {
        assert_eq!(pick(&DietType::ALL, None), Constraint::Any);
        assert_eq!(
            pick(&DietType::ALL, Some(2)),
            Constraint::Only(DietType::Healthy)
        );
    }

    #[test]
    fn pick_treats_out_of_range_as_any() {
        assert_eq!(pick(&DietType::ALL, Some(9)), Constraint::Any);
    }
}
