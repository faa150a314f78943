//! Filter criteria and the predicate engine producing the filtered subset.

use serde::{Deserialize, Serialize};

use super::record::{ActivityLevel, AlcoholUse, DietType, Record, StressLevel, YesNo};

/// Lowest value offered by the minimum-age control; also the criteria default.
pub const AGE_FLOOR: u32 = 20;
/// Highest value offered by the minimum-age control.
pub const AGE_CEIL: u32 = 80;

/// One categorical selector: either unconstrained or pinned to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint<T> {
    Any,
    Only(T),
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Constraint::Any
    }
}

impl<T: Copy + PartialEq> Constraint<T> {
    pub fn allows(&self, value: T) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Only(wanted) => *wanted == value,
        }
    }

    /// Index of the pinned value within `domain`, if any.
    pub fn selected_index(&self, domain: &[T]) -> Option<usize> {
        match self {
            Constraint::Any => None,
            Constraint::Only(wanted) => domain.iter().position(|v| v == wanted),
        }
    }
}

/// Immutable snapshot of every active filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_age: u32,
    pub activity: Constraint<ActivityLevel>,
    pub smoker: Constraint<YesNo>,
    pub alcohol: Constraint<AlcoholUse>,
    pub diet: Constraint<DietType>,
    pub checkup: Constraint<YesNo>,
    pub stress: Constraint<StressLevel>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_age: AGE_FLOOR,
            activity: Constraint::Any,
            smoker: Constraint::Any,
            alcohol: Constraint::Any,
            diet: Constraint::Any,
            checkup: Constraint::Any,
            stress: Constraint::Any,
        }
    }
}

impl FilterCriteria {
    /// Conjunction of the age bound and every pinned categorical value.
    pub fn matches(&self, record: &Record) -> bool {
        record.age >= self.min_age
            && self.activity.allows(record.physical_activity_level)
            && self.smoker.allows(record.smoker)
            && self.alcohol.allows(record.alcohol_consumption)
            && self.diet.allows(record.diet_type)
            && self.checkup.allows(record.regular_health_checkup)
            && self.stress.allows(record.mental_stress_level)
    }
}

/// Apply `criteria` to the full dataset, preserving original relative order.
/// An empty result is valid, not a fault.
pub fn apply(full: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    full.iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::RiskLevel;

    fn subject(id: u32, age: u32, risk: RiskLevel) -> Record {
        Record {
            id,
            age,
            bmi: 25.0,
            smoker: YesNo::No,
            alcohol_consumption: AlcoholUse::Moderate,
            diet_type: DietType::Mixed,
            physical_activity_level: ActivityLevel::Moderate,
            family_history: YesNo::No,
            mental_stress_level: StressLevel::Medium,
            sleep_hours: 7.0,
            regular_health_checkup: YesNo::Yes,
            prostate_exam_done: YesNo::No,
            risk_level: risk,
        }
    }

    #[test]
    fn default_criteria_keep_everything_at_or_above_the_floor() {
        let full = vec![
            subject(1, 25, RiskLevel::Low),
            subject(2, 62, RiskLevel::High),
        ];
        let criteria = FilterCriteria::default();
        assert_eq!(apply(&full, &criteria), full);
    }

    #[test]
    fn min_age_drops_younger_records_and_preserves_order() {
        let full = vec![
            subject(1, 25, RiskLevel::Low),
            subject(2, 62, RiskLevel::High),
            subject(3, 40, RiskLevel::Medium),
        ];
        let criteria = FilterCriteria {
            min_age: 30,
            ..FilterCriteria::default()
        };

        let filtered = apply(&full, &criteria);
        let ages: Vec<u32> = filtered.iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![62, 40]);
    }

    #[test]
    fn reapplying_identical_criteria_is_idempotent() {
        let full = vec![
            subject(1, 31, RiskLevel::Low),
            subject(2, 45, RiskLevel::Medium),
            subject(3, 58, RiskLevel::High),
        ];
        let criteria = FilterCriteria {
            min_age: 40,
            ..FilterCriteria::default()
        };

        let first = apply(&full, &criteria);
        let second = apply(&full, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn tightening_a_criterion_never_grows_the_result() {
        let mut full = Vec::new();
        for id in 0..20 {
            let mut record = subject(id, 20 + id * 3, RiskLevel::Low);
            if id % 2 == 0 {
                record.smoker = YesNo::Yes;
            }
            if id % 3 == 0 {
                record.diet_type = DietType::Fatty;
            }
            full.push(record);
        }

        let base = FilterCriteria {
            min_age: 30,
            ..FilterCriteria::default()
        };
        let baseline = apply(&full, &base).len();

        let narrowed_age = FilterCriteria {
            min_age: 50,
            ..base
        };
        assert!(apply(&full, &narrowed_age).len() <= baseline);

        let narrowed_smoker = FilterCriteria {
            smoker: Constraint::Only(YesNo::Yes),
            ..base
        };
        assert!(apply(&full, &narrowed_smoker).len() <= baseline);

        let narrowed_diet = FilterCriteria {
            diet: Constraint::Only(DietType::Fatty),
            ..base
        };
        assert!(apply(&full, &narrowed_diet).len() <= baseline);
    }

    #[test]
    fn conjunction_requires_every_active_criterion() {
        let mut smoker_high_risk = subject(1, 50, RiskLevel::High);
        smoker_high_risk.smoker = YesNo::Yes;
        let full = vec![smoker_high_risk, subject(2, 50, RiskLevel::Low)];

        let criteria = FilterCriteria {
            smoker: Constraint::Only(YesNo::Yes),
            checkup: Constraint::Only(YesNo::No),
            ..FilterCriteria::default()
        };

        // Both records have checkup = Yes, so the smoker alone is not enough.
        assert!(apply(&full, &criteria).is_empty());
    }

    #[test]
    fn excluding_every_record_is_a_valid_empty_result() {
        let full = vec![subject(1, 34, RiskLevel::Low)];
        let criteria = FilterCriteria {
            min_age: AGE_CEIL,
            ..FilterCriteria::default()
        };
        assert!(apply(&full, &criteria).is_empty());
    }
}
