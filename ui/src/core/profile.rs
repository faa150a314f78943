//! Normalized multi-attribute risk profiles feeding the radar chart.
//!
//! Profiles are always computed over the complete dataset, never the
//! filtered subset: the radar is a population baseline per risk level and
//! stays put while the user filters the other charts.

use super::record::{ActivityLevel, AlcoholUse, DietType, Record, RiskLevel, StressLevel, YesNo};

/// The ten profiled attributes, in their fixed radar spoke order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAttribute {
    Age,
    Bmi,
    Smoker,
    Alcohol,
    Diet,
    Activity,
    FamilyHistory,
    Stress,
    SleepHours,
    Checkup,
}

impl ProfileAttribute {
    pub const ALL: [ProfileAttribute; 10] = [
        ProfileAttribute::Age,
        ProfileAttribute::Bmi,
        ProfileAttribute::Smoker,
        ProfileAttribute::Alcohol,
        ProfileAttribute::Diet,
        ProfileAttribute::Activity,
        ProfileAttribute::FamilyHistory,
        ProfileAttribute::Stress,
        ProfileAttribute::SleepHours,
        ProfileAttribute::Checkup,
    ];

    /// Raw (ordinal-mapped) value of this attribute for one record.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            ProfileAttribute::Age => record.age as f64,
            ProfileAttribute::Bmi => record.bmi,
            ProfileAttribute::Smoker => record.smoker.score(),
            ProfileAttribute::Alcohol => record.alcohol_consumption.score(),
            ProfileAttribute::Diet => record.diet_type.score(),
            ProfileAttribute::Activity => record.physical_activity_level.score(),
            ProfileAttribute::FamilyHistory => record.family_history.score(),
            ProfileAttribute::Stress => record.mental_stress_level.score(),
            ProfileAttribute::SleepHours => record.sleep_hours,
            ProfileAttribute::Checkup => record.regular_health_checkup.score(),
        }
    }

    /// Normalization range over the full dataset. Numeric attributes use the
    /// observed extent; ordinal attributes use their fixed domain span so a
    /// skewed sample cannot shift the scale.
    pub fn range(self, full: &[Record]) -> (f64, f64) {
        match self {
            ProfileAttribute::Age | ProfileAttribute::Bmi | ProfileAttribute::SleepHours => {
                observed_extent(full, |record| self.value(record))
            }
            ProfileAttribute::Smoker
            | ProfileAttribute::FamilyHistory
            | ProfileAttribute::Checkup => (0.0, (YesNo::ALL.len() - 1) as f64),
            ProfileAttribute::Alcohol => (0.0, (AlcoholUse::ALL.len() - 1) as f64),
            ProfileAttribute::Diet => (0.0, (DietType::ALL.len() - 1) as f64),
            ProfileAttribute::Activity => (0.0, (ActivityLevel::ALL.len() - 1) as f64),
            ProfileAttribute::Stress => (0.0, (StressLevel::ALL.len() - 1) as f64),
        }
    }
}

fn observed_extent(records: &[Record], value: impl Fn(&Record) -> f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        let v = value(record);
        min = min.min(v);
        max = max.max(v);
    }
    if records.is_empty() {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

/// Min-max normalization; exactly 0.5 on a degenerate (zero-width) range.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        0.5
    } else {
        (value - min) / (max - min)
    }
}

/// One radar spoke: an attribute and its normalized mean in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileAxis {
    pub attribute: ProfileAttribute,
    pub value: f64,
}

/// Mean attribute profile for one risk level over the full dataset.
/// Returns `None` when no record carries that level; a level with no data
/// has no profile, not a zeroed one.
pub fn risk_profile(full: &[Record], level: RiskLevel) -> Option<Vec<ProfileAxis>> {
    let members: Vec<&Record> = full
        .iter()
        .filter(|record| record.risk_level == level)
        .collect();
    if members.is_empty() {
        return None;
    }

    let axes = ProfileAttribute::ALL
        .iter()
        .map(|&attribute| {
            let sum: f64 = members.iter().map(|record| attribute.value(record)).sum();
            let mean = sum / members.len() as f64;
            let (min, max) = attribute.range(full);
            ProfileAxis {
                attribute,
                value: normalize(mean, min, max),
            }
        })
        .collect();

    Some(axes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(age: u32, bmi: f64, sleep: f64, risk: RiskLevel) -> Record {
        Record {
            id: age,
            age,
            bmi,
            smoker: YesNo::No,
            alcohol_consumption: AlcoholUse::Moderate,
            diet_type: DietType::Mixed,
            physical_activity_level: ActivityLevel::Moderate,
            family_history: YesNo::No,
            mental_stress_level: StressLevel::Medium,
            sleep_hours: sleep,
            regular_health_checkup: YesNo::Yes,
            prostate_exam_done: YesNo::No,
            risk_level: risk,
        }
    }

    #[test]
    fn profile_values_stay_within_unit_bounds() {
        let full = vec![
            subject(25, 19.5, 8.1, RiskLevel::Low),
            subject(48, 27.2, 6.4, RiskLevel::Medium),
            subject(71, 33.8, 5.0, RiskLevel::High),
            subject(60, 30.1, 5.9, RiskLevel::High),
        ];

        for level in RiskLevel::ALL {
            let axes = risk_profile(&full, level).unwrap();
            assert_eq!(axes.len(), ProfileAttribute::ALL.len());
            for axis in axes {
                assert!(
                    (0.0..=1.0).contains(&axis.value),
                    "{:?} out of bounds: {}",
                    axis.attribute,
                    axis.value
                );
            }
        }
    }

    #[test]
    fn spokes_keep_the_fixed_attribute_order() {
        let full = vec![subject(40, 25.0, 7.0, RiskLevel::Low)];
        let axes = risk_profile(&full, RiskLevel::Low).unwrap();
        let order: Vec<ProfileAttribute> = axes.iter().map(|a| a.attribute).collect();
        assert_eq!(order, ProfileAttribute::ALL.to_vec());
    }

    #[test]
    fn degenerate_range_normalizes_to_one_half() {
        assert_eq!(normalize(42.0, 42.0, 42.0), 0.5);

        // All subjects share one age, so the age spoke must sit at 0.5.
        let full = vec![
            subject(50, 22.0, 7.5, RiskLevel::Low),
            subject(50, 31.0, 6.0, RiskLevel::Low),
        ];
        let axes = risk_profile(&full, RiskLevel::Low).unwrap();
        let age_axis = axes
            .iter()
            .find(|a| a.attribute == ProfileAttribute::Age)
            .unwrap();
        assert_eq!(age_axis.value, 0.5);
    }

    #[test]
    fn ordinal_ranges_ignore_the_sample() {
        // Every subject smokes; against the fixed {No, Yes} span the smoker
        // spoke lands at 1.0, not at a degenerate 0.5.
        let mut a = subject(45, 26.0, 6.5, RiskLevel::High);
        a.smoker = YesNo::Yes;
        let mut b = subject(55, 29.0, 6.0, RiskLevel::High);
        b.smoker = YesNo::Yes;
        let full = vec![a, b];

        let axes = risk_profile(&full, RiskLevel::High).unwrap();
        let smoker_axis = axes
            .iter()
            .find(|a| a.attribute == ProfileAttribute::Smoker)
            .unwrap();
        assert_eq!(smoker_axis.value, 1.0);
    }

    #[test]
    fn absent_level_yields_no_profile() {
        let full = vec![
            subject(30, 23.0, 7.8, RiskLevel::Low),
            subject(44, 26.0, 7.1, RiskLevel::Low),
        ];
        assert!(risk_profile(&full, RiskLevel::High).is_none());
        assert!(risk_profile(&[], RiskLevel::Low).is_none());
    }
}
