//! Scalar indicators for the KPI panel, computed from the filtered subset.

use super::record::{Record, RiskLevel, YesNo};

/// Everything the KPI panel shows for one filtered snapshot.
///
/// When the snapshot is empty the percentage and mean indicators are simply
/// absent (the panel shows its "not available" sentinel), while
/// `unchecked_high_risk` stays a literal 0: zero subjects skipping checkups
/// at high risk is a true count, not missing data.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub total: usize,
    /// Share of each risk level in percent; all three levels, absent ones at
    /// 0.0. Empty when there are no records at all.
    pub risk_percent: Vec<(RiskLevel, f64)>,
    pub checkup_percent: Option<f64>,
    /// Mean age per risk level, present levels only, Low before High.
    pub mean_age: Vec<(RiskLevel, f64)>,
    /// Mean sleep hours per risk level, same ordering rule.
    pub mean_sleep: Vec<(RiskLevel, f64)>,
    pub unchecked_high_risk: usize,
}

impl KpiSummary {
    pub fn from_records(filtered: &[Record]) -> Self {
        let total = filtered.len();

        let unchecked_high_risk = filtered
            .iter()
            .filter(|r| r.regular_health_checkup == YesNo::No && r.risk_level == RiskLevel::High)
            .count();

        if total == 0 {
            return Self {
                total,
                risk_percent: Vec::new(),
                checkup_percent: None,
                mean_age: Vec::new(),
                mean_sleep: Vec::new(),
                unchecked_high_risk,
            };
        }

        let risk_percent = RiskLevel::ALL
            .iter()
            .map(|&level| {
                let count = filtered.iter().filter(|r| r.risk_level == level).count();
                (level, count as f64 / total as f64 * 100.0)
            })
            .collect();

        let with_checkup = filtered
            .iter()
            .filter(|r| r.regular_health_checkup.is_yes())
            .count();
        let checkup_percent = Some(with_checkup as f64 / total as f64 * 100.0);

        Self {
            total,
            risk_percent,
            checkup_percent,
            mean_age: mean_by_risk(filtered, |r| r.age as f64),
            mean_sleep: mean_by_risk(filtered, |r| r.sleep_hours),
            unchecked_high_risk,
        }
    }
}

/// Mean of `value` per risk level, skipping levels with no members, in
/// Low < Medium < High order.
fn mean_by_risk(records: &[Record], value: impl Fn(&Record) -> f64) -> Vec<(RiskLevel, f64)> {
    RiskLevel::ALL
        .iter()
        .filter_map(|&level| {
            let members: Vec<f64> = records
                .iter()
                .filter(|r| r.risk_level == level)
                .map(&value)
                .collect();
            if members.is_empty() {
                return None;
            }
            let mean = members.iter().sum::<f64>() / members.len() as f64;
            Some((level, mean))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{ActivityLevel, AlcoholUse, DietType, StressLevel};

    fn subject(age: u32, sleep: f64, checkup: YesNo, risk: RiskLevel) -> Record {
        Record {
            id: age,
            age,
            bmi: 26.0,
            smoker: YesNo::No,
            alcohol_consumption: AlcoholUse::Moderate,
            diet_type: DietType::Mixed,
            physical_activity_level: ActivityLevel::Moderate,
            family_history: YesNo::No,
            mental_stress_level: StressLevel::Medium,
            sleep_hours: sleep,
            regular_health_checkup: checkup,
            prostate_exam_done: YesNo::No,
            risk_level: risk,
        }
    }

    #[test]
    fn risk_percentages_cover_all_levels_and_sum_to_one_hundred() {
        let filtered = vec![
            subject(40, 7.0, YesNo::Yes, RiskLevel::Low),
            subject(50, 6.5, YesNo::Yes, RiskLevel::Low),
            subject(60, 6.0, YesNo::No, RiskLevel::High),
        ];

        let summary = KpiSummary::from_records(&filtered);
        assert_eq!(summary.risk_percent.len(), 3);

        let total: f64 = summary.risk_percent.iter().map(|(_, pct)| pct).sum();
        assert!((total - 100.0).abs() < 1e-9);

        // Medium is absent from the data but still reported, at zero.
        let medium = summary
            .risk_percent
            .iter()
            .find(|(level, _)| *level == RiskLevel::Medium)
            .unwrap();
        assert_eq!(medium.1, 0.0);
    }

    #[test]
    fn checkup_share_counts_yes_answers() {
        let filtered = vec![
            subject(40, 7.0, YesNo::Yes, RiskLevel::Low),
            subject(50, 6.5, YesNo::No, RiskLevel::Medium),
            subject(60, 6.0, YesNo::Yes, RiskLevel::High),
            subject(70, 5.5, YesNo::Yes, RiskLevel::High),
        ];

        let summary = KpiSummary::from_records(&filtered);
        assert_eq!(summary.checkup_percent, Some(75.0));
    }

    #[test]
    fn means_list_only_present_levels_in_risk_order() {
        let filtered = vec![
            subject(62, 5.8, YesNo::Yes, RiskLevel::High),
            subject(34, 7.9, YesNo::Yes, RiskLevel::Low),
            subject(38, 7.3, YesNo::Yes, RiskLevel::Low),
        ];

        let summary = KpiSummary::from_records(&filtered);
        let levels: Vec<RiskLevel> = summary.mean_age.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, vec![RiskLevel::Low, RiskLevel::High]);

        assert_eq!(summary.mean_age[0].1, 36.0);
        assert_eq!(summary.mean_age[1].1, 62.0);
        assert!((summary.mean_sleep[0].1 - 7.6).abs() < 1e-9);
    }

    #[test]
    fn unchecked_high_risk_counts_the_conjunction() {
        let filtered = vec![
            subject(55, 6.2, YesNo::No, RiskLevel::High),
            subject(58, 6.0, YesNo::Yes, RiskLevel::High),
            subject(61, 6.8, YesNo::No, RiskLevel::Low),
        ];

        let summary = KpiSummary::from_records(&filtered);
        assert_eq!(summary.unchecked_high_risk, 1);
    }

    #[test]
    fn empty_snapshot_reports_sentinels_except_the_count() {
        let summary = KpiSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.risk_percent.is_empty());
        assert_eq!(summary.checkup_percent, None);
        assert!(summary.mean_age.is_empty());
        assert!(summary.mean_sleep.is_empty());
        assert_eq!(summary.unchecked_high_risk, 0);
    }
}
