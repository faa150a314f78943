//! Typed record model for the risk dataset. One `Record` per subject row.
//!
//! Every categorical column gets its own enum so display order, stack order
//! and ordinal scoring are fixed in one place instead of scattered string
//! comparisons. Variant names match the CSV vocabulary exactly, so serde
//! can decode rows without rename attributes.

use serde::{Deserialize, Serialize};

/// Outcome risk level, ordered Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Ordinal score used by the heatmap mean and the radar profile.
    pub fn score(self) -> f64 {
        match self {
            RiskLevel::Low => 0.0,
            RiskLevel::Medium => 1.0,
            RiskLevel::High => 2.0,
        }
    }

    /// Fixed fill color for this level across every chart and KPI accent.
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "green",
            RiskLevel::Medium => "orange",
            RiskLevel::High => "red",
        }
    }
}

/// Binary categorical answer. Display order is Yes before No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }

    /// Ordinal score for profile math: No maps below Yes.
    pub fn score(self) -> f64 {
        match self {
            YesNo::No => 0.0,
            YesNo::Yes => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlcoholUse {
    None,
    Moderate,
    High,
}

impl AlcoholUse {
    pub const ALL: [AlcoholUse; 3] = [AlcoholUse::None, AlcoholUse::Moderate, AlcoholUse::High];

    pub fn score(self) -> f64 {
        self as usize as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DietType {
    Fatty,
    Mixed,
    Healthy,
}

impl DietType {
    pub const ALL: [DietType; 3] = [DietType::Fatty, DietType::Mixed, DietType::Healthy];

    pub fn score(self) -> f64 {
        self as usize as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];

    pub fn score(self) -> f64 {
        self as usize as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub const ALL: [StressLevel; 3] = [StressLevel::Low, StressLevel::Medium, StressLevel::High];

    pub fn score(self) -> f64 {
        self as usize as f64
    }
}

/// One observed subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub age: u32,
    pub bmi: f64,
    pub smoker: YesNo,
    pub alcohol_consumption: AlcoholUse,
    pub diet_type: DietType,
    pub physical_activity_level: ActivityLevel,
    pub family_history: YesNo,
    pub mental_stress_level: StressLevel,
    pub sleep_hours: f64,
    pub regular_health_checkup: YesNo,
    pub prostate_exam_done: YesNo,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_are_totally_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::ALL.len(), 3);
    }

    #[test]
    fn ordinal_scores_follow_domain_order() {
        assert_eq!(RiskLevel::Low.score(), 0.0);
        assert_eq!(RiskLevel::High.score(), 2.0);
        assert_eq!(AlcoholUse::None.score(), 0.0);
        assert_eq!(AlcoholUse::High.score(), 2.0);
        assert_eq!(DietType::Healthy.score(), 2.0);
        assert_eq!(ActivityLevel::Moderate.score(), 1.0);
        assert_eq!(StressLevel::Medium.score(), 1.0);
        assert_eq!(YesNo::No.score(), 0.0);
        assert_eq!(YesNo::Yes.score(), 1.0);
    }

    #[test]
    fn checkup_display_order_is_yes_first() {
        assert_eq!(YesNo::ALL, [YesNo::Yes, YesNo::No]);
    }

    #[test]
    fn risk_colors_are_fixed() {
        assert_eq!(RiskLevel::Low.color(), "green");
        assert_eq!(RiskLevel::Medium.color(), "orange");
        assert_eq!(RiskLevel::High.color(), "red");
    }
}
