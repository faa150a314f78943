//! Pure aggregation helpers turning record slices into chart-ready series.
//!
//! Everything here is stateless: slices in, small value structs out. The
//! stacked-bar transform, the grouped tallies and the heatmap means all key
//! risk levels in their fixed Low < Medium < High order.

use super::record::{DietType, Record, RiskLevel, StressLevel};

/// Age bucket width in years for the age-by-risk chart.
pub const AGE_BUCKET_WIDTH: u32 = 10;

/// Count of records per risk level within one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskTally {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskTally {
    pub fn add(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    /// Cumulative stacked segments, bottom-to-top Low, Medium, High.
    pub fn stack(&self) -> [StackSegment; 3] {
        let mut running = 0usize;
        RiskLevel::ALL.map(|level| {
            let start = running;
            running += self.count(level);
            StackSegment {
                level,
                start,
                end: running,
            }
        })
    }

    fn from_records(records: &[Record]) -> Self {
        let mut tally = RiskTally::default();
        for record in records {
            tally.add(record.risk_level);
        }
        tally
    }
}

/// One layer of a stacked bar: the half-open count interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackSegment {
    pub level: RiskLevel,
    pub start: usize,
    pub end: usize,
}

/// One non-empty age bucket with its risk tally.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBucket {
    /// Inclusive lower bound; the bucket covers `[lower, lower + width)`.
    pub lower: u32,
    pub label: String,
    pub total: usize,
    pub tally: RiskTally,
}

/// Bucket `filtered` ages into fixed-width bins whose boundaries come from
/// the *full* dataset's observed age range, so bins stay stable while the
/// user plays with filters. Empty buckets are dropped; output is ordered by
/// lower bound ascending.
pub fn age_risk_buckets(filtered: &[Record], full: &[Record]) -> Vec<AgeBucket> {
    let (min_age, max_age) = match age_extent(full) {
        Some(extent) => extent,
        None => return Vec::new(),
    };

    let start = (min_age / AGE_BUCKET_WIDTH) * AGE_BUCKET_WIDTH;
    let bucket_count = ((max_age - start) / AGE_BUCKET_WIDTH + 1) as usize;

    let mut tallies = vec![RiskTally::default(); bucket_count];
    for record in filtered {
        let index = ((record.age.saturating_sub(start)) / AGE_BUCKET_WIDTH) as usize;
        if let Some(tally) = tallies.get_mut(index) {
            tally.add(record.risk_level);
        }
    }

    tallies
        .into_iter()
        .enumerate()
        .filter(|(_, tally)| tally.total() > 0)
        .map(|(index, tally)| {
            let lower = start + index as u32 * AGE_BUCKET_WIDTH;
            AgeBucket {
                lower,
                label: format!("{lower}-{}", lower + AGE_BUCKET_WIDTH - 1),
                total: tally.total(),
                tally,
            }
        })
        .collect()
}

fn age_extent(records: &[Record]) -> Option<(u32, u32)> {
    let mut ages = records.iter().map(|r| r.age);
    let first = ages.next()?;
    let (min, max) = ages.fold((first, first), |(lo, hi), age| {
        (lo.min(age), hi.max(age))
    });
    Some((min, max))
}

/// One group of the two-level groupings (diet x risk, activity x risk,
/// checkup x risk).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupTally<K> {
    pub key: K,
    pub total: usize,
    pub tally: RiskTally,
}

/// Group records by `key`, tallying risk levels inside each group. Groups
/// come out in `domain` order (never insertion or alphabetical order) and
/// only groups with at least one member appear. Risk levels absent from a
/// group tally as 0.
pub fn risk_tally_by<K, F>(records: &[Record], domain: &[K], key: F) -> Vec<GroupTally<K>>
where
    K: Copy + PartialEq,
    F: Fn(&Record) -> K,
{
    domain
        .iter()
        .filter_map(|&group| {
            let mut tally = RiskTally::default();
            for record in records {
                if key(record) == group {
                    tally.add(record.risk_level);
                }
            }
            if tally.total() == 0 {
                return None;
            }
            Some(GroupTally {
                key: group,
                total: tally.total(),
                tally,
            })
        })
        .collect()
}

/// One populated cell of the diet x stress heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanRiskCell {
    pub diet: DietType,
    pub stress: StressLevel,
    /// Mean of risk scores (Low=0, Medium=1, High=2) over the cell members.
    pub mean: f64,
}

/// Mean risk score per (diet, stress) cell. Cells with no members are absent
/// from the output, which distinguishes "no data" from "minimum risk".
/// Output is diet-major in domain order.
pub fn mean_risk_by_diet_stress(records: &[Record]) -> Vec<MeanRiskCell> {
    let mut cells = Vec::new();
    for diet in DietType::ALL {
        for stress in StressLevel::ALL {
            let mut sum = 0.0;
            let mut count = 0usize;
            for record in records {
                if record.diet_type == diet && record.mental_stress_level == stress {
                    sum += record.risk_level.score();
                    count += 1;
                }
            }
            if count > 0 {
                cells.push(MeanRiskCell {
                    diet,
                    stress,
                    mean: sum / count as f64,
                });
            }
        }
    }
    cells
}

/// Overall risk tally for one record slice (KPI percentages, scatter rows).
pub fn overall_risk_tally(records: &[Record]) -> RiskTally {
    RiskTally::from_records(records)
}
