use crate::constants::GRADE_THRESHOLDS;
use std::fmt;

/// Terrain difficulty, bucketed from |grade %|.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    VeryDifficult,
    Extreme,
}

impl Difficulty {
    /// Every bucket, easiest first.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Moderate,
        Self::Difficult,
        Self::VeryDifficult,
        Self::Extreme,
    ];

    /// Returns the bucket for a signed grade in percent.
    pub fn from_grade(grade_percent: f64) -> Self {
        let grade = grade_percent.abs();
        GRADE_THRESHOLDS
            .iter()
            .zip(Self::ALL)
            .find(|(threshold, _)| grade < **threshold)
            .map_or(Self::Extreme, |(_, bucket)| bucket)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate over all samples in one difficulty bucket.
///
/// Grade statistics are taken over |grade %|, not the signed grade, so
/// a 12 % climb and a 12 % descent average to 12 % rather than 0 %.
/// [`DifficultyStats::elevation_change_ft`] keeps the sign.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DifficultyStats {
    /// Sum of segment distances.
    pub miles: f64,
    /// Mean |grade %|.
    pub avg_grade_percent: f64,
    /// Max |grade %|.
    pub max_grade_percent: f64,
    /// Net (signed) elevation change.
    pub elevation_change_ft: f64,
    /// Share of the route's total distance, in percent.
    pub pct_of_total: f64,
}
