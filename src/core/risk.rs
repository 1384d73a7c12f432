use crate::config::FailOn;
use crate::profiles;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Mild,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub fn meets_fail_on(self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::None => false,
            FailOn::Moderate => matches!(self, Self::Moderate | Self::High),
            FailOn::High => matches!(self, Self::High),
        }
    }

    pub(crate) fn colored(self) -> String {
        match self {
            Self::High => self.as_str().red().bold().to_string(),
            Self::Moderate => self.as_str().yellow().bold().to_string(),
            Self::Mild => self.as_str().blue().bold().to_string(),
            Self::Low => self.as_str().green().bold().to_string(),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// upper bounds are inclusive; anything above moderate_max is High.
#[derive(Debug, Clone, Copy)]
pub struct RiskThresholds {
    pub low_max: f64,
    pub mild_max: f64,
    pub moderate_max: f64,
}

pub static DEFAULT_THRESHOLDS: RiskThresholds = RiskThresholds {
    low_max: 25.0,
    mild_max: 50.0,
    moderate_max: 75.0,
};

impl RiskThresholds {
    pub fn classify(&self, percentage: f64) -> RiskLevel {
        let pct = percentage.clamp(0.0, 100.0);
        if pct <= self.low_max {
            RiskLevel::Low
        } else if pct <= self.mild_max {
            RiskLevel::Mild
        } else if pct <= self.moderate_max {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

pub fn classify_risk(percentage: f64, tool_id: &str) -> RiskLevel {
    thresholds_for(tool_id).classify(percentage)
}

pub fn thresholds_for(tool_id: &str) -> &'static RiskThresholds {
    profiles::profile_for(tool_id)
        .and_then(|profile| profile.thresholds())
        .unwrap_or(&DEFAULT_THRESHOLDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_boundaries_are_upper_inclusive() {
        assert_eq!(classify_risk(25.0, "anemia-checker"), RiskLevel::Low);
        assert_eq!(classify_risk(25.0001, "anemia-checker"), RiskLevel::Mild);
        assert_eq!(classify_risk(50.0, "anemia-checker"), RiskLevel::Mild);
        assert_eq!(classify_risk(75.0, "anemia-checker"), RiskLevel::Moderate);
        assert_eq!(classify_risk(75.0001, "anemia-checker"), RiskLevel::High);
        assert_eq!(classify_risk(100.0, "anemia-checker"), RiskLevel::High);
    }

    #[test]
    fn diabetes_override_diverges_from_default_at_fifty_percent() {
        assert_eq!(classify_risk(50.0, "anemia-checker"), RiskLevel::Mild);
        assert_eq!(classify_risk(50.0, "diabetes-checker"), RiskLevel::Moderate);
        // 45 is Mild under both tables.
        assert_eq!(classify_risk(45.0, "anemia-checker"), RiskLevel::Mild);
        assert_eq!(classify_risk(45.0, "diabetes-checker"), RiskLevel::Mild);
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        assert_eq!(classify_risk(-10.0, "anemia-checker"), RiskLevel::Low);
        assert_eq!(classify_risk(250.0, "anemia-checker"), RiskLevel::High);
    }

    #[test]
    fn classification_is_monotonic() {
        for tool_id in ["anemia-checker", "diabetes-checker"] {
            let mut previous = RiskLevel::Low;
            for step in 0..=1000 {
                let level = classify_risk(f64::from(step) / 10.0, tool_id);
                assert!(level >= previous, "risk dropped at {}% for {}", step, tool_id);
                previous = level;
            }
        }
    }

    #[test]
    fn unknown_tool_uses_default_thresholds() {
        assert_eq!(classify_risk(60.0, "no-such-tool"), RiskLevel::Moderate);
    }
}
