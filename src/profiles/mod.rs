use crate::core::risk::{RiskLevel, RiskThresholds};

pub mod diabetes;
pub mod heart_attack;

/// Per-tool overrides consulted before the default threshold and advice
/// tables. Every method is optional; `None` falls through to the next
/// tier (tool generic list, then the global defaults keyed by risk).
pub trait ToolProfile {
    fn tool_id(&self) -> &'static str;

    fn thresholds(&self) -> Option<&'static RiskThresholds> {
        None
    }

    fn recommendations(&self, _risk: RiskLevel) -> Option<&'static [&'static str]> {
        None
    }

    fn general_recommendations(&self) -> Option<&'static [&'static str]> {
        None
    }

    fn result_message(&self, _risk: RiskLevel) -> Option<&'static str> {
        None
    }
}

pub fn all_profiles() -> Vec<Box<dyn ToolProfile>> {
    vec![
        Box::new(diabetes::DiabetesProfile),
        Box::new(heart_attack::HeartAttackProfile),
    ]
}

pub fn profile_for(tool_id: &str) -> Option<Box<dyn ToolProfile>> {
    all_profiles()
        .into_iter()
        .find(|profile| profile.tool_id() == tool_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_keyed_by_distinct_tool_ids() {
        let profiles = all_profiles();
        for (index, profile) in profiles.iter().enumerate() {
            for other in &profiles[index + 1..] {
                assert_ne!(profile.tool_id(), other.tool_id());
            }
        }
    }

    #[test]
    fn lookup_misses_return_none() {
        assert!(profile_for("no-such-tool").is_none());
    }
}
