use crate::core::risk::RiskLevel;
use crate::profiles;

/// Resolution order: tool + risk override, then the tool's generic list,
/// then the global defaults keyed by risk. Never empty.
pub fn recommendations_for(tool_id: &str, risk: RiskLevel) -> Vec<String> {
    if let Some(profile) = profiles::profile_for(tool_id) {
        if let Some(list) = profile.recommendations(risk) {
            return to_owned(list);
        }
        if let Some(list) = profile.general_recommendations() {
            return to_owned(list);
        }
    }

    to_owned(default_recommendations(risk))
}

pub fn result_message(tool_id: &str, risk: RiskLevel) -> String {
    profiles::profile_for(tool_id)
        .and_then(|profile| profile.result_message(risk))
        .unwrap_or_else(|| default_message(risk))
        .to_string()
}

fn to_owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|item| item.to_string()).collect()
}

fn default_recommendations(risk: RiskLevel) -> &'static [&'static str] {
    match risk {
        RiskLevel::Low => &[
            "Keep up your current healthy habits",
            "Stay active and maintain a balanced diet",
            "Repeat this self-check if new symptoms appear",
        ],
        RiskLevel::Mild => &[
            "Keep a simple diary of your symptoms for the next two weeks",
            "Mention these symptoms at your next routine appointment",
            "Review sleep, hydration, and stress - mild symptoms often track lifestyle",
        ],
        RiskLevel::Moderate => &[
            "Book an appointment with your doctor in the coming days",
            "Write down when symptoms occur and what makes them better or worse",
            "Avoid self-medicating before a professional has assessed you",
        ],
        RiskLevel::High => &[
            "Contact a healthcare professional as soon as possible",
            "Do not ignore worsening symptoms - seek same-day care if they escalate",
            "Bring a record of your answers to the consultation",
        ],
    }
}

fn default_message(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => {
            "Your answers suggest a low likelihood of the condition screened here. Keep an eye on any changes."
        }
        RiskLevel::Mild => {
            "Your answers show some mild indicators. They are worth monitoring, and worth mentioning to a doctor if they persist."
        }
        RiskLevel::Moderate => {
            "Your answers show a moderate pattern of symptoms. A professional evaluation is recommended."
        }
        RiskLevel::High => {
            "Your answers show a strong pattern of symptoms. Please seek professional medical advice promptly."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Mild,
        RiskLevel::Moderate,
        RiskLevel::High,
    ];

    #[test]
    fn recommendations_are_never_empty() {
        for tool_id in ["anemia-checker", "diabetes-checker", "heart-attack-checker", "unknown"] {
            for level in LEVELS {
                assert!(
                    !recommendations_for(tool_id, level).is_empty(),
                    "empty recommendations for {} at {:?}",
                    tool_id,
                    level
                );
            }
        }
    }

    #[test]
    fn unknown_tool_gets_default_tables() {
        assert_eq!(
            recommendations_for("unknown", RiskLevel::Low),
            recommendations_for("no-such-tool", RiskLevel::Low)
        );
        assert_eq!(
            result_message("unknown", RiskLevel::High),
            default_message(RiskLevel::High)
        );
    }

    #[test]
    fn heart_attack_high_risk_uses_emergency_list() {
        let emergency = recommendations_for("heart-attack-checker", RiskLevel::High);
        assert!(emergency[0].contains("emergency number"));
        assert_ne!(
            emergency,
            recommendations_for("unknown", RiskLevel::High),
            "emergency advice must differ from the generic High list"
        );
    }

    #[test]
    fn profile_without_level_entry_falls_back_to_defaults() {
        // the heart-attack profile defines no Low-risk list.
        assert_eq!(
            recommendations_for("heart-attack-checker", RiskLevel::Low),
            recommendations_for("unknown", RiskLevel::Low)
        );
    }

    #[test]
    fn diabetes_uses_its_generic_list_at_every_level() {
        let low = recommendations_for("diabetes-checker", RiskLevel::Low);
        let high = recommendations_for("diabetes-checker", RiskLevel::High);
        assert_eq!(low, high);
        assert!(low[0].contains("glucose"));
    }

    #[test]
    fn messages_resolve_with_tool_precedence() {
        assert!(result_message("heart-attack-checker", RiskLevel::High).contains("emergency"));
        assert_eq!(
            result_message("heart-attack-checker", RiskLevel::Low),
            default_message(RiskLevel::Low)
        );
    }
}
