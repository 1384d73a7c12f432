use crate::core::risk::{RiskLevel, RiskThresholds};
use crate::profiles::ToolProfile;

pub struct DiabetesProfile;

// stricter buckets: metabolic symptoms escalate earlier than the default
// screen allows.
static THRESHOLDS: RiskThresholds = RiskThresholds {
    low_max: 20.0,
    mild_max: 45.0,
    moderate_max: 70.0,
};

static GENERAL_RECOMMENDATIONS: [&str; 5] = [
    "Ask your doctor about a fasting glucose or HbA1c test",
    "Limit sugary drinks and refined carbohydrates",
    "Aim for at least 150 minutes of moderate activity per week",
    "Monitor your weight and waist circumference",
    "Review your family history with a healthcare provider",
];

impl ToolProfile for DiabetesProfile {
    fn tool_id(&self) -> &'static str {
        "diabetes-checker"
    }

    fn thresholds(&self) -> Option<&'static RiskThresholds> {
        Some(&THRESHOLDS)
    }

    fn general_recommendations(&self) -> Option<&'static [&'static str]> {
        Some(&GENERAL_RECOMMENDATIONS)
    }

    fn result_message(&self, risk: RiskLevel) -> Option<&'static str> {
        match risk {
            RiskLevel::High => Some(
                "Your answers suggest a pattern consistent with elevated blood sugar. Arrange a blood glucose test with your doctor promptly.",
            ),
            _ => None,
        }
    }
}
