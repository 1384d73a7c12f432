use crate::core::risk::RiskLevel;
use crate::profiles::ToolProfile;

pub struct HeartAttackProfile;

static HIGH_RECOMMENDATIONS: [&str; 4] = [
    "Call your local emergency number now - do not drive yourself",
    "Chew an aspirin if you are not allergic and none was advised against",
    "Stop all activity and sit or lie down while you wait for help",
    "Unlock your door and tell someone nearby what is happening",
];

static MODERATE_RECOMMENDATIONS: [&str; 3] = [
    "Seek urgent medical evaluation today - same-day care, not a routine booking",
    "Do not exert yourself until a clinician has assessed your symptoms",
    "If symptoms worsen or chest pressure returns, call emergency services immediately",
];

impl ToolProfile for HeartAttackProfile {
    fn tool_id(&self) -> &'static str {
        "heart-attack-checker"
    }

    fn recommendations(&self, risk: RiskLevel) -> Option<&'static [&'static str]> {
        match risk {
            RiskLevel::High => Some(&HIGH_RECOMMENDATIONS),
            RiskLevel::Moderate => Some(&MODERATE_RECOMMENDATIONS),
            _ => None,
        }
    }

    fn result_message(&self, risk: RiskLevel) -> Option<&'static str> {
        match risk {
            RiskLevel::High => Some(
                "Your symptoms match warning signs of a heart attack. This is a medical emergency - call emergency services immediately.",
            ),
            RiskLevel::Moderate => Some(
                "Your symptoms need urgent medical attention. Contact a doctor or urgent care service today.",
            ),
            _ => None,
        }
    }
}
