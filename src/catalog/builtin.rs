use super::{Difficulty, OptionItem, Question, Tool};
use once_cell::sync::Lazy;

static TOOLS: Lazy<Vec<Tool>> = Lazy::new(|| {
    vec![
        anemia(),
        diabetes(),
        asthma(),
        depression(),
        anxiety(),
        heart_disease(),
        heart_attack(),
    ]
});

pub fn tools() -> &'static [Tool] {
    &TOOLS
}

fn tool(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    difficulty: Difficulty,
    estimated_time: &str,
    questions: Vec<Question>,
) -> Tool {
    Tool {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        difficulty,
        estimated_time: estimated_time.to_string(),
        questions,
    }
}

fn question(id: &str, prompt: &str, options: Vec<OptionItem>) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
    }
}

fn opt(id: &str, label: &str, weight: u32) -> OptionItem {
    OptionItem {
        id: id.to_string(),
        label: label.to_string(),
        weight,
    }
}

// PHQ/GAD style screens share the same two-week frequency scale.
fn two_week_frequency() -> Vec<OptionItem> {
    vec![
        opt("not-at-all", "Not at all", 0),
        opt("several-days", "Several days", 1),
        opt("more-than-half", "More than half the days", 2),
        opt("nearly-every", "Nearly every day", 3),
    ]
}

fn anemia() -> Tool {
    tool(
        "anemia-checker",
        "Anemia Symptom Checker",
        "Assess symptoms related to iron deficiency and various types of anemia through a comprehensive questionnaire.",
        "General",
        Difficulty::Easy,
        "3-5 min",
        vec![
            question(
                "fatigue",
                "How often do you experience unusual fatigue or weakness?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                    opt("always", "Almost always", 4),
                ],
            ),
            question(
                "pale-skin",
                "Have you noticed pale skin, nails, or inner eyelids?",
                vec![
                    opt("no", "No", 0),
                    opt("slight", "Slightly pale", 2),
                    opt("noticeable", "Noticeably pale", 3),
                    opt("very", "Very pale", 4),
                ],
            ),
            question(
                "shortness-breath",
                "Do you experience shortness of breath during normal activities?",
                vec![
                    opt("never", "Never", 0),
                    opt("stairs", "Only when climbing stairs", 1),
                    opt("walking", "When walking normally", 3),
                    opt("rest", "Even at rest", 4),
                ],
            ),
            question(
                "cold-hands",
                "How often do you have cold hands and feet?",
                vec![
                    opt("never", "Never", 0),
                    opt("winter", "Only in cold weather", 1),
                    opt("often", "Often, regardless of weather", 3),
                    opt("always", "Almost always", 4),
                ],
            ),
            question(
                "cravings",
                "Do you have unusual cravings for ice, starch, or cornstarch?",
                vec![
                    opt("no", "No", 0),
                    opt("occasionally", "Occasionally", 2),
                    opt("frequently", "Frequently", 4),
                ],
            ),
            question(
                "heavy-periods",
                "Do you experience heavy menstrual periods? (Skip if not applicable)",
                vec![
                    opt("na", "Not applicable", 0),
                    opt("normal", "Normal periods", 0),
                    opt("heavy", "Heavy periods", 3),
                    opt("very-heavy", "Very heavy periods", 4),
                ],
            ),
            question(
                "restless-legs",
                "Do you experience restless leg syndrome or leg cramps?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                ],
            ),
            question(
                "heart-rate",
                "Have you noticed a rapid or irregular heartbeat?",
                vec![
                    opt("no", "No", 0),
                    opt("exercise", "Only during exercise", 1),
                    opt("sometimes", "Sometimes at rest", 3),
                    opt("often", "Often at rest", 4),
                ],
            ),
        ],
    )
}

fn diabetes() -> Tool {
    tool(
        "diabetes-checker",
        "Diabetes Symptom Checker",
        "Evaluate early signs and symptoms that may indicate diabetes or prediabetes condition.",
        "General",
        Difficulty::Easy,
        "4-6 min",
        vec![
            question(
                "excessive-thirst",
                "How often do you experience excessive thirst?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                    opt("always", "Almost constantly", 4),
                ],
            ),
            question(
                "frequent-urination",
                "Do you urinate more frequently than usual?",
                vec![
                    opt("no", "No change", 0),
                    opt("slight", "Slightly more", 1),
                    opt("noticeable", "Noticeably more", 3),
                    opt("very", "Much more frequently", 4),
                ],
            ),
            question(
                "unexplained-weight",
                "Have you experienced unexplained weight loss recently?",
                vec![
                    opt("no", "No", 0),
                    opt("slight", "1-5 pounds", 2),
                    opt("moderate", "6-15 pounds", 3),
                    opt("significant", "More than 15 pounds", 4),
                ],
            ),
            question(
                "fatigue",
                "How often do you feel unusually tired or fatigued?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                    opt("always", "Almost always", 4),
                ],
            ),
            question(
                "blurred-vision",
                "Do you experience blurred vision?",
                vec![
                    opt("never", "Never", 0),
                    opt("occasionally", "Occasionally", 2),
                    opt("frequently", "Frequently", 3),
                    opt("constant", "Almost constantly", 4),
                ],
            ),
            question(
                "slow-healing",
                "Do cuts and wounds heal slower than usual?",
                vec![
                    opt("no", "No, normal healing", 0),
                    opt("slightly", "Slightly slower", 2),
                    opt("much", "Much slower", 4),
                ],
            ),
            question(
                "numbness",
                "Do you experience numbness or tingling in hands or feet?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 3),
                    opt("often", "Often", 4),
                ],
            ),
            question(
                "family-history",
                "Do you have a family history of diabetes?",
                vec![
                    opt("no", "No family history", 0),
                    opt("distant", "Distant relatives", 1),
                    opt("close", "Close relatives (parents, siblings)", 3),
                ],
            ),
        ],
    )
}

fn asthma() -> Tool {
    tool(
        "asthma-checker",
        "Asthma Symptom Checker",
        "Evaluate respiratory symptoms that may indicate asthma or breathing difficulties.",
        "Respiratory",
        Difficulty::Easy,
        "3-5 min",
        vec![
            question(
                "wheezing",
                "How often do you experience wheezing or whistling sounds when breathing?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                    opt("daily", "Daily", 4),
                ],
            ),
            question(
                "shortness-breath",
                "Do you experience shortness of breath?",
                vec![
                    opt("never", "Never", 0),
                    opt("exercise", "Only during intense exercise", 1),
                    opt("mild-activity", "During mild physical activity", 3),
                    opt("rest", "Even at rest", 4),
                ],
            ),
            question(
                "chest-tightness",
                "How often do you feel chest tightness or pressure?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                    opt("daily", "Daily", 4),
                ],
            ),
            question(
                "coughing",
                "Do you have a persistent cough, especially at night or early morning?",
                vec![
                    opt("no", "No persistent cough", 0),
                    opt("occasional", "Occasional cough", 1),
                    opt("frequent", "Frequent cough", 3),
                    opt("constant", "Almost constant cough", 4),
                ],
            ),
            question(
                "triggers",
                "Do certain triggers worsen your breathing (allergens, smoke, cold air)?",
                vec![
                    opt("no", "No specific triggers", 0),
                    opt("few", "A few specific triggers", 2),
                    opt("many", "Many different triggers", 3),
                    opt("most", "Most environmental factors", 4),
                ],
            ),
            question(
                "sleep-disruption",
                "Do breathing problems wake you up at night?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely (less than once a month)", 1),
                    opt("sometimes", "Sometimes (1-3 times a month)", 2),
                    opt("often", "Often (weekly)", 3),
                    opt("nightly", "Almost nightly", 4),
                ],
            ),
            question(
                "family-history",
                "Do you have a family history of asthma or allergies?",
                vec![
                    opt("no", "No family history", 0),
                    opt("distant", "Distant relatives", 1),
                    opt("close", "Close relatives (parents, siblings)", 2),
                ],
            ),
            question(
                "activity-limitation",
                "Do breathing problems limit your daily activities?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 3),
                    opt("often", "Often", 4),
                ],
            ),
        ],
    )
}

fn depression() -> Tool {
    tool(
        "depression-checker",
        "Depression Symptom Checker",
        "Assess symptoms related to depression and mood disorders through validated screening questions.",
        "Mental Health",
        Difficulty::Medium,
        "5-7 min",
        vec![
            question(
                "mood",
                "Over the past 2 weeks, how often have you felt down, depressed, or hopeless?",
                two_week_frequency(),
            ),
            question(
                "interest",
                "How often have you had little interest or pleasure in doing things?",
                two_week_frequency(),
            ),
            question(
                "sleep",
                "How often have you had trouble falling asleep, staying asleep, or sleeping too much?",
                two_week_frequency(),
            ),
            question(
                "energy",
                "How often have you felt tired or had little energy?",
                two_week_frequency(),
            ),
            question(
                "appetite",
                "How often have you had poor appetite or overeating?",
                two_week_frequency(),
            ),
            question(
                "self-worth",
                "How often have you felt bad about yourself or that you're a failure?",
                two_week_frequency(),
            ),
            question(
                "concentration",
                "How often have you had trouble concentrating on things?",
                two_week_frequency(),
            ),
            question(
                "psychomotor",
                "How often have you moved or spoken slowly, or been fidgety/restless?",
                two_week_frequency(),
            ),
        ],
    )
}

fn anxiety() -> Tool {
    tool(
        "anxiety-checker",
        "Anxiety Symptom Checker",
        "Evaluate anxiety symptoms and their impact on daily life through comprehensive screening questions.",
        "Mental Health",
        Difficulty::Medium,
        "4-6 min",
        vec![
            question(
                "nervousness",
                "Over the past 2 weeks, how often have you felt nervous, anxious, or on edge?",
                two_week_frequency(),
            ),
            question(
                "worry-control",
                "How often have you not been able to stop or control worrying?",
                two_week_frequency(),
            ),
            question(
                "excessive-worry",
                "How often have you worried too much about different things?",
                two_week_frequency(),
            ),
            question(
                "trouble-relaxing",
                "How often have you had trouble relaxing?",
                two_week_frequency(),
            ),
            question(
                "restlessness",
                "How often have you been so restless that it's hard to sit still?",
                two_week_frequency(),
            ),
            question(
                "irritability",
                "How often have you become easily annoyed or irritable?",
                two_week_frequency(),
            ),
            question(
                "fear",
                "How often have you felt afraid as if something awful might happen?",
                two_week_frequency(),
            ),
            question(
                "physical-symptoms",
                "Do you experience physical symptoms like rapid heartbeat, sweating, or trembling?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                ],
            ),
        ],
    )
}

fn heart_disease() -> Tool {
    tool(
        "heart-disease-checker",
        "Heart Disease Symptom Checker",
        "Assess symptoms and risk factors related to heart disease and cardiovascular health.",
        "Heart Health",
        Difficulty::Medium,
        "6-8 min",
        vec![
            question(
                "chest-pain",
                "Do you experience chest pain or discomfort?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                    opt("frequently", "Very frequently", 4),
                ],
            ),
            question(
                "shortness-breath",
                "Do you experience shortness of breath?",
                vec![
                    opt("never", "Never", 0),
                    opt("exercise", "Only during intense exercise", 1),
                    opt("stairs", "When climbing stairs", 2),
                    opt("walking", "When walking normally", 3),
                    opt("rest", "Even at rest", 4),
                ],
            ),
            question(
                "palpitations",
                "Do you experience heart palpitations or irregular heartbeat?",
                vec![
                    opt("never", "Never", 0),
                    opt("rarely", "Rarely", 1),
                    opt("sometimes", "Sometimes", 2),
                    opt("often", "Often", 3),
                ],
            ),
            question(
                "fatigue",
                "Do you experience unusual fatigue or weakness?",
                vec![
                    opt("never", "Never", 0),
                    opt("occasionally", "Occasionally", 1),
                    opt("frequently", "Frequently", 2),
                    opt("constantly", "Almost constantly", 3),
                ],
            ),
            question(
                "swelling",
                "Do you have swelling in your legs, ankles, or feet?",
                vec![
                    opt("never", "Never", 0),
                    opt("occasionally", "Occasionally", 2),
                    opt("frequently", "Frequently", 3),
                    opt("constantly", "Constant swelling", 4),
                ],
            ),
            question(
                "family-history",
                "Do you have a family history of heart disease?",
                vec![
                    opt("no", "No family history", 0),
                    opt("distant", "Distant relatives", 1),
                    opt("close", "Parents or siblings", 3),
                ],
            ),
            question(
                "smoking",
                "Do you smoke or have you smoked in the past?",
                vec![
                    opt("never", "Never smoked", 0),
                    opt("former", "Former smoker (quit >5 years ago)", 1),
                    opt("recent", "Recent former smoker (<5 years)", 2),
                    opt("current", "Current smoker", 4),
                ],
            ),
            question(
                "cholesterol",
                "Do you have high cholesterol?",
                vec![
                    opt("no", "No", 0),
                    opt("borderline", "Borderline high", 2),
                    opt("high", "High cholesterol", 3),
                    opt("unknown", "Don't know", 1),
                ],
            ),
        ],
    )
}

fn heart_attack() -> Tool {
    tool(
        "heart-attack-checker",
        "Heart Attack Symptom Checker",
        "Emergency assessment for potential heart attack symptoms - seek immediate medical attention if concerned.",
        "Heart Health",
        Difficulty::Advanced,
        "2-3 min",
        vec![
            question(
                "chest-pressure",
                "Are you experiencing crushing chest pain or pressure?",
                vec![
                    opt("no", "No", 0),
                    opt("mild", "Mild discomfort", 2),
                    opt("moderate", "Moderate pressure", 3),
                    opt("severe", "Severe crushing pain", 4),
                ],
            ),
            question(
                "pain-radiation",
                "Does the pain spread to your arm, neck, jaw, or back?",
                vec![
                    opt("no", "No", 0),
                    opt("arm", "To left arm", 3),
                    opt("multiple", "To multiple areas", 4),
                ],
            ),
            question(
                "shortness-breath",
                "Are you having severe shortness of breath?",
                vec![
                    opt("no", "No", 0),
                    opt("mild", "Mild", 1),
                    opt("moderate", "Moderate", 2),
                    opt("severe", "Severe", 4),
                ],
            ),
            question(
                "sweating",
                "Are you sweating profusely or feeling clammy?",
                vec![
                    opt("no", "No", 0),
                    opt("mild", "Mild sweating", 2),
                    opt("profuse", "Profuse sweating", 3),
                ],
            ),
            question(
                "nausea",
                "Are you experiencing nausea or vomiting?",
                vec![
                    opt("no", "No", 0),
                    opt("nausea", "Nausea only", 2),
                    opt("vomiting", "Vomiting", 3),
                ],
            ),
            question(
                "lightheadedness",
                "Are you feeling lightheaded or dizzy?",
                vec![
                    opt("no", "No", 0),
                    opt("mild", "Mild dizziness", 1),
                    opt("severe", "Severe lightheadedness", 3),
                ],
            ),
            question(
                "symptom-onset",
                "How quickly did these symptoms come on?",
                vec![
                    opt("gradual", "Gradually over hours/days", 1),
                    opt("sudden", "Suddenly", 3),
                    opt("rapid", "Very rapidly", 4),
                ],
            ),
        ],
    )
}
