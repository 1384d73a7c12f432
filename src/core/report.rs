use crate::config::{Config, FailOn};
use crate::core::risk::RiskLevel;
use crate::core::score::ScoreSummary;
use serde::Serialize;

const DISCLAIMER: &str = "This assessment is for informational purposes only and is not a \
substitute for professional medical advice, diagnosis, or treatment. Always consult with a \
qualified healthcare provider for proper medical evaluation and personalized healthcare decisions.";

#[derive(Debug, Clone, Serialize)]
pub struct AnswerDetail {
    pub question_id: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub weight: u32,
    pub max_weight: u32,
}

impl AnswerDetail {
    pub fn is_answered(&self) -> bool {
        self.label.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Counts {
    pub answered: usize,
    pub skipped: usize,
    pub total: usize,
}

impl Counts {
    pub fn from_details(details: &[AnswerDetail]) -> Self {
        let answered = details.iter().filter(|detail| detail.is_answered()).count();
        Self {
            answered,
            skipped: details.len() - answered,
            total: details.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub fail_on: FailOn,
    pub require_complete: bool,
}

#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub tool_id: String,
    pub tool_title: String,
    pub summary: ScoreSummary,
    pub risk: RiskLevel,
    pub message: String,
    pub recommendations: Vec<String>,
    pub details: Vec<AnswerDetail>,
    pub counts: Counts,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub tool_id: String,
    pub tool_title: String,
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub risk: RiskLevel,
    pub message: String,
    pub recommendations: Vec<String>,
    pub details: Vec<AnswerDetail>,
    pub counts: Counts,
    pub config: ConfigSummary,
}

impl From<&AssessmentReport> for JsonReport {
    fn from(report: &AssessmentReport) -> Self {
        Self {
            tool_id: report.tool_id.clone(),
            tool_title: report.tool_title.clone(),
            total_score: report.summary.total_score,
            max_score: report.summary.max_score,
            percentage: report.summary.percentage,
            risk: report.risk,
            message: report.message.clone(),
            recommendations: report.recommendations.clone(),
            details: report.details.clone(),
            counts: report.counts.clone(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(risk: RiskLevel, counts: &Counts, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if risk.meets_fail_on(cfg.general.fail_on) {
        reasons.push(format!(
            "risk level {} meets fail_on {}",
            risk.as_str(),
            cfg.general.fail_on
        ));
    }

    if cfg.general.require_complete && counts.skipped > 0 {
        reasons.push(format!(
            "{} of {} questions unanswered",
            counts.skipped, counts.total
        ));
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(report: &AssessmentReport) {
    println!("{} - Assessment Results", report.tool_title);
    println!(
        "Score: {} out of {} ({}%)",
        report.summary.total_score,
        report.summary.max_score,
        report.summary.percentage.round()
    );
    println!("Risk Level: {}", report.risk.colored());
    println!();
    println!("{}", report.message);

    println!();
    println!("Recommendations:");
    for recommendation in &report.recommendations {
        println!("- {}", recommendation);
    }

    println!();
    println!(
        "Answers ({} of {} questions):",
        report.counts.answered, report.counts.total
    );
    for detail in &report.details {
        match (&detail.label, detail.option_id.as_deref()) {
            (Some(label), _) => println!(
                "[{}/{}] {} - {}",
                detail.weight, detail.max_weight, detail.prompt, label
            ),
            (None, Some(option_id)) => println!(
                "[-/{}] {} - unrecognized answer {:?}",
                detail.max_weight, detail.prompt, option_id
            ),
            (None, None) => println!("[-/{}] {} - skipped", detail.max_weight, detail.prompt),
        }
    }

    println!();
    println!("{}", DISCLAIMER);

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn detail(answered: bool) -> AnswerDetail {
        AnswerDetail {
            question_id: "q".to_string(),
            prompt: "prompt".to_string(),
            option_id: answered.then(|| "yes".to_string()),
            label: answered.then(|| "Yes".to_string()),
            weight: if answered { 2 } else { 0 },
            max_weight: 4,
        }
    }

    #[test]
    fn counts_split_answered_and_skipped() {
        let counts = Counts::from_details(&[detail(true), detail(false), detail(true)]);
        assert_eq!(counts.answered, 2);
        assert_eq!(counts.skipped, 1);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn exit_ok_with_default_config() {
        let cfg = Config::default();
        let counts = Counts::from_details(&[detail(false)]);
        assert!(evaluate_exit(RiskLevel::High, &counts, &cfg).ok);
    }

    #[test]
    fn fail_on_high_trips_only_on_high() {
        let mut cfg = Config::default();
        cfg.general.fail_on = FailOn::High;
        let counts = Counts::default();

        assert!(evaluate_exit(RiskLevel::Moderate, &counts, &cfg).ok);
        assert!(!evaluate_exit(RiskLevel::High, &counts, &cfg).ok);
    }

    #[test]
    fn fail_on_moderate_includes_high() {
        let mut cfg = Config::default();
        cfg.general.fail_on = FailOn::Moderate;
        let counts = Counts::default();

        assert!(evaluate_exit(RiskLevel::Mild, &counts, &cfg).ok);
        assert!(!evaluate_exit(RiskLevel::Moderate, &counts, &cfg).ok);
        assert!(!evaluate_exit(RiskLevel::High, &counts, &cfg).ok);
    }

    #[test]
    fn require_complete_reports_skipped_questions() {
        let mut cfg = Config::default();
        cfg.general.require_complete = true;
        let counts = Counts::from_details(&[detail(true), detail(false)]);

        let exit = evaluate_exit(RiskLevel::Low, &counts, &cfg);
        assert!(!exit.ok);
        assert!(exit.reason_line().contains("1 of 2"));
    }
}
