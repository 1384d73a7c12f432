pub mod advice;
pub mod report;
pub mod risk;
pub mod score;

use crate::catalog::Tool;
use crate::config::Config;
use crate::core::report::{AnswerDetail, AssessmentReport, ConfigSummary, Counts};
use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The user's recorded selections for one assessment session, keyed by
/// question id. At most one option per question; later selections replace
/// earlier ones.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    selected: HashMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, question_id: &str, option_id: &str) {
        self.selected
            .insert(question_id.to_string(), option_id.to_string());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.selected.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Parses repeated `--answer question-id=option-id` pairs.
    pub fn from_pairs(pairs: &[String]) -> Result<Self> {
        let mut answers = Self::new();
        for pair in pairs {
            let Some((question_id, option_id)) = pair.split_once('=') else {
                bail!("invalid answer {:?}, expected question-id=option-id", pair);
            };
            if question_id.is_empty() || option_id.is_empty() {
                bail!("invalid answer {:?}, expected question-id=option-id", pair);
            }
            answers.select(question_id, option_id);
        }
        Ok(answers)
    }

    /// Reads a JSON object mapping question ids to option ids.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed reading answers file {}", path.display()))?;
        let selected = serde_json::from_str::<HashMap<String, String>>(&raw)
            .with_context(|| format!("failed parsing answers file {}", path.display()))?;
        Ok(Self { selected })
    }

    /// Overlays `other` on top of self; pairs passed on the command line
    /// win over entries from an answers file.
    pub fn merge(&mut self, other: AnswerSet) {
        self.selected.extend(other.selected);
    }
}

pub fn run_assessment(tool: &Tool, answers: &AnswerSet, cfg: &Config) -> AssessmentReport {
    let summary = score::score(tool, answers);
    let risk = risk::classify_risk(summary.percentage, &tool.id);
    let details = build_details(tool, answers);
    let counts = Counts::from_details(&details);
    let exit = report::evaluate_exit(risk, &counts, cfg);

    AssessmentReport {
        tool_id: tool.id.clone(),
        tool_title: tool.title.clone(),
        summary,
        risk,
        message: advice::result_message(&tool.id, risk),
        recommendations: advice::recommendations_for(&tool.id, risk),
        details,
        counts,
        config: ConfigSummary {
            fail_on: cfg.general.fail_on,
            require_complete: cfg.general.require_complete,
        },
        exit,
    }
}

fn build_details(tool: &Tool, answers: &AnswerSet) -> Vec<AnswerDetail> {
    tool.questions
        .iter()
        .map(|question| {
            let option_id = answers.get(&question.id);
            let matched = option_id.and_then(|id| question.option(id));

            AnswerDetail {
                question_id: question.id.clone(),
                prompt: question.prompt.clone(),
                option_id: option_id.map(str::to_string),
                label: matched.map(|option| option.label.clone()),
                weight: matched.map(|option| option.weight).unwrap_or(0),
                max_weight: question.max_weight(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::risk::RiskLevel;

    #[test]
    fn pairs_parse_and_later_entries_win() {
        let answers = AnswerSet::from_pairs(&[
            "fatigue=often".to_string(),
            "fatigue=never".to_string(),
        ])
        .unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("fatigue"), Some("never"));
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(AnswerSet::from_pairs(&["fatigue".to_string()]).is_err());
        assert!(AnswerSet::from_pairs(&["=often".to_string()]).is_err());
        assert!(AnswerSet::from_pairs(&["fatigue=".to_string()]).is_err());
    }

    #[test]
    fn merge_prefers_the_overlay() {
        let mut base = AnswerSet::from_pairs(&["mood=not-at-all".to_string()]).unwrap();
        let overlay = AnswerSet::from_pairs(&["mood=nearly-every".to_string()]).unwrap();
        base.merge(overlay);
        assert_eq!(base.get("mood"), Some("nearly-every"));
    }

    #[test]
    fn assessment_report_carries_scores_risk_and_advice() {
        let catalog = Catalog::builtin();
        let tool = catalog.get_tool("heart-attack-checker").unwrap();
        let mut answers = AnswerSet::new();
        for question in &tool.questions {
            let heaviest = question
                .options
                .iter()
                .max_by_key(|option| option.weight)
                .unwrap();
            answers.select(&question.id, &heaviest.id);
        }

        let report = run_assessment(tool, &answers, &Config::default());
        assert_eq!(report.summary.total_score, report.summary.max_score);
        assert_eq!(report.summary.percentage, 100.0);
        assert_eq!(report.risk, RiskLevel::High);
        assert!(report.message.contains("emergency"));
        assert_eq!(report.counts.skipped, 0);
        assert!(report.exit.ok);
    }

    #[test]
    fn skipped_questions_show_up_in_details() {
        let catalog = Catalog::builtin();
        let tool = catalog.get_tool("anemia-checker").unwrap();
        let answers = AnswerSet::from_pairs(&["fatigue=often".to_string()]).unwrap();

        let report = run_assessment(tool, &answers, &Config::default());
        assert_eq!(report.counts.answered, 1);
        assert_eq!(report.counts.skipped, tool.questions.len() - 1);
        assert_eq!(report.summary.total_score, 3);
    }
}
