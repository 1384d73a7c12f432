use crate::catalog::{Question, Tool};
use crate::core::AnswerSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScoreSummary {
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
}

pub fn score(tool: &Tool, answers: &AnswerSet) -> ScoreSummary {
    let total_score = tool
        .questions
        .iter()
        .map(|question| answered_weight(question, answers))
        .sum();
    let max_score = max_score(tool);

    ScoreSummary {
        total_score,
        max_score,
        percentage: percentage(total_score, max_score),
    }
}

pub fn max_score(tool: &Tool) -> u32 {
    tool.questions.iter().map(Question::max_weight).sum()
}

// unanswered questions and selections that match no option contribute 0.
fn answered_weight(question: &Question, answers: &AnswerSet) -> u32 {
    answers
        .get(&question.id)
        .and_then(|option_id| question.option(option_id))
        .map(|option| option.weight)
        .unwrap_or(0)
}

pub fn percentage(total_score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    f64::from(total_score) / f64::from(max_score) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, OptionItem, Question, Tool};

    fn three_weight_question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("prompt {}", id),
            options: vec![
                OptionItem {
                    id: "none".to_string(),
                    label: "None".to_string(),
                    weight: 0,
                },
                OptionItem {
                    id: "some".to_string(),
                    label: "Some".to_string(),
                    weight: 1,
                },
                OptionItem {
                    id: "severe".to_string(),
                    label: "Severe".to_string(),
                    weight: 3,
                },
            ],
        }
    }

    fn two_question_tool() -> Tool {
        Tool {
            id: "example-checker".to_string(),
            title: "Example Checker".to_string(),
            description: "example".to_string(),
            category: "General".to_string(),
            difficulty: Difficulty::Easy,
            estimated_time: "1 min".to_string(),
            questions: vec![three_weight_question("first"), three_weight_question("second")],
        }
    }

    #[test]
    fn max_score_sums_the_heaviest_option_per_question() {
        assert_eq!(max_score(&two_question_tool()), 6);
    }

    #[test]
    fn full_marks_yield_one_hundred_percent() {
        let tool = two_question_tool();
        let mut answers = AnswerSet::new();
        answers.select("first", "severe");
        answers.select("second", "severe");

        let summary = score(&tool, &answers);
        assert_eq!(summary.total_score, 6);
        assert_eq!(summary.max_score, 6);
        assert_eq!(summary.percentage, 100.0);
    }

    #[test]
    fn unanswered_questions_contribute_zero() {
        let tool = two_question_tool();
        let mut answers = AnswerSet::new();
        answers.select("first", "some");

        let summary = score(&tool, &answers);
        assert_eq!(summary.total_score, 1);
        assert_eq!(summary.max_score, 6);
    }

    #[test]
    fn unmatched_option_ids_are_silently_skipped() {
        let tool = two_question_tool();
        let mut answers = AnswerSet::new();
        answers.select("first", "no-such-option");
        answers.select("second", "severe");

        let summary = score(&tool, &answers);
        assert_eq!(summary.total_score, 3);
    }

    #[test]
    fn total_never_exceeds_max() {
        let tool = two_question_tool();
        let mut answers = AnswerSet::new();
        for question in &tool.questions {
            answers.select(&question.id, "severe");
        }

        let summary = score(&tool, &answers);
        assert!(summary.total_score <= summary.max_score);
    }

    #[test]
    fn zero_max_score_defines_percentage_as_zero() {
        assert_eq!(percentage(0, 0), 0.0);
    }
}
