use crate::catalog::Tool;
use crate::core::AnswerSet;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

enum Choice {
    Pick(usize),
    Skip,
}

pub fn run(tool: &Tool) -> Result<AnswerSet> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_all(tool, &mut stdin.lock(), &mut stdout.lock())
}

fn prompt_all(tool: &Tool, input: &mut impl BufRead, output: &mut impl Write) -> Result<AnswerSet> {
    let total = tool.questions.len();
    writeln!(
        output,
        "{} ({} questions, about {})",
        tool.title, total, tool.estimated_time
    )?;

    let mut answers = AnswerSet::new();
    for (index, question) in tool.questions.iter().enumerate() {
        writeln!(output)?;
        writeln!(output, "Question {} of {}: {}", index + 1, total, question.prompt)?;
        for (number, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {}", number + 1, option.label)?;
        }

        loop {
            write!(
                output,
                "answer [1-{}], or s to skip: ",
                question.options.len()
            )?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("failed reading answer from input")?;
            if read == 0 {
                // EOF ends the session; remaining questions count as skipped.
                return Ok(answers);
            }

            match parse_choice(line.trim(), question.options.len()) {
                Some(Choice::Pick(picked)) => {
                    answers.select(&question.id, &question.options[picked].id);
                    break;
                }
                Some(Choice::Skip) => break,
                None => writeln!(
                    output,
                    "enter a number between 1 and {}, or s to skip",
                    question.options.len()
                )?,
            }
        }
    }

    Ok(answers)
}

fn parse_choice(input: &str, option_count: usize) -> Option<Choice> {
    if input.eq_ignore_ascii_case("s") || input.eq_ignore_ascii_case("skip") {
        return Some(Choice::Skip);
    }

    match input.parse::<usize>() {
        Ok(number) if (1..=option_count).contains(&number) => Some(Choice::Pick(number - 1)),
        _ => None,
    }
}
