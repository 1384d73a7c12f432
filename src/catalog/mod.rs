pub mod builtin;

use crate::config::Config;
use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// tool, question, and option ids are kebab-case slugs; answer files and
// --answer pairs refer to them verbatim.
static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid id regex"));

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<OptionItem>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&OptionItem> {
        self.options.iter().find(|option| option.id == option_id)
    }

    pub fn max_weight(&self) -> u32 {
        self.options
            .iter()
            .map(|option| option.weight)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: String,
    pub label: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub question_count: usize,
}

impl From<&Tool> for ToolSummary {
    fn from(tool: &Tool) -> Self {
        Self {
            id: tool.id.clone(),
            title: tool.title.clone(),
            category: tool.category.clone(),
            difficulty: tool.difficulty,
            estimated_time: tool.estimated_time.clone(),
            question_count: tool.questions.len(),
        }
    }
}

pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            tools: builtin::tools().to_vec(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed reading catalog file {}", path.display()))?;
        let tools = serde_json::from_str::<Vec<Tool>>(&raw)
            .with_context(|| format!("failed parsing catalog file {}", path.display()))?;

        let catalog = Self { tools };
        catalog
            .validate()
            .with_context(|| format!("invalid catalog file {}", path.display()))?;
        Ok(catalog)
    }

    pub fn list_tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get_tool(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    pub fn list_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tools
            .iter()
            .map(|tool| tool.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn filter(&self, category: Option<&str>, search: Option<&str>) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|tool| {
                category.is_none_or(|wanted| tool.category.eq_ignore_ascii_case(wanted))
            })
            .filter(|tool| search.is_none_or(|term| matches_search(tool, term)))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.tools.is_empty() {
            bail!("catalog contains no tools");
        }

        let mut tool_ids = HashSet::new();
        for tool in &self.tools {
            check_id("tool", &tool.id)?;
            if !tool_ids.insert(tool.id.as_str()) {
                bail!("duplicate tool id {}", tool.id);
            }
            if tool.questions.is_empty() {
                bail!("tool {} has no questions", tool.id);
            }

            let mut question_ids = HashSet::new();
            for question in &tool.questions {
                check_id("question", &question.id)?;
                if !question_ids.insert(question.id.as_str()) {
                    bail!("duplicate question id {} in tool {}", question.id, tool.id);
                }
                if question.options.is_empty() {
                    bail!("question {} in tool {} has no options", question.id, tool.id);
                }

                let mut option_ids = HashSet::new();
                for option in &question.options {
                    check_id("option", &option.id)?;
                    if !option_ids.insert(option.id.as_str()) {
                        bail!(
                            "duplicate option id {} in question {} of tool {}",
                            option.id,
                            question.id,
                            tool.id
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

pub fn resolve(cli_catalog_path: Option<&Path>, cfg: &Config) -> Result<Catalog> {
    if let Some(path) = cli_catalog_path {
        return Catalog::load(path);
    }

    if let Some(path) = cfg.catalog.path.as_deref().filter(|path| !path.is_empty()) {
        return Catalog::load(Path::new(path));
    }

    Ok(Catalog::builtin())
}

fn matches_search(tool: &Tool, term: &str) -> bool {
    let needle = term.to_lowercase();
    tool.title.to_lowercase().contains(&needle)
        || tool.description.to_lowercase().contains(&needle)
}

fn check_id(kind: &str, id: &str) -> Result<()> {
    if !ID_RE.is_match(id) {
        bail!("{} id {:?} is not a lowercase kebab-case slug", kind, id);
    }
    Ok(())
}
