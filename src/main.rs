mod catalog;
mod cli;
mod config;
mod core;
mod profiles;
mod session;

use anyhow::{Result, bail};
use catalog::{Catalog, Tool, ToolSummary};
use clap::Parser;
use cli::{AssessArgs, Cli, Commands, InitArgs, ListArgs, RunArgs, ShowArgs};
use config::Config;
use core::AnswerSet;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => cmd_list(args),
        Commands::Categories(args) => cmd_categories(args),
        Commands::Show(args) => cmd_show(args),
        Commands::Assess(args) => cmd_assess(args),
        Commands::Init(args) => cmd_init(args),
    }
}

fn cmd_list(args: ListArgs) -> Result<i32> {
    let (cfg, catalog) = load_environment(&args.run)?;
    let tools = catalog.filter(args.category.as_deref(), args.search.as_deref());

    if output_json(&args.run, &cfg) {
        let summaries: Vec<ToolSummary> = tools.iter().map(|tool| ToolSummary::from(*tool)).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(0);
    }

    if tools.is_empty() {
        println!("no tools match the given filters");
        return Ok(0);
    }

    for tool in tools {
        println!(
            "{:<24} {} [{} / {} / {}]",
            tool.id,
            tool.title,
            tool.category,
            tool.difficulty.as_str(),
            tool.estimated_time
        );
    }

    Ok(0)
}

fn cmd_categories(args: RunArgs) -> Result<i32> {
    let (cfg, catalog) = load_environment(&args)?;
    let categories = catalog.list_categories();

    if output_json(&args, &cfg) {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        for category in categories {
            println!("{}", category);
        }
    }

    Ok(0)
}

fn cmd_show(args: ShowArgs) -> Result<i32> {
    let (cfg, catalog) = load_environment(&args.run)?;
    let tool = find_tool(&catalog, &args.tool)?;

    if output_json(&args.run, &cfg) {
        println!("{}", serde_json::to_string_pretty(tool)?);
        return Ok(0);
    }

    println!("{}", tool.title);
    println!("{}", tool.description);
    println!(
        "category: {}  difficulty: {}  estimated time: {}",
        tool.category,
        tool.difficulty.as_str(),
        tool.estimated_time
    );
    println!("questions: {}", tool.questions.len());

    if args.full {
        for (index, question) in tool.questions.iter().enumerate() {
            println!();
            println!("{}. {} ({})", index + 1, question.prompt, question.id);
            for option in &question.options {
                println!("   [{}] {} ({})", option.weight, option.label, option.id);
            }
        }
    }

    Ok(0)
}

fn cmd_assess(args: AssessArgs) -> Result<i32> {
    let (cfg, catalog) = load_environment(&args.run)?;
    let tool = find_tool(&catalog, &args.tool)?;

    let answers = collect_answers(&args, tool)?;
    let report = core::run_assessment(tool, &answers, &cfg);

    if output_json(&args.run, &cfg) {
        let json_report = core::report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn cmd_init(args: InitArgs) -> Result<i32> {
    if args.config.is_some() {
        eprintln!("warning: --config is ignored by `fitscan init`; writing ./fitscan.toml");
    }

    let path = std::env::current_dir()?.join("fitscan.toml");
    config::write_default_config(&path)?;
    println!("created {}", path.display());
    Ok(0)
}

fn load_environment(run: &RunArgs) -> Result<(Config, Catalog)> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(run.config.as_deref(), &cwd)?;
    let catalog = catalog::resolve(run.catalog.as_deref(), &loaded.config)?;
    Ok((loaded.config, catalog))
}

fn output_json(run: &RunArgs, cfg: &Config) -> bool {
    run.json || cfg.general.json
}

fn find_tool<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Tool> {
    match catalog.get_tool(id) {
        Some(tool) => Ok(tool),
        None => bail!(
            "unknown tool id {:?} (run `fitscan list` to see available tools)",
            id
        ),
    }
}

fn collect_answers(args: &AssessArgs, tool: &Tool) -> Result<AnswerSet> {
    if args.answers_file.is_none() && args.answers.is_empty() {
        return session::run(tool);
    }

    let mut answers = match &args.answers_file {
        Some(path) => AnswerSet::from_json_file(path)?,
        None => AnswerSet::new(),
    };
    answers.merge(AnswerSet::from_pairs(&args.answers)?);
    Ok(answers)
}
