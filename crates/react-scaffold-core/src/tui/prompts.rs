//! Charm-style CLI prompts using cliclack

use crate::plan::{FileSpec, GenerationPlan};
use crate::product::ProductConfig;
use crate::prompt::Prompter;
use crate::session::{collect_answers, generate};
use crate::writer::{FileOutcome, LocalFs, OverwriteChoice, WriteOutcome};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::Path;

/// [`Prompter`] backed by cliclack widgets
#[derive(Debug, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn input(&mut self, message: &str, default: &str) -> io::Result<Option<String>> {
        let mut input = cliclack::input(message).required(false);
        if !default.is_empty() {
            input = input.placeholder(default);
        }

        let answer: String = input.interact()?;
        Ok(Some(answer).filter(|a| !a.trim().is_empty()))
    }

    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(message).initial_value(default).interact()
    }

    fn choose_overwrite(&mut self, path: &Path) -> io::Result<OverwriteChoice> {
        cliclack::select(format!("File exists: {}", path.display()))
            .item(OverwriteChoice::No, "No", "keep this file")
            .item(OverwriteChoice::Yes, "Yes", "overwrite this file")
            .item(OverwriteChoice::All, "All", "overwrite this and every later conflict")
            .item(OverwriteChoice::SkipAll, "Skip all", "keep this and every later conflict")
            .initial_value(OverwriteChoice::No)
            .interact()
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::warning(message)
    }
}

/// Run the CLI with interactive prompts
pub fn run<C: ProductConfig>(config: &C) -> Result<()> {
    cliclack::intro(config.display_name())?;
    cliclack::note("How it works", config.usage_notes())?;

    let mut prompter = ClackPrompter;

    // Step 1: Collect answers
    let answers = collect_answers(&mut prompter)?;

    // Step 2: Build and show the plan
    let plan = answers.to_plan()?;
    show_plan(&plan)?;

    // Step 3: Confirm
    if !prompter.confirm("Proceed with generation?", true)? {
        cliclack::outro_cancel("Aborted.")?;
        return Ok(());
    }

    // Step 4: Write files
    let outcomes = generate(&plan, &LocalFs, &mut prompter, |outcome| {
        let _ = report_outcome(outcome);
    })
    .with_context(|| format!("Failed to generate {}", plan.pascal_name))?;

    let written = outcomes.iter().filter(|o| o.outcome.is_written()).count();
    cliclack::log::info(format!(
        "Wrote {} of {} files in {}",
        written,
        outcomes.len(),
        plan.base_directory.display()
    ))?;

    // Step 5: Show next steps
    print_next_steps(config, &plan)?;

    Ok(())
}

fn show_plan(plan: &GenerationPlan) -> Result<()> {
    let describe = |spec: &FileSpec| match spec {
        FileSpec::Skip => "No".yellow().to_string(),
        FileSpec::Default { filename } => filename.green().to_string(),
        FileSpec::Custom { filename } => format!("{} {}", filename.green(), "(custom)".dimmed()),
    };

    let mut lines = vec![
        format!("{:<11} {}", "Name".cyan(), plan.pascal_name.bold()),
        format!("{:<11} {}", "Suffix".cyan(), plan.suffix.bold()),
        format!(
            "{:<11} {}  {}",
            "Directory".cyan(),
            plan.base_directory.display().to_string().bold(),
            "(always creates a <Name> folder)".dimmed()
        ),
        format!(
            "{:<11} {}",
            "Interface".cyan(),
            if plan.with_interface {
                "Yes".green()
            } else {
                "No".yellow()
            }
        ),
        format!("{:<11} {}", "Test".cyan(), describe(&plan.test)),
        format!("{:<11} {}", "Controller".cyan(), describe(&plan.controller)),
        format!("{}", "Files".cyan()),
    ];

    for (_, path) in plan.files() {
        lines.push(format!("  - {}", path.display()));
    }

    cliclack::note("Planned generation", lines.join("\n"))?;
    Ok(())
}

fn report_outcome(outcome: &FileOutcome) -> io::Result<()> {
    let path = outcome.path.display();
    match outcome.outcome {
        WriteOutcome::Created => cliclack::log::success(format!("Wrote {}", path)),
        WriteOutcome::Overwritten => cliclack::log::success(format!("Overwrote {}", path)),
        WriteOutcome::Skipped => cliclack::log::remark(format!("Skipped {}", path)),
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, plan: &GenerationPlan) -> Result<()> {
    let steps = config.next_steps(plan);

    if !steps.is_empty() {
        println!();
        println!("  Next steps");
        println!();

        for (i, step) in steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step);
        }
    }

    cliclack::outro("Done.")?;

    Ok(())
}
