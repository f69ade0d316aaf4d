//! React Tools - interactive scaffolder for React components and layouts

use anyhow::{Context, Result};
use clap::Parser;
use react_scaffold_core::{GenerationPlan, ProductConfig};

/// React Tools product configuration
#[derive(Clone)]
pub struct ReactToolsConfig;

impl ProductConfig for ReactToolsConfig {
    fn name(&self) -> &'static str {
        "react-tools"
    }

    fn display_name(&self) -> &'static str {
        "React Tools"
    }

    fn next_steps(&self, plan: &GenerationPlan) -> Vec<String> {
        let mut steps = vec![format!(
            "Import it: import {} from \"{}\"",
            plan.pascal_name,
            plan.base_directory.display()
        )];

        if plan.with_interface {
            steps.push(format!(
                "Add props to {}Props in {}.interface.ts",
                plan.pascal_name, plan.pascal_name
            ));
        }

        if let Some(filename) = plan.test.filename() {
            steps.push(format!("Run the render test in {}", filename));
        }

        steps
    }
}

/// The flow is fully interactive; only `--help` and `--version` are accepted.
#[derive(Parser, Debug)]
#[command(name = "react-tools")]
#[command(about = "Interactive scaffolder for React components and layouts")]
#[command(version)]
pub struct Args {}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> Result<()> {
    setup_logging();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = ReactToolsConfig;
    log::debug!("{} starting", config.name());

    let result = react_scaffold_core::run(&config).context("Scaffolding failed");

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
